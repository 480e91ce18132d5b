/*
[INPUT]:  Messages to sign and wallet capability requirements
[OUTPUT]: Signature strings and custodial wallet handles
[POS]:    Auth layer - wallet integration abstractions
[UPDATE]: When adding new wallet types or changing signature format
*/

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::http::Result;
use crate::types::ProviderConfig;

/// Trait for wallets whose key the caller holds locally.
///
/// The trait is async to support hardware wallets and external signers.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Get the wallet address
    fn address(&self) -> &str;

    /// Sign a message and return the 0x-prefixed hex signature
    async fn sign_message(&self, message: &str) -> Result<String>;
}

/// Capability interface of a connected custodial wallet. The SDK depends
/// only on this trait, never on a concrete custodial library.
///
/// `sign_message` may present out-of-band UI to the end user and therefore
/// suspend indefinitely; the SDK imposes no timeout.
#[async_trait]
pub trait CustodialWallet: Send + Sync {
    /// Current wallet address. Stable for the lifetime of the connection.
    async fn address(&self) -> Result<String>;

    /// Sign a message and return the 0x-prefixed hex signature
    async fn sign_message(&self, message: &str) -> Result<String>;

    /// Tear down the provider-side session. Returns the provider's
    /// confirmation.
    async fn disconnect(&self) -> Result<bool>;
}

/// Builds a custodial wallet connection from the bootstrap configuration
/// served by the network endpoint. For first-time users this typically
/// walks them through a provider UI.
#[async_trait]
pub trait CustodialConnector: Send + Sync {
    async fn open(&self, config: &ProviderConfig) -> Result<Arc<dyn CustodialWallet>>;
}

/// Mock local signer returning a canned signature, for tests
#[derive(Debug, Clone)]
pub struct MockWalletSigner {
    address: String,
    signature: String,
}

impl MockWalletSigner {
    pub fn new(address: &str, signature: &str) -> Self {
        Self {
            address: address.to_string(),
            signature: signature.to_string(),
        }
    }
}

#[async_trait]
impl WalletSigner for MockWalletSigner {
    fn address(&self) -> &str {
        &self.address
    }

    async fn sign_message(&self, _message: &str) -> Result<String> {
        Ok(self.signature.clone())
    }
}

/// Mock custodial wallet counting sign prompts, for tests
#[derive(Debug)]
pub struct MockCustodialWallet {
    address: String,
    signature: String,
    sign_calls: AtomicUsize,
}

impl MockCustodialWallet {
    pub fn new(address: &str, signature: &str) -> Self {
        Self {
            address: address.to_string(),
            signature: signature.to_string(),
            sign_calls: AtomicUsize::new(0),
        }
    }

    /// Number of times the user would have been prompted to sign
    pub fn sign_calls(&self) -> usize {
        self.sign_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CustodialWallet for MockCustodialWallet {
    async fn address(&self) -> Result<String> {
        Ok(self.address.clone())
    }

    async fn sign_message(&self, _message: &str) -> Result<String> {
        self.sign_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.signature.clone())
    }

    async fn disconnect(&self) -> Result<bool> {
        Ok(true)
    }
}

/// Mock connector handing out a fixed wallet and counting bootstraps, for
/// tests
pub struct MockConnector {
    wallet: Arc<dyn CustodialWallet>,
    open_calls: AtomicUsize,
}

impl MockConnector {
    pub fn new(wallet: Arc<dyn CustodialWallet>) -> Self {
        Self {
            wallet,
            open_calls: AtomicUsize::new(0),
        }
    }

    pub fn open_calls(&self) -> usize {
        self.open_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CustodialConnector for MockConnector {
    async fn open(&self, _config: &ProviderConfig) -> Result<Arc<dyn CustodialWallet>> {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.wallet.clone())
    }
}
