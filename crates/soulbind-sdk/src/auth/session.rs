/*
[INPUT]:  Custodial connector, network bootstrap config, sign requests
[OUTPUT]: Connected email-wallet address and cached authorizations
[POS]:    Auth layer - email-wallet session state machine
[UPDATE]: When the connect/sign/disconnect flow changes
*/

use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, trace};

use crate::auth::message::{MessageBuilder, verify_signature};
use crate::auth::wallet::{CustodialConnector, CustodialWallet};
use crate::http::{Result, SoulbindClient, SoulbindError};
use crate::types::{Authorization, ProviderConfig};

#[derive(Default)]
struct SessionState {
    wallet: Option<Arc<dyn CustodialWallet>>,
    address: Option<String>,
    authorization: Option<Authorization>,
}

/// Session for users who log in with an email address instead of bringing
/// their own wallet. Key management is delegated to a custodial provider;
/// the session tracks the resulting address and caches the last signed
/// authorization so the user is not re-prompted for every operation.
///
/// States: disconnected (initial) and connected (address known, wallet
/// available). The provider bootstrap configuration is fetched at most once
/// per session, even under concurrent `connect` calls; the wallet handle
/// survives `disconnect` and is reused by the next `connect`.
pub struct EmailWalletSession {
    connector: Arc<dyn CustodialConnector>,
    config: OnceCell<ProviderConfig>,
    state: Mutex<SessionState>,
    builder: MessageBuilder,
}

impl EmailWalletSession {
    pub fn new(connector: Arc<dyn CustodialConnector>) -> Self {
        Self::with_message_builder(connector, MessageBuilder::new())
    }

    /// Session with an explicit message builder, e.g. one with pinned time
    /// and entropy sources
    pub fn with_message_builder(
        connector: Arc<dyn CustodialConnector>,
        builder: MessageBuilder,
    ) -> Self {
        Self {
            connector,
            config: OnceCell::new(),
            state: Mutex::new(SessionState::default()),
            builder,
        }
    }

    /// Connect (or re-connect) the email wallet and return its address.
    ///
    /// First-time connection may present the provider's UI. Calling this
    /// while already connected re-derives the stable address from the
    /// retained wallet handle without a new provider session.
    pub async fn connect(&self, client: &SoulbindClient) -> Result<String> {
        let config = self
            .config
            .get_or_try_init(|| async {
                let envelope = client.provider_config().await?;
                envelope.success.ok_or_else(|| {
                    SoulbindError::InvalidResponse(
                        "network bootstrap response carried no provider configuration".to_string(),
                    )
                })
            })
            .await?;

        let mut state = self.state.lock().await;
        let wallet = match &state.wallet {
            Some(wallet) => wallet.clone(),
            None => {
                let wallet = self.connector.open(config).await?;
                state.wallet = Some(wallet.clone());
                wallet
            }
        };

        let address = wallet.address().await?;
        debug!(address = %address, "email wallet connected");
        state.address = Some(address.clone());

        Ok(address)
    }

    /// Get a signed authorization for the connected address.
    ///
    /// Returns `Ok(None)` when no wallet is connected; callers must check
    /// for presence. A cached authorization is reused only if its signer
    /// still recovers to the current address, so a changed address
    /// invalidates the cache implicitly; otherwise the wallet is asked for
    /// a fresh signature over a newly built message.
    pub async fn get_signature(&self) -> Result<Option<Authorization>> {
        let mut state = self.state.lock().await;
        let (wallet, address) = match (&state.wallet, &state.address) {
            (Some(wallet), Some(address)) => (wallet.clone(), address.clone()),
            _ => return Ok(None),
        };

        if let Some(cached) = &state.authorization {
            if verify_signature(&cached.message, &cached.signature, &address) {
                trace!("reusing cached email wallet authorization");
                return Ok(Some(cached.clone()));
            }
        }

        let message = self.builder.build(&address);
        let signature = wallet.sign_message(&message).await?;
        let authorization = Authorization { signature, message };
        state.authorization = Some(authorization.clone());

        Ok(Some(authorization))
    }

    /// Disconnect the email wallet: clears the address and any cached
    /// authorization, and tears down the provider-side session. The wallet
    /// handle is retained so a later `connect` skips the bootstrap.
    pub async fn disconnect(&self) -> Result<bool> {
        let mut state = self.state.lock().await;
        let wallet = state.wallet.clone().ok_or_else(|| {
            SoulbindError::Wallet("email wallet session was never connected".to_string())
        })?;

        state.address = None;
        state.authorization = None;

        let confirmed = wallet.disconnect().await?;
        debug!("email wallet disconnected");
        Ok(confirmed)
    }

    /// The currently connected email wallet address, if any
    pub async fn address(&self) -> Option<String> {
        self.state.lock().await.address.clone()
    }
}
