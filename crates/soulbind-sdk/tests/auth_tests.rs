/*
[INPUT]:  Mock bootstrap responses and test wallets
[OUTPUT]: Test results for the email-wallet session flow
[POS]:    Integration tests - auth and session state machine
[UPDATE]: When the connect/sign/disconnect flow changes
*/

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use common::{TEST_PRIVATE_KEY, setup_mock_server, test_client};
use soulbind_sdk::{
    CustodialConnector, CustodialWallet, EmailWalletSession, EvmWalletSigner, MockConnector,
    MockCustodialWallet, ProviderConfig, Result, SoulbindError, WalletSigner, recover_signer,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Custodial wallet backed by a real local key, so cached signatures
/// actually re-verify. Counts sign prompts.
struct SigningCustodialWallet {
    signer: EvmWalletSigner,
    sign_calls: AtomicUsize,
}

impl SigningCustodialWallet {
    fn new(private_key: &str) -> Self {
        Self {
            signer: EvmWalletSigner::new(private_key).expect("test key"),
            sign_calls: AtomicUsize::new(0),
        }
    }

    fn sign_calls(&self) -> usize {
        self.sign_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CustodialWallet for SigningCustodialWallet {
    async fn address(&self) -> Result<String> {
        Ok(self.signer.address().to_string())
    }

    async fn sign_message(&self, message: &str) -> Result<String> {
        self.sign_calls.fetch_add(1, Ordering::SeqCst);
        self.signer.sign_message(message).await
    }

    async fn disconnect(&self) -> Result<bool> {
        Ok(true)
    }
}

struct SigningConnector {
    wallet: Arc<SigningCustodialWallet>,
    open_calls: AtomicUsize,
}

impl SigningConnector {
    fn new(wallet: Arc<SigningCustodialWallet>) -> Self {
        Self {
            wallet,
            open_calls: AtomicUsize::new(0),
        }
    }

    fn open_calls(&self) -> usize {
        self.open_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CustodialConnector for SigningConnector {
    async fn open(&self, config: &ProviderConfig) -> Result<Arc<dyn CustodialWallet>> {
        assert_eq!(config.key, "pk_live_TEST");
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.wallet.clone())
    }
}

async fn mount_bootstrap(server: &MockServer, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path("/v1/contract/network"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": { "magicKey": "pk_live_TEST", "network": "matic" }
        })))
        .expect(expected_hits)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_session_flow_caches_signature_and_survives_reconnect() {
    let server = setup_mock_server().await;
    // The bootstrap must run exactly once for the whole session, across
    // disconnect/reconnect.
    mount_bootstrap(&server, 1).await;

    let client = test_client(&server);
    let wallet = Arc::new(SigningCustodialWallet::new(TEST_PRIVATE_KEY));
    let connector = Arc::new(SigningConnector::new(wallet.clone()));
    let session = EmailWalletSession::new(connector.clone());

    let address = session.connect(&client).await.unwrap();
    assert_eq!(address, "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    assert_eq!(session.address().await, Some(address.clone()));

    // First signature prompts the wallet; the second re-verifies the cache
    // and returns the identical pair without prompting.
    let first = session.get_signature().await.unwrap().unwrap();
    let second = session.get_signature().await.unwrap().unwrap();
    assert_eq!(first, second);
    assert_eq!(wallet.sign_calls(), 1);
    assert_eq!(recover_signer(&first.message, &first.signature).unwrap(), address);

    // Disconnect clears address and cache but keeps the wallet handle.
    assert!(session.disconnect().await.unwrap());
    assert_eq!(session.address().await, None);
    assert!(session.get_signature().await.unwrap().is_none());
    assert_eq!(wallet.sign_calls(), 1);

    // Reconnect reuses the handle (no second provider open, no second
    // bootstrap); the cleared cache forces exactly one new prompt.
    let reconnected = session.connect(&client).await.unwrap();
    assert_eq!(reconnected, address);
    assert_eq!(connector.open_calls(), 1);

    let fresh = session.get_signature().await.unwrap().unwrap();
    assert_ne!(fresh.message, first.message);
    assert_eq!(wallet.sign_calls(), 2);
}

#[tokio::test]
async fn test_concurrent_connects_bootstrap_once() {
    let server = setup_mock_server().await;
    mount_bootstrap(&server, 1).await;

    let client = test_client(&server);
    let wallet = Arc::new(MockCustodialWallet::new("0xabc", "0xsig"));
    let connector = Arc::new(MockConnector::new(wallet));
    let session = EmailWalletSession::new(connector.clone());

    let (first, second) = tokio::join!(session.connect(&client), session.connect(&client));
    assert_eq!(first.unwrap(), "0xabc");
    assert_eq!(second.unwrap(), "0xabc");
    assert_eq!(connector.open_calls(), 1);
}

#[tokio::test]
async fn test_unverifiable_cached_signature_is_never_reused() {
    let server = setup_mock_server().await;
    mount_bootstrap(&server, 1).await;

    let client = test_client(&server);
    // Canned signature that cannot recover to the wallet address.
    let wallet = Arc::new(MockCustodialWallet::new("0xabc", "0xdeadbeef"));
    let connector = Arc::new(MockConnector::new(wallet.clone()));
    let session = EmailWalletSession::new(connector);

    session.connect(&client).await.unwrap();
    session.get_signature().await.unwrap().unwrap();
    session.get_signature().await.unwrap().unwrap();

    // The cache fails re-verification both times, so the wallet is
    // prompted for every call.
    assert_eq!(wallet.sign_calls(), 2);
}

#[tokio::test]
async fn test_bootstrap_without_provider_config_is_invalid_response() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/contract/network"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errorCode": "Invalid request"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let wallet = Arc::new(MockCustodialWallet::new("0xabc", "0xsig"));
    let session = EmailWalletSession::new(Arc::new(MockConnector::new(wallet)));

    let err = session.connect(&client).await.unwrap_err();
    assert!(matches!(err, SoulbindError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_session_authorization_drives_a_claim() {
    let server = setup_mock_server().await;
    mount_bootstrap(&server, 1).await;

    Mock::given(method("PATCH"))
        .and(path("/v1/contract/claim"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "success": "0xTOKEN123" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let wallet = Arc::new(SigningCustodialWallet::new(TEST_PRIVATE_KEY));
    let session = EmailWalletSession::new(Arc::new(SigningConnector::new(wallet)));

    let address = session.connect(&client).await.unwrap();
    let authorization = session.get_signature().await.unwrap().unwrap();

    let envelope = client
        .claim(
            "evt-1",
            &address,
            &authorization.signature,
            &authorization.message,
            None,
        )
        .await
        .unwrap();
    assert_eq!(envelope.success, Some("0xTOKEN123".to_string()));
}
