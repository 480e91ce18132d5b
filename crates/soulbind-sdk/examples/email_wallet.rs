/*
[INPUT]:  Organization API key and a custodial connector implementation
[OUTPUT]: Connected email-wallet address and a cached authorization
[POS]:    Examples - custodial email-wallet session demonstration
[UPDATE]: When the session flow changes
*/

use std::sync::Arc;

use async_trait::async_trait;
use soulbind_sdk::*;

/// Stand-in for a real custodial integration. In production, implement
/// `CustodialConnector`/`CustodialWallet` over your provider's SDK: `open`
/// starts the provider session from the bootstrap config, `sign_message`
/// routes through the provider's signing UI.
struct DemoConnector;

struct DemoWallet;

#[async_trait]
impl CustodialWallet for DemoWallet {
    async fn address(&self) -> Result<String> {
        Ok("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string())
    }

    async fn sign_message(&self, _message: &str) -> Result<String> {
        Err(SoulbindError::Wallet(
            "demo wallet cannot sign; wire up a real provider".to_string(),
        ))
    }

    async fn disconnect(&self) -> Result<bool> {
        Ok(true)
    }
}

#[async_trait]
impl CustodialConnector for DemoConnector {
    async fn open(&self, config: &ProviderConfig) -> Result<Arc<dyn CustodialWallet>> {
        println!("  (would open provider on network {})", config.network);
        Ok(Arc::new(DemoWallet))
    }
}

/// Example: Email-wallet session lifecycle
///
/// 1. Create the client and a session over your custodial connector
/// 2. `connect` bootstraps the provider config and yields the address
/// 3. `get_signature` returns a cached or freshly signed authorization
/// 4. `disconnect` ends the provider session
#[tokio::main]
async fn main() {
    println!("=== Soulbind Email Wallet Example ===\n");

    let api_key = std::env::var("SOULBIND_API_KEY").unwrap_or_else(|_| "demo-key".to_string());
    let client = match SoulbindClient::new(api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    let session = EmailWalletSession::new(Arc::new(DemoConnector));

    match session.connect(&client).await {
        Ok(address) => println!("✓ Connected as {}", address),
        Err(e) => {
            // Expected without a reachable API: the bootstrap call fails.
            eprintln!("Connect failed: {}", e);
            return;
        }
    }

    match session.get_signature().await {
        Ok(Some(authorization)) => {
            println!("✓ Authorization ready ({} bytes)", authorization.signature.len());
        }
        Ok(None) => println!("✗ Session is not connected"),
        Err(e) => eprintln!("Signing failed: {}", e),
    }

    match session.disconnect().await {
        Ok(_) => println!("✓ Disconnected"),
        Err(e) => eprintln!("Disconnect failed: {}", e),
    }
}
