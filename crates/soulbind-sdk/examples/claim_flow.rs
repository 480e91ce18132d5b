/*
[INPUT]:  Organization API key and a local wallet private key
[OUTPUT]: A claimed token id printed to stdout
[POS]:    Examples - bring-your-own-wallet claim flow demonstration
[UPDATE]: When the claim flow changes
*/

use soulbind_sdk::*;

/// Example: Claim flow with a local wallet
///
/// 1. Create the client with your organization API key
/// 2. Build the signable message for the claimer address
/// 3. Sign it with a locally held key
/// 4. Submit the claim
#[tokio::main]
async fn main() {
    println!("=== Soulbind Claim Example ===\n");

    let api_key = std::env::var("SOULBIND_API_KEY").unwrap_or_else(|_| "demo-key".to_string());
    let client = match SoulbindClient::new(api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    // A well-known test key; never use it for anything real.
    let wallet = match EvmWalletSigner::new(
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
    ) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to load wallet: {}", e);
            return;
        }
    };
    println!("✓ Wallet loaded: {}", wallet.address());

    let message = MessageBuilder::new().build(wallet.address());
    let signature = match wallet.sign_message(&message).await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to sign message: {}", e);
            return;
        }
    };
    println!("✓ Authorization signed");

    match client
        .claim("your-event-id", wallet.address(), &signature, &message, None)
        .await
    {
        Ok(envelope) => match envelope.success {
            Some(token_id) => println!("✓ Claimed token {}", token_id),
            None => println!("✗ Claim refused: {:?}", envelope.error_code),
        },
        Err(e) => eprintln!("Claim request failed: {}", e),
    }
}
