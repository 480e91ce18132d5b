/*
[INPUT]:  Signer address, wall clock, and entropy source
[OUTPUT]: Nonce-bound signable messages and recovered signer addresses
[POS]:    Auth layer - signature message construction and verification
[UPDATE]: When the server-side message derivation changes
*/

use alloy_primitives::{Signature, keccak256};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::Utc;
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::http::{Result, SoulbindError};

/// Millisecond wall clock, injectable for deterministic tests.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// System UTC clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        Utc::now().timestamp_millis() as u64
    }
}

/// Source of the 16-byte nonce seed, injectable for deterministic tests.
pub trait NonceSource: Send + Sync {
    fn seed(&self) -> [u8; 16];
}

/// OS cryptographic RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl NonceSource for OsEntropy {
    fn seed(&self) -> [u8; 16] {
        let mut seed = [0u8; 16];
        rand::rngs::OsRng.fill_bytes(&mut seed);
        seed
    }
}

/// Builds the signable message binding an address, a timestamp, and a random
/// nonce.
///
/// The layout and hash composition are re-derived and checked by the server,
/// so they must not change:
///
/// ```text
/// Signing confirms that you own this address:
/// {address}
/// ~~Security~~
/// Timestamp: {unixMillis}
/// Nonce: {keccak256(base64(sha256(seed)))}
/// Hash: {keccak256(rawMessage)}
/// ```
///
/// The timestamp and nonce make a signature single-session; the trailing
/// self-hash lets a verifier detect tampering with the human-readable
/// portion before checking the signature itself.
#[derive(Clone)]
pub struct MessageBuilder {
    clock: Arc<dyn Clock>,
    nonce: Arc<dyn NonceSource>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            nonce: Arc::new(OsEntropy),
        }
    }

    /// Builder with explicit time and entropy sources
    pub fn with_sources(clock: Arc<dyn Clock>, nonce: Arc<dyn NonceSource>) -> Self {
        Self { clock, nonce }
    }

    /// Build a fresh signable message for `address`. The address is not
    /// validated at this layer.
    pub fn build(&self, address: &str) -> String {
        let random_values = BASE64.encode(Sha256::digest(self.nonce.seed()));
        let nonce = hex_digest(random_values.as_bytes());

        let raw_message = format!(
            "Signing confirms that you own this address:\n{address}\n~~Security~~\nTimestamp: {}\nNonce: {nonce}",
            self.clock.now_millis()
        );

        let digest = hex_digest(raw_message.as_bytes());
        format!("{raw_message}\nHash: {digest}")
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn hex_digest(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(keccak256(bytes)))
}

/// Recover the EIP-191 signer of `(message, signature)`. Returns the
/// EIP-55 checksummed address.
pub fn recover_signer(message: &str, signature: &str) -> Result<String> {
    let raw = hex::decode(signature.strip_prefix("0x").unwrap_or(signature))
        .map_err(|e| SoulbindError::Signature(format!("signature is not valid hex: {e}")))?;
    let parsed = Signature::from_raw(&raw)
        .map_err(|e| SoulbindError::Signature(format!("malformed signature: {e}")))?;
    let address = parsed
        .recover_address_from_msg(message.as_bytes())
        .map_err(|e| SoulbindError::Signature(format!("signer recovery failed: {e}")))?;
    Ok(address.to_checksum(None))
}

/// Check that `(message, signature)` was produced by `address`. Comparison
/// ignores the `0x` prefix and letter case; unparseable signatures are
/// simply not valid.
pub fn verify_signature(message: &str, signature: &str, address: &str) -> bool {
    match recover_signer(message, signature) {
        Ok(recovered) => addresses_match(&recovered, address),
        Err(_) => false,
    }
}

pub(crate) fn addresses_match(a: &str, b: &str) -> bool {
    normalize_address(a) == normalize_address(b)
}

fn normalize_address(address: &str) -> String {
    let address = address.trim();
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address)
        .to_ascii_lowercase()
}
