/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Soulbind SDK crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    CustodialConnector,
    CustodialWallet,
    EmailWalletSession,
    EvmWalletSigner,
    MessageBuilder,
    MockConnector,
    MockCustodialWallet,
    MockWalletSigner,
    WalletSigner,
    recover_signer,
    verify_signature,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Result,
    SoulbindClient,
    SoulbindError,
};

// Re-export all types
pub use types::*;
