/*
[INPUT]:  Wallet credentials and custodial provider configuration
[OUTPUT]: Signable messages, signatures, and email-wallet sessions
[POS]:    Auth layer - message construction and wallet integration
[UPDATE]: When the signing flow or wallet abstractions change
*/

pub mod evm_wallet;
pub mod message;
pub mod session;
pub mod wallet;

pub use evm_wallet::EvmWalletSigner;
pub use message::{
    Clock, MessageBuilder, NonceSource, OsEntropy, SystemClock, recover_signer, verify_signature,
};
pub use session::EmailWalletSession;
pub use wallet::{
    CustodialConnector, CustodialWallet, MockConnector, MockCustodialWallet, MockWalletSigner,
    WalletSigner,
};
