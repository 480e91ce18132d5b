/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod lifecycle;
pub mod query;

pub use client::{ClientConfig, SoulbindClient};
pub use error::{Result, SoulbindError};
