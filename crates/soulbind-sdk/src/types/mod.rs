/*
[INPUT]:  API schema definitions
[OUTPUT]: Typed request/response/model definitions
[POS]:    Data layer - shared type definitions
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod models;
pub mod requests;
pub mod responses;

pub use enums::{BurnAuth, ClaimStatus, ErrorCode};
pub use models::{
    IssuedTo, ProviderConfig, SbtMetadata, TokenAttribute, TokenData, TokenDataResponse,
    TokenFilter,
};
pub use requests::{
    AddToIssuedRequest, Authorization, BindRequest, BurnRequest, ClaimRequest, CreateTokenRequest,
    UpdateTokenRequest,
};
pub use responses::ApiResponse;
