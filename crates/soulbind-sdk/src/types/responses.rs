/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed response envelope shared by every endpoint
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::ErrorCode;

/// The response envelope every endpoint returns. Application-level failures
/// arrive as `error_code` inside a 2xx response; the SDK never interprets
/// them, callers check `success`/`error_code` themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<T>,
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.success.is_some()
    }

    pub fn into_success(self) -> Option<T> {
        self.success
    }
}
