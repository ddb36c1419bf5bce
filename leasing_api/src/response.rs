//! The standard JSON envelope for all API responses.

use serde::Serialize;
use serde_json::Value;

/// Success/error envelope returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    /// Whether the request succeeded.
    pub success: bool,
    /// Human-readable summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Operation payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Error detail, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorPayload>,
}

/// Error detail inside the envelope.
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    /// Stable machine-readable code (e.g. "DP_OUT_OF_RANGE").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiResponse {
    /// A success envelope with a message and payload.
    pub fn ok(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            error: None,
        }
    }

    /// A failure envelope with an error code and message.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(ErrorPayload {
                code: code.into(),
                message: message.into(),
                details: None,
            }),
        }
    }
}
