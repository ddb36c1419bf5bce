//! Error-to-HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use leasing_engine::error::WorkflowError;

use crate::response::ApiResponse;

/// Anything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// A domain error from the workflow engine.
    Workflow(WorkflowError),
    /// Infrastructure failure (connection, thread pool).
    Internal(anyhow::Error),
}

impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        ApiError::Workflow(err)
    }
}

fn status_for(err: &WorkflowError) -> StatusCode {
    match err {
        WorkflowError::InvalidInput
        | WorkflowError::InvalidDecision
        | WorkflowError::ContractNotDraft
        | WorkflowError::ContractNotApproved
        | WorkflowError::InvalidStatusTransition
        | WorkflowError::MotorUnitNotReady
        | WorkflowError::DpOutOfRange
        | WorkflowError::InvalidPaymentAmount => StatusCode::BAD_REQUEST,
        WorkflowError::NotFound(_) => StatusCode::NOT_FOUND,
        WorkflowError::Conflict => StatusCode::CONFLICT,
        WorkflowError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Workflow(err) => {
                let status = status_for(&err);
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!(error = %err, "workflow operation failed");
                }
                let body = ApiResponse::error(err.code(), err.to_string());
                (status, Json(body)).into_response()
            }
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                let body = ApiResponse::error("INTERNAL", "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
