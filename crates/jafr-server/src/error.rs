//! Server error types and their HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jafr_core::CoreError;
use jafr_core::responses::ErrorResponse;
use jafr_oracle::{CredentialError, OracleError};
use thiserror::Error;

/// Errors that turn a request into a non-success response.
///
/// Oracle failures are deliberately absent: the orchestrator downgrades them
/// to placeholder narrative.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Missing or invalid input fields.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// The body was not valid JSON for an analysis request.
    #[error("طلب غير صالح: {0}")]
    MalformedBody(String),

    /// Credential failed the local format check.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Anything unexpected; the message is surfaced for diagnostics.
    #[error("حدث خطأ غير متوقع: {0}")]
    Internal(String),
}

impl AnalysisError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Invalid(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Credential(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let missing_fields = match &self {
            Self::Invalid(CoreError::MissingFields(fields)) => {
                fields.iter().map(ToString::to_string).collect()
            }
            _ => Vec::new(),
        };
        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            missing_fields,
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to build oracle client: {0}")]
    Oracle(#[from] OracleError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
