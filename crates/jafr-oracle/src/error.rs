//! Oracle error types.

use thiserror::Error;

/// Errors from one completion call. All of them are recoverable: the
/// orchestrator downgrades every variant to placeholder narrative.
#[derive(Debug, Error)]
pub enum OracleError {
    /// No answer within the configured bound.
    #[error("oracle timed out after {after_secs}s")]
    Timeout { after_secs: u64 },

    /// The provider returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The provider rejected the credential (401/403).
    #[error("credential rejected by provider ({status})")]
    AuthRejected { status: u16 },

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The body was not a completion or held no text.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl OracleError {
    /// Short machine-readable kind, reported in `aiStatus.error`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::RateLimited { .. } => "rate_limited",
            Self::AuthRejected { .. } => "auth_rejected",
            Self::Api { .. } => "api_error",
            Self::MalformedResponse(_) => "malformed_response",
            Self::Http(_) => "transport",
        }
    }

    /// Upstream retry hint, when the provider sent one.
    #[must_use]
    pub const fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after_secs } => Some(*retry_after_secs),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rate_limit_carries_retry_hint() {
        assert_eq!(
            OracleError::RateLimited {
                retry_after_secs: 12
            }
            .retry_after_secs(),
            Some(12)
        );
        assert_eq!(OracleError::Timeout { after_secs: 30 }.retry_after_secs(), None);
        assert_eq!(
            OracleError::AuthRejected { status: 401 }.retry_after_secs(),
            None
        );
    }

    #[test]
    fn kinds_are_stable() {
        assert_eq!(OracleError::Timeout { after_secs: 1 }.kind(), "timeout");
        assert_eq!(
            OracleError::MalformedResponse("x".into()).kind(),
            "malformed_response"
        );
    }
}
