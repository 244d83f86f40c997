//! Status-code handling for oracle responses.
//!
//! Centralizes 401/403 → [`OracleError::AuthRejected`], 429 →
//! [`OracleError::RateLimited`] with `Retry-After` parsing, and any other
//! non-success → [`OracleError::Api`].

use crate::error::OracleError;

/// Fallback when a 429 carries no usable `Retry-After`.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Longest upstream error body kept in [`OracleError::Api`].
const MAX_ERROR_BODY: usize = 512;

/// Check an HTTP response for error statuses, returning it unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, OracleError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(OracleError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(OracleError::AuthRejected {
            status: status.as_u16(),
        });
    }
    if !status.is_success() {
        let mut message = resp.text().await.unwrap_or_default();
        if let Some((idx, _)) = message.char_indices().nth(MAX_ERROR_BODY) {
            message.truncate(idx);
        }
        return Err(OracleError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
