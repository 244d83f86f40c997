//! # jafr-oracle
//!
//! The remote text-generation oracle behind Jafr's narrative readings.
//!
//! - [`NarrativeOracle`]: the seam the orchestrator talks to, so tests can
//!   substitute a deterministic stub
//! - [`ChatCompletionClient`]: the production implementation over an
//!   OpenAI-compatible `/chat/completions` endpoint
//! - [`CredentialPolicy`]: local format checks run before any network call
//!
//! One call is one attempt. There is no retry loop; rate-limit hints are
//! surfaced to the caller instead.

mod client;
pub mod credential;
mod error;
mod status;

pub use client::ChatCompletionClient;
pub use credential::{CredentialError, CredentialPolicy};
pub use error::OracleError;
pub use status::DEFAULT_RETRY_AFTER_SECS;

use async_trait::async_trait;

/// A rendered prompt and its completion budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeRequest {
    /// System role instruction.
    pub system: String,
    /// User role message with the computed numbers embedded.
    pub user: String,
    pub max_tokens: u32,
}

/// Anything that turns a prompt into narrative text.
#[async_trait]
pub trait NarrativeOracle: Send + Sync {
    /// Generate narrative text for `request`, authenticating with `credential`.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError`] on transport failure, timeout, rate limiting,
    /// credential rejection, or an unusable response body.
    async fn generate_narrative(
        &self,
        request: &NarrativeRequest,
        credential: &str,
    ) -> Result<String, OracleError>;
}
