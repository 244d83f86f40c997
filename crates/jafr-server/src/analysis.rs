//! The analysis orchestrator.
//!
//! Order of work for one request:
//! 1. structural validation (no network)
//! 2. credential format check (no network)
//! 3. traditional numerology (always)
//! 4. one bounded oracle call, downgraded to placeholders on any failure

use std::sync::Arc;

use jafr_config::OracleConfig;
use jafr_core::responses::{AiAnalysis, AiStatus, AnalysisResponse, TraditionalResults};
use jafr_core::{AnalysisRequest, compute_traditional};
use jafr_oracle::{CredentialPolicy, NarrativeOracle, OracleError};

use crate::error::AnalysisError;
use crate::prompt;

pub struct Analyzer {
    config: OracleConfig,
    policy: CredentialPolicy,
    oracle: Arc<dyn NarrativeOracle>,
}

impl Analyzer {
    #[must_use]
    pub fn new(config: OracleConfig, oracle: Arc<dyn NarrativeOracle>) -> Self {
        let policy = CredentialPolicy::from_config(&config);
        Self {
            config,
            policy,
            oracle,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> &CredentialPolicy {
        &self.policy
    }

    /// Full analysis: traditional results plus narrative.
    ///
    /// `header_credential` takes precedence over the body's `apiKey`, which
    /// takes precedence over the configured server key.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Invalid`] for missing fields and
    /// [`AnalysisError::Credential`] for a malformed credential. Oracle
    /// failures never surface as errors.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
        header_credential: Option<&str>,
    ) -> Result<AnalysisResponse, AnalysisError> {
        let request = request.normalized();
        request.validate()?;

        let credential = if self.config.enabled {
            let key = self
                .resolve_credential(header_credential, request.api_key.as_deref())
                .unwrap_or_default();
            self.policy.validate(key)?;
            Some(key.trim())
        } else {
            None
        };

        let traditional = compute_traditional(&request);
        let (ai, status) = match credential {
            Some(key) => self.consult(&request, &traditional, key).await,
            None => (AiAnalysis::placeholder(), AiStatus::disabled()),
        };

        Ok(AnalysisResponse::new(traditional, ai, status))
    }

    /// Traditional results only. Never touches the oracle.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Invalid`] for missing fields.
    pub fn numerology(&self, request: &AnalysisRequest) -> Result<TraditionalResults, AnalysisError> {
        let request = request.normalized();
        request.validate()?;
        Ok(compute_traditional(&request))
    }

    fn resolve_credential<'a>(
        &'a self,
        header: Option<&'a str>,
        body: Option<&'a str>,
    ) -> Option<&'a str> {
        header
            .filter(|k| !k.trim().is_empty())
            .or(body)
            .or_else(|| self.config.has_server_key().then_some(self.config.api_key.as_str()))
    }

    async fn consult(
        &self,
        request: &AnalysisRequest,
        traditional: &TraditionalResults,
        credential: &str,
    ) -> (AiAnalysis, AiStatus) {
        let prompt = prompt::render(request, traditional, &self.config);
        let call = self.oracle.generate_narrative(&prompt, credential);

        let outcome = match tokio::time::timeout(self.config.timeout(), call).await {
            Ok(result) => result,
            Err(_elapsed) => Err(OracleError::Timeout {
                after_secs: self.config.timeout_secs,
            }),
        };

        let outcome = outcome.and_then(|text| {
            tracing::debug!(chars = text.chars().count(), "oracle narrative received");
            let sections = prompt::parse_sections(&text);
            if sections.is_blank() {
                Err(OracleError::MalformedResponse(
                    "reply has headings but no text".into(),
                ))
            } else {
                Ok(sections)
            }
        });

        match outcome {
            Ok(sections) => (sections, AiStatus::succeeded()),
            Err(error) => {
                tracing::warn!(kind = error.kind(), %error, "oracle call failed, using placeholders");
                (
                    AiAnalysis::placeholder(),
                    AiStatus::failed(error.kind(), error.retry_after_secs()),
                )
            }
        }
    }
}
