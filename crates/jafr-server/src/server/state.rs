use std::sync::Arc;

use jafr_config::OracleConfig;
use jafr_oracle::NarrativeOracle;

use crate::analysis::Analyzer;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    analyzer: Analyzer,
}

impl AppState {
    /// State backed by any oracle implementation.
    #[must_use]
    pub fn with_oracle(config: OracleConfig, oracle: Arc<dyn NarrativeOracle>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                analyzer: Analyzer::new(config, oracle),
            }),
        }
    }

    #[must_use]
    pub fn analyzer(&self) -> &Analyzer {
        &self.inner.analyzer
    }
}
