//! Surface-shape checks for oracle credentials.
//!
//! This is a format check only. A key that passes may still be rejected by
//! the provider; that shows up later as [`crate::OracleError::AuthRejected`].

use jafr_config::OracleConfig;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("مفتاح API مطلوب")]
    Missing,

    #[error("مفتاح API يجب أن يبدأ بـ {expected}")]
    BadPrefix { expected: String },

    #[error("مفتاح API قصير جداً (الحد الأدنى {min} حرفاً)")]
    TooShort { min: usize },
}

/// Expected prefix and minimum length of a provider key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPolicy {
    pub prefix: String,
    pub min_length: usize,
}

impl CredentialPolicy {
    #[must_use]
    pub fn new(prefix: impl Into<String>, min_length: usize) -> Self {
        Self {
            prefix: prefix.into(),
            min_length,
        }
    }

    #[must_use]
    pub fn from_config(config: &OracleConfig) -> Self {
        Self::new(config.key_prefix.clone(), config.min_key_length)
    }

    /// Check `key` without touching the network.
    ///
    /// Surrounding whitespace is ignored. Length is counted in characters.
    ///
    /// # Errors
    ///
    /// Returns the first failed check: missing, then prefix, then length.
    pub fn validate(&self, key: &str) -> Result<(), CredentialError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(CredentialError::Missing);
        }
        if !key.starts_with(&self.prefix) {
            return Err(CredentialError::BadPrefix {
                expected: self.prefix.clone(),
            });
        }
        if key.chars().count() < self.min_length {
            return Err(CredentialError::TooShort {
                min: self.min_length,
            });
        }
        Ok(())
    }
}
