//! Remote completion oracle configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Shortest and longest allowed oracle timeouts, in seconds.
pub const TIMEOUT_RANGE_SECS: std::ops::RangeInclusive<u64> = 10..=60;

const fn default_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    String::from("https://api.openai.com/v1")
}

fn default_model() -> String {
    String::from("gpt-4o-mini")
}

fn default_key_prefix() -> String {
    String::from("sk-")
}

const fn default_min_key_length() -> usize {
    20
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_max_tokens() -> u32 {
    1200
}

const fn default_deep_max_tokens() -> u32 {
    2500
}

#[derive(Clone, Deserialize, Serialize)]
pub struct OracleConfig {
    /// When false, the oracle is never called and placeholders are returned.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Chat-completions API root, without the `/chat/completions` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Server-side key, used when a request carries none.
    #[serde(default)]
    pub api_key: String,

    /// Required credential prefix (e.g. `sk-`).
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Minimum credential length in characters.
    #[serde(default = "default_min_key_length")]
    pub min_key_length: usize,

    /// Bound on the whole oracle call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Completion budget for a normal reading.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Completion budget when `deepAnalysis` is requested.
    #[serde(default = "default_deep_max_tokens")]
    pub deep_max_tokens: u32,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_base_url(),
            model: default_model(),
            api_key: String::new(),
            key_prefix: default_key_prefix(),
            min_key_length: default_min_key_length(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            deep_max_tokens: default_deep_max_tokens(),
        }
    }
}

impl fmt::Debug for OracleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OracleConfig")
            .field("enabled", &self.enabled)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &if self.has_server_key() { "<set>" } else { "" })
            .field("key_prefix", &self.key_prefix)
            .field("min_key_length", &self.min_key_length)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("deep_max_tokens", &self.deep_max_tokens)
            .finish()
    }
}

impl OracleConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether a server-side key is available as a fallback credential.
    #[must_use]
    pub fn has_server_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Full URL of the completions endpoint.
    #[must_use]
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
