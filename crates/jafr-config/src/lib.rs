//! # jafr-config
//!
//! Layered configuration loading for Jafr using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`JAFR_*` prefix, `__` as separator)
//! 2. Project-level `./jafr.toml`
//! 3. User-level `~/.config/jafr/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `JAFR_ORACLE__API_KEY` -> `oracle.api_key`,
//! `JAFR_SERVER__PORT` -> `server.port`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use jafr_config::JafrConfig;
//!
//! let config = JafrConfig::load_with_dotenv().expect("config");
//! println!("listening on {}", config.server.addr());
//! ```

mod error;
mod oracle;
mod server;

pub use error::ConfigError;
pub use oracle::{OracleConfig, TIMEOUT_RANGE_SECS};
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name, resolved against the current directory.
pub const PROJECT_CONFIG_FILE: &str = "jafr.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JafrConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub oracle: OracleConfig,
}

impl JafrConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("JAFR_").split("__"))
    }

    /// Reject values the server cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".into(),
                reason: "must be non-zero".into(),
            });
        }
        if !TIMEOUT_RANGE_SECS.contains(&self.oracle.timeout_secs) {
            return Err(ConfigError::InvalidValue {
                field: "oracle.timeout_secs".into(),
                reason: format!(
                    "{} is outside {}..={}",
                    self.oracle.timeout_secs,
                    TIMEOUT_RANGE_SECS.start(),
                    TIMEOUT_RANGE_SECS.end()
                ),
            });
        }
        if self.oracle.enabled && self.oracle.base_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "oracle.base_url".into(),
                reason: "required while the oracle is enabled".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("jafr").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = JafrConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.oracle.enabled);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn zero_port_rejected() {
        let mut config = JafrConfig::default();
        config.server.port = 0;
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "server.port")
        );
    }

    #[test]
    fn timeout_outside_range_rejected() {
        for secs in [0, 9, 61, 600] {
            let mut config = JafrConfig::default();
            config.oracle.timeout_secs = secs;
            assert!(config.validate().is_err(), "timeout {secs}");
        }
        for secs in [10, 60] {
            let mut config = JafrConfig::default();
            config.oracle.timeout_secs = secs;
            assert!(config.validate().is_ok(), "timeout {secs}");
        }
    }

    #[test]
    fn empty_base_url_allowed_when_disabled() {
        let mut config = JafrConfig::default();
        config.oracle.base_url.clear();
        assert!(config.validate().is_err());
        config.oracle.enabled = false;
        assert!(config.validate().is_ok());
    }
}
