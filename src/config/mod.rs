//! Configuration module for lexgate
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`LEXGATE_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use lexgate::config::LexgateConfig;
//!
//! let config = LexgateConfig::default();
//! assert_eq!(config.gateway.base_url, "http://localhost:8000");
//!
//! let toml = r#"
//! [gateway]
//! base_url = "http://qa.internal:9000"
//! "#;
//! let config: LexgateConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.gateway.base(), "http://qa.internal:9000/api");
//! ```

pub mod diagnostics;
pub mod error;
pub mod logging;

pub use diagnostics::DiagnosticsConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};

// Re-export component configs from their modules
pub use crate::gateway::GatewayConfig;
pub use crate::poller::PollerConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the lexgate client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexgateConfig {
    /// Remote QA service location
    pub gateway: GatewayConfig,
    /// Live health polling
    pub poller: PollerConfig,
    /// Diagnostic probe settings
    pub diagnostics: DiagnosticsConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl LexgateConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("LEXGATE_BASE_URL") {
            self.gateway.base_url = url;
        }
        if let Ok(prefix) = std::env::var("LEXGATE_API_PREFIX") {
            self.gateway.api_prefix = prefix;
        }
        if let Ok(interval) = std::env::var("LEXGATE_POLL_INTERVAL") {
            if let Ok(secs) = interval.parse() {
                self.poller.interval_seconds = secs;
            }
        }

        if let Ok(level) = std::env::var("LEXGATE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LEXGATE_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.gateway.base_url;
        if url.is_empty() {
            return Err(ConfigError::Validation {
                field: "gateway.base_url".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation {
                field: "gateway.base_url".to_string(),
                message: format!("expected an http(s) URL, got '{}'", url),
            });
        }
        if self.gateway.timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "gateway.timeout_seconds".to_string(),
                message: "timeout must be non-zero".to_string(),
            });
        }
        if self.poller.interval_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "poller.interval_seconds".to_string(),
                message: "interval must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}
