//! Configuration for the gateway client.

use serde::{Deserialize, Serialize};

/// Where the QA service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Scheme and authority of the service (e.g. `http://localhost:8000`)
    pub base_url: String,
    /// Prefix prepended to every operation path
    pub api_prefix: String,
    /// Timeout for a single request
    pub timeout_seconds: u64,
}

impl GatewayConfig {
    /// Fixed base prefix every operation path is appended to.
    pub fn base(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.api_prefix)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_prefix: "/api".to_string(),
            timeout_seconds: 30,
        }
    }
}
