//! Configuration for health polling.

use serde::{Deserialize, Serialize};

/// Configuration for the live health poller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Seconds between health checks
    pub interval_seconds: u64,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 30,
        }
    }
}
