//! Diagnostics configuration

use crate::diagnostics::PROBE_QUESTION;
use serde::{Deserialize, Serialize};

/// Diagnostics configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Question sent by the functional probe
    pub probe_question: String,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            probe_question: PROBE_QUESTION.to_string(),
        }
    }
}
