//! Diagnostic report produced by one probe run.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of the functional probe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestQueryOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// End-to-end health summary of the QA service.
///
/// Fields are filled in probe order while a run is in progress; the value
/// handed back by the runner is never touched again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReport {
    /// Capture time at the start of the run
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub api_connected: bool,
    pub rag_ready: bool,
    pub llm_available: bool,
    pub test_query: TestQueryOutcome,
    /// Human-readable trace, one line per observation
    pub details: Vec<String>,
}

impl DiagnosticReport {
    /// Fresh report: everything false, no details.
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            api_connected: false,
            rag_ready: false,
            llm_available: false,
            test_query: TestQueryOutcome::default(),
            details: Vec::new(),
        }
    }

    /// Timestamp as ISO-8601 with millisecond precision and a `Z` suffix.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// What the operator should do next.
    pub fn recommendation(&self) -> Recommendation {
        if !self.api_connected {
            Recommendation::ApiUnreachable
        } else if !self.rag_ready {
            Recommendation::RagInitializing
        } else {
            Recommendation::Operational
        }
    }
}

/// Operator guidance derived from a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    ApiUnreachable,
    RagInitializing,
    Operational,
}

impl Recommendation {
    pub fn title(&self) -> &'static str {
        match self {
            Recommendation::ApiUnreachable => "API not reachable",
            Recommendation::RagInitializing => "RAG not initialized",
            Recommendation::Operational => "System operational",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Recommendation::ApiUnreachable => {
                "Check that the backend server is running and reachable."
            }
            Recommendation::RagInitializing => {
                "The RAG system is still starting up. Please wait a few moments."
            }
            Recommendation::Operational => {
                "Frontend and backend are connected. The assistant is ready to use."
            }
        }
    }
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
