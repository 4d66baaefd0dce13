//! Poll status tracking.

use crate::gateway::{GatewayError, HealthStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Connection state shown to consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PollStatus {
    /// No result since the poller was started
    #[default]
    Pending,
    /// Latest check succeeded and the RAG system is ready
    Connected,
    /// Latest check failed, or the RAG system is not ready
    Error,
}

impl fmt::Display for PollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollStatus::Pending => write!(f, "pending"),
            PollStatus::Connected => write!(f, "connected"),
            PollStatus::Error => write!(f, "error"),
        }
    }
}

/// Latest applied poll result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PollSnapshot {
    pub status: PollStatus,
    /// Generation of the invocation that produced this snapshot (0 = none)
    pub generation: u64,
    /// Health details from the latest successful check
    pub health: Option<HealthStatus>,
    /// Error message from the latest failed check
    pub error: Option<String>,
    pub checked_at: Option<DateTime<Utc>>,
}

impl PollSnapshot {
    /// Map one check outcome to a snapshot.
    pub fn from_outcome(generation: u64, outcome: Result<HealthStatus, GatewayError>) -> Self {
        let checked_at = Some(Utc::now());
        match outcome {
            Ok(health) => Self {
                status: if health.rag_ready {
                    PollStatus::Connected
                } else {
                    PollStatus::Error
                },
                generation,
                health: Some(health),
                error: None,
                checked_at,
            },
            Err(e) => Self {
                status: PollStatus::Error,
                generation,
                health: None,
                error: Some(e.to_string()),
                checked_at,
            },
        }
    }

    /// Pending snapshot that remembers the last generation seen.
    pub(crate) fn pending_after(generation: u64) -> Self {
        Self {
            generation,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health(rag_ready: bool) -> HealthStatus {
        HealthStatus {
            status: "ok".to_string(),
            rag_ready,
            llm_available: true,
        }
    }

    #[test]
    fn test_default_is_pending() {
        let snapshot = PollSnapshot::default();
        assert_eq!(snapshot.status, PollStatus::Pending);
        assert_eq!(snapshot.generation, 0);
        assert!(snapshot.checked_at.is_none());
    }

    #[test]
    fn test_ready_maps_to_connected() {
        let snapshot = PollSnapshot::from_outcome(3, Ok(health(true)));
        assert_eq!(snapshot.status, PollStatus::Connected);
        assert_eq!(snapshot.generation, 3);
        assert!(snapshot.error.is_none());
        assert!(snapshot.checked_at.is_some());
    }

    #[test]
    fn test_not_ready_maps_to_error() {
        let snapshot = PollSnapshot::from_outcome(1, Ok(health(false)));
        assert_eq!(snapshot.status, PollStatus::Error);
        assert!(snapshot.health.is_some());
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn test_failure_maps_to_error() {
        let err = GatewayError::Http {
            status: 503,
            message: "unavailable".to_string(),
        };
        let snapshot = PollSnapshot::from_outcome(2, Err(err));
        assert_eq!(snapshot.status, PollStatus::Error);
        assert_eq!(snapshot.error.as_deref(), Some("unavailable"));
        assert!(snapshot.health.is_none());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(PollStatus::Pending.to_string(), "pending");
        assert_eq!(PollStatus::Connected.to_string(), "connected");
        assert_eq!(PollStatus::Error.to_string(), "error");
    }

    #[test]
    fn test_pending_after_keeps_generation() {
        let snapshot = PollSnapshot::pending_after(9);
        assert_eq!(snapshot.status, PollStatus::Pending);
        assert_eq!(snapshot.generation, 9);
    }
}
