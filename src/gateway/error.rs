//! Error types for gateway calls.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to the QA service.
///
/// Every variant displays only its message, so callers that do not care
/// about the failure kind see one uniform error text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request never produced a response (DNS, refused connection, timeout).
    #[error("{message}")]
    Transport { message: String },

    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A 2xx body could not be decoded into the expected shape.
    #[error("{message}")]
    Decode { message: String },
}

impl GatewayError {
    /// Human-readable message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            GatewayError::Transport { message }
            | GatewayError::Http { message, .. }
            | GatewayError::Decode { message } => message,
        }
    }

    /// HTTP status code, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build an HTTP error from a failed response.
    ///
    /// The body is decoded as JSON, falling back to an empty object. The
    /// message is the first usable value of `detail`, then `error`, then a
    /// synthesized `API Error: <status> <reason>`.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let payload: Value =
            serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Default::default()));

        let message = field_text(&payload, "detail")
            .or_else(|| field_text(&payload, "error"))
            .unwrap_or_else(|| synthesized_message(status));

        GatewayError::Http {
            status: status.as_u16(),
            message,
        }
    }

    /// Classify a reqwest failure that happened before a response arrived.
    pub(crate) fn from_transport(e: reqwest::Error, timeout_seconds: u64) -> Self {
        let message = if e.is_timeout() {
            format!("request timeout after {}s", timeout_seconds)
        } else {
            e.to_string()
        };
        GatewayError::Transport { message }
    }
}

/// `API Error: 503 Service Unavailable`
fn synthesized_message(status: StatusCode) -> String {
    format!(
        "API Error: {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    )
    .trim_end()
    .to_string()
}

/// Read a message field, skipping absent, null, false, zero and empty values.
fn field_text(payload: &Value, key: &str) -> Option<String> {
    match payload.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        // FastAPI validation errors put a structured array under `detail`
        other => Some(other.to_string()),
    }
}
