//! Request and response shapes exchanged with the QA service.
//!
//! Success bodies are decoded leniently: missing fields take their default
//! value and unknown fields are ignored. Only `/health` is translated into an
//! in-memory record; the other shapes keep their wire field names.

use serde::{Deserialize, Serialize};

/// Wire shape of `GET /health`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct HealthResponse {
    pub status: String,
    pub rag_ready: bool,
    pub llm_available: bool,
}

/// Availability and readiness reported by the service.
///
/// Consumers receive this in camelCase (`ragReady`, `llmAvailable`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub rag_ready: bool,
    pub llm_available: bool,
}

impl From<HealthResponse> for HealthStatus {
    fn from(wire: HealthResponse) -> Self {
        Self {
            status: wire.status,
            rag_ready: wire.rag_ready,
            llm_available: wire.llm_available,
        }
    }
}

/// Body of `POST /ask`.
#[derive(Debug, Serialize)]
pub(crate) struct AskRequest<'a> {
    pub question: &'a str,
}

/// One retrieved source backing an answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    pub name: String,
    pub excerpt: String,
}

/// Answer to a single question.
///
/// `source_count` is whatever the service sent; it is not checked against
/// `sources.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerResult {
    pub success: bool,
    pub question: String,
    pub answer: String,
    pub sources: Vec<Source>,
    pub source_count: i64,
}

/// A past question/answer exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryItem {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub timestamp: String,
}

/// Wire shape of `GET /history`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct HistoryResponse {
    pub history: Vec<HistoryItem>,
}

/// Confirmation returned by `POST /clear-history`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClearHistoryResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_wire_names_map_to_status() {
        let wire: HealthResponse = serde_json::from_str(
            r#"{"status": "ok", "rag_ready": true, "llm_available": false}"#,
        )
        .unwrap();
        let status = HealthStatus::from(wire);
        assert_eq!(status.status, "ok");
        assert!(status.rag_ready);
        assert!(!status.llm_available);
    }

    #[test]
    fn test_health_status_serializes_camel_case() {
        let status = HealthStatus {
            status: "ok".to_string(),
            rag_ready: true,
            llm_available: true,
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["ragReady"], true);
        assert_eq!(json["llmAvailable"], true);
        assert!(json.get("rag_ready").is_none());
    }

    #[test]
    fn test_answer_keeps_wire_names_and_ignores_extras() {
        let body = r#"{
            "success": true,
            "question": "Qu'est-ce qu'un contrat de travail?",
            "answer": "Un contrat...",
            "sources": [{"id": 1, "name": "Code du travail", "excerpt": "Art. L1221-1", "relevance": "Haut"}],
            "source_count": 7
        }"#;
        let answer: AnswerResult = serde_json::from_str(body).unwrap();
        assert_eq!(answer.sources.len(), 1);
        assert_eq!(answer.sources[0].name, "Code du travail");
        // Not reconciled with sources.len()
        assert_eq!(answer.source_count, 7);

        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["source_count"], 7);
    }

    #[test]
    fn test_answer_missing_fields_default() {
        let answer: AnswerResult = serde_json::from_str(r#"{"answer": "partial"}"#).unwrap();
        assert!(!answer.success);
        assert_eq!(answer.answer, "partial");
        assert!(answer.sources.is_empty());
    }

    #[test]
    fn test_clear_history_message_optional() {
        let result: ClearHistoryResult = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(result.success);
        assert!(result.message.is_none());

        let result: ClearHistoryResult =
            serde_json::from_str(r#"{"success": true, "message": "Historique effacé"}"#).unwrap();
        assert_eq!(result.message.as_deref(), Some("Historique effacé"));
    }

    #[test]
    fn test_ask_request_body() {
        let body = serde_json::to_value(AskRequest {
            question: "  spaced  ",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"question": "  spaced  "}));
    }
}
