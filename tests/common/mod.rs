//! Shared test utilities for lexgate integration tests.
//!
//! Provides a scripted [`Gateway`] whose outcomes and latencies are set per
//! call, plus builders for common health and answer payloads.

#![allow(dead_code)]

use async_trait::async_trait;
use lexgate::gateway::{
    AnswerResult, ClearHistoryResult, Gateway, GatewayConfig, GatewayError, HealthStatus,
    HistoryItem,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

// =============================================================================
// Payload Builders
// =============================================================================

pub fn health(rag_ready: bool, llm_available: bool) -> HealthStatus {
    HealthStatus {
        status: "ok".to_string(),
        rag_ready,
        llm_available,
    }
}

pub fn ready() -> HealthStatus {
    health(true, true)
}

pub fn answer(text: &str) -> AnswerResult {
    AnswerResult {
        success: true,
        question: "Test de connexion".to_string(),
        answer: text.to_string(),
        sources: vec![],
        source_count: 0,
    }
}

pub fn offline() -> GatewayError {
    GatewayError::Transport {
        message: "error sending request: connection refused".to_string(),
    }
}

pub fn http_error(status: u16, message: &str) -> GatewayError {
    GatewayError::Http {
        status,
        message: message.to_string(),
    }
}

/// Gateway config pointing at a wiremock server.
pub fn config_for(uri: &str) -> GatewayConfig {
    GatewayConfig {
        base_url: uri.to_string(),
        api_prefix: "/api".to_string(),
        timeout_seconds: 5,
    }
}

// =============================================================================
// Scripted Gateway
// =============================================================================

struct Step<T> {
    delay: Duration,
    outcome: Result<T, GatewayError>,
}

/// Gateway whose responses are scripted per call.
///
/// Queued steps are consumed first; once empty, every call returns the
/// fallback outcome immediately.
pub struct ScriptedGateway {
    health_steps: Mutex<VecDeque<Step<HealthStatus>>>,
    health_fallback: Result<HealthStatus, GatewayError>,
    ask_steps: Mutex<VecDeque<Step<AnswerResult>>>,
    ask_fallback: Result<AnswerResult, GatewayError>,
    health_calls: AtomicUsize,
    ask_calls: AtomicUsize,
    questions: Mutex<Vec<String>>,
}

impl Default for ScriptedGateway {
    fn default() -> Self {
        Self {
            health_steps: Mutex::new(VecDeque::new()),
            health_fallback: Err(offline()),
            ask_steps: Mutex::new(VecDeque::new()),
            ask_fallback: Err(offline()),
            health_calls: AtomicUsize::new(0),
            ask_calls: AtomicUsize::new(0),
            questions: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcome of every unscripted health check.
    pub fn with_health(mut self, outcome: Result<HealthStatus, GatewayError>) -> Self {
        self.health_fallback = outcome;
        self
    }

    /// Queue one health check outcome arriving after `delay`.
    pub fn then_health(self, delay: Duration, outcome: Result<HealthStatus, GatewayError>) -> Self {
        self.health_steps
            .lock()
            .unwrap()
            .push_back(Step { delay, outcome });
        self
    }

    /// Outcome of every unscripted question.
    pub fn with_answer(mut self, outcome: Result<AnswerResult, GatewayError>) -> Self {
        self.ask_fallback = outcome;
        self
    }

    /// Queue one answer arriving after `delay`.
    pub fn then_answer(self, delay: Duration, outcome: Result<AnswerResult, GatewayError>) -> Self {
        self.ask_steps
            .lock()
            .unwrap()
            .push_back(Step { delay, outcome });
        self
    }

    pub fn health_calls(&self) -> usize {
        self.health_calls.load(Ordering::SeqCst)
    }

    pub fn ask_calls(&self) -> usize {
        self.ask_calls.load(Ordering::SeqCst)
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl Gateway for ScriptedGateway {
    async fn check_health(&self) -> Result<HealthStatus, GatewayError> {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        let step = self.health_steps.lock().unwrap().pop_front();
        match step {
            Some(step) => {
                tokio::time::sleep(step.delay).await;
                step.outcome
            }
            None => self.health_fallback.clone(),
        }
    }

    async fn ask_question(&self, question: &str) -> Result<AnswerResult, GatewayError> {
        self.ask_calls.fetch_add(1, Ordering::SeqCst);
        self.questions.lock().unwrap().push(question.to_string());
        let step = self.ask_steps.lock().unwrap().pop_front();
        match step {
            Some(step) => {
                tokio::time::sleep(step.delay).await;
                step.outcome
            }
            None => self.ask_fallback.clone(),
        }
    }

    async fn get_history(&self, _limit: i64) -> Result<Vec<HistoryItem>, GatewayError> {
        Ok(vec![])
    }

    async fn clear_history(&self) -> Result<ClearHistoryResult, GatewayError> {
        Ok(ClearHistoryResult {
            success: true,
            message: None,
        })
    }
}
