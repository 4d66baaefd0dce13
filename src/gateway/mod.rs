//! Typed client for the legal-assistant QA service.
//!
//! Every remote call goes through [`GatewayClient::call`], which builds the
//! URL from a fixed base prefix, attaches the JSON content type, collapses
//! transport and HTTP failures into [`GatewayError`], and decodes the body.

mod config;
mod error;
mod types;

pub use config::*;
pub use error::*;
pub use types::{AnswerResult, ClearHistoryResult, HealthStatus, HistoryItem, Source};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::time::Duration;
use types::{AskRequest, HealthResponse, HistoryResponse};

/// History size requested when the caller has no preference.
pub const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// Operations offered by the QA service.
///
/// Diagnostics and polling only see this trait, so tests can swap in a
/// scripted implementation.
#[async_trait]
pub trait Gateway: Send + Sync + 'static {
    /// `GET /health`. No retry.
    async fn check_health(&self) -> Result<HealthStatus, GatewayError>;

    /// `POST /ask`. The question is sent verbatim.
    async fn ask_question(&self, question: &str) -> Result<AnswerResult, GatewayError>;

    /// `GET /history?limit=N`. The limit is forwarded unchecked.
    async fn get_history(&self, limit: i64) -> Result<Vec<HistoryItem>, GatewayError>;

    /// `POST /clear-history` with no body.
    async fn clear_history(&self) -> Result<ClearHistoryResult, GatewayError>;
}

/// HTTP implementation of [`Gateway`].
#[derive(Debug, Clone)]
pub struct GatewayClient {
    /// Base prefix, e.g. `http://localhost:8000/api`
    base: String,
    /// Pooled HTTP client
    client: reqwest::Client,
    /// Per-request timeout, also used in timeout messages
    timeout_seconds: u64,
}

impl GatewayClient {
    /// Create a client with its own connection pool.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| GatewayError::Transport {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self::with_client(config, client))
    }

    /// Create a client around an existing reqwest client (for testing).
    pub fn with_client(config: &GatewayConfig, client: reqwest::Client) -> Self {
        Self {
            base: config.base(),
            client,
            timeout_seconds: config.timeout_seconds,
        }
    }

    /// Base prefix every path is appended to.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Issue one request and decode its JSON body as `T`.
    ///
    /// `headers` are applied after the default `Content-Type`, so they win on
    /// collision. Non-2xx answers become [`GatewayError::Http`]; a 2xx body
    /// that is not decodable becomes [`GatewayError::Decode`].
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        headers: HeaderMap,
    ) -> Result<T, GatewayError> {
        let url = format!("{}{}", self.base, path);

        let mut request_headers = HeaderMap::new();
        request_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in headers.iter() {
            request_headers.insert(name.clone(), value.clone());
        }

        tracing::debug!(method = %method, url = %url, "Sending API request");

        let mut request = self
            .client
            .request(method.clone(), &url)
            .headers(request_headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            let err = GatewayError::from_transport(e, self.timeout_seconds);
            tracing::warn!(method = %method, url = %url, error = %err, "API request failed");
            err
        })?;

        let status = response.status();
        let bytes = response.bytes().await;

        if !status.is_success() {
            let body = bytes.unwrap_or_default();
            let err = GatewayError::from_response(status, &body);
            tracing::warn!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                error = %err,
                "API returned error status"
            );
            return Err(err);
        }

        let bytes = bytes.map_err(|e| GatewayError::Transport {
            message: format!("failed to read response body: {}", e),
        })?;

        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            bytes = bytes.len(),
            "API response received"
        );

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "API response body is not decodable");
            GatewayError::Decode {
                message: format!("invalid response body: {}", e),
            }
        })
    }
}

#[async_trait]
impl Gateway for GatewayClient {
    async fn check_health(&self) -> Result<HealthStatus, GatewayError> {
        let wire: HealthResponse = self
            .call(Method::GET, "/health", None, HeaderMap::new())
            .await?;
        Ok(wire.into())
    }

    async fn ask_question(&self, question: &str) -> Result<AnswerResult, GatewayError> {
        let body = serde_json::to_vec(&AskRequest { question }).map_err(|e| {
            GatewayError::Decode {
                message: format!("failed to encode question: {}", e),
            }
        })?;
        self.call(Method::POST, "/ask", Some(body), HeaderMap::new())
            .await
    }

    async fn get_history(&self, limit: i64) -> Result<Vec<HistoryItem>, GatewayError> {
        let path = format!("/history?limit={}", limit);
        let response: HistoryResponse = self
            .call(Method::GET, &path, None, HeaderMap::new())
            .await?;
        Ok(response.history)
    }

    async fn clear_history(&self) -> Result<ClearHistoryResult, GatewayError> {
        self.call(Method::POST, "/clear-history", None, HeaderMap::new())
            .await
    }
}
