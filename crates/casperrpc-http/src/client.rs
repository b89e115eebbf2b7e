//! HTTP JSON-RPC client backed by `reqwest`.
//!
//! One `send` is one POST with `Content-Type: application/json`. There is no
//! retry, backoff or rate limiting here: the caller owns retry policy.

use async_trait::async_trait;
use std::time::Duration;

use casperrpc_core::error::TransportError;
use casperrpc_core::request::{JsonRpcRequest, JsonRpcResponse};
use casperrpc_core::transport::RpcTransport;

/// Configuration for `HttpRpcClient`.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Upper bound on a whole request/response round trip.
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("casperrpc/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// HTTP JSON-RPC client for a single node endpoint.
///
/// Holds no mutable state; share it freely across tasks and threads.
#[derive(Debug, Clone)]
pub struct HttpRpcClient {
    url: String,
    http: reqwest::Client,
    request_timeout: Duration,
}

impl HttpRpcClient {
    /// Create a new client for the given JSON-RPC endpoint URL.
    pub fn new(url: impl Into<String>, config: HttpClientConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| TransportError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            url: url.into(),
            http,
            request_timeout: config.request_timeout,
        })
    }

    /// Create with default configuration.
    pub fn default_for(url: impl Into<String>) -> Result<Self, TransportError> {
        Self::new(url, HttpClientConfig::default())
    }

    fn map_send_error(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout {
                ms: self.request_timeout.as_millis() as u64,
            }
        } else {
            TransportError::Http(e.to_string())
        }
    }
}

#[async_trait]
impl RpcTransport for HttpRpcClient {
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError> {
        let body = serde_json::to_vec(&req)?;

        let resp = self
            .http
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            tracing::warn!(
                status = status.as_u16(),
                method = %req.method,
                url = %self.url,
                "node returned non-success status"
            );
            return Err(TransportError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: JsonRpcResponse = serde_json::from_slice(&bytes)?;
        if envelope.id != req.id {
            tracing::debug!(sent = %req.id, received = %envelope.id, "response id differs from request");
        }
        Ok(envelope)
    }

    fn url(&self) -> &str {
        &self.url
    }
}
