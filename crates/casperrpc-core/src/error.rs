//! Transport-level error types.

use thiserror::Error;

use crate::request::JsonRpcError;

/// Errors that can occur during an RPC transport operation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed (connection refused, timeout, body read, etc.).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The node answered with a status outside 200..=299.
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// JSON-RPC protocol-level error returned by the node.
    #[error("RPC error {}: {}", .0.code, .0.message)]
    Rpc(JsonRpcError),

    /// Request timed out after the configured duration.
    #[error("Request timed out after {ms}ms")]
    Timeout { ms: u64 },

    /// Request could not be serialized or response envelope could not be parsed.
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// An unexpected error.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Structured error code: the HTTP status for status failures, the node's
    /// code for RPC errors, `None` otherwise.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::HttpStatus { status, .. } => Some(i64::from(*status)),
            Self::Rpc(err) => Some(err.code),
            _ => None,
        }
    }

    /// Returns `true` if a caller-side retry could plausibly succeed.
    ///
    /// The transport itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout { .. } => true,
            Self::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Returns `true` if this is a node-side RPC error.
    pub fn is_rpc_error(&self) -> bool {
        matches!(self, Self::Rpc(_))
    }
}
