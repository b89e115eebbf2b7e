//! Client-level error type.

use casperrpc_core::TransportError;
use casperrpc_types::StoredValueKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure, non-2xx status, malformed envelope, or an RPC error
    /// that is not an expected absence.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The `result` payload did not match the expected shape.
    #[error("failed to decode {method} result: {source}")]
    Decode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Request parameters could not be serialized.
    #[error("failed to encode {method} params: {source}")]
    Encode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected {expected} stored value, node returned {found}")]
    UnexpectedStoredValue {
        expected: StoredValueKind,
        found: StoredValueKind,
    },

    /// The node has not produced a block yet.
    #[error("node reported no state root hash")]
    NoStateRootHash,

    #[error("failed to start blocking runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl ClientError {
    /// HTTP status or RPC error code, when the failure carries one.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Transport(e) => e.code(),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_retryable())
    }
}
