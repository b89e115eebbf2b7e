//! The `RpcTransport` trait: the core abstraction for reaching a node.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::TransportError;
use crate::request::{JsonRpcRequest, JsonRpcResponse};

/// The async trait every RPC transport must implement.
///
/// One `send` is exactly one outbound call: implementations must not retry.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` for use across Tokio tasks.
///
/// # Object Safety
/// The trait is object-safe and can be stored as `Arc<dyn RpcTransport>`.
#[async_trait]
pub trait RpcTransport: Send + Sync + 'static {
    /// Send a single JSON-RPC request and return the parsed envelope.
    ///
    /// Non-2xx statuses and malformed envelopes are errors; an envelope
    /// carrying an `error` object is returned as-is.
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError>;

    /// Return the transport's identifier (URL or name).
    fn url(&self) -> &str;
}

/// Convenience calls available on every transport, including `dyn RpcTransport`.
#[async_trait]
pub trait RpcTransportExt: RpcTransport {
    /// Call a method and return the raw `result` payload.
    ///
    /// A non-null `error` in the envelope becomes [`TransportError::Rpc`].
    async fn request(
        &self,
        id: u64,
        method: &str,
        params: Option<Value>,
    ) -> Result<Value, TransportError> {
        let req = JsonRpcRequest::new(id, method, params);
        tracing::debug!(method, id, url = self.url(), "sending rpc request");
        let resp = self.send(req).await?;
        resp.into_result().map_err(TransportError::Rpc)
    }

    /// Call a method and deserialize the result.
    async fn call<T: DeserializeOwned>(
        &self,
        id: u64,
        method: &str,
        params: Option<Value>,
    ) -> Result<T, TransportError> {
        let result = self.request(id, method, params).await?;
        serde_json::from_value(result).map_err(TransportError::Deserialization)
    }
}

impl<T: RpcTransport + ?Sized> RpcTransportExt for T {}
