//! casperrpc-core: envelope types and the transport seam for CasperRPC.
//!
//! # Overview
//!
//! CasperRPC is a typed client for a Casper node's JSON-RPC interface. The
//! core crate defines:
//!
//! - [`RpcTransport`]: the object-safe async trait every transport implements
//! - [`RpcTransportExt`]: `request`/`call` helpers layered on top of `send`
//! - [`JsonRpcRequest`] / [`JsonRpcResponse`]: JSON-RPC 2.0 wire types
//! - [`TransportError`]: structured error type
//! - [`Absence`] / [`RpcOutcome`]: node error codes that mean "not found"

pub mod error;
pub mod outcome;
pub mod request;
pub mod transport;

pub use error::TransportError;
pub use outcome::{Absence, RpcOutcome};
pub use request::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId};
pub use transport::{RpcTransport, RpcTransportExt};
