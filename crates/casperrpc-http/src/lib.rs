//! casperrpc-http: `reqwest`-backed [`RpcTransport`](casperrpc_core::RpcTransport).

pub mod client;

pub use client::{HttpClientConfig, HttpRpcClient};
