//! casperrpc-client: typed queries against a Casper node.
//!
//! [`CasperClient`] maps each node method onto a typed call and builds the
//! composite queries (liquid balance, staked balance, purse resolution) on
//! top of them. [`BlockingClient`] offers the same operations for callers
//! without an async runtime.
//!
//! # Quick start
//! ```rust,no_run
//! use casperrpc_client::CasperClient;
//!
//! # async fn run() -> Result<(), casperrpc_client::ClientError> {
//! let client = CasperClient::http("http://127.0.0.1:7777/rpc")?;
//! let balance = client.get_liquid_balance("01a35887f3962a6a232e8e11fa7d4567b6866d68850974aad7289ef287676825f6").await?;
//! println!("{balance} motes");
//! # Ok(())
//! # }
//! ```

pub mod blocking;
pub mod client;
pub mod composite;
pub mod error;
pub mod keypair;
pub mod methods;

pub use blocking::BlockingClient;
pub use client::CasperClient;
pub use composite::PurseLookup;
pub use error::ClientError;
pub use keypair::KeyPair;

pub use casperrpc_core::{Absence, RpcTransport, TransportError};
pub use casperrpc_http::HttpClientConfig;
pub use casperrpc_types as types;
