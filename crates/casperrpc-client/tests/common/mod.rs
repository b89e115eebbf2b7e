//! Shared test doubles and fixtures.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use casperrpc_client::CasperClient;
use casperrpc_core::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcTransport, TransportError};
use serde_json::{json, Value};

/// Canned answer for one call.
pub enum Reply {
    Result(Value),
    RpcError(i64, &'static str),
    Status(u16, &'static str),
}

/// In-memory transport: replays canned replies per method, in order, and
/// records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<JsonRpcRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(self: &Arc<Self>, method: &str, reply: Reply) -> Arc<Self> {
        self.replies
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_default()
            .push_back(reply);
        Arc::clone(self)
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.method.clone())
            .collect()
    }

    pub fn requests(&self) -> Vec<JsonRpcRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn client(self: &Arc<Self>) -> CasperClient {
        CasperClient::new(Arc::clone(self) as Arc<dyn RpcTransport>)
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError> {
        self.calls.lock().unwrap().push(req.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .get_mut(&req.method)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| TransportError::Other(format!("no canned reply for {}", req.method)))?;

        let (result, error) = match reply {
            Reply::Result(value) => (Some(value), None),
            Reply::RpcError(code, message) => (
                None,
                Some(JsonRpcError {
                    code,
                    message: message.into(),
                    data: None,
                }),
            ),
            Reply::Status(status, body) => {
                return Err(TransportError::HttpStatus {
                    status,
                    body: body.into(),
                })
            }
        };
        Ok(JsonRpcResponse {
            jsonrpc: "2.0".into(),
            id: req.id,
            result,
            error,
        })
    }

    fn url(&self) -> &str {
        "mock://node"
    }
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

pub const PUBLIC_KEY: &str = "01a35887f3962a6a232e8e11fa7d4567b6866d68850974aad7289ef287676825f6";
pub const ACCOUNT_HASH: &str =
    "account-hash-e70dbca48c2d31bc2d754e51860ceaa8a1a49dc627b20320b0ecee1b6d9ce655";
pub const MAIN_PURSE: &str =
    "uref-b06a1ab0cfb52b5d4f9a08b68a5dbe78e999de0b0484c03e64f5c03897cf637b-007";
pub const STATE_ROOT: &str = "c0eb76e0c3c7a928a0cb43e82eb4fad683d9ad626bcd3b7835a466c0587b0fff";

pub fn state_root_result() -> Value {
    json!({"api_version": "1.4.3", "state_root_hash": STATE_ROOT})
}

pub fn account_json() -> Value {
    json!({
        "account_hash": ACCOUNT_HASH,
        "named_keys": [],
        "main_purse": MAIN_PURSE,
        "associated_keys": [{"account_hash": ACCOUNT_HASH, "weight": 1}],
        "action_thresholds": {"deployment": 1, "key_management": 1}
    })
}

pub fn account_info_result() -> Value {
    json!({"api_version": "1.4.3", "account": account_json(), "merkle_proof": "01"})
}

pub fn balance_result(value: &str) -> Value {
    json!({"api_version": "1.4.3", "balance_value": value, "merkle_proof": "01"})
}

pub fn item_result(stored_value: Value) -> Value {
    json!({"api_version": "1.4.3", "stored_value": stored_value, "merkle_proof": "01"})
}

pub fn block_result(height: u64) -> Value {
    json!({
        "api_version": "1.4.3",
        "block": {
            "hash": format!("block-{height}"),
            "header": {
                "parent_hash": "p",
                "state_root_hash": STATE_ROOT,
                "body_hash": "bh",
                "random_bit": false,
                "accumulated_seed": "seed",
                "era_end": null,
                "timestamp": "2021-04-08T16:35:00.000Z",
                "era_id": 9,
                "height": height,
                "protocol_version": "1.4.3"
            },
            "body": {"proposer": "01aa", "deploy_hashes": [], "transfer_hashes": []},
            "proofs": []
        }
    })
}

pub fn delegator(public_key: &str, amount: &str, validator: &str) -> Value {
    json!({
        "public_key": public_key,
        "staked_amount": amount,
        "bonding_purse": "uref-0000000000000000000000000000000000000000000000000000000000000000-007",
        "delegatee": validator
    })
}

pub fn auction_result(bids: Vec<(&str, Vec<Value>)>) -> Value {
    let bids: Vec<Value> = bids
        .into_iter()
        .map(|(validator, delegators)| {
            json!({
                "public_key": validator,
                "bid": {
                    "bonding_purse": "uref-1111111111111111111111111111111111111111111111111111111111111111-007",
                    "staked_amount": "500000000000",
                    "delegation_rate": 10,
                    "delegators": delegators,
                    "inactive": false
                }
            })
        })
        .collect();
    json!({
        "api_version": "1.4.3",
        "auction_state": {
            "state_root_hash": STATE_ROOT,
            "block_height": 120,
            "era_validators": [],
            "bids": bids
        }
    })
}
