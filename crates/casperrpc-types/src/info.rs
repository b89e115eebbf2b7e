//! Node information: status, peers and state root hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of `info_get_status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResult {
    pub api_version: String,
    pub chainspec_name: String,
    pub build_version: String,
    /// `None` until the node has stored its first block.
    #[serde(default, rename = "last_added_block_info")]
    pub last_added_block: Option<BlockInfo>,
    #[serde(default)]
    pub starting_state_root_hash: Option<String>,
    #[serde(default)]
    pub our_public_signing_key: Option<String>,
    #[serde(default)]
    pub round_length: Option<String>,
    #[serde(default)]
    pub uptime: Option<String>,
    #[serde(default)]
    pub peers: Vec<Peer>,
}

/// Summary of a block as reported in node status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub hash: String,
    pub timestamp: DateTime<Utc>,
    pub era_id: u64,
    pub height: u64,
    pub state_root_hash: String,
    pub creator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    pub node_id: String,
    pub address: String,
}

/// Result of `info_get_peers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeersResult {
    #[serde(default)]
    pub api_version: String,
    pub peers: Vec<Peer>,
}

/// Result of `chain_get_state_root_hash`; `None` before genesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRootHashResult {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub state_root_hash: Option<String>,
}
