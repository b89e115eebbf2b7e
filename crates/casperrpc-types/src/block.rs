//! Blocks and block identifiers (`chain_get_block`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Selects a block by hash or by height.
///
/// Serialized as `{"Hash": "..."}` or `{"Height": n}`. Height `0` is the
/// genesis block, not "latest"; the latest block is requested by sending
/// no identifier at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockIdentifier {
    Hash(String),
    Height(u64),
}

/// `params` object for block-scoped methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockParams {
    pub block_identifier: BlockIdentifier,
}

impl From<BlockIdentifier> for BlockParams {
    fn from(block_identifier: BlockIdentifier) -> Self {
        Self { block_identifier }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetBlockResult {
    #[serde(default)]
    pub api_version: String,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub hash: String,
    pub header: BlockHeader,
    pub body: BlockBody,
    pub proofs: Vec<Proof>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub parent_hash: String,
    pub state_root_hash: String,
    pub body_hash: String,
    pub random_bit: bool,
    pub accumulated_seed: String,
    pub timestamp: DateTime<Utc>,
    pub era_id: u64,
    pub height: u64,
    pub protocol_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockBody {
    pub proposer: String,
    pub deploy_hashes: Vec<String>,
    pub transfer_hashes: Vec<String>,
}

/// A validator's finality signature over the block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub public_key: String,
    pub signature: String,
}
