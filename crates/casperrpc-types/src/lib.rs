//! casperrpc-types: records mirroring the node's JSON schemas.
//!
//! Every record is decoded fresh from one RPC response and never mutated.
//! Decoding is strict for required fields and ignores unknown fields.
//!
//! - [`Amount`]: non-negative big integer carried as a base-10 string
//! - [`StoredValue`]: validated union of global-state value kinds
//! - [`Block`], [`DeployResult`], [`AccountInfo`], [`AuctionState`], ...

pub mod account;
pub mod amount;
pub mod auction;
pub mod block;
pub mod deploy;
pub mod info;
pub mod state;
pub mod transfer;

pub use account::{Account, AccountInfo, ActionThresholds, AssociatedKey, NamedKey};
pub use amount::{Amount, ParseAmountError};
pub use auction::{AuctionInfo, AuctionState, Bid, BidInfo, Delegator, EraValidators, ValidatorWeight};
pub use block::{Block, BlockBody, BlockHeader, BlockIdentifier, BlockParams, GetBlockResult, Proof};
pub use deploy::{
    Approval, Deploy, DeployHeader, DeployResult, ExecutionOutcome, ExecutionResult,
    ExecutionResultEntry, PutDeployResult,
};
pub use info::{BlockInfo, Peer, PeersResult, StateRootHashResult, StatusResult};
pub use state::{
    BalanceResult, CLValue, Contract, DeployInfo, GetItemResult, StoredValue, StoredValueError,
    StoredValueKind,
};
pub use transfer::{BlockTransfers, Transfer};
