//! Node JSON-RPC method names.

pub const INFO_GET_DEPLOY: &str = "info_get_deploy";
pub const INFO_GET_STATUS: &str = "info_get_status";
pub const INFO_GET_PEERS: &str = "info_get_peers";
pub const STATE_GET_ITEM: &str = "state_get_item";
pub const STATE_GET_BALANCE: &str = "state_get_balance";
pub const STATE_GET_AUCTION_INFO: &str = "state_get_auction_info";
pub const STATE_GET_ACCOUNT_INFO: &str = "state_get_account_info";
pub const CHAIN_GET_BLOCK: &str = "chain_get_block";
pub const CHAIN_GET_BLOCK_TRANSFERS: &str = "chain_get_block_transfers";
pub const CHAIN_GET_STATE_ROOT_HASH: &str = "chain_get_state_root_hash";
pub const ACCOUNT_PUT_DEPLOY: &str = "account_put_deploy";
