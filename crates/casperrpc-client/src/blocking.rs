//! Synchronous facade over [`CasperClient`].
//!
//! Each method blocks the calling thread until its call chain completes.
//! The facade owns a current-thread Tokio runtime and is `Send + Sync`, so
//! one instance can serve several threads concurrently.

use serde::Serialize;
use serde_json::Value;
use tokio::runtime::{Builder, Runtime};

use casperrpc_http::HttpClientConfig;
use casperrpc_types::{
    AccountInfo, Amount, AuctionInfo, Block, BlockTransfers, Delegator, DeployResult, PeersResult,
    PutDeployResult, StatusResult, StoredValue,
};

use crate::client::CasperClient;
use crate::composite::PurseLookup;
use crate::error::ClientError;
use crate::keypair::KeyPair;

pub struct BlockingClient {
    inner: CasperClient,
    runtime: Runtime,
}

impl BlockingClient {
    /// Wrap an async client. Must not be called from inside a Tokio runtime.
    pub fn new(inner: CasperClient) -> Result<Self, ClientError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, runtime })
    }

    pub fn http(url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(CasperClient::http(url)?)
    }

    pub fn http_with_config(
        url: impl Into<String>,
        config: HttpClientConfig,
    ) -> Result<Self, ClientError> {
        Self::new(CasperClient::http_with_config(url, config)?)
    }

    pub fn inner(&self) -> &CasperClient {
        &self.inner
    }

    pub fn get_deploy(&self, hash: &str) -> Result<Option<DeployResult>, ClientError> {
        self.runtime.block_on(self.inner.get_deploy(hash))
    }

    pub fn put_deploy<D: Serialize + ?Sized>(
        &self,
        deploy: &D,
    ) -> Result<PutDeployResult, ClientError> {
        self.runtime.block_on(self.inner.put_deploy(deploy))
    }

    pub fn get_state_item(
        &self,
        state_root_hash: &str,
        key: &str,
        path: &[String],
    ) -> Result<StoredValue, ClientError> {
        self.runtime
            .block_on(self.inner.get_state_item(state_root_hash, key, path))
    }

    pub fn get_balance(&self, state_root_hash: &str, purse_uref: &str) -> Result<Amount, ClientError> {
        self.runtime
            .block_on(self.inner.get_balance(state_root_hash, purse_uref))
    }

    pub fn get_account_info(&self, public_key: &str) -> Result<Option<AccountInfo>, ClientError> {
        self.runtime.block_on(self.inner.get_account_info(public_key))
    }

    pub fn get_auction_info(&self) -> Result<AuctionInfo, ClientError> {
        self.runtime.block_on(self.inner.get_auction_info())
    }

    pub fn get_state_root_hash(&self) -> Result<String, ClientError> {
        self.runtime.block_on(self.inner.get_state_root_hash())
    }

    pub fn get_latest_block(&self) -> Result<Block, ClientError> {
        self.runtime.block_on(self.inner.get_latest_block())
    }

    pub fn get_block_by_height(&self, height: u64) -> Result<Block, ClientError> {
        self.runtime.block_on(self.inner.get_block_by_height(height))
    }

    pub fn get_block_by_hash(&self, hash: &str) -> Result<Block, ClientError> {
        self.runtime.block_on(self.inner.get_block_by_hash(hash))
    }

    pub fn get_latest_block_transfers(&self) -> Result<BlockTransfers, ClientError> {
        self.runtime.block_on(self.inner.get_latest_block_transfers())
    }

    pub fn get_block_transfers_by_height(&self, height: u64) -> Result<BlockTransfers, ClientError> {
        self.runtime
            .block_on(self.inner.get_block_transfers_by_height(height))
    }

    pub fn get_block_transfers_by_hash(&self, hash: &str) -> Result<BlockTransfers, ClientError> {
        self.runtime
            .block_on(self.inner.get_block_transfers_by_hash(hash))
    }

    pub fn get_status(&self) -> Result<StatusResult, ClientError> {
        self.runtime.block_on(self.inner.get_status())
    }

    pub fn get_peers(&self) -> Result<PeersResult, ClientError> {
        self.runtime.block_on(self.inner.get_peers())
    }

    pub fn call_raw(&self, method: &str, params: Option<Value>) -> Result<Value, ClientError> {
        self.runtime.block_on(self.inner.call_raw(method, params))
    }

    pub fn get_liquid_balance(&self, public_key: &str) -> Result<Amount, ClientError> {
        self.runtime.block_on(self.inner.get_liquid_balance(public_key))
    }

    pub fn get_staking_balance(&self, public_key: &str) -> Result<Vec<Delegator>, ClientError> {
        self.runtime.block_on(self.inner.get_staking_balance(public_key))
    }

    pub fn get_account_main_purse_uref(&self, account_hash: &str) -> PurseLookup {
        self.runtime
            .block_on(self.inner.get_account_main_purse_uref(account_hash))
    }

    pub fn get_account_balance_by_keypair(
        &self,
        state_root_hash: &str,
        key: &dyn KeyPair,
    ) -> Result<Amount, ClientError> {
        self.runtime
            .block_on(self.inner.get_account_balance_by_keypair(state_root_hash, key))
    }
}
