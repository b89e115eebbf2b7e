//! `CasperClient`: one typed method per node RPC.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use casperrpc_core::{Absence, RpcOutcome, RpcTransport, RpcTransportExt};
use casperrpc_http::{HttpClientConfig, HttpRpcClient};
use casperrpc_types::{
    AccountInfo, Amount, AuctionInfo, BalanceResult, Block, BlockIdentifier, BlockParams,
    BlockTransfers, DeployResult, GetBlockResult, GetItemResult, PeersResult, PutDeployResult,
    StateRootHashResult, StatusResult, StoredValue,
};

use crate::error::ClientError;
use crate::methods;

/// Typed client for a Casper node's JSON-RPC API.
///
/// Each method performs exactly one RPC call. The client holds no state
/// besides its transport and a request-id counter, so it can be shared
/// across tasks behind an `Arc`.
pub struct CasperClient {
    transport: Arc<dyn RpcTransport>,
    next_id: AtomicU64,
}

impl CasperClient {
    /// Build a client over any transport.
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self {
            transport,
            next_id: AtomicU64::new(1),
        }
    }

    /// HTTP client for `url` with default settings.
    pub fn http(url: impl Into<String>) -> Result<Self, ClientError> {
        Self::http_with_config(url, HttpClientConfig::default())
    }

    pub fn http_with_config(
        url: impl Into<String>,
        config: HttpClientConfig,
    ) -> Result<Self, ClientError> {
        let transport = HttpRpcClient::new(url, config)?;
        Ok(Self::new(Arc::new(transport)))
    }

    pub fn url(&self) -> &str {
        self.transport.url()
    }

    // ─── Envelope plumbing ───────────────────────────────────────────────────

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// One RPC call, classified against the absence the method may report.
    pub(crate) async fn rpc(
        &self,
        method: &'static str,
        params: Option<Value>,
        expected: Option<Absence>,
    ) -> RpcOutcome<Value> {
        let result = self.transport.request(self.next_id(), method, params).await;
        RpcOutcome::classify(result, expected)
    }

    /// Call a method for which every RPC error is a failure.
    pub(crate) async fn query<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Option<Value>,
    ) -> Result<T, ClientError> {
        let value = self.transport.request(self.next_id(), method, params).await?;
        decode(method, value)
    }

    /// Call a method whose "not found" answer is `expected`.
    pub(crate) async fn query_optional<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Option<Value>,
        expected: Absence,
    ) -> Result<Option<T>, ClientError> {
        match self.rpc(method, params, Some(expected)).await.into_option()? {
            Some(value) => decode(method, value).map(Some),
            None => Ok(None),
        }
    }

    // ─── Deploys ─────────────────────────────────────────────────────────────

    /// Fetch a deploy and its execution results; `None` if the node has
    /// never seen the hash.
    pub async fn get_deploy(&self, hash: &str) -> Result<Option<DeployResult>, ClientError> {
        self.query_optional(
            methods::INFO_GET_DEPLOY,
            Some(json!({ "deploy_hash": hash })),
            Absence::DeployNotFound,
        )
        .await
    }

    /// Submit an already-signed deploy. The deploy is sent as-is; the node
    /// does all validation.
    pub async fn put_deploy<D: Serialize + ?Sized>(
        &self,
        deploy: &D,
    ) -> Result<PutDeployResult, ClientError> {
        let deploy = serde_json::to_value(deploy).map_err(|source| ClientError::Encode {
            method: methods::ACCOUNT_PUT_DEPLOY,
            source,
        })?;
        self.query(methods::ACCOUNT_PUT_DEPLOY, Some(json!({ "deploy": deploy })))
            .await
    }

    // ─── Global state ────────────────────────────────────────────────────────

    pub(crate) fn state_item_params(state_root_hash: &str, key: &str, path: &[String]) -> Value {
        let mut params = json!({
            "state_root_hash": state_root_hash,
            "key": key,
        });
        if !path.is_empty() {
            params["path"] = json!(path);
        }
        params
    }

    /// Read the value stored under `key` (optionally following `path`
    /// through named keys) at the given state root.
    pub async fn get_state_item(
        &self,
        state_root_hash: &str,
        key: &str,
        path: &[String],
    ) -> Result<StoredValue, ClientError> {
        let result: GetItemResult = self
            .query(
                methods::STATE_GET_ITEM,
                Some(Self::state_item_params(state_root_hash, key, path)),
            )
            .await?;
        Ok(result.stored_value)
    }

    /// Balance of the purse `purse_uref` at the given state root.
    pub async fn get_balance(
        &self,
        state_root_hash: &str,
        purse_uref: &str,
    ) -> Result<Amount, ClientError> {
        let result: BalanceResult = self
            .query(
                methods::STATE_GET_BALANCE,
                Some(json!({
                    "state_root_hash": state_root_hash,
                    "purse_uref": purse_uref,
                })),
            )
            .await?;
        Ok(result.balance_value)
    }

    /// Account record for a hex public key; `None` if the account is not
    /// yet recorded on chain.
    pub async fn get_account_info(
        &self,
        public_key: &str,
    ) -> Result<Option<AccountInfo>, ClientError> {
        self.query_optional(
            methods::STATE_GET_ACCOUNT_INFO,
            Some(json!({ "public_key": public_key })),
            Absence::AccountNotFound,
        )
        .await
    }

    /// Current auction snapshot: every bid with all of its delegators.
    pub async fn get_auction_info(&self) -> Result<AuctionInfo, ClientError> {
        self.query(methods::STATE_GET_AUCTION_INFO, None).await
    }

    /// State root hash of the latest block.
    pub async fn get_state_root_hash(&self) -> Result<String, ClientError> {
        let result: StateRootHashResult =
            self.query(methods::CHAIN_GET_STATE_ROOT_HASH, None).await?;
        result.state_root_hash.ok_or(ClientError::NoStateRootHash)
    }

    // ─── Blocks ──────────────────────────────────────────────────────────────

    async fn get_block(&self, id: Option<BlockIdentifier>) -> Result<Block, ClientError> {
        let params = block_params(methods::CHAIN_GET_BLOCK, id)?;
        let result: GetBlockResult = self.query(methods::CHAIN_GET_BLOCK, params).await?;
        Ok(result.block)
    }

    pub async fn get_latest_block(&self) -> Result<Block, ClientError> {
        self.get_block(None).await
    }

    pub async fn get_block_by_height(&self, height: u64) -> Result<Block, ClientError> {
        self.get_block(Some(BlockIdentifier::Height(height))).await
    }

    pub async fn get_block_by_hash(&self, hash: &str) -> Result<Block, ClientError> {
        self.get_block(Some(BlockIdentifier::Hash(hash.to_string())))
            .await
    }

    async fn get_block_transfers(
        &self,
        id: Option<BlockIdentifier>,
    ) -> Result<BlockTransfers, ClientError> {
        let params = block_params(methods::CHAIN_GET_BLOCK_TRANSFERS, id)?;
        self.query(methods::CHAIN_GET_BLOCK_TRANSFERS, params).await
    }

    pub async fn get_latest_block_transfers(&self) -> Result<BlockTransfers, ClientError> {
        self.get_block_transfers(None).await
    }

    pub async fn get_block_transfers_by_height(
        &self,
        height: u64,
    ) -> Result<BlockTransfers, ClientError> {
        self.get_block_transfers(Some(BlockIdentifier::Height(height)))
            .await
    }

    pub async fn get_block_transfers_by_hash(
        &self,
        hash: &str,
    ) -> Result<BlockTransfers, ClientError> {
        self.get_block_transfers(Some(BlockIdentifier::Hash(hash.to_string())))
            .await
    }

    // ─── Node info ───────────────────────────────────────────────────────────

    pub async fn get_status(&self) -> Result<StatusResult, ClientError> {
        self.query(methods::INFO_GET_STATUS, None).await
    }

    pub async fn get_peers(&self) -> Result<PeersResult, ClientError> {
        self.query(methods::INFO_GET_PEERS, None).await
    }

    /// Raw escape hatch: call any method and return the undecoded result.
    pub async fn call_raw(
        &self,
        method: &str,
        params: Option<Value>,
    ) -> Result<Value, ClientError> {
        Ok(self.transport.request(self.next_id(), method, params).await?)
    }
}

fn block_params(
    method: &'static str,
    id: Option<BlockIdentifier>,
) -> Result<Option<Value>, ClientError> {
    id.map(|id| serde_json::to_value(BlockParams::from(id)))
        .transpose()
        .map_err(|source| ClientError::Encode { method, source })
}

fn decode<T: DeserializeOwned>(method: &'static str, value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|source| ClientError::Decode { method, source })
}
