//! Queries that chain several RPC calls.
//!
//! Each query is a fresh, stateless call chain: no retries and no caching of
//! intermediate results. Absence reported by an intermediate lookup ends the
//! chain with a defined result instead of an error.

use casperrpc_core::{Absence, RpcOutcome};
use casperrpc_types::{Account, Amount, Delegator, GetItemResult, StoredValue, StoredValueKind};

use crate::client::CasperClient;
use crate::error::ClientError;
use crate::keypair::KeyPair;
use crate::methods;

/// Outcome of resolving an account's main purse.
#[derive(Debug)]
pub enum PurseLookup {
    /// The account exists; this is its main purse URef.
    Found(String),
    /// No account is recorded under the hash at the current state root.
    Absent,
    /// A lookup step failed.
    Failed(ClientError),
}

impl PurseLookup {
    pub fn found(&self) -> Option<&str> {
        match self {
            Self::Found(uref) => Some(uref),
            _ => None,
        }
    }

    /// Fold back into a `Result`, keeping absence distinct from failure.
    pub fn into_result(self) -> Result<Option<String>, ClientError> {
        match self {
            Self::Found(uref) => Ok(Some(uref)),
            Self::Absent => Ok(None),
            Self::Failed(err) => Err(err),
        }
    }
}

fn expect_account(value: StoredValue) -> Result<Account, ClientError> {
    value
        .into_account()
        .map_err(|other| ClientError::UnexpectedStoredValue {
            expected: StoredValueKind::Account,
            found: other.kind(),
        })
}

impl CasperClient {
    /// Liquid (main purse) balance of the account owning `public_key`.
    ///
    /// An account not yet recorded on chain has balance zero; no balance
    /// query is issued in that case. The state root and account lookups are
    /// independent and run concurrently; if both fail, the state root error
    /// is the one reported.
    pub async fn get_liquid_balance(&self, public_key: &str) -> Result<Amount, ClientError> {
        let (state_root_hash, account) = futures::join!(
            self.get_state_root_hash(),
            self.get_account_info(public_key)
        );
        let state_root_hash = state_root_hash?;

        let Some(account) = account? else {
            tracing::debug!(public_key, "account not on chain, liquid balance is zero");
            return Ok(Amount::zero());
        };

        self.get_balance(&state_root_hash, account.main_purse())
            .await
    }

    /// Every delegation made by `public_key`, in auction snapshot order.
    ///
    /// The whole bid set is fetched and scanned on each call. An empty list
    /// means the key delegates to no validator.
    pub async fn get_staking_balance(&self, public_key: &str) -> Result<Vec<Delegator>, ClientError> {
        let info = self.get_auction_info().await?;
        let delegations: Vec<Delegator> = info
            .auction_state
            .delegations_of(public_key)
            .cloned()
            .collect();
        tracing::debug!(
            public_key,
            bids = info.auction_state.bids.len(),
            matches = delegations.len(),
            "scanned auction snapshot"
        );
        Ok(delegations)
    }

    /// Resolve the main purse of the account stored under `account_hash`
    /// at the latest block's state root.
    ///
    /// Never returns an error directly: failures are captured in
    /// [`PurseLookup::Failed`] so they stay distinguishable from absence.
    pub async fn get_account_main_purse_uref(&self, account_hash: &str) -> PurseLookup {
        let block = match self.get_latest_block().await {
            Ok(block) => block,
            Err(err) => {
                tracing::warn!(account_hash, error = %err, "latest block lookup failed");
                return PurseLookup::Failed(err);
            }
        };

        let params =
            Self::state_item_params(&block.header.state_root_hash, account_hash, &[]);
        let outcome = self
            .rpc(methods::STATE_GET_ITEM, Some(params), Some(Absence::AccountNotFound))
            .await;

        let value = match outcome {
            RpcOutcome::Ok(value) => value,
            RpcOutcome::NotFound(_) => return PurseLookup::Absent,
            RpcOutcome::Failure(err) => {
                tracing::warn!(account_hash, error = %err, "state item lookup failed");
                return PurseLookup::Failed(err.into());
            }
        };

        let decoded = serde_json::from_value::<GetItemResult>(value)
            .map_err(|source| ClientError::Decode {
                method: methods::STATE_GET_ITEM,
                source,
            })
            .and_then(|item| expect_account(item.stored_value));

        match decoded {
            Ok(account) => PurseLookup::Found(account.main_purse),
            Err(err) => {
                tracing::warn!(account_hash, error = %err, "state item is not a usable account");
                PurseLookup::Failed(err)
            }
        }
    }

    /// Main purse balance of the account controlled by `key`, at an
    /// explicit state root. Every failure, absence included, propagates.
    pub async fn get_account_balance_by_keypair(
        &self,
        state_root_hash: &str,
        key: &dyn KeyPair,
    ) -> Result<Amount, ClientError> {
        let account_hash = key.account_hash();
        let item = self
            .get_state_item(state_root_hash, &account_hash, &[])
            .await?;
        let account = expect_account(item)?;
        self.get_balance(state_root_hash, &account.main_purse)
            .await
    }
}
