//! Accounts (`state_get_account_info`, `StoredValue::Account`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Formatted as `account-hash-<hex>`.
    pub account_hash: String,
    #[serde(default)]
    pub named_keys: Vec<NamedKey>,
    /// URef of the purse holding the account's liquid balance.
    pub main_purse: String,
    #[serde(default)]
    pub associated_keys: Vec<AssociatedKey>,
    pub action_thresholds: ActionThresholds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedKey {
    pub name: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedKey {
    pub account_hash: String,
    pub weight: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionThresholds {
    pub deployment: u64,
    pub key_management: u64,
}

/// Result of `state_get_account_info`.
///
/// An account missing from chain is reported by the node as an error and
/// surfaces as `None` at the client level, never as a defaulted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub api_version: String,
    pub account: Account,
    #[serde(default)]
    pub merkle_proof: Option<String>,
}

impl AccountInfo {
    pub fn main_purse(&self) -> &str {
        &self.account.main_purse
    }
}

impl Account {
    /// Looks up a named key by name.
    pub fn named_key(&self, name: &str) -> Option<&str> {
        self.named_keys
            .iter()
            .find(|k| k.name == name)
            .map(|k| k.key.as_str())
    }
}
