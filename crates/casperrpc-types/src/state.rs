//! Global-state query results (`state_get_item`, `state_get_balance`).
//!
//! [`StoredValue`] is the node's union of every value kind retrievable by key.
//! On the wire it is an object with one populated variant field, e.g.
//! `{"Account": {...}}`. All variant fields are read as optionals first and
//! then validated: zero or several populated fields are a decode error.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::account::{Account, NamedKey};
use crate::amount::Amount;
use crate::transfer::Transfer;

/// Variant names of [`StoredValue`], for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoredValueKind {
    CLValue,
    Account,
    Contract,
    ContractWasm,
    ContractPackage,
    Transfer,
    DeployInfo,
}

impl fmt::Display for StoredValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CLValue => "CLValue",
            Self::Account => "Account",
            Self::Contract => "Contract",
            Self::ContractWasm => "ContractWASM",
            Self::ContractPackage => "ContractPackage",
            Self::Transfer => "Transfer",
            Self::DeployInfo => "DeployInfo",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoredValueError {
    #[error("stored value has no recognised variant")]
    Empty,

    #[error("stored value has several variants populated: {0:?}")]
    Ambiguous(Vec<StoredValueKind>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStoredValue")]
pub enum StoredValue {
    CLValue(CLValue),
    Account(Account),
    Contract(Contract),
    #[serde(rename = "ContractWASM")]
    ContractWasm(String),
    /// Package layout varies across node versions and is kept as raw JSON.
    ContractPackage(Value),
    Transfer(Transfer),
    DeployInfo(DeployInfo),
}

impl StoredValue {
    pub fn kind(&self) -> StoredValueKind {
        match self {
            Self::CLValue(_) => StoredValueKind::CLValue,
            Self::Account(_) => StoredValueKind::Account,
            Self::Contract(_) => StoredValueKind::Contract,
            Self::ContractWasm(_) => StoredValueKind::ContractWasm,
            Self::ContractPackage(_) => StoredValueKind::ContractPackage,
            Self::Transfer(_) => StoredValueKind::Transfer,
            Self::DeployInfo(_) => StoredValueKind::DeployInfo,
        }
    }

    pub fn as_cl_value(&self) -> Option<&CLValue> {
        match self {
            Self::CLValue(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_account(&self) -> Option<&Account> {
        match self {
            Self::Account(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_contract(&self) -> Option<&Contract> {
        match self {
            Self::Contract(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_transfer(&self) -> Option<&Transfer> {
        match self {
            Self::Transfer(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_deploy_info(&self) -> Option<&DeployInfo> {
        match self {
            Self::DeployInfo(v) => Some(v),
            _ => None,
        }
    }

    /// Take the account out, handing the value back on mismatch.
    pub fn into_account(self) -> Result<Account, Self> {
        match self {
            Self::Account(v) => Ok(v),
            other => Err(other),
        }
    }
}

/// Wire form: every variant optional, unknown fields ignored.
#[derive(Deserialize)]
struct RawStoredValue {
    #[serde(rename = "CLValue", default)]
    cl_value: Option<CLValue>,
    #[serde(rename = "Account", default)]
    account: Option<Account>,
    #[serde(rename = "Contract", default)]
    contract: Option<Contract>,
    #[serde(rename = "ContractWASM", default)]
    contract_wasm: Option<String>,
    #[serde(rename = "ContractPackage", default)]
    contract_package: Option<Value>,
    #[serde(rename = "Transfer", default)]
    transfer: Option<Transfer>,
    #[serde(rename = "DeployInfo", default)]
    deploy_info: Option<DeployInfo>,
}

impl TryFrom<RawStoredValue> for StoredValue {
    type Error = StoredValueError;

    fn try_from(raw: RawStoredValue) -> Result<Self, Self::Error> {
        let mut found = Vec::with_capacity(1);
        if let Some(v) = raw.cl_value {
            found.push(StoredValue::CLValue(v));
        }
        if let Some(v) = raw.account {
            found.push(StoredValue::Account(v));
        }
        if let Some(v) = raw.contract {
            found.push(StoredValue::Contract(v));
        }
        if let Some(v) = raw.contract_wasm {
            found.push(StoredValue::ContractWasm(v));
        }
        if let Some(v) = raw.contract_package {
            found.push(StoredValue::ContractPackage(v));
        }
        if let Some(v) = raw.transfer {
            found.push(StoredValue::Transfer(v));
        }
        if let Some(v) = raw.deploy_info {
            found.push(StoredValue::DeployInfo(v));
        }

        match found.len() {
            0 => Err(StoredValueError::Empty),
            1 => Ok(found.remove(0)),
            _ => Err(StoredValueError::Ambiguous(
                found.iter().map(StoredValue::kind).collect(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CLValue {
    /// CL type descriptor: a name such as `"U512"` or a nested object.
    pub cl_type: Value,
    /// Hex-encoded serialized bytes.
    pub bytes: String,
    #[serde(default)]
    pub parsed: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub contract_package_hash: String,
    pub contract_wasm_hash: String,
    pub protocol_version: String,
    #[serde(default)]
    pub named_keys: Vec<NamedKey>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployInfo {
    pub deploy_hash: String,
    pub transfers: Vec<String>,
    pub from: String,
    pub source: String,
    pub gas: Amount,
}

/// Result of `state_get_item`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetItemResult {
    #[serde(default)]
    pub api_version: String,
    pub stored_value: StoredValue,
    #[serde(default)]
    pub merkle_proof: Option<String>,
}

/// Result of `state_get_balance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResult {
    #[serde(default)]
    pub api_version: String,
    pub balance_value: Amount,
    #[serde(default)]
    pub merkle_proof: Option<String>,
}
