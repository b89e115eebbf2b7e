//! Deploys and their execution results (`info_get_deploy`, `account_put_deploy`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::amount::Amount;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployResult {
    #[serde(default)]
    pub api_version: String,
    pub deploy: Deploy,
    /// One entry per block the deploy was executed in; empty while pending.
    #[serde(default)]
    pub execution_results: Vec<ExecutionResultEntry>,
}

/// A deploy as echoed back by the node.
///
/// `payment` and `session` are executable items whose shape depends on the
/// deploy kind; they are kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deploy {
    pub hash: String,
    pub header: DeployHeader,
    #[serde(default)]
    pub payment: Value,
    pub session: Value,
    pub approvals: Vec<Approval>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployHeader {
    pub account: String,
    pub timestamp: DateTime<Utc>,
    /// Human-readable duration such as `"30m"`.
    pub ttl: String,
    pub gas_price: u64,
    pub body_hash: String,
    pub dependencies: Vec<String>,
    pub chain_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    pub signer: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResultEntry {
    pub block_hash: String,
    pub result: ExecutionResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExecutionResult {
    Success(ExecutionOutcome),
    Failure(ExecutionOutcome),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    #[serde(default)]
    pub transfers: Vec<String>,
    pub cost: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn outcome(&self) -> &ExecutionOutcome {
        match self {
            Self::Success(o) | Self::Failure(o) => o,
        }
    }

    pub fn cost(&self) -> &Amount {
        &self.outcome().cost
    }

    /// The node's error message for failed executions.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(o) => o.error_message.as_deref(),
        }
    }
}

/// Result of `account_put_deploy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutDeployResult {
    #[serde(default)]
    pub api_version: String,
    pub deploy_hash: String,
}
