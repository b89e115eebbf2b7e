//! Native transfers (`chain_get_block_transfers`, `StoredValue::Transfer`).

use serde::{Deserialize, Serialize};

use crate::amount::Amount;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// User-supplied memo id, if any.
    #[serde(default)]
    pub id: Option<u64>,
    pub deploy_hash: String,
    pub from: String,
    /// Target account hash; unset when transferring to a bare purse.
    #[serde(default)]
    pub to: Option<String>,
    pub source: String,
    pub target: String,
    pub amount: Amount,
    pub gas: Amount,
}

/// Result of `chain_get_block_transfers`. Both fields are null when the
/// node does not know the requested block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockTransfers {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub block_hash: Option<String>,
    #[serde(default)]
    pub transfers: Option<Vec<Transfer>>,
}

impl BlockTransfers {
    /// Transfers in node order; empty when the block is unknown.
    pub fn transfers(&self) -> &[Transfer] {
        self.transfers.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_transfers() {
        let result: BlockTransfers = serde_json::from_value(json!({
            "api_version": "1.4.3",
            "block_hash": "bb",
            "transfers": [{
                "id": null,
                "deploy_hash": "dd",
                "from": "account-hash-aa",
                "to": null,
                "source": "uref-01-007",
                "target": "uref-02-004",
                "amount": "1000000000000",
                "gas": "0"
            }]
        }))
        .unwrap();
        let transfer = &result.transfers()[0];
        assert_eq!(transfer.id, None);
        assert_eq!(transfer.to, None);
        assert_eq!(transfer.amount, Amount::from(1_000_000_000_000u64));
        assert!(transfer.gas.is_zero());
    }

    #[test]
    fn unknown_block_has_no_transfers() {
        let result: BlockTransfers = serde_json::from_value(json!({
            "api_version": "1.4.3",
            "block_hash": null,
            "transfers": null
        }))
        .unwrap();
        assert!(result.block_hash.is_none());
        assert!(result.transfers().is_empty());
    }
}
