//! Auction snapshot: validator bids and their delegators (`state_get_auction_info`).

use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// Result of `state_get_auction_info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionInfo {
    #[serde(default)]
    pub api_version: String,
    pub auction_state: AuctionState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionState {
    pub state_root_hash: String,
    pub block_height: u64,
    pub era_validators: Vec<EraValidators>,
    pub bids: Vec<BidInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EraValidators {
    pub era_id: u64,
    pub validator_weights: Vec<ValidatorWeight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorWeight {
    pub public_key: String,
    pub weight: Amount,
}

/// One validator's bid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidInfo {
    pub public_key: String,
    pub bid: Bid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub bonding_purse: String,
    pub staked_amount: Amount,
    pub delegation_rate: u8,
    #[serde(default)]
    pub delegators: Vec<Delegator>,
    #[serde(default)]
    pub inactive: bool,
}

/// Stake delegated by `public_key` to the validator `delegatee`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delegator {
    pub public_key: String,
    pub staked_amount: Amount,
    pub bonding_purse: String,
    pub delegatee: String,
}

impl AuctionState {
    /// Every delegation made by `public_key`, across all bids.
    ///
    /// Results keep snapshot order: bid order first, then delegator order
    /// within each bid.
    pub fn delegations_of<'a>(
        &'a self,
        public_key: &'a str,
    ) -> impl Iterator<Item = &'a Delegator> + 'a {
        self.bids
            .iter()
            .flat_map(|bid| bid.bid.delegators.iter())
            .filter(move |d| d.public_key == public_key)
    }

    /// Validator weights for `era_id`, if the snapshot covers that era.
    pub fn validators_for_era(&self, era_id: u64) -> Option<&[ValidatorWeight]> {
        self.era_validators
            .iter()
            .find(|e| e.era_id == era_id)
            .map(|e| e.validator_weights.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn delegator(pk: &str, amount: &str, validator: &str) -> serde_json::Value {
        json!({
            "public_key": pk,
            "staked_amount": amount,
            "bonding_purse": format!("uref-{pk}-{validator}-007"),
            "delegatee": validator
        })
    }

    fn snapshot() -> AuctionState {
        let info: AuctionInfo = serde_json::from_value(json!({
            "api_version": "1.4.3",
            "auction_state": {
                "state_root_hash": "s1",
                "block_height": 100,
                "era_validators": [{
                    "era_id": 7,
                    "validator_weights": [{"public_key": "v1", "weight": "1000"}]
                }],
                "bids": [
                    {
                        "public_key": "v1",
                        "bid": {
                            "bonding_purse": "uref-v1-007",
                            "staked_amount": "1000",
                            "delegation_rate": 10,
                            "delegators": [
                                delegator("alice", "5", "v1"),
                                delegator("bob", "6", "v1")
                            ],
                            "inactive": false
                        }
                    },
                    {
                        "public_key": "v2",
                        "bid": {
                            "bonding_purse": "uref-v2-007",
                            "staked_amount": "2000",
                            "delegation_rate": 5,
                            "delegators": [delegator("alice", "7", "v2")],
                            "inactive": true
                        }
                    }
                ]
            }
        }))
        .unwrap();
        info.auction_state
    }

    #[test]
    fn delegations_follow_bid_then_delegator_order() {
        let state = snapshot();
        let found: Vec<_> = state.delegations_of("alice").collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].delegatee, "v1");
        assert_eq!(found[1].delegatee, "v2");
        let total: Amount = found.iter().map(|d| &d.staked_amount).sum();
        assert_eq!(total, Amount::from(12u64));
    }

    #[test]
    fn unknown_delegator_yields_nothing() {
        assert_eq!(snapshot().delegations_of("carol").count(), 0);
    }

    #[test]
    fn era_weights_lookup() {
        let state = snapshot();
        assert_eq!(state.validators_for_era(7).unwrap()[0].public_key, "v1");
        assert!(state.validators_for_era(8).is_none());
    }
}
