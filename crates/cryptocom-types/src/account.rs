//! Account balance payloads

use crate::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance of a single currency inside a [`UserBalance`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionBalance {
    pub instrument_name: String,
    #[serde(deserialize_with = "serde_helpers::decimal")]
    pub quantity: Decimal,
    #[serde(deserialize_with = "serde_helpers::decimal")]
    pub market_value: Decimal,
    #[serde(default, deserialize_with = "serde_helpers::decimal_opt")]
    pub reserved_qty: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::decimal_opt")]
    pub max_withdrawal_balance: Option<Decimal>,
}

/// One account summary from `private/user-balance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBalance {
    /// Settlement currency for the totals
    pub instrument_name: String,
    #[serde(deserialize_with = "serde_helpers::decimal")]
    pub total_available_balance: Decimal,
    #[serde(deserialize_with = "serde_helpers::decimal")]
    pub total_margin_balance: Decimal,
    #[serde(default, deserialize_with = "serde_helpers::decimal_opt")]
    pub total_cash_balance: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::decimal_opt")]
    pub total_collateral_value: Option<Decimal>,
    #[serde(default)]
    pub position_balances: Vec<PositionBalance>,
}

impl UserBalance {
    /// Sum of the market value of every position
    pub fn total_market_value(&self) -> Decimal {
        self.position_balances.iter().map(|p| p.market_value).sum()
    }

    /// Position for one currency
    pub fn position(&self, currency: &str) -> Option<&PositionBalance> {
        self.position_balances
            .iter()
            .find(|p| p.instrument_name == currency)
    }
}

/// Result of `private/user-balance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBalanceData {
    #[serde(default)]
    pub data: Vec<UserBalance>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_parse_user_balance() {
        let data: UserBalanceData = serde_json::from_value(json!({
            "data": [{
                "total_available_balance": "28000",
                "total_margin_balance": 28000.0,
                "total_cash_balance": "28000",
                "instrument_name": "USD",
                "is_liquidating": false,
                "position_balances": [
                    {"instrument_name": "BTC", "quantity": "0.5", "market_value": "25000", "reserved_qty": "0"},
                    {"instrument_name": "ETH", "quantity": "10", "market_value": "3000"}
                ]
            }]
        }))
        .unwrap();

        let account = &data.data[0];
        assert_eq!(account.total_available_balance, dec!(28000));
        assert_eq!(account.total_market_value(), dec!(28000));
        assert_eq!(account.position("ETH").unwrap().quantity, dec!(10));
        assert!(account.position("SOL").is_none());
    }
}
