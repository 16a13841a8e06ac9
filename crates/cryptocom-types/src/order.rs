//! Order history, order detail, and order creation payloads

use crate::enums::{OrderSide, OrderStatus, OrderType, TimeInForce};
use crate::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One order as returned by `private/get-order-history` and `private/get-order-detail`
///
/// Fields the SDK does not model are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderHistoryEntry {
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(deserialize_with = "serde_helpers::id_string")]
    pub order_id: String,
    #[serde(default)]
    pub client_oid: Option<String>,
    pub order_type: OrderType,
    #[serde(default)]
    pub time_in_force: Option<TimeInForce>,
    pub side: OrderSide,
    pub status: OrderStatus,
    pub instrument_name: String,
    #[serde(deserialize_with = "serde_helpers::decimal")]
    pub quantity: Decimal,
    #[serde(default, deserialize_with = "serde_helpers::decimal_opt")]
    pub limit_price: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::decimal_opt")]
    pub order_value: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::decimal_opt")]
    pub avg_price: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::decimal_opt")]
    pub cumulative_quantity: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::decimal_opt")]
    pub cumulative_value: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::decimal_opt")]
    pub cumulative_fee: Option<Decimal>,
    #[serde(default)]
    pub fee_instrument_name: Option<String>,
    /// Milliseconds since the epoch
    #[serde(deserialize_with = "serde_helpers::int")]
    pub create_time: i64,
    /// Nanoseconds since the epoch
    #[serde(default, deserialize_with = "serde_helpers::int_opt")]
    pub create_time_ns: Option<i64>,
    /// Milliseconds since the epoch
    #[serde(default, deserialize_with = "serde_helpers::int_opt")]
    pub update_time: Option<i64>,
}

impl OrderHistoryEntry {
    /// Order value divided by quantity
    ///
    /// Falls back to `limit_price` when the value is missing or the quantity is zero.
    pub fn unit_price(&self) -> Option<Decimal> {
        match self.order_value {
            Some(value) if !self.quantity.is_zero() => Some(value / self.quantity),
            _ => self.limit_price,
        }
    }
}

/// Result of `private/get-order-history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderHistoryData {
    #[serde(default)]
    pub data: Vec<OrderHistoryEntry>,
}

/// Result of `private/create-order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderResult {
    #[serde(deserialize_with = "serde_helpers::id_string")]
    pub order_id: String,
    #[serde(default)]
    pub client_oid: Option<String>,
}
