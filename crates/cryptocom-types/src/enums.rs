//! Method, interval, side, and order enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// API methods used by this SDK
///
/// The wire name doubles as the URL path segment below the API root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Method {
    /// `public/get-candlestick`
    GetCandlestick,
    /// `private/get-order-history`
    GetOrderHistory,
    /// `private/create-order`
    CreateOrder,
    /// `private/cancel-order`
    CancelOrder,
    /// `private/cancel-all-orders`
    CancelAllOrders,
    /// `private/get-order-detail`
    GetOrderDetail,
    /// `private/user-balance`
    UserBalance,
}

impl Method {
    /// Returns the method name as used in request envelopes and URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetCandlestick => "public/get-candlestick",
            Self::GetOrderHistory => "private/get-order-history",
            Self::CreateOrder => "private/create-order",
            Self::CancelOrder => "private/cancel-order",
            Self::CancelAllOrders => "private/cancel-all-orders",
            Self::GetOrderDetail => "private/get-order-detail",
            Self::UserBalance => "private/user-balance",
        }
    }

    /// Returns true if this method must be signed
    pub fn is_private(&self) -> bool {
        !matches!(self, Self::GetCandlestick)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known enum value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    /// Which enum was being parsed
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

/// Candlestick timeframes accepted by `public/get-candlestick`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandlestickInterval {
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "15m")]
    Minute15,
    #[serde(rename = "30m")]
    Minute30,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "2h")]
    Hour2,
    #[serde(rename = "4h")]
    Hour4,
    #[serde(rename = "12h")]
    Hour12,
    #[serde(rename = "1D")]
    Day1,
    #[serde(rename = "7D")]
    Day7,
    #[serde(rename = "14D")]
    Day14,
    /// Calendar month, treated as 30 days for window arithmetic
    #[serde(rename = "1M")]
    Month1,
}

impl CandlestickInterval {
    /// All intervals, shortest first
    pub const ALL: [Self; 12] = [
        Self::Minute1,
        Self::Minute5,
        Self::Minute15,
        Self::Minute30,
        Self::Hour1,
        Self::Hour2,
        Self::Hour4,
        Self::Hour12,
        Self::Day1,
        Self::Day7,
        Self::Day14,
        Self::Month1,
    ];

    /// Wire value (e.g. `"1h"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1m",
            Self::Minute5 => "5m",
            Self::Minute15 => "15m",
            Self::Minute30 => "30m",
            Self::Hour1 => "1h",
            Self::Hour2 => "2h",
            Self::Hour4 => "4h",
            Self::Hour12 => "12h",
            Self::Day1 => "1D",
            Self::Day7 => "7D",
            Self::Day14 => "14D",
            Self::Month1 => "1M",
        }
    }

    /// Variant name in SCREAMING_SNAKE form (e.g. `"HOUR_1"`)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Minute1 => "MINUTE_1",
            Self::Minute5 => "MINUTE_5",
            Self::Minute15 => "MINUTE_15",
            Self::Minute30 => "MINUTE_30",
            Self::Hour1 => "HOUR_1",
            Self::Hour2 => "HOUR_2",
            Self::Hour4 => "HOUR_4",
            Self::Hour12 => "HOUR_12",
            Self::Day1 => "DAY_1",
            Self::Day7 => "DAY_7",
            Self::Day14 => "DAY_14",
            Self::Month1 => "MONTH_1",
        }
    }

    /// Length of one candle in milliseconds
    pub fn duration_ms(&self) -> i64 {
        match self {
            Self::Minute1 => MINUTE_MS,
            Self::Minute5 => 5 * MINUTE_MS,
            Self::Minute15 => 15 * MINUTE_MS,
            Self::Minute30 => 30 * MINUTE_MS,
            Self::Hour1 => HOUR_MS,
            Self::Hour2 => 2 * HOUR_MS,
            Self::Hour4 => 4 * HOUR_MS,
            Self::Hour12 => 12 * HOUR_MS,
            Self::Day1 => DAY_MS,
            Self::Day7 => 7 * DAY_MS,
            Self::Day14 => 14 * DAY_MS,
            Self::Month1 => 30 * DAY_MS,
        }
    }
}

impl fmt::Display for CandlestickInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandlestickInterval {
    type Err = ParseEnumError;

    /// Accepts either the wire value (`"4h"`) or the variant name (`"HOUR_4"`)
    ///
    /// `"DAT_14"` is also taken for [`Self::Day14`], a spelling older
    /// configurations still carry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "DAT_14" {
            return Ok(Self::Day14);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|i| i.as_str() == s || i.name() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "candlestick interval",
                value: s.to_string(),
            })
    }
}

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Market,
    Limit,
    StopLoss,
    StopLimit,
    TakeProfit,
    TakeProfitLimit,
    /// Any order type this SDK does not know about yet
    #[serde(other)]
    Unknown,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::StopLoss => "STOP_LOSS",
            Self::StopLimit => "STOP_LIMIT",
            Self::TakeProfit => "TAKE_PROFIT",
            Self::TakeProfitLimit => "TAKE_PROFIT_LIMIT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Time in force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    GoodTillCancel,
    ImmediateOrCancel,
    FillOrKill,
    /// Any time in force this SDK does not know about yet
    #[serde(other)]
    Unknown,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoodTillCancel => "GOOD_TILL_CANCEL",
            Self::ImmediateOrCancel => "IMMEDIATE_OR_CANCEL",
            Self::FillOrKill => "FILL_OR_KILL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Execution instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecInst {
    PostOnly,
    Liquidation,
}

impl ExecInst {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PostOnly => "POST_ONLY",
            Self::Liquidation => "LIQUIDATION",
        }
    }
}

/// Order status as reported by order history and order detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    New,
    Pending,
    Active,
    Rejected,
    Canceled,
    Filled,
    Expired,
    /// Any status this SDK does not know about yet
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Returns true once the order can no longer change
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Rejected | Self::Canceled | Self::Filled | Self::Expired
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_privacy() {
        assert!(!Method::GetCandlestick.is_private());
        assert!(Method::GetOrderHistory.is_private());
        assert!(Method::CancelAllOrders.is_private());
        assert_eq!(Method::GetOrderDetail.as_str(), "private/get-order-detail");
    }

    #[test]
    fn test_interval_from_value_and_name() {
        assert_eq!("1h".parse::<CandlestickInterval>().unwrap(), CandlestickInterval::Hour1);
        assert_eq!(
            "MINUTE_15".parse::<CandlestickInterval>().unwrap(),
            CandlestickInterval::Minute15
        );
        assert_eq!("1M".parse::<CandlestickInterval>().unwrap(), CandlestickInterval::Month1);
        assert_eq!("1m".parse::<CandlestickInterval>().unwrap(), CandlestickInterval::Minute1);
    }

    #[test]
    fn test_interval_day14_aliases() {
        for raw in ["14D", "DAY_14", "DAT_14"] {
            assert_eq!(raw.parse::<CandlestickInterval>().unwrap(), CandlestickInterval::Day14);
        }
        assert_eq!(CandlestickInterval::Day14.name(), "DAY_14");
    }

    #[test]
    fn test_interval_rejects_unknown() {
        let err = "3h".parse::<CandlestickInterval>().unwrap_err();
        assert_eq!(err.value, "3h");
        assert!(err.to_string().contains("3h"));
    }

    #[test]
    fn test_interval_durations() {
        assert_eq!(CandlestickInterval::Minute1.duration_ms(), 60_000);
        assert_eq!(CandlestickInterval::Hour4.duration_ms(), 14_400_000);
        assert_eq!(CandlestickInterval::Day7.duration_ms(), 604_800_000);
    }

    #[test]
    fn test_interval_serde_uses_wire_value() {
        let json = serde_json::to_string(&CandlestickInterval::Day1).unwrap();
        assert_eq!(json, "\"1D\"");
        let parsed: CandlestickInterval = serde_json::from_str("\"12h\"").unwrap();
        assert_eq!(parsed, CandlestickInterval::Hour12);
    }

    #[test]
    fn test_order_status_unknown_fallback() {
        let status: OrderStatus = serde_json::from_str("\"FILLED\"").unwrap();
        assert!(status.is_terminal());
        let status: OrderStatus = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(status, OrderStatus::Unknown);
    }

    #[test]
    fn test_order_type_and_tif_unknown_fallback() {
        let kind: OrderType = serde_json::from_str("\"STOP_LIMIT\"").unwrap();
        assert_eq!(kind, OrderType::StopLimit);
        let kind: OrderType = serde_json::from_str("\"TRAILING_STOP\"").unwrap();
        assert_eq!(kind, OrderType::Unknown);

        let tif: TimeInForce = serde_json::from_str("\"FILL_OR_KILL\"").unwrap();
        assert_eq!(tif, TimeInForce::FillOrKill);
        let tif: TimeInForce = serde_json::from_str("\"GOOD_TILL_DATE\"").unwrap();
        assert_eq!(tif, TimeInForce::Unknown);
    }
}
