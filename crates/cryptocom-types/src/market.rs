//! Public market data payloads

use crate::enums::CandlestickInterval;
use crate::serde_helpers;
use serde::{Deserialize, Serialize};

/// One OHLCV candle
///
/// Serialized with the exchange's single-letter field names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    #[serde(rename = "o", deserialize_with = "serde_helpers::float")]
    pub open: f64,
    #[serde(rename = "h", deserialize_with = "serde_helpers::float")]
    pub high: f64,
    #[serde(rename = "l", deserialize_with = "serde_helpers::float")]
    pub low: f64,
    #[serde(rename = "c", deserialize_with = "serde_helpers::float")]
    pub close: f64,
    #[serde(rename = "v", deserialize_with = "serde_helpers::float")]
    pub volume: f64,
    /// Candle start, milliseconds since the epoch
    #[serde(rename = "t", deserialize_with = "serde_helpers::int")]
    pub timestamp: i64,
}

impl Candle {
    /// High minus low
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

/// Result of `public/get-candlestick`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlestickData {
    pub interval: CandlestickInterval,
    pub instrument_name: String,
    #[serde(default)]
    pub data: Vec<Candle>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_candlestick_result_with_string_numbers() {
        let data: CandlestickData = serde_json::from_value(json!({
            "interval": "1m",
            "instrument_name": "BTC_USD",
            "data": [
                {"o": "50000.0", "h": "51000.0", "l": "49000.0", "c": "50500.0", "v": "10.5", "t": 1704067200000i64},
                {"o": 50500.0, "h": 50600.0, "l": 50400.0, "c": 50450.0, "v": 2, "t": 1704067260000i64}
            ]
        }))
        .unwrap();

        assert_eq!(data.interval, CandlestickInterval::Minute1);
        assert_eq!(data.data.len(), 2);
        assert_eq!(data.data[0].open, 50000.0);
        assert_eq!(data.data[0].volume, 10.5);
        assert_eq!(data.data[0].timestamp, 1_704_067_200_000);
        assert!(data.data[0].is_bullish());
        assert_eq!(data.data[1].range(), 200.0);
    }

    #[test]
    fn test_missing_data_is_empty() {
        let data: CandlestickData = serde_json::from_value(json!({
            "interval": "1h",
            "instrument_name": "ETH_USD"
        }))
        .unwrap();
        assert!(data.data.is_empty());
    }
}
