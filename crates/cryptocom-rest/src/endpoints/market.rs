//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use async_trait::async_trait;
use cryptocom_types::{Candle, CandlestickData, CandlestickInterval, Method, PaginationWindow, Params};
use tracing::instrument;

use crate::error::RestResult;
use crate::pagination::CandleSource;
use crate::request::RequestBuilder;
use crate::transport::HttpTransport;

/// Public market data endpoints
pub struct MarketEndpoints<'a, T> {
    transport: &'a T,
    builder: &'a RequestBuilder,
}

impl<'a, T: HttpTransport> MarketEndpoints<'a, T> {
    pub fn new(transport: &'a T, builder: &'a RequestBuilder) -> Self {
        Self { transport, builder }
    }

    /// Get one page of candlesticks
    ///
    /// # Arguments
    /// * `instrument` - Instrument name (e.g., "BTC_USD")
    /// * `interval` - Candle width
    /// * `count` - Maximum number of candles
    /// * `start_ts` / `end_ts` - Optional bounds in milliseconds
    #[instrument(skip(self))]
    pub async fn get_candlesticks(
        &self,
        instrument: &str,
        interval: CandlestickInterval,
        count: Option<u32>,
        start_ts: Option<i64>,
        end_ts: Option<i64>,
    ) -> RestResult<CandlestickData> {
        let mut params = Params::new();
        params.insert("instrument_name".into(), instrument.into());
        params.insert("timeframe".into(), interval.as_str().into());
        params.insert("count".into(), count.into());
        params.insert("start_ts".into(), start_ts.into());
        params.insert("end_ts".into(), end_ts.into());

        super::call(self.transport, self.builder, Method::GetCandlestick, params).await
    }
}

#[async_trait]
impl<T: HttpTransport> CandleSource for MarketEndpoints<'_, T> {
    async fn fetch_candles(
        &self,
        instrument: &str,
        interval: CandlestickInterval,
        window: PaginationWindow,
        count: u32,
    ) -> RestResult<Vec<Candle>> {
        let page = self
            .get_candlesticks(instrument, interval, Some(count), Some(window.start), Some(window.end))
            .await?;
        Ok(page.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_candlesticks_query() {
        let transport = MockTransport::new();
        transport.push_json(
            200,
            &json!({
                "id": -1,
                "method": "public/get-candlestick",
                "code": 0,
                "result": {
                    "interval": "5m",
                    "instrument_name": "ETH_USD",
                    "data": [{"o": "1", "h": "2", "l": "0.5", "c": "1.5", "v": "10", "t": 1000}]
                }
            }),
        );
        let builder = RequestBuilder::new("https://mock.test/v1", None);
        let market = MarketEndpoints::new(&transport, &builder);

        let page = market
            .get_candlesticks("ETH_USD", CandlestickInterval::Minute5, Some(50), None, Some(99))
            .await
            .unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.interval, CandlestickInterval::Minute5);

        let req = &transport.requests()[0];
        assert_eq!(req.url, "https://mock.test/v1/public/get-candlestick");
        assert_eq!(req.query_param("timeframe"), Some("5m"));
        assert_eq!(req.query_param("count"), Some("50"));
        assert_eq!(req.query_param("end_ts"), Some("99"));
        assert_eq!(req.query_param("start_ts"), None);
    }
}
