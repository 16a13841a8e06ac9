//! Backward time walk over the candlestick endpoint
//!
//! Starting at `anchor = min(max_time, now)`, window `i` covers
//! `[anchor - (i + 1) * step, anchor - i * step]` with
//! `step = interval * step_count`. The walk stops when a window ends
//! before `min_time` or the endpoint returns an empty batch. Batches are
//! concatenated most recent first.
//!
//! The walk gives up after `max_pages` non-empty windows, but only once
//! the window that follows them also returns candles.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cryptocom_types::{Candle, CandlestickInterval, PaginationWindow};
use tracing::{debug, info, instrument, warn};

use crate::error::{RestError, RestResult};

/// Default number of candles requested per window
pub const DEFAULT_STEP_COUNT: u32 = 300;

/// Default ceiling on the number of windows fetched in one walk
pub const DEFAULT_MAX_PAGES: usize = 10_000;

/// One batch of candles for a millisecond window
#[async_trait]
pub trait CandleSource: Send + Sync {
    async fn fetch_candles(
        &self,
        instrument: &str,
        interval: CandlestickInterval,
        window: PaginationWindow,
        count: u32,
    ) -> RestResult<Vec<Candle>>;
}

/// What to walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandleQuery {
    pub instrument: String,
    pub interval: CandlestickInterval,
    /// Candles per window
    pub step_count: u32,
    /// Oldest window end to fetch, milliseconds
    pub min_time: Option<i64>,
    /// Newest point to start from, milliseconds
    pub max_time: Option<i64>,
}

impl CandleQuery {
    pub fn new(instrument: impl Into<String>, interval: CandlestickInterval) -> Self {
        Self {
            instrument: instrument.into(),
            interval,
            step_count: DEFAULT_STEP_COUNT,
            min_time: None,
            max_time: None,
        }
    }

    pub fn with_step_count(mut self, step_count: u32) -> Self {
        self.step_count = step_count;
        self
    }

    pub fn with_min_time(mut self, millis: i64) -> Self {
        self.min_time = Some(millis);
        self
    }

    pub fn with_max_time(mut self, millis: i64) -> Self {
        self.max_time = Some(millis);
        self
    }

    /// Stop once windows end before `since`
    pub fn since(self, since: DateTime<Utc>) -> Self {
        self.with_min_time(since.timestamp_millis())
    }

    /// Start walking from `until` instead of now
    pub fn until(self, until: DateTime<Utc>) -> Self {
        self.with_max_time(until.timestamp_millis())
    }

    /// Window width in milliseconds
    pub fn step_ms(&self) -> RestResult<i64> {
        if self.step_count == 0 {
            return Err(RestError::InvalidParameter("step_count must be at least 1".into()));
        }
        self.interval
            .duration_ms()
            .checked_mul(i64::from(self.step_count))
            .ok_or_else(|| RestError::InvalidParameter("window width overflows i64".into()))
    }
}

/// Backward-walking paginator over a [`CandleSource`]
pub struct CandlestickPaginator<'a, S: ?Sized> {
    source: &'a S,
    max_pages: usize,
}

impl<'a, S: CandleSource + ?Sized> CandlestickPaginator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Set the maximum number of windows fetched before giving up
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Walk backward from `now` (milliseconds) until history is exhausted
    ///
    /// Fails with [`RestError::PageLimitExceeded`] if the window after the
    /// first `max_pages` windows still returns candles. Use
    /// [`fetch_into`](Self::fetch_into) to keep what was fetched when the
    /// walk fails.
    pub async fn fetch_all(&self, query: &CandleQuery, now: i64) -> RestResult<Vec<Candle>> {
        let mut candles = Vec::new();
        self.fetch_into(query, now, &mut candles).await?;
        Ok(candles)
    }

    /// Same walk as [`fetch_all`](Self::fetch_all), appending each batch
    /// to `out` as it arrives
    ///
    /// Returns the number of windows appended. On error `out` keeps every
    /// batch fetched before the failure; the batch past the page ceiling
    /// is not appended.
    #[instrument(skip(self, query, out), fields(instrument = %query.instrument, interval = %query.interval))]
    pub async fn fetch_into(
        &self,
        query: &CandleQuery,
        now: i64,
        out: &mut Vec<Candle>,
    ) -> RestResult<usize> {
        let step = query.step_ms()?;
        let anchor = query.max_time.map_or(now, |max| max.min(now));

        let mut fetched = 0usize;
        let mut pages = 0usize;

        loop {
            let end = anchor.saturating_sub(step.saturating_mul(pages as i64));
            if query.min_time.is_some_and(|min| end < min) {
                debug!(end, "Window ends before min_time, stopping");
                break;
            }

            let window = PaginationWindow::millis(end.saturating_sub(step), end);
            let batch = self
                .source
                .fetch_candles(&query.instrument, query.interval, window, query.step_count)
                .await?;
            if batch.is_empty() {
                debug!(%window, "Empty batch, history exhausted");
                break;
            }
            if pages == self.max_pages {
                warn!(%window, pages, fetched, "Page ceiling reached with history remaining");
                return Err(RestError::PageLimitExceeded { pages });
            }

            pages += 1;
            fetched += batch.len();
            debug!(%window, count = batch.len(), total = fetched, "Fetched candle batch");
            out.extend(batch);
        }

        info!(candles = fetched, pages, "Candlestick walk complete");
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Endless;

    #[async_trait]
    impl CandleSource for Endless {
        async fn fetch_candles(
            &self,
            _instrument: &str,
            _interval: CandlestickInterval,
            window: PaginationWindow,
            _count: u32,
        ) -> RestResult<Vec<Candle>> {
            Ok(vec![Candle {
                open: 1.0,
                high: 1.0,
                low: 1.0,
                close: 1.0,
                volume: 1.0,
                timestamp: window.start,
            }])
        }
    }

    #[test]
    fn test_query_builder() {
        let since = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let query = CandleQuery::new("BTC_USD", CandlestickInterval::Hour1)
            .with_step_count(24)
            .since(since);

        assert_eq!(query.min_time, Some(1_704_067_200_000));
        assert_eq!(query.max_time, None);
        assert_eq!(query.step_ms().unwrap(), 24 * 3_600_000);
        assert_eq!(CandleQuery::new("X", CandlestickInterval::Minute1).step_count, DEFAULT_STEP_COUNT);
    }

    #[tokio::test]
    async fn test_zero_step_count_rejected() {
        let query = CandleQuery::new("BTC_USD", CandlestickInterval::Minute1).with_step_count(0);
        let result = CandlestickPaginator::new(&Endless).fetch_all(&query, 1_000).await;
        assert!(matches!(result, Err(RestError::InvalidParameter(_))));
    }

    #[tokio::test]
    async fn test_page_ceiling() {
        let query = CandleQuery::new("BTC_USD", CandlestickInterval::Minute1).with_step_count(1);
        let result = CandlestickPaginator::new(&Endless)
            .with_max_pages(4)
            .fetch_all(&query, 10_000_000)
            .await;
        assert!(matches!(result, Err(RestError::PageLimitExceeded { pages: 4 })));
    }

    /// Returns one candle for each of the first `batches` calls, then nothing
    struct Finite {
        batches: usize,
        calls: parking_lot::Mutex<usize>,
    }

    impl Finite {
        fn new(batches: usize) -> Self {
            Self {
                batches,
                calls: parking_lot::Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl CandleSource for Finite {
        async fn fetch_candles(
            &self,
            instrument: &str,
            interval: CandlestickInterval,
            window: PaginationWindow,
            count: u32,
        ) -> RestResult<Vec<Candle>> {
            let call = {
                let mut calls = self.calls.lock();
                *calls += 1;
                *calls
            };
            if call > self.batches {
                return Ok(Vec::new());
            }
            Endless.fetch_candles(instrument, interval, window, count).await
        }
    }

    #[tokio::test]
    async fn test_history_ending_exactly_at_ceiling_is_success() {
        let source = Finite::new(3);
        let query = CandleQuery::new("BTC_USD", CandlestickInterval::Minute1).with_step_count(1);

        let candles = CandlestickPaginator::new(&source)
            .with_max_pages(3)
            .fetch_all(&query, 600_000)
            .await
            .unwrap();

        assert_eq!(candles.len(), 3);
        assert_eq!(*source.calls.lock(), 4);
    }

    #[tokio::test]
    async fn test_page_ceiling_keeps_fetched_batches() {
        let query = CandleQuery::new("BTC_USD", CandlestickInterval::Minute1).with_step_count(1);
        let mut out = Vec::new();

        let result = CandlestickPaginator::new(&Endless)
            .with_max_pages(2)
            .fetch_into(&query, 600_000, &mut out)
            .await;

        assert!(matches!(result, Err(RestError::PageLimitExceeded { pages: 2 })));
        let starts: Vec<i64> = out.iter().map(|c| c.timestamp).collect();
        assert_eq!(starts, [540_000, 480_000]);
    }

    #[tokio::test]
    async fn test_floor_reached_exactly_at_ceiling_is_success() {
        // Windows end at 600_000, 540_000, 480_000; the fourth would end before the floor
        let query = CandleQuery::new("BTC_USD", CandlestickInterval::Minute1)
            .with_step_count(1)
            .with_min_time(450_000);
        let candles = CandlestickPaginator::new(&Endless)
            .with_max_pages(3)
            .fetch_all(&query, 600_000)
            .await
            .unwrap();

        let starts: Vec<i64> = candles.iter().map(|c| c.timestamp).collect();
        assert_eq!(starts, [540_000, 480_000, 420_000]);
    }

    #[tokio::test]
    async fn test_max_time_in_future_clamped_to_now() {
        let query = CandleQuery::new("BTC_USD", CandlestickInterval::Minute1)
            .with_step_count(1)
            .with_max_time(5_000_000)
            .with_min_time(900_000);
        let candles = CandlestickPaginator::new(&Endless)
            .fetch_all(&query, 1_000_000)
            .await
            .unwrap();

        // Windows end at 1_000_000 and 940_000; 880_000 is below the floor
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].timestamp, 940_000);
    }
}
