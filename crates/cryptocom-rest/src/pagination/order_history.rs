//! Complete order-history retrieval by window bisection
//!
//! The order-history endpoint caps each response at `limit` records and
//! exposes no cursor. A page shorter than `limit` proves its window is
//! complete. A full page proves nothing, so it is discarded and the window
//! is split into `[start, mid + 1)` and `[mid, end)`, left half first.
//!
//! The halves share the unit at `mid`. An order stamped exactly there is
//! returned once by each half; [`OrderHistoryPaginator::fetch_unique`]
//! removes such repeats by order id.

use async_trait::async_trait;
use cryptocom_types::{OrderHistoryEntry, PaginationWindow};
use tracing::{debug, info, instrument, warn};

use crate::dedup::dedup_by_order_id;
use crate::error::{RestError, RestResult};

/// One page of order history for a window
#[async_trait]
pub trait OrderHistorySource: Send + Sync {
    async fn fetch_page(
        &self,
        window: PaginationWindow,
        limit: u32,
        instrument: Option<&str>,
    ) -> RestResult<Vec<OrderHistoryEntry>>;
}

/// Bisecting paginator over an [`OrderHistorySource`]
pub struct OrderHistoryPaginator<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S: OrderHistorySource + ?Sized> OrderHistoryPaginator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Fetch every order in `window`
    ///
    /// Results are ordered as a depth-first, left-first traversal of the
    /// split tree. Orders at a split midpoint may appear twice.
    ///
    /// A full page from a window of width two or less cannot be narrowed
    /// further; it is kept as is and a warning is logged.
    ///
    /// The first failing call aborts the whole fetch. Use
    /// [`fetch_into`](Self::fetch_into) to keep the orders gathered before
    /// the failure.
    pub async fn fetch(
        &self,
        window: PaginationWindow,
        limit: u32,
        instrument: Option<&str>,
    ) -> RestResult<Vec<OrderHistoryEntry>> {
        let mut orders = Vec::new();
        self.fetch_into(window, limit, instrument, &mut orders).await?;
        Ok(orders)
    }

    /// Same traversal as [`fetch`](Self::fetch), appending to `out`
    ///
    /// Returns the number of calls made. On error `out` keeps the orders of
    /// every window that completed before the failing call.
    #[instrument(skip(self, window, out), fields(window = %window))]
    pub async fn fetch_into(
        &self,
        window: PaginationWindow,
        limit: u32,
        instrument: Option<&str>,
        out: &mut Vec<OrderHistoryEntry>,
    ) -> RestResult<usize> {
        if limit == 0 {
            return Err(RestError::InvalidParameter("limit must be at least 1".into()));
        }
        if window.start > window.end {
            return Err(RestError::InvalidParameter(format!(
                "window start is after end: {window}"
            )));
        }

        let cap = limit as usize;
        let mut pending = vec![window];
        let mut fetched = 0usize;
        let mut calls = 0usize;

        while let Some(current) = pending.pop() {
            let page = self.source.fetch_page(current, limit, instrument).await?;
            calls += 1;

            if page.len() < cap {
                fetched += page.len();
                out.extend(page);
                continue;
            }

            if !current.can_split() {
                warn!(window = %current, limit, "Full page from unsplittable window, keeping it");
                fetched += page.len();
                out.extend(page);
                continue;
            }

            let (left, right) = current.split();
            debug!(window = %current, %left, %right, "Full page, splitting window");
            pending.push(right);
            pending.push(left);
        }

        info!(orders = fetched, calls, "Order history fetched");
        Ok(calls)
    }

    /// [`fetch`](Self::fetch) with midpoint repeats removed
    pub async fn fetch_unique(
        &self,
        window: PaginationWindow,
        limit: u32,
        instrument: Option<&str>,
    ) -> RestResult<Vec<OrderHistoryEntry>> {
        let orders = self.fetch(window, limit, instrument).await?;
        Ok(dedup_by_order_id(orders))
    }
}
