//! Private account endpoints
//!
//! These endpoints require authentication.

use async_trait::async_trait;
use cryptocom_types::{
    Method, OrderHistoryData, OrderHistoryEntry, PaginationWindow, Params, UserBalance,
    UserBalanceData,
};
use tracing::{debug, instrument};

use crate::error::RestResult;
use crate::pagination::OrderHistorySource;
use crate::request::RequestBuilder;
use crate::transport::HttpTransport;

/// Private account endpoints
pub struct AccountEndpoints<'a, T> {
    transport: &'a T,
    builder: &'a RequestBuilder,
}

impl<'a, T: HttpTransport> AccountEndpoints<'a, T> {
    pub fn new(transport: &'a T, builder: &'a RequestBuilder) -> Self {
        Self { transport, builder }
    }

    /// Get a single page of order history
    ///
    /// The exchange returns at most `limit` orders and gives no cursor, so
    /// a full page does not mean the window is exhausted. Use
    /// [`OrderHistoryPaginator`](crate::pagination::OrderHistoryPaginator)
    /// for complete retrieval.
    ///
    /// # Arguments
    /// * `window` - Time range; bounds are sent in the window's unit
    /// * `limit` - Maximum orders per call
    /// * `instrument` - Optional instrument filter
    #[instrument(skip(self, window), fields(window = %window))]
    pub async fn get_order_history_page(
        &self,
        window: PaginationWindow,
        limit: u32,
        instrument: Option<&str>,
    ) -> RestResult<Vec<OrderHistoryEntry>> {
        let mut params = Params::new();
        params.insert("start_time".into(), window.start.into());
        params.insert("end_time".into(), window.end.into());
        params.insert("limit".into(), limit.into());
        params.insert("instrument_name".into(), instrument.into());

        let page: OrderHistoryData =
            super::call(self.transport, self.builder, Method::GetOrderHistory, params).await?;
        debug!(count = page.data.len(), "Fetched order history page");
        Ok(page.data)
    }

    /// Get details of one order
    #[instrument(skip(self))]
    pub async fn get_order_details(&self, order_id: &str) -> RestResult<OrderHistoryEntry> {
        let mut params = Params::new();
        params.insert("order_id".into(), order_id.into());
        super::call(self.transport, self.builder, Method::GetOrderDetail, params).await
    }

    /// Get account balances
    #[instrument(skip(self))]
    pub async fn get_user_balance(&self) -> RestResult<Vec<UserBalance>> {
        let balances: UserBalanceData =
            super::call(self.transport, self.builder, Method::UserBalance, Params::new()).await?;
        Ok(balances.data)
    }
}

#[async_trait]
impl<T: HttpTransport> OrderHistorySource for AccountEndpoints<'_, T> {
    async fn fetch_page(
        &self,
        window: PaginationWindow,
        limit: u32,
        instrument: Option<&str>,
    ) -> RestResult<Vec<OrderHistoryEntry>> {
        self.get_order_history_page(window, limit, instrument).await
    }
}
