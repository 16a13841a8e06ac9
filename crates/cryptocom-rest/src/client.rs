//! Main REST client implementation

use chrono::NaiveDate;
use cryptocom_auth::{now_millis, Credentials};
use cryptocom_types::{
    day_window_ns, Candle, CandlestickData, CandlestickInterval, CreateOrderResult,
    OrderHistoryEntry, OrderSide, PaginationWindow, UserBalance,
};
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::info;

use crate::endpoints::{AccountEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::pagination::{CandleQuery, CandlestickPaginator, OrderHistoryPaginator, DEFAULT_MAX_PAGES};
use crate::request::RequestBuilder;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.crypto.com/exchange/v1";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_USER_AGENT: &str = concat!("cryptocom-rest/", env!("CARGO_PKG_VERSION"));

const BASE_URL_VAR: &str = "CRYPTOCOM_BASE_URL";

/// crypto.com Exchange REST API client
///
/// Provides access to both public and private endpoints.
///
/// # Example
///
/// ```no_run
/// use cryptocom_rest::{CryptoComClient, Credentials, PaginationWindow};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::from_env()?;
///     let client = CryptoComClient::with_credentials(creds)?;
///
///     let window = PaginationWindow::nanos(1_704_067_200_000_000_000, 1_704_153_600_000_000_000);
///     let orders = client.get_order_history(window, 100, Some("CRO_USD")).await?;
///     println!("{} orders", orders.len());
///
///     Ok(())
/// }
/// ```
pub struct CryptoComClient<T: HttpTransport = ReqwestTransport> {
    transport: T,
    builder: RequestBuilder,
    max_candle_pages: usize,
}

impl CryptoComClient<ReqwestTransport> {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let transport =
            ReqwestTransport::new(Duration::from_secs(config.timeout_secs), user_agent)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: HttpTransport> CryptoComClient<T> {
    /// Create a client over a custom transport
    ///
    /// `timeout_secs` and `user_agent` are the transport's concern and are
    /// ignored here.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        info!(
            base_url = %config.base_url,
            authenticated = config.credentials.is_some(),
            "Created crypto.com REST client"
        );

        Self {
            transport,
            builder: RequestBuilder::new(config.base_url, config.credentials),
            max_candle_pages: config.max_candle_pages,
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.builder.has_credentials()
    }

    pub fn base_url(&self) -> &str {
        self.builder.base_url()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_, T> {
        MarketEndpoints::new(&self.transport, &self.builder)
    }

    /// Get one page of candlesticks
    pub async fn get_candlesticks(
        &self,
        instrument: &str,
        interval: CandlestickInterval,
        count: Option<u32>,
        start_ts: Option<i64>,
        end_ts: Option<i64>,
    ) -> RestResult<CandlestickData> {
        self.market()
            .get_candlesticks(instrument, interval, count, start_ts, end_ts)
            .await
    }

    /// Walk candlesticks backward from now until history runs out
    ///
    /// Results are most recent window first.
    pub async fn get_all_candlesticks(&self, query: &CandleQuery) -> RestResult<Vec<Candle>> {
        self.get_all_candlesticks_at(query, now_millis()).await
    }

    /// [`get_all_candlesticks`](Self::get_all_candlesticks) with an explicit
    /// reference time in milliseconds
    pub async fn get_all_candlesticks_at(
        &self,
        query: &CandleQuery,
        now: i64,
    ) -> RestResult<Vec<Candle>> {
        let market = self.market();
        CandlestickPaginator::new(&market)
            .with_max_pages(self.max_candle_pages)
            .fetch_all(query, now)
            .await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_, T>> {
        self.require_credentials()?;
        Ok(AccountEndpoints::new(&self.transport, &self.builder))
    }

    /// Get every order in `window`, each once
    pub async fn get_order_history(
        &self,
        window: PaginationWindow,
        limit: u32,
        instrument: Option<&str>,
    ) -> RestResult<Vec<OrderHistoryEntry>> {
        let account = self.account()?;
        OrderHistoryPaginator::new(&account)
            .fetch_unique(window, limit, instrument)
            .await
    }

    /// Get every order in `window` without removing midpoint repeats
    pub async fn get_order_history_raw(
        &self,
        window: PaginationWindow,
        limit: u32,
        instrument: Option<&str>,
    ) -> RestResult<Vec<OrderHistoryEntry>> {
        let account = self.account()?;
        OrderHistoryPaginator::new(&account)
            .fetch(window, limit, instrument)
            .await
    }

    /// Get every order created on one UTC calendar day
    pub async fn get_order_history_for_day(
        &self,
        day: NaiveDate,
        limit: u32,
        instrument: Option<&str>,
    ) -> RestResult<Vec<OrderHistoryEntry>> {
        let window = day_window_ns(day)
            .ok_or_else(|| RestError::InvalidParameter(format!("date out of range: {day}")))?;
        self.get_order_history(window, limit, instrument).await
    }

    /// Get details of one order
    pub async fn get_order_details(&self, order_id: &str) -> RestResult<OrderHistoryEntry> {
        self.account()?.get_order_details(order_id).await
    }

    /// Get account balances
    pub async fn get_user_balance(&self) -> RestResult<Vec<UserBalance>> {
        self.account()?.get_user_balance().await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_, T>> {
        self.require_credentials()?;
        Ok(TradingEndpoints::new(&self.transport, &self.builder))
    }

    /// Place a limit order
    pub async fn create_limit_order(
        &self,
        instrument: &str,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> RestResult<CreateOrderResult> {
        self.trading()?
            .create_limit_order(instrument, side, quantity, price)
            .await
    }

    /// Cancel an order by id
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<()> {
        self.trading()?.cancel_order(order_id).await
    }

    /// Cancel all open orders, optionally for one instrument only
    pub async fn cancel_all_orders(&self, instrument: Option<&str>) -> RestResult<()> {
        self.trading()?.cancel_all_orders(instrument).await
    }

    fn require_credentials(&self) -> RestResult<()> {
        if self.has_credentials() {
            Ok(())
        } else {
            Err(RestError::AuthRequired)
        }
    }
}

impl<T: HttpTransport> std::fmt::Debug for CryptoComClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoComClient")
            .field("base_url", &self.base_url())
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// API root, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Ceiling on windows fetched by one candlestick walk
    pub max_candle_pages: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            max_candle_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration from the environment
    ///
    /// Credentials are loaded when `CRYPTOCOM_API_KEY` is set; a key without
    /// a secret is an error. `CRYPTOCOM_BASE_URL` overrides the API root.
    pub fn from_env() -> RestResult<Self> {
        let mut config = Self::default();
        if std::env::var_os("CRYPTOCOM_API_KEY").is_some() {
            let credentials = Credentials::from_env()
                .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
            config.credentials = Some(credentials);
        }
        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the candlestick page ceiling
    pub fn with_max_candle_pages(mut self, pages: usize) -> Self {
        self.max_candle_pages = pages;
        self
    }
}
