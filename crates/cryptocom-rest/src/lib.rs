//! REST API client for the crypto.com Exchange
//!
//! This crate signs and dispatches requests, validates response envelopes,
//! and hides two access patterns behind single calls:
//!
//! - **Order history**: the endpoint caps each page and has no cursor, so
//!   windows returning a full page are bisected until every sub-window comes
//!   back short. See [`pagination::OrderHistoryPaginator`].
//! - **Candlesticks**: fixed-size windows are walked backward from now until
//!   an empty batch or a lower time bound. See
//!   [`pagination::CandlestickPaginator`].
//!
//! # Authentication
//!
//! Private methods are POSTed as a JSON envelope signed with HMAC-SHA256
//! over `method + id + api_key + canonical_params + nonce`. Public methods
//! are plain GETs.
//!
//! # Example
//!
//! ```no_run
//! use cryptocom_rest::{CandleQuery, CandlestickInterval, CryptoComClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CryptoComClient::new()?;
//!
//!     let query = CandleQuery::new("BTC_USD", CandlestickInterval::Hour1)
//!         .with_min_time(1_704_067_200_000);
//!     let candles = client.get_all_candlesticks(&query).await?;
//!     println!("{} candles", candles.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every failure is a [`RestError`]. A non-2xx response is always
//! [`RestError::Transport`]; in-body codes 308 and 315 are
//! [`RestError::InvalidPrice`], 213 is [`RestError::InvalidQuantity`], and
//! anything else is [`RestError::Api`]. No call is retried automatically.

pub mod client;
pub mod dedup;
pub mod endpoints;
pub mod error;
pub mod pagination;
pub mod request;
pub mod response;
pub mod transport;

// Re-export main types
pub use client::{ClientConfig, CryptoComClient, DEFAULT_BASE_URL};
pub use dedup::dedup_by_order_id;
pub use endpoints::CreateOrderRequest;
pub use error::{RestError, RestResult};
pub use pagination::{CandleQuery, CandlestickPaginator, OrderHistoryPaginator};
pub use transport::{HttpTransport, ReqwestTransport, TransportError};

#[cfg(any(test, feature = "test-utils"))]
pub use transport::MockTransport;

pub use cryptocom_auth::Credentials;
pub use cryptocom_types::{
    Candle, CandlestickInterval, OrderHistoryEntry, OrderSide, OrderStatus, PaginationWindow,
    UserBalance,
};
