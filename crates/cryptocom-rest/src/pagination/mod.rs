//! Exhaustive retrieval over capped endpoints
//!
//! Both paginators are written against a small source trait so the
//! traversal logic can be driven by a synthetic endpoint in tests. The
//! account and market endpoint groups implement these traits for real
//! requests.

pub mod candles;
pub mod order_history;

pub use candles::{CandleQuery, CandleSource, CandlestickPaginator, DEFAULT_MAX_PAGES, DEFAULT_STEP_COUNT};
pub use order_history::{OrderHistoryPaginator, OrderHistorySource};
