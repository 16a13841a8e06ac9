//! Shared types for the crypto.com Exchange REST API v1
//!
//! This crate provides the wire-level type definitions used across the SDK.
//! It performs no I/O and can be used independently of the HTTP client.
//!
//! # Key Types
//!
//! - [`Method`] - API methods and whether they require a signature
//! - [`CandlestickInterval`], [`OrderSide`], [`OrderStatus`] - Exchange enums
//! - [`ResponseEnvelope`] - The `{id, method, code, result, message}` wrapper
//! - [`PaginationWindow`] - Half-open time ranges used by the paginators
//! - [`Candle`], [`OrderHistoryEntry`], [`UserBalance`] - Result payloads
//! - [`ApiErrorCode`], [`ErrorClass`] - Exchange error-code catalogue and classification

pub mod account;
pub mod envelope;
pub mod enums;
pub mod error_codes;
pub mod market;
pub mod order;
pub mod serde_helpers;
pub mod window;

// Re-export commonly used types
pub use account::*;
pub use envelope::*;
pub use enums::*;
pub use error_codes::*;
pub use market::*;
pub use order::*;
pub use window::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
