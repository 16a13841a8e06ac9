//! Error types for REST API operations

use cryptocom_auth::AuthError;
use cryptocom_types::{classify, ApiErrorCode, EnvelopeError, ErrorClass};

use crate::transport::TransportError;

/// Errors that can occur during REST API operations
///
/// Every failure a call can produce is one of these variants, so callers can
/// match exhaustively when mapping to retries or exit codes.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Request could not be signed (malformed parameters)
    #[error("Signing error: {0}")]
    Signing(#[from] AuthError),

    /// Server answered with a non-2xx status
    #[error("HTTP status {status}: {body}")]
    Transport {
        /// HTTP status code
        status: u16,
        /// Raw response body, which may not be an envelope
        body: String,
    },

    /// Request never produced a response (connection failure, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] TransportError),

    /// Price rejected or outside the allowed range (codes 308, 315)
    #[error("Invalid price (code {code}): {message}")]
    InvalidPrice { code: i64, message: String },

    /// Quantity rejected (code 213)
    #[error("Invalid quantity (code {code}): {message}")]
    InvalidQuantity { code: i64, message: String },

    /// Any other non-zero response code
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// Response body or result did not match the expected shape
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing API credentials for a private method
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Candlestick walk hit its page ceiling before the upstream ran dry
    #[error("Page limit of {pages} reached before history was exhausted")]
    PageLimitExceeded { pages: usize },
}

impl RestError {
    /// Build the error for a non-zero in-body response code
    pub fn from_api_code(code: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        match classify(code) {
            ErrorClass::InvalidPrice => Self::InvalidPrice { code, message },
            ErrorClass::InvalidQuantity => Self::InvalidQuantity { code, message },
            ErrorClass::Other => Self::Api { code, message },
        }
    }

    /// Exchange code for in-body API errors
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::InvalidPrice { code, .. }
            | Self::InvalidQuantity { code, .. }
            | Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Catalogue entry for in-body API errors with a documented code
    pub fn known_code(&self) -> Option<ApiErrorCode> {
        self.api_code().and_then(ApiErrorCode::from_code)
    }

    /// Check if this error is retryable without changing the request
    ///
    /// Only failures that never produced a response qualify. Status and
    /// in-body errors are left to the caller's retry policy.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_retryable())
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Transport { status: 429, .. })
            || self.known_code().is_some_and(|c| c.is_rate_limit())
    }

    /// Distinct process exit code per error kind, for CLI wrappers
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidParameter(_) => 2,
            Self::AuthRequired => 3,
            Self::Signing(_) => 4,
            Self::Transport { .. } => 10,
            Self::Http(_) => 11,
            Self::Validation(_) => 12,
            Self::InvalidPrice { .. } => 20,
            Self::InvalidQuantity { .. } => 21,
            Self::Api { .. } => 22,
            Self::PageLimitExceeded { .. } => 30,
        }
    }
}

impl From<EnvelopeError> for RestError {
    fn from(err: EnvelopeError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_classified_constructors() {
        assert!(matches!(
            RestError::from_api_code(315, "FAR_AWAY_LIMIT_PRICE"),
            RestError::InvalidPrice { code: 315, .. }
        ));
        assert!(matches!(
            RestError::from_api_code(308, "INVALID_PRICE"),
            RestError::InvalidPrice { code: 308, .. }
        ));
        assert!(matches!(
            RestError::from_api_code(213, "INVALID_ORDERQTY"),
            RestError::InvalidQuantity { code: 213, .. }
        ));

        match RestError::from_api_code(42, "something odd") {
            RestError::Api { code, message } => {
                assert_eq!(code, 42);
                assert_eq!(message, "something odd");
            }
            other => panic!("expected generic API error, got {other:?}"),
        }
    }

    #[test]
    fn test_retry_policy() {
        assert!(RestError::Http(TransportError::Timeout(Duration::from_secs(1))).is_retryable());
        assert!(!RestError::Transport { status: 503, body: String::new() }.is_retryable());
        assert!(!RestError::from_api_code(315, "x").is_retryable());
        assert!(!RestError::AuthRequired.is_retryable());
    }

    #[test]
    fn test_rate_limit_detection() {
        assert!(RestError::Transport { status: 429, body: String::new() }.is_rate_limited());
        assert!(RestError::from_api_code(10006, "TOO_MANY_REQUESTS").is_rate_limited());
        assert!(!RestError::from_api_code(213, "x").is_rate_limited());
    }

    #[test]
    fn test_exit_codes_distinct() {
        let errors = [
            RestError::InvalidParameter(String::new()),
            RestError::AuthRequired,
            RestError::Signing(AuthError::Signing(String::new())),
            RestError::Transport { status: 500, body: String::new() },
            RestError::Http(TransportError::Request(String::new())),
            RestError::Validation(String::new()),
            RestError::from_api_code(315, ""),
            RestError::from_api_code(213, ""),
            RestError::from_api_code(1, ""),
            RestError::PageLimitExceeded { pages: 1 },
        ];
        let mut codes: Vec<i32> = errors.iter().map(RestError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
