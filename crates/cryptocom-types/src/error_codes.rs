//! crypto.com Exchange error code catalogue and classification
//!
//! The exchange reports application failures as a numeric `code` inside the
//! response envelope. Only a handful of codes change how a caller should
//! react; [`ErrorClass`] folds the catalogue down to those.

/// How a non-zero response code should be surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Price rejected or outside the allowed band (308, 315)
    InvalidPrice,
    /// Quantity rejected (213)
    InvalidQuantity,
    /// Anything else
    Other,
}

/// Classify a non-zero response code
pub fn classify(code: i64) -> ErrorClass {
    match code {
        308 | 315 => ErrorClass::InvalidPrice,
        213 => ErrorClass::InvalidQuantity,
        _ => ErrorClass::Other,
    }
}

/// Documented exchange response codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ApiErrorCode {
    /// 201
    NoPosition,
    /// 202
    AccountIsSuspended,
    /// 203
    AccountsDoNotMatch,
    /// 204
    DuplicateClientOrderId,
    /// 205
    DuplicateOrderId,
    /// 206
    InstrumentExpired,
    /// 207
    NoMarkPrice,
    /// 208
    InstrumentNotTradable,
    /// 209
    InvalidInstrument,
    /// 210
    InvalidAccount,
    /// 211
    InvalidCurrency,
    /// 212
    InvalidOrderId,
    /// 213
    InvalidOrderQuantity,
    /// 306
    InsufficientAvailableBalance,
    /// 308
    InvalidPrice,
    /// 315
    FarAwayLimitPrice,
    /// 10001
    SystemError,
    /// 10002
    Unauthorized,
    /// 10003
    IpIllegal,
    /// 10004
    BadRequest,
    /// 10005
    UserTierInvalid,
    /// 10006
    TooManyRequests,
    /// 10007
    InvalidNonce,
    /// 10008
    MethodNotFound,
    /// 10009
    InvalidDateRange,
    /// 40101
    AuthenticationFailure,
    /// 40102
    NonceOutOfWindow,
    /// 50001
    InternalError,
}

impl ApiErrorCode {
    /// Look up a known code
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            201 => Self::NoPosition,
            202 => Self::AccountIsSuspended,
            203 => Self::AccountsDoNotMatch,
            204 => Self::DuplicateClientOrderId,
            205 => Self::DuplicateOrderId,
            206 => Self::InstrumentExpired,
            207 => Self::NoMarkPrice,
            208 => Self::InstrumentNotTradable,
            209 => Self::InvalidInstrument,
            210 => Self::InvalidAccount,
            211 => Self::InvalidCurrency,
            212 => Self::InvalidOrderId,
            213 => Self::InvalidOrderQuantity,
            306 => Self::InsufficientAvailableBalance,
            308 => Self::InvalidPrice,
            315 => Self::FarAwayLimitPrice,
            10001 => Self::SystemError,
            10002 => Self::Unauthorized,
            10003 => Self::IpIllegal,
            10004 => Self::BadRequest,
            10005 => Self::UserTierInvalid,
            10006 => Self::TooManyRequests,
            10007 => Self::InvalidNonce,
            10008 => Self::MethodNotFound,
            10009 => Self::InvalidDateRange,
            40101 => Self::AuthenticationFailure,
            40102 => Self::NonceOutOfWindow,
            50001 => Self::InternalError,
            _ => return None,
        })
    }

    /// Numeric code
    pub fn code(&self) -> i64 {
        match self {
            Self::NoPosition => 201,
            Self::AccountIsSuspended => 202,
            Self::AccountsDoNotMatch => 203,
            Self::DuplicateClientOrderId => 204,
            Self::DuplicateOrderId => 205,
            Self::InstrumentExpired => 206,
            Self::NoMarkPrice => 207,
            Self::InstrumentNotTradable => 208,
            Self::InvalidInstrument => 209,
            Self::InvalidAccount => 210,
            Self::InvalidCurrency => 211,
            Self::InvalidOrderId => 212,
            Self::InvalidOrderQuantity => 213,
            Self::InsufficientAvailableBalance => 306,
            Self::InvalidPrice => 308,
            Self::FarAwayLimitPrice => 315,
            Self::SystemError => 10001,
            Self::Unauthorized => 10002,
            Self::IpIllegal => 10003,
            Self::BadRequest => 10004,
            Self::UserTierInvalid => 10005,
            Self::TooManyRequests => 10006,
            Self::InvalidNonce => 10007,
            Self::MethodNotFound => 10008,
            Self::InvalidDateRange => 10009,
            Self::AuthenticationFailure => 40101,
            Self::NonceOutOfWindow => 40102,
            Self::InternalError => 50001,
        }
    }

    /// Exchange-side mnemonic
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoPosition => "NO_POSITION",
            Self::AccountIsSuspended => "ACCOUNT_IS_SUSPENDED",
            Self::AccountsDoNotMatch => "ACCOUNTS_DO_NOT_MATCH",
            Self::DuplicateClientOrderId => "DUPLICATE_CLORDID",
            Self::DuplicateOrderId => "DUPLICATE_ORDERID",
            Self::InstrumentExpired => "INSTRUMENT_EXPIRED",
            Self::NoMarkPrice => "NO_MARK_PRICE",
            Self::InstrumentNotTradable => "INSTRUMENT_NOT_TRADABLE",
            Self::InvalidInstrument => "INVALID_INSTRUMENT",
            Self::InvalidAccount => "INVALID_ACCOUNT",
            Self::InvalidCurrency => "INVALID_CURRENCY",
            Self::InvalidOrderId => "INVALID_ORDERID",
            Self::InvalidOrderQuantity => "INVALID_ORDERQTY",
            Self::InsufficientAvailableBalance => "INSUFFICIENT_AVAILABLE_BALANCE",
            Self::InvalidPrice => "INVALID_PRICE",
            Self::FarAwayLimitPrice => "FAR_AWAY_LIMIT_PRICE",
            Self::SystemError => "SYS_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::IpIllegal => "IP_ILLEGAL",
            Self::BadRequest => "BAD_REQUEST",
            Self::UserTierInvalid => "USER_TIER_INVALID",
            Self::TooManyRequests => "TOO_MANY_REQUESTS",
            Self::InvalidNonce => "INVALID_NONCE",
            Self::MethodNotFound => "METHOD_NOT_FOUND",
            Self::InvalidDateRange => "INVALID_DATE_RANGE",
            Self::AuthenticationFailure => "AUTHENTICATION_FAILURE",
            Self::NonceOutOfWindow => "NONCE_OUT_OF_WINDOW",
            Self::InternalError => "ERR_INTERNAL",
        }
    }

    /// Classification of this code
    pub fn class(&self) -> ErrorClass {
        classify(self.code())
    }

    /// Returns true for codes caused by request throttling
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::TooManyRequests)
    }

    /// Returns true for codes caused by bad or missing credentials
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized
                | Self::IpIllegal
                | Self::AuthenticationFailure
                | Self::InvalidNonce
                | Self::NonceOutOfWindow
        )
    }
}
