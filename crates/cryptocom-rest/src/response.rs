//! Response validation
//!
//! A non-2xx status is reported as [`RestError::Transport`] before the body is
//! even looked at. A 2xx body must parse as an envelope; a non-zero `code` in
//! it is classified into the price, quantity or generic API error kinds.

use cryptocom_types::{ApiErrorCode, ResponseEnvelope};
use tracing::debug;

use crate::error::{RestError, RestResult};

/// Validate a raw HTTP response
pub fn validate(status: u16, body: &str) -> RestResult<ResponseEnvelope> {
    if !(200..300).contains(&status) {
        debug!(status, "Non-2xx response");
        return Err(RestError::Transport {
            status,
            body: body.to_string(),
        });
    }

    let envelope: ResponseEnvelope = serde_json::from_str(body)
        .map_err(|e| RestError::Validation(format!("malformed response envelope: {e}")))?;

    if envelope.is_success() {
        return Ok(envelope);
    }

    let code = envelope.code;
    let message = envelope
        .message
        .filter(|m| !m.is_empty())
        .or_else(|| ApiErrorCode::from_code(code).map(|c| c.name().to_string()))
        .unwrap_or_else(|| "unknown error".to_string());

    debug!(code, %message, method = %envelope.method, "API error response");
    Err(RestError::from_api_code(code, message))
}
