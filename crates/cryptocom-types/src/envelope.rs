//! Request and response envelopes
//!
//! Every exchange call is wrapped in an envelope. Requests carry the method,
//! a caller-chosen id and (for private methods) the API key, a nonce and a
//! signature. Responses echo the id and method and carry a numeric `code`
//! that is `0` on success.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameter map sent with a request
pub type Params = Map<String, Value>;

/// Outgoing request envelope
///
/// `api_key`, `sig` and `nonce` are only present on signed requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    pub id: i64,
    pub method: String,
    pub params: Params,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sig: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nonce: Option<i64>,
}

impl RequestEnvelope {
    /// Returns true if this envelope carries a signature
    pub fn is_signed(&self) -> bool {
        self.sig.is_some()
    }
}

/// Incoming response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub method: String,
    pub code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Why an envelope's result could not be turned into a typed value
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// `code == 0` but the envelope has no `result`
    #[error("response for '{method}' has no result")]
    MissingResult { method: String },

    /// `result` is present but does not match the expected shape
    #[error("unexpected result shape for '{method}': {source}")]
    Shape {
        method: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ResponseEnvelope {
    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Deserialize the result payload into `T`
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T, EnvelopeError> {
        let result = self.result.ok_or_else(|| EnvelopeError::MissingResult {
            method: self.method.clone(),
        })?;

        serde_json::from_value(result).map_err(|source| EnvelopeError::Shape {
            method: self.method,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_success_envelope() {
        let env: ResponseEnvelope = serde_json::from_value(json!({
            "id": 7,
            "method": "private/get-order-history",
            "code": 0,
            "result": {"data": []}
        }))
        .unwrap();

        assert!(env.is_success());
        assert_eq!(env.id, 7);
        assert!(env.message.is_none());
    }

    #[test]
    fn test_parse_error_envelope() {
        let env: ResponseEnvelope = serde_json::from_value(json!({
            "id": 1,
            "method": "private/create-order",
            "code": 315,
            "message": "FAR_AWAY_LIMIT_PRICE"
        }))
        .unwrap();

        assert!(!env.is_success());
        assert!(env.result.is_none());
        assert_eq!(env.message.as_deref(), Some("FAR_AWAY_LIMIT_PRICE"));
    }

    #[test]
    fn test_into_result_missing() {
        let env = ResponseEnvelope {
            id: 1,
            method: "private/user-balance".into(),
            code: 0,
            result: None,
            message: None,
        };
        assert!(matches!(
            env.into_result::<Value>(),
            Err(EnvelopeError::MissingResult { .. })
        ));
    }

    #[test]
    fn test_request_envelope_omits_auth_fields_when_public() {
        let env = RequestEnvelope {
            id: 1,
            method: "public/get-candlestick".into(),
            params: Params::new(),
            api_key: None,
            sig: None,
            nonce: None,
        };
        let body = serde_json::to_value(&env).unwrap();
        assert!(body.get("api_key").is_none());
        assert!(body.get("sig").is_none());
        assert!(body.get("nonce").is_none());
        assert!(!env.is_signed());
    }
}
