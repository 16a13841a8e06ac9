//! Request construction
//!
//! Turns a method name and parameter map into an [`HttpRequest`]. Public
//! market-data methods become a GET with query parameters. Private methods
//! become a POST carrying a signed JSON envelope.

use cryptocom_auth::{now_millis, Credentials, RequestSigner};
use cryptocom_types::{Params, RequestEnvelope};
use serde_json::Value;

use crate::error::{RestError, RestResult};
use crate::transport::HttpRequest;

/// Whether a request must be signed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Public,
    Signed,
}

/// Builds HTTP requests for one base URL and an optional set of credentials
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    credentials: Option<Credentials>,
}

impl RequestBuilder {
    pub fn new(base_url: impl Into<String>, credentials: Option<Credentials>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Build a request stamped with the current time
    ///
    /// For signed requests the id defaults to the nonce when `request_id`
    /// is `None`.
    pub fn build(
        &self,
        method: &str,
        params: Params,
        auth: Auth,
        request_id: Option<i64>,
    ) -> RestResult<HttpRequest> {
        self.build_at(method, params, auth, request_id, now_millis())
    }

    /// Build a request with an explicit nonce
    pub fn build_at(
        &self,
        method: &str,
        params: Params,
        auth: Auth,
        request_id: Option<i64>,
        nonce: i64,
    ) -> RestResult<HttpRequest> {
        let params = strip_nulls(params);
        let url = format!("{}/{}", self.base_url, method);

        match auth {
            Auth::Public => {
                let mut request = HttpRequest::get(url);
                for (key, value) in params {
                    request = request.with_query(key.as_str(), query_value(&key, value)?);
                }
                Ok(request)
            }
            Auth::Signed => {
                let credentials = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
                let request_id = request_id.unwrap_or(nonce);

                let signer = RequestSigner::with_nonce(credentials, method, request_id, nonce);
                let sig = signer.sign(&params)?;

                let envelope = RequestEnvelope {
                    id: request_id,
                    method: method.to_string(),
                    params,
                    api_key: Some(signer.api_key().to_string()),
                    sig: Some(sig),
                    nonce: Some(nonce),
                };
                let body = serde_json::to_string(&envelope)
                    .map_err(|e| RestError::InvalidParameter(format!("unserializable params: {e}")))?;

                Ok(HttpRequest::post(url, body).with_header("Content-Type", "application/json"))
            }
        }
    }
}

/// Drop null-valued keys at every object level
///
/// Array elements are kept in place so indices stay stable.
fn strip_nulls(params: Params) -> Params {
    params
        .into_iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k, strip_value(v)))
        .collect()
}

fn strip_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(strip_nulls(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_value).collect()),
        other => other,
    }
}

fn query_value(key: &str, value: Value) -> RestResult<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(RestError::InvalidParameter(format!(
            "query parameter '{key}' must be a scalar"
        ))),
    }
}
