//! API credentials and HMAC-SHA256 request signing
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};
use sha2::Sha256;

use crate::canonical::canonicalize;
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

const API_KEY_VAR: &str = "CRYPTOCOM_API_KEY";
const API_SECRET_VAR: &str = "CRYPTOCOM_API_SECRET";

/// Current time in milliseconds since the epoch
///
/// The exchange rejects nonces more than 60 seconds away from its clock.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Compute the request signature
///
/// The MAC input is `method + request_id + api_key + canonical_params + nonce`
/// in exactly that order. Returns the lowercase hex digest.
pub fn sign(
    method: &str,
    request_id: i64,
    api_key: &str,
    canonical_params: &str,
    nonce: i64,
    secret: &[u8],
) -> AuthResult<String> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| AuthError::Signing(format!("HMAC key rejected: {e}")))?;

    mac.update(method.as_bytes());
    mac.update(request_id.to_string().as_bytes());
    mac.update(api_key.as_bytes());
    mac.update(canonical_params.as_bytes());
    mac.update(nonce.to_string().as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// API credentials for authenticated requests
///
/// Immutable once constructed. The secret is zeroized when dropped.
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.trim().is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `CRYPTOCOM_API_KEY` and `CRYPTOCOM_API_SECRET`.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_VAR.to_string()))?;
        let api_secret = std::env::var(API_SECRET_VAR)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_VAR.to_string()))?;

        Self::new(api_key, api_secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign already-canonicalized parameters
    pub fn sign(
        &self,
        method: &str,
        request_id: i64,
        canonical_params: &str,
        nonce: i64,
    ) -> AuthResult<String> {
        sign(
            method,
            request_id,
            &self.api_key,
            canonical_params,
            nonce,
            self.api_secret.expose_secret().as_bytes(),
        )
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let visible: String = self.api_key.chars().take(6).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{visible}..."))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Signer bound to one request
///
/// Fixes the method, request id and nonce so the same values end up in both
/// the envelope and the signature.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    method: String,
    request_id: i64,
    nonce: i64,
}

impl<'a> RequestSigner<'a> {
    /// Create a signer stamped with the current time
    ///
    /// The request id defaults to the nonce.
    pub fn new(credentials: &'a Credentials, method: impl Into<String>, request_id: Option<i64>) -> Self {
        let nonce = now_millis();
        Self::with_nonce(credentials, method, request_id.unwrap_or(nonce), nonce)
    }

    /// Create a signer with an explicit id and nonce
    pub fn with_nonce(
        credentials: &'a Credentials,
        method: impl Into<String>,
        request_id: i64,
        nonce: i64,
    ) -> Self {
        Self {
            credentials,
            method: method.into(),
            request_id,
            nonce,
        }
    }

    pub fn nonce(&self) -> i64 {
        self.nonce
    }

    pub fn request_id(&self) -> i64 {
        self.request_id
    }

    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Canonicalize `params` and sign them
    pub fn sign(&self, params: &Map<String, Value>) -> AuthResult<String> {
        let canonical = canonicalize(params)?;
        self.credentials
            .sign(&self.method, self.request_id, &canonical, self.nonce)
    }
}
