//! Request signing for the crypto.com Exchange API
//!
//! Private methods must carry an HMAC-SHA256 signature over the method name,
//! request id, API key, canonicalized parameters and nonce. This crate owns
//! that contract and nothing else: it performs no I/O.
//!
//! # Example
//!
//! ```
//! use cryptocom_auth::{canonicalize, Credentials, RequestSigner};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::new("my-key", "my-secret")?;
//! let params = json!({"order_id": "1234"});
//! let params = params.as_object().unwrap();
//!
//! assert_eq!(canonicalize(params)?, "order_id1234");
//!
//! let signer = RequestSigner::with_nonce(&creds, "private/cancel-order", 11, 1_587_846_358_253);
//! let sig = signer.sign(params)?;
//! assert_eq!(sig.len(), 64);
//! # Ok(())
//! # }
//! ```

mod canonical;
mod credentials;
mod error;

pub use canonical::{canonicalize, canonicalize_value};
pub use credentials::{now_millis, sign, Credentials, RequestSigner};
pub use error::{AuthError, AuthResult};
