//! Credentials and request signing for Bittrex private endpoints
//!
//! Bittrex authenticates a private call by an HMAC-SHA512 signature over the
//! full request URL, sent in the `apisign` header. The URL carries the API
//! key and a nonce in its query string.
//!
//! # Example
//!
//! ```no_run
//! use bittrex_auth::{Credentials, RequestSigner};
//! use bittrex_types::QueryParams;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from environment
//!     let creds = Credentials::from_env()?;
//!
//!     let params = QueryParams::new().with("currency", "BTC");
//!     let signed = RequestSigner::new(&creds).sign_url(
//!         "https://bittrex.com/api/v1.1",
//!         "/account/getbalance",
//!         &params,
//!     );
//!     println!("GET {}", signed.url);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;

pub use credentials::{sign_url, Credentials, RequestSigner, SignedUrl, SIGNATURE_HEADER};
pub use error::{AuthError, AuthResult};
