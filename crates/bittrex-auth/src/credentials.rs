//! API credentials and request signing for Bittrex private endpoints
//!
//! Private calls are authenticated by signing the full request URL:
//!
//! 1. `url = base_url + path + "?apikey=<key>&nonce=<unix seconds>" [+ "&" + params]`
//! 2. `apisign = hex(HMAC-SHA512(secret, url))`
//!
//! The URL that is signed must be the exact URL that is requested.
//!
//! # Security
//!
//! The API secret is held in a `secrecy::SecretString`, which zeroizes memory
//! on drop and keeps the secret out of `Debug` output. Only the derived
//! signature ever leaves the process.

use bittrex_types::QueryParams;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha512;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::trace;

use crate::error::{AuthError, AuthResult};

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the request signature
pub const SIGNATURE_HEADER: &str = "apisign";

/// Compute the `apisign` value for a URL
///
/// Returns the lowercase hex encoding of HMAC-SHA512 over `url`, keyed by
/// `secret`.
pub fn sign_url(url: &str, secret: &str) -> String {
    let mut mac =
        HmacSha512::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(url.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// API credentials for authenticated requests
pub struct Credentials {
    /// API key (public, sent in the query string)
    api_key: String,
    /// API secret (zeroized on drop, never sent)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from API key and secret
    ///
    /// Fails if either value is empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.trim().is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if api_secret.trim().is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BITTREX_API_KEY` and `BITTREX_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("BITTREX_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("BITTREX_API_KEY".to_string()))?;
        let api_secret = std::env::var("BITTREX_API_SECRET")
            .map_err(|_| AuthError::EnvVarNotSet("BITTREX_API_SECRET".to_string()))?;

        Self::new(api_key, api_secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Current Unix time in whole seconds
    ///
    /// Read fresh from the clock for every request. Bittrex rejects nonces
    /// that go backwards, so this is non-decreasing as long as the system
    /// clock is.
    pub fn generate_nonce() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()
    }

    /// Sign a canonical URL with the API secret
    pub fn sign(&self, url: &str) -> String {
        sign_url(url, self.api_secret.expose_secret())
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", prefix))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// A signed request URL and its signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrl {
    /// Canonical URL, to be requested verbatim
    pub url: String,
    /// Value for the [`SIGNATURE_HEADER`] header
    pub signature: String,
}

/// Request signer for building authenticated requests
///
/// Holds the nonce for a single request.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    nonce: u64,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with a nonce read from the clock
    pub fn new(credentials: &'a Credentials) -> Self {
        Self::with_nonce(credentials, Credentials::generate_nonce())
    }

    /// Create a request signer with a fixed nonce
    pub fn with_nonce(credentials: &'a Credentials, nonce: u64) -> Self {
        Self { credentials, nonce }
    }

    /// Get the nonce for this request
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Build the canonical URL for a private call
    ///
    /// `apikey` and `nonce` always come first, followed by the call
    /// parameters in their given order.
    pub fn canonical_url(&self, base_url: &str, path: &str, params: &QueryParams) -> String {
        let auth = QueryParams::new()
            .with("apikey", self.api_key())
            .with("nonce", self.nonce);

        let mut url = format!("{}{}?{}", base_url, path, auth.encode());
        if !params.is_empty() {
            url.push('&');
            url.push_str(&params.encode());
        }
        url
    }

    /// Build and sign the canonical URL for a private call
    pub fn sign_url(&self, base_url: &str, path: &str, params: &QueryParams) -> SignedUrl {
        let url = self.canonical_url(base_url, path, params);
        trace!(path, nonce = self.nonce, "Signing private request");
        let signature = self.credentials.sign(&url);

        SignedUrl { url, signature }
    }
}
