//! Request dispatcher shared by every endpoint group
//!
//! Turns a [`RequestDescriptor`] into one HTTP GET and normalizes the outcome:
//!
//! | outcome | result |
//! |---|---|
//! | network failure, non-200 status, empty body | [`RestError::Transport`] |
//! | body is not the expected JSON | [`RestError::Decode`] |
//! | `"success": false` | [`RestError::Upstream`] |
//! | `"success": true` | `Ok(ApiResponse<T>)` |

use bittrex_auth::{Credentials, RequestSigner, SIGNATURE_HEADER};
use bittrex_types::{ApiResponse, QueryParams};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};

/// Base URL of the v1.1 API
pub const V1_BASE_URL: &str = "https://bittrex.com/api/v1.1";

/// Base URL of the v2.0 API
pub const V2_BASE_URL: &str = "https://bittrex.com/Api/v2.0";

/// Default user agent
pub const DEFAULT_USER_AGENT: &str = concat!("bittrex-rest/", env!("CARGO_PKG_VERSION"));

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// API version an endpoint lives under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V1,
    V2,
}

/// Base URLs per API version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrls {
    pub v1: String,
    pub v2: String,
}

impl BaseUrls {
    pub fn new(v1: impl Into<String>, v2: impl Into<String>) -> Self {
        Self {
            v1: v1.into().trim_end_matches('/').to_string(),
            v2: v2.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL for a version
    pub fn get(&self, version: ApiVersion) -> &str {
        match version {
            ApiVersion::V1 => &self.v1,
            ApiVersion::V2 => &self.v2,
        }
    }
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self::new(V1_BASE_URL, V2_BASE_URL)
    }
}

/// Everything needed to issue one API call
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub version: ApiVersion,
    pub path: &'static str,
    pub query: QueryParams,
    pub headers: Vec<(&'static str, String)>,
}

impl RequestDescriptor {
    /// GET request without parameters
    pub fn get(version: ApiVersion, path: &'static str) -> Self {
        Self {
            method: Method::GET,
            version,
            path,
            query: QueryParams::new(),
            headers: Vec::new(),
        }
    }

    /// Set the query parameters
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Add a request header
    pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Full request URL against the given base URLs
    pub fn url(&self, base_urls: &BaseUrls) -> String {
        let mut url = format!("{}{}", base_urls.get(self.version), self.path);
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query.encode());
        }
        url
    }
}

/// Sends requests and classifies their outcome
#[derive(Debug, Clone)]
pub struct Dispatcher {
    http: Client,
    base_urls: BaseUrls,
    user_agent: String,
}

impl Dispatcher {
    pub fn new(base_urls: BaseUrls, user_agent: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_urls,
            user_agent: user_agent.into(),
        }
    }

    pub fn base_urls(&self) -> &BaseUrls {
        &self.base_urls
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Send an unsigned request
    pub async fn send<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> RestResult<ApiResponse<T>> {
        let url = request.url(&self.base_urls);
        self.execute(&request, url).await
    }

    /// Sign and send a private request
    ///
    /// The request goes to exactly the URL that was signed.
    pub async fn send_signed<T: DeserializeOwned>(
        &self,
        credentials: &Credentials,
        request: RequestDescriptor,
    ) -> RestResult<ApiResponse<T>> {
        let signed = RequestSigner::new(credentials).sign_url(
            self.base_urls.get(request.version),
            request.path,
            &request.query,
        );
        let request = request.with_header(SIGNATURE_HEADER, signed.signature);
        self.execute(&request, signed.url).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: &RequestDescriptor,
        url: String,
    ) -> RestResult<ApiResponse<T>> {
        // The URL of a private call holds the apikey, so only the path is logged
        debug!(version = ?request.version, path = request.path, "Sending request");

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .header(USER_AGENT, self.user_agent.as_str())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        let response = builder.send().await.map_err(|err| {
            warn!(path = request.path, error = %err, "Request failed");
            RestError::transport(err)
        })?;

        let status = response.status();
        debug!(path = request.path, status = status.as_u16(), "Received response");
        if status != StatusCode::OK {
            return Err(RestError::bad_response(status));
        }

        let body = response.bytes().await.map_err(RestError::transport)?;
        decode_envelope(&body)
    }
}

/// Classify a 200 response body
///
/// The raw bytes are parsed as-is, so a body that is not valid UTF-8 is a
/// decode error rather than being patched up first.
pub(crate) fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> RestResult<ApiResponse<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(RestError::bad_response(StatusCode::OK));
    }

    let envelope: ApiResponse<serde_json::Value> =
        serde_json::from_slice(body).map_err(|err| decode_error(err, body))?;

    if !envelope.success {
        let message = envelope
            .error
            .clone()
            .filter(|error| !error.is_empty())
            .unwrap_or_else(|| envelope.message.clone());
        return Err(RestError::Upstream {
            message,
            response: envelope,
        });
    }

    serde_json::from_slice(body).map_err(|err| decode_error(err, body))
}

fn decode_error(err: serde_json::Error, body: &[u8]) -> RestError {
    RestError::Decode {
        message: err.to_string(),
        body: String::from_utf8_lossy(body).into_owned(),
    }
}
