//! The Shopify Admin REST API client.
//!
//! This module provides the [`Client`] type, which owns the HTTP transport,
//! authentication, retry handling, and rate-limit tracking for one shop.
//!
//! # Overview
//!
//! A [`Client`] is constructed once per shop via [`Client::builder`] and
//! exposes the request primitives the typed resource services are built on:
//! [`get`](Client::get), [`post`](Client::post), [`put`](Client::put),
//! [`delete`](Client::delete), and [`count`](Client::count).
//!
//! # Retry Behavior
//!
//! The retry budget defaults to 0, meaning every call executes exactly once.
//! With a budget configured via [`ClientBuilder::retries`]:
//!
//! - **429 (rate limited)**: the client sleeps for the server's
//!   `Retry-After` hint, then retries.
//! - **503 (service unavailable)**: the client retries immediately.
//! - **Transport failures and all other errors**: returned immediately,
//!   never retried.
//!
//! A call always completes within `retries + 1` attempts.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::Deserialize;
//! use shopify_rest::{AccessToken, Client, ShopDomain};
//!
//! #[derive(Deserialize)]
//! struct ShopRoot {
//!     shop: serde_json::Value,
//! }
//!
//! let client = Client::builder(ShopDomain::new("my-store")?)
//!     .access_token(AccessToken::new("shpat_abc123")?)
//!     .retries(3)
//!     .build()?;
//!
//! let root: ShopRoot = client.get("shop.json", None::<&()>).await?;
//! ```

use std::sync::{Mutex, PoisonError, RwLock};
use std::time::Duration;

use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::client::errors::{check_response_error, Error};
use crate::client::rate_limit::RateLimitInfo;
use crate::config::{AccessToken, ApiKey, ApiVersion, Password, ShopDomain};
use crate::error::ConfigError;

/// Client version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed User-Agent header value sent with every request.
const USER_AGENT_VALUE: &str = concat!("shopify-rest/", env!("CARGO_PKG_VERSION"));

/// Header carrying the permanent access token.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Header reporting leaky-bucket quota usage as `<used>/<limit>`.
const API_CALL_LIMIT_HEADER: &str = "X-Shopify-Shop-Api-Call-Limit";

/// Header reporting the API version that served the request.
const API_VERSION_HEADER: &str = "X-Shopify-API-Version";

/// Header carrying the backoff hint on rate-limited responses.
const RETRY_AFTER_HEADER: &str = "Retry-After";

/// Default timeout for a single HTTP request.
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// How a client authenticates its requests.
#[derive(Clone, Debug)]
enum Auth {
    /// Permanent access token, sent in the `X-Shopify-Access-Token` header.
    Token(AccessToken),
    /// HTTP basic auth with the app's API key and password.
    Basic { api_key: ApiKey, password: Password },
    /// No authentication.
    None,
}

/// An async client for one shop's Admin REST API.
///
/// The client tracks two pieces of per-shop state across calls: the most
/// recent rate-limit snapshot (advisory telemetry, see
/// [`rate_limits`](Client::rate_limits)) and the API version pin (see
/// [`api_version`](Client::api_version)). Both are safe to read from
/// concurrent tasks.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`, making it safe to share across async tasks.
/// Calls are sequential within one task; issue calls from independent tasks
/// for concurrency.
///
/// # Example
///
/// ```rust
/// use shopify_rest::{AccessToken, Client, ShopDomain};
///
/// let client = Client::builder(ShopDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("shpat_abc123").unwrap())
///     .retries(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(client.retries(), 3);
/// ```
#[derive(Debug)]
pub struct Client {
    /// The internal reqwest HTTP client.
    http: reqwest::Client,
    /// Base URL requests are resolved against.
    base_url: Url,
    /// Path segment between the base URL and the request path, derived
    /// from the configured API version.
    path_prefix: String,
    /// Authentication mode.
    auth: Auth,
    /// Retry budget; 0 means every call executes exactly once.
    retries: u32,
    /// The API version in use. Starts at the `Stable` sentinel unless
    /// configured, and is pinned once from the first successful response.
    api_version: RwLock<ApiVersion>,
    /// Most recent rate-limit snapshot, overwritten on every response.
    rate_limits: Mutex<RateLimitInfo>,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a new builder for constructing a `Client`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::{Client, ShopDomain};
    ///
    /// let client = Client::builder(ShopDomain::new("my-store").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub const fn builder(shop: ShopDomain) -> ClientBuilder {
        ClientBuilder::new(shop)
    }

    /// Returns the configured retry budget.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Returns the path prefix requests are resolved under.
    #[must_use]
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Returns the API version the client is currently on.
    ///
    /// When the client was built without an explicit version this starts as
    /// [`ApiVersion::Stable`] and is pinned to the version reported by the
    /// shop on the first successful call.
    #[must_use]
    pub fn api_version(&self) -> ApiVersion {
        self.api_version
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent rate-limit snapshot.
    ///
    /// The snapshot is advisory telemetry taken from response headers; it is
    /// not used for admission control. Concurrent calls overwrite it
    /// last-write-wins.
    #[must_use]
    pub fn rate_limits(&self) -> RateLimitInfo {
        *self
            .rate_limits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Sends a GET request and decodes the response body into `T`.
    ///
    /// Query options are serialized to query parameters and merged with any
    /// parameters already inline in `path`; both sets of values are retained
    /// for duplicate keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for construction failures, transport failures, API
    /// error responses, and response bodies that do not decode into `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let root: OrdersRoot = client
    ///     .get("orders.json", Some(&ListOptions { limit: Some(50), ..Default::default() }))
    ///     .await?;
    /// ```
    pub async fn get<T, O>(&self, path: &str, options: Option<&O>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        O: Serialize,
    {
        let body = self
            .create_and_send(Method::GET, path, None::<&()>, options)
            .await?;
        serde_json::from_slice(&body).map_err(Error::from)
    }

    /// Sends a POST request with `data` JSON-encoded as the body, decoding
    /// the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for construction failures, transport failures, API
    /// error responses, and response bodies that do not decode into `T`.
    pub async fn post<T, B>(&self, path: &str, data: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self
            .create_and_send(Method::POST, path, Some(data), None::<&()>)
            .await?;
        serde_json::from_slice(&body).map_err(Error::from)
    }

    /// Sends a PUT request with `data` JSON-encoded as the body, decoding
    /// the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for construction failures, transport failures, API
    /// error responses, and response bodies that do not decode into `T`.
    pub async fn put<T, B>(&self, path: &str, data: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self
            .create_and_send(Method::PUT, path, Some(data), None::<&()>)
            .await?;
        serde_json::from_slice(&body).map_err(Error::from)
    }

    /// Sends a DELETE request, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for construction failures, transport failures, and
    /// API error responses.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        self.create_and_send(Method::DELETE, path, None::<&()>, None::<&()>)
            .await?;
        Ok(())
    }

    /// Fetches the count reported by a `*/count.json` endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for construction failures, transport failures, API
    /// error responses, and bodies without a numeric `count` field.
    pub async fn count<O>(&self, path: &str, options: Option<&O>) -> Result<u64, Error>
    where
        O: Serialize,
    {
        #[derive(Deserialize)]
        struct CountRoot {
            count: u64,
        }

        let root: CountRoot = self.get(path, options).await?;
        Ok(root.count)
    }

    /// Builds the request URL and body, then runs the send/retry loop.
    async fn create_and_send<B, O>(
        &self,
        method: Method,
        rel_path: &str,
        data: Option<&B>,
        options: Option<&O>,
    ) -> Result<Vec<u8>, Error>
    where
        B: Serialize + ?Sized,
        O: Serialize,
    {
        let url = self.request_url(rel_path, options)?;
        let body = data.map(serde_json::to_vec).transpose()?;
        self.send_with_retries(method, url, body).await
    }

    /// Resolves a relative path against the base URL and path prefix,
    /// merging serialized query options with any parameters already inline
    /// in the path.
    fn request_url<O: Serialize>(&self, rel_path: &str, options: Option<&O>) -> Result<Url, Error> {
        let rel_path = rel_path.trim_start_matches('/');
        let mut url = self
            .base_url
            .join(&format!("{}/{rel_path}", self.path_prefix))?;

        if let Some(options) = options {
            let mut query = serde_urlencoded::to_string(options)?;
            // Both sets of values are retained for duplicate keys.
            match url.query() {
                Some(existing) if !existing.is_empty() => {
                    if query.is_empty() {
                        query = existing.to_string();
                    } else {
                        query = format!("{query}&{existing}");
                    }
                }
                _ => {}
            }
            url.set_query(if query.is_empty() {
                None
            } else {
                Some(query.as_str())
            });
        }

        Ok(url)
    }

    /// Applies the fixed headers and authentication to an attempt.
    fn build_request(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, USER_AGENT_VALUE);

        request = match &self.auth {
            Auth::Token(token) => request.header(ACCESS_TOKEN_HEADER, token.as_ref()),
            Auth::Basic { api_key, password } => {
                request.basic_auth(api_key.as_ref(), Some(password.as_ref()))
            }
            Auth::None => request,
        };

        match body {
            Some(bytes) => request.body(bytes),
            None => request,
        }
    }

    /// Dispatches a request, retrying rate-limited and service-unavailable
    /// responses within the configured budget.
    ///
    /// Transport failures are returned immediately and never retried. The
    /// response body is read in full on every path, including retried
    /// attempts, so the underlying connection can be reused.
    async fn send_with_retries(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, Error> {
        let mut retries = self.retries;
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            tracing::debug!(%method, %url, attempt, "sending request");

            let response = self
                .build_request(method.clone(), url.clone(), body.clone())
                .send()
                .await?;

            let status = response.status().as_u16();
            let retry_after = header_value(response.headers(), RETRY_AFTER_HEADER);
            let call_limit = header_value(response.headers(), API_CALL_LIMIT_HEADER);
            let shop_version = header_value(response.headers(), API_VERSION_HEADER);
            let body_bytes = response.bytes().await?.to_vec();
            tracing::debug!(status, bytes = body_bytes.len(), "received response");

            self.rate_limits
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .update(call_limit.as_deref(), retry_after.as_deref());

            let error = match check_response_error(status, retry_after.as_deref(), &body_bytes) {
                Ok(()) => {
                    if let Some(version) = shop_version {
                        self.pin_api_version(&version);
                    }
                    return Ok(body_bytes);
                }
                Err(error) => error,
            };

            if retries <= 1 {
                return Err(error);
            }

            if let Error::RateLimit(rate_limit) = &error {
                let wait = Duration::from_secs(rate_limit.retry_after);
                tracing::debug!(seconds = rate_limit.retry_after, "rate limited, backing off");
                tokio::time::sleep(wait).await;
                retries -= 1;
                continue;
            }

            if status == 503 {
                tracing::debug!("service unavailable, retrying");
                retries -= 1;
                continue;
            }

            return Err(error);
        }
    }

    /// Adopts the version reported by the shop while the client is still on
    /// the `Stable` sentinel. The pin is one-time: a version reported by a
    /// later response never changes it.
    fn pin_api_version(&self, header: &str) {
        if let Ok(version) = header.parse::<ApiVersion>() {
            if version.is_stable() {
                return;
            }
            let mut current = self
                .api_version
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if current.is_stable() {
                tracing::info!(%version, "api version not set, now using the shop's version");
                *current = version;
            }
        }
    }
}

/// Reads a header as a UTF-8 string, if present.
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string)
}

/// Builder for constructing [`Client`] instances.
///
/// Only the shop domain is required. Authentication prefers a permanent
/// access token when one is set, falling back to HTTP basic auth with the
/// app's API key and password, and finally to unauthenticated requests.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::Stable`] (pinned from the first response)
/// - `retries`: 0 (every call executes exactly once)
/// - `timeout`: 10 seconds
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use shopify_rest::{ApiKey, Client, Password, ShopDomain};
///
/// let client = Client::builder(ShopDomain::new("my-store").unwrap())
///     .basic_auth(
///         ApiKey::new("api-key").unwrap(),
///         Password::new("password").unwrap(),
///     )
///     .api_version("2024-01".parse().unwrap())
///     .retries(2)
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    shop: ShopDomain,
    base_url: Option<String>,
    access_token: Option<AccessToken>,
    credentials: Option<(ApiKey, Password)>,
    api_version: ApiVersion,
    retries: u32,
    timeout: Duration,
}

impl ClientBuilder {
    /// Creates a new builder for the given shop.
    #[must_use]
    pub const fn new(shop: ShopDomain) -> Self {
        Self {
            shop,
            base_url: None,
            access_token: None,
            credentials: None,
            api_version: ApiVersion::Stable,
            retries: 0,
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    /// Sets the permanent access token used to authenticate requests.
    ///
    /// Takes precedence over [`basic_auth`](Self::basic_auth) when both are
    /// configured.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the app API key and password for HTTP basic authentication.
    #[must_use]
    pub fn basic_auth(mut self, api_key: ApiKey, password: Password) -> Self {
        self.credentials = Some((api_key, password));
        self
    }

    /// Sets the API version requests are addressed to.
    ///
    /// Without an explicit version the client stays on the
    /// [`ApiVersion::Stable`] sentinel and pins itself to the version the
    /// shop reports on the first successful call.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Sets the retry budget for rate-limited and service-unavailable
    /// responses. The default of 0 disables retries.
    #[must_use]
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Sets the timeout for a single HTTP request. Defaults to 10 seconds.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the base URL derived from the shop domain.
    ///
    /// Intended for routing requests through a proxy or a local test server;
    /// production clients address the shop directly.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the [`Client`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if a base URL override does
    /// not parse, or [`ConfigError::InvalidShopDomain`] if the shop domain
    /// does not resolve to a valid URL.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    pub fn build(self) -> Result<Client, ConfigError> {
        let base_url = match self.base_url {
            Some(url) => Url::parse(&url).map_err(|_| ConfigError::InvalidHostUrl { url })?,
            None => Url::parse(&self.shop.base_url()).map_err(|_| {
                ConfigError::InvalidShopDomain {
                    domain: self.shop.as_ref().to_string(),
                }
            })?,
        };

        let auth = match (self.access_token, self.credentials) {
            (Some(token), _) => Auth::Token(token),
            (None, Some((api_key, password))) => Auth::Basic { api_key, password },
            (None, None) => Auth::None,
        };

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(self.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Ok(Client {
            http,
            base_url,
            path_prefix: self.api_version.path_prefix(),
            auth,
            retries: self.retries,
            api_version: RwLock::new(self.api_version),
            rate_limits: Mutex::new(RateLimitInfo::default()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    fn test_shop() -> ShopDomain {
        ShopDomain::new("test-shop").unwrap()
    }

    #[derive(serde::Serialize)]
    struct LimitOptions {
        limit: u32,
    }

    #[test]
    fn test_builder_defaults() {
        let client = Client::builder(test_shop()).build().unwrap();

        assert_eq!(client.retries(), 0);
        assert_eq!(client.api_version(), ApiVersion::Stable);
        assert_eq!(client.path_prefix(), "admin");
        assert_eq!(client.rate_limits(), RateLimitInfo::default());
    }

    #[test]
    fn test_builder_with_dated_version_sets_path_prefix() {
        let client = Client::builder(test_shop())
            .api_version("2024-01".parse().unwrap())
            .build()
            .unwrap();

        assert_eq!(client.path_prefix(), "admin/api/2024-01");
        assert_eq!(
            client.api_version(),
            ApiVersion::Dated("2024-01".to_string())
        );
    }

    #[test]
    fn test_builder_rejects_invalid_base_url_override() {
        let result = Client::builder(test_shop()).base_url("not a url").build();
        assert!(matches!(result, Err(ConfigError::InvalidHostUrl { .. })));
    }

    #[test]
    fn test_request_url_resolves_against_shop_domain() {
        let client = Client::builder(test_shop()).build().unwrap();
        let url = client.request_url::<()>("orders.json", None).unwrap();

        assert_eq!(
            url.as_str(),
            "https://test-shop.myshopify.com/admin/orders.json"
        );
    }

    #[test]
    fn test_request_url_strips_leading_slash() {
        let client = Client::builder(test_shop()).build().unwrap();
        let url = client.request_url::<()>("/orders.json", None).unwrap();

        assert_eq!(url.path(), "/admin/orders.json");
    }

    #[test]
    fn test_request_url_serializes_options() {
        let client = Client::builder(test_shop()).build().unwrap();
        let url = client
            .request_url("orders.json", Some(&LimitOptions { limit: 50 }))
            .unwrap();

        assert_eq!(url.query(), Some("limit=50"));
    }

    #[test]
    fn test_request_url_merges_options_with_inline_query() {
        let client = Client::builder(test_shop()).build().unwrap();
        let url = client
            .request_url("orders.json?status=open", Some(&LimitOptions { limit: 50 }))
            .unwrap();

        // Both parameter sets survive the merge.
        assert_eq!(url.query(), Some("limit=50&status=open"));
    }

    #[test]
    fn test_request_url_retains_duplicate_keys() {
        let client = Client::builder(test_shop()).build().unwrap();
        let url = client
            .request_url("orders.json?limit=1", Some(&LimitOptions { limit: 2 }))
            .unwrap();

        assert_eq!(url.query(), Some("limit=2&limit=1"));
    }

    #[test]
    fn test_request_url_without_options_keeps_inline_query() {
        let client = Client::builder(test_shop()).build().unwrap();
        let url = client
            .request_url::<()>("orders.json?status=open", None)
            .unwrap();

        assert_eq!(url.query(), Some("status=open"));
    }

    #[test]
    fn test_build_request_sets_fixed_headers() {
        let client = Client::builder(test_shop()).build().unwrap();
        let url = client.request_url::<()>("orders.json", None).unwrap();
        let request = client.build_request(Method::GET, url, None).build().unwrap();

        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(request.headers().get(ACCEPT).unwrap(), "application/json");
        assert_eq!(
            request.headers().get(USER_AGENT).unwrap(),
            &format!("shopify-rest/{VERSION}")
        );
    }

    #[test]
    fn test_build_request_with_access_token() {
        let client = Client::builder(test_shop())
            .access_token(AccessToken::new("the-token").unwrap())
            .build()
            .unwrap();
        let url = client.request_url::<()>("orders.json", None).unwrap();
        let request = client.build_request(Method::GET, url, None).build().unwrap();

        assert_eq!(
            request.headers().get(ACCESS_TOKEN_HEADER).unwrap(),
            "the-token"
        );
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_build_request_with_basic_auth() {
        let client = Client::builder(test_shop())
            .basic_auth(
                ApiKey::new("apikey").unwrap(),
                Password::new("password").unwrap(),
            )
            .build()
            .unwrap();
        let url = client.request_url::<()>("orders.json", None).unwrap();
        let request = client.build_request(Method::GET, url, None).build().unwrap();

        let auth = request.headers().get(AUTHORIZATION).unwrap();
        assert!(auth.to_str().unwrap().starts_with("Basic "));
        assert!(request.headers().get(ACCESS_TOKEN_HEADER).is_none());
    }

    #[test]
    fn test_access_token_takes_precedence_over_basic_auth() {
        let client = Client::builder(test_shop())
            .access_token(AccessToken::new("the-token").unwrap())
            .basic_auth(
                ApiKey::new("apikey").unwrap(),
                Password::new("password").unwrap(),
            )
            .build()
            .unwrap();
        let url = client.request_url::<()>("orders.json", None).unwrap();
        let request = client.build_request(Method::GET, url, None).build().unwrap();

        assert!(request.headers().get(ACCESS_TOKEN_HEADER).is_some());
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_unauthenticated_client_sends_no_auth_headers() {
        let client = Client::builder(test_shop()).build().unwrap();
        let url = client.request_url::<()>("orders.json", None).unwrap();
        let request = client.build_request(Method::GET, url, None).build().unwrap();

        assert!(request.headers().get(ACCESS_TOKEN_HEADER).is_none());
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_pin_api_version_only_pins_once() {
        let client = Client::builder(test_shop()).build().unwrap();

        client.pin_api_version("2024-01");
        assert_eq!(
            client.api_version(),
            ApiVersion::Dated("2024-01".to_string())
        );

        client.pin_api_version("2024-04");
        assert_eq!(
            client.api_version(),
            ApiVersion::Dated("2024-01".to_string())
        );
    }

    #[test]
    fn test_pin_api_version_ignores_configured_version() {
        let client = Client::builder(test_shop())
            .api_version("2023-10".parse().unwrap())
            .build()
            .unwrap();

        client.pin_api_version("2024-01");
        assert_eq!(
            client.api_version(),
            ApiVersion::Dated("2023-10".to_string())
        );
    }

    #[test]
    fn test_pin_api_version_ignores_malformed_header() {
        let client = Client::builder(test_shop()).build().unwrap();

        client.pin_api_version("soon");
        assert_eq!(client.api_version(), ApiVersion::Stable);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
