//! The HTTP client core for Shopify Admin REST API communication.
//!
//! This module provides the request-execution machinery the typed resource
//! services are built on: authenticated request construction, the
//! retry/backoff loop, rate-limit tracking, and normalization of the
//! platform's error payloads.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Client`]: The async client for one shop, with the
//!   `get`/`post`/`put`/`delete`/`count` primitives
//! - [`ClientBuilder`]: Builder for configuring a client
//! - [`Error`]: Unified error type for all client operations
//! - [`ResponseError`] / [`RateLimitError`] / [`ResponseDecodingError`]:
//!   The normalized error shapes
//! - [`RateLimitInfo`]: The advisory rate-limit snapshot
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{AccessToken, Client, Error, ShopDomain};
//!
//! let client = Client::builder(ShopDomain::new("my-store")?)
//!     .access_token(AccessToken::new("shpat_abc123")?)
//!     .retries(3)
//!     .build()?;
//!
//! match client.orders().list(None).await {
//!     Ok(orders) => println!("{} orders", orders.len()),
//!     Err(Error::RateLimit(e)) => println!("throttled for {}s", e.retry_after),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

mod errors;
mod http_client;
mod rate_limit;

pub use errors::{Error, RateLimitError, ResponseDecodingError, ResponseError};
pub use http_client::{Client, ClientBuilder, VERSION};
pub use rate_limit::RateLimitInfo;
