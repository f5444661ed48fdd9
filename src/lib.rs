//! # Shopify Admin REST API client
//!
//! An async Rust client for the Shopify Admin REST API, providing
//! authenticated request dispatch, retry/backoff handling, rate-limit
//! tracking, and typed resource endpoints.
//!
//! ## Overview
//!
//! This crate provides:
//! - A per-shop [`Client`] built from validated configuration newtypes
//! - Token and HTTP basic authentication
//! - Automatic retries for rate-limited (429) and unavailable (503)
//!   responses, honoring the server's `Retry-After` hint
//! - Normalization of the platform's heterogeneous JSON error payloads
//!   into a small set of error shapes
//! - Advisory rate-limit telemetry from response headers
//! - Thin typed services for common resources (products, orders,
//!   customers, theme assets, metafields)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shopify_rest::{AccessToken, Client, ListOptions, ShopDomain};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! // One client per shop
//! let client = Client::builder(ShopDomain::new("my-store")?)
//!     .access_token(AccessToken::new("shpat_abc123")?)
//!     .retries(3)
//!     .build()?;
//!
//! // Typed resource services
//! let options = ListOptions {
//!     limit: Some(50),
//!     ..Default::default()
//! };
//! let products = client.products().list(Some(&options)).await?;
//! println!("{} products", products.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Raw Requests
//!
//! The resource services are thin wrappers over the client's request
//! primitives, which are available for endpoints the crate does not model:
//!
//! ```rust,no_run
//! # use shopify_rest::Client;
//! # async fn run(client: Client) -> Result<(), Box<dyn std::error::Error>> {
//! let shop: serde_json::Value = client.get("shop.json", None::<&()>).await?;
//! let theme_count = client.count("themes/count.json", None::<&()>).await?;
//! println!("{} themes at {}", theme_count, shop["shop"]["domain"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Error`]. Responses outside the 2xx range are
//! normalized: a rate-limited response becomes [`Error::RateLimit`] with the
//! server's backoff hint, an error body that is not valid JSON becomes
//! [`Error::Decoding`] with the raw bytes, and everything else becomes
//! [`Error::Response`] carrying the status, the primary message, and the
//! flattened sub-error list. Transport failures ([`Error::Transport`]) are
//! surfaced immediately and never retried.
//!
//! ## API Versions
//!
//! A client built without an explicit [`ApiVersion`] addresses the shop's
//! oldest stable version and pins itself to the concrete version reported
//! by the `X-Shopify-API-Version` header on its first successful call. A
//! configured version is used as-is and never changes.
//!
//! ## Design Principles
//!
//! - **No global state**: all state lives on the client instance
//! - **Fail-fast validation**: configuration newtypes validate on construction
//! - **Thread-safe**: [`Client`] is `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod client;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use client::{
    Client, ClientBuilder, Error, RateLimitError, RateLimitInfo, ResponseDecodingError,
    ResponseError, VERSION,
};
pub use config::{AccessToken, ApiKey, ApiVersion, Password, ShopDomain};
pub use error::ConfigError;
pub use resources::{
    Asset, AssetService, CountOptions, Customer, CustomerService, LineItem, ListOptions, Metafield,
    MetafieldService, Order, OrderService, Product, ProductService, ProductStatus,
};
