//! Configuration types for the client.
//!
//! This module provides the validated value types a [`Client`](crate::Client)
//! is configured with.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ShopDomain`]: A validated, normalized shop domain
//! - [`AccessToken`]: A permanent access token with masked debug output
//! - [`ApiKey`] / [`Password`]: App credentials for HTTP basic authentication
//! - [`ApiVersion`]: The Admin API version to address
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{AccessToken, ApiVersion, ShopDomain};
//!
//! let shop = ShopDomain::new("my-store").unwrap();
//! let token = AccessToken::new("shpat_abc123").unwrap();
//! let version: ApiVersion = "2024-01".parse().unwrap();
//!
//! assert_eq!(shop.base_url(), "https://my-store.myshopify.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ApiKey, Password, ShopDomain};
pub use version::ApiVersion;
