//! Typed resource services for the Admin REST API.
//!
//! Each service is a thin wrapper over the request primitives on
//! [`Client`](crate::Client), pairing endpoint paths with the platform's
//! singular/plural JSON envelopes (`{"product": {...}}`,
//! `{"products": [...]}`).
//!
//! # Overview
//!
//! Services are borrowed from the client:
//!
//! - [`Client::products`](crate::Client::products) → [`ProductService`]
//! - [`Client::orders`](crate::Client::orders) → [`OrderService`]
//! - [`Client::customers`](crate::Client::customers) → [`CustomerService`]
//! - [`Client::assets`](crate::Client::assets) → [`AssetService`]
//! - [`Client::metafields`](crate::Client::metafields) /
//!   [`Client::owner_metafields`](crate::Client::owner_metafields) →
//!   [`MetafieldService`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::ListOptions;
//!
//! let options = ListOptions {
//!     limit: Some(50),
//!     ..Default::default()
//! };
//! let products = client.products().list(Some(&options)).await?;
//! ```

mod asset;
mod customer;
mod metafield;
mod order;
mod product;

pub use asset::{Asset, AssetService};
pub use customer::{Customer, CustomerService};
pub use metafield::{Metafield, MetafieldService};
pub use order::{LineItem, Order, OrderService};
pub use product::{Product, ProductService, ProductStatus};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// General-purpose query options for list endpoints.
///
/// All fields are optional; unset fields are omitted from the query string.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ListOptions;
///
/// let options = ListOptions {
///     limit: Some(50),
///     since_id: Some(123),
///     ..Default::default()
/// };
/// let query = serde_urlencoded::to_string(&options).unwrap();
/// assert_eq!(query, "limit=50&since_id=123");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    /// Maximum number of results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Only return results after the given resource id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Cursor for page-based navigation, from a previous response's
    /// `Link` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Only return resources created at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Only return resources created at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Only return resources updated at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Only return resources updated at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

/// Query options for count endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CountOptions {
    /// Only count resources created at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Only count resources created at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Only count resources updated at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Only count resources updated at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}
