//! Product resource and endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{ListOptions, Product};
//!
//! // List products
//! let products = client.products().list(None).await?;
//!
//! // Create a product
//! let product = Product {
//!     title: Some("IPod Nano - 8GB".to_string()),
//!     vendor: Some("Apple".to_string()),
//!     ..Default::default()
//! };
//! let created = client.products().create(&product).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Client, Error};
use crate::resources::{CountOptions, ListOptions};

/// The status of a product, determining its visibility to customers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// The product is active and visible.
    #[default]
    Active,
    /// The product is archived and hidden.
    Archived,
    /// The product is a draft and hidden.
    Draft,
}

/// A product in a shop's catalog.
///
/// All fields are optional so the same type serves reads, creates, and
/// partial updates; unset fields are omitted from request bodies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// The unique identifier of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The name of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The HTML description of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The name of the product's vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// A categorization of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// The URL-friendly handle, unique within the shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// The product's status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// When the product was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the product was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the product was published, if it is published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct ProductRoot {
    product: Product,
}

#[derive(Deserialize)]
struct ProductsRoot {
    products: Vec<Product>,
}

#[derive(Serialize)]
struct ProductPayload<'a> {
    product: &'a Product,
}

/// Product endpoints, borrowed from a [`Client`] via
/// [`Client::products`].
#[derive(Clone, Copy, Debug)]
pub struct ProductService<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the product endpoints.
    #[must_use]
    pub const fn products(&self) -> ProductService<'_> {
        ProductService { client: self }
    }
}

impl ProductService<'_> {
    /// Lists products.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Product>, Error> {
        let root: ProductsRoot = self.client.get("products.json", options).await?;
        Ok(root.products)
    }

    /// Fetches a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn get(&self, id: u64, options: Option<&ListOptions>) -> Result<Product, Error> {
        let root: ProductRoot = self
            .client
            .get(&format!("products/{id}.json"), options)
            .await?;
        Ok(root.product)
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn create(&self, product: &Product) -> Result<Product, Error> {
        let root: ProductRoot = self
            .client
            .post("products.json", &ProductPayload { product })
            .await?;
        Ok(root.product)
    }

    /// Updates an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn update(&self, id: u64, product: &Product) -> Result<Product, Error> {
        let root: ProductRoot = self
            .client
            .put(&format!("products/{id}.json"), &ProductPayload { product })
            .await?;
        Ok(root.product)
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.client.delete(&format!("products/{id}.json")).await
    }

    /// Counts products.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<u64, Error> {
        self.client.count("products/count.json", options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_from_envelope() {
        let body = r#"{
            "product": {
                "id": 632910392,
                "title": "IPod Nano - 8GB",
                "vendor": "Apple",
                "product_type": "Cult Products",
                "status": "active",
                "created_at": "2024-01-02T03:04:05Z"
            }
        }"#;

        let root: ProductRoot = serde_json::from_str(body).unwrap();
        assert_eq!(root.product.id, Some(632_910_392));
        assert_eq!(root.product.title.as_deref(), Some("IPod Nano - 8GB"));
        assert_eq!(root.product.status, Some(ProductStatus::Active));
    }

    #[test]
    fn test_payload_omits_unset_fields() {
        let product = Product {
            title: Some("IPod Nano - 8GB".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&ProductPayload { product: &product }).unwrap();
        assert_eq!(json, r#"{"product":{"title":"IPod Nano - 8GB"}}"#);
    }
}
