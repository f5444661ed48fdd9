//! Metafield resource and endpoints.
//!
//! Metafields attach structured data either to the shop itself or to an
//! owner resource (product, order, customer, ...). Owner-scoped metafields
//! live under a nested path, e.g. `products/632910392/metafields`.
//!
//! # Example
//!
//! ```rust,ignore
//! // Shop-level metafields
//! let metafields = client.metafields().list(None).await?;
//!
//! // Metafields of a product
//! let metafields = client
//!     .owner_metafields("products", 632910392)
//!     .list(None)
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Client, Error};
use crate::resources::{CountOptions, ListOptions};

/// A piece of structured metadata attached to a shop or a resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metafield {
    /// The unique identifier of the metafield.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The container the metafield is grouped under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// The name of the metafield, unique within its namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The data stored in the metafield.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,

    /// The metafield's type, e.g. `single_line_text_field`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    /// A description of the information the metafield contains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The id of the resource the metafield is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,

    /// The kind of resource the metafield is attached to, e.g. `product`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_resource: Option<String>,

    /// When the metafield was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the metafield was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct MetafieldRoot {
    metafield: Metafield,
}

#[derive(Deserialize)]
struct MetafieldsRoot {
    metafields: Vec<Metafield>,
}

#[derive(Serialize)]
struct MetafieldPayload<'a> {
    metafield: &'a Metafield,
}

/// Builds the path prefix for metafields of the given owner, or the
/// shop-level prefix when there is none.
fn metafield_path_prefix(owner: Option<(&str, u64)>) -> String {
    match owner {
        Some((resource, owner_id)) => format!("{resource}/{owner_id}/metafields"),
        None => "metafields".to_string(),
    }
}

/// Metafield endpoints, borrowed from a [`Client`] via
/// [`Client::metafields`] or [`Client::owner_metafields`].
#[derive(Clone, Debug)]
pub struct MetafieldService<'a> {
    client: &'a Client,
    prefix: String,
}

impl Client {
    /// Returns the shop-level metafield endpoints.
    #[must_use]
    pub fn metafields(&self) -> MetafieldService<'_> {
        MetafieldService {
            client: self,
            prefix: metafield_path_prefix(None),
        }
    }

    /// Returns the metafield endpoints of an owner resource, e.g.
    /// `("products", 632910392)`.
    #[must_use]
    pub fn owner_metafields(&self, resource: &str, owner_id: u64) -> MetafieldService<'_> {
        MetafieldService {
            client: self,
            prefix: metafield_path_prefix(Some((resource, owner_id))),
        }
    }
}

impl MetafieldService<'_> {
    /// Lists metafields.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Metafield>, Error> {
        let root: MetafieldsRoot = self
            .client
            .get(&format!("{}.json", self.prefix), options)
            .await?;
        Ok(root.metafields)
    }

    /// Fetches a single metafield by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn get(&self, id: u64) -> Result<Metafield, Error> {
        let root: MetafieldRoot = self
            .client
            .get(&format!("{}/{id}.json", self.prefix), None::<&()>)
            .await?;
        Ok(root.metafield)
    }

    /// Creates a metafield.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn create(&self, metafield: &Metafield) -> Result<Metafield, Error> {
        let root: MetafieldRoot = self
            .client
            .post(
                &format!("{}.json", self.prefix),
                &MetafieldPayload { metafield },
            )
            .await?;
        Ok(root.metafield)
    }

    /// Updates an existing metafield.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn update(&self, id: u64, metafield: &Metafield) -> Result<Metafield, Error> {
        let root: MetafieldRoot = self
            .client
            .put(
                &format!("{}/{id}.json", self.prefix),
                &MetafieldPayload { metafield },
            )
            .await?;
        Ok(root.metafield)
    }

    /// Deletes a metafield.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.client
            .delete(&format!("{}/{id}.json", self.prefix))
            .await
    }

    /// Counts metafields.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<u64, Error> {
        self.client
            .count(&format!("{}/count.json", self.prefix), options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metafield_path_prefix_for_shop() {
        assert_eq!(metafield_path_prefix(None), "metafields");
    }

    #[test]
    fn test_metafield_path_prefix_for_owner_resource() {
        assert_eq!(
            metafield_path_prefix(Some(("products", 632_910_392))),
            "products/632910392/metafields"
        );
    }

    #[test]
    fn test_metafield_decodes_type_field() {
        let body = r#"{
            "metafield": {
                "id": 721389482,
                "namespace": "affiliates",
                "key": "app_key",
                "value": "app_key",
                "type": "single_line_text_field",
                "owner_resource": "shop"
            }
        }"#;

        let root: MetafieldRoot = serde_json::from_str(body).unwrap();
        assert_eq!(root.metafield.id, Some(721_389_482));
        assert_eq!(
            root.metafield.value_type.as_deref(),
            Some("single_line_text_field")
        );
        assert_eq!(root.metafield.value, Some(serde_json::json!("app_key")));
    }
}
