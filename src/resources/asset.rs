//! Theme asset resource and endpoints.
//!
//! Assets are not addressed by id: they belong to a theme and are keyed by
//! their path within it (e.g. `templates/index.liquid`), passed as the
//! `asset[key]` query parameter.
//!
//! # Example
//!
//! ```rust,ignore
//! // List a theme's assets (metadata only)
//! let assets = client.assets().list(828155753).await?;
//!
//! // Fetch one asset with its value
//! let asset = client.assets().get(828155753, "templates/index.liquid").await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Client, Error};

/// A file that makes up the theme of a shop.
///
/// Text assets carry their contents in `value`; binary assets carry a
/// base64 `attachment` instead. Listing a theme's assets returns metadata
/// only; fetching a single asset includes its contents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// The path of the asset within the theme, e.g. `templates/index.liquid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The text contents of the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// The base64-encoded binary contents of the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,

    /// The MIME type of the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// The public-facing URL of the asset, if it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,

    /// The size of the asset in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// The id of the theme the asset belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<u64>,

    /// When the asset was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the asset was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct AssetRoot {
    asset: Asset,
}

#[derive(Deserialize)]
struct AssetsRoot {
    assets: Vec<Asset>,
}

#[derive(Serialize)]
struct AssetPayload<'a> {
    asset: &'a Asset,
}

#[derive(Serialize)]
struct AssetKeyOptions<'a> {
    #[serde(rename = "asset[key]")]
    key: &'a str,
    theme_id: u64,
}

/// Theme asset endpoints, borrowed from a [`Client`] via
/// [`Client::assets`].
#[derive(Clone, Copy, Debug)]
pub struct AssetService<'a> {
    client: &'a Client,
}

impl Client {
    /// Returns the theme asset endpoints.
    #[must_use]
    pub const fn assets(&self) -> AssetService<'_> {
        AssetService { client: self }
    }
}

impl AssetService<'_> {
    /// Lists the assets of a theme. Values are not included.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn list(&self, theme_id: u64) -> Result<Vec<Asset>, Error> {
        let root: AssetsRoot = self
            .client
            .get(&format!("themes/{theme_id}/assets.json"), None::<&()>)
            .await?;
        Ok(root.assets)
    }

    /// Fetches a single asset by key, including its contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn get(&self, theme_id: u64, key: &str) -> Result<Asset, Error> {
        let root: AssetRoot = self
            .client
            .get(
                &format!("themes/{theme_id}/assets.json"),
                Some(&AssetKeyOptions { key, theme_id }),
            )
            .await?;
        Ok(root.asset)
    }

    /// Creates or updates an asset. The asset's `key` selects the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn update(&self, theme_id: u64, asset: &Asset) -> Result<Asset, Error> {
        let root: AssetRoot = self
            .client
            .put(
                &format!("themes/{theme_id}/assets.json"),
                &AssetPayload { asset },
            )
            .await?;
        Ok(root.asset)
    }

    /// Deletes an asset by key.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] for transport failures and API error responses.
    pub async fn delete(&self, theme_id: u64, key: &str) -> Result<(), Error> {
        // The key is addressed as a query parameter on the collection path.
        self.client
            .delete(&format!("themes/{theme_id}/assets.json?asset[key]={key}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_decodes_from_envelope() {
        let body = r#"{
            "asset": {
                "key": "templates/index.liquid",
                "value": "<p>Hello world</p>",
                "content_type": "text/x-liquid",
                "size": 19,
                "theme_id": 828155753
            }
        }"#;

        let root: AssetRoot = serde_json::from_str(body).unwrap();
        assert_eq!(root.asset.key.as_deref(), Some("templates/index.liquid"));
        assert_eq!(root.asset.value.as_deref(), Some("<p>Hello world</p>"));
        assert_eq!(root.asset.theme_id, Some(828_155_753));
    }

    #[test]
    fn test_asset_key_options_serialize_bracketed_parameter() {
        let options = AssetKeyOptions {
            key: "templates/index.liquid",
            theme_id: 828_155_753,
        };
        let query = serde_urlencoded::to_string(&options).unwrap();
        assert_eq!(
            query,
            "asset%5Bkey%5D=templates%2Findex.liquid&theme_id=828155753"
        );
    }
}
