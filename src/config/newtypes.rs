//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Shopify shop domain.
///
/// This newtype validates and normalizes shop domains to the full
/// `shop.myshopify.com` format.
///
/// # Accepted Formats
///
/// - `shop-name` - normalized to `shop-name.myshopify.com`
/// - `shop-name.myshopify.com` - used as-is
///
/// Surrounding whitespace and stray leading/trailing dots are stripped
/// before normalization.
///
/// # Serialization
///
/// `ShopDomain` serializes to and deserializes from the full domain string:
///
/// ```rust
/// use shopify_rest::ShopDomain;
///
/// let domain = ShopDomain::new("my-store").unwrap();
/// let json = serde_json::to_string(&domain).unwrap();
/// assert_eq!(json, r#""my-store.myshopify.com""#);
/// ```
///
/// # Example
///
/// ```rust
/// use shopify_rest::ShopDomain;
///
/// // Short format is normalized
/// let domain = ShopDomain::new("my-store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
///
/// // Full format is accepted
/// let domain = ShopDomain::new("my-store.myshopify.com").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    full_domain: String,
    shop_name_end: usize,
}

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the domain is empty
    /// after trimming or contains characters that cannot appear in a
    /// `myshopify.com` host name.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into();
        let trimmed = domain.trim().trim_matches('.').to_lowercase();

        if trimmed.is_empty() {
            return Err(ConfigError::InvalidShopDomain { domain });
        }

        let full_domain = if trimmed.contains("myshopify.com") {
            trimmed
        } else {
            format!("{trimmed}{}", Self::SUFFIX)
        };

        if !full_domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        {
            return Err(ConfigError::InvalidShopDomain {
                domain: full_domain,
            });
        }

        let shop_name_end = full_domain.find(Self::SUFFIX).unwrap_or(full_domain.len());
        Ok(Self {
            full_domain,
            shop_name_end,
        })
    }

    /// Returns the shop name portion of the domain.
    ///
    /// For `my-store.myshopify.com`, this returns `my-store`.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.full_domain[..self.shop_name_end]
    }

    /// Returns the shop's base URL, e.g. `https://my-store.myshopify.com`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://{}", self.full_domain)
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_domain)
    }
}

impl Serialize for ShopDomain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.full_domain)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let domain = String::deserialize(deserializer)?;
        Self::new(domain).map_err(de::Error::custom)
    }
}

/// A validated permanent access token.
///
/// This newtype ensures the token is non-empty and masks its value in
/// debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AccessToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use shopify_rest::AccessToken;
///
/// let token = AccessToken::new("shpat_abc123").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated Shopify API key.
///
/// This newtype ensures the API key is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated app password for HTTP basic authentication.
///
/// This newtype ensures the password is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the password value, displaying only
/// `Password(*****)` instead of the actual password.
///
/// # Example
///
/// ```rust
/// use shopify_rest::Password;
///
/// let password = Password::new("my-password").unwrap();
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new validated app password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_domain_normalizes_short_name() {
        let domain = ShopDomain::new("theshop").unwrap();
        assert_eq!(domain.as_ref(), "theshop.myshopify.com");
        assert_eq!(domain.shop_name(), "theshop");
    }

    #[test]
    fn test_shop_domain_accepts_full_domain() {
        let domain = ShopDomain::new("theshop.myshopify.com").unwrap();
        assert_eq!(domain.as_ref(), "theshop.myshopify.com");
        assert_eq!(domain.shop_name(), "theshop");
    }

    #[test]
    fn test_shop_domain_trims_whitespace_and_dots() {
        let domain = ShopDomain::new(" theshop. ").unwrap();
        assert_eq!(domain.as_ref(), "theshop.myshopify.com");

        let domain = ShopDomain::new(".theshop").unwrap();
        assert_eq!(domain.as_ref(), "theshop.myshopify.com");
    }

    #[test]
    fn test_shop_domain_lowercases_input() {
        let domain = ShopDomain::new("TheShop").unwrap();
        assert_eq!(domain.as_ref(), "theshop.myshopify.com");
    }

    #[test]
    fn test_shop_domain_rejects_empty() {
        assert!(matches!(
            ShopDomain::new(""),
            Err(ConfigError::InvalidShopDomain { .. })
        ));
        assert!(matches!(
            ShopDomain::new(" . "),
            Err(ConfigError::InvalidShopDomain { .. })
        ));
    }

    #[test]
    fn test_shop_domain_rejects_invalid_characters() {
        assert!(matches!(
            ShopDomain::new("the shop"),
            Err(ConfigError::InvalidShopDomain { .. })
        ));
        assert!(matches!(
            ShopDomain::new("theshop/evil"),
            Err(ConfigError::InvalidShopDomain { .. })
        ));
    }

    #[test]
    fn test_shop_domain_base_url() {
        let domain = ShopDomain::new("theshop").unwrap();
        assert_eq!(domain.base_url(), "https://theshop.myshopify.com");
    }

    #[test]
    fn test_shop_domain_serde_round_trip() {
        let domain = ShopDomain::new("my-store").unwrap();
        let json = serde_json::to_string(&domain).unwrap();
        assert_eq!(json, r#""my-store.myshopify.com""#);

        let parsed: ShopDomain = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, domain);
    }

    #[test]
    fn test_access_token_rejects_empty() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_debug_is_masked() {
        let token = AccessToken::new("super-secret").unwrap();
        assert_eq!(format!("{token:?}"), "AccessToken(*****)");
    }

    #[test]
    fn test_api_key_rejects_empty() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_password_rejects_empty() {
        assert!(matches!(Password::new(""), Err(ConfigError::EmptyPassword)));
    }

    #[test]
    fn test_password_debug_is_masked() {
        let password = Password::new("hunter2").unwrap();
        assert_eq!(format!("{password:?}"), "Password(*****)");
    }
}
