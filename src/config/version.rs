//! Shopify API version handling.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Admin API a client addresses, including the `stable` sentinel used
//! before a client has pinned itself to a dated version.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Shopify Admin API version.
///
/// Shopify releases dated API versions quarterly (`YYYY-MM`). A client that
/// is not configured with a dated version starts out on the `Stable`
/// sentinel, which addresses the oldest stable version the shop supports;
/// the concrete version is learned from the `X-Shopify-API-Version` response
/// header on the first successful call.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiVersion;
///
/// // Parse from string
/// let version: ApiVersion = "2024-01".parse().unwrap();
/// assert_eq!(version, ApiVersion::Dated("2024-01".to_string()));
///
/// // Display as string
/// assert_eq!(version.to_string(), "2024-01");
///
/// // The default is the unpinned sentinel
/// assert_eq!(ApiVersion::default(), ApiVersion::Stable);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The oldest stable version; a sentinel meaning "not yet pinned".
    #[default]
    Stable,
    /// The unstable version, for accessing pre-release API features.
    Unstable,
    /// A dated version in `YYYY-MM` format (e.g. `2024-01`).
    Dated(String),
}

impl ApiVersion {
    /// Returns `true` if this is the `Stable` sentinel, i.e. the client has
    /// neither been configured with nor pinned to a concrete version.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Stable)
    }

    /// Returns the admin path prefix requests are resolved under.
    ///
    /// The `Stable` sentinel addresses the bare `admin` prefix; dated and
    /// unstable versions address `admin/api/<version>`.
    #[must_use]
    pub fn path_prefix(&self) -> String {
        match self {
            Self::Stable => "admin".to_string(),
            other => format!("admin/api/{other}"),
        }
    }

    /// Checks the `YYYY-MM` shape of a dated version string.
    fn is_valid_dated(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == 7
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[4] == b'-'
            && bytes[5..].iter().all(u8::is_ascii_digit)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => f.write_str("stable"),
            Self::Unstable => f.write_str("unstable"),
            Self::Dated(version) => f.write_str(version),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stable" => Ok(Self::Stable),
            "unstable" => Ok(Self::Unstable),
            dated if Self::is_valid_dated(dated) => Ok(Self::Dated(dated.to_string())),
            other => Err(ConfigError::InvalidApiVersion {
                version: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dated_version() {
        let version: ApiVersion = "2024-01".parse().unwrap();
        assert_eq!(version, ApiVersion::Dated("2024-01".to_string()));
    }

    #[test]
    fn test_parse_sentinels() {
        assert_eq!("stable".parse::<ApiVersion>().unwrap(), ApiVersion::Stable);
        assert_eq!(
            "unstable".parse::<ApiVersion>().unwrap(),
            ApiVersion::Unstable
        );
    }

    #[test]
    fn test_parse_rejects_malformed_versions() {
        for input in ["24-01", "2024-1", "2024/01", "2024-011", "latest", ""] {
            assert!(
                matches!(
                    input.parse::<ApiVersion>(),
                    Err(ConfigError::InvalidApiVersion { .. })
                ),
                "expected '{input}' to be rejected"
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        for input in ["stable", "unstable", "2023-10"] {
            let version: ApiVersion = input.parse().unwrap();
            assert_eq!(version.to_string(), input);
        }
    }

    #[test]
    fn test_default_is_stable_sentinel() {
        assert!(ApiVersion::default().is_stable());
    }

    #[test]
    fn test_path_prefix() {
        assert_eq!(ApiVersion::Stable.path_prefix(), "admin");
        assert_eq!(ApiVersion::Unstable.path_prefix(), "admin/api/unstable");
        assert_eq!(
            ApiVersion::Dated("2024-01".to_string()).path_prefix(),
            "admin/api/2024-01"
        );
    }
}
