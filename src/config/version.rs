//! EasyPost API version definitions.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// EasyPost API version, used as the first path segment of every request.
///
/// # Example
///
/// ```rust
/// use easypost_api::ApiVersion;
///
/// let version: ApiVersion = "beta".parse().unwrap();
/// assert_eq!(version, ApiVersion::Beta);
/// assert_eq!(ApiVersion::default().to_string(), "v2");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The stable `v2` API.
    #[default]
    V2,
    /// The `beta` API, for endpoints not yet promoted to `v2`.
    Beta,
    /// Any other single path segment.
    Custom(String),
}

impl ApiVersion {
    /// Returns `true` for the stable `v2` API.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::V2)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2 => f.write_str("v2"),
            Self::Beta => f.write_str("beta"),
            Self::Custom(s) => f.write_str(s),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_matches('/').to_lowercase();

        match s.as_str() {
            "v2" => Ok(Self::V2),
            "beta" => Ok(Self::Beta),
            _ if !s.is_empty()
                && s
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') =>
            {
                Ok(Self::Custom(s))
            }
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}
