//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction. Invalid values are
//! rejected with a [`ConfigError`].

use crate::error::ConfigError;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated EasyPost API key.
///
/// The key is the credential that authorizes a request. Every object returned
/// by the client remembers the key that fetched it, so follow-up calls made
/// from that object reuse the same key.
///
/// # Security
///
/// The `Debug` implementation masks everything but the last four characters,
/// so keys never end up verbatim in logs.
///
/// # Example
///
/// ```rust
/// use easypost_api::ApiKey;
///
/// let key = ApiKey::new("EZTK_test_key_1234").unwrap();
/// assert_eq!(key.as_ref(), "EZTK_test_key_1234");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****1234)");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }

    /// Returns the value of the `Authorization` header for this key.
    ///
    /// EasyPost uses HTTP Basic auth with the key as the user name and an
    /// empty password.
    #[must_use]
    pub fn basic_auth_header(&self) -> String {
        use base64::Engine as _;

        let encoded = base64::engine::general_purpose::STANDARD.encode(format!("{}:", self.0));
        format!("Basic {encoded}")
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.0.char_indices().rev().nth(3).map_or(0, |(i, _)| i);
        write!(f, "ApiKey(*****{})", &self.0[start..])
    }
}

impl Serialize for ApiKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated base URL for the API host.
///
/// The URL must use the `http` or `https` scheme and carry a host. A trailing
/// `/` is removed so paths can be appended without doubling separators.
///
/// # Example
///
/// ```rust
/// use easypost_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.easypost.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.easypost.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.easypost.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    parsed: Url,
}

impl BaseUrl {
    /// The production EasyPost API host.
    pub const DEFAULT: &'static str = "https://api.easypost.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not parse, is
    /// not `http`/`https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let invalid = || ConfigError::InvalidBaseUrl {
            url: raw.clone(),
        };

        let parsed = Url::parse(raw.trim()).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid());
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(invalid());
        }

        Ok(Self {
            url: parsed.as_str().trim_end_matches('/').to_string(),
            parsed,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.parsed.scheme()
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        self.parsed.host_str().unwrap_or_default()
    }
}

impl Default for BaseUrl {
    #[allow(clippy::missing_panics_doc)] // DEFAULT is a valid URL, so this never panics
    fn default() -> Self {
        Self::new(Self::DEFAULT).expect("default base URL is valid")
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("EZAK_super_secret_abcd").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(*****abcd)");
        assert!(!debug_output.contains("super_secret"));
    }

    #[test]
    fn test_api_key_basic_auth_header() {
        let key = ApiKey::new("test").unwrap();
        // base64("test:")
        assert_eq!(key.basic_auth_header(), "Basic dGVzdDo=");
    }

    #[test]
    fn test_api_key_deserialization_validates() {
        let key: ApiKey = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(key.as_ref(), "abc");
        assert!(serde_json::from_str::<ApiKey>(r#""""#).is_err());
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let url = BaseUrl::new("http://localhost:8080/").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8080");
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("api.easypost.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("://api.easypost.com").is_err());
    }

    #[test]
    fn test_base_url_rejects_malformed_hosts_and_schemes() {
        for url in [
            "https://exa mple.com",
            "ftp://files",
            "https://user@host:notaport",
            "mailto:ops@easypost.com",
        ] {
            assert!(
                matches!(BaseUrl::new(url), Err(ConfigError::InvalidBaseUrl { .. })),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_base_url_keeps_port_and_path() {
        let url = BaseUrl::new("http://127.0.0.1:9000/proxy/").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:9000/proxy");
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_base_url_default_matches_parsed() {
        assert_eq!(BaseUrl::default(), BaseUrl::new(BaseUrl::DEFAULT).unwrap());
    }
}
