//! Configuration types for the EasyPost client.
//!
//! # Overview
//!
//! - [`EasyPostConfig`]: all client settings
//! - [`EasyPostConfigBuilder`]: fluent builder for [`EasyPostConfig`]
//! - [`ApiKey`]: validated credential with masked debug output
//! - [`BaseUrl`]: validated API host URL
//! - [`ApiVersion`]: API version path segment
//! - [`set_default_api_key`] / [`default_api_key`]: optional process-wide key
//!
//! # Example
//!
//! ```rust
//! use easypost_api::{EasyPostConfig, ApiKey, ApiVersion};
//! use std::time::Duration;
//!
//! let config = EasyPostConfig::builder()
//!     .api_key(ApiKey::new("EZTK_test").unwrap())
//!     .api_version(ApiVersion::V2)
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(30));
//! ```

mod default_key;
mod newtypes;
mod version;

pub use default_key::{clear_default_api_key, default_api_key, set_default_api_key};
pub use newtypes::{ApiKey, BaseUrl};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Default transport timeout for a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the EasyPost client.
///
/// # Thread Safety
///
/// `EasyPostConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct EasyPostConfig {
    api_key: Option<ApiKey>,
    base_url: BaseUrl,
    api_version: ApiVersion,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl EasyPostConfig {
    /// Creates a new builder for constructing an `EasyPostConfig`.
    #[must_use]
    pub fn builder() -> EasyPostConfigBuilder {
        EasyPostConfigBuilder::new()
    }

    /// Returns the API key bound to this configuration, if any.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the transport timeout applied to each request.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for EasyPostConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: BaseUrl::default(),
            api_version: ApiVersion::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent_prefix: None,
        }
    }
}

// Verify EasyPostConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EasyPostConfig>();
};

/// Builder for constructing [`EasyPostConfig`] instances.
///
/// # Defaults
///
/// - `api_key`: `None` (the process-wide default is consulted per request)
/// - `base_url`: `https://api.easypost.com`
/// - `api_version`: `v2`
/// - `timeout`: 60 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct EasyPostConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl EasyPostConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key used when a call does not supply its own.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the transport timeout for each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`EasyPostConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if a zero timeout was set.
    pub fn build(self) -> Result<EasyPostConfig, ConfigError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(EasyPostConfig {
            api_key: self.api_key,
            base_url: self.base_url.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = EasyPostConfig::builder().build().unwrap();

        assert!(config.api_key().is_none());
        assert_eq!(config.base_url().as_ref(), "https://api.easypost.com");
        assert_eq!(config.api_version(), &ApiVersion::V2);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = EasyPostConfig::builder().timeout(Duration::ZERO).build();
        assert!(matches!(result, Err(ConfigError::InvalidTimeout)));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = EasyPostConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .base_url(BaseUrl::new("http://localhost:9000").unwrap())
            .api_version(ApiVersion::Beta)
            .timeout(Duration::from_secs(5))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.api_key().map(AsRef::as_ref), Some("key"));
        assert_eq!(config.base_url().as_ref(), "http://localhost:9000");
        assert_eq!(config.api_version(), &ApiVersion::Beta);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_default_matches_builder_defaults() {
        let built = EasyPostConfig::builder().build().unwrap();
        let default = EasyPostConfig::default();
        assert_eq!(built.base_url(), default.base_url());
        assert_eq!(built.timeout(), default.timeout());
    }

    #[test]
    fn test_config_debug_masks_key() {
        let config = EasyPostConfig::builder()
            .api_key(ApiKey::new("EZAK_secret_9876").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("EasyPostConfig"));
        assert!(!debug_str.contains("secret"));
    }
}
