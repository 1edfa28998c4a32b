//! Configuration error types for the EasyPost client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid values are rejected at construction time instead of surfacing as
//! confusing request failures later on.
//!
//! # Example
//!
//! ```rust
//! use easypost_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid EasyPost API key.")]
    EmptyApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://api.easypost.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected 'v2', 'beta', or a custom path segment.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// The transport timeout must be greater than zero.
    #[error("Request timeout must be greater than zero.")]
    InvalidTimeout,
}
