//! Transport-level error types.
//!
//! - [`InvalidHttpRequestError`]: a request failed local validation and was never sent
//! - [`HttpError`]: unified transport error, including network failures that
//!   happen before any HTTP status is known
//!
//! Non-2xx responses are not transport errors; the dispatcher turns them into
//! [`ApiError`](crate::rest::ApiError).
//!
//! # Example
//!
//! ```rust,ignore
//! use easypost_api::clients::HttpError;
//!
//! match client.http_client().request(request).await {
//!     Ok(response) => println!("status {}", response.code),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation before being sent.
///
/// # Example
///
/// ```rust
/// use easypost_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "POST".to_string(),
/// };
/// assert_eq!(error.to_string(), "Cannot use POST without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST, PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request carried a body.
    #[error("Cannot send a body with {method}; use query parameters instead.")]
    UnexpectedBody {
        /// The HTTP method that must not carry a body.
        method: String,
    },

    /// The request path was empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,
}

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error; no HTTP status is available.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
