//! Error taxonomy for resource operations.
//!
//! Every public operation returns [`EasyPostError`]. Branch on the variant,
//! never on message text:
//!
//! - [`EasyPostError::Http`]: transport failure before any status was known
//! - [`EasyPostError::Api`]: the server answered with a non-2xx status; the
//!   [`ApiError::kind`] field categorizes it by status
//! - [`EasyPostError::EndOfPagination`]: `get_next_page` was called on the last page
//! - [`EasyPostError::InvalidParameter`] / [`EasyPostError::MissingParameter`]:
//!   arguments rejected locally, before any network call
//! - [`EasyPostError::Filtering`]: a filter combination is structurally invalid
//!
//! # Example
//!
//! ```rust,ignore
//! use easypost_api::rest::{ApiErrorKind, EasyPostError};
//!
//! loop {
//!     match client.batch().get_next_page(&page, 20, None).await {
//!         Ok(next) => page = next,
//!         Err(EasyPostError::EndOfPagination) => break,
//!         Err(EasyPostError::Api(e)) if e.kind == ApiErrorKind::RateLimited => { /* back off */ }
//!         Err(e) => return Err(e),
//!     }
//! }
//! ```

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::clients::{HttpError, HttpResponse, InvalidHttpRequestError};
use crate::error::ConfigError;

/// Message carried by [`EasyPostError::EndOfPagination`].
pub const NO_MORE_PAGES: &str = "There are no more pages to retrieve.";

/// Category of an API error, derived from the HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 3xx: the API does not redirect clients; treated as an error.
    Redirect,
    /// 400: the request was malformed.
    BadRequest,
    /// 401 or 403: the credential is missing, wrong, or lacks permission.
    Unauthorized,
    /// 402: the account has insufficient funds.
    PaymentRequired,
    /// 404: the resource does not exist.
    NotFound,
    /// 405: the method is not allowed on this endpoint.
    MethodNotAllowed,
    /// 408 or 504: the server or an upstream carrier timed out.
    Timeout,
    /// 422: the request failed validation.
    InvalidRequest,
    /// 429: too many requests.
    RateLimited,
    /// 503: the service is temporarily unavailable.
    ServiceUnavailable,
    /// Any other 5xx.
    ServerError,
    /// A status with no known category.
    Unknown,
}

impl ApiErrorKind {
    /// Maps an HTTP status code to its category.
    ///
    /// # Example
    ///
    /// ```rust
    /// use easypost_api::rest::ApiErrorKind;
    ///
    /// assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::NotFound);
    /// assert_eq!(ApiErrorKind::from_status(403), ApiErrorKind::Unauthorized);
    /// assert_eq!(ApiErrorKind::from_status(502), ApiErrorKind::ServerError);
    /// ```
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            300..=399 => Self::Redirect,
            400 => Self::BadRequest,
            401 | 403 => Self::Unauthorized,
            402 => Self::PaymentRequired,
            404 => Self::NotFound,
            405 => Self::MethodNotAllowed,
            408 | 504 => Self::Timeout,
            422 => Self::InvalidRequest,
            429 => Self::RateLimited,
            503 => Self::ServiceUnavailable,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Returns `true` for categories caused by the request itself (4xx).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::BadRequest
                | Self::Unauthorized
                | Self::PaymentRequired
                | Self::NotFound
                | Self::MethodNotAllowed
                | Self::InvalidRequest
                | Self::RateLimited
        )
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Redirect => "Redirect",
            Self::BadRequest => "Bad request",
            Self::Unauthorized => "Unauthorized",
            Self::PaymentRequired => "Payment required",
            Self::NotFound => "Not found",
            Self::MethodNotAllowed => "Method not allowed",
            Self::Timeout => "Timeout",
            Self::InvalidRequest => "Invalid request",
            Self::RateLimited => "Rate limited",
            Self::ServiceUnavailable => "Service unavailable",
            Self::ServerError => "Server error",
            Self::Unknown => "Unknown API error",
        };
        f.write_str(name)
    }
}

/// A single field-level problem reported by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field, if the server named one.
    pub field: Option<String>,
    /// Human-readable description.
    pub message: String,
    /// Suggested replacement value, when offered.
    pub suggestion: Option<String>,
}

/// The server answered with a non-2xx status.
///
/// EasyPost error bodies look like:
///
/// ```json
/// {
///   "error": {
///     "code": "PARAMETER.REQUIRED",
///     "message": "Missing required parameter.",
///     "errors": [{"field": "batch.shipments", "message": "cannot be blank"}]
///   }
/// }
/// ```
///
/// `message` may also arrive as a list or a nested object; it is flattened
/// into one comma-separated string.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{kind} ({status}): {message}")]
pub struct ApiError {
    /// Category derived from `status`.
    pub kind: ApiErrorKind,
    /// The HTTP status code.
    pub status: u16,
    /// The server's machine-readable error code, if any.
    pub code: Option<String>,
    /// Flattened human-readable message.
    pub message: String,
    /// Field-level errors.
    pub errors: Vec<FieldError>,
    /// The `X-Ep-Request-Uuid` header value, for support requests.
    pub request_id: Option<String>,
    /// The raw error body as returned by the server.
    pub body: Value,
}

impl ApiError {
    /// Builds an `ApiError` from a non-2xx response.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        let error = response.body.get("error");

        let code = error
            .and_then(|e| e.get("code"))
            .and_then(Value::as_str)
            .map(ToString::to_string);

        let message = error
            .and_then(|e| e.get("message"))
            .map(flatten_message)
            .filter(|m| !m.is_empty())
            .or_else(|| error.and_then(Value::as_str).map(ToString::to_string))
            .or_else(|| {
                response
                    .body
                    .get("raw_body")
                    .and_then(Value::as_str)
                    .map(ToString::to_string)
            })
            .unwrap_or_else(|| format!("API request failed with status {}", response.code));

        let errors = error
            .and_then(|e| e.get("errors"))
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(parse_field_error).collect())
            .unwrap_or_default();

        Self {
            kind: ApiErrorKind::from_status(response.code),
            status: response.code,
            code,
            message,
            errors,
            request_id: response.request_id().map(ToString::to_string),
            body: response.body.clone(),
        }
    }
}

fn flatten_message(value: &Value) -> String {
    fn collect(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::String(s) => out.push(s.clone()),
            Value::Array(items) => items.iter().for_each(|item| collect(item, out)),
            Value::Object(map) => map.values().for_each(|item| collect(item, out)),
            Value::Null => {}
            other => out.push(other.to_string()),
        }
    }

    let mut parts = Vec::new();
    collect(value, &mut parts);
    parts.join(", ")
}

fn parse_field_error(value: &Value) -> Option<FieldError> {
    match value {
        Value::Object(map) => Some(FieldError {
            field: map.get("field").and_then(Value::as_str).map(ToString::to_string),
            message: map.get("message").map(flatten_message).unwrap_or_default(),
            suggestion: map
                .get("suggestion")
                .and_then(Value::as_str)
                .map(ToString::to_string),
        }),
        Value::String(s) => Some(FieldError {
            field: None,
            message: s.clone(),
            suggestion: None,
        }),
        _ => None,
    }
}

/// Error type for every client operation.
#[derive(Debug, Error)]
pub enum EasyPostError {
    /// Transport failure, or a request that failed local validation.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The previous page reported no further results.
    ///
    /// This is the normal end of a pagination loop, not a failure.
    #[error("{}", NO_MORE_PAGES)]
    EndOfPagination,

    /// An argument was present but malformed.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// What was wrong with it.
        message: String,
    },

    /// A required argument was absent.
    #[error("Missing required parameter: {parameter}")]
    MissingParameter {
        /// The name of the missing parameter.
        parameter: String,
    },

    /// A filter or filter combination cannot be applied.
    #[error("{message}")]
    Filtering {
        /// What was wrong with the filters.
        message: String,
    },

    /// A successful response did not have the expected shape.
    #[error("Unexpected response shape: {message}")]
    InvalidObject {
        /// What was expected.
        message: String,
    },

    /// Client configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EasyPostError {
    /// Shorthand for [`EasyPostError::InvalidParameter`].
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Shorthand for [`EasyPostError::MissingParameter`].
    pub fn missing_parameter(parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            parameter: parameter.into(),
        }
    }

    /// Shorthand for [`EasyPostError::Filtering`].
    pub fn filtering(message: impl Into<String>) -> Self {
        Self::Filtering {
            message: message.into(),
        }
    }

    /// Returns `true` if this is the end-of-pagination signal.
    #[must_use]
    pub const fn is_end_of_pagination(&self) -> bool {
        matches!(self, Self::EndOfPagination)
    }

    /// Returns `true` if the server reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.api_error()
            .is_some_and(|e| e.kind == ApiErrorKind::NotFound)
    }

    /// Returns the API error, if this is one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the server request ID, if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.api_error().and_then(|e| e.request_id.as_deref())
    }
}

impl From<InvalidHttpRequestError> for EasyPostError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

// Verify EasyPostError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EasyPostError>();
};
