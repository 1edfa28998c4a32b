//! HTTP client types for EasyPost API communication.
//!
//! # Overview
//!
//! - [`EasyPostClient`]: entry point; owns the transport and hands out services
//! - [`Requestor`]: request dispatcher (credential resolution, parameter
//!   encoding, status mapping)
//! - [`HttpClient`]: the async transport
//! - [`HttpRequest`] / [`HttpResponse`]: one exchange with the API
//! - [`HttpMethod`]: supported HTTP methods
//!
//! # Example
//!
//! ```rust,ignore
//! use easypost_api::{ApiKey, EasyPostClient, HttpMethod};
//!
//! let client = EasyPostClient::new(ApiKey::new("EZTK_test")?)?;
//!
//! let (body, key_used) = client
//!     .request(HttpMethod::Get, "events", Some(serde_json::json!({"page_size": 5})), None)
//!     .await?;
//! ```
//!
//! # Retries
//!
//! Nothing is retried. Each call is exactly one HTTP exchange; callers that
//! want backoff on [`ApiErrorKind::RateLimited`](crate::rest::ApiErrorKind)
//! implement it themselves.

mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod requestor;

pub use client::EasyPostClient;
pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, REQUEST_ID_HEADER};
pub use requestor::{flatten_params, Requestor};
