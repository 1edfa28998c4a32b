//! # EasyPost API Rust Client
//!
//! A Rust client for the EasyPost shipping API: typed configuration, an
//! async request dispatcher, dynamic resource objects, cursor pagination,
//! and webhook signature validation.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`EasyPostConfig`] and [`EasyPostConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - [`EasyPostClient`]: one transport shared by every service
//! - [`rest::EasyPostObject`]: response objects tagged with the key that fetched them
//! - [`services::ResourceService`]: `create`, `all`, `retrieve`, `get_next_page`
//! - [`services::BatchService`] and [`services::EventService`]
//! - [`webhooks::validate_webhook`]: HMAC-SHA256 signature check for incoming webhooks
//!
//! ## Quick Start
//!
//! ```rust
//! use easypost_api::{ApiKey, ApiVersion, EasyPostConfig};
//! use std::time::Duration;
//!
//! let config = EasyPostConfig::builder()
//!     .api_key(ApiKey::new("EZTK_your_test_key").unwrap())
//!     .api_version(ApiVersion::V2)
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use easypost_api::{ApiKey, EasyPostClient, EasyPostError};
//! use easypost_api::services::ResourceService;
//! use serde_json::json;
//!
//! let client = EasyPostClient::new(ApiKey::new("EZTK_your_test_key")?)?;
//!
//! // Create a batch
//! let batch = client.batch().create(json!({"shipments": []})).await?;
//!
//! // Walk every page of events
//! let mut page = client.event().all(json!({"page_size": 20})).await?;
//! loop {
//!     for event in page.iter() {
//!         println!("{:?} {:?}", event.id(), event.get_str("description"));
//!     }
//!     match client.event().get_next_page(&page, 20, None).await {
//!         Ok(next) => page = next,
//!         Err(EasyPostError::EndOfPagination) => break,
//!         Err(e) => return Err(e.into()),
//!     }
//! }
//! ```
//!
//! ## Credentials
//!
//! Each call uses, in order: a key set on the service with `with_api_key`,
//! the key the client was built with, or the process-wide default from
//! [`set_default_api_key`]. Objects and pages remember the key that fetched
//! them, and `get_next_page` reuses it.
//!
//! ## Design Principles
//!
//! - **Fail-fast validation**: newtypes and list filters are checked before any request
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **No retries**: each call is exactly one HTTP exchange
//! - **Logging**: `tracing` events only; the crate never installs a subscriber

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod services;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use config::{
    clear_default_api_key, default_api_key, set_default_api_key, ApiKey, ApiVersion, BaseUrl,
    EasyPostConfig, EasyPostConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    EasyPostClient, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError,
};

// Re-export resource types
pub use rest::{
    ApiError, ApiErrorKind, EasyPostError, EasyPostObject, ListParams, ObjectKind, ObjectValue,
    Page, Params, ResourceKind,
};
pub use services::ResourceService;
