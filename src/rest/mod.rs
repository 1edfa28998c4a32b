//! Resource model for the EasyPost API.
//!
//! - **[`ResourceKind`]**: the closed set of known resources, with their
//!   class names, URL segments and ID prefixes
//! - **[`EasyPostObject`]**: a converted response object tagged with the API
//!   key that fetched it; [`convert_to_object`] builds these from JSON
//! - **[`Page`]**: one page of a list response, `Deref` to a slice of objects
//! - **[`ListParams`]**: typed list filters, checked by [`validate_list_params`]
//! - **Paths**: [`class_url`], [`instance_url`], [`build_path`]
//! - **[`lowest_rate`]**: cheapest-rate selection with carrier/service filters
//! - **[`EasyPostError`]**: the error type of every operation
//!
//! # Example
//!
//! ```rust
//! use easypost_api::rest::{convert_to_object, ResourceKind};
//! use serde_json::json;
//!
//! let value = convert_to_object(json!({"id": "evt_1", "description": "batch.updated"}), None, None);
//! let event = value.as_object().unwrap();
//!
//! assert_eq!(event.resource_kind(), Some(ResourceKind::Event));
//! assert_eq!(event.get_str("description"), Some("batch.updated"));
//! ```

mod errors;
mod kind;
mod object;
mod page;
mod params;
mod path;
mod rates;

pub use errors::{ApiError, ApiErrorKind, EasyPostError, FieldError, NO_MORE_PAGES};
pub use kind::ResourceKind;
pub use object::{convert_to_object, EasyPostObject, ObjectKind, ObjectValue};
pub use page::Page;
pub use params::{validate_list_params, ListParams, Params, MAX_PAGE_SIZE};
pub use path::{build_path, class_url, instance_url};
pub use rates::{lowest_rate, lowest_rate_of};
