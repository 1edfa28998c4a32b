//! Request parameters.
//!
//! Parameters travel as a JSON object ([`Params`]). [`ListParams`] is a
//! typed builder for the filters every list endpoint understands;
//! [`validate_list_params`] rejects structurally invalid combinations before
//! a request is sent.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::rest::EasyPostError;

/// A parameter bag: a JSON object of request parameters.
pub type Params = Map<String, Value>;

/// Largest `page_size` the API accepts.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Typed filters for list endpoints.
///
/// # Example
///
/// ```rust
/// use easypost_api::rest::ListParams;
/// use serde_json::json;
///
/// let params = ListParams::new()
///     .page_size(20)
///     .before_id("batch_9")
///     .filter("state", "created")
///     .into_params();
///
/// assert_eq!(params["page_size"], json!(20));
/// assert_eq!(params["before_id"], json!("batch_9"));
/// assert_eq!(params["state"], json!("created"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    params: Params,
}

impl ListParams {
    /// Creates an empty set of filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page (1 to 100).
    #[must_use]
    pub fn page_size(self, page_size: u32) -> Self {
        self.filter("page_size", page_size)
    }

    /// Only return items older than this ID.
    #[must_use]
    pub fn before_id(self, id: impl Into<String>) -> Self {
        self.filter("before_id", id.into())
    }

    /// Only return items newer than this ID.
    #[must_use]
    pub fn after_id(self, id: impl Into<String>) -> Self {
        self.filter("after_id", id.into())
    }

    /// Only return items created at or after this instant.
    #[must_use]
    pub fn start_datetime(self, at: DateTime<Utc>) -> Self {
        self.filter("start_datetime", at.to_rfc3339())
    }

    /// Only return items created before this instant.
    #[must_use]
    pub fn end_datetime(self, at: DateTime<Utc>) -> Self {
        self.filter("end_datetime", at.to_rfc3339())
    }

    /// Sets an arbitrary endpoint-specific filter.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Returns the filters as a parameter bag.
    #[must_use]
    pub fn into_params(self) -> Params {
        self.params
    }
}

impl From<ListParams> for Value {
    fn from(params: ListParams) -> Self {
        Self::Object(params.params)
    }
}

/// Checks list filters locally.
///
/// # Errors
///
/// - [`EasyPostError::Filtering`] if both `before_id` and `after_id` are set,
///   or `start_datetime` is after `end_datetime`
/// - [`EasyPostError::InvalidParameter`] if `page_size` is not an integer
///   between 1 and [`MAX_PAGE_SIZE`]
pub fn validate_list_params(params: &Params) -> Result<(), EasyPostError> {
    let is_set = |key: &str| params.get(key).is_some_and(|v| !v.is_null());

    if is_set("before_id") && is_set("after_id") {
        return Err(EasyPostError::filtering(
            "Cannot filter by both before_id and after_id.",
        ));
    }

    if let Some(page_size) = params.get("page_size").filter(|v| !v.is_null()) {
        match page_size.as_u64() {
            Some(n) if (1..=MAX_PAGE_SIZE).contains(&n) => {}
            _ => {
                return Err(EasyPostError::invalid_parameter(format!(
                    "page_size must be an integer between 1 and {MAX_PAGE_SIZE}, got {page_size}"
                )))
            }
        }
    }

    let datetime = |key: &str| {
        params
            .get(key)
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    };
    if let (Some(start), Some(end)) = (datetime("start_datetime"), datetime("end_datetime")) {
        if start > end {
            return Err(EasyPostError::filtering(
                "start_datetime must not be after end_datetime.",
            ));
        }
    }

    Ok(())
}
