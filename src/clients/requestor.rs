//! Request dispatcher.
//!
//! [`Requestor`] turns `(method, url, params, credential)` into one HTTP
//! exchange. It resolves the credential, encodes parameters for the method,
//! and maps non-2xx statuses onto [`ApiError`].

use serde_json::{Map, Value};

use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::config::{default_api_key, ApiKey};
use crate::rest::{ApiError, EasyPostError};

/// Dispatches authenticated requests to the EasyPost API.
///
/// The credential for each call is chosen in this order:
///
/// 1. the key passed to [`Requestor::request`]
/// 2. the key the client was configured with
/// 3. the process-wide default from [`set_default_api_key`](crate::set_default_api_key)
///
/// If none is available the call fails with
/// [`EasyPostError::MissingParameter`] before anything is sent.
#[derive(Debug)]
pub struct Requestor {
    http_client: HttpClient,
    api_key: Option<ApiKey>,
}

// Verify Requestor is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Requestor>();
};

impl Requestor {
    /// Creates a dispatcher over the given transport.
    #[must_use]
    pub const fn new(http_client: HttpClient, api_key: Option<ApiKey>) -> Self {
        Self {
            http_client,
            api_key,
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the key bound at construction, if any.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Resolves the credential for a call without sending anything.
    ///
    /// # Errors
    ///
    /// Returns [`EasyPostError::MissingParameter`] naming `api_key` when no
    /// credential is available.
    pub fn resolve_api_key(&self, explicit: Option<&ApiKey>) -> Result<ApiKey, EasyPostError> {
        if let Some(key) = explicit.or(self.api_key.as_ref()) {
            return Ok(key.clone());
        }

        let key = default_api_key().ok_or_else(|| EasyPostError::missing_parameter("api_key"))?;
        tracing::warn!("No API key supplied; falling back to the process-wide default key");
        Ok(key)
    }

    /// Sends one request and returns the decoded body with the credential used.
    ///
    /// For `GET` and `DELETE`, `params` is flattened into query pairs:
    /// nested objects become `parent[child]`, arrays become `parent[0]`, and
    /// `null` values are dropped. For `POST`, `PUT` and `PATCH`, `params` is
    /// sent as the JSON body (`{}` when absent).
    ///
    /// # Errors
    ///
    /// - [`EasyPostError::MissingParameter`] if no credential is available
    /// - [`EasyPostError::InvalidParameter`] if `params` is not a JSON object
    /// - [`EasyPostError::Http`] on transport failure
    /// - [`EasyPostError::Api`] on any non-2xx status
    pub async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        params: Option<Value>,
        api_key: Option<&ApiKey>,
    ) -> Result<(Value, ApiKey), EasyPostError> {
        let api_key = self.resolve_api_key(api_key)?;

        let params = match params {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(EasyPostError::invalid_parameter(format!(
                    "request parameters must be a JSON object, got {other}"
                )))
            }
        };

        let builder = HttpRequest::builder(method, url)
            .header("Authorization", api_key.basic_auth_header());
        let builder = if method.uses_query_params() {
            builder.query(flatten_params(&params))
        } else {
            builder.body(Value::Object(params))
        };
        let request = builder.build()?;

        tracing::debug!(method = %method, path = %url, "Sending EasyPost API request");

        let response = self.http_client.request(request).await?;

        tracing::debug!(
            status = response.code,
            request_id = response.request_id().unwrap_or("-"),
            "Received EasyPost API response"
        );

        if response.is_redirect() {
            tracing::warn!(
                status = response.code,
                location = response.header("location").unwrap_or("-"),
                "EasyPost API answered with a redirect"
            );
        }

        if !response.is_ok() {
            return Err(ApiError::from_response(&response).into());
        }

        Ok((response.body, api_key))
    }
}

/// Flattens a parameter map into ordered query pairs.
///
/// ```rust
/// use easypost_api::clients::flatten_params;
/// use serde_json::json;
///
/// let params = json!({"page_size": 5, "options": {"tags": ["a", "b"]}, "skip": null});
/// let pairs = flatten_params(params.as_object().unwrap());
///
/// assert!(pairs.contains(&("page_size".to_string(), "5".to_string())));
/// assert!(pairs.contains(&("options[tags][0]".to_string(), "a".to_string())));
/// assert!(pairs.iter().all(|(k, _)| k != "skip"));
/// ```
#[must_use]
pub fn flatten_params(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten_value(key, value, &mut pairs);
    }
    pairs
}

fn flatten_value(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push((prefix.to_string(), s.clone())),
        Value::Number(n) => out.push((prefix.to_string(), n.to_string())),
        Value::Bool(b) => out.push((prefix.to_string(), b.to_string())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_value(&format!("{prefix}[{index}]"), item, out);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten_value(&format!("{prefix}[{key}]"), item, out);
            }
        }
    }
}
