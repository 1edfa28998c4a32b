//! HTTP transport for EasyPost API communication.
//!
//! [`HttpClient`] owns the connection pool and default headers. It sends one
//! request per call and reports whatever status the server answered with;
//! mapping non-2xx statuses to errors is the dispatcher's job.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::EasyPostConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the EasyPost API.
///
/// The client handles:
/// - Base URL construction from the configured host and API version
/// - Default headers (`User-Agent`, `Accept`)
/// - The transport timeout from [`EasyPostConfig::timeout`]
///
/// Credentials are not part of the client: the `Authorization` header is
/// attached per request, because objects fetched with different keys can
/// share one client.
///
/// # Example
///
/// ```rust,ignore
/// use easypost_api::EasyPostConfig;
/// use easypost_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(&EasyPostConfig::default())?;
/// let request = HttpRequest::builder(HttpMethod::Get, "events").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.easypost.com`).
    base_uri: String,
    /// Base path (e.g., `/v2`).
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying TLS client cannot be
    /// initialized.
    pub fn new(config: &EasyPostConfig) -> Result<Self, HttpError> {
        let base_uri = config.base_url().as_ref().to_string();
        let base_path = format!("/{}", config.api_version());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}EasyPost/{} RustClient/{SDK_VERSION} Rust/{rust_version}",
            config.api_version()
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request path resolves to.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            path.trim_start_matches('/')
        )
    }

    /// Sends an HTTP request and returns the decoded response.
    ///
    /// Any status code is returned as an [`HttpResponse`]; the body is decoded
    /// as JSON, `{}` when empty, or `{"raw_body": "..."}` when it is not JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The request could not be completed (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        for (key, value) in &request.extra_headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, BaseUrl};

    #[test]
    fn test_client_construction_with_defaults() {
        let client = HttpClient::new(&EasyPostConfig::default()).unwrap();

        assert_eq!(client.base_uri(), "https://api.easypost.com");
        assert_eq!(client.base_path(), "/v2");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&EasyPostConfig::default()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("EasyPost/v2 RustClient/"));
        assert!(user_agent.contains("Rust/"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = EasyPostConfig::builder()
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 EasyPost/"));
    }

    #[test]
    fn test_no_authorization_default_header() {
        let client = HttpClient::new(&EasyPostConfig::default()).unwrap();
        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_url_for_relative_and_absolute_paths() {
        let config = EasyPostConfig::builder()
            .base_url(BaseUrl::new("http://localhost:8080").unwrap())
            .api_version(ApiVersion::Beta)
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(client.url_for("/batches"), "http://localhost:8080/beta/batches");
        assert_eq!(client.url_for("batches/b_1"), "http://localhost:8080/beta/batches/b_1");
        assert_eq!(
            client.url_for("https://files.easypost.com/x.pdf"),
            "https://files.easypost.com/x.pdf"
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
