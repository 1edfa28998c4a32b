//! HTTP response types for the EasyPost client.

use std::collections::HashMap;

/// Header carrying the server-side request identifier.
pub const REQUEST_ID_HEADER: &str = "x-ep-request-uuid";

/// An HTTP response from the EasyPost API.
///
/// Header names are stored lowercase; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body (`{}` when the body was empty).
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the response status code is in the 3xx range.
    #[must_use]
    pub const fn is_redirect(&self) -> bool {
        self.code >= 300 && self.code <= 399
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Ep-Request-Uuid` header value, if present.
    ///
    /// Include this ID when reporting problems to EasyPost support.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header(REQUEST_ID_HEADER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(response.is_ok(), "expected {code} to be ok");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_non_2xx() {
        for code in [199, 301, 400, 404, 422, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok(), "expected {code} not to be ok");
        }
    }

    #[test]
    fn test_is_redirect() {
        assert!(HttpResponse::new(302, HashMap::new(), json!({})).is_redirect());
        assert!(!HttpResponse::new(200, HashMap::new(), json!({})).is_redirect());
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert(
            REQUEST_ID_HEADER.to_string(),
            vec!["5e2b3b5c-1234".to_string()],
        );
        let response = HttpResponse::new(200, headers, json!({}));

        assert_eq!(response.request_id(), Some("5e2b3b5c-1234"));
        assert_eq!(response.header("X-Ep-Request-Uuid"), Some("5e2b3b5c-1234"));
    }

    #[test]
    fn test_missing_header_returns_none() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(response.request_id().is_none());
    }
}
