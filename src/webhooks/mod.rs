//! Incoming webhook validation.
//!
//! EasyPost signs every webhook delivery with the secret configured on the
//! webhook. The signature travels in the `X-Hmac-Signature` header as
//! `hmac-sha256-hex=<hex digest of the raw body>`.
//!
//! - [`validate_webhook`]: checks the signature and parses the body into an
//!   [`EasyPostObject`](crate::rest::EasyPostObject)
//! - [`compute_signature`] / [`verify_signature`]: the low-level pieces
//! - [`WebhookError`]: why a delivery was rejected
//!
//! # Example
//!
//! ```rust
//! use easypost_api::webhooks::{compute_signature, validate_webhook, HEADER_HMAC_SIGNATURE};
//! use std::collections::HashMap;
//!
//! let body = br#"{"id": "evt_1", "object": "Event", "description": "batch.updated"}"#;
//! let mut headers = HashMap::new();
//! headers.insert(HEADER_HMAC_SIGNATURE.to_string(), compute_signature(body, "s3cr3t"));
//!
//! let event = validate_webhook(body, &headers, "s3cr3t").unwrap();
//! assert_eq!(event.get_str("description"), Some("batch.updated"));
//! ```

mod errors;
mod verification;

pub use errors::WebhookError;
pub use verification::{
    compute_signature, validate_webhook, verify_signature, HEADER_HMAC_SIGNATURE,
    SIGNATURE_PREFIX,
};
