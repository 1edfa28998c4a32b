//! Webhook signature verification.
//!
//! All signature comparisons are constant-time.

use std::collections::HashMap;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use unicode_normalization::UnicodeNormalization;

use crate::rest::{convert_to_object, EasyPostObject, ResourceKind};
use crate::webhooks::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the webhook signature.
pub const HEADER_HMAC_SIGNATURE: &str = "X-Hmac-Signature";

/// Prefix of the signature header value.
pub const SIGNATURE_PREFIX: &str = "hmac-sha256-hex=";

/// Computes the signature header value for a raw body.
///
/// The secret is normalized to Unicode NFKD first, so composed and decomposed
/// spellings of the same secret sign identically.
///
/// # Example
///
/// ```rust
/// use easypost_api::webhooks::{compute_signature, SIGNATURE_PREFIX};
///
/// let signature = compute_signature(b"{}", "secret");
/// assert!(signature.starts_with(SIGNATURE_PREFIX));
/// assert_eq!(signature.len(), SIGNATURE_PREFIX.len() + 64);
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(body: &[u8], secret: &str) -> String {
    let secret: String = secret.nfkd().collect();
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(body);
    format!("{SIGNATURE_PREFIX}{}", hex::encode(mac.finalize().into_bytes()))
}

/// Returns `true` if `signature` is the valid signature of `body`.
#[must_use]
pub fn verify_signature(body: &[u8], signature: &str, secret: &str) -> bool {
    let expected = compute_signature(body, secret);
    expected.as_bytes().ct_eq(signature.trim().as_bytes()).into()
}

/// Validates an incoming webhook and returns its body as an object.
///
/// `headers` is searched case-insensitively for [`HEADER_HMAC_SIGNATURE`].
/// The returned object has no API key attached; a body without an
/// identifiable kind is treated as an Event.
///
/// # Errors
///
/// - [`WebhookError::SignatureVerification`] if the header is missing or
///   does not match
/// - [`WebhookError::InvalidPayload`] if the verified body is not a JSON object
pub fn validate_webhook(
    body: &[u8],
    headers: &HashMap<String, String>,
    secret: &str,
) -> Result<EasyPostObject, WebhookError> {
    let signature = headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(HEADER_HMAC_SIGNATURE))
        .map(|(_, value)| value.as_str())
        .ok_or(WebhookError::SignatureVerification)?;

    if !verify_signature(body, signature, secret) {
        tracing::warn!("Rejected webhook with a mismatched signature");
        return Err(WebhookError::SignatureVerification);
    }

    let value: serde_json::Value = serde_json::from_slice(body)?;
    convert_to_object(value, None, Some(ResourceKind::Event))
        .into_object()
        .ok_or_else(|| {
            WebhookError::InvalidPayload(serde::de::Error::custom(
                "expected a JSON object at the top level",
            ))
        })
}
