//! Webhook error types.

use thiserror::Error;

/// Error returned when an incoming webhook cannot be accepted.
///
/// # Example
///
/// ```rust
/// use easypost_api::webhooks::WebhookError;
///
/// let error = WebhookError::SignatureVerification;
/// assert_eq!(
///     error.to_string(),
///     "Webhook received did not originate from EasyPost or had a webhook secret mismatch."
/// );
/// ```
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The signature header was missing or did not match the body.
    ///
    /// The message is intentionally generic and does not say which.
    #[error("Webhook received did not originate from EasyPost or had a webhook secret mismatch.")]
    SignatureVerification,

    /// The signature matched but the body is not valid JSON.
    #[error("Webhook body is not valid JSON: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}
