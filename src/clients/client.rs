//! The top-level EasyPost client.

use serde_json::Value;

use crate::clients::{HttpClient, HttpMethod, Requestor};
use crate::config::{ApiKey, EasyPostConfig};
use crate::rest::EasyPostError;
use crate::services::{BatchService, EventService};

/// Entry point to the EasyPost API.
///
/// Owns the transport and the configured credential, and hands out
/// resource services that borrow it.
///
/// # Thread Safety
///
/// `EasyPostClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use easypost_api::{ApiKey, EasyPostClient};
/// use serde_json::json;
///
/// let client = EasyPostClient::new(ApiKey::new("EZTK_test")?)?;
///
/// let batch = client.batch().create(json!({"shipments": []})).await?;
/// println!("created {}", batch.id().unwrap_or_default());
///
/// let events = client.event().all(json!({"page_size": 5})).await?;
/// for event in events.iter() {
///     println!("{:?}", event.get_str("description"));
/// }
/// ```
#[derive(Debug)]
pub struct EasyPostClient {
    requestor: Requestor,
    config: EasyPostConfig,
}

// Verify EasyPostClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EasyPostClient>();
};

impl EasyPostClient {
    /// Creates a client bound to `api_key` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`EasyPostError::Http`] if the transport cannot be initialized.
    pub fn new(api_key: ApiKey) -> Result<Self, EasyPostError> {
        let config = EasyPostConfig::builder().api_key(api_key).build()?;
        Self::with_config(config)
    }

    /// Creates a client from a full configuration.
    ///
    /// A configuration without an API key is allowed; calls then fall back
    /// to the process-wide default key.
    ///
    /// # Errors
    ///
    /// Returns [`EasyPostError::Http`] if the transport cannot be initialized.
    pub fn with_config(config: EasyPostConfig) -> Result<Self, EasyPostError> {
        let http_client = HttpClient::new(&config)?;
        let requestor = Requestor::new(http_client, config.api_key().cloned());

        tracing::debug!(
            base_url = config.base_url().as_ref(),
            api_version = %config.api_version(),
            "Created EasyPost client"
        );

        Ok(Self { requestor, config })
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &EasyPostConfig {
        &self.config
    }

    /// Returns the configured API key, if any.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.requestor.api_key()
    }

    /// Returns the request dispatcher.
    #[must_use]
    pub const fn requestor(&self) -> &Requestor {
        &self.requestor
    }

    /// Returns the underlying HTTP transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        self.requestor.http_client()
    }

    /// Sends a raw request; see [`Requestor::request`].
    ///
    /// # Errors
    ///
    /// See [`Requestor::request`].
    pub async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        params: Option<Value>,
        api_key: Option<&ApiKey>,
    ) -> Result<(Value, ApiKey), EasyPostError> {
        self.requestor.request(method, url, params, api_key).await
    }

    /// Batch operations.
    #[must_use]
    pub const fn batch(&self) -> BatchService<'_> {
        BatchService::new(self)
    }

    /// Event operations.
    #[must_use]
    pub const fn event(&self) -> EventService<'_> {
        EventService::new(self)
    }
}
