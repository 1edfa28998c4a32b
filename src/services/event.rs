//! Event operations.
//!
//! Events record changes to other resources. Each delivery of an event to a
//! webhook is kept as a payload.

use serde_json::Value;

use crate::clients::{EasyPostClient, HttpMethod};
use crate::config::ApiKey;
use crate::rest::{build_path, EasyPostError, EasyPostObject, Page, ResourceKind};
use crate::services::base::{into_params, require_id};
use crate::services::ResourceService;

const PAYLOADS_PATH: &str = "/events/{event_id}/payloads";
const PAYLOAD_PATH: &str = "/events/{event_id}/payloads/{payload_id}";

/// Operations on the `/events` endpoints.
///
/// # Example
///
/// ```rust,ignore
/// use easypost_api::services::ResourceService;
/// use serde_json::json;
///
/// let events = client.event().all(json!({"page_size": 5})).await?;
/// if let Some(event) = events.first() {
///     let payloads = client
///         .event()
///         .retrieve_all_payloads(event.id().unwrap_or_default(), json!({}))
///         .await?;
///     println!("{} deliveries", payloads.len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct EventService<'a> {
    client: &'a EasyPostClient,
    api_key: Option<ApiKey>,
}

impl<'a> EventService<'a> {
    /// Creates an event service over `client`.
    #[must_use]
    pub const fn new(client: &'a EasyPostClient) -> Self {
        Self {
            client,
            api_key: None,
        }
    }

    /// Uses `api_key` instead of the client's key for every call.
    #[must_use]
    pub fn with_api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Lists the webhook deliveries of an event.
    ///
    /// `GET /events/{event_id}/payloads`.
    ///
    /// # Errors
    ///
    /// - [`EasyPostError::MissingParameter`] if `event_id` is empty
    /// - [`EasyPostError::InvalidObject`] if the response lacks `payloads`
    /// - any dispatcher error
    pub async fn retrieve_all_payloads(
        &self,
        event_id: &str,
        params: impl Into<Value>,
    ) -> Result<Page, EasyPostError> {
        let event_id = require_id("event_id", event_id)?;
        let params = into_params(params.into())?;

        let url = build_path(PAYLOADS_PATH, &[("event_id", event_id)]);
        let kind = ResourceKind::Payload;
        self.base()
            .request_page(kind, kind.plural(), &url, params, self.api_key())
            .await
    }

    /// Retrieves one webhook delivery of an event.
    ///
    /// `GET /events/{event_id}/payloads/{payload_id}`.
    ///
    /// # Errors
    ///
    /// - [`EasyPostError::MissingParameter`] if either ID is empty
    /// - any dispatcher error
    pub async fn retrieve_payload(
        &self,
        event_id: &str,
        payload_id: &str,
    ) -> Result<EasyPostObject, EasyPostError> {
        let event_id = require_id("event_id", event_id)?;
        let payload_id = require_id("payload_id", payload_id)?;

        let url = build_path(
            PAYLOAD_PATH,
            &[("event_id", event_id), ("payload_id", payload_id)],
        );
        self.base()
            .request_object(HttpMethod::Get, &url, None, ResourceKind::Payload)
            .await
    }
}

impl ResourceService for EventService<'_> {
    const KIND: ResourceKind = ResourceKind::Event;

    fn client(&self) -> &EasyPostClient {
        self.client
    }

    fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }
}
