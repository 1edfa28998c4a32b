//! Batch operations.
//!
//! A batch groups shipments so they can be bought, labelled and manifested
//! together.
//!
//! # Example
//!
//! ```rust,ignore
//! use easypost_api::services::ResourceService;
//! use serde_json::json;
//!
//! let batch = client.batch().create(json!({"shipments": [{"id": "shp_1"}]})).await?;
//! let batch_id = batch.id().unwrap_or_default();
//!
//! let batch = client.batch().buy(batch_id, json!({})).await?;
//! let batch = client.batch().label(batch_id, json!({"file_format": "PDF"})).await?;
//! let batch = client.batch().create_scan_form(batch_id, json!({})).await?;
//! ```

use serde_json::Value;

use crate::clients::{EasyPostClient, HttpMethod};
use crate::config::ApiKey;
use crate::rest::{build_path, class_url, EasyPostError, EasyPostObject, Params, ResourceKind};
use crate::services::base::{into_params, require_id};
use crate::services::ResourceService;

/// Operations on the `/batches` endpoints.
#[derive(Debug, Clone)]
pub struct BatchService<'a> {
    client: &'a EasyPostClient,
    api_key: Option<ApiKey>,
}

impl<'a> BatchService<'a> {
    /// Creates a batch service over `client`.
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

    /// Creates and buys a batch in one call.
    ///
    /// `POST /batches/create_and_buy` with `{"batch": params}`.
    ///
    /// # Errors
    ///
    /// Returns [`EasyPostError::InvalidParameter`] if `params` is not an
    /// object, or any dispatcher error.
    pub async fn create_and_buy(
        &self,
        params: impl Into<Value>,
    ) -> Result<EasyPostObject, EasyPostError> {
        let mut wrapped = Params::new();
        wrapped.insert(
            Self::KIND.snake_name().to_string(),
            Value::Object(into_params(params.into())?),
        );

        let url = format!("{}/create_and_buy", class_url(Self::KIND));
        self.base()
            .request_object(HttpMethod::Post, &url, Some(Value::Object(wrapped)), Self::KIND)
            .await
    }

    /// Buys every shipment in the batch.
    ///
    /// # Errors
    ///
    /// See [`BatchService::create_and_buy`]; also
    /// [`EasyPostError::MissingParameter`] if `id` is empty.
    pub async fn buy(
        &self,
        id: &str,
        params: impl Into<Value>,
    ) -> Result<EasyPostObject, EasyPostError> {
        self.action(id, "buy", params.into()).await
    }

    /// Generates a consolidated label for the batch.
    ///
    /// # Errors
    ///
    /// See [`BatchService::buy`].
    pub async fn label(
        &self,
        id: &str,
        params: impl Into<Value>,
    ) -> Result<EasyPostObject, EasyPostError> {
        self.action(id, "label", params.into()).await
    }

    /// Removes shipments from the batch.
    ///
    /// # Errors
    ///
    /// See [`BatchService::buy`].
    pub async fn remove_shipments(
        &self,
        id: &str,
        params: impl Into<Value>,
    ) -> Result<EasyPostObject, EasyPostError> {
        self.action(id, "remove_shipments", params.into()).await
    }

    /// Adds shipments to the batch.
    ///
    /// # Errors
    ///
    /// See [`BatchService::buy`].
    pub async fn add_shipments(
        &self,
        id: &str,
        params: impl Into<Value>,
    ) -> Result<EasyPostObject, EasyPostError> {
        self.action(id, "add_shipments", params.into()).await
    }

    /// Creates a scan form (manifest) for the batch.
    ///
    /// # Errors
    ///
    /// See [`BatchService::buy`].
    pub async fn create_scan_form(
        &self,
        id: &str,
        params: impl Into<Value>,
    ) -> Result<EasyPostObject, EasyPostError> {
        self.action(id, "scan_form", params.into()).await
    }

    /// `POST /batches/{id}/{action}` with unwrapped params.
    async fn action(
        &self,
        id: &str,
        action: &str,
        params: Value,
    ) -> Result<EasyPostObject, EasyPostError> {
        let id = require_id("id", id)?;
        let params = into_params(params)?;

        let url = build_path(
            &format!("{}/{{id}}/{action}", class_url(Self::KIND)),
            &[("id", id)],
        );
        self.base()
            .request_object(HttpMethod::Post, &url, Some(Value::Object(params)), Self::KIND)
            .await
    }
}

impl ResourceService for BatchService<'_> {
    const KIND: ResourceKind = ResourceKind::Batch;

    fn client(&self) -> &EasyPostClient {
        self.client
    }

    fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> EasyPostClient {
        EasyPostClient::new(ApiKey::new("EZTK_client").unwrap()).unwrap()
    }

    #[test]
    fn test_service_kind() {
        assert_eq!(<BatchService<'_> as ResourceService>::KIND, ResourceKind::Batch);
    }

    #[test]
    fn test_with_api_key_overrides_client_key() {
        let client = client();
        let service = client
            .batch()
            .with_api_key(ApiKey::new("EZTK_override").unwrap());

        let key: &str = service.api_key().unwrap().as_ref();
        assert_eq!(key, "EZTK_override");
        assert!(client.batch().api_key().is_none());
    }

    #[tokio::test]
    async fn test_action_with_empty_id_is_missing_parameter() {
        let client = client();

        let result = client.batch().buy("", json!({})).await;
        assert!(matches!(
            result,
            Err(EasyPostError::MissingParameter { parameter }) if parameter == "id"
        ));
    }

    #[tokio::test]
    async fn test_action_with_non_object_params_is_invalid() {
        let client = client();

        let result = client.batch().label("batch_1", json!([1])).await;
        assert!(matches!(result, Err(EasyPostError::InvalidParameter { .. })));
    }
}
