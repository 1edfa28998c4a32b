//! Generic resource operations shared by every service.
//!
//! [`BaseService`] implements `create`, `all`, `retrieve` and `get_next_page`
//! for any [`ResourceKind`]. [`ResourceService`] exposes them as default
//! trait methods, so a concrete service only names its kind.
//!
//! # Implementing a Service
//!
//! ```rust,ignore
//! use easypost_api::services::ResourceService;
//! use easypost_api::rest::ResourceKind;
//! use easypost_api::{ApiKey, EasyPostClient};
//!
//! pub struct TrackerService<'a> {
//!     client: &'a EasyPostClient,
//!     api_key: Option<ApiKey>,
//! }
//!
//! impl ResourceService for TrackerService<'_> {
//!     const KIND: ResourceKind = ResourceKind::Tracker;
//!
//!     fn client(&self) -> &EasyPostClient {
//!         self.client
//!     }
//!
//!     fn api_key(&self) -> Option<&ApiKey> {
//!         self.api_key.as_ref()
//!     }
//! }
//!
//! // Usage:
//! let tracker = service.retrieve("trk_123").await?;
//! let page = service.all(json!({"page_size": 10})).await?;
//! ```

use serde_json::Value;

use crate::clients::{EasyPostClient, HttpMethod};
use crate::config::ApiKey;
use crate::rest::{
    class_url, convert_to_object, instance_url, validate_list_params, EasyPostError,
    EasyPostObject, Page, Params, ResourceKind,
};

/// Generic resource operations bound to a client and an optional key.
#[derive(Debug, Clone, Copy)]
pub struct BaseService<'a> {
    client: &'a EasyPostClient,
    api_key: Option<&'a ApiKey>,
}

impl<'a> BaseService<'a> {
    /// Creates a base service. `api_key` overrides the client's key.
    #[must_use]
    pub const fn new(client: &'a EasyPostClient, api_key: Option<&'a ApiKey>) -> Self {
        Self { client, api_key }
    }

    /// Creates a resource: `POST /{plural}` with `{snake_name: params}`.
    ///
    /// # Errors
    ///
    /// - [`EasyPostError::InvalidParameter`] if `params` is not a JSON object
    /// - [`EasyPostError::InvalidObject`] if the response is not an object
    /// - any dispatcher error
    pub async fn create(
        &self,
        kind: ResourceKind,
        params: Value,
    ) -> Result<EasyPostObject, EasyPostError> {
        let params = into_params(params)?;

        let mut wrapped = Params::new();
        wrapped.insert(kind.snake_name().to_string(), Value::Object(params));

        self.request_object(
            HttpMethod::Post,
            &class_url(kind),
            Some(Value::Object(wrapped)),
            kind,
        )
        .await
    }

    /// Lists resources: `GET /{plural}` with `params` as query.
    ///
    /// # Errors
    ///
    /// - [`EasyPostError::Filtering`] / [`EasyPostError::InvalidParameter`]
    ///   if the filters fail local validation
    /// - [`EasyPostError::InvalidObject`] if the response lacks the list
    /// - any dispatcher error
    pub async fn all(&self, kind: ResourceKind, params: Value) -> Result<Page, EasyPostError> {
        let params = into_params(params)?;
        validate_list_params(&params)?;

        self.request_page(kind, kind.plural(), &class_url(kind), params, self.api_key)
            .await
    }

    /// Retrieves one resource: `GET /{plural}/{id}`.
    ///
    /// # Errors
    ///
    /// - [`EasyPostError::MissingParameter`] if `id` is empty
    /// - [`EasyPostError::Api`] with kind `NotFound` if the ID does not exist
    /// - any other dispatcher error
    pub async fn retrieve(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> Result<EasyPostObject, EasyPostError> {
        let id = require_id("id", id)?;
        self.request_object(HttpMethod::Get, &instance_url(kind, id), None, kind)
            .await
    }

    /// Fetches the page after `page`.
    ///
    /// The request reuses the filters `page` was fetched with, sets
    /// `before_id` to the ID of its last item and `page_size` to
    /// `page_size`, then applies `optional_params` on top, so a key in
    /// `optional_params` overrides both. The page's own API key is used.
    ///
    /// # Errors
    ///
    /// - [`EasyPostError::EndOfPagination`] without any request if `page` is
    ///   empty, reports `has_more: false`, or its last item has no ID
    /// - [`EasyPostError::InvalidParameter`] if `page` holds another kind and
    ///   is not the last page
    /// - any error from [`BaseService::all`]
    pub async fn get_next_page(
        &self,
        kind: ResourceKind,
        page: &Page,
        page_size: u32,
        optional_params: Option<Params>,
    ) -> Result<Page, EasyPostError> {
        if page.is_empty() || !page.has_more() {
            return Err(EasyPostError::EndOfPagination);
        }

        if page.kind() != kind {
            return Err(EasyPostError::invalid_parameter(format!(
                "cannot page {} with a {kind} service",
                page.kind()
            )));
        }
        let last_id = page.last_id().ok_or(EasyPostError::EndOfPagination)?;

        let mut params = page.params().clone();
        params.remove("after_id");
        params.insert("before_id".to_string(), Value::from(last_id));
        params.insert("page_size".to_string(), Value::from(page_size));
        if let Some(optional_params) = optional_params {
            params.extend(optional_params);
        }

        tracing::debug!(kind = %kind, before_id = last_id, page_size, "Fetching next page");

        validate_list_params(&params)?;
        self.request_page(
            kind,
            kind.plural(),
            &class_url(kind),
            params,
            Some(page.api_key()),
        )
        .await
    }

    /// Sends a request and converts the response into a single object.
    ///
    /// `expected_kind` names the object when the response does not.
    ///
    /// # Errors
    ///
    /// Returns [`EasyPostError::InvalidObject`] if the response is not an
    /// object, or any dispatcher error.
    pub async fn request_object(
        &self,
        method: HttpMethod,
        url: &str,
        params: Option<Value>,
        expected_kind: ResourceKind,
    ) -> Result<EasyPostObject, EasyPostError> {
        let (body, api_key) = self
            .client
            .request(method, url, params, self.api_key)
            .await?;

        convert_to_object(body, Some(&api_key), Some(expected_kind))
            .into_object()
            .ok_or_else(|| EasyPostError::InvalidObject {
                message: format!("expected a {expected_kind} object from {url}"),
            })
    }

    /// Sends a `GET` and reads a page of `kind` from the `list_key` field.
    ///
    /// # Errors
    ///
    /// Returns [`EasyPostError::InvalidObject`] if the list is missing, or
    /// any dispatcher error.
    pub async fn request_page(
        &self,
        kind: ResourceKind,
        list_key: &str,
        url: &str,
        params: Params,
        api_key: Option<&ApiKey>,
    ) -> Result<Page, EasyPostError> {
        let (body, api_key) = self
            .client
            .request(
                HttpMethod::Get,
                url,
                Some(Value::Object(params.clone())),
                api_key,
            )
            .await?;

        Page::from_response(kind, list_key, body, api_key, params)
    }
}

/// A service over one resource kind.
///
/// Implementors provide [`ResourceService::KIND`], the client, and an
/// optional per-service key; `create`, `all`, `retrieve` and
/// `get_next_page` come for free.
#[allow(async_fn_in_trait)]
pub trait ResourceService {
    /// The resource kind this service operates on.
    const KIND: ResourceKind;

    /// The client requests are sent through.
    fn client(&self) -> &EasyPostClient;

    /// A key that overrides the client's key for this service, if any.
    fn api_key(&self) -> Option<&ApiKey>;

    /// The generic operations bound to this service's client and key.
    fn base(&self) -> BaseService<'_> {
        BaseService::new(self.client(), self.api_key())
    }

    /// Creates a resource from `params`.
    ///
    /// # Errors
    ///
    /// See [`BaseService::create`].
    async fn create(&self, params: impl Into<Value>) -> Result<EasyPostObject, EasyPostError> {
        self.base().create(Self::KIND, params.into()).await
    }

    /// Lists resources matching `params`.
    ///
    /// # Errors
    ///
    /// See [`BaseService::all`].
    async fn all(&self, params: impl Into<Value>) -> Result<Page, EasyPostError> {
        self.base().all(Self::KIND, params.into()).await
    }

    /// Retrieves one resource by ID.
    ///
    /// # Errors
    ///
    /// See [`BaseService::retrieve`].
    async fn retrieve(&self, id: &str) -> Result<EasyPostObject, EasyPostError> {
        self.base().retrieve(Self::KIND, id).await
    }

    /// Fetches the page after `page`.
    ///
    /// # Errors
    ///
    /// See [`BaseService::get_next_page`].
    async fn get_next_page(
        &self,
        page: &Page,
        page_size: u32,
        optional_params: Option<Params>,
    ) -> Result<Page, EasyPostError> {
        self.base()
            .get_next_page(Self::KIND, page, page_size, optional_params)
            .await
    }
}

/// Accepts a JSON object or `null` as a parameter bag.
pub(crate) fn into_params(params: Value) -> Result<Params, EasyPostError> {
    match params {
        Value::Null => Ok(Params::new()),
        Value::Object(map) => Ok(map),
        other => Err(EasyPostError::invalid_parameter(format!(
            "parameters must be a JSON object, got {other}"
        ))),
    }
}

/// Rejects empty or blank IDs.
pub(crate) fn require_id<'i>(name: &str, id: &'i str) -> Result<&'i str, EasyPostError> {
    if id.trim().is_empty() {
        return Err(EasyPostError::missing_parameter(name));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> EasyPostClient {
        EasyPostClient::new(ApiKey::new("EZTK_test").unwrap()).unwrap()
    }

    fn page(kind: ResourceKind, body: Value) -> Page {
        Page::from_response(
            kind,
            kind.plural(),
            body,
            ApiKey::new("EZTK_test").unwrap(),
            Params::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_into_params() {
        assert!(into_params(Value::Null).unwrap().is_empty());
        assert_eq!(into_params(json!({"a": 1})).unwrap()["a"], json!(1));
        assert!(matches!(
            into_params(json!("x")),
            Err(EasyPostError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_require_id() {
        assert_eq!(require_id("id", "batch_1").unwrap(), "batch_1");
        assert!(matches!(
            require_id("id", "  "),
            Err(EasyPostError::MissingParameter { parameter }) if parameter == "id"
        ));
    }

    #[tokio::test]
    async fn test_next_page_of_last_page_is_end_of_pagination() {
        let client = client();
        let base = BaseService::new(&client, None);
        let last = page(
            ResourceKind::Event,
            json!({"events": [{"id": "evt_1"}], "has_more": false}),
        );

        let result = base
            .get_next_page(ResourceKind::Event, &last, 5, None)
            .await;
        assert!(matches!(result, Err(EasyPostError::EndOfPagination)));
    }

    #[tokio::test]
    async fn test_next_page_of_empty_page_is_end_of_pagination() {
        let client = client();
        let base = BaseService::new(&client, None);
        let empty = page(ResourceKind::Event, json!({"events": [], "has_more": true}));

        let result = base
            .get_next_page(ResourceKind::Event, &empty, 5, None)
            .await;
        assert!(result.unwrap_err().is_end_of_pagination());
    }

    #[tokio::test]
    async fn test_next_page_rejects_page_of_other_kind() {
        let client = client();
        let base = BaseService::new(&client, None);
        let batches = page(
            ResourceKind::Batch,
            json!({"batches": [{"id": "batch_1"}], "has_more": true}),
        );

        let result = base
            .get_next_page(ResourceKind::Event, &batches, 5, None)
            .await;
        assert!(matches!(result, Err(EasyPostError::InvalidParameter { .. })));
    }

    #[tokio::test]
    async fn test_last_page_of_other_kind_is_still_end_of_pagination() {
        let client = client();
        let base = BaseService::new(&client, None);
        let batches = page(
            ResourceKind::Batch,
            json!({"batches": [{"id": "batch_1"}], "has_more": false}),
        );

        let result = base
            .get_next_page(ResourceKind::Event, &batches, 5, None)
            .await;
        assert!(matches!(result, Err(EasyPostError::EndOfPagination)));
    }

    #[tokio::test]
    async fn test_retrieve_with_empty_id_sends_nothing() {
        let client = client();
        let base = BaseService::new(&client, None);

        let result = base.retrieve(ResourceKind::Batch, "").await;
        assert!(matches!(
            result,
            Err(EasyPostError::MissingParameter { parameter }) if parameter == "id"
        ));
    }

    #[tokio::test]
    async fn test_all_rejects_invalid_filters_locally() {
        let client = client();
        let base = BaseService::new(&client, None);

        let result = base
            .all(ResourceKind::Event, json!({"before_id": "a", "after_id": "b"}))
            .await;
        assert!(matches!(result, Err(EasyPostError::Filtering { .. })));

        let result = base.all(ResourceKind::Event, json!({"page_size": 0})).await;
        assert!(matches!(result, Err(EasyPostError::InvalidParameter { .. })));
    }
}
