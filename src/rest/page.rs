//! One page of a list response.
//!
//! [`Page`] implements `Deref<Target = [EasyPostObject]>`, so it can be
//! iterated, indexed and measured like a slice:
//!
//! ```rust,ignore
//! let page = client.event().all(json!({"page_size": 5})).await?;
//!
//! for event in page.iter() {
//!     println!("{:?}", event.id());
//! }
//! println!("{} events, more: {}", page.len(), page.has_more());
//!
//! let next = client.event().get_next_page(&page, 5, None).await?;
//! ```

use std::collections::BTreeMap;
use std::ops::Deref;

use serde_json::Value;

use crate::config::ApiKey;
use crate::rest::{
    convert_to_object, EasyPostError, EasyPostObject, ObjectValue, Params, ResourceKind,
};

/// A page of resources plus what is needed to fetch the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    kind: ResourceKind,
    items: Vec<EasyPostObject>,
    has_more: bool,
    metadata: BTreeMap<String, ObjectValue>,
    params: Params,
    api_key: ApiKey,
}

impl Page {
    /// Builds a page from a list response body.
    ///
    /// The items are read from the `list_key` field (usually the kind's
    /// plural), `has_more` defaults to `false`, and every other top-level
    /// field is kept as metadata. `params` are the filters the page was
    /// requested with.
    ///
    /// # Errors
    ///
    /// Returns [`EasyPostError::InvalidObject`] if the body is not an object,
    /// the list is missing, or an element is not an object.
    pub fn from_response(
        kind: ResourceKind,
        list_key: &str,
        body: Value,
        api_key: ApiKey,
        params: Params,
    ) -> Result<Self, EasyPostError> {
        let Value::Object(mut map) = body else {
            return Err(EasyPostError::InvalidObject {
                message: format!("expected a JSON object for a {kind} list"),
            });
        };

        let Some(Value::Array(raw_items)) = map.remove(list_key) else {
            return Err(EasyPostError::InvalidObject {
                message: format!("list response is missing the `{list_key}` array"),
            });
        };

        let has_more = map
            .remove("has_more")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        let items = raw_items
            .into_iter()
            .map(|item| {
                convert_to_object(item, Some(&api_key), Some(kind))
                    .into_object()
                    .ok_or_else(|| EasyPostError::InvalidObject {
                        message: format!("`{list_key}` contains a non-object element"),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let metadata = map
            .into_iter()
            .map(|(key, value)| (key, convert_to_object(value, Some(&api_key), None)))
            .collect();

        Ok(Self {
            kind,
            items,
            has_more,
            metadata,
            params,
            api_key,
        })
    }

    /// The resource kind of the items.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Returns `true` if the server reported further results.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// The ID of the last item, used as the cursor for the next page.
    #[must_use]
    pub fn last_id(&self) -> Option<&str> {
        self.items.last().and_then(|item| item.id())
    }

    /// The filters this page was requested with.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Top-level response fields other than the list and `has_more`.
    #[must_use]
    pub const fn metadata(&self) -> &BTreeMap<String, ObjectValue> {
        &self.metadata
    }

    /// The API key that fetched this page.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_items(self) -> Vec<EasyPostObject> {
        self.items
    }
}

impl Deref for Page {
    type Target = [EasyPostObject];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Page {
    type Item = &'a EasyPostObject;
    type IntoIter = std::slice::Iter<'a, EasyPostObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Page {
    type Item = EasyPostObject;
    type IntoIter = std::vec::IntoIter<EasyPostObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
