//! Dynamic resource objects and the JSON converter.
//!
//! EasyPost responses are converted into [`EasyPostObject`] trees rather than
//! fixed structs. Each object knows its [`ObjectKind`] and carries the API
//! key that fetched it, so follow-up calls made from it use the same
//! account.
//!
//! # Kind resolution
//!
//! For every JSON object, [`convert_to_object`] picks the kind from:
//!
//! 1. the `"object"` field, if it names a known class
//! 2. the prefix of the `"id"` field (`"shp_123"` is a Shipment)
//! 3. the caller-supplied expected kind (top level only)
//! 4. otherwise [`ObjectKind::Generic`]
//!
//! Conversion never fails.
//!
//! # Example
//!
//! ```rust
//! use easypost_api::rest::{convert_to_object, ObjectKind, ResourceKind};
//! use serde_json::json;
//!
//! let value = convert_to_object(
//!     json!({"id": "batch_1", "state": "created", "shipments": [{"id": "shp_1"}]}),
//!     None,
//!     None,
//! );
//! let batch = value.as_object().unwrap();
//!
//! assert_eq!(batch.kind(), ObjectKind::Resource(ResourceKind::Batch));
//! assert_eq!(batch.get_str("state"), Some("created"));
//!
//! let shipment = &batch.get_list("shipments").unwrap()[0];
//! assert_eq!(
//!     shipment.as_object().unwrap().kind(),
//!     ObjectKind::Resource(ResourceKind::Shipment)
//! );
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::config::ApiKey;
use crate::rest::ResourceKind;

/// The kind of a converted object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A known resource.
    Resource(ResourceKind),
    /// A mapping that could not be tied to a known resource.
    Generic,
}

impl ObjectKind {
    /// Returns the resource kind, if this is a known resource.
    #[must_use]
    pub const fn resource(self) -> Option<ResourceKind> {
        match self {
            Self::Resource(kind) => Some(kind),
            Self::Generic => None,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource(kind) => fmt::Display::fmt(kind, f),
            Self::Generic => f.write_str("EasyPostObject"),
        }
    }
}

/// A node in a converted response tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectValue {
    /// A JSON object.
    Object(EasyPostObject),
    /// A JSON array, order preserved.
    List(Vec<ObjectValue>),
    /// Any other JSON value, unchanged.
    Scalar(Value),
}

impl ObjectValue {
    /// Returns the object, if this node is one.
    #[must_use]
    pub const fn as_object(&self) -> Option<&EasyPostObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Consumes the node and returns the object, if it is one.
    #[must_use]
    pub fn into_object(self) -> Option<EasyPostObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the list elements, if this node is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the raw scalar, if this node is one.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the string value, if this node is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Value::as_str)
    }

    /// Converts the node back to plain JSON.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Object(object) => object.to_json(),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Scalar(value) => value.clone(),
        }
    }
}

impl Serialize for ObjectValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Object(object) => object.serialize(serializer),
            Self::List(items) => items.serialize(serializer),
            Self::Scalar(value) => value.serialize(serializer),
        }
    }
}

/// A converted EasyPost object.
///
/// Fields are exactly the keys of the source JSON. The API key is held
/// separately and is never serialized.
#[derive(Clone, PartialEq)]
pub struct EasyPostObject {
    kind: ObjectKind,
    fields: BTreeMap<String, ObjectValue>,
    api_key: Option<ApiKey>,
}

impl EasyPostObject {
    /// Returns the resolved kind.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Returns the resource kind, if the object is a known resource.
    #[must_use]
    pub const fn resource_kind(&self) -> Option<ResourceKind> {
        self.kind.resource()
    }

    /// Returns the API key that fetched this object.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the `id` field.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    /// Returns a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ObjectValue> {
        self.fields.get(key)
    }

    /// Returns a string field.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ObjectValue::as_str)
    }

    /// Returns a boolean field.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)
            .and_then(ObjectValue::as_scalar)
            .and_then(Value::as_bool)
    }

    /// Returns an integer field.
    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key)
            .and_then(ObjectValue::as_scalar)
            .and_then(Value::as_i64)
    }

    /// Returns a numeric field.
    ///
    /// EasyPost sends monetary amounts as strings (`"rate": "7.58"`); those
    /// are parsed too.
    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.get(key)?.as_scalar()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns a nested object field.
    #[must_use]
    pub fn get_object(&self, key: &str) -> Option<&Self> {
        self.get(key).and_then(ObjectValue::as_object)
    }

    /// Returns a list field.
    #[must_use]
    pub fn get_list(&self, key: &str) -> Option<&[ObjectValue]> {
        self.get(key).and_then(ObjectValue::as_list)
    }

    /// Parses the `created_at` timestamp.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.get_datetime("created_at")
    }

    /// Parses the `updated_at` timestamp.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.get_datetime("updated_at")
    }

    /// Parses an RFC 3339 timestamp field.
    #[must_use]
    pub fn get_datetime(&self, key: &str) -> Option<DateTime<Utc>> {
        let raw = self.get_str(key)?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Iterates field names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns all fields.
    #[must_use]
    pub const fn fields(&self) -> &BTreeMap<String, ObjectValue> {
        &self.fields
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the object has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts the object back to plain JSON. The API key is not included.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }

    /// Deserializes the object into a typed view.
    ///
    /// # Errors
    ///
    /// Returns a serde error if the fields do not match `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use easypost_api::rest::convert_to_object;
    /// use serde::Deserialize;
    /// use serde_json::json;
    ///
    /// #[derive(Deserialize)]
    /// struct BatchSummary {
    ///     id: String,
    ///     num_shipments: u32,
    /// }
    ///
    /// let value = convert_to_object(json!({"id": "batch_1", "num_shipments": 3}), None, None);
    /// let summary: BatchSummary = value.as_object().unwrap().deserialize_into().unwrap();
    /// assert_eq!(summary.num_shipments, 3);
    /// ```
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.to_json())
    }
}

impl fmt::Debug for EasyPostObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EasyPostObject")
            .field("kind", &self.kind)
            .field("id", &self.id())
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl Serialize for EasyPostObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// Converts decoded JSON into an object tree tagged with `api_key`.
///
/// `expected_kind` is used only for the top-level object, and only when
/// neither its `object` field nor its ID prefix identifies it.
#[must_use]
pub fn convert_to_object(
    value: Value,
    api_key: Option<&ApiKey>,
    expected_kind: Option<ResourceKind>,
) -> ObjectValue {
    match value {
        Value::Object(map) => ObjectValue::Object(convert_map(map, api_key, expected_kind)),
        Value::Array(items) => ObjectValue::List(
            items
                .into_iter()
                .map(|item| convert_to_object(item, api_key, None))
                .collect(),
        ),
        scalar => ObjectValue::Scalar(scalar),
    }
}

fn convert_map(
    map: Map<String, Value>,
    api_key: Option<&ApiKey>,
    expected_kind: Option<ResourceKind>,
) -> EasyPostObject {
    let kind = resolve_kind(&map, expected_kind);

    let fields = map
        .into_iter()
        .map(|(key, value)| (key, convert_to_object(value, api_key, None)))
        .collect();

    EasyPostObject {
        kind,
        fields,
        api_key: api_key.cloned(),
    }
}

fn resolve_kind(map: &Map<String, Value>, expected_kind: Option<ResourceKind>) -> ObjectKind {
    map.get("object")
        .and_then(Value::as_str)
        .and_then(ResourceKind::from_class_name)
        .or_else(|| {
            map.get("id")
                .and_then(Value::as_str)
                .and_then(ResourceKind::from_id)
        })
        .or(expected_kind)
        .map_or(ObjectKind::Generic, ObjectKind::Resource)
}
