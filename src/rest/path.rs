//! URL building for resources.
//!
//! Paths are relative to the versioned API root (`https://api.easypost.com/v2`).
//! IDs are percent-encoded before they are placed in a path.
//!
//! # Example
//!
//! ```rust
//! use easypost_api::rest::{build_path, class_url, instance_url, ResourceKind};
//!
//! assert_eq!(class_url(ResourceKind::Batch), "/batches");
//! assert_eq!(instance_url(ResourceKind::Event, "evt_1"), "/events/evt_1");
//!
//! let path = build_path(
//!     "/events/{event_id}/payloads/{payload_id}",
//!     &[("event_id", "evt_1"), ("payload_id", "payload_2")],
//! );
//! assert_eq!(path, "/events/evt_1/payloads/payload_2");
//! ```

use crate::rest::ResourceKind;

/// The collection URL of a kind: `/` followed by its plural.
#[must_use]
pub fn class_url(kind: ResourceKind) -> String {
    format!("/{}", kind.plural())
}

/// The URL of one resource: the collection URL followed by the encoded ID.
#[must_use]
pub fn instance_url(kind: ResourceKind, id: &str) -> String {
    format!("{}/{}", class_url(kind), urlencoding::encode(id))
}

/// Interpolates `{name}` placeholders in `template` with encoded values.
///
/// Placeholders without a matching value are left as they are.
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_url_for_every_kind() {
        for kind in ResourceKind::ALL {
            let url = class_url(kind);
            assert!(url.starts_with('/'));
            assert_eq!(&url[1..], kind.plural());
        }
    }

    #[test]
    fn test_instance_url() {
        assert_eq!(instance_url(ResourceKind::Batch, "batch_123"), "/batches/batch_123");
        assert_eq!(
            instance_url(ResourceKind::Address, "adr_1"),
            "/addresses/adr_1"
        );
    }

    #[test]
    fn test_instance_url_encodes_id() {
        assert_eq!(
            instance_url(ResourceKind::Event, "evt/../x y"),
            "/events/evt%2F..%2Fx%20y"
        );
    }

    #[test]
    fn test_build_path_single_id() {
        assert_eq!(
            build_path("/batches/{id}/buy", &[("id", "batch_1")]),
            "/batches/batch_1/buy"
        );
    }

    #[test]
    fn test_build_path_leaves_unknown_placeholders() {
        assert_eq!(
            build_path("/events/{event_id}/payloads/{payload_id}", &[("event_id", "evt_1")]),
            "/events/evt_1/payloads/{payload_id}"
        );
    }
}
