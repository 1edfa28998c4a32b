//! Resource kind registry.
//!
//! Every EasyPost resource has a class name (`"ScanForm"`), a snake_case
//! name used as the request wrapper key (`"scan_form"`), a plural URL
//! segment (`"scan_forms"`) and one or more ID prefixes (`"sf"`).

use std::fmt;
use std::str::FromStr;

/// A known EasyPost resource kind.
///
/// # Example
///
/// ```rust
/// use easypost_api::rest::ResourceKind;
///
/// let kind = ResourceKind::ScanForm;
/// assert_eq!(kind.class_name(), "ScanForm");
/// assert_eq!(kind.snake_name(), "scan_form");
/// assert_eq!(kind.plural(), "scan_forms");
///
/// assert_eq!(ResourceKind::from_id("batch_8a1c"), Some(ResourceKind::Batch));
/// assert_eq!(ResourceKind::from_class_name("Event"), Some(ResourceKind::Event));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// A postal address.
    Address,
    /// A group of shipments purchased together.
    Batch,
    /// A carrier account linked to the user.
    CarrierAccount,
    /// Customs declaration for a shipment.
    CustomsInfo,
    /// A single line of a customs declaration.
    CustomsItem,
    /// A webhook event.
    Event,
    /// Shipment insurance.
    Insurance,
    /// A multi-parcel order.
    Order,
    /// Package dimensions and weight.
    Parcel,
    /// A single delivery attempt of an event to a webhook.
    Payload,
    /// A scheduled carrier pickup.
    Pickup,
    /// A rate quote for a pickup.
    PickupRate,
    /// A purchased shipping label.
    PostageLabel,
    /// A shipping rate quote.
    Rate,
    /// A refund request for a label.
    Refund,
    /// A generated account report.
    Report,
    /// A manifest covering multiple shipments.
    ScanForm,
    /// A shipment.
    Shipment,
    /// A package tracker.
    Tracker,
    /// A user or child user account.
    User,
    /// A webhook endpoint.
    Webhook,
}

struct KindInfo {
    class_name: &'static str,
    snake_name: &'static str,
    plural: &'static str,
    id_prefixes: &'static [&'static str],
}

impl ResourceKind {
    /// Every known kind.
    pub const ALL: [Self; 21] = [
        Self::Address,
        Self::Batch,
        Self::CarrierAccount,
        Self::CustomsInfo,
        Self::CustomsItem,
        Self::Event,
        Self::Insurance,
        Self::Order,
        Self::Parcel,
        Self::Payload,
        Self::Pickup,
        Self::PickupRate,
        Self::PostageLabel,
        Self::Rate,
        Self::Refund,
        Self::Report,
        Self::ScanForm,
        Self::Shipment,
        Self::Tracker,
        Self::User,
        Self::Webhook,
    ];

    const fn info(self) -> KindInfo {
        const fn info(
            class_name: &'static str,
            snake_name: &'static str,
            plural: &'static str,
            id_prefixes: &'static [&'static str],
        ) -> KindInfo {
            KindInfo {
                class_name,
                snake_name,
                plural,
                id_prefixes,
            }
        }

        match self {
            Self::Address => info("Address", "address", "addresses", &["adr"]),
            Self::Batch => info("Batch", "batch", "batches", &["batch"]),
            Self::CarrierAccount => {
                info("CarrierAccount", "carrier_account", "carrier_accounts", &["ca"])
            }
            Self::CustomsInfo => info("CustomsInfo", "customs_info", "customs_infos", &["cstinfo"]),
            Self::CustomsItem => info("CustomsItem", "customs_item", "customs_items", &["cstitem"]),
            Self::Event => info("Event", "event", "events", &["evt"]),
            Self::Insurance => info("Insurance", "insurance", "insurances", &["ins"]),
            Self::Order => info("Order", "order", "orders", &["order"]),
            Self::Parcel => info("Parcel", "parcel", "parcels", &["prcl"]),
            Self::Payload => info("Payload", "payload", "payloads", &["payload"]),
            Self::Pickup => info("Pickup", "pickup", "pickups", &["pickup"]),
            Self::PickupRate => info("PickupRate", "pickup_rate", "pickup_rates", &["pickuprate"]),
            Self::PostageLabel => info("PostageLabel", "postage_label", "postage_labels", &["pl"]),
            Self::Rate => info("Rate", "rate", "rates", &["rate"]),
            Self::Refund => info("Refund", "refund", "refunds", &["rfnd"]),
            Self::Report => info(
                "Report",
                "report",
                "reports",
                &["cfrep", "plrep", "refrep", "shpinvrep", "shprep", "trkrep"],
            ),
            Self::ScanForm => info("ScanForm", "scan_form", "scan_forms", &["sf"]),
            Self::Shipment => info("Shipment", "shipment", "shipments", &["shp"]),
            Self::Tracker => info("Tracker", "tracker", "trackers", &["trk"]),
            Self::User => info("User", "user", "users", &["user"]),
            Self::Webhook => info("Webhook", "webhook", "webhooks", &["hook"]),
        }
    }

    /// The API class name, as it appears in the `object` field.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        self.info().class_name
    }

    /// The snake_case name, used to wrap create parameters.
    #[must_use]
    pub const fn snake_name(self) -> &'static str {
        self.info().snake_name
    }

    /// The plural URL segment, also the list key in collection responses.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        self.info().plural
    }

    /// ID prefixes (the text before the first `_`) that identify this kind.
    #[must_use]
    pub const fn id_prefixes(self) -> &'static [&'static str] {
        self.info().id_prefixes
    }

    /// Looks up a kind by its API class name.
    #[must_use]
    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.class_name() == name)
    }

    /// Looks up a kind by ID prefix (without the trailing `_`).
    #[must_use]
    pub fn from_id_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id_prefixes().contains(&prefix))
    }

    /// Looks up a kind from a full resource ID such as `"shp_abc123"`.
    ///
    /// Returns `None` when the ID has no `_` or its prefix is unknown.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        let (prefix, _) = id.split_once('_')?;
        Self::from_id_prefix(prefix)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_class_name(s).ok_or_else(|| format!("unknown resource kind: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_class_name_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::from_class_name(kind.class_name()), Some(kind));
            assert_eq!(kind.to_string().parse::<ResourceKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_prefixes_are_unique() {
        let mut seen = HashSet::new();
        for kind in ResourceKind::ALL {
            for prefix in kind.id_prefixes() {
                assert!(seen.insert(*prefix), "duplicate prefix {prefix}");
            }
        }
    }

    #[test]
    fn test_plural_segments_are_unique() {
        let plurals: HashSet<_> = ResourceKind::ALL.iter().map(|k| k.plural()).collect();
        assert_eq!(plurals.len(), ResourceKind::ALL.len());
    }

    #[test]
    fn test_from_id() {
        assert_eq!(ResourceKind::from_id("shp_123"), Some(ResourceKind::Shipment));
        assert_eq!(ResourceKind::from_id("evt_abc"), Some(ResourceKind::Event));
        assert_eq!(ResourceKind::from_id("hook_1"), Some(ResourceKind::Webhook));
        assert_eq!(ResourceKind::from_id("shpinvrep_9"), Some(ResourceKind::Report));
        assert_eq!(ResourceKind::from_id("trkrep_9"), Some(ResourceKind::Report));
    }

    #[test]
    fn test_from_id_unknown() {
        assert_eq!(ResourceKind::from_id("zzz_123"), None);
        assert_eq!(ResourceKind::from_id("noprefix"), None);
        assert_eq!(ResourceKind::from_id(""), None);
    }

    #[test]
    fn test_unknown_class_name() {
        assert_eq!(ResourceKind::from_class_name("Widget"), None);
        assert!("Widget".parse::<ResourceKind>().is_err());
        assert_eq!(ResourceKind::from_class_name("batch"), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(ResourceKind::Batch.snake_name(), "batch");
        assert_eq!(ResourceKind::Batch.plural(), "batches");
        assert_eq!(ResourceKind::Address.plural(), "addresses");
        assert_eq!(ResourceKind::CarrierAccount.snake_name(), "carrier_account");
        assert_eq!(ResourceKind::Event.plural(), "events");
    }
}
