//! Rate selection helpers.

use crate::rest::{EasyPostError, EasyPostObject, ObjectValue};

/// Returns the cheapest rate in `object.rates`.
///
/// `carriers` and `services` restrict the candidates; an empty slice means
/// no restriction. Both match case-insensitively. Rates whose `rate` field
/// is missing or not numeric are skipped.
///
/// # Errors
///
/// Returns [`EasyPostError::Filtering`] with `"No rates found."` when no
/// rate passes the filters.
///
/// # Example
///
/// ```rust
/// use easypost_api::rest::{convert_to_object, lowest_rate};
/// use serde_json::json;
///
/// let shipment = convert_to_object(
///     json!({
///         "id": "shp_1",
///         "rates": [
///             {"id": "rate_1", "carrier": "USPS", "service": "Priority", "rate": "7.90"},
///             {"id": "rate_2", "carrier": "USPS", "service": "First", "rate": "5.20"},
///             {"id": "rate_3", "carrier": "UPS", "service": "Ground", "rate": "4.10"}
///         ]
///     }),
///     None,
///     None,
/// )
/// .into_object()
/// .unwrap();
///
/// assert_eq!(lowest_rate(&shipment, &[], &[]).unwrap().id(), Some("rate_3"));
/// assert_eq!(lowest_rate(&shipment, &["usps"], &[]).unwrap().id(), Some("rate_2"));
/// ```
pub fn lowest_rate<'a>(
    object: &'a EasyPostObject,
    carriers: &[&str],
    services: &[&str],
) -> Result<&'a EasyPostObject, EasyPostError> {
    let rates = object.get_list("rates").unwrap_or_default();
    lowest_rate_of(rates, carriers, services)
}

/// Returns the cheapest rate in a list of rate objects.
///
/// # Errors
///
/// See [`lowest_rate`].
pub fn lowest_rate_of<'a>(
    rates: &'a [ObjectValue],
    carriers: &[&str],
    services: &[&str],
) -> Result<&'a EasyPostObject, EasyPostError> {
    let matches = |allowed: &[&str], value: Option<&str>| {
        allowed.is_empty()
            || value.is_some_and(|v| allowed.iter().any(|a| a.eq_ignore_ascii_case(v)))
    };

    rates
        .iter()
        .filter_map(ObjectValue::as_object)
        .filter(|rate| matches(carriers, rate.get_str("carrier")))
        .filter(|rate| matches(services, rate.get_str("service")))
        .filter_map(|rate| rate.get_f64("rate").map(|amount| (amount, rate)))
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, rate)| rate)
        .ok_or_else(|| EasyPostError::filtering("No rates found."))
}
