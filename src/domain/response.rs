use std::collections::BTreeMap;

use serde_json::Value;

/// Tariff catalog returned by the tariff listing endpoint.
///
/// `countries` and `services` are keyed by the id strings the server uses as
/// JSON object keys. The `favorites` family has no stable shape on the server
/// side and is kept as raw JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct TariffsResult {
    pub response: String,
    pub countries: BTreeMap<String, Country>,
    pub services: BTreeMap<String, Service>,
    pub subscription_tariffs: Vec<SubscriptionTariff>,
    pub page: i64,
    pub country: i64,
    pub filter: String,
    pub end: bool,
    pub favorites: Value,
    pub favorite_countries: Value,
    pub favorite_services: Value,
}

/// One country entry of the tariff catalog; its id is the mapping key in
/// [`TariffsResult::countries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    /// Country name in its original language.
    pub original: String,
    pub code: u32,
    /// Sort position in the catalog.
    pub position: i32,
    /// Set on the catch-all "other countries" bucket.
    pub other: bool,
    pub newly_added: bool,
    pub enabled: bool,
}

/// One service entry of the tariff catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub id: u32,
    /// Numbers currently available for this service.
    pub available: u32,
    /// Price with the server's formatting preserved (`"10.00"` stays `"10.00"`).
    pub price: String,
    pub name: String,
    pub slug: String,
}

/// Subscription tariff offer from the tariff catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionTariff {
    pub id: u32,
    pub operations: u32,
    pub price: String,
    pub life_days: u32,
    pub best: bool,
    pub custom: bool,
    pub enabled: bool,
    /// Creation timestamp, opaque server formatting.
    pub created_at: String,
    /// Update timestamp, opaque server formatting.
    pub updated_at: String,
    pub sum: String,
    pub currency_ratio: f64,
    pub symbol: String,
}

/// Result of acquiring a phone number.
///
/// A decoded acquisition is not necessarily a granted one: the service
/// reports refusals (no numbers left, insufficient balance) through
/// `response`/`response_text` inside a well-formed payload. Inspecting those
/// is the caller's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberAcquisition {
    pub response: i64,
    /// Tracking id correlating later status lookups with this acquisition.
    pub tzid: i64,
    pub number: String,
    pub country: u32,
    pub time: i64,
    pub service: String,
    pub title: String,
    pub response_text: String,
}

/// One status snapshot of a previously acquired number.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberState {
    pub country: u32,
    /// Cost accrued so far.
    pub sum: f64,
    pub service: String,
    pub number: String,
    pub response: String,
    pub tzid: i64,
    pub time: i64,
    /// Free-text status category reported by the server.
    pub form: String,
    pub msg: String,
}
