use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::DecodeError;
use super::money::TransportMoney;
use crate::domain::{Country, Service, SubscriptionTariff, TariffsQuery, TariffsResult};

#[derive(Debug, Clone, Deserialize)]
struct TariffsJsonResponse {
    response: String,
    #[serde(default)]
    countries: BTreeMap<String, CountryJson>,
    #[serde(default)]
    services: BTreeMap<String, ServiceJson>,
    #[serde(default)]
    subscription_tariffs: Vec<SubscriptionTariffJson>,
    #[serde(default)]
    page: i64,
    #[serde(default)]
    country: i64,
    #[serde(default)]
    filter: String,
    #[serde(default)]
    end: bool,
    #[serde(default)]
    favorites: Value,
    #[serde(default)]
    favorite_countries: Value,
    #[serde(default)]
    favorite_services: Value,
}

#[derive(Debug, Clone, Deserialize)]
struct CountryJson {
    name: String,
    #[serde(default)]
    original: String,
    #[serde(default)]
    code: u32,
    #[serde(default)]
    pos: i32,
    #[serde(default)]
    other: bool,
    #[serde(default)]
    new: bool,
    #[serde(default)]
    enable: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct ServiceJson {
    #[serde(default)]
    id: u32,
    #[serde(default)]
    count: u32,
    #[serde(default)]
    price: Option<TransportMoney>,
    #[serde(default)]
    service: String,
    #[serde(default)]
    slug: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SubscriptionTariffJson {
    #[serde(default)]
    id: u32,
    #[serde(default)]
    count_operations: u32,
    #[serde(default)]
    price: Option<TransportMoney>,
    #[serde(default)]
    life_days: u32,
    #[serde(default)]
    is_best: bool,
    #[serde(default)]
    is_custom: bool,
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    updated_at: String,
    #[serde(default)]
    sum: Option<TransportMoney>,
    #[serde(default)]
    currency_ratio: f64,
    #[serde(default)]
    symbol: String,
}

pub fn encode_tariffs_query(query: &TariffsQuery) -> Vec<(String, String)> {
    let mut params = Vec::new();
    push_filter(&mut params, "locale_price", query.locale_price.as_deref());
    push_filter(&mut params, "country", query.country.as_deref());
    push_filter(&mut params, "filter_country", query.filter_country.as_deref());
    push_filter(&mut params, "filter_service", query.filter_service.as_deref());
    push_filter(&mut params, "count", query.count.as_deref());
    push_filter(&mut params, "page", query.page.as_deref());
    push_filter(&mut params, "lang", query.lang.as_deref());
    params
}

fn push_filter(params: &mut Vec<(String, String)>, name: &'static str, value: Option<&str>) {
    match value {
        Some(value) if !value.is_empty() => params.push((name.to_owned(), value.to_owned())),
        _ => {}
    }
}

pub fn decode_tariffs_json_response(json: &str) -> Result<TariffsResult, DecodeError> {
    let parsed: TariffsJsonResponse =
        serde_json::from_str(json).map_err(|err| DecodeError::new(json, err))?;

    let countries = parsed
        .countries
        .into_iter()
        .map(|(id, country)| {
            (
                id,
                Country {
                    name: country.name,
                    original: country.original,
                    code: country.code,
                    position: country.pos,
                    other: country.other,
                    newly_added: country.new,
                    enabled: country.enable,
                },
            )
        })
        .collect();

    let services = parsed
        .services
        .into_iter()
        .map(|(id, service)| {
            (
                id,
                Service {
                    id: service.id,
                    available: service.count,
                    price: service
                        .price
                        .map(TransportMoney::into_string)
                        .unwrap_or_default(),
                    name: service.service,
                    slug: service.slug,
                },
            )
        })
        .collect();

    let subscription_tariffs = parsed
        .subscription_tariffs
        .into_iter()
        .map(|tariff| SubscriptionTariff {
            id: tariff.id,
            operations: tariff.count_operations,
            price: tariff
                .price
                .map(TransportMoney::into_string)
                .unwrap_or_default(),
            life_days: tariff.life_days,
            best: tariff.is_best,
            custom: tariff.is_custom,
            enabled: tariff.enabled,
            created_at: tariff.created_at,
            updated_at: tariff.updated_at,
            sum: tariff.sum.map(TransportMoney::into_string).unwrap_or_default(),
            currency_ratio: tariff.currency_ratio,
            symbol: tariff.symbol,
        })
        .collect();

    Ok(TariffsResult {
        response: parsed.response,
        countries,
        services,
        subscription_tariffs,
        page: parsed.page,
        country: parsed.country,
        filter: parsed.filter,
        end: parsed.end,
        favorites: parsed.favorites,
        favorite_countries: parsed.favorite_countries,
        favorite_services: parsed.favorite_services,
    })
}
