use serde::Deserialize;

use super::DecodeError;
use crate::domain::{ApiKey, NumberAcquisition};

#[derive(Debug, Clone, Deserialize)]
struct AcquireNumberJsonResponse {
    #[serde(default)]
    response: i64,
    #[serde(default)]
    tzid: i64,
    #[serde(default)]
    number: String,
    #[serde(default)]
    country: u32,
    #[serde(default)]
    time: i64,
    #[serde(default)]
    service: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    response_text: String,
}

/// A returned `number` field is always requested (`number=true`), and the key
/// rides along as a query parameter in addition to the Authorization header
/// the client sets.
pub fn encode_acquire_number_query(
    service: &str,
    country: u32,
    api_key: &ApiKey,
) -> Vec<(String, String)> {
    vec![
        ("service".to_owned(), service.to_owned()),
        ("country".to_owned(), country.to_string()),
        ("number".to_owned(), "true".to_owned()),
        (ApiKey::FIELD.to_owned(), api_key.as_str().to_owned()),
    ]
}

pub fn decode_acquire_number_json_response(json: &str) -> Result<NumberAcquisition, DecodeError> {
    let parsed: AcquireNumberJsonResponse =
        serde_json::from_str(json).map_err(|err| DecodeError::new(json, err))?;

    Ok(NumberAcquisition {
        response: parsed.response,
        tzid: parsed.tzid,
        number: parsed.number,
        country: parsed.country,
        time: parsed.time,
        service: parsed.service,
        title: parsed.title,
        response_text: parsed.response_text,
    })
}
