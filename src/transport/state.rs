use serde::Deserialize;

use super::DecodeError;
use crate::domain::{ApiKey, NumberState};

#[derive(Debug, Clone, Deserialize)]
struct NumberStateJson {
    #[serde(default)]
    country: u32,
    #[serde(default)]
    sum: f64,
    #[serde(default)]
    service: String,
    #[serde(default)]
    number: String,
    #[serde(default)]
    response: String,
    #[serde(default)]
    tzid: i64,
    #[serde(default)]
    time: i64,
    #[serde(default)]
    form: String,
    #[serde(default)]
    msg: String,
}

pub fn encode_number_states_query(
    tzid: i64,
    message_to_code: i64,
    api_key: &ApiKey,
) -> Vec<(String, String)> {
    vec![
        ("tzid".to_owned(), tzid.to_string()),
        ("message_to_code".to_owned(), message_to_code.to_string()),
        (ApiKey::FIELD.to_owned(), api_key.as_str().to_owned()),
    ]
}

/// Server order is kept as-is; an empty array is a valid "no states yet".
pub fn decode_number_states_json_response(json: &str) -> Result<Vec<NumberState>, DecodeError> {
    let parsed: Vec<NumberStateJson> =
        serde_json::from_str(json).map_err(|err| DecodeError::new(json, err))?;

    Ok(parsed
        .into_iter()
        .map(|state| NumberState {
            country: state.country,
            sum: state.sum,
            service: state.service,
            number: state.number,
            response: state.response,
            tzid: state.tzid,
            time: state.time,
            form: state.form,
            msg: state.msg,
        })
        .collect())
}
