//! Transport layer: wire-format details (query encoding and JSON decoding).

mod acquire;
mod money;
mod state;
mod tariffs;

pub use acquire::{decode_acquire_number_json_response, encode_acquire_number_query};
pub use state::{decode_number_states_json_response, encode_number_states_query};
pub use tariffs::{decode_tariffs_json_response, encode_tariffs_query};

const SNIPPET_MAX_CHARS: usize = 60;

/// Response body failed to decode as the endpoint's expected JSON shape.
///
/// Carries the raw body length and its leading characters so a truncated or
/// HTML error page is recognizable from the error message alone.
#[derive(Debug, thiserror::Error)]
#[error("invalid JSON response ({body_len} bytes, starting {snippet:?}): {source}")]
pub struct DecodeError {
    #[source]
    source: serde_json::Error,
    body_len: usize,
    snippet: String,
}

impl DecodeError {
    pub(crate) fn new(body: &str, source: serde_json::Error) -> Self {
        Self {
            source,
            body_len: body.len(),
            snippet: body.chars().take(SNIPPET_MAX_CHARS).collect(),
        }
    }

    /// Length of the undecodable body, in bytes.
    pub fn body_len(&self) -> usize {
        self.body_len
    }

    /// Leading characters of the undecodable body.
    pub fn snippet(&self) -> &str {
        &self.snippet
    }
}
