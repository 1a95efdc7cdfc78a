use crate::domain::validation::ValidationError;

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Onlinesim `apikey` token.
///
/// The key format is not validated locally; an invalid key surfaces only as a
/// refusal in the remote service's response payload.
pub struct ApiKey(String);

impl ApiKey {
    /// Query parameter name used by Onlinesim (`apikey`).
    pub const FIELD: &'static str = "apikey";

    /// Wrap an API key as provided.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outbound proxy address for all client requests.
///
/// Invariant: parses as an absolute URL. Scheme support (`http`, `https`,
/// `socks5`) is enforced where the transport is built.
pub struct ProxyUrl(Url);

impl ProxyUrl {
    /// Parse and validate a proxy URL.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let url = Url::parse(value).map_err(|_| ValidationError::InvalidProxyUrl {
            input: value.to_owned(),
        })?;
        Ok(Self(url))
    }

    /// Borrow the parsed URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Borrow the parsed URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}
