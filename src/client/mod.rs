//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    ApiKey, NumberAcquisition, NumberState, ProxyUrl, TariffsQuery, TariffsResult, ValidationError,
};
use crate::transport::DecodeError;

const DEFAULT_BASE_URL: &str = "https://onlinesim.io/api/";
const TARIFFS_ENDPOINT_FILE: &str = "getTariffs.php";
const ACQUIRE_ENDPOINT_FILE: &str = "getNum.php";
const STATES_ENDPOINT_FILE: &str = "getState.php";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: std::fmt::Debug + Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
        bearer_token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
        bearer_token: Option<&'a str>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.get(url).query(&query);
            if let Some(token) = bearer_token {
                request = request.bearer_auth(token);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

/// Transport options shared by the builder and by proxy reconfiguration.
///
/// Kept next to the built transport so [`OnlinesimClient::with_proxy`] can
/// rebuild an equivalent transport without losing timeout or user-agent
/// settings.
#[derive(Debug, Clone, Default)]
struct TransportSettings {
    timeout: Option<Duration>,
    user_agent: Option<String>,
    proxy: Option<ProxyUrl>,
}

impl TransportSettings {
    fn build_transport(&self) -> Result<ReqwestTransport, OnlinesimError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        if let Some(proxy) = &self.proxy {
            // A URL that parses but names a scheme the proxy layer rejects
            // (e.g. `mailto:`) is still a configuration error, not a
            // network one.
            let proxy = reqwest::Proxy::all(proxy.as_str()).map_err(|_| {
                OnlinesimError::InvalidProxyUrl(ValidationError::InvalidProxyUrl {
                    input: proxy.as_str().to_owned(),
                })
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|err| OnlinesimError::Transport(Box::new(err)))?;

        Ok(ReqwestTransport { client })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`OnlinesimClient`].
///
/// Business-level refusals (no free numbers, insufficient balance, bad key)
/// are not errors: the service reports them through `response` /
/// `response_text` fields of a successfully decoded payload, and this client
/// passes those through untouched.
pub enum OnlinesimError {
    /// Proxy string rejected; the client configuration is unchanged.
    #[error("invalid proxy configuration: {0}")]
    InvalidProxyUrl(#[from] ValidationError),

    /// Network-layer failure (DNS, TLS, timeouts, proxy errors) or a
    /// non-2xx HTTP status wrapping [`HttpStatusError`]. Never retried.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Response body was not valid JSON for the endpoint's expected shape.
    #[error("decode error: {0}")]
    Decode(#[source] DecodeError),
}

/// Non-2xx HTTP status, reported through [`OnlinesimError::Transport`].
#[derive(Debug, thiserror::Error)]
#[error("unexpected HTTP status: {status}")]
pub struct HttpStatusError {
    pub status: u16,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
/// Builder for [`OnlinesimClient`].
///
/// Use this when you need a proxy, a request timeout, a custom user-agent,
/// or non-default endpoint URLs.
pub struct OnlinesimClientBuilder {
    api_key: ApiKey,
    tariffs_endpoint: String,
    acquire_endpoint: String,
    states_endpoint: String,
    settings: TransportSettings,
}

impl OnlinesimClientBuilder {
    /// Create a builder with the default endpoints and a plain transport.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            tariffs_endpoint: join_endpoint(DEFAULT_BASE_URL, TARIFFS_ENDPOINT_FILE),
            acquire_endpoint: join_endpoint(DEFAULT_BASE_URL, ACQUIRE_ENDPOINT_FILE),
            states_endpoint: join_endpoint(DEFAULT_BASE_URL, STATES_ENDPOINT_FILE),
            settings: TransportSettings::default(),
        }
    }

    /// Point all three endpoints at a different API root.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.tariffs_endpoint = join_endpoint(&base_url, TARIFFS_ENDPOINT_FILE);
        self.acquire_endpoint = join_endpoint(&base_url, ACQUIRE_ENDPOINT_FILE);
        self.states_endpoint = join_endpoint(&base_url, STATES_ENDPOINT_FILE);
        self
    }

    /// Override the tariff listing endpoint URL.
    pub fn tariffs_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.tariffs_endpoint = endpoint.into();
        self
    }

    /// Override the number acquisition endpoint URL.
    pub fn acquire_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.acquire_endpoint = endpoint.into();
        self
    }

    /// Override the status lookup endpoint URL.
    pub fn states_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.states_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Without this, a hung endpoint blocks the call indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.settings.user_agent = Some(user_agent.into());
        self
    }

    /// Route all requests through the given proxy.
    pub fn proxy(mut self, proxy: ProxyUrl) -> Self {
        self.settings.proxy = Some(proxy);
        self
    }

    /// Build an [`OnlinesimClient`].
    pub fn build(self) -> Result<OnlinesimClient, OnlinesimError> {
        let http = self.settings.build_transport()?;
        Ok(OnlinesimClient {
            api_key: self.api_key,
            tariffs_endpoint: self.tariffs_endpoint,
            acquire_endpoint: self.acquire_endpoint,
            states_endpoint: self.states_endpoint,
            settings: self.settings,
            http: Arc::new(http),
        })
    }
}

#[derive(Debug, Clone)]
/// High-level Onlinesim client.
///
/// One instance holds one API key and one immutable transport
/// configuration; every call is an independent GET round trip against
/// `https://onlinesim.io/api/`. Because nothing is mutated after
/// construction, a client can be cloned and shared across tasks freely;
/// reconfiguration ([`OnlinesimClient::with_proxy`]) produces a new
/// instance instead of touching the old one.
pub struct OnlinesimClient {
    api_key: ApiKey,
    tariffs_endpoint: String,
    acquire_endpoint: String,
    states_endpoint: String,
    settings: TransportSettings,
    http: Arc<dyn HttpTransport>,
}

impl OnlinesimClient {
    /// Create a client with the default endpoints and transport.
    ///
    /// The key is not validated locally; a bad key shows up as a refusal in
    /// the response payload. For proxy, timeout, or endpoint customization
    /// use [`OnlinesimClient::builder`].
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            tariffs_endpoint: join_endpoint(DEFAULT_BASE_URL, TARIFFS_ENDPOINT_FILE),
            acquire_endpoint: join_endpoint(DEFAULT_BASE_URL, ACQUIRE_ENDPOINT_FILE),
            states_endpoint: join_endpoint(DEFAULT_BASE_URL, STATES_ENDPOINT_FILE),
            settings: TransportSettings::default(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: impl Into<ApiKey>) -> OnlinesimClientBuilder {
        OnlinesimClientBuilder::new(api_key)
    }

    /// Return a new client whose requests route through `proxy`.
    ///
    /// The receiver is left untouched: its transport keeps serving
    /// in-flight and future requests with the old configuration, so there
    /// is nothing to synchronize against. Timeout and user-agent settings
    /// carry over to the new client.
    ///
    /// Errors:
    /// - [`OnlinesimError::InvalidProxyUrl`] if `proxy` does not parse as a
    ///   URL or names a scheme the proxy layer does not support.
    pub fn with_proxy(&self, proxy: &str) -> Result<Self, OnlinesimError> {
        let proxy = ProxyUrl::parse(proxy)?;
        let mut settings = self.settings.clone();
        settings.proxy = Some(proxy);
        let http = settings.build_transport()?;

        Ok(Self {
            api_key: self.api_key.clone(),
            tariffs_endpoint: self.tariffs_endpoint.clone(),
            acquire_endpoint: self.acquire_endpoint.clone(),
            states_endpoint: self.states_endpoint.clone(),
            settings,
            http: Arc::new(http),
        })
    }

    /// Fetch the tariff catalog.
    ///
    /// Only the filters set in `query` are sent; this endpoint requires no
    /// authentication and the API key is not attached.
    ///
    /// Errors:
    /// - [`OnlinesimError::Transport`] on network failure or non-2xx status,
    /// - [`OnlinesimError::Decode`] when the body is not the expected JSON.
    pub async fn get_tariffs(&self, query: &TariffsQuery) -> Result<TariffsResult, OnlinesimError> {
        let params = crate::transport::encode_tariffs_query(query);
        let body = self.get_checked(&self.tariffs_endpoint, params, false).await?;
        crate::transport::decode_tariffs_json_response(&body).map_err(OnlinesimError::Decode)
    }

    /// Acquire a phone number for `service` in country `country`.
    ///
    /// Neither input is validated locally against the remote catalog. The
    /// request always asks for the number to be returned (`number=true`)
    /// and authenticates twice, as a query parameter and as a bearer
    /// header; the service's auth behavior differs between endpoints and
    /// dropping either form risks a silent authentication failure.
    ///
    /// A decoded response may still be a refusal; inspect
    /// [`NumberAcquisition::response`] and
    /// [`NumberAcquisition::response_text`].
    pub async fn acquire_number(
        &self,
        service: &str,
        country: u32,
    ) -> Result<NumberAcquisition, OnlinesimError> {
        let params = crate::transport::encode_acquire_number_query(service, country, &self.api_key);
        let body = self.get_checked(&self.acquire_endpoint, params, true).await?;
        crate::transport::decode_acquire_number_json_response(&body).map_err(OnlinesimError::Decode)
    }

    /// Fetch the status records for a previous acquisition.
    ///
    /// `tzid` is the tracking id returned by [`OnlinesimClient::acquire_number`];
    /// `message_to_code` is passed through to the server unmodified. Records
    /// come back in server order, and an empty list is a valid result
    /// (no states yet), not an error.
    pub async fn get_number_states(
        &self,
        tzid: i64,
        message_to_code: i64,
    ) -> Result<Vec<NumberState>, OnlinesimError> {
        let params =
            crate::transport::encode_number_states_query(tzid, message_to_code, &self.api_key);
        let body = self.get_checked(&self.states_endpoint, params, true).await?;
        crate::transport::decode_number_states_json_response(&body).map_err(OnlinesimError::Decode)
    }

    async fn get_checked(
        &self,
        url: &str,
        params: Vec<(String, String)>,
        authenticated: bool,
    ) -> Result<String, OnlinesimError> {
        let bearer = if authenticated {
            Some(self.api_key.as_str())
        } else {
            None
        };

        let response = self
            .http
            .get(url, params, bearer)
            .await
            .map_err(OnlinesimError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(OnlinesimError::Transport(Box::new(HttpStatusError {
                status: response.status,
                body,
            })));
        }

        Ok(response.body)
    }
}

fn join_endpoint(base: &str, file: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{file}")
    } else {
        format!("{base}/{file}")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last_url: Option<String>,
        last_query: Vec<(String, String)>,
        last_bearer: Option<Option<String>>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_url: None,
                    last_query: Vec::new(),
                    last_bearer: None,
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn last_request(&self) -> (Option<String>, Vec<(String, String)>, Option<Option<String>>) {
            let state = self.state.lock().unwrap();
            (
                state.last_url.clone(),
                state.last_query.clone(),
                state.last_bearer.clone(),
            )
        }
    }

    impl HttpTransport for FakeTransport {
        fn get<'a>(
            &'a self,
            url: &'a str,
            query: Vec<(String, String)>,
            bearer_token: Option<&'a str>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.last_url = Some(url.to_owned());
                    state.last_query = query;
                    state.last_bearer = Some(bearer_token.map(str::to_owned));
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse { status, body })
            })
        }
    }

    fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    fn assert_no_param(params: &[(String, String)], key: &str) {
        assert!(
            params.iter().all(|(k, _)| k != key),
            "unexpected param {key}; got: {params:?}"
        );
    }

    fn make_client(api_key: &str, transport: FakeTransport) -> OnlinesimClient {
        OnlinesimClient {
            api_key: ApiKey::new(api_key),
            tariffs_endpoint: "https://example.invalid/api/getTariffs.php".to_owned(),
            acquire_endpoint: "https://example.invalid/api/getNum.php".to_owned(),
            states_endpoint: "https://example.invalid/api/getState.php".to_owned(),
            settings: TransportSettings::default(),
            http: Arc::new(transport),
        }
    }

    const TARIFFS_JSON: &str = r#"
    {
      "response": "1",
      "countries": {
        "1": {
          "name": "Russia",
          "code": 7,
          "pos": 1,
          "other": false,
          "new": false,
          "enable": true
        }
      },
      "services": {},
      "page": 1,
      "country": 0,
      "filter": "",
      "subscription_tariffs": [],
      "end": true
    }
    "#;

    #[tokio::test]
    async fn get_tariffs_sends_only_set_filters_and_no_auth() {
        let transport = FakeTransport::new(200, TARIFFS_JSON);
        let client = make_client("test_key", transport.clone());

        let query = TariffsQuery {
            filter_service: Some("whatsapp".to_owned()),
            lang: Some("en".to_owned()),
            country: Some(String::new()),
            ..Default::default()
        };
        client.get_tariffs(&query).await.unwrap();

        let (url, params, bearer) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/api/getTariffs.php")
        );
        assert_param(&params, "filter_service", "whatsapp");
        assert_param(&params, "lang", "en");
        assert_no_param(&params, "country");
        assert_no_param(&params, "apikey");
        assert_eq!(bearer, Some(None));
    }

    #[tokio::test]
    async fn get_tariffs_parses_catalog() {
        let transport = FakeTransport::new(200, TARIFFS_JSON);
        let client = make_client("test_key", transport);

        let result = client.get_tariffs(&TariffsQuery::new()).await.unwrap();
        assert_eq!(result.response, "1");
        assert!(result.end);
        assert_eq!(result.countries.get("1").unwrap().name, "Russia");
        assert_eq!(result.countries.get("1").unwrap().code, 7);
        assert!(result.services.is_empty());
        assert!(result.subscription_tariffs.is_empty());
    }

    #[tokio::test]
    async fn acquire_number_sends_number_flag_and_double_auth() {
        let json = r#"
        {
          "response": 1,
          "tzid": 123,
          "number": "79990001122",
          "country": 7,
          "time": 60,
          "service": "whatsapp",
          "title": "WhatsApp",
          "response_text": "ok"
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client("test_key", transport.clone());

        let acquisition = client.acquire_number("whatsapp", 7).await.unwrap();
        assert_eq!(acquisition.response, 1);
        assert_eq!(acquisition.tzid, 123);
        assert_eq!(acquisition.number, "79990001122");
        assert_eq!(acquisition.title, "WhatsApp");

        let (url, params, bearer) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/api/getNum.php")
        );
        assert_param(&params, "service", "whatsapp");
        assert_param(&params, "country", "7");
        assert_param(&params, "number", "true");
        assert_param(&params, "apikey", "test_key");
        assert_eq!(bearer, Some(Some("test_key".to_owned())));
    }

    #[tokio::test]
    async fn acquire_number_returns_refusal_payload_as_ok() {
        let json = r#"{"response": 0, "response_text": "no free numbers"}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client("test_key", transport);

        let acquisition = client.acquire_number("whatsapp", 7).await.unwrap();
        assert_eq!(acquisition.response, 0);
        assert_eq!(acquisition.response_text, "no free numbers");
        assert_eq!(acquisition.number, "");
    }

    #[tokio::test]
    async fn get_number_states_sends_tracking_params() {
        let transport = FakeTransport::new(200, "[]");
        let client = make_client("test_key", transport.clone());

        let states = client.get_number_states(123, 1).await.unwrap();
        assert!(states.is_empty());

        let (url, params, bearer) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/api/getState.php")
        );
        assert_param(&params, "tzid", "123");
        assert_param(&params, "message_to_code", "1");
        assert_param(&params, "apikey", "test_key");
        assert_eq!(bearer, Some(Some("test_key".to_owned())));
    }

    #[tokio::test]
    async fn get_number_states_preserves_server_order() {
        let json = r#"
        [
          {"tzid": 123, "response": "TZ_NUM_WAIT", "form": "wait", "msg": ""},
          {"tzid": 123, "response": "TZ_NUM_ANSWER", "form": "answer", "msg": "4821"}
        ]
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client("test_key", transport);

        let states = client.get_number_states(123, 1).await.unwrap();
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].response, "TZ_NUM_WAIT");
        assert_eq!(states[1].msg, "4821");
    }

    #[tokio::test]
    async fn all_operations_map_malformed_json_to_decode_error() {
        let transport = FakeTransport::new(200, r#"{"response": "1", "countr"#);
        let client = make_client("test_key", transport);

        let err = client.get_tariffs(&TariffsQuery::new()).await.unwrap_err();
        assert!(matches!(err, OnlinesimError::Decode(_)));

        let err = client.acquire_number("whatsapp", 7).await.unwrap_err();
        assert!(matches!(err, OnlinesimError::Decode(_)));

        let err = client.get_number_states(123, 1).await.unwrap_err();
        assert!(matches!(err, OnlinesimError::Decode(_)));
    }

    #[tokio::test]
    async fn non_success_http_status_maps_to_transport_error() {
        let transport = FakeTransport::new(503, "service unavailable");
        let client = make_client("test_key", transport);

        let err = client.get_tariffs(&TariffsQuery::new()).await.unwrap_err();
        match err {
            OnlinesimError::Transport(source) => {
                let status = source
                    .downcast_ref::<HttpStatusError>()
                    .expect("expected HttpStatusError");
                assert_eq!(status.status, 503);
                assert_eq!(status.body.as_deref(), Some("service unavailable"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_status_error_with_blank_body_carries_none() {
        let transport = FakeTransport::new(500, "   ");
        let client = make_client("test_key", transport);

        let err = client.acquire_number("whatsapp", 7).await.unwrap_err();
        match err {
            OnlinesimError::Transport(source) => {
                let status = source
                    .downcast_ref::<HttpStatusError>()
                    .expect("expected HttpStatusError");
                assert_eq!(status.status, 500);
                assert_eq!(status.body, None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn with_proxy_rejects_malformed_url_and_leaves_client_untouched() {
        let transport = FakeTransport::new(200, "[]");
        let client = make_client("test_key", transport.clone());

        let err = client
            .with_proxy("not a url with spaces and://bad")
            .unwrap_err();
        assert!(matches!(err, OnlinesimError::InvalidProxyUrl(_)));

        // The original client still runs on its previous transport.
        client.get_number_states(123, 1).await.unwrap();
        let (url, _, _) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/api/getState.php")
        );
    }

    #[tokio::test]
    async fn with_proxy_rejects_unsupported_scheme() {
        let transport = FakeTransport::new(200, "[]");
        let client = make_client("test_key", transport);

        let err = client.with_proxy("mailto:ops@example.invalid").unwrap_err();
        assert!(matches!(err, OnlinesimError::InvalidProxyUrl(_)));
    }

    #[test]
    fn with_proxy_returns_new_client_and_keeps_settings() {
        let client = OnlinesimClient::builder("key")
            .timeout(Duration::from_secs(30))
            .user_agent("onlinesim-tests/1.0")
            .build()
            .unwrap();

        let proxied = client.with_proxy("http://127.0.0.1:8080").unwrap();
        assert!(client.settings.proxy.is_none());
        assert_eq!(
            proxied.settings.proxy.as_ref().map(ProxyUrl::as_str),
            Some("http://127.0.0.1:8080/")
        );
        assert_eq!(proxied.settings.timeout, Some(Duration::from_secs(30)));
        assert_eq!(
            proxied.settings.user_agent.as_deref(),
            Some("onlinesim-tests/1.0")
        );
    }

    #[test]
    fn builder_endpoint_overrides_are_applied() {
        let client = OnlinesimClient::builder("key")
            .base_url("https://example.invalid/api")
            .build()
            .unwrap();
        assert_eq!(
            client.tariffs_endpoint,
            "https://example.invalid/api/getTariffs.php"
        );
        assert_eq!(
            client.acquire_endpoint,
            "https://example.invalid/api/getNum.php"
        );
        assert_eq!(
            client.states_endpoint,
            "https://example.invalid/api/getState.php"
        );

        let client = OnlinesimClient::builder("key")
            .states_endpoint("https://example.invalid/v2/state")
            .build()
            .unwrap();
        assert_eq!(client.states_endpoint, "https://example.invalid/v2/state");
        assert_eq!(
            client.tariffs_endpoint,
            "https://onlinesim.io/api/getTariffs.php"
        );
    }

    #[test]
    fn builder_proxy_is_applied_at_build_time() {
        let proxy = ProxyUrl::parse("socks5://127.0.0.1:1080").unwrap();
        let client = OnlinesimClient::builder("key").proxy(proxy).build().unwrap();
        assert_eq!(
            client.settings.proxy.as_ref().map(ProxyUrl::as_str),
            Some("socks5://127.0.0.1:1080")
        );
    }

    mod wire {
        use httpmock::prelude::*;
        use serde_json::json;

        use super::*;

        #[tokio::test]
        async fn acquire_number_sends_bearer_header_and_query_on_the_wire() {
            let server = MockServer::start_async().await;
            let mock = server
                .mock_async(|when, then| {
                    when.method(GET)
                        .path("/api/getNum.php")
                        .query_param("service", "whatsapp")
                        .query_param("country", "7")
                        .query_param("number", "true")
                        .query_param("apikey", "test_key")
                        .header("authorization", "Bearer test_key");
                    then.status(200).json_body(json!({
                        "response": 1,
                        "tzid": 123,
                        "number": "79990001122",
                        "country": 7,
                        "time": 60,
                        "service": "whatsapp",
                        "title": "WhatsApp",
                        "response_text": "ok"
                    }));
                })
                .await;

            let client = OnlinesimClient::builder("test_key")
                .base_url(server.url("/api/"))
                .build()
                .unwrap();

            let acquisition = client.acquire_number("whatsapp", 7).await.unwrap();
            assert_eq!(acquisition.number, "79990001122");
            assert_eq!(acquisition.tzid, 123);
            mock.assert_async().await;
        }

        #[tokio::test]
        async fn get_tariffs_round_trips_over_http() {
            let server = MockServer::start_async().await;
            let mock = server
                .mock_async(|when, then| {
                    when.method(GET)
                        .path("/api/getTariffs.php")
                        .query_param("lang", "en");
                    then.status(200).json_body(json!({
                        "response": "1",
                        "countries": {
                            "1": {"name": "Russia", "code": 7, "pos": 1,
                                  "other": false, "new": false, "enable": true}
                        },
                        "services": {},
                        "page": 1,
                        "country": 0,
                        "filter": "",
                        "subscription_tariffs": [],
                        "end": true
                    }));
                })
                .await;

            let client = OnlinesimClient::builder("test_key")
                .base_url(server.url("/api/"))
                .build()
                .unwrap();

            let query = TariffsQuery {
                lang: Some("en".to_owned()),
                ..Default::default()
            };
            let result = client.get_tariffs(&query).await.unwrap();
            assert_eq!(result.countries.get("1").unwrap().name, "Russia");
            assert!(result.end);
            mock.assert_async().await;
        }

        #[tokio::test]
        async fn get_number_states_round_trips_empty_list() {
            let server = MockServer::start_async().await;
            let mock = server
                .mock_async(|when, then| {
                    when.method(GET)
                        .path("/api/getState.php")
                        .query_param("tzid", "123")
                        .query_param("message_to_code", "1")
                        .header("authorization", "Bearer test_key");
                    then.status(200).body("[]");
                })
                .await;

            let client = OnlinesimClient::builder("test_key")
                .base_url(server.url("/api/"))
                .build()
                .unwrap();

            let states = client.get_number_states(123, 1).await.unwrap();
            assert!(states.is_empty());
            mock.assert_async().await;
        }
    }
}
