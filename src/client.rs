//! HTTP transport for the Habitica API
//!
//! The [`Client`] is the single chokepoint every API call passes through. It
//! builds authenticated requests against the configured base URL, decodes the
//! standard `{success, data, error, message}` envelope and classifies
//! failures into [`Error`](crate::Error) variants.

use crate::config::{defaults, Config};
use crate::error::{Error, Result, FALLBACK_ERROR_CODE};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub use reqwest::Method;

/// The standard response wrapper used by nearly every Habitica endpoint.
///
/// A handful of endpoints skip it and return the payload directly; the
/// transport falls back to decoding the raw body in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the API reports the call as successful
    #[serde(default)]
    pub success: bool,

    /// The payload, absent on some endpoints
    #[serde(default = "Option::default")]
    pub data: Option<T>,

    /// Error code string, set on failures
    #[serde(default)]
    pub error: String,

    /// Human-readable message accompanying `error`
    #[serde(default)]
    pub message: String,
}

/// Client for the Habitica v3 REST API
///
/// Construct one with [`Client::new`] or, for per-client overrides such as
/// the request timeout, via [`Client::builder`]. Service facades hang off it
/// as accessor methods, e.g. [`Client::tasks`](crate::services).
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    user_id: String,
    api_token: String,
    user_agent: String,
    client_id: String,
}

/// Builder for [`Client`] with per-client overrides
#[derive(Debug)]
pub struct ClientBuilder {
    config: Config,
    timeout: Duration,
    user_agent: String,
    client_id: String,
}

impl ClientBuilder {
    fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            timeout: Duration::from_secs(defaults::DEFAULT_TIMEOUT_SECS),
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
            client_id: defaults::DEFAULT_CLIENT_ID.to_string(),
        }
    }

    /// Override the absolute per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the `User-Agent` header. An empty value omits the header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the `x-client` header identifying this tool to Habitica.
    /// An empty value omits the header.
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Validate the configuration and build the client.
    pub fn build(self) -> Result<Client> {
        if self.config.base_url.is_empty() {
            return Err(Error::InvalidBaseUrl {
                url: String::new(),
                reason: "base URL must not be empty".to_string(),
            });
        }
        if self.config.user_id.is_empty() || self.config.api_token.is_empty() {
            return Err(Error::MissingCredentials);
        }

        let base_url = Url::parse(&self.config.base_url).map_err(|e| Error::InvalidBaseUrl {
            url: self.config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(Client {
            http,
            base_url,
            user_id: self.config.user_id,
            api_token: self.config.api_token,
            user_agent: self.user_agent,
            client_id: self.client_id,
        })
    }
}

impl Client {
    /// Create a client with default settings (10 second request timeout).
    pub fn new(config: &Config) -> Result<Self> {
        Self::builder(config).build()
    }

    /// Start building a client with overrides.
    #[must_use]
    pub fn builder(config: &Config) -> ClientBuilder {
        ClientBuilder::new(config)
    }

    /// The resolved base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Perform a request and decode the enveloped response into `T`.
    ///
    /// `query` pairs are appended to the URL; `body`, when present, is sent
    /// as JSON. An envelope whose `data` field is absent yields
    /// `T::default()`.
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let (status, raw) = self.send(method, path, query, body).await?;
        decode_success(status, &raw)
    }

    /// Perform a request, classify any API error, and discard the payload.
    ///
    /// Used for operations whose response body carries nothing of interest
    /// (delete, score, checklist updates).
    pub async fn request_unit<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, path, query, body).await.map(|_| ())
    }

    pub(crate) async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.request::<(), T>(Method::GET, path, query, None).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    pub(crate) async fn post_unit(&self, path: &str) -> Result<()> {
        self.request_unit::<()>(Method::POST, path, &[], None).await
    }

    pub(crate) async fn put_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.request_unit(Method::PUT, path, &[], Some(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.request_unit::<()>(Method::DELETE, path, &[], None)
            .await
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<(u16, Vec<u8>)>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path, query);
        log::debug!("{method} {url}");

        let mut req = self
            .http
            .request(method, url)
            .header("x-api-user", self.user_id.as_str())
            .header("x-api-key", self.api_token.as_str())
            .header(ACCEPT, "application/json");
        if !self.user_agent.is_empty() {
            req = req.header(USER_AGENT, self.user_agent.as_str());
        }
        if !self.client_id.is_empty() {
            req = req.header("x-client", self.client_id.as_str());
        }
        if let Some(body) = body {
            let raw = serde_json::to_vec(body).map_err(Error::BodySerialize)?;
            req = req.header(CONTENT_TYPE, "application/json").body(raw);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let raw = resp.bytes().await?;
        log::debug!("response: {status} ({} bytes)", raw.len());

        check_status(status, &raw)?;
        Ok((status, raw.to_vec()))
    }

    /// Join the configured base path with a call path and attach query pairs.
    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            self.base_url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url.set_query(None);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }
}

/// Classify a non-2xx response into an API error.
///
/// Decodes the standard envelope when possible; otherwise synthesizes an
/// error with the [`FALLBACK_ERROR_CODE`] and the trimmed raw body. When the
/// envelope carries its own message, the raw body is appended for diagnostic
/// fidelity.
fn check_status(status: u16, raw: &[u8]) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let body_text = String::from_utf8_lossy(raw);
    let trimmed = body_text.trim();

    match serde_json::from_slice::<ApiResponse<serde_json::Value>>(raw) {
        Ok(envelope) => {
            let message = if envelope.message.is_empty() {
                trimmed.to_string()
            } else {
                format!("{}; body={}", envelope.message, trimmed)
            };
            Err(Error::Api {
                status,
                code: envelope.error,
                message,
            })
        }
        Err(_) => Err(Error::Api {
            status,
            code: FALLBACK_ERROR_CODE.to_string(),
            message: trimmed.to_string(),
        }),
    }
}

/// Decode a successful response body into `T`.
///
/// Precedence: typed envelope, then the envelope's own `success`/`error`
/// fields, then a raw decode of the whole body for endpoints that skip the
/// envelope. The raw fallback triggers only when the envelope itself does
/// not decode.
fn decode_success<T>(status: u16, raw: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let envelope = match serde_json::from_slice::<ApiResponse<serde_json::Value>>(raw) {
        Ok(envelope) => envelope,
        Err(_) => return serde_json::from_slice(raw).map_err(Error::Decode),
    };

    // The API occasionally reports failure inside a 2xx response.
    if !envelope.success && !envelope.error.is_empty() {
        return Err(Error::Api {
            status,
            code: envelope.error,
            message: envelope.message,
        });
    }

    match envelope.data {
        None | Some(serde_json::Value::Null) => Ok(T::default()),
        Some(data) => serde_json::from_value(data).map_err(Error::Decode),
    }
}
