//! API client layer
//!
//! Every operation is exactly one request/response pair: no retries, no
//! caching, no idempotency keys. Callers re-fetch to observe side effects.
//!
//! ```rust,no_run
//! use autosupport_console::{Client, ClientConfig, TicketQuery, TicketStatus};
//!
//! # async fn run() -> autosupport_console::Result<()> {
//! let client = Client::new(ClientConfig::default())?;
//! let open = client.tickets().list(&TicketQuery::with_status(Some(TicketStatus::Open))).await?;
//! let snapshot = client.analytics().dashboard().await?;
//! # Ok(())
//! # }
//! ```

pub mod agents;
pub mod analytics;
pub mod ml;
pub mod tickets;

use std::sync::Arc;

use reqwest::{header, Method, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

pub use agents::AgentsService;
pub use analytics::AnalyticsService;
pub use ml::MlService;
pub use tickets::TicketsService;

/// Crate version, sent in the user agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Support API client
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    /// Build a client; the base URL and default headers are fixed from here on
    pub fn new(mut config: ClientConfig) -> Result<Self> {
        let trimmed = config.base_url.trim_end_matches('/').len();
        config.base_url.truncate(trimmed);
        Url::parse(&config.base_url)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, header::HeaderValue::from_static("application/json"));
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        let agent = header::HeaderValue::from_str(&format!("autosupport-console/{}", VERSION))
            .map_err(|e| Error::Config(e.to_string()))?;
        headers.insert(header::USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { inner: Arc::new(ClientInner { config, http }) })
    }

    /// Client against `base_url` with default settings
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig { base_url: base_url.into(), ..Default::default() })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.config.base_url
    }

    pub fn tickets(&self) -> TicketsService {
        TicketsService::new(self.clone())
    }

    pub fn agents(&self) -> AgentsService {
        AgentsService::new(self.clone())
    }

    pub fn analytics(&self) -> AnalyticsService {
        AnalyticsService::new(self.clone())
    }

    pub fn ml(&self) -> MlService {
        MlService::new(self.clone())
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        self.request(Method::GET, path, None::<&()>, params).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
        params: &[(&str, String)],
    ) -> Result<T> {
        self.request(Method::POST, path, body, params).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::PUT, path, Some(body), &[]).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.request::<Option<serde_json::Value>, ()>(Method::DELETE, path, None, &[])
            .await
            .map(|_| ())
    }

    fn url(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.inner.config.base_url, path))?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(path, params)?;
        tracing::debug!(%method, %url, "sending request");

        let mut request = self.inner.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(%method, %url, status = status.as_u16(), "response received");

        if status == StatusCode::NO_CONTENT {
            return Ok(serde_json::from_str("null")?);
        }

        let body_bytes = response.bytes().await?;

        if status.is_success() {
            if body_bytes.is_empty() {
                return Ok(serde_json::from_str("null")?);
            }
            return Ok(serde_json::from_slice(&body_bytes)?);
        }

        Err(api_error(status, &body_bytes))
    }
}

/// Build an [`Error::Api`] from a FastAPI-style `{"detail": ...}` body
fn api_error(status: StatusCode, body: &[u8]) -> Error {
    #[derive(Deserialize)]
    struct ErrorResponse {
        detail: serde_json::Value,
    }

    let message = match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(ErrorResponse { detail: serde_json::Value::String(detail) }) => detail,
        _ if body.is_empty() => status.canonical_reason().unwrap_or("request failed").to_string(),
        _ => String::from_utf8_lossy(body).to_string(),
    };

    Error::Api { status_code: status.as_u16(), message }
}
