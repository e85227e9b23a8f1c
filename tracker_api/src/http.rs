//! Default [`Connection`] backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use url::Url;

use crate::{
    connection::{Connection, Method, Request, Response},
    Error,
};

pub const DEFAULT_BASE_URL: &str = "https://www.pivotaltracker.com/services/v5";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const TOKEN_HEADER: &str = "x-trackertoken";

/// Connection settings for [`HttpConnection`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Sent as `X-TrackerToken` when present.
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Reads `TRACKER_BASE_URL`, `TRACKER_API_TOKEN` and `TRACKER_TIMEOUT_SECS`,
    /// falling back to the defaults for anything unset, empty or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();
        if let Some(base_url) = non_empty("TRACKER_BASE_URL") {
            config.base_url = base_url;
        }
        config.api_token = non_empty("TRACKER_API_TOKEN");
        if let Some(secs) =
            non_empty("TRACKER_TIMEOUT_SECS").and_then(|v| v.trim().parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    pub fn with_api_token(mut self, token: &str) -> Self {
        self.api_token = Some(token.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP transport for the tracker API.
///
/// Holds one `reqwest::Client`, so it is cheap to share behind an `Arc` and
/// safe to use from concurrent tasks.
pub struct HttpConnection {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<HeaderValue>,
}

impl HttpConnection {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(Error::transport)?;
        let api_token = config
            .api_token
            .as_deref()
            .map(|token| {
                let mut value = HeaderValue::from_str(token)
                    .map_err(|_| Error::InvalidRequest("API token is not a valid header value".to_string()))?;
                value.set_sensitive(true);
                Ok::<_, Error>(value)
            })
            .transpose()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }

    /// Creates an unauthenticated connection with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Connection for HttpConnection {
    fn create_request(
        &self,
        method: Method,
        path: &str,
        params: &[(String, String)],
    ) -> Result<Request, Error> {
        let mut url = Url::parse(format!("{}{}", self.base_url, path).as_str())
            .map_err(|e| Error::InvalidRequest(format!("invalid URL for {}: {}", path, e)))?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        let mut request = Request::new(method, url);
        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.api_token {
            headers.insert(TOKEN_HEADER, token.clone());
        }
        Ok(request)
    }

    async fn round_trip(&self, mut request: Request) -> Result<Response, Error> {
        let method = request.method();
        let body = request.take_body();
        let mut builder = self
            .client
            .request(method.into(), request.url().clone())
            .headers(request.headers().clone());
        if let Some(body) = body {
            builder = builder.body(body);
        }

        tracing::debug!("{} {}", method, request.url());
        let resp = builder.send().await.map_err(|e| {
            tracing::warn!("{} {} failed: {}", method, request.url(), e);
            Error::transport(e)
        })?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(|e| {
            tracing::warn!("Failed to read response body: {}", e);
            Error::transport(e)
        })?;
        tracing::debug!("{} {} -> {}", method, request.url(), status);

        Ok(Response {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
