use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::trello::error::{TrelloError, TrelloResult};

/// Public Trello REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameters for a single request.
///
/// Optional inputs that are absent or empty are never sent. Credentials are
/// appended by the client and cannot be supplied here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always send `key=value`.
    pub fn set(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Send `key=value` only when `value` is present and not empty.
    pub fn opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value.map(|v| v.to_string()) {
            Some(v) if !v.is_empty() => self.set(key, v),
            _ => self,
        }
    }

    /// Send `key=null`, the remote's way of clearing a field.
    pub fn null(self, key: &str) -> Self {
        self.set(key, "null")
    }

    /// Send a comma-joined list, even when empty.
    pub fn list(self, key: &str, values: &[String]) -> Self {
        self.set(key, values.join(","))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Authenticated gateway to the Trello REST API.
///
/// Holds one pooled HTTP client for the process lifetime; cloning the
/// surrounding `Arc` is how callers share it.
pub struct TrelloClient {
    base_url: String,
    api_key: String,
    api_token: String,
    http: Client,
}

impl TrelloClient {
    /// Create a client against the public Trello endpoint.
    ///
    /// Fails with a configuration error, before any network activity, when
    /// either credential is empty.
    pub fn new(api_key: impl Into<String>, api_token: impl Into<String>) -> TrelloResult<Self> {
        Self::with_base_url(api_key, api_token, DEFAULT_BASE_URL)
    }

    pub fn from_config(config: &Config) -> TrelloResult<Self> {
        Self::with_base_url(&config.api_key, &config.api_token, &config.base_url)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        api_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> TrelloResult<Self> {
        let api_key = api_key.into();
        let api_token = api_token.into();

        let missing: Vec<&str> = [("TRELLO_API_KEY", &api_key), ("TRELLO_API_TOKEN", &api_token)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();
        if !missing.is_empty() {
            return Err(TrelloError::Configuration {
                message: format!("{} not set", missing.join(" and ")),
            });
        }

        // reqwest is built without a bundled provider
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TrelloError::Configuration {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            api_token,
            http,
        })
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Release the pooled connections.
    pub fn close(self) {
        debug!(base_url = %self.base_url, "Closing Trello client");
        drop(self.http);
    }

    /// Close a shared client once its last other holder is gone.
    ///
    /// Returns `false`, leaving the pool to drop with the remaining holders,
    /// when the client is still shared.
    pub fn release(self: Arc<Self>) -> bool {
        match Arc::try_unwrap(self) {
            Ok(client) => {
                client.close();
                true
            }
            Err(shared) => {
                debug!(
                    holders = Arc::strong_count(&shared),
                    "Trello client still shared at release"
                );
                false
            }
        }
    }

    /// Credentials merged after caller parameters; caller `key`/`token` are dropped.
    fn authenticated(&self, query: &Query) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = query
            .pairs()
            .iter()
            .filter(|(k, _)| k != "key" && k != "token")
            .cloned()
            .collect();
        pairs.push(("key".to_string(), self.api_key.clone()));
        pairs.push(("token".to_string(), self.api_token.clone()));
        pairs
    }

    /// Build a request whose path segments are percent-encoded individually.
    ///
    /// Ids are caller input, so empty, `.` and `..` segments are refused
    /// before they can change which endpoint is addressed.
    pub(crate) fn builder(
        &self,
        method: Method,
        segments: &[&str],
        query: &Query,
    ) -> TrelloResult<RequestBuilder> {
        if let Some(segment) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(TrelloError::InvalidPath {
                segment: segment.to_string(),
            });
        }

        let mut url = Url::parse(&self.base_url).map_err(|e| TrelloError::Configuration {
            message: format!("invalid base URL {}: {e}", self.base_url),
        })?;
        url.path_segments_mut()
            .map_err(|_| TrelloError::Configuration {
                message: format!("base URL {} cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(self
            .http
            .request(method, url)
            .query(&self.authenticated(query)))
    }

    /// Send a request and map transport failures and non-2xx statuses.
    pub(crate) async fn send(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> TrelloResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| TrelloError::from_transport(e, endpoint))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            debug!(endpoint, status = status.as_u16(), "Trello request failed");
            Err(TrelloError::from_status(status.as_u16(), endpoint))
        }
    }

    /// Decode a successful JSON response.
    pub(crate) async fn decode<T: DeserializeOwned>(
        response: Response,
        endpoint: &str,
    ) -> TrelloResult<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TrelloError::from_transport(e, endpoint))?;
        serde_json::from_slice(&bytes).map_err(|e| TrelloError::InvalidResponse {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }

    /// Issue one authenticated call and decode its JSON body.
    #[instrument(skip(self, query, body))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        query: Query,
        body: Option<&serde_json::Value>,
    ) -> TrelloResult<T> {
        let endpoint = endpoint(segments);
        let mut builder = self.builder(method, segments, &query)?;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = self.send(builder, &endpoint).await?;
        Self::decode(response, &endpoint).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> TrelloResult<T> {
        self.request(Method::GET, segments, Query::new(), None).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: Query,
    ) -> TrelloResult<T> {
        self.request(Method::POST, segments, query, None).await
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: Query,
    ) -> TrelloResult<T> {
        self.request(Method::PUT, segments, query, None).await
    }

    pub(crate) async fn delete(&self, segments: &[&str]) -> TrelloResult<serde_json::Value> {
        self.request(Method::DELETE, segments, Query::new(), None)
            .await
    }
}

/// Readable `/a/b` form of a path, used in logs and error messages.
pub(crate) fn endpoint(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}
