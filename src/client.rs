//! Imgur API client: credential selection, URI building, and the cached
//! query engine all resource operations go through.

use std::fmt;
use std::sync::{Arc, Mutex};

use reqwest::Method;
use serde_json::Value;

use crate::cache::{default_cache, Cache};
use crate::error::{ApiResult, ImgurError};
use crate::resource::{Album, Image};
use crate::transport::{HttpTransport, Transport};

/// Base endpoint every relative request path is resolved against.
pub const API_ENDPOINT: &str = "https://api.imgur.com";

/// API version segment inserted between the endpoint and the path.
pub const API_VERSION: &str = "3";

/// Outcome of the most recent query, raw and decoded.
#[derive(Debug, Clone)]
pub struct LastResponse {
    raw: String,
    decoded: Option<Value>,
}

impl LastResponse {
    /// The response body exactly as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The body decoded as JSON, or `None` if it was not valid JSON.
    pub fn decoded(&self) -> Option<&Value> {
        self.decoded.as_ref()
    }
}

/// Imgur API client.
///
/// Owns the credentials, the cache provider, and the transport. Cloning is
/// cheap: clones share the same collaborators and last-response state, so a
/// clone behaves as the same client.
#[derive(Clone)]
pub struct ImgurClient {
    client_id: String,
    client_secret: Option<String>,
    access_token: Option<String>,
    endpoint: String,
    cache: Arc<dyn Cache>,
    transport: Arc<dyn Transport>,
    last: Arc<Mutex<Option<LastResponse>>>,
}

impl ImgurClient {
    /// Create a client for anonymous (client-credential) usage.
    ///
    /// The cache provider is captured from the process-wide default at this
    /// point; switching the default later does not affect this client.
    pub fn with_client(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        let secret = client_secret.into();
        Self {
            client_id: client_id.into(),
            client_secret: (!secret.is_empty()).then_some(secret),
            access_token: None,
            endpoint: API_ENDPOINT.to_string(),
            cache: Arc::from(default_cache()),
            transport: Arc::new(HttpTransport::new()),
            last: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a client for user-authenticated usage with a bearer token.
    pub fn with_token(access_token: impl Into<String>) -> Self {
        let mut client = Self::with_client("", "");
        client.access_token = Some(access_token.into());
        client
    }

    /// Replace the base endpoint (useful for pointing at a mock server).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace the cache provider captured at construction.
    pub fn cache(mut self, cache: impl Cache + 'static) -> Self {
        self.cache = Arc::new(cache);
        self
    }

    /// Replace the transport collaborator.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// The anonymous credential derived from the client id.
    pub fn anon_token(&self) -> String {
        format!("Client-ID {}", self.client_id)
    }

    /// The client secret, if one was supplied.
    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    /// Authorization header value for the next request: the explicit bearer
    /// token when present, the anonymous Client-ID token otherwise.
    fn auth_header(&self) -> String {
        match &self.access_token {
            Some(token) => format!("Bearer {}", token),
            None => self.anon_token(),
        }
    }

    /// Absolute URIs pass through unchanged; relative paths are resolved
    /// against the endpoint and API version.
    fn resolve_uri(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}/{}",
                self.endpoint.trim_end_matches('/'),
                API_VERSION,
                path
            )
        }
    }

    /// Issue a request against the API.
    ///
    /// GET requests consult the cache first, keyed by `uri|credential`; a
    /// hit returns the prior body with no network call, and a successful
    /// miss is stored for next time. Every call updates the last-response
    /// state — a failed call clears it.
    pub fn query(&self, path: &str, method: Method, data: &[(String, String)]) -> ApiResult<String> {
        let credential = self.auth_header();
        let uri = self.resolve_uri(path);
        let cache_key = format!("{}|{}", uri, credential);

        if method == Method::GET {
            if let Some(body) = self.cache.fetch(&cache_key) {
                log::info!("Cache hit for {}", uri);
                self.record_result(&body);
                return Ok(body);
            }
            log::debug!("Cache miss for {}", uri);
        }

        let headers = [("Authorization".to_string(), credential)];
        let response = match self
            .transport
            .request(method.clone(), &uri, data, &headers)
        {
            Ok(response) => response,
            Err(e) => {
                self.clear_result();
                log::error!("Request to {} failed: {}", uri, e);
                return Err(e);
            }
        };

        if !response.is_success() {
            self.clear_result();
            return Err(ImgurError::HttpStatus(response.status));
        }

        self.record_result(&response.body);
        if method == Method::GET {
            self.cache.store(&cache_key, &response.body);
        }
        Ok(response.body)
    }

    /// Snapshot of the most recent query outcome, if the last query
    /// succeeded.
    pub fn last_response(&self) -> Option<LastResponse> {
        self.lock_last().clone()
    }

    /// Create an image resource bound to this client.
    pub fn image(&self) -> Image {
        Image::with_api(self.clone())
    }

    /// Create an album resource bound to this client.
    pub fn album(&self) -> Album {
        Album::with_api(self.clone())
    }

    fn record_result(&self, body: &str) {
        *self.lock_last() = Some(LastResponse {
            raw: body.to_string(),
            decoded: serde_json::from_str(body).ok(),
        });
    }

    fn clear_result(&self) {
        *self.lock_last() = None;
    }

    fn lock_last(&self) -> std::sync::MutexGuard<'_, Option<LastResponse>> {
        self.last
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for ImgurClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImgurClient")
            .field("client_id", &self.client_id)
            .field("has_secret", &self.client_secret.is_some())
            .field("has_token", &self.access_token.is_some())
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
