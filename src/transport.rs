//! HTTP transport collaborator.
//!
//! The client talks to the network through the [`Transport`] trait so tests
//! can substitute a counting or failing transport. [`HttpTransport`] is the
//! default implementation on top of `reqwest::blocking`.

use reqwest::blocking::multipart;
use reqwest::{Method, StatusCode};

use crate::error::ApiResult;

/// Raw outcome of a single HTTP round trip.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TransportResponse {
    /// Whether the response carries a 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// A single blocking HTTP request.
///
/// `data` holds form fields; an empty slice means no request body. Body
/// encoding (multipart) is this collaborator's concern, not the caller's.
pub trait Transport: Send + Sync {
    fn request(
        &self,
        method: Method,
        uri: &str,
        data: &[(String, String)],
        headers: &[(String, String)],
    ) -> ApiResult<TransportResponse>;
}

/// Default transport backed by a blocking reqwest client.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn request(
        &self,
        method: Method,
        uri: &str,
        data: &[(String, String)],
        headers: &[(String, String)],
    ) -> ApiResult<TransportResponse> {
        log::debug!("{} {}", method, uri);

        let mut request = self.client.request(method, uri);
        for (name, value) in headers {
            request = request.header(name, value);
        }
        if !data.is_empty() {
            let mut form = multipart::Form::new();
            for (name, value) in data {
                form = form.text(name.clone(), value.clone());
            }
            request = request.multipart(form);
        }

        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            log::warn!("Request to {} failed with {}: {}", uri, status, body);
        }

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
