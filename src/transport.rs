//! The send-a-request, get-bytes-and-status seam.
//!
//! [`Transport`] is the only place network I/O happens. [`ReqwestTransport`]
//! is the production implementation; tests substitute scripted transports.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Method;

use crate::error::NetworkError;
use crate::request::{HttpMethod, HttpRequest};

/// A raw HTTP response: status code plus body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 200..=299.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Sends a wire-level request and returns whatever the server answered.
///
/// Implementations report only transport-level failures; interpreting the
/// status code is the caller's job.
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, NetworkError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, NetworkError> {
        (**self).send(request)
    }
}

// ---------------------------------------------------------------------------
// ReqwestTransport
// ---------------------------------------------------------------------------

/// Blocking `reqwest` transport. No retries; the timeout applies per request.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| NetworkError::Unknown(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an already-configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, NetworkError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let resp = builder.send().map_err(classify)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(|e| {
            tracing::warn!(url = %request.url, error = %e, "failed to read response body");
            NetworkError::InvalidResponse
        })?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Patch => Method::PATCH,
    }
}

/// Map a `reqwest` failure onto the network error taxonomy.
fn classify(err: reqwest::Error) -> NetworkError {
    if err.is_timeout() {
        NetworkError::Timeout
    } else if err.is_connect() {
        NetworkError::NoInternet
    } else if err.is_body() || err.is_decode() {
        NetworkError::InvalidResponse
    } else {
        NetworkError::Unknown(err.to_string())
    }
}
