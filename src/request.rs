//! Declarative request descriptors and the pure function that materializes them.
//!
//! A [`RequestDescriptor`] is plain data: base path, path, method and the
//! optional header, query and body maps. [`build_request`] turns it into an
//! [`HttpRequest`] ready for a [`Transport`](crate::transport::Transport)
//! without touching the descriptor.
//!
//! # Example
//!
//! ```rust
//! use coinranking_sdk::request::{build_request, HttpMethod, RequestDescriptor};
//!
//! let descriptor = RequestDescriptor::new("https://api.coinranking.com/v2", "/coins", HttpMethod::Get)
//!     .with_query("limit", "20")
//!     .with_query("offset", "0");
//! let request = build_request(&descriptor).unwrap();
//! assert_eq!(request.url.as_str(), "https://api.coinranking.com/v2/coins?limit=20&offset=0");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::error::RequestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RequestDescriptor
// ---------------------------------------------------------------------------

/// An HTTP call described as immutable data, before it is materialized.
///
/// `headers`, `query_params` and `body_params` are independent: a `None` map
/// and an empty map both mean "send nothing".
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub base_path: String,
    pub path: String,
    pub method: HttpMethod,
    pub headers: Option<BTreeMap<String, String>>,
    pub query_params: Option<BTreeMap<String, String>>,
    pub body_params: Option<Map<String, Value>>,
}

impl RequestDescriptor {
    pub fn new(base_path: &str, path: &str, method: HttpMethod) -> Self {
        Self {
            base_path: base_path.to_string(),
            path: path.to_string(),
            method,
            headers: None,
            query_params: None,
            body_params: None,
        }
    }

    /// Add a header, sent verbatim.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Add a query parameter. Key and value are percent-encoded at build time.
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query_params
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Replace the query parameters wholesale.
    pub fn with_query_params(mut self, params: BTreeMap<String, String>) -> Self {
        self.query_params = Some(params);
        self
    }

    /// Add a single JSON body field.
    pub fn with_body_param(mut self, key: &str, value: Value) -> Self {
        self.body_params
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value);
        self
    }

    /// Use a serializable value as the body parameters.
    ///
    /// The value must serialize to a JSON object; anything else (arrays,
    /// scalars, maps with non-string keys) fails with
    /// [`RequestError::InvalidBody`].
    pub fn json_body<T: Serialize>(mut self, body: &T) -> Result<Self, RequestError> {
        let value = serde_json::to_value(body)
            .map_err(|e| RequestError::InvalidBody(format!("failed to serialize body: {e}")))?;
        match value {
            Value::Object(map) => {
                self.body_params = Some(map);
                Ok(self)
            }
            other => Err(RequestError::InvalidBody(format!(
                "body parameters must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// HttpRequest
// ---------------------------------------------------------------------------

/// A wire-ready HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Materialize a descriptor into a wire-level request.
///
/// The only failure modes are an unconstructible URL
/// ([`RequestError::InvalidUrl`]) and a body that cannot be serialized
/// ([`RequestError::InvalidBody`]). Everything network-level belongs to the
/// transport.
pub fn build_request(descriptor: &RequestDescriptor) -> Result<HttpRequest, RequestError> {
    let raw = format!("{}{}", descriptor.base_path, descriptor.path);
    let mut url = Url::parse(&raw)
        .map_err(|e| RequestError::InvalidUrl(format!("{raw}: {e}")))?;

    if let Some(params) = descriptor.query_params.as_ref().filter(|p| !p.is_empty()) {
        if url.cannot_be_a_base() {
            return Err(RequestError::InvalidUrl(format!(
                "{raw}: cannot attach query parameters"
            )));
        }
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&query));
    }

    let mut headers: Vec<(String, String)> = descriptor
        .headers
        .iter()
        .flatten()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    let body = match &descriptor.body_params {
        Some(params) => {
            let bytes = serde_json::to_vec(params)
                .map_err(|e| RequestError::InvalidBody(e.to_string()))?;
            headers.retain(|(k, _)| !k.eq_ignore_ascii_case("content-type"));
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
            Some(bytes)
        }
        None => None,
    };

    Ok(HttpRequest {
        method: descriptor.method,
        url,
        headers,
        body,
    })
}

/// Percent-encode a query key or value. Spaces become `%20`, never `+`.
fn encode_component(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
