//! Fetch pipeline: descriptor → request → transport → typed model.

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{NetworkError, Result};
use crate::processor;
use crate::request::{build_request, RequestDescriptor};
use crate::transport::Transport;

/// Composes request building, the transport and decoding into one call.
///
/// Stateless between calls: no caching, no deduplication, no retry.
pub struct ApiClient {
    config: ApiConfig,
    transport: Box<dyn Transport>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, transport: Box<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Resolve a descriptor into `M`.
    ///
    /// Request construction failures propagate as
    /// [`RequestError`](crate::error::RequestError); a non-2xx status becomes
    /// [`NetworkError::ServerError`]; decode failures become
    /// [`NetworkError::Decoding`].
    pub fn fetch<M: DeserializeOwned>(&self, descriptor: &RequestDescriptor) -> Result<M> {
        let request = build_request(descriptor)?;
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let response = self.transport.send(&request)?;
        if !response.is_success() {
            tracing::warn!(url = %request.url, status = response.status, "non-success status");
            return Err(NetworkError::ServerError(response.status).into());
        }

        Ok(processor::decode(&response.body)?)
    }
}
