//! Generic decode step from raw response bytes to a typed model.

use serde::de::DeserializeOwned;

use crate::error::NetworkError;

/// Decode a JSON body into `M`.
///
/// Parser failures are wrapped as [`NetworkError::Decoding`] so callers never
/// see a bare `serde_json::Error`.
pub fn decode<M: DeserializeOwned>(bytes: &[u8]) -> Result<M, NetworkError> {
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::warn!(
            target_type = std::any::type_name::<M>(),
            error = %e,
            "failed to decode response body"
        );
        NetworkError::Decoding(e)
    })
}
