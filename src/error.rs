//! Error taxonomy for the Coinranking SDK.
//!
//! Failures are split by where they happen: [`RequestError`] before any I/O,
//! [`NetworkError`] during or after the HTTP round-trip, and [`StorageError`]
//! in the local favorites database. [`CoinRankingError`] wraps all three.

/// Failures while turning a [`RequestDescriptor`](crate::request::RequestDescriptor)
/// into a wire-level request. No network I/O has happened yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("The URL is invalid: {0}")]
    InvalidUrl(String),

    #[error("The body of the request is invalid: {0}")]
    InvalidBody(String),
}

/// Failures during or after the HTTP round-trip.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("No internet connection.")]
    NoInternet,

    #[error("The request timed out.")]
    Timeout,

    #[error("The server encountered an error (status {0}).")]
    ServerError(u16),

    #[error("Unauthorized access. Check the access token.")]
    Unauthorized,

    #[error("Failed to decode response data: {0}")]
    Decoding(#[source] serde_json::Error),

    #[error("The server's response was invalid.")]
    InvalidResponse,

    #[error("An unknown network error occurred: {0}")]
    Unknown(String),
}

/// Failures in the local favorites database.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CoinRankingError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CoinRankingError {
    /// Whether retrying the same call later could reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CoinRankingError::Network(NetworkError::NoInternet | NetworkError::Timeout)
        )
    }
}

impl From<duckdb::Error> for CoinRankingError {
    fn from(err: duckdb::Error) -> Self {
        CoinRankingError::Storage(StorageError::DuckDb(err))
    }
}

impl From<std::io::Error> for CoinRankingError {
    fn from(err: std::io::Error) -> Self {
        CoinRankingError::Storage(StorageError::Io(err))
    }
}

pub type Result<T> = std::result::Result<T, CoinRankingError>;
