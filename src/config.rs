use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CoinRankingError, Result};

pub const API_BASE: &str = "https://api.coinranking.com/v2";
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Records requested per listing page.
pub const PAGE_SIZE: usize = 20;
/// Upper bound on records loaded across all listing pages (5 pages).
pub const MAX_LISTED_COINS: usize = 100;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_BASE_URL: &str = "COINRANKING_BASE_URL";
pub const ENV_ACCESS_TOKEN: &str = "COINRANKING_ACCESS_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "COINRANKING_TIMEOUT_SECS";

pub const FAVORITES_DB_FILE: &str = "favorites.duckdb";

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("coinranking-sdk")
    } else {
        PathBuf::from(".coinranking-sdk")
    }
}

pub fn default_favorites_path() -> PathBuf {
    default_data_dir().join(FAVORITES_DB_FILE)
}

/// Endpoint and credentials for the Coinranking REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every request path is appended to (no trailing slash).
    pub base_url: String,
    /// Sent as the `x-access-token` header when present.
    pub access_token: Option<String>,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE.to_string(),
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Build a config from `COINRANKING_*` environment variables, falling back
    /// to the defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        config.access_token = env::var(ENV_ACCESS_TOKEN)
            .ok()
            .filter(|token| !token.trim().is_empty());

        if let Ok(raw) = env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                CoinRankingError::InvalidArgument(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
