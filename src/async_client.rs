//! Async wrapper around [`CoinRankingSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use coinranking_sdk::{AsyncCoinRankingSdk, CoinListParams};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sdk = AsyncCoinRankingSdk::builder().build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let btc = sdk.run(|s| {
//!         s.coins().detail("Qwsogvtv82FCd", Default::default())
//!     }).await.unwrap();
//!
//!     // Convenience method for one page of the ranking
//!     let page = sdk.coin_list(CoinListParams::default()).await.unwrap();
//!
//!     sdk.close().await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{CoinRankingError, Result};
use crate::favorites::FavoriteStore;
use crate::models::{
    CoinDetailResponse, CoinListResponse, FavoriteCoin, PriceHistoryResponse, TimePeriod,
};
use crate::queries::CoinListParams;
use crate::transport::Transport;
use crate::{CoinRankingSdk, CoinRankingSdkBuilder};

// ---------------------------------------------------------------------------
// AsyncCoinRankingSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCoinRankingSdk`] instance.
#[derive(Default)]
pub struct AsyncCoinRankingSdkBuilder {
    inner: CoinRankingSdkBuilder,
}

impl AsyncCoinRankingSdkBuilder {
    /// Start from `COINRANKING_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            inner: CoinRankingSdkBuilder::from_env()?,
        })
    }

    pub fn base_url(mut self, base_url: &str) -> Self {
        self.inner = self.inner.base_url(base_url);
        self
    }

    pub fn access_token(mut self, token: &str) -> Self {
        self.inner = self.inner.access_token(token);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    pub fn favorites_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path: PathBuf = path.as_ref().to_path_buf();
        self.inner = self.inner.favorites_path(path);
        self
    }

    pub fn in_memory_favorites(mut self, in_memory: bool) -> Self {
        self.inner = self.inner.in_memory_favorites(in_memory);
        self
    }

    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.inner = self.inner.transport(transport);
        self
    }

    /// Build the async SDK.
    ///
    /// Opening the favorites database runs on the blocking thread pool so it
    /// won't block the async event loop.
    pub async fn build(self) -> Result<AsyncCoinRankingSdk> {
        let builder = self.inner;
        tokio::task::spawn_blocking(move || {
            let sdk = builder.build()?;
            Ok(AsyncCoinRankingSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| CoinRankingError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCoinRankingSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`CoinRankingSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`CoinRankingSdk`] is
/// protected by a [`Mutex`] since the DuckDB connection is not `Sync`.
pub struct AsyncCoinRankingSdk {
    inner: Arc<Mutex<CoinRankingSdk>>,
}

impl AsyncCoinRankingSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncCoinRankingSdkBuilder {
        AsyncCoinRankingSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&CoinRankingSdk` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CoinRankingSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| CoinRankingError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| CoinRankingError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch one page of the ranking.
    pub async fn coin_list(&self, params: CoinListParams) -> Result<CoinListResponse> {
        self.run(move |s| s.coins().list(&params)).await
    }

    pub async fn coin_detail(&self, uuid: &str, period: TimePeriod) -> Result<CoinDetailResponse> {
        let uuid = uuid.to_string();
        self.run(move |s| s.coins().detail(&uuid, period)).await
    }

    pub async fn price_history(
        &self,
        uuid: &str,
        period: TimePeriod,
    ) -> Result<PriceHistoryResponse> {
        let uuid = uuid.to_string();
        self.run(move |s| s.coins().price_history(&uuid, period)).await
    }

    pub async fn favorites(&self) -> Result<Vec<FavoriteCoin>> {
        self.run(|s| s.favorites().fetch_all()).await
    }

    /// Flip the favorite state of `coin`; returns the new state.
    pub async fn toggle_favorite(&self, coin: FavoriteCoin) -> Result<bool> {
        self.run(move |s| s.favorites().toggle(&coin)).await
    }

    /// Release the SDK on the blocking thread pool.
    ///
    /// The default transport wraps a blocking `reqwest` client, which must not
    /// be dropped from inside the async runtime.
    pub async fn close(self) -> Result<()> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || drop(inner))
            .await
            .map_err(|e| CoinRankingError::InvalidArgument(format!("Task join error: {e}")))
    }
}
