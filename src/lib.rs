//! Coinranking SDK for Rust.
//!
//! Provides a high-level client for the Coinranking REST API: the paged coin
//! ranking, per-coin details and price history, plus a local DuckDB store for
//! the user's favorite coins.
//!
//! # Quick start
//!
//! ```no_run
//! use coinranking_sdk::{CoinRankingSdk, PageFetch};
//!
//! let sdk = CoinRankingSdk::builder()
//!     .access_token("my-token")
//!     .build()
//!     .unwrap();
//!
//! // First page of the ranking
//! let mut listing = sdk.listing();
//! if let PageFetch::Loaded(n) = listing.fetch_next_page() {
//!     println!("loaded {n} coins");
//! }
//!
//! // Star the top coin
//! listing.toggle_favorite(0).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod detail;
pub mod endpoints;
pub mod error;
pub mod favorites;
pub mod format;
pub mod listing;
pub mod models;
pub mod processor;
pub mod queries;
pub mod request;
pub mod transport;

#[cfg(feature = "async")]
pub use async_client::AsyncCoinRankingSdk;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use detail::{CoinDetailController, DetailState};
pub use endpoints::CoinRequest;
pub use error::{CoinRankingError, NetworkError, RequestError, Result, StorageError};
pub use favorites::{DuckDbFavoriteStore, FavoriteStore, FavoritesList};
pub use listing::{ListingController, ListingFilter, ListingPageState, PageFetch, PageTicket};
pub use queries::{CoinDetailSource, CoinListParams, CoinListSource, CoinQuery};
pub use request::{build_request, HttpMethod, HttpRequest, RequestDescriptor};
pub use transport::{HttpResponse, ReqwestTransport, Transport};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// CoinRankingSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CoinRankingSdk`] instance.
///
/// Use [`CoinRankingSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CoinRankingSdkBuilder::build) to create the SDK.
#[derive(Default)]
pub struct CoinRankingSdkBuilder {
    api: ApiConfig,
    favorites_path: Option<PathBuf>,
    in_memory_favorites: bool,
    transport: Option<Box<dyn Transport>>,
}

impl CoinRankingSdkBuilder {
    /// Start from `COINRANKING_*` environment variables instead of the
    /// built-in defaults. See [`ApiConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api: ApiConfig::from_env()?,
            ..Self::default()
        })
    }

    /// Override the API base URL. Defaults to `https://api.coinranking.com/v2`.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.api.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the token sent as `x-access-token`. Without one the API applies
    /// its anonymous rate limits.
    pub fn access_token(mut self, token: &str) -> Self {
        self.api.access_token = Some(token.to_string());
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds. Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.api.timeout = timeout;
        self
    }

    /// Set the favorites database file.
    ///
    /// If not set, `favorites.duckdb` under the platform data directory is
    /// used (e.g. `~/.local/share/coinranking-sdk` on Linux).
    pub fn favorites_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.favorites_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep favorites in an in-memory database that is lost on drop.
    pub fn in_memory_favorites(mut self, in_memory: bool) -> Self {
        self.in_memory_favorites = in_memory;
        self
    }

    /// Replace the default reqwest transport.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the SDK, opening the favorites database and the HTTP client.
    ///
    /// No network request is made until a query runs.
    pub fn build(self) -> Result<CoinRankingSdk> {
        let transport: Box<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Box::new(ReqwestTransport::new(self.api.timeout)?),
        };

        let favorites = if self.in_memory_favorites {
            DuckDbFavoriteStore::open_in_memory()?
        } else {
            let path = self
                .favorites_path
                .unwrap_or_else(config::default_favorites_path);
            DuckDbFavoriteStore::open(path)?
        };

        Ok(CoinRankingSdk {
            client: ApiClient::new(self.api, transport),
            favorites,
        })
    }
}

// ---------------------------------------------------------------------------
// CoinRankingSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Coinranking SDK.
///
/// Owns the [`ApiClient`] and the favorites store, and hands out lightweight
/// borrowing wrappers for queries and screen controllers.
///
/// Created via [`CoinRankingSdk::builder()`].
pub struct CoinRankingSdk {
    client: ApiClient,
    favorites: DuckDbFavoriteStore,
}

impl CoinRankingSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> CoinRankingSdkBuilder {
        CoinRankingSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the coin query interface.
    pub fn coins(&self) -> CoinQuery<'_> {
        CoinQuery::new(&self.client)
    }

    /// Access the favorites store.
    pub fn favorites(&self) -> &DuckDbFavoriteStore {
        &self.favorites
    }

    // -- Controllers -------------------------------------------------------

    /// A fresh, empty listing. Call
    /// [`fetch_next_page`](ListingController::fetch_next_page) to load the
    /// first page.
    pub fn listing(&self) -> ListingController<'_, CoinQuery<'_>> {
        ListingController::new(self.coins(), &self.favorites)
    }

    /// Controller for one coin's detail screen.
    pub fn coin_detail(&self, uuid: &str) -> CoinDetailController<CoinQuery<'_>> {
        CoinDetailController::new(self.coins(), uuid)
    }

    /// An unloaded favorites list bound to the store.
    pub fn favorites_list(&self) -> FavoritesList<'_> {
        FavoritesList::new(&self.favorites)
    }

    // -- Utility -----------------------------------------------------------

    /// Return a reference to the underlying [`ApiClient`] for advanced usage.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn config(&self) -> &ApiConfig {
        self.client.config()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CoinRankingSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.client.config();
        write!(
            f,
            "CoinRankingSdk(base_url={}, authenticated={}, timeout={}s)",
            config.base_url,
            config.access_token.is_some(),
            config.timeout.as_secs()
        )
    }
}
