//! Local favorites persistence backed by DuckDB.
//!
//! [`FavoriteStore`] is the narrow provider interface the controllers depend
//! on. [`DuckDbFavoriteStore`] implements it over a single
//! `favorite_coins` table keyed by coin uuid. Storage failures surface as
//! [`StorageError`](crate::error::StorageError) rather than aborting.

use std::fs;
use std::path::Path;

use duckdb::{params, Connection as DuckDbConnection};

use crate::error::Result;
use crate::models::FavoriteCoin;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS favorite_coins (\
     uuid VARCHAR PRIMARY KEY, \
     symbol VARCHAR NOT NULL, \
     name VARCHAR NOT NULL, \
     icon_url VARCHAR NOT NULL)";

// ---------------------------------------------------------------------------
// FavoriteStore
// ---------------------------------------------------------------------------

/// CRUD access to the user's favorite coins.
///
/// Rows are unique by `uuid`. The store is the only authority on what is a
/// favorite; anything callers hold is a snapshot.
pub trait FavoriteStore {
    /// Every favorite, ordered by name then uuid.
    fn fetch_all(&self) -> Result<Vec<FavoriteCoin>>;

    /// Insert or update by uuid (last write wins).
    fn save(&self, coin: &FavoriteCoin) -> Result<()>;

    /// Delete by uuid. Returns `true` iff a row existed and was deleted.
    fn remove(&self, uuid: &str) -> Result<bool>;

    fn contains(&self, uuid: &str) -> Result<bool>;

    /// Flip the favorite state of `coin`; returns the new state.
    fn toggle(&self, coin: &FavoriteCoin) -> Result<bool> {
        if self.contains(&coin.uuid)? {
            self.remove(&coin.uuid)?;
            Ok(false)
        } else {
            self.save(coin)?;
            Ok(true)
        }
    }
}

// ---------------------------------------------------------------------------
// DuckDbFavoriteStore
// ---------------------------------------------------------------------------

/// [`FavoriteStore`] over a DuckDB database file (or an in-memory database).
///
/// Concurrent access is serialized by DuckDB's own transactions; this type
/// adds no locking of its own.
pub struct DuckDbFavoriteStore {
    conn: DuckDbConnection,
}

impl DuckDbFavoriteStore {
    /// Open (or create) the database at `path`, creating parent directories.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let conn = DuckDbConnection::open(path)?;
        tracing::debug!(path = %path.display(), "opened favorites database");
        Self::with_connection(conn)
    }

    /// Open a throwaway in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(DuckDbConnection::open_in_memory()?)
    }

    fn with_connection(conn: DuckDbConnection) -> Result<Self> {
        conn.execute_batch(CREATE_TABLE_SQL)?;
        Ok(Self { conn })
    }

    /// Access the underlying DuckDB connection for advanced usage.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.conn
    }
}

impl FavoriteStore for DuckDbFavoriteStore {
    fn fetch_all(&self) -> Result<Vec<FavoriteCoin>> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, symbol, name, icon_url FROM favorite_coins ORDER BY name, uuid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(FavoriteCoin {
                uuid: row.get(0)?,
                symbol: row.get(1)?,
                name: row.get(2)?,
                icon_url: row.get(3)?,
            })
        })?;

        let mut coins = Vec::new();
        for coin in rows {
            coins.push(coin?);
        }
        Ok(coins)
    }

    fn save(&self, coin: &FavoriteCoin) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO favorite_coins (uuid, symbol, name, icon_url) \
             VALUES (?, ?, ?, ?)",
            params![coin.uuid, coin.symbol, coin.name, coin.icon_url],
        )?;
        tracing::info!(uuid = %coin.uuid, symbol = %coin.symbol, "saved favorite coin");
        Ok(())
    }

    fn remove(&self, uuid: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM favorite_coins WHERE uuid = ?", params![uuid])?;
        if deleted > 0 {
            tracing::info!(uuid, "removed favorite coin");
        }
        Ok(deleted > 0)
    }

    fn contains(&self, uuid: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM favorite_coins WHERE uuid = ?",
            params![uuid],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

// ---------------------------------------------------------------------------
// FavoritesList
// ---------------------------------------------------------------------------

/// State behind the favorites screen: a snapshot of the store plus
/// swipe-to-delete by row index.
pub struct FavoritesList<'a> {
    store: &'a dyn FavoriteStore,
    coins: Vec<FavoriteCoin>,
}

impl<'a> FavoritesList<'a> {
    /// Create an empty list bound to `store`. Call [`load`](Self::load) to
    /// populate it.
    pub fn new(store: &'a dyn FavoriteStore) -> Self {
        Self {
            store,
            coins: Vec::new(),
        }
    }

    /// Re-read the snapshot from the store.
    pub fn load(&mut self) -> Result<()> {
        self.coins = self.store.fetch_all()?;
        Ok(())
    }

    pub fn coins(&self) -> &[FavoriteCoin] {
        &self.coins
    }

    /// Delete the favorite at `index`. Out-of-range indexes are ignored and
    /// return `Ok(false)`.
    pub fn remove_at(&mut self, index: usize) -> Result<bool> {
        let Some(coin) = self.coins.get(index) else {
            return Ok(false);
        };
        let removed = self.store.remove(&coin.uuid)?;
        self.coins.remove(index);
        Ok(removed)
    }
}
