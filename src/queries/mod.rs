//! Query modules for the Coinranking SDK.
//!
//! Each module provides a query struct that borrows the
//! [`ApiClient`](crate::client::ApiClient) and returns typed response
//! envelopes.

pub mod coins;

pub use coins::{CoinDetailSource, CoinListParams, CoinListSource, CoinQuery};
