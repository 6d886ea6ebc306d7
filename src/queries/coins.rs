//! Coin queries against the Coinranking REST API.

use crate::client::ApiClient;
use crate::config;
use crate::endpoints::CoinRequest;
use crate::error::Result;
use crate::models::{
    CoinDetailResponse, CoinListResponse, PriceHistoryResponse, SortDirection, SortKey, TimePeriod,
};

// ---------------------------------------------------------------------------
// CoinListParams
// ---------------------------------------------------------------------------

/// Parameters for one page of the ranked coin list.
///
/// `order_by` / `order_direction` left as `None` are not sent, so the API
/// applies its default ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinListParams {
    pub offset: usize,
    pub limit: usize,
    pub time_period: TimePeriod,
    pub order_by: Option<SortKey>,
    pub order_direction: Option<SortDirection>,
}

impl Default for CoinListParams {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: config::PAGE_SIZE,
            time_period: TimePeriod::default(),
            order_by: None,
            order_direction: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Source traits
// ---------------------------------------------------------------------------

/// Anything that can produce a page of the coin list.
pub trait CoinListSource {
    fn fetch_coin_list(&self, params: &CoinListParams) -> Result<CoinListResponse>;
}

/// Anything that can produce coin details and price history.
pub trait CoinDetailSource {
    fn fetch_coin_detail(&self, uuid: &str, period: TimePeriod) -> Result<CoinDetailResponse>;

    fn fetch_price_history(&self, uuid: &str, period: TimePeriod) -> Result<PriceHistoryResponse>;
}

impl<T: CoinListSource + ?Sized> CoinListSource for &T {
    fn fetch_coin_list(&self, params: &CoinListParams) -> Result<CoinListResponse> {
        (**self).fetch_coin_list(params)
    }
}

impl<T: CoinDetailSource + ?Sized> CoinDetailSource for &T {
    fn fetch_coin_detail(&self, uuid: &str, period: TimePeriod) -> Result<CoinDetailResponse> {
        (**self).fetch_coin_detail(uuid, period)
    }

    fn fetch_price_history(&self, uuid: &str, period: TimePeriod) -> Result<PriceHistoryResponse> {
        (**self).fetch_price_history(uuid, period)
    }
}

// ---------------------------------------------------------------------------
// CoinQuery
// ---------------------------------------------------------------------------

/// Query interface for coin listings, details and price history.
#[derive(Clone, Copy)]
pub struct CoinQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> CoinQuery<'a> {
    /// Create a new `CoinQuery` bound to the given client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one page of the ranked list.
    pub fn list(&self, params: &CoinListParams) -> Result<CoinListResponse> {
        self.get(&CoinRequest::CoinList(params.clone()))
    }

    /// Fetch the full record for a coin.
    pub fn detail(&self, uuid: &str, period: TimePeriod) -> Result<CoinDetailResponse> {
        self.get(&CoinRequest::CoinDetail {
            uuid: uuid.to_string(),
            time_period: period,
        })
    }

    /// Fetch the price history for a coin over `period`, in API order.
    pub fn price_history(&self, uuid: &str, period: TimePeriod) -> Result<PriceHistoryResponse> {
        self.get(&CoinRequest::PriceHistory {
            uuid: uuid.to_string(),
            time_period: period,
        })
    }

    fn get<M: serde::de::DeserializeOwned>(&self, request: &CoinRequest) -> Result<M> {
        let descriptor = request.descriptor(self.client.config());
        self.client.fetch(&descriptor)
    }
}

impl CoinListSource for CoinQuery<'_> {
    fn fetch_coin_list(&self, params: &CoinListParams) -> Result<CoinListResponse> {
        self.list(params)
    }
}

impl CoinDetailSource for CoinQuery<'_> {
    fn fetch_coin_detail(&self, uuid: &str, period: TimePeriod) -> Result<CoinDetailResponse> {
        self.detail(uuid, period)
    }

    fn fetch_price_history(&self, uuid: &str, period: TimePeriod) -> Result<PriceHistoryResponse> {
        self.price_history(uuid, period)
    }
}
