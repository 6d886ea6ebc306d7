use serde::{Deserialize, Serialize};

use super::coin::CoinListData;
use super::detail::CoinDetailData;
use super::history::PriceHistoryData;

/// The `{ "status": ..., "data": ... }` envelope every endpoint answers with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

pub type CoinListResponse = ApiResponse<CoinListData>;
pub type CoinDetailResponse = ApiResponse<CoinDetailData>;
pub type PriceHistoryResponse = ApiResponse<PriceHistoryData>;
