use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CoinSummary: One row of the ranked coin list
// ---------------------------------------------------------------------------

/// A coin as it appears in the ranked list.
///
/// Money figures (`price`, `market_cap`, `volume_24h`, `btc_price`) are kept
/// as the decimal strings the API sends; they exceed what `f64` can hold
/// exactly and are only ever formatted, never computed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinSummary {
    pub uuid: String,
    pub symbol: String,
    pub name: String,
    pub color: Option<String>,
    pub icon_url: String,
    pub market_cap: String,
    pub price: String,
    pub listed_at: Option<i64>,
    pub tier: Option<i64>,
    pub change: Option<String>,
    pub rank: i64,
    #[serde(default)]
    pub sparkline: Vec<Option<String>>,
    #[serde(default)]
    pub low_volume: bool,
    pub coinranking_url: Option<String>,
    #[serde(rename = "24hVolume")]
    pub volume_24h: String,
    pub btc_price: Option<String>,
    #[serde(default)]
    pub contract_addresses: Vec<String>,
}

// ---------------------------------------------------------------------------
// ListStats: Market-wide totals returned alongside a list page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStats {
    pub total: i64,
    pub total_coins: i64,
    pub total_markets: i64,
    pub total_exchanges: i64,
    pub total_market_cap: String,
    #[serde(rename = "total24hVolume")]
    pub total_24h_volume: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinListData {
    pub stats: ListStats,
    pub coins: Vec<CoinSummary>,
}
