use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CoinDetail: Full record for a single coin
// ---------------------------------------------------------------------------

/// The full record for one coin.
///
/// Only `uuid` is guaranteed; the API may omit any other field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinDetail {
    pub uuid: String,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon_url: Option<String>,
    pub website_url: Option<String>,
    pub links: Option<Vec<CoinLink>>,
    pub supply: Option<Supply>,
    #[serde(rename = "24hVolume")]
    pub volume_24h: Option<String>,
    pub market_cap: Option<String>,
    pub fully_diluted_market_cap: Option<String>,
    pub price: Option<String>,
    pub btc_price: Option<String>,
    pub price_at: Option<i64>,
    pub change: Option<String>,
    pub rank: Option<i64>,
    pub number_of_markets: Option<i64>,
    pub number_of_exchanges: Option<i64>,
    pub sparkline: Option<Vec<Option<String>>>,
    pub all_time_high: Option<AllTimeHigh>,
    pub coinranking_url: Option<String>,
    pub listed_at: Option<i64>,
    pub notices: Option<Vec<Notice>>,
    pub contract_addresses: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supply {
    pub supply_at: Option<i64>,
    pub circulating: Option<String>,
    pub total: Option<String>,
    pub max: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllTimeHigh {
    pub price: Option<String>,
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinLink {
    pub name: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub type_field: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    #[serde(rename = "type")]
    pub type_field: Option<String>,
    pub value: Option<String>,
}

/// `data` payload of the detail endpoint. `coin` is absent for unknown ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetailData {
    pub coin: Option<CoinDetail>,
}
