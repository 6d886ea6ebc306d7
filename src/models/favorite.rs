use serde::{Deserialize, Serialize};

use super::coin::CoinSummary;

/// The persisted projection of a coin the user marked as favorite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteCoin {
    pub uuid: String,
    pub symbol: String,
    pub name: String,
    pub icon_url: String,
}

impl From<&CoinSummary> for FavoriteCoin {
    fn from(coin: &CoinSummary) -> Self {
        Self {
            uuid: coin.uuid.clone(),
            symbol: coin.symbol.clone(),
            name: coin.name.clone(),
            icon_url: coin.icon_url.clone(),
        }
    }
}
