use std::fmt;
use std::str::FromStr;

use crate::error::CoinRankingError;

// ---------------------------------------------------------------------------
// TimePeriod: Window used for change %, sparklines and price history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimePeriod {
    OneHour,
    #[default]
    TwentyFourHours,
    SevenDays,
    ThirtyDays,
    ThreeMonths,
    OneYear,
}

impl TimePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::OneHour => "1h",
            TimePeriod::TwentyFourHours => "24h",
            TimePeriod::SevenDays => "7d",
            TimePeriod::ThirtyDays => "30d",
            TimePeriod::ThreeMonths => "3m",
            TimePeriod::OneYear => "1y",
        }
    }

    /// Every period, shortest first (chart filter order).
    pub fn all() -> [TimePeriod; 6] {
        [
            TimePeriod::OneHour,
            TimePeriod::TwentyFourHours,
            TimePeriod::SevenDays,
            TimePeriod::ThirtyDays,
            TimePeriod::ThreeMonths,
            TimePeriod::OneYear,
        ]
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePeriod {
    type Err = CoinRankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimePeriod::all()
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CoinRankingError::InvalidArgument(format!("Unknown time period: {s}")))
    }
}

// ---------------------------------------------------------------------------
// SortKey / SortDirection: Listing order
// ---------------------------------------------------------------------------

/// Field the coin list is ordered by. Absent means the API default
/// (market cap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Price,
    Change,
    MarketCap,
    Volume24h,
    ListedAt,
}

impl SortKey {
    /// Value of the `orderBy` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Change => "change",
            SortKey::MarketCap => "marketCap",
            SortKey::Volume24h => "24hVolume",
            SortKey::ListedAt => "listedAt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Price => "Price",
            SortKey::Change => "24-hour Performance",
            SortKey::MarketCap => "Market Cap",
            SortKey::Volume24h => "24-hour Volume",
            SortKey::ListedAt => "Listing Date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Value of the `orderDirection` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "Ascending",
            SortDirection::Descending => "Descending",
        }
    }
}
