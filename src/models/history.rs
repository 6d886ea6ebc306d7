use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// One price sample. `price` is null when the API has no quote for the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceHistoryPoint {
    pub price: Option<String>,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
}

impl PriceHistoryPoint {
    /// Chart label such as `Jan 5, 3:07 PM` (UTC). `None` if the timestamp is
    /// out of range.
    pub fn formatted_date(&self) -> Option<String> {
        DateTime::from_timestamp(self.timestamp, 0)
            .map(|dt| dt.format("%b %-d, %-I:%M %p").to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryData {
    pub change: Option<String>,
    pub history: Vec<PriceHistoryPoint>,
}
