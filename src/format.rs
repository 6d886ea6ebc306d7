//! Human-readable rendering of the API's decimal strings.
//!
//! Amounts stay strings in the models; they are parsed here only long enough
//! to format them.

use crate::models::CoinDetail;

const NOT_AVAILABLE: &str = "N/A";

/// Magnitude used to abbreviate large amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LargeNumberUnit {
    Trillion,
    Billion,
    Million,
    None,
}

impl LargeNumberUnit {
    pub fn value(self) -> f64 {
        match self {
            LargeNumberUnit::Trillion => 1_000_000_000_000.0,
            LargeNumberUnit::Billion => 1_000_000_000.0,
            LargeNumberUnit::Million => 1_000_000.0,
            LargeNumberUnit::None => 1.0,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            LargeNumberUnit::Trillion => "T",
            LargeNumberUnit::Billion => "B",
            LargeNumberUnit::Million => "M",
            LargeNumberUnit::None => "",
        }
    }

    /// Largest unit not exceeding `value`.
    pub fn for_value(value: f64) -> Self {
        [
            LargeNumberUnit::Trillion,
            LargeNumberUnit::Billion,
            LargeNumberUnit::Million,
        ]
        .into_iter()
        .find(|unit| value >= unit.value())
        .unwrap_or(LargeNumberUnit::None)
    }
}

/// `$ 1.23B` style. Values below 1 keep eight decimals (`$ 0.00001234`).
pub fn format_large_number(value: f64) -> String {
    if value < 1.0 {
        return format!("$ {value:.8}");
    }
    let unit = LargeNumberUnit::for_value(value);
    format!("$ {:.2}{}", value / unit.value(), unit.suffix())
}

/// [`format_large_number`] over an optional decimal string; `N/A` when the
/// value is missing or not a number.
pub fn formatted_value(value: Option<&str>) -> String {
    value
        .and_then(parse_amount)
        .map(format_large_number)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

// ---------------------------------------------------------------------------
// CoinDetail display helpers
// ---------------------------------------------------------------------------

impl CoinDetail {
    pub fn display_name(&self) -> String {
        or_not_available(self.name.clone())
    }

    pub fn display_symbol(&self) -> String {
        or_not_available(self.symbol.clone())
    }

    /// Plain two-decimal price, e.g. `$ 9371.00`.
    pub fn formatted_price(&self) -> String {
        or_not_available(
            self.price
                .as_deref()
                .and_then(parse_amount)
                .map(|v| format!("$ {v:.2}")),
        )
    }

    pub fn is_negative_change(&self) -> bool {
        self.change.as_deref().is_some_and(|c| c.starts_with('-'))
    }

    /// `▲ 1.2 %` / `▼ -0.52 %`, or `--` without a change value.
    pub fn change_text(&self) -> String {
        match &self.change {
            Some(change) => {
                let arrow = if self.is_negative_change() { '▼' } else { '▲' };
                format!("{arrow} {change} %")
            }
            None => "--".to_string(),
        }
    }

    pub fn formatted_market_cap(&self) -> String {
        formatted_value(self.market_cap.as_deref())
    }

    pub fn formatted_volume_24h(&self) -> String {
        formatted_value(self.volume_24h.as_deref())
    }

    pub fn formatted_all_time_high(&self) -> String {
        formatted_value(
            self.all_time_high
                .as_ref()
                .and_then(|ath| ath.price.as_deref()),
        )
    }

    pub fn formatted_circulating_supply(&self) -> String {
        formatted_value(self.supply.as_ref().and_then(|s| s.circulating.as_deref()))
    }

    pub fn formatted_total_supply(&self) -> String {
        formatted_value(self.supply.as_ref().and_then(|s| s.total.as_deref()))
    }

    pub fn formatted_max_supply(&self) -> String {
        formatted_value(self.supply.as_ref().and_then(|s| s.max.as_deref()))
    }

    pub fn rank_text(&self) -> String {
        or_not_available(self.rank.map(|r| r.to_string()))
    }

    pub fn exchanges_text(&self) -> String {
        or_not_available(self.number_of_exchanges.map(|n| n.to_string()))
    }

    pub fn trimmed_description(&self) -> String {
        or_not_available(self.description.as_deref().map(|d| d.trim().to_string()))
    }
}
