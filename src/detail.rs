//! State behind the coin detail screen: the coin record plus its price chart.

use crate::error::Result;
use crate::models::{CoinDetail, PriceHistoryPoint, TimePeriod};
use crate::queries::CoinDetailSource;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Box<CoinDetail>),
    /// The API answered but had no coin for the id.
    Empty,
    Error,
}

pub struct CoinDetailController<S> {
    source: S,
    coin_id: String,
    state: DetailState,
    history: Option<Vec<PriceHistoryPoint>>,
    selected_period: TimePeriod,
}

impl<S: CoinDetailSource> CoinDetailController<S> {
    pub fn new(source: S, coin_id: &str) -> Self {
        Self {
            source,
            coin_id: coin_id.to_string(),
            state: DetailState::Loading,
            history: None,
            selected_period: TimePeriod::default(),
        }
    }

    pub fn coin_id(&self) -> &str {
        &self.coin_id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn history(&self) -> Option<&[PriceHistoryPoint]> {
        self.history.as_deref()
    }

    pub fn selected_period(&self) -> TimePeriod {
        self.selected_period
    }

    pub fn select_period(&mut self, period: TimePeriod) {
        self.selected_period = period;
    }

    /// Load the coin record. Failures are logged and reflected in
    /// [`DetailState::Error`].
    pub fn fetch_details(&mut self, period: TimePeriod) -> &DetailState {
        self.state = DetailState::Loading;
        self.state = match self.source.fetch_coin_detail(&self.coin_id, period) {
            Ok(response) => match response.data.coin {
                Some(coin) => DetailState::Loaded(Box::new(coin)),
                None => DetailState::Empty,
            },
            Err(err) => {
                tracing::warn!(coin = %self.coin_id, error = %err, "failed to fetch coin details");
                DetailState::Error
            }
        };
        &self.state
    }

    /// Load the price chart for `period`.
    ///
    /// Points without a price are dropped and the rest are ordered oldest
    /// first. On failure the history is cleared and the error returned.
    pub fn fetch_price_history(&mut self, period: TimePeriod) -> Result<()> {
        match self.source.fetch_price_history(&self.coin_id, period) {
            Ok(response) => {
                self.history = Some(chart_points(response.data.history));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(coin = %self.coin_id, error = %err, "failed to fetch price history");
                self.history = None;
                Err(err)
            }
        }
    }

    /// Points to plot. Empty unless the coin itself is loaded.
    pub fn chart_data(&self) -> &[PriceHistoryPoint] {
        match (&self.state, &self.history) {
            (DetailState::Loaded(_), Some(history)) => history,
            _ => &[],
        }
    }
}

/// Drop null-price samples and sort chronologically ascending.
pub fn chart_points(history: Vec<PriceHistoryPoint>) -> Vec<PriceHistoryPoint> {
    let mut points: Vec<PriceHistoryPoint> =
        history.into_iter().filter(|p| p.price.is_some()).collect();
    points.sort_by_key(|p| p.timestamp);
    points
}
