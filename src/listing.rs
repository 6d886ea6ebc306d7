//! Pagination and filter state for the ranked coin list.
//!
//! The controller moves between two states, idle and fetching. A fetch
//! requested while another is in flight is dropped, not queued. Hosts that
//! perform I/O themselves drive the two halves explicitly with
//! [`ListingController::begin_fetch`] and [`ListingController::complete_fetch`];
//! everyone else calls [`ListingController::fetch_next_page`].

use crate::config::{MAX_LISTED_COINS, PAGE_SIZE};
use crate::error::{CoinRankingError, Result};
use crate::favorites::FavoriteStore;
use crate::models::{CoinListResponse, CoinSummary, FavoriteCoin, SortDirection, SortKey, TimePeriod};
use crate::queries::{CoinListParams, CoinListSource};

/// Sort selection for the list. Both fields absent means API default order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub sort_key: Option<SortKey>,
    pub sort_direction: Option<SortDirection>,
}

/// Observable state of the listing.
///
/// `items` only grows between filter changes; `page_offset` counts
/// successfully loaded pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingPageState {
    pub items: Vec<CoinSummary>,
    pub page_offset: usize,
    pub is_fetching: bool,
    pub filter: ListingFilter,
}

/// Outcome of one page fetch.
#[derive(Debug)]
pub enum PageFetch {
    /// Another fetch was already in flight; nothing happened.
    Skipped,
    /// The page arrived; this many items were appended.
    Loaded(usize),
    /// The fetch failed. Items were cleared only if this was the first page.
    Failed(CoinRankingError),
    /// The ticket was superseded by a filter change or already completed;
    /// the result was dropped.
    Stale,
}

/// An in-flight page request handed out by [`ListingController::begin_fetch`].
///
/// Only the most recently issued ticket is accepted, and only once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTicket {
    pub params: CoinListParams,
    serial: u64,
}

pub struct ListingController<'a, S> {
    source: S,
    favorites: &'a dyn FavoriteStore,
    state: ListingPageState,
    time_period: TimePeriod,
    next_serial: u64,
    in_flight: Option<u64>,
}

impl<'a, S: CoinListSource> ListingController<'a, S> {
    pub fn new(source: S, favorites: &'a dyn FavoriteStore) -> Self {
        Self {
            source,
            favorites,
            state: ListingPageState::default(),
            time_period: TimePeriod::default(),
            next_serial: 0,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &ListingPageState {
        &self.state
    }

    pub fn items(&self) -> &[CoinSummary] {
        &self.state.items
    }

    pub fn is_fetching(&self) -> bool {
        self.state.is_fetching
    }

    pub fn time_period(&self) -> TimePeriod {
        self.time_period
    }

    /// True while fewer than 100 coins are loaded.
    pub fn should_prefetch_more(&self) -> bool {
        self.state.items.len() < MAX_LISTED_COINS
    }

    /// Request parameters for the next page under the current filter.
    pub fn next_page_params(&self) -> CoinListParams {
        CoinListParams {
            offset: self.state.page_offset * PAGE_SIZE,
            limit: PAGE_SIZE,
            time_period: self.time_period,
            order_by: self.state.filter.sort_key,
            order_direction: self.state.filter.sort_direction,
        }
    }

    /// Enter the fetching state. Returns `None` if a fetch is already in
    /// flight.
    pub fn begin_fetch(&mut self) -> Option<PageTicket> {
        if self.state.is_fetching {
            return None;
        }
        let serial = self.next_serial;
        self.next_serial += 1;
        self.in_flight = Some(serial);
        self.state.is_fetching = true;
        Some(PageTicket {
            params: self.next_page_params(),
            serial,
        })
    }

    /// Apply the result of the fetch started by `ticket` and return to idle.
    ///
    /// A ticket that is not the one currently in flight (issued before the
    /// last filter change, or already completed) is stale: its result is
    /// dropped and the current fetch state is left alone.
    pub fn complete_fetch(&mut self, ticket: PageTicket, result: Result<CoinListResponse>) -> PageFetch {
        if self.in_flight != Some(ticket.serial) {
            tracing::debug!(offset = ticket.params.offset, "dropping page for a ticket no longer in flight");
            return PageFetch::Stale;
        }
        self.in_flight = None;
        self.state.is_fetching = false;

        match result {
            Ok(response) => {
                let count = response.data.coins.len();
                self.state.items.extend(response.data.coins);
                self.state.page_offset += 1;
                PageFetch::Loaded(count)
            }
            Err(err) => {
                tracing::warn!(
                    page_offset = self.state.page_offset,
                    error = %err,
                    "failed to fetch coin list page"
                );
                if self.state.page_offset == 0 {
                    self.state.items.clear();
                }
                PageFetch::Failed(err)
            }
        }
    }

    /// Fetch the first page, or the next one if some are already loaded.
    pub fn fetch_next_page(&mut self) -> PageFetch {
        let Some(ticket) = self.begin_fetch() else {
            return PageFetch::Skipped;
        };
        let result = self.source.fetch_coin_list(&ticket.params);
        self.complete_fetch(ticket, result)
    }

    /// Change the sort order, drop everything loaded and fetch the first page.
    ///
    /// Any fetch still in flight is superseded; its ticket completes as
    /// [`PageFetch::Stale`].
    pub fn apply_filter(
        &mut self,
        sort_key: Option<SortKey>,
        sort_direction: Option<SortDirection>,
    ) -> PageFetch {
        self.state.filter = ListingFilter {
            sort_key,
            sort_direction,
        };
        self.state.page_offset = 0;
        self.state.items.clear();
        self.state.is_fetching = false;
        self.in_flight = None;
        self.fetch_next_page()
    }

    /// Back to API default ordering.
    pub fn reset_filter(&mut self) -> PageFetch {
        self.apply_filter(None, None)
    }

    /// Flip the favorite state of the coin at `index`; returns the new state.
    pub fn toggle_favorite(&self, index: usize) -> Result<bool> {
        let coin = self.coin_at(index)?;
        self.favorites.toggle(&FavoriteCoin::from(coin))
    }

    pub fn is_favorite(&self, index: usize) -> Result<bool> {
        let coin = self.coin_at(index)?;
        self.favorites.contains(&coin.uuid)
    }

    fn coin_at(&self, index: usize) -> Result<&CoinSummary> {
        self.state.items.get(index).ok_or_else(|| {
            CoinRankingError::InvalidArgument(format!(
                "coin index {} out of range ({} loaded)",
                index,
                self.state.items.len()
            ))
        })
    }
}
