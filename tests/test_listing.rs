//! Listing controller tests: pagination, filters and favorites toggling.

mod common;

use coinranking_sdk::models::{CoinListResponse, SortDirection, SortKey};
use coinranking_sdk::{CoinRankingError, FavoriteStore, NetworkError, PageFetch};
use common::{list_page_json, sdk_with, ScriptedTransport};

fn page(start: usize, count: usize) -> CoinListResponse {
    serde_json::from_value(list_page_json(start, count)).unwrap()
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[test]
fn first_fetch_loads_one_page() {
    let transport = ScriptedTransport::new();
    transport.push_json(200, &list_page_json(0, 20));
    let sdk = sdk_with(&transport);
    let mut listing = sdk.listing();

    assert!(matches!(listing.fetch_next_page(), PageFetch::Loaded(20)));
    assert_eq!(listing.items().len(), 20);
    assert_eq!(listing.state().page_offset, 1);
    assert!(!listing.is_fetching());
    assert_eq!(transport.query_param(0, "offset").as_deref(), Some("0"));
    assert_eq!(transport.query_param(0, "limit").as_deref(), Some("20"));
    assert_eq!(transport.query_param(0, "orderBy"), None);
}

#[test]
fn subsequent_fetches_advance_offset_and_append() {
    let transport = ScriptedTransport::new();
    transport
        .push_json(200, &list_page_json(0, 20))
        .push_json(200, &list_page_json(20, 20));
    let sdk = sdk_with(&transport);
    let mut listing = sdk.listing();

    listing.fetch_next_page();
    listing.fetch_next_page();

    assert_eq!(listing.items().len(), 40);
    assert_eq!(listing.items()[20].uuid, "coin-uuid-020");
    assert_eq!(listing.state().page_offset, 2);
    assert_eq!(transport.query_param(1, "offset").as_deref(), Some("20"));
}

#[test]
fn fetch_while_fetching_is_dropped() {
    let transport = ScriptedTransport::new();
    let sdk = sdk_with(&transport);
    let mut listing = sdk.listing();

    let ticket = listing.begin_fetch().unwrap();
    assert!(listing.is_fetching());
    assert!(listing.begin_fetch().is_none());
    assert!(matches!(listing.fetch_next_page(), PageFetch::Skipped));
    assert_eq!(transport.request_count(), 0);

    let outcome = listing.complete_fetch(ticket, Ok(page(0, 20)));
    assert!(matches!(outcome, PageFetch::Loaded(20)));
    assert!(!listing.is_fetching());
}

#[test]
fn prefetch_stops_at_one_hundred_coins() {
    let transport = ScriptedTransport::new();
    for p in 0..5 {
        transport.push_json(200, &list_page_json(p * 20, 20));
    }
    let sdk = sdk_with(&transport);
    let mut listing = sdk.listing();

    let mut pages = 0;
    while listing.should_prefetch_more() {
        assert!(matches!(listing.fetch_next_page(), PageFetch::Loaded(_)));
        pages += 1;
    }
    assert_eq!(pages, 5);
    assert_eq!(listing.items().len(), 100);
    assert_eq!(transport.query_param(4, "offset").as_deref(), Some("80"));
}

#[test]
fn prefetch_boundary_is_one_hundred() {
    let transport = ScriptedTransport::new();
    transport
        .push_json(200, &list_page_json(0, 99))
        .push_json(200, &list_page_json(99, 1));
    let sdk = sdk_with(&transport);
    let mut listing = sdk.listing();

    listing.fetch_next_page();
    assert_eq!(listing.items().len(), 99);
    assert!(listing.should_prefetch_more());

    listing.fetch_next_page();
    assert_eq!(listing.items().len(), 100);
    assert!(!listing.should_prefetch_more());
}

#[test]
fn completed_ticket_replayed_is_stale() {
    let transport = ScriptedTransport::new();
    let sdk = sdk_with(&transport);
    let mut listing = sdk.listing();

    let first = listing.begin_fetch().unwrap();
    let replay = first.clone();
    assert!(matches!(
        listing.complete_fetch(first, Ok(page(0, 20))),
        PageFetch::Loaded(20)
    ));

    // Idle controller: nothing in flight.
    assert!(matches!(
        listing.complete_fetch(replay.clone(), Ok(page(20, 20))),
        PageFetch::Stale
    ));
    assert_eq!(listing.items().len(), 20);
    assert_eq!(listing.state().page_offset, 1);

    // A newer fetch is in flight; the old ticket must not settle it.
    let second = listing.begin_fetch().unwrap();
    assert!(matches!(
        listing.complete_fetch(replay, Ok(page(40, 20))),
        PageFetch::Stale
    ));
    assert!(listing.is_fetching());
    assert_eq!(listing.items().len(), 20);

    assert!(matches!(
        listing.complete_fetch(second, Ok(page(20, 20))),
        PageFetch::Loaded(20)
    ));
    assert_eq!(listing.items().len(), 40);
    assert_eq!(listing.items()[20].uuid, "coin-uuid-020");
    assert_eq!(listing.state().page_offset, 2);
    assert!(!listing.is_fetching());
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn first_page_failure_leaves_list_empty() {
    let transport = ScriptedTransport::new();
    transport.push_error(NetworkError::NoInternet);
    let sdk = sdk_with(&transport);
    let mut listing = sdk.listing();

    let outcome = listing.fetch_next_page();
    assert!(matches!(
        outcome,
        PageFetch::Failed(CoinRankingError::Network(NetworkError::NoInternet))
    ));
    assert!(listing.items().is_empty());
    assert_eq!(listing.state().page_offset, 0);
    assert!(!listing.is_fetching());
}

#[test]
fn later_page_failure_keeps_loaded_items() {
    let transport = ScriptedTransport::new();
    transport
        .push_json(200, &list_page_json(0, 20))
        .push_raw(503, "");
    let sdk = sdk_with(&transport);
    let mut listing = sdk.listing();

    listing.fetch_next_page();
    let outcome = listing.fetch_next_page();

    assert!(matches!(
        outcome,
        PageFetch::Failed(CoinRankingError::Network(NetworkError::ServerError(503)))
    ));
    assert_eq!(listing.items().len(), 20);
    assert_eq!(listing.state().page_offset, 1);
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[test]
fn apply_filter_resets_and_refetches_with_sort() {
    let transport = ScriptedTransport::new();
    transport
        .push_json(200, &list_page_json(0, 20))
        .push_json(200, &list_page_json(0, 20))
        .push_json(200, &list_page_json(50, 20));
    let sdk = sdk_with(&transport);
    let mut listing = sdk.listing();

    listing.fetch_next_page();
    listing.fetch_next_page();
    assert_eq!(listing.items().len(), 40);

    let outcome = listing.apply_filter(Some(SortKey::MarketCap), Some(SortDirection::Descending));
    assert!(matches!(outcome, PageFetch::Loaded(20)));
    assert_eq!(listing.items().len(), 20);
    assert_eq!(listing.items()[0].uuid, "coin-uuid-050");
    assert_eq!(listing.state().page_offset, 1);
    assert_eq!(listing.state().filter.sort_key, Some(SortKey::MarketCap));

    assert_eq!(transport.query_param(2, "offset").as_deref(), Some("0"));
    assert_eq!(transport.query_param(2, "orderBy").as_deref(), Some("marketCap"));
    assert_eq!(transport.query_param(2, "orderDirection").as_deref(), Some("desc"));
}

#[test]
fn reset_filter_omits_sort_params() {
    let transport = ScriptedTransport::new();
    transport
        .push_json(200, &list_page_json(0, 20))
        .push_json(200, &list_page_json(0, 20));
    let sdk = sdk_with(&transport);
    let mut listing = sdk.listing();

    listing.apply_filter(Some(SortKey::Price), Some(SortDirection::Ascending));
    listing.reset_filter();

    assert_eq!(listing.state().filter, Default::default());
    assert_eq!(transport.query_param(1, "orderBy"), None);
    assert_eq!(transport.query_param(1, "orderDirection"), None);
}

#[test]
fn result_fetched_under_old_filter_is_discarded() {
    let transport = ScriptedTransport::new();
    transport.push_json(200, &list_page_json(0, 20));
    let sdk = sdk_with(&transport);
    let mut listing = sdk.listing();

    let old_ticket = listing.begin_fetch().unwrap();
    assert!(matches!(
        listing.apply_filter(Some(SortKey::Change), None),
        PageFetch::Loaded(20)
    ));

    let outcome = listing.complete_fetch(old_ticket, Ok(page(100, 20)));
    assert!(matches!(outcome, PageFetch::Stale));
    assert_eq!(listing.items().len(), 20);
    assert_eq!(listing.items()[0].uuid, "coin-uuid-000");
    assert_eq!(listing.state().page_offset, 1);
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

#[test]
fn toggle_favorite_flips_store_state() {
    let transport = ScriptedTransport::new();
    transport.push_json(200, &list_page_json(0, 20));
    let sdk = sdk_with(&transport);
    let mut listing = sdk.listing();
    listing.fetch_next_page();

    assert!(!listing.is_favorite(3).unwrap());
    assert!(listing.toggle_favorite(3).unwrap());
    assert!(listing.is_favorite(3).unwrap());

    let stored = sdk.favorites().fetch_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].uuid, "coin-uuid-003");
    assert_eq!(stored[0].symbol, "C3");

    assert!(!listing.toggle_favorite(3).unwrap());
    assert!(sdk.favorites().fetch_all().unwrap().is_empty());
}

#[test]
fn toggle_favorite_out_of_range_is_invalid_argument() {
    let transport = ScriptedTransport::new();
    let sdk = sdk_with(&transport);
    let listing = sdk.listing();

    assert!(matches!(
        listing.toggle_favorite(0),
        Err(CoinRankingError::InvalidArgument(_))
    ));
    assert!(matches!(
        listing.is_favorite(7),
        Err(CoinRankingError::InvalidArgument(_))
    ));
}
