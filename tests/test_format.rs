//! Formatting helpers for amounts, coin details and chart labels.

mod common;

use coinranking_sdk::format::{format_large_number, formatted_value, LargeNumberUnit};
use coinranking_sdk::models::{CoinDetail, CoinDetailResponse, PriceHistoryPoint};

fn btc() -> CoinDetail {
    let response: CoinDetailResponse = serde_json::from_value(common::btc_detail_json()).unwrap();
    response.data.coin.unwrap()
}

fn bare(uuid: &str) -> CoinDetail {
    serde_json::from_value(serde_json::json!({ "uuid": uuid })).unwrap()
}

// ---------------------------------------------------------------------------
// format_large_number / formatted_value
// ---------------------------------------------------------------------------

#[test]
fn unit_is_largest_not_exceeding_value() {
    assert_eq!(LargeNumberUnit::for_value(2.5e12), LargeNumberUnit::Trillion);
    assert_eq!(LargeNumberUnit::for_value(1e9), LargeNumberUnit::Billion);
    assert_eq!(LargeNumberUnit::for_value(999_999.0), LargeNumberUnit::None);
    assert_eq!(LargeNumberUnit::Million.suffix(), "M");
    assert_eq!(LargeNumberUnit::None.suffix(), "");
}

#[test]
fn large_numbers_are_abbreviated() {
    assert_eq!(format_large_number(1_593_939_043_040.0), "$ 1.59T");
    assert_eq!(format_large_number(6_818_750_000.0), "$ 6.82B");
    assert_eq!(format_large_number(18_207_162.0), "$ 18.21M");
    assert_eq!(format_large_number(19_500.0), "$ 19500.00");
    assert_eq!(format_large_number(1.0), "$ 1.00");
}

#[test]
fn small_numbers_keep_eight_decimals() {
    assert_eq!(format_large_number(0.00001234), "$ 0.00001234");
    assert_eq!(format_large_number(0.5), "$ 0.50000000");
}

#[test]
fn formatted_value_handles_missing_and_garbage() {
    assert_eq!(formatted_value(Some("21000000")), "$ 21.00M");
    assert_eq!(formatted_value(None), "N/A");
    assert_eq!(formatted_value(Some("")), "N/A");
    assert_eq!(formatted_value(Some("abc")), "N/A");
}

// ---------------------------------------------------------------------------
// CoinDetail display helpers
// ---------------------------------------------------------------------------

#[test]
fn detail_display_values() {
    let coin = btc();
    assert_eq!(coin.display_name(), "Bitcoin");
    assert_eq!(coin.display_symbol(), "BTC");
    assert_eq!(coin.formatted_price(), "$ 9371.00");
    assert_eq!(coin.rank_text(), "1");
    assert_eq!(coin.exchanges_text(), "190");
    assert_eq!(
        coin.trimmed_description(),
        "Bitcoin is the first decentralized digital currency."
    );
}

#[test]
fn detail_amounts_use_large_number_format() {
    let coin = btc();
    assert_eq!(coin.formatted_market_cap(), "$ 1.59T");
    assert_eq!(coin.formatted_volume_24h(), "$ 6.82B");
    assert_eq!(coin.formatted_all_time_high(), "$ 19500.00");
    assert_eq!(coin.formatted_circulating_supply(), "$ 18.21M");
    assert_eq!(coin.formatted_total_supply(), "$ 18.21M");
    assert_eq!(coin.formatted_max_supply(), "$ 21.00M");
}

#[test]
fn negative_change_gets_down_arrow() {
    let coin = btc();
    assert!(coin.is_negative_change());
    assert_eq!(coin.change_text(), "▼ -0.52 %");
}

#[test]
fn positive_change_gets_up_arrow() {
    let mut coin = btc();
    coin.change = Some("3.1".into());
    assert!(!coin.is_negative_change());
    assert_eq!(coin.change_text(), "▲ 3.1 %");
}

#[test]
fn missing_fields_fall_back() {
    let coin = bare("x");
    assert_eq!(coin.display_name(), "N/A");
    assert_eq!(coin.display_symbol(), "N/A");
    assert_eq!(coin.formatted_price(), "N/A");
    assert_eq!(coin.change_text(), "--");
    assert!(!coin.is_negative_change());
    assert_eq!(coin.formatted_market_cap(), "N/A");
    assert_eq!(coin.formatted_all_time_high(), "N/A");
    assert_eq!(coin.formatted_max_supply(), "N/A");
    assert_eq!(coin.rank_text(), "N/A");
    assert_eq!(coin.exchanges_text(), "N/A");
    assert_eq!(coin.trimmed_description(), "N/A");
}

// ---------------------------------------------------------------------------
// Chart labels
// ---------------------------------------------------------------------------

#[test]
fn history_point_date_label() {
    let point = PriceHistoryPoint {
        price: Some("9388.50".into()),
        timestamp: 1580000000,
    };
    assert_eq!(point.formatted_date().as_deref(), Some("Jan 26, 12:53 AM"));
}

#[test]
fn history_point_date_out_of_range_is_none() {
    let point = PriceHistoryPoint {
        price: None,
        timestamp: i64::MAX,
    };
    assert!(point.formatted_date().is_none());
}
