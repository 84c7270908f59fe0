// @file: src/tests/models_config.rs
// @description: Wire model decoding and configuration-derived paths.
// @author: LAS.

use std::path::PathBuf;
use std::time::Duration;
use chrono::NaiveDate;
use serde_json::json;

use crate::connectors::deribit::DEFAULT_TIMEOUT;
use crate::core::models::{InstrumentKind, MarkPricePoint, OhlcvResult, OrderBook, PriceLevel};
use crate::utils::config::AppConfig;

//
// MODELS
//

#[test]
fn test_instrument_kind_wire_names() {
    assert_eq!(serde_json::to_value(InstrumentKind::FutureCombo).unwrap(), json!("future_combo"));
    assert_eq!(serde_json::from_value::<InstrumentKind>(json!("spot")).unwrap(), InstrumentKind::Spot);
    assert_eq!(InstrumentKind::Option.to_string(), "option");
}

#[test]
fn test_order_book_levels_decode_from_pairs() {
    let book: OrderBook = serde_json::from_value(json!({
        "instrument_name": "BTC-PERPETUAL",
        "timestamp": 1700000000000_i64,
        "bids": [[100.5, 3.0]],
        "asks": []
    }))
    .unwrap();

    assert_eq!(book.bids, vec![PriceLevel { price: 100.5, quantity: 3.0 }]);
    assert!(book.asks.is_empty());
    assert_eq!(book.mark_price, None);
}

#[test]
fn test_mark_price_point_decodes_from_pair() {
    let point: MarkPricePoint = serde_json::from_value(json!([1700000000000_i64, 0.5])).unwrap();
    assert_eq!(point, MarkPricePoint(1700000000000, 0.5));
}

#[test]
fn test_ohlcv_missing_optional_fields_default() {
    let result: OhlcvResult = serde_json::from_value(json!({
        "ticks": [1], "open": [1.0], "high": [1.0], "low": [1.0], "close": [1.0], "volume": [0.0]
    }))
    .unwrap();

    assert!(result.cost.is_empty());
    assert_eq!(result.status, None);
    assert_eq!(result.mismatched_column(), None);
}

#[test]
fn test_ohlcv_mismatch_reports_first_short_column() {
    let result = OhlcvResult {
        ticks: vec![1, 2],
        open: vec![1.0, 2.0],
        high: vec![1.0],
        low: vec![],
        close: vec![1.0, 2.0],
        volume: vec![1.0, 2.0],
        ..OhlcvResult::default()
    };
    assert_eq!(result.mismatched_column(), Some(("high", 1)));
}

//
// CONFIG
//

#[test]
fn test_default_config_matches_fixed_behavior() {
    let config = AppConfig::default();
    let client = config.client_config();

    assert!(!client.testnet);
    assert_eq!(client.timeout, DEFAULT_TIMEOUT);
    assert_eq!(client.base_url, None);
    assert_eq!(config.data_path(), PathBuf::from("data"));
}

#[test]
fn test_snapshot_path_uses_iso_date() {
    let config = AppConfig {
        data_dir: "/var/lib/snapshots".to_string(),
        request_timeout_secs: 3,
        ..AppConfig::default()
    };
    let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

    assert_eq!(
        config.snapshot_path(date),
        PathBuf::from("/var/lib/snapshots/btc_index_1m_2024-01-31.parquet")
    );
    assert_eq!(config.client_config().timeout, Duration::from_secs(3));
}
