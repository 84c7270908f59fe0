// @file: src/core/models.rs
// @description: Deribit result descriptors, the OHLCV chart payload and the collection window.
// @author: LAS.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;


//
// REQUEST ENUMS
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentKind {
    Future,
    Option,
    Spot,
    FutureCombo,
    OptionCombo,
}

impl InstrumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentKind::Future => "future",
            InstrumentKind::Option => "option",
            InstrumentKind::Spot => "spot",
            InstrumentKind::FutureCombo => "future_combo",
            InstrumentKind::OptionCombo => "option_combo",
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


//
// INSTRUMENT METADATA
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    pub instrument_name: String,
    pub kind: InstrumentKind,
    pub base_currency: String,
    pub quote_currency: String,
    #[serde(default)] pub settlement_currency: Option<String>,
    #[serde(default)] pub settlement_period: Option<String>,
    pub tick_size: f64,
    pub min_trade_amount: f64,
    pub contract_size: f64,
    pub is_active: bool,
    pub creation_timestamp: i64,
    pub expiration_timestamp: i64,

    // Options only
    #[serde(default)] pub strike: Option<f64>,
    #[serde(default)] pub option_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSummary {
    pub instrument_name: String,
    pub creation_timestamp: i64,
    #[serde(default)] pub base_currency: Option<String>,
    #[serde(default)] pub quote_currency: Option<String>,
    #[serde(default)] pub bid_price: Option<f64>,
    #[serde(default)] pub ask_price: Option<f64>,
    #[serde(default)] pub mid_price: Option<f64>,
    #[serde(default)] pub last: Option<f64>,
    #[serde(default)] pub high: Option<f64>,
    #[serde(default)] pub low: Option<f64>,
    #[serde(default)] pub mark_price: Option<f64>,
    #[serde(default)] pub mark_iv: Option<f64>,
    #[serde(default)] pub underlying_price: Option<f64>,
    #[serde(default)] pub underlying_index: Option<String>,
    #[serde(default)] pub estimated_delivery_price: Option<f64>,
    #[serde(default)] pub interest_rate: Option<f64>,
    #[serde(default)] pub open_interest: Option<f64>,
    #[serde(default)] pub volume: Option<f64>,
    #[serde(default)] pub volume_usd: Option<f64>,
    #[serde(default)] pub price_change: Option<f64>,
    #[serde(default)] pub funding_8h: Option<f64>,
    #[serde(default)] pub current_funding: Option<f64>,
}

/// One `[timestamp, mark_price]` pair from the mark price history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MarkPricePoint(pub i64, pub f64);

impl MarkPricePoint {
    pub fn timestamp_ms(&self) -> i64 {
        self.0
    }

    pub fn price(&self) -> f64 {
        self.1
    }
}


//
// ORDER BOOK & TRADES
//

/// Deribit encodes book levels as `[price, amount]` arrays.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(from = "(f64, f64)")]
pub struct PriceLevel {
    pub price: f64,
    pub quantity: f64,
}

impl From<(f64, f64)> for PriceLevel {
    fn from((price, quantity): (f64, f64)) -> Self {
        PriceLevel { price, quantity }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBook {
    pub instrument_name: String,
    pub timestamp: i64,
    #[serde(default)] pub change_id: Option<u64>,
    #[serde(default)] pub state: Option<String>,
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
    #[serde(default)] pub best_bid_price: Option<f64>,
    #[serde(default)] pub best_bid_amount: Option<f64>,
    #[serde(default)] pub best_ask_price: Option<f64>,
    #[serde(default)] pub best_ask_amount: Option<f64>,
    #[serde(default)] pub mark_price: Option<f64>,
    #[serde(default)] pub index_price: Option<f64>,
    #[serde(default)] pub last_price: Option<f64>,
    #[serde(default)] pub open_interest: Option<f64>,
    #[serde(default)] pub underlying_price: Option<f64>,
    #[serde(default)] pub mark_iv: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: String,
    #[serde(default)] pub trade_seq: Option<u64>,
    pub instrument_name: String,
    pub timestamp: i64,
    pub price: f64,
    pub amount: f64,
    pub direction: TradeSide,
    #[serde(default)] pub index_price: Option<f64>,
    #[serde(default)] pub mark_price: Option<f64>,
    #[serde(default)] pub iv: Option<f64>,
    #[serde(default)] pub tick_direction: Option<i32>,
    #[serde(default)] pub liquidation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastTrades {
    pub trades: Vec<Trade>,
    #[serde(default)] pub has_more: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IndexPrice {
    pub index_price: f64,
    #[serde(default)] pub estimated_delivery_price: Option<f64>,
}


//
// OHLCV CHART DATA
//

/// Column-oriented candle payload of `public/get_tradingview_chart_data`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OhlcvResult {
    pub ticks: Vec<i64>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Vec<f64>,
    #[serde(default)] pub cost: Vec<f64>,
    #[serde(default)] pub status: Option<String>,
}

impl OhlcvResult {
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    // #1. Parallel Column Check
    // Returns the name of the first value column whose length differs from `ticks`.
    pub fn mismatched_column(&self) -> Option<(&'static str, usize)> {
        let expected: usize = self.ticks.len();
        [
            ("open", self.open.len()),
            ("high", self.high.len()),
            ("low", self.low.len()),
            ("close", self.close.len()),
            ("volume", self.volume.len()),
        ]
        .into_iter()
        .find(|(_, len)| *len != expected)
    }
}


//
// COLLECTION WINDOW
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TimeWindow {
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        TimeWindow { start_ms, end_ms }
    }

    /// The 24 hours ending at `now`, in whole milliseconds (sub-ms precision is truncated).
    pub fn last_day(now: DateTime<Utc>) -> Self {
        let start: DateTime<Utc> = now - Duration::hours(24);
        TimeWindow {
            start_ms: start.timestamp_millis(),
            end_ms: now.timestamp_millis(),
        }
    }

    pub fn span_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }
}
