// @file: src/connectors/deribit/mod.rs
// @description: Blocking JSON-RPC client for the public Deribit v2 market data endpoints.
// @author: LAS.

pub mod rpc;

use std::time::Duration;
use log::{debug, warn};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use url::Url;

use crate::core::errors::RpcClientError;
use crate::core::interfaces::OhlcvSource;
use crate::core::models::{
    BookSummary, IndexPrice, Instrument, InstrumentKind, LastTrades,
    MarkPricePoint, OhlcvResult, OrderBook, TimeWindow,
};
use self::rpc::{Params, RpcRequest};


//
// CONSTANTS
//

pub const PRODUCTION_URL: &str = "https://www.deribit.com/api/v2";
pub const TESTNET_URL: &str = "https://test.deribit.com/api/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_CURRENCY: &str = "BTC";
pub const DEFAULT_ORDER_BOOK_DEPTH: u32 = 50;
pub const DEFAULT_TRADE_COUNT: u32 = 100;
pub const DEFAULT_INDEX_NAME: &str = "btc_usd";


//
// CONFIGURATION
//

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub testnet: bool,
    pub timeout: Duration,
    // Replaces the production/testnet URL when set
    pub base_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            testnet: false,
            timeout: DEFAULT_TIMEOUT,
            base_url: None,
        }
    }
}

impl ClientConfig {
    pub fn resolve_base_url(&self) -> Result<String, RpcClientError> {
        match &self.base_url {
            Some(raw) => Url::parse(raw)
                .map(|u| u.as_str().trim_end_matches('/').to_string())
                .map_err(|e| RpcClientError::InvalidRequest(format!("Invalid base URL '{}': {}", raw, e))),
            None if self.testnet => Ok(TESTNET_URL.to_string()),
            None => Ok(PRODUCTION_URL.to_string()),
        }
    }
}


//
// CLIENT
//

pub struct DeribitClient {
    http: Client,
    base_url: String,
    last_id: u64,
}

impl DeribitClient {
    //
    // INITIALIZATION
    //

    pub fn new(config: &ClientConfig) -> Result<Self, RpcClientError> {
        let base_url: String = config.resolve_base_url()?;

        let http: Client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(RpcClientError::Transport)?;

        debug!("Deribit client ready: {} (timeout {:?})", base_url, config.timeout);

        Ok(DeribitClient {
            http,
            base_url,
            last_id: 0,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Id assigned to the most recent call attempt (0 before the first call).
    pub fn last_request_id(&self) -> u64 {
        self.last_id
    }

    //
    // GENERIC CALL
    //

    pub fn call(&mut self, method: &str, params: Params) -> Result<Value, RpcClientError> {
        if method.is_empty() {
            return Err(RpcClientError::InvalidRequest("Method name must not be empty".to_string()));
        }

        // #1. Assign Sequence Id
        // Consumed before sending so failed attempts still advance the counter.
        self.last_id += 1;
        let id: u64 = self.last_id;
        let request = RpcRequest::new(id, method, &params);

        debug!("RPC #{} -> {}", id, method);

        // #2. Execute Request
        let response: Response = self.http
            .post(&self.base_url)
            .json(&request)
            .send()
            .map_err(|e| {
                warn!("RPC #{} {} transport failure: {}", id, method, e);
                RpcClientError::Transport(e)
            })?;

        // #3. Reject Non-Success Status
        // Checked before the body is interpreted as JSON.
        let status = response.status();
        if !status.is_success() {
            let body: String = response.text().unwrap_or_default();
            warn!("RPC #{} {} HTTP {}", id, method, status);
            return Err(RpcClientError::Http { status: status.as_u16(), body });
        }

        // #4. Unpack Envelope
        let body: String = response.text().map_err(RpcClientError::Transport)?;
        let envelope = rpc::parse_response(&body)?;

        if let Some(echoed) = envelope.id {
            if echoed != id {
                warn!("RPC #{} {} answered with id {}", id, method, echoed);
            }
        }

        envelope.into_result().map_err(|e| {
            warn!("RPC #{} {} failed: {}", id, method, e);
            e
        })
    }

    pub fn call_typed<T: DeserializeOwned>(&mut self, method: &str, params: Params) -> Result<T, RpcClientError> {
        let value: Value = self.call(method, params)?;
        serde_json::from_value(value)
            .map_err(|e| RpcClientError::InvalidResponse(format!("Unexpected result shape for {}: {}", method, e)))
    }

    //
    // INSTRUMENTS / METADATA
    //

    pub fn get_instruments(
        &mut self,
        currency: &str,
        kind: InstrumentKind,
        expired: bool,
    ) -> Result<Vec<Instrument>, RpcClientError> {
        let params = object(json!({ "currency": currency, "kind": kind.as_str(), "expired": expired }));
        self.call_typed("public/get_instruments", params)
    }

    pub fn get_instrument(&mut self, instrument_name: &str) -> Result<Instrument, RpcClientError> {
        let params = object(json!({ "instrument_name": instrument_name }));
        self.call_typed("public/get_instrument", params)
    }

    //
    // SUMMARIES / PRICES
    //

    pub fn get_book_summary_by_currency(
        &mut self,
        currency: &str,
        kind: InstrumentKind,
    ) -> Result<Vec<BookSummary>, RpcClientError> {
        let params = object(json!({ "currency": currency, "kind": kind.as_str() }));
        self.call_typed("public/get_book_summary_by_currency", params)
    }

    /// Returns the raw result: the sole summary when the exchange answers with a
    /// non-empty array, otherwise whatever value it sent.
    pub fn get_book_summary_by_instrument(&mut self, instrument_name: &str) -> Result<Value, RpcClientError> {
        let params = object(json!({ "instrument_name": instrument_name }));
        let result: Value = self.call("public/get_book_summary_by_instrument", params)?;
        Ok(rpc::unwrap_single(result))
    }

    pub fn get_mark_price_history(
        &mut self,
        instrument_name: &str,
        window: TimeWindow,
    ) -> Result<Vec<MarkPricePoint>, RpcClientError> {
        let params = object(json!({
            "instrument_name": instrument_name,
            "start_timestamp": window.start_ms,
            "end_timestamp": window.end_ms,
        }));
        self.call_typed("public/get_mark_price_history", params)
    }

    //
    // ORDER BOOK / TRADES
    //

    pub fn get_order_book(&mut self, instrument_name: &str, depth: u32) -> Result<OrderBook, RpcClientError> {
        let params = object(json!({ "instrument_name": instrument_name, "depth": depth }));
        self.call_typed("public/get_order_book", params)
    }

    pub fn get_last_trades_by_instrument(
        &mut self,
        instrument_name: &str,
        count: u32,
        include_old: bool,
    ) -> Result<LastTrades, RpcClientError> {
        let params = object(json!({
            "instrument_name": instrument_name,
            "count": count,
            "include_old": include_old,
        }));
        self.call_typed("public/get_last_trades_by_instrument", params)
    }

    //
    // INDEX / OHLCV
    //

    pub fn get_index_price(&mut self, index_name: &str) -> Result<IndexPrice, RpcClientError> {
        let params = object(json!({ "index_name": index_name }));
        self.call_typed("public/get_index_price", params)
    }

    pub fn get_tradingview_chart_data(
        &mut self,
        instrument_name: &str,
        window: TimeWindow,
        resolution: &str,
    ) -> Result<OhlcvResult, RpcClientError> {
        let params = object(json!({
            "instrument_name": instrument_name,
            "start_timestamp": window.start_ms,
            "end_timestamp": window.end_ms,
            "resolution": resolution,
        }));
        self.call_typed("public/get_tradingview_chart_data", params)
    }
}

impl OhlcvSource for DeribitClient {
    fn fetch_ohlcv(
        &mut self,
        instrument_name: &str,
        window: TimeWindow,
        resolution: &str,
    ) -> Result<OhlcvResult, RpcClientError> {
        self.get_tradingview_chart_data(instrument_name, window, resolution)
    }
}


//
// INTERNAL HELPERS
//

fn object(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        _ => Params::new(),
    }
}
