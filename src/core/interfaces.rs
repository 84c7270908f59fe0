// @file: src/core/interfaces.rs
// @description: Seam between the snapshot collector and whatever serves OHLCV chart data.
// @author: LAS.

use crate::core::errors::RpcClientError;
use crate::core::models::{OhlcvResult, TimeWindow};

//
// TRAIT DEFINITIONS
//

pub trait OhlcvSource {
    // #1. Fetch candles for one instrument over a closed window
    // `resolution` is passed through as the exchange spells it ("1", "60", "1D", ...).
    fn fetch_ohlcv(
        &mut self,
        instrument_name: &str,
        window: TimeWindow,
        resolution: &str,
    ) -> Result<OhlcvResult, RpcClientError>;
}
