// @file: src/collector.rs
// @description: Daily 1-minute BTC-PERPETUAL candle snapshot: fetch, reshape, persist.
// @author: LAS.

use std::path::Path;
use chrono::{DateTime, Utc};
use log::info;
use polars::prelude::DataFrame;

use crate::connectors::deribit::{ClientConfig, DeribitClient};
use crate::core::errors::{SnapshotError, StorageError};
use crate::core::interfaces::OhlcvSource;
use crate::core::models::{OhlcvResult, TimeWindow};
use crate::storage::parquet::{build_snapshot_frame, write_snapshot};


//
// CONSTANTS
//

pub const SNAPSHOT_INSTRUMENT: &str = "BTC-PERPETUAL";
pub const SNAPSHOT_RESOLUTION: &str = "1";


//
// PUBLIC INTERFACE
//

/// Fetches the last 24 hours of 1-minute candles and writes them to `output_path`.
pub fn collect_btc_index_1m_for_last_day(
    output_path: &Path,
    client_config: &ClientConfig,
) -> Result<usize, SnapshotError> {
    let mut client: DeribitClient = DeribitClient::new(client_config)?;
    collect_last_day(&mut client, output_path, Utc::now())
}

/// Window anchored at `now`; one fetch, one write. Returns the number of rows written.
pub fn collect_last_day<S: OhlcvSource>(
    source: &mut S,
    output_path: &Path,
    now: DateTime<Utc>,
) -> Result<usize, SnapshotError> {
    // #1. Compute Window
    let window: TimeWindow = TimeWindow::last_day(now);
    info!(
        "Collecting {} resolution={} from {} to {}",
        SNAPSHOT_INSTRUMENT, SNAPSHOT_RESOLUTION, window.start_ms, window.end_ms
    );

    // #2. Fetch
    let result: OhlcvResult = source.fetch_ohlcv(SNAPSHOT_INSTRUMENT, window, SNAPSHOT_RESOLUTION)?;

    // #3. Reshape & Persist
    check_columns(&result)?;
    let write_error = |source: StorageError| SnapshotError::Write {
        path: output_path.to_path_buf(),
        source,
    };
    let mut table: DataFrame = build_snapshot_frame(&result).map_err(write_error)?;
    write_snapshot(&mut table, output_path).map_err(write_error)?;

    info!("Snapshot written: {} rows -> {}", table.height(), output_path.display());
    Ok(table.height())
}

// Every column must match the tick count before anything touches the disk.
fn check_columns(result: &OhlcvResult) -> Result<(), SnapshotError> {
    match result.mismatched_column() {
        Some((column, actual)) => Err(SnapshotError::Shape {
            column,
            expected: result.len(),
            actual,
        }),
        None => Ok(()),
    }
}
