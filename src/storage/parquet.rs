// @file: src/storage/parquet.rs
// @description: Snapshot table construction and atomic Parquet persistence.
// @author: LAS.

use std::fs::File;
use std::path::Path;
use log::debug;
use polars::prelude::*;
use tempfile::NamedTempFile;

use crate::core::errors::StorageError;
use crate::core::models::OhlcvResult;


//
// SCHEMA
//

pub const SNAPSHOT_COLUMNS: [&str; 6] = ["timestamp", "open", "high", "low", "close", "volume"];

pub fn timestamp_dtype() -> DataType {
    DataType::Datetime(TimeUnit::Milliseconds, Some("UTC".into()))
}


//
// TABLE CONSTRUCTION
//

/// Builds the snapshot table. Callers check column lengths first; polars
/// rejects unequal columns as a shape error.
pub fn build_snapshot_frame(result: &OhlcvResult) -> Result<DataFrame, StorageError> {
    // #1. Tick Column
    // Raw epoch milliseconds reinterpreted as UTC datetimes.
    let timestamp: Series = Series::new("timestamp".into(), result.ticks.as_slice())
        .cast(&timestamp_dtype())?;

    // #2. Assemble In Server Order
    let df = DataFrame::new(vec![
        timestamp.into(),
        Series::new("open".into(), result.open.as_slice()).into(),
        Series::new("high".into(), result.high.as_slice()).into(),
        Series::new("low".into(), result.low.as_slice()).into(),
        Series::new("close".into(), result.close.as_slice()).into(),
        Series::new("volume".into(), result.volume.as_slice()).into(),
    ])?;

    Ok(df)
}


//
// PERSISTENCE
//

// #1. Atomic Write
// The frame is written to a temp file beside the target and renamed over it,
// so a failed write leaves no file at `path` (and keeps any previous one).
pub fn write_snapshot(df: &mut DataFrame, path: &Path) -> Result<u64, StorageError> {
    let dir: &Path = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp: NamedTempFile = NamedTempFile::new_in(dir)?;
    let bytes: u64 = ParquetWriter::new(tmp.as_file_mut())
        .with_compression(ParquetCompression::Zstd(None))
        .finish(df)?;

    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| StorageError::Io(e.error))?;

    debug!("Wrote {} rows ({} bytes) to {}", df.height(), bytes, path.display());
    Ok(bytes)
}

pub fn read_snapshot(path: &Path) -> Result<DataFrame, StorageError> {
    let file: File = File::open(path)?;
    let df: DataFrame = ParquetReader::new(file).finish()?;
    Ok(df)
}
