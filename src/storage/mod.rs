// @file: src/storage/mod.rs
// @description: Columnar snapshot storage.
// @author: LAS.

pub mod parquet;

pub use parquet::{build_snapshot_frame, read_snapshot, write_snapshot, SNAPSHOT_COLUMNS};
