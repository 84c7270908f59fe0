// @file: src/lib.rs
// @description: Deribit public market data client and daily Parquet snapshot collector.
// @author: LAS.

pub mod collector;
pub mod connectors;
pub mod core;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::collector::{collect_btc_index_1m_for_last_day, collect_last_day};
pub use crate::connectors::deribit::{ClientConfig, DeribitClient};
pub use crate::core::errors::{RpcClientError, SnapshotError, StorageError};
pub use crate::core::models::{OhlcvResult, TimeWindow};
