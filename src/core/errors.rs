// @file: src/core/errors.rs
// @description: Error taxonomy for the RPC client, Parquet storage and the snapshot collector.
// @author: LAS.

use std::path::PathBuf;
use serde_json::Value;
use thiserror::Error;


//
// RPC CLIENT
//

#[derive(Error, Debug)]
pub enum RpcClientError {
    #[error("Transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Deribit error {}: {message}", code_label(.code))]
    RemoteProcedure {
        code: Option<i64>,
        message: String,
        data: Option<Value>,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl RpcClientError {
    /// Server-side error code, present only for remote procedure failures.
    pub fn code(&self) -> Option<i64> {
        match self {
            RpcClientError::RemoteProcedure { code, .. } => *code,
            _ => None,
        }
    }
}

fn code_label(code: &Option<i64>) -> String {
    code.map_or_else(|| "(no code)".to_string(), |c| c.to_string())
}


//
// STORAGE
//

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}


//
// COLLECTOR
//

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error(transparent)]
    Rpc(#[from] RpcClientError),

    #[error("Malformed OHLCV result: column '{column}' has {actual} values, expected {expected}")]
    Shape {
        column: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to write snapshot to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: StorageError,
    },
}
