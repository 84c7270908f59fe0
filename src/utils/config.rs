// @file: src/utils/config.rs
// @description: Layered runtime configuration (defaults, optional config file, APP_* env vars).
// @author: LAS.

use std::path::PathBuf;
use std::time::Duration;
use chrono::NaiveDate;
use serde::Deserialize;
use config::{Config, ConfigError, File, Environment};
use crate::connectors::deribit::ClientConfig;

//
// CONSTANTS
//

pub const SNAPSHOT_FILE_PREFIX: &str = "btc_index_1m";

//
// TYPE DEFINITIONS
//

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,

    // Deribit Client
    pub testnet: bool,
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub rpc_url: Option<String>,

    // Output
    pub data_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: "info".to_string(),
            testnet: false,
            request_timeout_secs: 10,
            rpc_url: None,
            data_dir: "data".to_string(),
        }
    }
}

impl AppConfig {
    //
    // PUBLIC INTERFACE
    //

    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("testnet", false)?
            .set_default("request_timeout_secs", 10)?
            .set_default("data_dir", "data")?

            // File & Env Overrides
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP").try_parsing(true));

        let config = builder.build()?;
        config.try_deserialize()
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            testnet: self.testnet,
            timeout: Duration::from_secs(self.request_timeout_secs),
            base_url: self.rpc_url.clone(),
        }
    }

    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    // Format: <data_dir>/btc_index_1m_2024-01-31.parquet
    pub fn snapshot_path(&self, date: NaiveDate) -> PathBuf {
        self.data_path()
            .join(format!("{}_{}.parquet", SNAPSHOT_FILE_PREFIX, date.format("%Y-%m-%d")))
    }
}
