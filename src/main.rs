// @file: src/main.rs
// @description: Scheduled entry point: writes today's 1-minute BTC-PERPETUAL snapshot under data/.
// @author: LAS.

use std::fs;
use std::path::PathBuf;
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use log::info;

use deribit_snapshot::collect_btc_index_1m_for_last_day;
use deribit_snapshot::utils::config::AppConfig;

fn main() -> Result<()> {
    // 1. Load Environment & Config
    dotenv::dotenv().ok();
    let config: AppConfig = AppConfig::load().context("Failed to load configuration")?;

    // 2. Initialize Logger
    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str())).init();

    info!(">>> Deribit Snapshot Collector Starting... <<<");

    // 3. Prepare Output Location
    let today: NaiveDate = Utc::now().date_naive();
    let data_dir: PathBuf = config.data_path();
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;

    let output_path: PathBuf = config.snapshot_path(today);

    // 4. Collect
    let rows: usize = collect_btc_index_1m_for_last_day(&output_path, &config.client_config())?;

    info!(">>> Done: {} rows in {} <<<", rows, output_path.display());
    Ok(())
}
