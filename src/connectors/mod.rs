// @file: src/connectors/mod.rs
// @description: Exchange connectors.
// @author: LAS.

pub mod deribit;

pub use deribit::{ClientConfig, DeribitClient};
