// @file: src/utils/mod.rs
// @description: Runtime configuration helpers.
// @author: LAS.

pub mod config;
