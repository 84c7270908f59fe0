// @file: src/tests/mod.rs
// @description: Test suites and shared test fixtures.
// @author: LAS.

mod models_config;
