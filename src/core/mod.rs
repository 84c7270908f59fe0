// @file: src/core/mod.rs
// @description: Exports domain data structures, errors and traits.
// @author: LAS.

pub mod errors;
pub mod interfaces;
pub mod models;
