// file: src/logging/mod.rs
// version: 1.0.0
// guid: 92d5c1e8-6f3a-4b07-a9e4-0b7c2d8f1a56

//! Logging setup

pub mod logger;

pub use logger::{init_json_logger, init_logger};
