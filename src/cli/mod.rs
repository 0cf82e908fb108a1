// file: src/cli/mod.rs
// version: 1.0.0
// guid: 7c1e5a93-b2d8-4f04-9e6a-38f0d4b1c7e2

//! Command line interface for the topology builder

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
