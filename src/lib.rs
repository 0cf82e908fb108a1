// file: src/lib.rs
// version: 1.0.0
// guid: b6e1c8f4-0d27-4a93-8e5b-f7a2d9c30e18

//! # Orchestrator Topology
//!
//! Builds the topology fixture consumed by the orchestrator integration test
//! harness: a randomized topology name, the orchestrator virtual machine with
//! its CPU, memory, data disk and source mount, and the (reserved, empty)
//! switch and link lists.
//!
//! ```no_run
//! use orchestrator_topology::topology::{build_topology, SystemEnvironment};
//!
//! let topo = build_topology(&SystemEnvironment)?;
//! println!("{}", topo.to_json()?);
//! # Ok::<(), orchestrator_topology::TopologyError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod topology;

pub use error::{Result, TopologyError};
pub use topology::{build_topology, build_topology_with, Topology};

/// Version information for the builder
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build information
pub const BUILD_INFO: &str = concat!(
    "Version: ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "Package: ",
    env!("CARGO_PKG_NAME"),
    "\n"
);
