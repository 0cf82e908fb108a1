// file: src/config/mod.rs
// version: 1.0.0
// guid: 0c6d8f3a-7e21-4b59-a4d0-95b3e1f7c82d

//! Build configuration for the topology fixture
//!
//! Every field has a default, and `BuildConfig::default()` yields the stock
//! orchestrator fixture.

pub mod loader;

pub use loader::ConfigLoader;

use crate::{error::TopologyError, topology::units, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Settings a topology is assembled from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Literal prefix of the randomized topology name
    pub name_prefix: String,
    /// The orchestrator node
    pub orchestrator: OrchestratorSpec,
    /// Additional plain nodes, appended after the orchestrator
    pub nodes: Vec<PlainNodeSpec>,
}

/// Orchestrator node parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorSpec {
    pub name: String,
    /// Base OS image reference
    pub image: String,
    /// CPU cores
    pub cpu: u32,
    /// Memory in GB
    pub memory: u64,
    /// Data disk size in GB
    pub disk: u64,
}

/// Plain node parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainNodeSpec {
    pub name: String,
    pub image: String,
    /// Accepted for symmetry with the orchestrator, not carried into the node
    #[serde(default = "default_plain_cpu")]
    pub cpu: u32,
    /// Memory in GB
    pub memory: u64,
}

fn default_plain_cpu() -> u32 {
    1
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            name_prefix: "orchestrator".to_string(),
            orchestrator: OrchestratorSpec::default(),
            nodes: Vec::new(),
        }
    }
}

impl Default for OrchestratorSpec {
    fn default() -> Self {
        Self {
            name: "orchestrator".to_string(),
            image: "ubuntu-2204".to_string(),
            cpu: 8,
            memory: 32,
            disk: 64,
        }
    }
}

impl BuildConfig {
    /// Validate the build configuration
    pub fn validate(&self) -> Result<()> {
        if self.name_prefix.is_empty() {
            return Err(TopologyError::config("Topology name prefix cannot be empty"));
        }

        self.orchestrator.validate()?;

        let mut names = HashSet::new();
        names.insert(self.orchestrator.name.as_str());
        for node in &self.nodes {
            node.validate()?;
            if !names.insert(node.name.as_str()) {
                return Err(TopologyError::config(format!(
                    "Duplicate node name: {}",
                    node.name
                )));
            }
        }

        Ok(())
    }
}

impl OrchestratorSpec {
    /// Validate orchestrator parameters
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(TopologyError::config("Orchestrator name cannot be empty"));
        }
        if self.image.is_empty() {
            return Err(TopologyError::config("Orchestrator image cannot be empty"));
        }
        if self.cpu == 0 {
            return Err(TopologyError::config(
                "Orchestrator must have at least 1 CPU core",
            ));
        }
        if self.memory == 0 {
            return Err(TopologyError::config(
                "Orchestrator memory must be at least 1 GB",
            ));
        }
        if units::checked_gb(self.memory).is_none() {
            return Err(TopologyError::config(format!(
                "Orchestrator memory of {} GB does not fit in a byte count",
                self.memory
            )));
        }
        if self.disk == 0 {
            return Err(TopologyError::config(
                "Orchestrator disk must be at least 1 GB",
            ));
        }
        Ok(())
    }
}

impl PlainNodeSpec {
    /// Validate plain node parameters
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(TopologyError::config("Node name cannot be empty"));
        }
        if self.image.is_empty() {
            return Err(TopologyError::config(format!(
                "Node {} has no image",
                self.name
            )));
        }
        if self.memory == 0 {
            return Err(TopologyError::config(format!(
                "Node {} memory must be at least 1 GB",
                self.name
            )));
        }
        if units::checked_gb(self.memory).is_none() {
            return Err(TopologyError::config(format!(
                "Node {} memory of {} GB does not fit in a byte count",
                self.name, self.memory
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(name: &str) -> PlainNodeSpec {
        PlainNodeSpec {
            name: name.to_string(),
            image: "debian-12".to_string(),
            cpu: 2,
            memory: 4,
        }
    }

    #[test]
    fn test_default_is_stock_fixture() {
        let c = BuildConfig::default();
        assert_eq!(c.name_prefix, "orchestrator");
        assert_eq!(c.orchestrator.name, "orchestrator");
        assert_eq!(c.orchestrator.image, "ubuntu-2204");
        assert_eq!(
            (c.orchestrator.cpu, c.orchestrator.memory, c.orchestrator.disk),
            (8, 32, 64)
        );
        assert!(c.nodes.is_empty());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let c: BuildConfig = serde_yaml::from_str("orchestrator:\n  cpu: 4\n").unwrap();
        assert_eq!(c.orchestrator.cpu, 4);
        assert_eq!(c.orchestrator.memory, 32);
        assert_eq!(c.name_prefix, "orchestrator");
    }

    #[test]
    fn test_orchestrator_validate() {
        let mut c = BuildConfig::default();
        c.orchestrator.cpu = 0;
        assert!(c.validate().is_err());

        let mut c = BuildConfig::default();
        c.orchestrator.disk = 0;
        assert!(c.validate().is_err());

        let mut c = BuildConfig::default();
        c.orchestrator.image.clear();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_memory_overflow_rejected() {
        let mut c = BuildConfig::default();
        c.orchestrator.memory = 1 << 34;
        assert!(matches!(c.validate(), Err(TopologyError::Config(_))));

        let mut c = BuildConfig::default();
        let mut w = worker("w");
        w.memory = u64::MAX;
        c.nodes.push(w);
        assert!(matches!(c.validate(), Err(TopologyError::Config(_))));

        let mut c = BuildConfig::default();
        c.orchestrator.memory = u64::MAX / units::BYTES_PER_GB;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_node_names_must_be_unique() {
        let mut c = BuildConfig::default();
        c.nodes = vec![worker("a"), worker("b")];
        assert!(c.validate().is_ok());

        c.nodes.push(worker("a"));
        assert!(c.validate().is_err());

        c.nodes = vec![worker("orchestrator")];
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_plain_node_cpu_defaults() {
        let n: PlainNodeSpec =
            serde_yaml::from_str("name: w\nimage: debian-12\nmemory: 2\n").unwrap();
        assert_eq!(n.cpu, 1);
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let mut c = BuildConfig::default();
        c.name_prefix.clear();
        assert!(c.validate().is_err());
    }
}
