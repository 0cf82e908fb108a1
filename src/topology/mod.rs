// file: src/topology/mod.rs
// version: 1.0.0
// guid: 6e0b4f12-9a8d-4c37-b1e5-d27c83a4f960

//! Topology fixture for the orchestrator integration tests
//!
//! A topology names a test environment and lists its virtual machines.
//! Switches and links are part of the record but this builder never
//! populates them.

pub mod environment;
pub mod node;
pub mod units;
pub mod validator;

pub use environment::{Environment, FixedEnvironment, SystemEnvironment};
pub use node::{
    node, orchestrator, CpuSpec, Disk, MemorySpec, Mount, Node, OrchestratorNode, PlainNode,
};

use crate::{config::BuildConfig, error::TopologyError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Number of characters of the random draw appended to the topology name
pub const NAME_SUFFIX_LEN: usize = 6;

/// Root fixture record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub name: String,
    pub nodes: Vec<Node>,
    /// Reserved, always empty
    pub switches: Vec<serde_json::Value>,
    /// Reserved, always empty
    pub links: Vec<serde_json::Value>,
}

impl Topology {
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name() == name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Build the default orchestrator topology
pub fn build_topology(env: &dyn Environment) -> Result<Topology> {
    build_topology_with(&BuildConfig::default(), env)
}

/// Build a topology from `config`, reading the working directory and one
/// random draw from `env`
pub fn build_topology_with(config: &BuildConfig, env: &dyn Environment) -> Result<Topology> {
    let cwd = env.working_dir()?;
    let name = format!("{}{}", config.name_prefix, random_suffix(env.random_unit()?)?);

    let spec = &config.orchestrator;
    let mut nodes = vec![Node::from(orchestrator(
        spec.name.as_str(),
        spec.image.as_str(),
        spec.cpu,
        spec.memory,
        spec.disk,
        &cwd,
    ))];
    nodes.extend(
        config
            .nodes
            .iter()
            .map(|n| Node::from(node(n.name.as_str(), n.image.as_str(), n.cpu, n.memory))),
    );

    info!("Built topology {} with {} node(s)", name, nodes.len());

    Ok(Topology {
        name,
        nodes,
        switches: Vec::new(),
        links: Vec::new(),
    })
}

/// Last [`NAME_SUFFIX_LEN`] characters of the decimal form of `r`.
///
/// The suffix is taken literally, so a draw of `0.1234` yields `0.1234`.
/// Forms shorter than the suffix (`0`, `0.5`) are zero-padded in the fraction
/// first, giving `0.0000` and `0.5000`.
pub fn random_suffix(r: f64) -> Result<String> {
    if !(0.0..1.0).contains(&r) {
        return Err(TopologyError::environment(format!(
            "Random value {} is outside [0, 1)",
            r
        )));
    }

    let mut digits = r.to_string();
    if digits.len() < NAME_SUFFIX_LEN {
        if !digits.contains('.') {
            digits.push('.');
        }
        while digits.len() < NAME_SUFFIX_LEN {
            digits.push('0');
        }
    }

    let suffix = digits[digits.len() - NAME_SUFFIX_LEN..].to_string();
    debug!("Random draw {} gives name suffix {}", r, suffix);
    Ok(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlainNodeSpec;

    #[test]
    fn test_random_suffix_takes_trailing_digits() {
        assert_eq!(random_suffix(0.123456789).unwrap(), "456789");
        assert_eq!(random_suffix(0.8414709848078965).unwrap(), "078965");
    }

    #[test]
    fn test_random_suffix_is_literal_tail() {
        assert_eq!(random_suffix(0.1234).unwrap(), "0.1234");
        assert_eq!(random_suffix(0.12345).unwrap(), ".12345");
        assert_eq!(random_suffix(0.123456).unwrap(), "123456");
    }

    #[test]
    fn test_random_suffix_pads_short_draws() {
        assert_eq!(random_suffix(0.5).unwrap(), "0.5000");
        assert_eq!(random_suffix(0.0).unwrap(), "0.0000");
        assert_eq!(random_suffix(0.25).unwrap(), "0.2500");
        assert_eq!(random_suffix(0.125).unwrap(), "0.1250");
    }

    #[test]
    fn test_random_suffix_rejects_out_of_range() {
        assert!(random_suffix(1.0).is_err());
        assert!(random_suffix(-0.1).is_err());
        assert!(random_suffix(f64::NAN).is_err());
    }

    #[test]
    fn test_build_default_topology() {
        // Arrange
        let env = FixedEnvironment::new("/src/orchestrator/tests/integrated", 0.123456789);

        // Act
        let topo = build_topology(&env).unwrap();

        // Assert
        assert_eq!(topo.name, "orchestrator456789");
        assert_eq!(topo.nodes.len(), 1);
        assert!(topo.switches.is_empty());
        assert!(topo.links.is_empty());
        assert_eq!(
            topo.nodes[0],
            Node::from(orchestrator(
                "orchestrator",
                "ubuntu-2204",
                8,
                32,
                64,
                "/src/orchestrator/tests/integrated"
            ))
        );
    }

    #[test]
    fn test_build_topology_name_shape() {
        for _ in 0..200 {
            let topo = build_topology(&SystemEnvironment).unwrap();
            assert!(topo.name.starts_with("orchestrator"));
            assert_eq!(topo.name.len(), "orchestrator".len() + NAME_SUFFIX_LEN);
        }
    }

    #[test]
    fn test_build_with_extra_nodes() {
        let mut config = BuildConfig::default();
        config.nodes.push(PlainNodeSpec {
            name: "worker".to_string(),
            image: "debian-12".to_string(),
            cpu: 2,
            memory: 4,
        });
        let env = FixedEnvironment::new("/w", 0.5);

        let topo = build_topology_with(&config, &env).unwrap();

        assert_eq!(topo.nodes.len(), 2);
        assert_eq!(topo.nodes[1], Node::from(node("worker", "debian-12", 2, 4)));
        assert!(topo.node("worker").is_some());
        assert!(topo.node("missing").is_none());
    }

    #[test]
    fn test_build_fails_on_bad_environment() {
        let env = FixedEnvironment::new("", 0.5);
        assert!(matches!(build_topology(&env), Err(TopologyError::Environment(_))));

        let env = FixedEnvironment::new("/w", 2.0);
        assert!(matches!(build_topology(&env), Err(TopologyError::Environment(_))));
    }

    #[test]
    fn test_json_shape() {
        let topo = build_topology(&FixedEnvironment::new("/w", 0.5)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&topo.to_json().unwrap()).unwrap();

        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        for key in ["name", "nodes", "switches", "links"] {
            assert!(keys.contains(&key));
        }
        assert_eq!(value["switches"], serde_json::json!([]));
        assert_eq!(value["links"], serde_json::json!([]));
    }

    #[test]
    fn test_yaml_round_trip() {
        let topo = build_topology(&FixedEnvironment::new("/w", 0.5)).unwrap();
        let back: Topology = serde_yaml::from_str(&topo.to_yaml().unwrap()).unwrap();
        assert_eq!(back, topo);
    }
}
