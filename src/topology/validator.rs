// file: src/topology/validator.rs
// version: 1.0.0
// guid: a4c8e2f6-0b3d-4715-9f6a-2d8e1c7b5a93

//! Structural checks for topologies built here or read back from disk

use super::node::{
    OrchestratorNode, ORCHESTRATOR_DISK_BUS, ORCHESTRATOR_DISK_DEV, ORCHESTRATOR_MOUNT_POINT,
};
use super::{Node, Topology};
use crate::{error::TopologyError, Result};
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Validate a topology against the fixture invariants
pub fn validate_topology(topology: &Topology) -> Result<()> {
    if topology.name.is_empty() {
        return Err(TopologyError::validation("Topology name cannot be empty"));
    }

    if topology.nodes.is_empty() {
        return Err(TopologyError::validation(format!(
            "Topology {} has no nodes",
            topology.name
        )));
    }

    let mut seen = HashSet::new();
    for node in &topology.nodes {
        if !seen.insert(node.name()) {
            return Err(TopologyError::validation(format!(
                "Duplicate node name: {}",
                node.name()
            )));
        }
        validate_node(node)?;
    }

    if !topology.switches.is_empty() {
        return Err(TopologyError::validation("Switches are reserved and must be empty"));
    }
    if !topology.links.is_empty() {
        return Err(TopologyError::validation("Links are reserved and must be empty"));
    }

    debug!("Topology {} passed validation", topology.name);
    Ok(())
}

/// Validate a single node
pub fn validate_node(node: &Node) -> Result<()> {
    if node.name().is_empty() {
        return Err(TopologyError::validation("Node name cannot be empty"));
    }

    if node.image().is_empty() {
        return Err(TopologyError::validation(format!(
            "Node {} has no image",
            node.name()
        )));
    }

    if let Node::Orchestrator(orch) = node {
        validate_orchestrator(orch)?;
    }

    let size_re = Regex::new(r"^[0-9]+G$")
        .map_err(|e| TopologyError::validation(format!("Invalid regex pattern: {}", e)))?;
    for disk in node.disks() {
        if !size_re.is_match(&disk.size) {
            return Err(TopologyError::validation(format!(
                "Node {} has invalid disk size: {}",
                node.name(),
                disk.size
            )));
        }
    }

    Ok(())
}

/// Check the fixed hardware shape of the orchestrator node
fn validate_orchestrator(node: &OrchestratorNode) -> Result<()> {
    if node.cpu.cores == 0 {
        return Err(TopologyError::validation(format!(
            "Node {} must have at least 1 CPU core",
            node.name
        )));
    }

    if !node.cpu.passthru {
        return Err(TopologyError::validation(format!(
            "Orchestrator node {} must have CPU passthrough enabled",
            node.name
        )));
    }

    let disk = match node.disks.as_slice() {
        [disk] => disk,
        disks => {
            return Err(TopologyError::validation(format!(
                "Orchestrator node {} must have exactly one disk, found {}",
                node.name,
                disks.len()
            )))
        }
    };
    if disk.dev != ORCHESTRATOR_DISK_DEV || disk.bus != ORCHESTRATOR_DISK_BUS {
        return Err(TopologyError::validation(format!(
            "Orchestrator node {} disk must be {} on {}, found {} on {}",
            node.name, ORCHESTRATOR_DISK_DEV, ORCHESTRATOR_DISK_BUS, disk.dev, disk.bus
        )));
    }

    let mount = match node.mounts.as_slice() {
        [mount] => mount,
        mounts => {
            return Err(TopologyError::validation(format!(
                "Orchestrator node {} must have exactly one mount, found {}",
                node.name,
                mounts.len()
            )))
        }
    };
    if mount.point != ORCHESTRATOR_MOUNT_POINT {
        return Err(TopologyError::validation(format!(
            "Orchestrator node {} must mount at {}, found {}",
            node.name, ORCHESTRATOR_MOUNT_POINT, mount.point
        )));
    }

    Ok(())
}
