// file: src/topology/node.rs
// version: 1.0.0
// guid: c52f0e8a-31b7-4d6c-a0f9-6e84d1b72c3e

//! Node descriptors and the factories that build them

use super::units;
use serde::{Deserialize, Serialize};

/// Guest path the orchestrator source tree is mounted at
pub const ORCHESTRATOR_MOUNT_POINT: &str = "/tmp/orchestrator";
/// Device name of the orchestrator data disk
pub const ORCHESTRATOR_DISK_DEV: &str = "vdb";
/// Bus of the orchestrator data disk
pub const ORCHESTRATOR_DISK_BUS: &str = "virtio";

/// Virtual disk attached to a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disk {
    /// Size with unit suffix (e.g., "64G")
    pub size: String,
    /// Guest device name (e.g., "vdb")
    pub dev: String,
    /// Disk bus (e.g., "virtio")
    pub bus: String,
}

/// Host directory shared into the guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mount {
    pub source: String,
    pub point: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuSpec {
    pub cores: u32,
    /// Expose host CPU features directly to the guest
    pub passthru: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySpec {
    /// Capacity in bytes, see [`units::gb`]
    pub capacity: u64,
}

/// Node shape used for the orchestrator under test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestratorNode {
    pub name: String,
    pub image: String,
    pub cpu: CpuSpec,
    pub memory: MemorySpec,
    pub disks: Vec<Disk>,
    pub mounts: Vec<Mount>,
}

/// Node carrying only a name, an image and memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlainNode {
    pub name: String,
    pub image: String,
    pub memory: MemorySpec,
}

/// One virtual machine in a topology.
///
/// Serialized untagged: each variant emits only its own keys, so a plain node
/// never carries `cpu`, `disks` or `mounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Orchestrator(OrchestratorNode),
    Plain(PlainNode),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Orchestrator(n) => &n.name,
            Node::Plain(n) => &n.name,
        }
    }

    pub fn image(&self) -> &str {
        match self {
            Node::Orchestrator(n) => &n.image,
            Node::Plain(n) => &n.image,
        }
    }

    pub fn memory(&self) -> MemorySpec {
        match self {
            Node::Orchestrator(n) => n.memory,
            Node::Plain(n) => n.memory,
        }
    }

    pub fn cpu(&self) -> Option<CpuSpec> {
        match self {
            Node::Orchestrator(n) => Some(n.cpu),
            Node::Plain(_) => None,
        }
    }

    pub fn disks(&self) -> &[Disk] {
        match self {
            Node::Orchestrator(n) => n.disks.as_slice(),
            Node::Plain(_) => &[],
        }
    }

    pub fn mounts(&self) -> &[Mount] {
        match self {
            Node::Orchestrator(n) => n.mounts.as_slice(),
            Node::Plain(_) => &[],
        }
    }
}

impl From<OrchestratorNode> for Node {
    fn from(node: OrchestratorNode) -> Self {
        Node::Orchestrator(node)
    }
}

impl From<PlainNode> for Node {
    fn from(node: PlainNode) -> Self {
        Node::Plain(node)
    }
}

/// Build the orchestrator node.
///
/// CPU passthrough is always on, and the node gets one virtio data disk of
/// `disk` gigabytes on `vdb`. The directory two levels above `cwd` is mounted
/// at [`ORCHESTRATOR_MOUNT_POINT`]. Inputs are not validated.
pub fn orchestrator(
    name: impl Into<String>,
    image: impl Into<String>,
    cpu: u32,
    memory: u64,
    disk: u64,
    cwd: &str,
) -> OrchestratorNode {
    OrchestratorNode {
        name: name.into(),
        image: image.into(),
        cpu: CpuSpec {
            cores: cpu,
            passthru: true,
        },
        memory: MemorySpec {
            capacity: units::gb(memory),
        },
        disks: vec![Disk {
            size: units::disk_size(disk),
            dev: ORCHESTRATOR_DISK_DEV.to_string(),
            bus: ORCHESTRATOR_DISK_BUS.to_string(),
        }],
        mounts: vec![Mount {
            source: format!("{}/../..", cwd),
            point: ORCHESTRATOR_MOUNT_POINT.to_string(),
        }],
    }
}

/// Build a plain node. `_cpu` is accepted for call-site symmetry with
/// [`orchestrator`] and does not appear in the result.
pub fn node(name: impl Into<String>, image: impl Into<String>, _cpu: u32, memory: u64) -> PlainNode {
    PlainNode {
        name: name.into(),
        image: image.into(),
        memory: MemorySpec {
            capacity: units::gb(memory),
        },
    }
}
