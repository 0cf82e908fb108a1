// file: src/topology/environment.rs
// version: 1.0.0
// guid: 1d7a93c4-e28f-4b05-8c6e-f3a0b95d2741

//! Ambient inputs a topology is built from

use crate::{error::TopologyError, Result};
use rand::Rng;
use tracing::debug;

/// Source of the working directory and random draws used during assembly
pub trait Environment {
    /// Absolute working directory of the invoking process
    fn working_dir(&self) -> Result<String>;

    /// Pseudo-random number in `[0, 1)`
    fn random_unit(&self) -> Result<f64>;
}

/// Process environment: `std::env::current_dir` and the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn working_dir(&self) -> Result<String> {
        let cwd = std::env::current_dir().map_err(|e| {
            TopologyError::environment(format!("Failed to read working directory: {}", e))
        })?;
        let cwd = cwd.into_os_string().into_string().map_err(|raw| {
            TopologyError::environment(format!("Working directory is not valid UTF-8: {:?}", raw))
        })?;
        debug!("Working directory: {}", cwd);
        Ok(cwd)
    }

    fn random_unit(&self) -> Result<f64> {
        Ok(rand::thread_rng().gen::<f64>())
    }
}

/// Environment with caller-supplied values, for harnesses that need
/// reproducible topologies
#[derive(Debug, Clone, PartialEq)]
pub struct FixedEnvironment {
    pub working_dir: String,
    pub random: f64,
}

impl FixedEnvironment {
    pub fn new(working_dir: impl Into<String>, random: f64) -> Self {
        Self {
            working_dir: working_dir.into(),
            random,
        }
    }
}

impl Environment for FixedEnvironment {
    fn working_dir(&self) -> Result<String> {
        if self.working_dir.is_empty() {
            return Err(TopologyError::environment("Working directory is empty"));
        }
        Ok(self.working_dir.clone())
    }

    fn random_unit(&self) -> Result<f64> {
        Ok(self.random)
    }
}
