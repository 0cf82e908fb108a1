// file: src/config/loader.rs
// version: 1.0.0
// guid: 5a2e9c07-d41b-4f86-b3c8-7e0d6a15f294

//! Configuration file loading and environment variable substitution

use super::BuildConfig;
use crate::{error::TopologyError, topology::Topology, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load build configuration from YAML file
    pub fn load_build_config<P: AsRef<Path>>(&self, path: P) -> Result<BuildConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            TopologyError::config(format!(
                "Failed to read build config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        let config: BuildConfig = if expanded.trim().is_empty() {
            BuildConfig::default()
        } else {
            serde_yaml::from_str(&expanded)?
        };

        config.validate()?;
        debug!("Loaded build config from {}", path.as_ref().display());

        Ok(config)
    }

    /// Load a topology from a JSON or YAML file, chosen by extension
    pub fn load_topology<P: AsRef<Path>>(&self, path: P) -> Result<Topology> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TopologyError::config(format!(
                "Failed to read topology file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let topology = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        Ok(topology)
    }

    /// Expand environment variables in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| TopologyError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else if !missing_vars.iter().any(|v| v == var_name) {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(TopologyError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
