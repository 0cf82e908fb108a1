// file: src/error.rs
// version: 1.0.0
// guid: 3f9c2a71-5d0e-4b8a-9e61-7c4d2b1a8f05

use thiserror::Error;

/// Result type alias for the topology builder
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Error types for the topology builder
#[derive(Error, Debug)]
pub enum TopologyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Environment error: {0}")]
    Environment(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl TopologyError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new environment error
    pub fn environment(msg: impl Into<String>) -> Self {
        Self::Environment(msg.into())
    }
}
