// file: src/cli/commands.rs
// version: 1.0.0
// guid: d03a7f9b-58e2-4c61-8b4f-1e9d6c3a2b85

//! Command implementations for the CLI

use super::args::FormatArg;
use crate::{
    config::{BuildConfig, ConfigLoader},
    logging::logger::{with_async_operation_span, with_operation_span},
    topology::{build_topology_with, validator::validate_topology, SystemEnvironment, Topology},
    Result,
};
use std::io::Write;
use tracing::info;

/// Resolve the build configuration from an optional file
pub fn load_config(config_path: Option<&str>) -> Result<BuildConfig> {
    match config_path {
        Some(path) => {
            info!("Loading build configuration from {}", path);
            ConfigLoader::new().load_build_config(path)
        }
        None => Ok(BuildConfig::default()),
    }
}

/// Render a topology in the requested format
pub fn render(topology: &Topology, format: FormatArg) -> Result<String> {
    match format {
        FormatArg::Json => topology.to_json(),
        FormatArg::Yaml => topology.to_yaml(),
    }
}

/// Build a topology and emit it
pub async fn generate_command(
    config_path: Option<String>,
    format: FormatArg,
    output: Option<String>,
) -> Result<()> {
    let config = load_config(config_path.as_deref())?;

    let topology = with_operation_span("build_topology", || {
        build_topology_with(&config, &SystemEnvironment)
    })?;
    validate_topology(&topology)?;

    let mut rendered = render(&topology, format)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    match output {
        Some(path) => {
            let (target, bytes) = (path.as_str(), rendered.as_bytes());
            with_async_operation_span("write_topology", move || async move {
                tokio::fs::write(target, bytes).await
            })
            .await?;
            info!("Topology {} written to {}", topology.name, path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Validate a topology file
pub async fn validate_command(file: &str) -> Result<()> {
    info!("Validating topology file: {}", file);

    let topology = ConfigLoader::new().load_topology(file)?;
    validate_topology(&topology)?;

    info!(
        "Topology {} is valid ({} node(s))",
        topology.name,
        topology.nodes.len()
    );
    Ok(())
}

/// Print the effective build configuration
pub async fn show_config_command(config_path: Option<String>) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let yaml = serde_yaml::to_string(&config)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(yaml.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
