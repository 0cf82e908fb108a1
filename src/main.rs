// file: src/main.rs
// version: 1.0.0
// guid: f2a9d4c6-3e71-4b85-a0c7-5d8b1e6f9a34

//! Orchestrator topology builder - main entry point

use clap::Parser;
use orchestrator_topology::{
    cli::{
        args::{Cli, Commands},
        commands::*,
    },
    logging::logger,
    Result,
};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.json_logs {
        logger::init_json_logger()?;
    } else {
        logger::init_logger(cli.verbose, cli.quiet)?;
    }
    debug!("{}", orchestrator_topology::BUILD_INFO.trim_end());

    match cli.command {
        Commands::Generate {
            config,
            format,
            output,
        } => generate_command(config, format, output).await,
        Commands::Validate { file } => validate_command(&file).await,
        Commands::ShowConfig { config } => show_config_command(config).await,
    }
}
