// file: src/cli/args.rs
// version: 1.0.0
// guid: 4b8f2d6e-a13c-4e97-b5d0-c6e8a2f4b179

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "orchestrator-topology")]
#[command(about = "Build the virtual machine topology for orchestrator integration tests")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true, help = "Emit logs as JSON (filtered by RUST_LOG)")]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a topology and print or write it
    Generate {
        #[arg(short, long, env = "TOPOLOGY_CONFIG", help = "YAML build configuration")]
        config: Option<String>,

        #[arg(short, long, value_enum, default_value = "json")]
        format: FormatArg,

        #[arg(short, long, help = "Write to this file instead of stdout")]
        output: Option<String>,
    },

    /// Validate a topology file (JSON, or YAML by .yaml/.yml extension)
    Validate {
        #[arg(short, long)]
        file: String,
    },

    /// Print the effective build configuration
    ShowConfig {
        #[arg(short, long, env = "TOPOLOGY_CONFIG")]
        config: Option<String>,
    },
}

/// Output format argument for CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Json,
    Yaml,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["orchestrator-topology", "generate"]).unwrap();
        match cli.command {
            Commands::Generate { format, output, .. } => {
                assert_eq!(format, FormatArg::Json);
                assert!(output.is_none());
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "orchestrator-topology",
            "generate",
            "--format",
            "yaml",
            "-q",
        ])
        .unwrap();
        assert!(cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_validate_requires_file() {
        assert!(Cli::try_parse_from(["orchestrator-topology", "validate"]).is_err());
    }
}
