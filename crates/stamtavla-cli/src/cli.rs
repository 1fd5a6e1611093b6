//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use stamtavla_graph::LayoutMode;
use std::path::PathBuf;

/// Stamtavla CLI - Build positioned family trees from extracted entities.
#[derive(Debug, Parser)]
#[command(name = "stamtavla")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "STAMTAVLA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON payload
    Json,
    /// Quiet format (member ids only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a family tree from an entity draft
    Build(BuildArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the build command.
#[derive(Debug, Parser)]
pub struct BuildArgs {
    /// Entity draft JSON file (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Layout to use instead of the configured one
    #[arg(short, long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Skip the description heuristics (years, gender, occupation, location)
    #[arg(long)]
    pub no_enrich: bool,
}

/// Layout options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LayoutArg {
    /// Rows by generation
    Grid,
    /// Writer in the center
    Radial,
}

impl From<LayoutArg> for LayoutMode {
    fn from(layout: LayoutArg) -> Self {
        match layout {
            LayoutArg::Grid => LayoutMode::Grid,
            LayoutArg::Radial => LayoutMode::Radial,
        }
    }
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from(["stamtavla", "build", "draft.json", "--layout", "radial", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.input, Some(PathBuf::from("draft.json")));
                assert!(matches!(args.layout, Some(LayoutArg::Radial)));
                assert!(!args.no_enrich);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_format_after_subcommand() {
        let cli = Cli::try_parse_from(["stamtavla", "build", "--format", "json"]).unwrap();
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_parse_config_init() {
        let cli = Cli::try_parse_from(["stamtavla", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force: true }
            })
        ));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["stamtavla"]).is_err());
    }
}
