//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Greenclaim - Check environmental marketing claims for greenwashing risk.
#[derive(Debug, Parser)]
#[command(name = "greenclaim")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "GREENCLAIM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log pipeline decisions (repeat for more detail)
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
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate one claim record
    Check(CheckArgs),

    /// Evaluate a file of claim records, one JSON object per line
    Batch(BatchArgs),

    /// Write a default configuration file
    InitConfig(InitConfigArgs),
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// JSON file holding the record ("-" for stdin)
    pub file: PathBuf,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// JSON Lines file of records ("-" for stdin)
    pub file: PathBuf,

    /// Records evaluated at once
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,

    /// Per-record time limit in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

/// Arguments for the init-config command.
#[derive(Debug, Parser)]
pub struct InitConfigArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
