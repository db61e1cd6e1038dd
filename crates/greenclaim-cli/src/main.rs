//! Greenclaim CLI - Check environmental marketing claims for greenwashing risk.

use clap::Parser;
use greenclaim_cli::commands;
use greenclaim_cli::config::OutputFormat;
use greenclaim_cli::engine::build_pipeline;
use greenclaim_cli::{Cli, Command, Config, Formatter};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> greenclaim_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };

    let format_override: Option<OutputFormat> = cli.format.map(Into::into);

    match cli.command {
        Command::InitConfig(args) => {
            let formatter = Formatter::new(format_override.unwrap_or(OutputFormat::Table), !cli.no_color);
            commands::execute_init_config(args, &config_path, &formatter)?;
        }
        command => {
            let config = Config::load_from(&config_path)?;

            // Determine output format and color setting
            let format = format_override.unwrap_or(config.settings.format);
            let color_enabled = !cli.no_color && config.settings.color;
            let formatter = Formatter::new(format, color_enabled);

            let pipeline = build_pipeline(&config)?;

            match command {
                Command::Check(args) => commands::execute_check(args, &pipeline, &formatter)?,
                Command::Batch(args) => {
                    commands::execute_batch(args, Arc::new(pipeline), &config, &formatter)?
                }
                Command::InitConfig(_) => {}
            }
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
