//! Init-config command implementation.

use crate::cli::InitConfigArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the init-config command.
pub fn execute_init_config(args: InitConfigArgs, path: &Path, formatter: &Formatter) -> Result<()> {
    if path.exists() && !args.force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let config = Config::default();
    config.save_to(path)?;

    println!("{}", formatter.success(&format!("Wrote {}", path.display())));
    println!(
        "{}",
        formatter.info(&format!(
            "Place classifier artifacts at {} and {}",
            config.artifacts.document_model.display(),
            config.artifacts.semantic_model.display()
        ))
    );

    Ok(())
}
