//! Check command implementation.

use super::read_input;
use crate::cli::CheckArgs;
use crate::engine::Pipeline;
use crate::error::Result;
use crate::input::parse_record;
use crate::output::Formatter;

/// Execute the check command.
pub fn execute_check(args: CheckArgs, pipeline: &Pipeline, formatter: &Formatter) -> Result<()> {
    let record = parse_record(&read_input(&args.file)?)?;
    let verdict = pipeline.run(&record)?;

    println!("{}", formatter.format_verdict(&verdict)?);

    Ok(())
}
