//! Greenclaim CLI library.
//!
//! This library provides the core functionality for the greenclaim command-line interface,
//! including configuration management, record input, pipeline assembly and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
