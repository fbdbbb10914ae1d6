//! Command line interface for the build settings manager.
//!
//! This module provides argument parsing, command execution and user
//! feedback on top of the settings store.

mod args;
pub mod commands;
mod output;

pub use args::{Args, Command, RuntimeConfig, SetArgs};
pub use output::OutputManager;

use crate::error::{CliError, PipelineError, Result};

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args)
}

/// Validates and executes parsed arguments.
pub fn execute(args: &Args) -> Result<i32> {
    validate_args(args)
        .map_err(|reason| PipelineError::Cli(CliError::InvalidArguments { reason }))?;

    let runtime_config = create_runtime_config(args);

    match &args.command {
        Command::Show => commands::show_settings(&runtime_config)?,
        Command::Set(changes) => commands::apply_settings(&runtime_config, changes)?,
        Command::FileName { output_path } => {
            commands::print_file_name(&runtime_config, *output_path)?
        }
    }

    Ok(0)
}

/// Validate arguments without executing (for testing)
pub fn validate_args(args: &Args) -> std::result::Result<(), String> {
    args.validate()
}

/// Create runtime configuration from arguments
pub fn create_runtime_config(args: &Args) -> RuntimeConfig {
    RuntimeConfig::from(args)
}
