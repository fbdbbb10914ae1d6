//! `file-name` command.

use super::{load_project, open_store};
use crate::cli::RuntimeConfig;
use crate::error::{CliError, PipelineError, Result};
use std::path::Path;

/// Prints the output file name, optionally joined onto the build path.
///
/// # Errors
///
/// Requires the project manifest: without it there is no name, package or
/// version to substitute.
pub fn print_file_name(runtime_config: &RuntimeConfig, output_path: bool) -> Result<()> {
    let project = load_project(runtime_config)?.ok_or_else(|| {
        PipelineError::Cli(CliError::MissingArgument {
            argument: format!(
                "--manifest (no manifest at {})",
                runtime_config.manifest_path().display()
            ),
        })
    })?;

    let store = open_store(runtime_config, Some(&project))?;
    let settings = store.load()?;
    let file_name = settings.file_name(&project.build_context());

    let rendered = if output_path && !settings.build_path.is_empty() {
        Path::new(&settings.build_path)
            .join(&file_name)
            .display()
            .to_string()
    } else {
        file_name
    };

    runtime_config.output().println(&rendered)?;
    Ok(())
}
