//! Command execution for settings operations.

mod file_name;
mod set;
mod show;

pub use file_name::print_file_name;
pub use set::apply_settings;
pub use show::show_settings;

use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::host::{HostDefaults, StaticHostDefaults};
use crate::metadata::{ProjectManifest, load_manifest};
use crate::prefs::FilePreferences;
use crate::settings::{SettingsStore, SettingsStoreBuilder};

/// Settings store as used by the CLI.
pub type CliStore<'a> = SettingsStore<FilePreferences, Box<dyn HostDefaults + 'a>>;

/// Loads the project manifest if the file exists.
///
/// A missing manifest is not an error; the store then falls back to empty
/// host defaults.
pub fn load_project(runtime_config: &RuntimeConfig) -> Result<Option<ProjectManifest>> {
    let path = runtime_config.manifest_path();

    if !path.exists() {
        runtime_config.warning_println(&format!(
            "Manifest not found at {}, using empty host defaults",
            path.display()
        ))?;
        return Ok(None);
    }

    runtime_config.verbose_println(&format!("Reading manifest: {}", path.display()))?;
    load_manifest(path).map(Some)
}

/// Opens the preferences file and builds a store over it.
pub fn open_store<'a>(
    runtime_config: &RuntimeConfig,
    project: Option<&'a ProjectManifest>,
) -> Result<CliStore<'a>> {
    runtime_config.verbose_println(&format!(
        "Using preferences: {}",
        runtime_config.prefs_path().display()
    ))?;

    let backend = FilePreferences::open(runtime_config.prefs_path())?;
    let host: Box<dyn HostDefaults + 'a> = match project {
        Some(manifest) => Box::new(manifest),
        None => Box::new(StaticHostDefaults::default()),
    };

    SettingsStoreBuilder::new()
        .backend(backend)
        .host(host)
        .options(runtime_config.store_options().clone())
        .build()
}
