//! `show` command.

use super::{load_project, open_store};
use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::settings::BuildSettings;

/// Prints every setting. Passwords are masked.
pub fn show_settings(runtime_config: &RuntimeConfig) -> Result<()> {
    let project = load_project(runtime_config)?;
    let store = open_store(runtime_config, project.as_ref())?;
    let settings = store.load()?;

    let output = runtime_config.output();
    output.section("Android build settings")?;
    for (label, value) in describe(&settings) {
        output.indent(&format!("{:<20} {}", label, value))?;
    }

    Ok(())
}

fn describe(settings: &BuildSettings) -> Vec<(&'static str, String)> {
    vec![
        ("build path", or_not_set(&settings.build_path)),
        ("name format", settings.name_format.clone()),
        ("date time format", settings.date_time_format.clone()),
        ("increment bundle", settings.increment_bundle.to_string()),
        ("build options", settings.build_options.to_string()),
        ("use keystore", settings.use_keystore.to_string()),
        ("build app bundle", settings.is_build_app_bundle.to_string()),
        ("split app binary", settings.is_split_app_binary.to_string()),
        ("keystore name", or_not_set(&settings.keystore_name)),
        ("keystore password", mask(&settings.keystore_pass)),
        ("key alias name", or_not_set(&settings.keyalias_name)),
        ("key alias password", mask(&settings.keyalias_pass)),
    ]
}

fn or_not_set(value: &str) -> String {
    if value.is_empty() {
        "(not set)".to_string()
    } else {
        value.to_string()
    }
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        "(not set)".to_string()
    } else {
        "********".to_string()
    }
}
