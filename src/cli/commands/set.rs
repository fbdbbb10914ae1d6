//! `set` command.

use super::{load_project, open_store};
use crate::cli::{RuntimeConfig, SetArgs};
use crate::error::Result;
use crate::settings::BuildSettings;

/// Loads the settings, applies the given changes and saves them.
pub fn apply_settings(runtime_config: &RuntimeConfig, changes: &SetArgs) -> Result<()> {
    let project = load_project(runtime_config)?;
    let mut store = open_store(runtime_config, project.as_ref())?;

    let mut settings = store.load()?;
    let changed = apply(&mut settings, changes);
    store.save(&settings)?;

    runtime_config.success_println(&format!(
        "Saved {} setting(s) to {}",
        changed,
        runtime_config.prefs_path().display()
    ))?;
    Ok(())
}

/// Copies every given value into `settings`, returning how many were given.
fn apply(settings: &mut BuildSettings, changes: &SetArgs) -> usize {
    let mut changed = 0;

    macro_rules! assign {
        ($field:ident, $value:expr) => {
            if let Some(value) = &$value {
                settings.$field = value.clone();
                changed += 1;
            }
        };
    }

    assign!(build_path, changes.build_path);
    assign!(name_format, changes.name_format);
    assign!(date_time_format, changes.date_time_format);
    assign!(increment_bundle, changes.increment_bundle);
    assign!(build_options, changes.build_options);
    assign!(use_keystore, changes.use_keystore);
    assign!(is_build_app_bundle, changes.app_bundle);
    assign!(is_split_app_binary, changes.split_app_binary);
    assign!(keystore_name, changes.keystore_name);
    assign!(keystore_pass, changes.keystore_pass);
    assign!(keyalias_name, changes.keyalias_name);
    assign!(keyalias_pass, changes.keyalias_pass);

    changed
}
