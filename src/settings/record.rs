//! The build settings record.

use super::BuildOptions;
use std::fmt;

/// Default output file name template.
pub const DEFAULT_NAME_FORMAT: &str = "{package}_{date}";

/// Default pattern for the `{date}` placeholder.
pub const DEFAULT_DATE_TIME_FORMAT: &str = "yyyyMMddHHmmss";

/// Build configuration for one tool invocation.
///
/// Constructed by [`SettingsStore::load`](super::SettingsStore::load),
/// mutated in place by the caller and written back with
/// [`SettingsStore::save`](super::SettingsStore::save).
///
/// `Default` gives the literal defaults with empty host-derived values.
///
/// The two password fields are held as plaintext and only ever persisted in
/// encoded form. `Debug` output redacts them.
#[derive(Clone, PartialEq, Eq)]
pub struct BuildSettings {
    /// Output directory.
    pub build_path: String,

    /// File name template, e.g. `"{package}_{date}"`.
    pub name_format: String,

    /// Pattern used to render `{date}`, e.g. `"yyyyMMddHHmmss"`.
    pub date_time_format: String,

    /// Increment the bundle version code before building.
    pub increment_bundle: bool,

    /// Build option flags.
    pub build_options: BuildOptions,

    /// Sign with a custom keystore.
    pub use_keystore: bool,

    /// Produce an app bundle (.aab) instead of an APK.
    pub is_build_app_bundle: bool,

    /// Split the application binary.
    pub is_split_app_binary: bool,

    /// Keystore file name.
    pub keystore_name: String,

    /// Keystore password.
    pub keystore_pass: String,

    /// Key alias name.
    pub keyalias_name: String,

    /// Key alias password.
    pub keyalias_pass: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            build_path: String::new(),
            name_format: DEFAULT_NAME_FORMAT.to_string(),
            date_time_format: DEFAULT_DATE_TIME_FORMAT.to_string(),
            increment_bundle: false,
            build_options: BuildOptions::empty(),
            use_keystore: false,
            is_build_app_bundle: false,
            is_split_app_binary: false,
            keystore_name: String::new(),
            keystore_pass: String::new(),
            keyalias_name: String::new(),
            keyalias_pass: String::new(),
        }
    }
}

impl BuildSettings {
    /// Output file extension without the dot.
    pub fn extension(&self) -> &'static str {
        if self.is_build_app_bundle { "aab" } else { "apk" }
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "********" }
}

impl fmt::Debug for BuildSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildSettings")
            .field("build_path", &self.build_path)
            .field("name_format", &self.name_format)
            .field("date_time_format", &self.date_time_format)
            .field("increment_bundle", &self.increment_bundle)
            .field("build_options", &self.build_options)
            .field("use_keystore", &self.use_keystore)
            .field("is_build_app_bundle", &self.is_build_app_bundle)
            .field("is_split_app_binary", &self.is_split_app_binary)
            .field("keystore_name", &self.keystore_name)
            .field("keystore_pass", &redact(&self.keystore_pass))
            .field("keyalias_name", &self.keyalias_name)
            .field("keyalias_pass", &redact(&self.keyalias_pass))
            .finish()
    }
}
