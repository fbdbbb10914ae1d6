//! Build settings: the typed record, its persistence, and output naming.
//!
//! [`SettingsStore`] loads a [`BuildSettings`] record from a
//! [`PreferenceBackend`](crate::prefs::PreferenceBackend), filling anything
//! missing from literal defaults or [`HostDefaults`](crate::host::HostDefaults),
//! and writes it back on [`save`](SettingsStore::save).
//! [`BuildSettings::file_name`] renders the output file name.

mod builder;
pub mod keys;
mod naming;
mod options;
mod record;
mod secret;
mod store;
mod timestamp;

// Re-export all public types
pub use builder::SettingsStoreBuilder;
pub use naming::{PLACEHOLDERS, render_template};
pub use options::BuildOptions;
pub use record::{BuildSettings, DEFAULT_DATE_TIME_FORMAT, DEFAULT_NAME_FORMAT};
pub use secret::{decode_secret, encode_secret};
pub use store::{SettingsStore, StoreOptions};
pub use timestamp::format_timestamp;
