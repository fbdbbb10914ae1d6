//! Persistent Android build settings.
//!
//! This library provides:
//! - A typed [`BuildSettings`] record with documented defaults
//! - A [`SettingsStore`] that loads and saves it through any
//!   [`PreferenceBackend`](prefs::PreferenceBackend), keeping keystore
//!   passwords base64-encoded at rest
//! - Output file naming from a `{package}_{date}` style template
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod host;
pub mod metadata;
pub mod prefs;
pub mod settings;

// Re-export commonly used types
pub use error::{CliError, PipelineError, Result};
pub use settings::{BuildSettings, SettingsStore, SettingsStoreBuilder};
