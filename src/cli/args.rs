//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation
//! and the runtime configuration derived from it.

use crate::prefs::FilePreferences;
use crate::settings::{BuildOptions, StoreOptions, keys};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Android build settings manager
#[derive(Parser, Debug)]
#[command(
    name = "android_build_pipeline",
    version,
    about = "Manage persistent Android build settings",
    long_about = "Reads and writes Android build settings (output path, file name template, \
keystore credentials, build options) in a preferences file, and renders output file names.

Usage:
  android_build_pipeline show
  android_build_pipeline set --name-format '{name}_{version}_{date}' --date-time-format yyyyMMdd
  android_build_pipeline set --keystore-name release.keystore --keystore-pass secret
  android_build_pipeline --manifest Android.toml file-name --output-path

Passwords are stored base64-encoded, not encrypted."
)]
pub struct Args {
    /// Preferences file
    ///
    /// Default: <config dir>/android-build-pipeline/prefs.json
    #[arg(long, global = true, env = "ABP_PREFS_FILE", value_name = "PATH")]
    pub prefs: Option<PathBuf>,

    /// Project manifest supplying host defaults and file name context
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value = "Android.toml",
        value_name = "PATH"
    )]
    pub manifest: PathBuf,

    /// Preference key namespace
    #[arg(long, global = true, value_name = "NS")]
    pub namespace: Option<String>,

    /// Default the build path to the manifest's build-location
    #[arg(long, global = true)]
    pub host_default_path: bool,

    /// Print extra progress information
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress everything except command output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the current settings (passwords masked)
    Show,

    /// Change one or more settings and save them
    Set(SetArgs),

    /// Print the output file name rendered from the name template
    FileName {
        /// Join the file name onto the configured build path
        #[arg(long)]
        output_path: bool,
    },
}

/// Values for `set`. An empty string clears a name or password.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct SetArgs {
    /// Output directory
    #[arg(long, value_name = "DIR")]
    pub build_path: Option<String>,

    /// File name template ({name}, {package}, {version}, {bundle}, {date})
    #[arg(long, value_name = "TEMPLATE")]
    pub name_format: Option<String>,

    /// Pattern for {date}, e.g. yyyyMMddHHmmss
    #[arg(long, value_name = "PATTERN")]
    pub date_time_format: Option<String>,

    /// Increment the bundle version code on build
    #[arg(long, value_name = "BOOL")]
    pub increment_bundle: Option<bool>,

    /// Build options: integer or names joined by '|', e.g. Development|AllowDebugging
    #[arg(long, value_name = "FLAGS")]
    pub build_options: Option<BuildOptions>,

    /// Sign with a custom keystore
    #[arg(long, value_name = "BOOL")]
    pub use_keystore: Option<bool>,

    /// Build an app bundle (.aab) instead of an APK
    #[arg(long, value_name = "BOOL")]
    pub app_bundle: Option<bool>,

    /// Split the application binary
    #[arg(long, value_name = "BOOL")]
    pub split_app_binary: Option<bool>,

    /// Keystore file name
    #[arg(long, value_name = "NAME")]
    pub keystore_name: Option<String>,

    /// Keystore password
    #[arg(long, env = "ABP_KEYSTORE_PASS", hide_env_values = true, value_name = "PASS")]
    pub keystore_pass: Option<String>,

    /// Key alias name
    #[arg(long, value_name = "NAME")]
    pub keyalias_name: Option<String>,

    /// Key alias password
    #[arg(long, env = "ABP_KEYALIAS_PASS", hide_env_values = true, value_name = "PASS")]
    pub keyalias_pass: Option<String>,
}

impl SetArgs {
    /// Returns true when no setting was given.
    pub fn is_empty(&self) -> bool {
        self.build_path.is_none()
            && self.name_format.is_none()
            && self.date_time_format.is_none()
            && self.increment_bundle.is_none()
            && self.build_options.is_none()
            && self.use_keystore.is_none()
            && self.app_bundle.is_none()
            && self.split_app_binary.is_none()
            && self.keystore_name.is_none()
            && self.keystore_pass.is_none()
            && self.keyalias_name.is_none()
            && self.keyalias_pass.is_none()
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.namespace.as_deref() == Some("") {
            return Err("Namespace cannot be empty".to_string());
        }

        if matches!(&self.command, Command::Set(set) if set.is_empty()) {
            return Err("Nothing to set: pass at least one setting flag".to_string());
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for terminal output
    output: super::OutputManager,

    /// Preferences file location
    prefs_path: PathBuf,

    /// Project manifest location
    manifest_path: PathBuf,

    /// Settings store options
    store_options: StoreOptions,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);

        let prefs_path = args
            .prefs
            .clone()
            .unwrap_or_else(FilePreferences::default_path);

        let store_options = StoreOptions {
            namespace: args
                .namespace
                .clone()
                .unwrap_or_else(|| keys::DEFAULT_NAMESPACE.to_string()),
            use_host_default_path: args.host_default_path,
        };

        Self {
            output,
            prefs_path,
            manifest_path: args.manifest.clone(),
            store_options,
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Preferences file location
    pub fn prefs_path(&self) -> &std::path::Path {
        &self.prefs_path
    }

    /// Project manifest location
    pub fn manifest_path(&self) -> &std::path::Path {
        &self.manifest_path
    }

    /// Settings store options
    pub fn store_options(&self) -> &StoreOptions {
        &self.store_options
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warning_println(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print success message if not in quiet mode
    pub fn success_println(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }
}
