//! Project metadata from a single TOML manifest.
//!
//! The manifest supplies both the host defaults consulted while loading
//! settings and the build context used for file naming:
//!
//! ```toml
//! [package]
//! name = "Game"
//! version = "1.2.0"
//!
//! [package.metadata.android]
//! identifier = "com.example.game"
//! version-code = 42
//! build-app-bundle = true
//! split-application-binary = false
//! keystore-name = "user.keystore"
//! build-location = "builds/android"
//! ```

use crate::error::{CliError, PipelineError, Result};
use crate::host::{BuildContext, HostDefaults};
use std::path::Path;

/// Default bundle version code when the manifest does not set one.
const DEFAULT_VERSION_CODE: i32 = 1;

/// Android-specific project configuration from `[package.metadata.android]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AndroidMetadata {
    /// Application identifier. None falls back to the package name.
    pub identifier: Option<String>,

    /// Bundle version code.
    pub version_code: Option<i32>,

    /// Build an app bundle instead of an APK.
    pub build_app_bundle: bool,

    /// Split the application binary into expansion files.
    pub split_application_binary: bool,

    /// Keystore file name.
    pub keystore_name: Option<String>,

    /// Suggested output location.
    pub build_location: Option<String>,
}

/// Project manifest data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectManifest {
    /// Product name from `[package] name`
    pub name: String,

    /// Version string from `[package] version`
    pub version: String,

    /// Android settings (all optional)
    pub android: AndroidMetadata,
}

impl ProjectManifest {
    /// Application identifier, defaulting to the product name.
    pub fn identifier(&self) -> &str {
        self.android.identifier.as_deref().unwrap_or(&self.name)
    }

    /// Bundle version code, defaulting to 1.
    pub fn version_code(&self) -> i32 {
        self.android.version_code.unwrap_or(DEFAULT_VERSION_CODE)
    }

    /// Build context for output file naming.
    pub fn build_context(&self) -> BuildContext {
        BuildContext::new(
            self.name.clone(),
            self.identifier(),
            self.version.clone(),
            self.version_code(),
        )
    }
}

impl HostDefaults for ProjectManifest {
    fn build_location(&self) -> String {
        self.android.build_location.clone().unwrap_or_default()
    }

    fn build_app_bundle(&self) -> bool {
        self.android.build_app_bundle
    }

    fn split_application_binary(&self) -> bool {
        self.android.split_application_binary
    }

    fn keystore_name(&self) -> String {
        self.android.keystore_name.clone().unwrap_or_default()
    }
}

/// Load the project manifest (single read + parse).
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or lacks
/// `[package]` `name` / `version`.
pub fn load_manifest(manifest_path: &Path) -> Result<ProjectManifest> {
    let manifest = std::fs::read_to_string(manifest_path).map_err(|e| {
        PipelineError::Cli(CliError::ExecutionFailed {
            command: "read_manifest".to_string(),
            reason: format!("Failed to read {}: {}", manifest_path.display(), e),
        })
    })?;

    parse_manifest(&manifest)
}

/// Parse manifest text.
pub fn parse_manifest(manifest: &str) -> Result<ProjectManifest> {
    let toml_value: toml::Value = toml::from_str(manifest)?;

    let package = toml_value.get("package").ok_or_else(|| {
        PipelineError::Cli(CliError::InvalidArguments {
            reason: "No [package] section in manifest".to_string(),
        })
    })?;

    let name = package
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            PipelineError::Cli(CliError::InvalidArguments {
                reason: "Missing 'name' in [package]".to_string(),
            })
        })?
        .to_string();

    let version = package
        .get("version")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            PipelineError::Cli(CliError::InvalidArguments {
                reason: "Missing 'version' in [package]".to_string(),
            })
        })?
        .to_string();

    let android = parse_android_metadata(package)?;

    Ok(ProjectManifest {
        name,
        version,
        android,
    })
}

/// Parse `[package.metadata.android]`.
fn parse_android_metadata(package: &toml::Value) -> Result<AndroidMetadata> {
    let mut settings = AndroidMetadata::default();

    let Some(metadata) = package.get("metadata").and_then(|m| m.get("android")) else {
        log::debug!("No [package.metadata.android] section, using defaults");
        return Ok(settings);
    };

    settings.identifier = metadata
        .get("identifier")
        .and_then(|v| v.as_str())
        .map(String::from);

    settings.version_code = match metadata.get("version-code") {
        None => None,
        Some(v) => {
            let code = v.as_integer().ok_or_else(|| {
                PipelineError::Cli(CliError::InvalidArguments {
                    reason: "'version-code' must be an integer".to_string(),
                })
            })?;
            Some(i32::try_from(code).map_err(|_| {
                PipelineError::Cli(CliError::InvalidArguments {
                    reason: format!("'version-code' out of range: {}", code),
                })
            })?)
        }
    };

    settings.build_app_bundle = metadata
        .get("build-app-bundle")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    settings.split_application_binary = metadata
        .get("split-application-binary")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    settings.keystore_name = metadata
        .get("keystore-name")
        .and_then(|v| v.as_str())
        .map(String::from);

    settings.build_location = metadata
        .get("build-location")
        .and_then(|v| v.as_str())
        .map(String::from);

    Ok(settings)
}
