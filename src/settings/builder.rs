//! Builder for constructing a SettingsStore.

use super::{SettingsStore, StoreOptions};
use crate::error::{PipelineError, Result};
use crate::host::HostDefaults;
use crate::prefs::PreferenceBackend;

/// Builder for constructing [`SettingsStore`].
///
/// # Examples
///
/// ```no_run
/// use android_build_pipeline::metadata::load_manifest;
/// use android_build_pipeline::prefs::FilePreferences;
/// use android_build_pipeline::settings::SettingsStoreBuilder;
/// use std::path::Path;
///
/// # fn example() -> android_build_pipeline::Result<()> {
/// let store = SettingsStoreBuilder::new()
///     .backend(FilePreferences::open(FilePreferences::default_path())?)
///     .host(load_manifest(Path::new("Android.toml"))?)
///     .use_host_default_path(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SettingsStoreBuilder<B, H> {
    backend: Option<B>,
    host: Option<H>,
    options: StoreOptions,
}

impl<B, H> Default for SettingsStoreBuilder<B, H> {
    fn default() -> Self {
        Self {
            backend: None,
            host: None,
            options: StoreOptions::default(),
        }
    }
}

impl<B: PreferenceBackend, H: HostDefaults> SettingsStoreBuilder<B, H> {
    /// Creates a new store builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the preference backend.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn backend(mut self, backend: B) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Sets the host defaults provider.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn host(mut self, host: H) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the key namespace.
    ///
    /// Default: `"buildpipeline.android."`
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.options.namespace = namespace.into();
        self
    }

    /// Default `build_path` to the host build location.
    ///
    /// Default: false (empty build path)
    pub fn use_host_default_path(mut self, enabled: bool) -> Self {
        self.options.use_host_default_path = enabled;
        self
    }

    /// Replaces all options at once.
    pub fn options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the store.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Config`] if `backend` or `host` is missing,
    /// or the namespace is empty.
    pub fn build(self) -> Result<SettingsStore<B, H>> {
        let backend = self.backend.ok_or_else(|| PipelineError::Config {
            reason: "backend is required".to_string(),
        })?;
        let host = self.host.ok_or_else(|| PipelineError::Config {
            reason: "host is required".to_string(),
        })?;

        if self.options.namespace.is_empty() {
            return Err(PipelineError::Config {
                reason: "namespace cannot be empty".to_string(),
            });
        }

        Ok(SettingsStore::new(backend, host, self.options))
    }
}
