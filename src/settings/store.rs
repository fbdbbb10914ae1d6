//! Loading and saving build settings through a preference backend.

use super::secret::{decode_secret, encode_secret};
use super::{BuildOptions, BuildSettings, keys};
use crate::error::Result;
use crate::host::HostDefaults;
use crate::prefs::PreferenceBackend;

/// Store behavior chosen at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Prefix for every preference key.
    ///
    /// Default: [`keys::DEFAULT_NAMESPACE`]
    pub namespace: String,

    /// Default `build_path` to the host's suggested build location instead
    /// of an empty string.
    ///
    /// Default: false
    pub use_host_default_path: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            namespace: keys::DEFAULT_NAMESPACE.to_string(),
            use_host_default_path: false,
        }
    }
}

/// Owner of build configuration state.
///
/// Bridges a key-value [`PreferenceBackend`] and the typed
/// [`BuildSettings`] record. Host defaults are read on every
/// [`load`](Self::load) and never written.
///
/// The store does no internal synchronization. Callers that share it across
/// threads must serialize `load` and `save` themselves.
///
/// # Examples
///
/// ```
/// use android_build_pipeline::host::StaticHostDefaults;
/// use android_build_pipeline::prefs::MemoryPreferences;
/// use android_build_pipeline::settings::SettingsStoreBuilder;
///
/// # fn example() -> android_build_pipeline::Result<()> {
/// let mut store = SettingsStoreBuilder::new()
///     .backend(MemoryPreferences::new())
///     .host(StaticHostDefaults::default())
///     .build()?;
///
/// let mut settings = store.load()?;
/// settings.keystore_pass = "p@ss".into();
/// store.save(&settings)?;
/// assert_eq!(store.load()?.keystore_pass, "p@ss");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug)]
pub struct SettingsStore<B, H> {
    backend: B,
    host: H,
    options: StoreOptions,
}

impl<B: PreferenceBackend, H: HostDefaults> SettingsStore<B, H> {
    /// Creates a store (used by SettingsStoreBuilder).
    pub(super) fn new(backend: B, host: H, options: StoreOptions) -> Self {
        Self {
            backend,
            host,
            options,
        }
    }

    /// Full preference key for a suffix from [`keys`].
    pub fn key(&self, suffix: &str) -> String {
        format!("{}{}", self.options.namespace, suffix)
    }

    /// Store options.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// The preference backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The host defaults provider.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Consumes the store, returning the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Reads every field from the backend, falling back to defaults.
    ///
    /// Missing or wrongly-typed keys yield the documented default. Secrets
    /// are decoded only when a non-empty value is stored.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::CorruptSettings`](crate::PipelineError::CorruptSettings)
    /// when a stored secret cannot be decoded.
    pub fn load(&self) -> Result<BuildSettings> {
        let defaults = BuildSettings::default();

        let default_build_path = if self.options.use_host_default_path {
            self.host.build_location()
        } else {
            defaults.build_path
        };

        let b = &self.backend;
        let settings = BuildSettings {
            build_path: b.get_string_or(&self.key(keys::BUILD_PATH), &default_build_path),
            name_format: b.get_string_or(&self.key(keys::NAME_FORMAT), &defaults.name_format),
            date_time_format: b.get_string_or(
                &self.key(keys::DATE_TIME_FORMAT),
                &defaults.date_time_format,
            ),
            increment_bundle: b
                .get_string_or(&self.key(keys::INCREMENT_BUNDLE), keys::FALSE_STRING)
                == keys::TRUE_STRING,
            build_options: BuildOptions::from_bits(
                b.get_int_or(&self.key(keys::BUILD_OPTIONS), defaults.build_options.bits()),
            ),
            use_keystore: b.get_int_or(&self.key(keys::USE_KEYSTORE), 0) != 0,
            is_build_app_bundle: b.get_int_or(
                &self.key(keys::IS_BUILD_APP_BUNDLE),
                self.host.build_app_bundle() as i32,
            ) != 0,
            is_split_app_binary: b.get_int_or(
                &self.key(keys::IS_SPLIT_APP_BINARY),
                self.host.split_application_binary() as i32,
            ) != 0,
            keystore_name: b
                .get_string_or(&self.key(keys::KEYSTORE_NAME), &self.host.keystore_name()),
            keystore_pass: self.load_secret(keys::KEYSTORE_PASS)?,
            keyalias_name: b.get_string_or(&self.key(keys::KEYALIAS_NAME), ""),
            keyalias_pass: self.load_secret(keys::KEYALIAS_PASS)?,
        };

        log::debug!("Loaded settings under namespace '{}'", self.options.namespace);
        Ok(settings)
    }

    /// Writes every field to the backend and flushes it.
    ///
    /// Name and secret fields that are empty are removed from the backend
    /// instead of being written as empty strings.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend fails to flush.
    pub fn save(&mut self, settings: &BuildSettings) -> Result<()> {
        let build_path = self.key(keys::BUILD_PATH);
        self.backend.set_string(&build_path, &settings.build_path);

        let name_format = self.key(keys::NAME_FORMAT);
        self.backend.set_string(&name_format, &settings.name_format);

        let date_time_format = self.key(keys::DATE_TIME_FORMAT);
        self.backend
            .set_string(&date_time_format, &settings.date_time_format);

        let increment_bundle = self.key(keys::INCREMENT_BUNDLE);
        self.backend.set_string(
            &increment_bundle,
            if settings.increment_bundle {
                keys::TRUE_STRING
            } else {
                keys::FALSE_STRING
            },
        );

        let build_options = self.key(keys::BUILD_OPTIONS);
        self.backend
            .set_int(&build_options, settings.build_options.bits());

        let use_keystore = self.key(keys::USE_KEYSTORE);
        self.backend
            .set_int(&use_keystore, settings.use_keystore as i32);

        let app_bundle = self.key(keys::IS_BUILD_APP_BUNDLE);
        self.backend
            .set_int(&app_bundle, settings.is_build_app_bundle as i32);

        let split_binary = self.key(keys::IS_SPLIT_APP_BINARY);
        self.backend
            .set_int(&split_binary, settings.is_split_app_binary as i32);

        self.save_optional(keys::KEYSTORE_NAME, &settings.keystore_name);
        self.save_optional(keys::KEYALIAS_NAME, &settings.keyalias_name);

        self.save_secret(keys::KEYSTORE_PASS, &settings.keystore_pass);
        self.save_secret(keys::KEYALIAS_PASS, &settings.keyalias_pass);

        self.backend.flush()?;
        log::debug!("Saved settings under namespace '{}'", self.options.namespace);
        Ok(())
    }

    fn load_secret(&self, suffix: &str) -> Result<String> {
        let key = self.key(suffix);
        match self.backend.get_string(&key) {
            Some(encoded) if !encoded.is_empty() => decode_secret(&key, &encoded),
            _ => Ok(String::new()),
        }
    }

    fn save_optional(&mut self, suffix: &str, value: &str) {
        let key = self.key(suffix);
        if !value.is_empty() {
            self.backend.set_string(&key, value);
        } else {
            self.remove_if_present(&key);
        }
    }

    fn save_secret(&mut self, suffix: &str, plain: &str) {
        let key = self.key(suffix);
        if !plain.is_empty() {
            self.backend.set_string(&key, &encode_secret(plain));
        } else {
            self.remove_if_present(&key);
        }
    }

    fn remove_if_present(&mut self, key: &str) {
        if self.backend.has_key(key) {
            log::debug!("Removing cleared preference '{}'", key);
            self.backend.delete_key(key);
        }
    }
}
