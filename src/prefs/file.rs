//! JSON file preference backend.
//!
//! Values are kept in memory and written out as a single pretty-printed JSON
//! object on [`PreferenceBackend::flush`]. Writes go to a sibling temp file
//! which is then renamed over the target.

use super::{MemoryPreferences, PrefValue, PreferenceBackend};
use crate::error::Result;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Directory name under the user config dir.
const APP_DIR_NAME: &str = "android-build-pipeline";

/// Preference file name.
const PREFS_FILE_NAME: &str = "prefs.json";

/// Preference backend persisted to a JSON file.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: MemoryPreferences,
    dirty: bool,
}

impl FilePreferences {
    /// Opens the preference file at `path`.
    ///
    /// A missing file is not an error: the backend starts empty and the file
    /// is created on the first flush.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// JSON object. Entries that are neither strings nor integers in `i32`
    /// range are skipped with a warning, so they read back as absent.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let values = match std::fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => {
                let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(&contents)?;
                let map = typed_values(raw, &path);
                log::debug!("Loaded {} preferences from {}", map.len(), path.display());
                map
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No preferences file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            values: MemoryPreferences::from_map(values),
            dirty: false,
        })
    }

    /// Default preference file location: `<config dir>/android-build-pipeline/prefs.json`.
    ///
    /// Falls back to the current directory when the platform has no config dir.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(PREFS_FILE_NAME)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true when there are writes not yet flushed.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn write_file(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            // create_dir_all is already idempotent
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self.values.as_map())?;

        let mut tmp_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| PREFS_FILE_NAME.into());
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        std::fs::write(&tmp_path, json)?;
        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            // Try removal, ignore NotFound
            match std::fs::remove_file(&tmp_path) {
                Ok(()) => {}
                Err(rm) if rm.kind() == io::ErrorKind::NotFound => {}
                Err(rm) => log::debug!("Failed to remove {}: {}", tmp_path.display(), rm),
            }
            return Err(e.into());
        }

        Ok(())
    }
}

/// Keeps entries that map onto a [`PrefValue`], dropping the rest.
fn typed_values(
    raw: BTreeMap<String, serde_json::Value>,
    path: &Path,
) -> BTreeMap<String, PrefValue> {
    raw.into_iter()
        .filter_map(|(key, value)| {
            let typed = match &value {
                serde_json::Value::String(s) => Some(PrefValue::Str(s.clone())),
                serde_json::Value::Number(n) => n
                    .as_i64()
                    .and_then(|v| i32::try_from(v).ok())
                    .map(PrefValue::Int),
                _ => None,
            };
            if typed.is_none() {
                log::warn!(
                    "Ignoring preference '{}' in {}: unsupported value {}",
                    key,
                    path.display(),
                    value
                );
            }
            typed.map(|v| (key, v))
        })
        .collect()
}

impl PreferenceBackend for FilePreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get_string(key)
    }

    fn get_int(&self, key: &str) -> Option<i32> {
        self.values.get_int(key)
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values.set_string(key, value);
        self.dirty = true;
    }

    fn set_int(&mut self, key: &str, value: i32) {
        self.values.set_int(key, value);
        self.dirty = true;
    }

    fn has_key(&self, key: &str) -> bool {
        self.values.has_key(key)
    }

    fn delete_key(&mut self, key: &str) {
        if self.values.has_key(key) {
            self.values.delete_key(key);
            self.dirty = true;
        }
    }

    fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        self.write_file()?;
        self.dirty = false;
        log::info!("Wrote preferences to {}", self.path.display());
        Ok(())
    }
}
