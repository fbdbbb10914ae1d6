//! Key-value preference storage.
//!
//! The settings store never touches a global preference database directly.
//! It talks to a [`PreferenceBackend`], so callers choose where values live:
//! an in-memory map for tests, or a JSON file for the command line tool.

mod file;
mod memory;

pub use file::FilePreferences;
pub use memory::MemoryPreferences;

use crate::error::Result;
use serde::Serialize;

/// A single stored preference value.
///
/// Integers and strings share one key space, so a key written as a string
/// reads back as absent through [`PreferenceBackend::get_int`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PrefValue {
    /// Integer value
    Int(i32),
    /// String value
    Str(String),
}

/// Process-local key-value store with string keys and typed scalar values.
///
/// Single-key operations are expected to be atomic. Implementations perform
/// no locking; callers serialize concurrent access.
pub trait PreferenceBackend {
    /// Returns the string stored under `key`, if any.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Returns the integer stored under `key`, if any.
    fn get_int(&self, key: &str) -> Option<i32>;

    /// Stores a string under `key`, replacing any previous value.
    fn set_string(&mut self, key: &str, value: &str);

    /// Stores an integer under `key`, replacing any previous value.
    fn set_int(&mut self, key: &str, value: i32);

    /// Returns true when any value is stored under `key`.
    fn has_key(&self, key: &str) -> bool;

    /// Removes `key`. Absent keys are ignored.
    fn delete_key(&mut self, key: &str);

    /// Persists pending writes.
    ///
    /// Default: no-op, for backends that write through immediately.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Returns the stored string or `default` when absent.
    fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|| default.to_string())
    }

    /// Returns the stored integer or `default` when absent.
    fn get_int_or(&self, key: &str, default: i32) -> i32 {
        self.get_int(key).unwrap_or(default)
    }
}

impl<T: PreferenceBackend + ?Sized> PreferenceBackend for &mut T {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn get_int(&self, key: &str) -> Option<i32> {
        (**self).get_int(key)
    }

    fn set_string(&mut self, key: &str, value: &str) {
        (**self).set_string(key, value)
    }

    fn set_int(&mut self, key: &str, value: i32) {
        (**self).set_int(key, value)
    }

    fn has_key(&self, key: &str) -> bool {
        (**self).has_key(key)
    }

    fn delete_key(&mut self, key: &str) {
        (**self).delete_key(key)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
