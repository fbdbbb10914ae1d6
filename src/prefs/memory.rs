//! In-memory preference backend.

use super::{PrefValue, PreferenceBackend};
use std::collections::BTreeMap;

/// Preference backend holding values in a map.
///
/// Nothing is written anywhere; dropping the value discards all preferences.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, PrefValue>,
}

impl MemoryPreferences {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw stored value for `key`.
    pub fn raw(&self, key: &str) -> Option<&PrefValue> {
        self.values.get(key)
    }

    /// Iterates over stored keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn from_map(values: BTreeMap<String, PrefValue>) -> Self {
        Self { values }
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<String, PrefValue> {
        &self.values
    }
}

impl PreferenceBackend for MemoryPreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        match self.values.get(key) {
            Some(PrefValue::Str(s)) => Some(s.clone()),
            Some(PrefValue::Int(_)) => {
                log::warn!("Preference '{}' holds an integer, expected a string", key);
                None
            }
            None => None,
        }
    }

    fn get_int(&self, key: &str) -> Option<i32> {
        match self.values.get(key) {
            Some(PrefValue::Int(v)) => Some(*v),
            Some(PrefValue::Str(_)) => {
                log::warn!("Preference '{}' holds a string, expected an integer", key);
                None
            }
            None => None,
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), PrefValue::Str(value.to_string()));
    }

    fn set_int(&mut self, key: &str, value: i32) {
        self.values.insert(key.to_string(), PrefValue::Int(value));
    }

    fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn delete_key(&mut self, key: &str) {
        self.values.remove(key);
    }
}
