//! Reversible encoding for stored credentials.
//!
//! This is obfuscation, not encryption: anyone with the preference file can
//! decode the value. It only keeps passwords from sitting in the store as
//! literal text.

use crate::error::{PipelineError, Result};
use base64::Engine;

/// Encodes a plaintext secret for storage.
pub fn encode_secret(plain: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(plain.as_bytes())
}

/// Decodes a stored secret.
///
/// # Errors
///
/// Returns [`PipelineError::CorruptSettings`] naming `key` when the stored
/// text is not valid base64 or does not decode to UTF-8.
pub fn decode_secret(key: &str, encoded: &str) -> Result<String> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| PipelineError::CorruptSettings {
            key: key.to_string(),
            reason: format!("not valid base64: {}", e),
        })?;

    String::from_utf8(bytes).map_err(|e| PipelineError::CorruptSettings {
        key: key.to_string(),
        reason: format!("not valid UTF-8: {}", e),
    })
}
