//! Hostname validation and text sanitization

use super::ports::TextSanitizer;
use crate::contract::{HostnameError, MAX_HOSTNAME_CHARS};

/// Default sanitizer
///
/// Strips control characters and U+FFFD left behind by lossy decoding upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8TextSanitizer;

impl TextSanitizer for Utf8TextSanitizer {
    fn clean_utf8(&self, text: &str, context: &str) -> String {
        let cleaned: String = text
            .chars()
            .filter(|c| !c.is_control() && *c != char::REPLACEMENT_CHARACTER)
            .collect();

        if cleaned.len() != text.len() {
            tracing::debug!(
                context,
                removed_bytes = text.len() - cleaned.len(),
                "Stripped unclean characters"
            );
        }
        cleaned
    }
}

/// Turn raw user input into a storable hostname
///
/// Trims, sanitizes and truncates to [`MAX_HOSTNAME_CHARS`] characters.
/// Truncation is silent; blank input (before or after sanitizing) is rejected.
pub fn normalize_hostname(
    raw: &str,
    sanitizer: &dyn TextSanitizer,
) -> Result<String, HostnameError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(HostnameError::invalid_argument(
            "Hostname must be a non-empty string",
        ));
    }

    let cleaned = sanitizer.clean_utf8(trimmed, "hostname");
    if cleaned.trim().is_empty() {
        return Err(HostnameError::invalid_argument(
            "Hostname contains no printable characters",
        ));
    }

    Ok(truncate_chars(&cleaned, MAX_HOSTNAME_CHARS))
}

/// Keep at most `max` characters (not bytes)
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
