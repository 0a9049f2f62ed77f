//! Description length rule
//!
//! Descriptions are capped at [`MAX_DESCRIPTION_CHARS`] Unicode scalar values.
//! The cap is a client-side soft limit; the server may accept more.

use crate::error::ValidationError;

/// Maximum description length, in characters
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Checks a candidate description against the cap.
///
/// Forms call this on every keystroke and drop the edit when it fails,
/// so an over-long value is never stored.
pub fn validate_description(text: &str) -> Result<(), ValidationError> {
    let len = text.chars().count();
    if len > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::description_too_long(len));
    }
    Ok(())
}

/// Characters left before the cap. Never negative.
pub fn remaining_chars(text: &str) -> usize {
    MAX_DESCRIPTION_CHARS.saturating_sub(text.chars().count())
}
