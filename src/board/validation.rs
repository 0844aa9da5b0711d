//! Input normalization for board submissions.
//!
//! The only rule is that text must be non-empty once surrounding
//! whitespace is removed. Stored text is the trimmed form.

use crate::{BoardError, Result};

/// Trim `raw` and reject it if nothing is left.
///
/// `field` names the input in the error message (e.g. "title").
pub fn normalize_text(field: &str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BoardError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}
