//! Input Validation
//!
//! Both checks run at the start of every public rewrite call, before any
//! scanning, so partial output is never produced. They reject; they never
//! truncate or sanitize.

use crate::error::{ScopeError, ScopeIdViolation, ScopeResult};

/// Ceiling on the CSS input, in bytes. Also the only bound on worst-case
/// scanning cost.
pub const MAX_CSS_BYTES: usize = 1_000_000;

/// Ceiling on the scope id length, in characters.
pub const MAX_SCOPE_ID_LEN: usize = 100;

/// Reject CSS text larger than [`MAX_CSS_BYTES`]. Empty or whitespace-only
/// text is not an error; the rewriters return it unchanged.
pub fn validate_css_size(css: &str) -> ScopeResult<()> {
    if css.len() > MAX_CSS_BYTES {
        return Err(ScopeError::SizeExceeded { size: css.len() });
    }
    Ok(())
}

/// Reject scope ids outside `^[A-Za-z0-9_-]{1,100}$`.
///
/// The id is interpolated verbatim into `[data-capsule="<id>"]` and into
/// style cache filenames, so anything outside this class is treated as an
/// injection or traversal attempt, not as text to escape.
pub fn validate_scope_id(id: &str) -> ScopeResult<()> {
    let violation = if id.is_empty() {
        Some(ScopeIdViolation::Empty)
    } else if id.chars().count() > MAX_SCOPE_ID_LEN {
        Some(ScopeIdViolation::TooLong)
    } else {
        id.chars()
            .find(|c| !is_scope_id_char(*c))
            .map(ScopeIdViolation::ForbiddenCharacter)
    };

    match violation {
        Some(reason) => Err(ScopeError::InvalidScopeId {
            id: id.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

fn is_scope_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
