//! Scoping Errors

use thiserror::Error;

use crate::validate::{MAX_CSS_BYTES, MAX_SCOPE_ID_LEN};

pub type ScopeResult<T> = Result<T, ScopeError>;

/// Failures raised by the public rewrite entry points, always before any
/// text scanning begins. Neither kind is recoverable within the rewriter:
/// oversized input must not be truncated and resubmitted, and an invalid
/// scope id is a caller bug (ids are normally machine-generated).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    #[error("css text is {size} bytes, exceeding the {MAX_CSS_BYTES} byte limit")]
    SizeExceeded { size: usize },

    #[error("invalid scope id {id:?}: {reason}")]
    InvalidScopeId { id: String, reason: ScopeIdViolation },
}

/// Which constraint a scope id failed. The character-class constraint exists
/// because the id is interpolated unescaped into an HTML attribute value and
/// into cache filenames.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeIdViolation {
    #[error("must not be empty")]
    Empty,

    #[error("must be at most {MAX_SCOPE_ID_LEN} characters")]
    TooLong,

    #[error("{0:?} is outside [A-Za-z0-9_-]")]
    ForbiddenCharacter(char),
}
