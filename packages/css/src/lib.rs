#![deny(clippy::all)]

//! Capsule CSS
//!
//! Component-scoped CSS encapsulation: rewrites the selectors of a stylesheet
//! so its rules only apply to markup rendered inside one component's subtree,
//! keyed by a `[data-capsule="<id>"]` attribute selector. A limited shim for
//! ShadowDOM-style isolation over plain DOM:
//! <https://drafts.csswg.org/css-scoping-1/>
//!
//! The rewriters are pure functions over `(css text, scope id)`; all caching
//! and document-head plumbing lives in the `capsule-runtime` crate.

pub mod error;
pub mod scope_css;
pub mod validate;

pub use error::{ScopeError, ScopeIdViolation, ScopeResult};
pub use scope_css::{scope_attribute, scope_selectors, scope_with_nesting, strip_comments, SCOPE_ATTR};
pub use validate::{validate_css_size, validate_scope_id, MAX_CSS_BYTES, MAX_SCOPE_ID_LEN};
