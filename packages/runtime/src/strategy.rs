//! Scoping Strategy
//!
//! Per-scope choice between the two rewriters. The engine exposes both as
//! independent pure functions and takes no position on which is current;
//! the choice is configuration owned by the integration layer.

use capsule_css::{scope_selectors, scope_with_nesting, ScopeResult};
use serde::{Deserialize, Serialize};

/// How a scope's CSS gets encapsulated.
///
/// Selector patching works everywhere; nesting is the cheaper wrap for
/// browsers with native CSS nesting support.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScopeStrategy {
    #[default]
    SelectorPatching,
    Nesting,
}

impl ScopeStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeStrategy::SelectorPatching => "selector-patching",
            ScopeStrategy::Nesting => "nesting",
        }
    }
}

/// Scope `css` to `scope_id` with the chosen strategy.
pub fn scope_with(strategy: ScopeStrategy, css: &str, scope_id: &str) -> ScopeResult<String> {
    match strategy {
        ScopeStrategy::SelectorPatching => scope_selectors(css, scope_id),
        ScopeStrategy::Nesting => scope_with_nesting(css, scope_id),
    }
}
