//! Style Cache
//!
//! Memoizes `(type key, scope id, strategy) -> scoped CSS`. Safe because
//! the rewriters are deterministic and side-effect-free for a given input
//! pair. The cache is single-owner; callers wanting to share it across
//! threads put it behind their own lock.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use capsule_css::ScopeResult;

use crate::strategy::{scope_with, ScopeStrategy};

/// Composite key: the component type the CSS was authored for, the scope it
/// was rewritten against, and the strategy used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub type_key: String,
    pub scope_id: String,
    pub strategy: ScopeStrategy,
}

#[derive(Debug, Default)]
pub struct StyleCache {
    entries: HashMap<CacheKey, String>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached scoped CSS for the key, rewriting `css` on a miss.
    /// On a hit the `css` argument is ignored; a type's stylesheet is
    /// assumed stable for the cache's lifetime.
    pub fn get_or_scope(
        &mut self,
        type_key: &str,
        scope_id: &str,
        strategy: ScopeStrategy,
        css: &str,
    ) -> ScopeResult<&str> {
        let key = CacheKey {
            type_key: type_key.to_string(),
            scope_id: scope_id.to_string(),
            strategy,
        };
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut().as_str()),
            Entry::Vacant(entry) => {
                let scoped = scope_with(strategy, css, scope_id)?;
                Ok(entry.insert(scoped).as_str())
            }
        }
    }

    pub fn get(&self, type_key: &str, scope_id: &str, strategy: ScopeStrategy) -> Option<&str> {
        let key = CacheKey {
            type_key: type_key.to_string(),
            scope_id: scope_id.to_string(),
            strategy,
        };
        self.entries.get(&key).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
