//! Style Registry
//!
//! Batches scoped stylesheets per namespace for later emission into a
//! document head, either as inline `<style>` tags or as `<link>` tags
//! referencing files persisted by the writer. Registration order is
//! preserved so head emission is deterministic.

use capsule_css::{validate_scope_id, ScopeResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How one registered stylesheet reaches the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmitMode {
    /// Emit the CSS text inline in a `<style>` tag.
    Inline,
    /// Emit a `<link>` tag referencing an already-written stylesheet file.
    Linked { href: String },
}

#[derive(Debug, Clone)]
pub struct RegisteredStyle {
    pub scope_id: String,
    pub css: String,
    pub mode: EmitMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StyleKey {
    namespace: String,
    scope_id: String,
}

/// Accumulates `(namespace, scope id) -> scoped CSS` until the surrounding
/// document render asks for its head markup.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    styles: IndexMap<StyleKey, RegisteredStyle>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one scope's CSS under a namespace. Re-registering the same
    /// `(namespace, scope id)` replaces the entry in place without changing
    /// its emission position.
    ///
    /// The scope id is re-checked here since it lands unescaped in an
    /// attribute value during emission.
    pub fn register(
        &mut self,
        namespace: &str,
        scope_id: &str,
        css: impl Into<String>,
        mode: EmitMode,
    ) -> ScopeResult<()> {
        validate_scope_id(scope_id)?;
        let key = StyleKey {
            namespace: namespace.to_string(),
            scope_id: scope_id.to_string(),
        };
        self.styles.insert(
            key,
            RegisteredStyle {
                scope_id: scope_id.to_string(),
                css: css.into(),
                mode,
            },
        );
        Ok(())
    }

    /// Head markup for one namespace, in registration order.
    pub fn emit_head(&self, namespace: &str) -> String {
        let mut head = String::new();
        for (key, style) in &self.styles {
            if key.namespace != namespace {
                continue;
            }
            match &style.mode {
                EmitMode::Inline => {
                    head.push_str(&format!(
                        "<style data-capsule-for=\"{}\">\n{}\n</style>\n",
                        style.scope_id, style.css
                    ));
                }
                EmitMode::Linked { href } => {
                    head.push_str(&format!("<link rel=\"stylesheet\" href=\"{}\">\n", href));
                }
            }
        }
        head
    }

    /// Drop everything registered under one namespace.
    pub fn clear(&mut self, namespace: &str) {
        self.styles.retain(|key, _| key.namespace != namespace);
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
