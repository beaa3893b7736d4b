//! Scope CSS
//!
//! The selector rewriting engine behind capsule encapsulation. Two
//! strategies over the same validated input:
//!
//! - selector patching: split the stylesheet into rule blocks and prefix
//!   every comma-separated selector with the scope attribute selector,
//!   converting the `:host` pseudo-selector family along the way;
//! - nesting: wrap the whole stylesheet unmodified in one outer block and
//!   let native CSS nesting do the scoping.
//!
//! This is a textual transform over rule boundaries, not a CSS parser.
//! Malformed input (unbalanced braces, braces inside string literals)
//! produces best-effort output rather than an error.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use smallvec::SmallVec;

use crate::error::ScopeResult;
use crate::validate::{validate_css_size, validate_scope_id};

/// Attribute stamped on every element rendered inside a capsule's subtree.
pub const SCOPE_ATTR: &str = "data-capsule";

/// Substring marking a selector list as already scoped.
const SCOPE_MARKER: &str = "[data-capsule=";

// Comment bodies may contain braces, so comments are deleted before the
// rule scan and never restored. Non-greedy: the shortest span between a
// `/*` and the next `*/`.
static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*[\s\S]*?\*/").unwrap());

// A selector list is any brace-free run ending at a `{`; the previous `}`
// (or start of text) bounds it implicitly. At-rule bodies are not consumed
// by a match, so rule blocks nested inside them are picked up by later
// matches of the same pattern.
static RULE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^{}]+)\{").unwrap());

static HOST_CONTEXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":host-context\(([^)]*)\)").unwrap());

static HOST_FN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r":host\(([^)]*)\)").unwrap());

/// The scope attribute selector for one capsule id, e.g.
/// `[data-capsule="abc123"]`.
///
/// The id is interpolated unescaped; callers outside this module must have
/// run [`validate_scope_id`](crate::validate::validate_scope_id) first.
pub fn scope_attribute(scope_id: &str) -> String {
    format!("[{}=\"{}\"]", SCOPE_ATTR, scope_id)
}

/// Scope a stylesheet by patching every rule's selector list.
///
/// Each selector is prefixed with the scope attribute selector as a
/// descendant match; `:host`, `:host(...)` and `:host-context(...)` are
/// converted instead of prefixed. At-rule headers (`@media`, `@keyframes`,
/// ...) stay untouched while the rule blocks nested in their bodies are
/// still scoped. A selector list already containing the scope marker is
/// left alone, so reprocessing already-scoped output is a no-op for those
/// blocks.
///
/// Empty or whitespace-only input is returned unchanged.
pub fn scope_selectors(css: &str, scope_id: &str) -> ScopeResult<String> {
    validate_scope_id(scope_id)?;
    validate_css_size(css)?;
    if css.trim().is_empty() {
        return Ok(css.to_string());
    }

    let attr = scope_attribute(scope_id);
    let stripped = strip_comments(css);
    let scoped = RULE_RE.replace_all(&stripped, |caps: &Captures| {
        let span = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        format!("{}{{", scope_selector_list(span, &attr))
    });
    Ok(scoped.into_owned())
}

/// Scope a stylesheet by wrapping it, unmodified, in one outer block keyed
/// by the scope attribute selector. Requires native CSS nesting support in
/// the consuming browser.
///
/// A pure wrap: no comment stripping, no selector rewriting; the original
/// text passes through byte-for-byte inside the outer block. Empty or
/// whitespace-only input is returned unchanged.
pub fn scope_with_nesting(css: &str, scope_id: &str) -> ScopeResult<String> {
    validate_scope_id(scope_id)?;
    validate_css_size(css)?;
    if css.trim().is_empty() {
        return Ok(css.to_string());
    }

    Ok(format!("{} {{\n{}\n}}", scope_attribute(scope_id), css))
}

/// Delete every `/* ... */` span. Selector-like text inside a comment is
/// discarded with it.
pub fn strip_comments(css: &str) -> String {
    COMMENT_RE.replace_all(css, "").into_owned()
}

fn scope_selector_list(span: &str, attr: &str) -> String {
    let list = span.trim();

    if list.is_empty() || list.starts_with('@') || span.contains(SCOPE_MARKER) {
        return span.to_string();
    }

    // Inter-rule whitespace around the list is preserved exactly.
    let start = span.len() - span.trim_start().len();
    let end = span.trim_end().len();
    let lead = &span[..start];
    let trail = &span[end..];

    let scoped: SmallVec<[String; 8]> = list
        .split(',')
        .map(str::trim)
        .filter(|selector| !selector.is_empty())
        .map(|selector| scope_one_selector(selector, attr))
        .collect();

    format!("{}{}{}", lead, scoped.join(", "), trail)
}

// :host-context(x) matches x as an ancestor, :host(x) compounds x onto the
// host attribute itself, bare :host becomes the attribute alone. The
// substitutions must run in this order: bare `:host` is a prefix of the
// other two forms.
fn scope_one_selector(selector: &str, attr: &str) -> String {
    if !selector.starts_with(":host") {
        return format!("{} {}", attr, selector);
    }

    let selector = HOST_CONTEXT_RE.replace_all(selector, |caps: &Captures| {
        let inner = caps.get(1).map(|m| m.as_str()).unwrap_or("").trim();
        format!("{} {}", attr, inner)
    });
    let selector = HOST_FN_RE.replace_all(&selector, |caps: &Captures| {
        let inner = caps.get(1).map(|m| m.as_str()).unwrap_or("").trim();
        format!("{}{}", attr, inner)
    });
    selector.replace(":host", attr)
}
