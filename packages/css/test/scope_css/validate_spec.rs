//! Validation Tests
//!
//! Both rewrite entry points reject oversized input and malformed scope ids
//! before any scanning, so no partial output is ever produced.

mod utils;
use capsule_css::{scope_selectors, ScopeError};
use utils::scope;

#[test]
fn should_accept_css_at_exactly_one_million_bytes() {
    let css = "a".repeat(1_000_000);
    assert!(scope_selectors(&css, "abc123").is_ok());
}

#[test]
fn should_reject_css_one_byte_over_the_limit() {
    let css = "a".repeat(1_000_001);
    let err = scope_selectors(&css, "abc123").unwrap_err();
    assert_eq!(err, ScopeError::SizeExceeded { size: 1_000_001 });
}

#[test]
fn should_reject_an_empty_scope_id() {
    assert!(matches!(
        scope_selectors(".a {}", ""),
        Err(ScopeError::InvalidScopeId { .. })
    ));
}

#[test]
fn should_reject_a_scope_id_over_one_hundred_characters() {
    let id = "a".repeat(101);
    assert!(matches!(
        scope_selectors(".a {}", &id),
        Err(ScopeError::InvalidScopeId { .. })
    ));
}

#[test]
fn should_accept_a_scope_id_of_exactly_one_hundred_characters() {
    let id = "a".repeat(100);
    assert!(scope_selectors(".a {}", &id).is_ok());
}

#[test]
fn should_accept_ids_built_from_the_allowed_class() {
    let scoped = scope(".a { color: red; }", "valid-id_123");
    assert!(scoped.contains("[data-capsule=\"valid-id_123\"]"));
}

#[test]
fn should_reject_path_traversal_shaped_ids() {
    assert!(matches!(
        scope_selectors(".a {}", "../etc"),
        Err(ScopeError::InvalidScopeId { .. })
    ));
}

#[test]
fn should_reject_markup_shaped_ids() {
    assert!(matches!(
        scope_selectors(".a {}", "<script>"),
        Err(ScopeError::InvalidScopeId { .. })
    ));
}

#[test]
fn should_reject_ids_with_quotes_or_whitespace() {
    for id in ["a\"]", "a b", "a\tb", "id'"] {
        assert!(
            scope_selectors(".a {}", id).is_err(),
            "expected {:?} to be rejected",
            id
        );
    }
}

#[test]
fn should_validate_before_the_empty_input_short_circuit() {
    // Even empty css reports a bad scope id.
    assert!(scope_selectors("", "<script>").is_err());
}

#[test]
fn error_messages_name_the_offending_input() {
    let err = scope_selectors(".a {}", "../etc").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("../etc"), "got: {}", message);
}
