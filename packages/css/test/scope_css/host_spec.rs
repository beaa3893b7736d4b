//! Host Pseudo-Selector Tests
//!
//! `:host`, `:host(...)` and `:host-context(...)` convert into the scope
//! attribute selector instead of being prefixed by it.

mod utils;
use utils::{assert_contains, assert_not_contains, scope};

#[test]
fn should_convert_bare_host_to_the_scope_attribute() {
    let scoped = scope(":host { display: block; }", "abc123");
    assert_eq!(scoped, "[data-capsule=\"abc123\"] { display: block; }");
    assert_not_contains(&scoped, ":host");
}

#[test]
fn should_compound_host_function_selectors_onto_the_attribute() {
    let scoped = scope(":host(.active) { color: blue; }", "abc123");
    assert_eq!(scoped, "[data-capsule=\"abc123\"].active { color: blue; }");
}

#[test]
fn should_convert_host_context_to_a_descendant_match() {
    let scoped = scope(":host-context(.theme-dark) { background: black; }", "abc123");
    assert_eq!(
        scoped,
        "[data-capsule=\"abc123\"] .theme-dark { background: black; }"
    );
}

#[test]
fn should_keep_suffixes_after_host_forms() {
    assert_eq!(
        scope(":host:hover { color: red; }", "abc123"),
        "[data-capsule=\"abc123\"]:hover { color: red; }"
    );
    assert_eq!(
        scope(":host(.active) .child { color: red; }", "abc123"),
        "[data-capsule=\"abc123\"].active .child { color: red; }"
    );
}

#[test]
fn should_handle_host_forms_inside_comma_lists() {
    let scoped = scope(":host, .a { color: red; }", "abc123");
    assert_eq!(
        scoped,
        "[data-capsule=\"abc123\"], [data-capsule=\"abc123\"] .a { color: red; }"
    );
}

#[test]
fn should_not_treat_host_in_the_middle_of_a_selector_specially() {
    // Only selectors starting with :host get the conversion; anything else
    // is prefixed as a whole.
    let scoped = scope("div :host { color: red; }", "abc123");
    assert_contains(&scoped, "[data-capsule=\"abc123\"] div :host");
}

#[test]
fn should_trim_inside_host_function_arguments() {
    assert_eq!(
        scope(":host( .active ) { color: blue; }", "abc123"),
        "[data-capsule=\"abc123\"].active { color: blue; }"
    );
    assert_eq!(
        scope(":host-context( .theme-dark ) { color: blue; }", "abc123"),
        "[data-capsule=\"abc123\"] .theme-dark { color: blue; }"
    );
}
