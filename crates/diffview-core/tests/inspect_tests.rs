//! Plain serializer (inspector) tests: exact markup for primitives, strings,
//! containers, key quoting, and shallow truncation.

use diffview_core::{render_value, RenderConfig};
use serde_json::json;

fn cfg() -> RenderConfig {
    RenderConfig::default()
}

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn renders_numbers_booleans_and_null() {
    assert_eq!(render_value(&json!(42), &cfg()), "42");
    assert_eq!(render_value(&json!(-7), &cfg()), "-7");
    assert_eq!(render_value(&json!(true), &cfg()), "true");
    assert_eq!(render_value(&json!(false), &cfg()), "false");
    assert_eq!(render_value(&json!(null), &cfg()), "null");
}

#[test]
fn renders_strings_quoted() {
    assert_eq!(render_value(&json!("hello"), &cfg()), r#""hello""#);
    assert_eq!(render_value(&json!(""), &cfg()), r#""""#);
}

#[test]
fn escapes_html_in_string_values() {
    assert_eq!(
        render_value(&json!("a & <b>"), &cfg()),
        r#""a &amp; &lt;b&gt;""#
    );
}

#[test]
fn escapes_control_characters_in_strings() {
    assert_eq!(
        render_value(&json!("line1\nline2"), &cfg()),
        r#""line1\nline2""#
    );
    assert_eq!(
        render_value(&json!("col1\tcol2"), &cfg()),
        r#""col1\tcol2""#
    );
    assert_eq!(
        render_value(&json!(r#"say "hi""#), &cfg()),
        r#""say \"hi\"""#
    );
    assert_eq!(
        render_value(&json!(r"path\to"), &cfg()),
        r#""path\\to""#
    );
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn empty_containers_render_as_one_marker() {
    assert_eq!(render_value(&json!({}), &cfg()), "<span>{}</span>");
    assert_eq!(render_value(&json!([]), &cfg()), "<span>{}</span>");
}

#[test]
fn flat_object_markup() {
    assert_eq!(
        render_value(&json!({"a": 1}), &cfg()),
        "<span>{</span>\n<div class=\"diff-level\">a<span>: </span>1\n</div><span>}</span>"
    );
}

#[test]
fn object_entries_are_comma_separated_in_order() {
    assert_eq!(
        render_value(&json!({"z": 1, "a": "x"}), &cfg()),
        "<span>{</span>\n<div class=\"diff-level\">z<span>: </span>1<span>,</span>\na<span>: </span>\"x\"\n</div><span>}</span>"
    );
}

#[test]
fn nested_objects_nest_their_own_level() {
    assert_eq!(
        render_value(&json!({"a": {"b": 2}}), &cfg()),
        "<span>{</span>\n<div class=\"diff-level\">a<span>: </span><span>{</span>\n<div class=\"diff-level\">b<span>: </span>2\n</div><span>}</span>\n</div><span>}</span>"
    );
}

#[test]
fn arrays_render_with_bare_index_keys() {
    assert_eq!(
        render_value(&json!([1, 2]), &cfg()),
        "<span>{</span>\n<div class=\"diff-level\">0<span>: </span>1<span>,</span>\n1<span>: </span>2\n</div><span>}</span>"
    );
}

// ============================================================================
// Key formatting
// ============================================================================

#[test]
fn identifier_keys_render_bare() {
    let html = render_value(&json!({"a": 1, "_x": 2, "$ref": 3}), &cfg());
    assert!(html.contains("a<span>: </span>"));
    assert!(html.contains("_x<span>: </span>"));
    assert!(html.contains("$ref<span>: </span>"));
}

#[test]
fn non_identifier_keys_render_quoted() {
    let html = render_value(&json!({"2b": 1}), &cfg());
    assert!(html.contains("\"2b\"<span>: </span>"));

    let html = render_value(&json!({"my-key": 1}), &cfg());
    assert!(html.contains("\"my-key\"<span>: </span>"));
}

#[test]
fn keys_are_html_escaped_before_quoting() {
    let html = render_value(&json!({"a&b": 1}), &cfg());
    assert!(html.contains("\"a&amp;b\"<span>: </span>"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn custom_delimiters_apply_everywhere() {
    let config = RenderConfig {
        open_char: '[',
        close_char: ']',
        ..RenderConfig::default()
    };
    assert_eq!(render_value(&json!({}), &config), "<span>[]</span>");
    assert_eq!(
        render_value(&json!({"a": 1}), &config),
        "<span>[</span>\n<div class=\"diff-level\">a<span>: </span>1\n</div><span>]</span>"
    );
}

#[test]
fn shallow_collapses_nested_containers_only() {
    let config = RenderConfig {
        shallow: true,
        ..RenderConfig::default()
    };
    assert_eq!(
        render_value(&json!({"a": {"b": 1}, "c": 2}), &config),
        "<span>{</span>\n<div class=\"diff-level\">a<span>: </span>[object]<span>,</span>\nc<span>: </span>2\n</div><span>}</span>"
    );
}

#[test]
fn shallow_still_expands_the_top_level() {
    let config = RenderConfig {
        shallow: true,
        ..RenderConfig::default()
    };
    // The first level renders normally; only deeper containers truncate.
    assert_eq!(
        render_value(&json!({"a": 1}), &config),
        "<span>{</span>\n<div class=\"diff-level\">a<span>: </span>1\n</div><span>}</span>"
    );
}
