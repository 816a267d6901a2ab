//! Plain serializer ("inspector"): renders a single value with no diff
//! context into nested, bracket-delimited tokens.
//!
//! Used standalone through [`crate::render::render_value`] and by the diff
//! renderer for leaf and unchanged values.

use serde_json::Value;

use crate::diff::{direct_get, direct_keys, is_container};
use crate::markup::Token;
use crate::render::RenderConfig;
use crate::text::{escape_html, format_key, quote_string};

/// Emit tokens for `value`. `depth` counts container levels already opened by
/// the caller; with `config.shallow`, containers below the first rendered
/// level collapse to the `[object]` placeholder.
pub(crate) fn inspect_tokens(
    value: &Value,
    depth: usize,
    config: &RenderConfig,
    out: &mut Vec<Token>,
) {
    if !is_container(value) {
        out.push(Token::Text(primitive_text(value)));
        return;
    }
    if config.shallow && depth > 0 {
        out.push(Token::Placeholder);
        return;
    }
    let keys = direct_keys(value);
    if keys.is_empty() {
        out.push(Token::Empty);
        return;
    }
    out.push(Token::Open);
    out.push(Token::LevelStart);
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            out.push(Token::Sep);
        }
        out.push(Token::Key(format_key(key)));
        out.push(Token::Colon);
        if let Some(child) = direct_get(value, key) {
            inspect_tokens(child, depth + 1, config, out);
        }
    }
    out.push(Token::LevelEnd);
    out.push(Token::Close);
}

/// Display text for a primitive: strings are HTML-escaped then quoted,
/// numbers, booleans, and null print their canonical form.
fn primitive_text(value: &Value) -> String {
    match value {
        Value::String(s) => quote_string(&escape_html(s)),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Containers are handled by the caller before reaching here.
        _ => "null".to_string(),
    }
}
