//! Diff renderer — walks a Change Tree and produces annotated HTML text.
//!
//! Two modes share one annotation table: the full view renders unchanged and
//! changed entries alike, the changes-only view filters `Equal` entries and
//! recurses into nested changes in the same mode. Leaf and unchanged values
//! are rendered by the inspector.
//!
//! Removed entries are wrapped in `<del class="diff">`, added entries in
//! `<ins class="diff">`; a primitive change renders as two sibling entries
//! (old wrapped in `del`, new in `ins`, both carrying the `diff-key` class).

use serde_json::Value;

use crate::change::{ChangeEntries, ChangeNode};
use crate::inspect::inspect_tokens;
use crate::markup::{to_html, Mark, Token};
use crate::text::format_key;

/// Render configuration, passed explicitly to every render call. There is no
/// process-wide state: concurrent renders with different configurations are
/// safe.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Opening container delimiter.
    pub open_char: char,
    /// Closing container delimiter.
    pub close_char: char,
    /// Collapse containers below the first rendered level to an `[object]`
    /// placeholder. Purely a rendering truncation; the diff computation is
    /// unaffected.
    pub shallow: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            open_char: '{',
            close_char: '}',
            shallow: false,
        }
    }
}

/// Render the full view: both unchanged and changed structure.
///
/// An `Equal` tree delegates to the inspector on the wrapped value. The
/// renderer trusts its input shape: trees other than what the diff engine
/// produces at the top level (`Equal` or `ObjectChange`) fall back to
/// inspecting their surviving value.
pub fn render_full(node: &ChangeNode, config: &RenderConfig) -> String {
    let mut tokens = Vec::new();
    match node {
        ChangeNode::Equal { value } => inspect_tokens(value, 0, config, &mut tokens),
        ChangeNode::ObjectChange { value: entries } => {
            container_tokens(entries, config, false, &mut tokens);
        }
        ChangeNode::Added { value } | ChangeNode::Removed { value } => {
            inspect_tokens(value, 0, config, &mut tokens);
        }
        ChangeNode::PrimitiveChange { added, .. } => {
            inspect_tokens(added, 0, config, &mut tokens);
        }
    }
    to_html(&tokens, config)
}

/// Render the changes-only view: `Equal` trees produce the empty string,
/// `Equal` entries are filtered out, and nested changes recurse in the same
/// mode.
pub fn render_changes_only(node: &ChangeNode, config: &RenderConfig) -> String {
    match node {
        ChangeNode::Equal { .. } => String::new(),
        ChangeNode::ObjectChange { value: entries } => {
            let mut tokens = Vec::new();
            container_tokens(entries, config, true, &mut tokens);
            to_html(&tokens, config)
        }
        other => render_full(other, config),
    }
}

/// Render a single value with no diff applied (the plain inspector).
pub fn render_value(value: &Value, config: &RenderConfig) -> String {
    let mut tokens = Vec::new();
    inspect_tokens(value, 0, config, &mut tokens);
    to_html(&tokens, config)
}

fn container_tokens(
    entries: &ChangeEntries,
    config: &RenderConfig,
    diff_only: bool,
    out: &mut Vec<Token>,
) {
    out.push(Token::Open);
    out.push(Token::LevelStart);
    let mut first = true;
    for (key, node) in entries {
        if diff_only && node.is_equal() {
            continue;
        }
        if !first {
            out.push(Token::Sep);
        }
        first = false;
        entry_tokens(key, node, config, diff_only, out);
    }
    out.push(Token::LevelEnd);
    out.push(Token::Close);
}

fn entry_tokens(
    key: &str,
    node: &ChangeNode,
    config: &RenderConfig,
    diff_only: bool,
    out: &mut Vec<Token>,
) {
    match node {
        ChangeNode::Equal { value } => {
            push_key(key, out);
            inspect_tokens(value, 1, config, out);
        }
        ChangeNode::Removed { value } => {
            out.push(Token::MarkStart(Mark::Removed));
            push_key(key, out);
            inspect_tokens(value, 1, config, out);
            out.push(Token::MarkEnd(Mark::Removed));
        }
        ChangeNode::Added { value } => {
            out.push(Token::MarkStart(Mark::Added));
            push_key(key, out);
            inspect_tokens(value, 1, config, out);
            out.push(Token::MarkEnd(Mark::Added));
        }
        ChangeNode::PrimitiveChange { removed, added } => {
            out.push(Token::MarkStart(Mark::RemovedPair));
            push_key(key, out);
            inspect_tokens(removed, 1, config, out);
            out.push(Token::MarkEnd(Mark::RemovedPair));
            out.push(Token::Sep);
            out.push(Token::MarkStart(Mark::AddedPair));
            push_key(key, out);
            inspect_tokens(added, 1, config, out);
            out.push(Token::MarkEnd(Mark::AddedPair));
        }
        ChangeNode::ObjectChange { value: entries } => {
            push_key(key, out);
            if config.shallow {
                out.push(Token::Placeholder);
            } else {
                container_tokens(entries, config, diff_only, out);
            }
        }
    }
}

fn push_key(key: &str, out: &mut Vec<Token>) {
    out.push(Token::Key(format_key(key)));
    out.push(Token::Colon);
}
