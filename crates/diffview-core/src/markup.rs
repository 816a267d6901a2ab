//! Markup token stream.
//!
//! The inspector and the diff renderer emit an ordered token sequence; a
//! single join step converts it to HTML. The concrete markup syntax appears
//! only in [`to_html`], so an alternative annotation scheme only needs a
//! different join.

use crate::render::RenderConfig;

/// Which change marker wraps a rendered entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mark {
    Removed,
    Added,
    /// Removed half of a primitive change (carries the extra `diff-key` class).
    RemovedPair,
    /// Added half of a primitive change.
    AddedPair,
}

/// One element of the render output.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    /// Opening container delimiter.
    Open,
    /// Closing container delimiter.
    Close,
    /// Empty container: both delimiters in a single marker.
    Empty,
    /// Start of an indented nesting level.
    LevelStart,
    /// End of an indented nesting level.
    LevelEnd,
    /// A formatted property key (already escaped and quoted as needed).
    Key(String),
    /// The `key: value` separator.
    Colon,
    /// Entry separator: comma plus newline.
    Sep,
    /// Pre-escaped primitive text.
    Text(String),
    /// Shallow-mode container placeholder.
    Placeholder,
    MarkStart(Mark),
    MarkEnd(Mark),
}

/// Join a token sequence into HTML markup. Indentation is structural: each
/// nesting level is wrapped in its own `diff-level` block rather than
/// counted.
pub(crate) fn to_html(tokens: &[Token], config: &RenderConfig) -> String {
    let mut out = String::with_capacity(tokens.len() * 16);
    for token in tokens {
        match token {
            Token::Open => {
                out.push_str("<span>");
                out.push(config.open_char);
                out.push_str("</span>");
            }
            Token::Close => {
                out.push_str("<span>");
                out.push(config.close_char);
                out.push_str("</span>");
            }
            Token::Empty => {
                out.push_str("<span>");
                out.push(config.open_char);
                out.push(config.close_char);
                out.push_str("</span>");
            }
            Token::LevelStart => out.push_str("\n<div class=\"diff-level\">"),
            Token::LevelEnd => out.push_str("\n</div>"),
            Token::Key(key) => out.push_str(key),
            Token::Colon => out.push_str("<span>: </span>"),
            Token::Sep => out.push_str("<span>,</span>\n"),
            Token::Text(text) => out.push_str(text),
            Token::Placeholder => out.push_str("[object]"),
            Token::MarkStart(Mark::Removed) => out.push_str("<del class=\"diff\">"),
            Token::MarkStart(Mark::Added) => out.push_str("<ins class=\"diff\">"),
            Token::MarkStart(Mark::RemovedPair) => out.push_str("<del class=\"diff diff-key\">"),
            Token::MarkStart(Mark::AddedPair) => out.push_str("<ins class=\"diff diff-key\">"),
            Token::MarkEnd(Mark::Removed | Mark::RemovedPair) => out.push_str("</del>"),
            Token::MarkEnd(Mark::Added | Mark::AddedPair) => out.push_str("</ins>"),
        }
    }
    out
}
