//! # diffview-core
//!
//! Structural diffing for nested JSON values with annotated, indentable HTML
//! output.
//!
//! The diff engine compares two `serde_json::Value` trees and classifies
//! every property as unchanged, added, removed, or recursively changed,
//! producing a [`ChangeNode`] tree. The renderers turn that tree into nested,
//! bracket-delimited markup where removed entries are wrapped in `<del>` tags
//! and added entries in `<ins>` tags; a plain inspector renders single values
//! with no diff context.
//!
//! ## Quick start
//!
//! ```rust
//! use diffview_core::{diff_json, render_changes_only, RenderConfig};
//!
//! let tree = diff_json(r#"{"a":1}"#, r#"{"a":2}"#).unwrap();
//! let html = render_changes_only(&tree, &RenderConfig::default());
//! assert!(html.contains(r#"<del class="diff diff-key">a<span>: </span>1</del>"#));
//! assert!(html.contains(r#"<ins class="diff diff-key">a<span>: </span>2</ins>"#));
//! ```
//!
//! ## Modules
//!
//! - [`diff`] — structural comparison, lookup strategies, depth guard
//! - [`change`] — the Change Tree produced by a diff
//! - [`render`] — full view, changes-only view, and plain value rendering
//! - [`text`] — key quoting and HTML escaping shared by the renderers
//! - [`error`] — error types for diff failures

pub mod change;
pub mod diff;
pub mod error;
mod inspect;
mod markup;
pub mod render;
pub mod text;

pub use change::{ChangeEntries, ChangeNode};
pub use diff::{
    diff, diff_json, diff_own_properties, diff_with, DiffOptions, DirectLookup, PropertyLookup,
    DEFAULT_MAX_DEPTH,
};
pub use error::{DiffError, Result};
pub use render::{render_changes_only, render_full, render_value, RenderConfig};
