//! Diff engine — recursive structural comparison of two JSON values.
//!
//! The engine classifies every property as unchanged, added, removed, or
//! itself recursively changed, and produces a [`ChangeNode`] tree. It has no
//! rendering dependency; see [`crate::render`] for display output.
//!
//! Containers ("diffable" values) are objects and arrays; arrays are compared
//! as index-keyed containers. Everything else is compared as a primitive.
//!
//! # Example
//! ```
//! use diffview_core::{diff, ChangeNode};
//! use serde_json::json;
//!
//! let tree = diff(&json!({"a": 1}), &json!({"a": 2})).unwrap();
//! assert!(matches!(tree, ChangeNode::ObjectChange { .. }));
//! ```

use serde_json::Value;

use crate::change::{ChangeEntries, ChangeNode};
use crate::error::{DiffError, Result};

/// Depth ceiling matching what serde_json applies when parsing nested
/// documents. Programmatically built values can exceed it, in which case the
/// diff reports [`DiffError::DepthLimitExceeded`] instead of overflowing.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Key membership and value resolution strategy for the diff engine.
///
/// JSON values carry no inherited keys, so the built-in [`DirectLookup`]
/// resolves everything against the container itself and [`diff`] agrees with
/// [`diff_own_properties`] on plain data. The trait is the seam for layered
/// sources (configuration overlays, maps with defaults): a custom
/// implementation can make full-lookup diffs see fallback keys that an
/// own-properties diff ignores.
///
/// Implementations must keep `keys` and `get` consistent: every enumerated
/// key must resolve.
pub trait PropertyLookup {
    /// Keys enumerable on `container`, in enumeration order. Arrays
    /// enumerate their indices as decimal strings.
    fn keys(&self, container: &Value) -> Vec<String> {
        direct_keys(container)
    }

    /// Whether `key` is reachable on `container` through this lookup.
    fn contains(&self, container: &Value, key: &str) -> bool {
        self.get(container, key).is_some()
    }

    /// Resolve `key` on `container` through this lookup. The result may
    /// borrow from the lookup itself (e.g. a defaults table).
    fn get<'v>(&'v self, container: &'v Value, key: &str) -> Option<&'v Value> {
        direct_get(container, key)
    }
}

/// The default lookup: a key resolves only against the container itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectLookup;

impl PropertyLookup for DirectLookup {}

/// Options controlling a diff run.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Restrict the membership test to keys directly owned by a container,
    /// bypassing the lookup chain. Enumeration and value access still go
    /// through the lookup.
    pub own_properties: bool,

    /// Maximum nesting depth before the diff aborts with
    /// [`DiffError::DepthLimitExceeded`].
    pub max_depth: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            own_properties: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Compare two values using full-lookup key membership.
///
/// The result is always `Equal` or `ObjectChange`. Note that two unequal
/// primitives at the top level yield `Equal(left)`: with no keys to compare,
/// nothing marks the pair as changed. Callers diffing bare primitives should
/// compare the values directly.
pub fn diff(left: &Value, right: &Value) -> Result<ChangeNode> {
    diff_with(left, right, &DirectLookup, &DiffOptions::default())
}

/// Compare two values considering only directly-owned keys on each side.
pub fn diff_own_properties(left: &Value, right: &Value) -> Result<ChangeNode> {
    let options = DiffOptions {
        own_properties: true,
        ..DiffOptions::default()
    };
    diff_with(left, right, &DirectLookup, &options)
}

/// Parse two JSON documents and diff them.
///
/// Returns [`DiffError::JsonParse`] if either input is not valid JSON.
pub fn diff_json(left: &str, right: &str) -> Result<ChangeNode> {
    let left: Value = serde_json::from_str(left)?;
    let right: Value = serde_json::from_str(right)?;
    diff(&left, &right)
}

/// Compare two values with an explicit lookup strategy and options.
pub fn diff_with<L: PropertyLookup>(
    left: &Value,
    right: &Value,
    lookup: &L,
    options: &DiffOptions,
) -> Result<ChangeNode> {
    diff_inner(left, right, lookup, options, 0)
}

fn diff_inner<L: PropertyLookup>(
    left: &Value,
    right: &Value,
    lookup: &L,
    options: &DiffOptions,
    depth: usize,
) -> Result<ChangeNode> {
    if depth > options.max_depth {
        return Err(DiffError::DepthLimitExceeded {
            limit: options.max_depth,
        });
    }

    // Structural equality short-circuits: the original reaches the same
    // answer by recursing and collapsing all-equal subtrees.
    if left == right {
        return Ok(ChangeNode::equal(left));
    }

    let mut entries = ChangeEntries::new();
    let mut all_equal = true;

    for key in lookup.keys(left) {
        let Some(left_value) = lookup.get(left, &key) else {
            continue;
        };
        if !is_member(right, &key, lookup, options) {
            all_equal = false;
            entries.push((
                key,
                ChangeNode::Removed {
                    value: left_value.clone(),
                },
            ));
            continue;
        }
        match lookup.get(right, &key) {
            Some(right_value) if left_value == right_value => {
                entries.push((key, ChangeNode::equal(left_value)));
            }
            Some(right_value) if is_container(left_value) && is_container(right_value) => {
                let nested = diff_inner(left_value, right_value, lookup, options, depth + 1)?;
                if nested.is_equal() {
                    entries.push((key, ChangeNode::equal(left_value)));
                } else {
                    all_equal = false;
                    entries.push((key, nested));
                }
            }
            right_value => {
                all_equal = false;
                entries.push((
                    key,
                    ChangeNode::PrimitiveChange {
                        removed: left_value.clone(),
                        added: right_value.cloned().unwrap_or(Value::Null),
                    },
                ));
            }
        }
    }

    for key in lookup.keys(right) {
        if is_member(left, &key, lookup, options) {
            continue;
        }
        let Some(right_value) = lookup.get(right, &key) else {
            continue;
        };
        all_equal = false;
        entries.push((
            key,
            ChangeNode::Added {
                value: right_value.clone(),
            },
        ));
    }

    if all_equal {
        Ok(ChangeNode::equal(left))
    } else {
        Ok(ChangeNode::ObjectChange { value: entries })
    }
}

/// Membership test for one key. Own-properties mode requires the key directly
/// on the container; otherwise the lookup chain decides.
fn is_member<L: PropertyLookup>(
    container: &Value,
    key: &str,
    lookup: &L,
    options: &DiffOptions,
) -> bool {
    if options.own_properties {
        direct_get(container, key).is_some()
    } else {
        lookup.contains(container, key)
    }
}

/// Containers are eligible for recursive comparison; everything else falls
/// through to primitive replacement.
pub(crate) fn is_container(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

pub(crate) fn direct_keys(container: &Value) -> Vec<String> {
    match container {
        Value::Object(map) => map.keys().cloned().collect(),
        Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn direct_get<'v>(container: &'v Value, key: &str) -> Option<&'v Value> {
    match container {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}
