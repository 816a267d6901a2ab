//! The Change Tree: a tagged classification of one compared value pair.
//!
//! A diff produces exactly one [`ChangeNode`]; object-level changes carry one
//! nested node per compared key, in entry order. Nodes are immutable once
//! built and are consumed by the renderers in [`crate::render`].

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

/// Ordered entries of an object-level change, keyed by property name.
///
/// Kept as a `Vec` of pairs to preserve entry order (left-input key order,
/// then right-only keys) without depending on `IndexMap`.
pub type ChangeEntries = Vec<(String, ChangeNode)>;

/// Classification of one compared value pair.
///
/// Serializes to the tree's natural JSON shape, e.g.
/// `{"changed":"equal","value":1}` or
/// `{"changed":"primitive change","removed":1,"added":2}`, with
/// object-change entries emitted as a JSON map in entry order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "changed")]
pub enum ChangeNode {
    /// Both sides hold the same value.
    #[serde(rename = "equal")]
    Equal { value: Value },

    /// The key exists only on the right-hand input.
    #[serde(rename = "added")]
    Added { value: Value },

    /// The key exists only on the left-hand input.
    #[serde(rename = "removed")]
    Removed { value: Value },

    /// The key exists on both sides, the values differ, and at least one
    /// side is not a container.
    #[serde(rename = "primitive change")]
    PrimitiveChange { removed: Value, added: Value },

    /// Both sides are containers whose contents differ; `value` holds one
    /// nested node per compared key.
    #[serde(rename = "object change")]
    ObjectChange {
        #[serde(serialize_with = "entries_as_map")]
        value: ChangeEntries,
    },
}

impl ChangeNode {
    /// Returns `true` for `Equal` nodes.
    pub fn is_equal(&self) -> bool {
        matches!(self, ChangeNode::Equal { .. })
    }

    pub(crate) fn equal(value: &Value) -> Self {
        ChangeNode::Equal {
            value: value.clone(),
        }
    }
}

fn entries_as_map<S: Serializer>(entries: &ChangeEntries, ser: S) -> Result<S::Ok, S::Error> {
    let mut map = ser.serialize_map(Some(entries.len()))?;
    for (key, node) in entries {
        map.serialize_entry(key, node)?;
    }
    map.end()
}
