//! Dictionary tree and dotted-key resolution
//!
//! A language pack deserializes into a tree of [`Node`]s: JSON objects
//! become namespaces, JSON strings become leaf translations. Any other JSON
//! shape fails deserialization, which in turn fails the whole pack load.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single node in the dictionary tree
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A leaf translation, possibly containing `{param}` placeholders
    Leaf(String),
    /// A nested sub-namespace
    Namespace(HashMap<String, Node>),
}

/// Typed failure modes of a dictionary lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("translation key not found: {key} (missing segment: {segment})")]
    MissingSegment { key: String, segment: String },

    #[error("translation key resolves to a namespace, not text: {key}")]
    NotALeaf { key: String },
}

/// The loaded dictionary for one language
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Dictionary {
    root: HashMap<String, Node>,
}

impl Dictionary {
    /// Create an empty dictionary (the state before any successful load)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether the dictionary holds any entries
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Resolve a dot-separated key to its leaf text.
    ///
    /// Walks the tree segment by segment. A segment that is absent, or that
    /// tries to descend past a leaf, yields [`LookupError::MissingSegment`].
    /// A walk that completes on a namespace yields [`LookupError::NotALeaf`].
    pub fn resolve(&self, key: &str) -> Result<&str, LookupError> {
        let segments: Vec<&str> = key.split('.').collect();
        let last = segments.len() - 1;

        let mut scope = &self.root;
        for (idx, segment) in segments.iter().enumerate() {
            let node = scope.get(*segment).ok_or_else(|| LookupError::MissingSegment {
                key: key.to_string(),
                segment: (*segment).to_string(),
            })?;

            match node {
                Node::Leaf(text) if idx == last => return Ok(text),
                Node::Namespace(inner) if idx < last => scope = inner,
                Node::Namespace(_) => {
                    return Err(LookupError::NotALeaf {
                        key: key.to_string(),
                    })
                }
                // Leaf hit with segments still remaining, the next segment
                // is the one that cannot be satisfied.
                Node::Leaf(_) => {
                    return Err(LookupError::MissingSegment {
                        key: key.to_string(),
                        segment: segments[idx + 1].to_string(),
                    })
                }
            }
        }

        unreachable!("split always yields at least one segment")
    }

    /// Count leaf translations across the whole tree
    pub fn key_count(&self) -> usize {
        count_leaves(&self.root)
    }

    /// Collect every leaf key as a dotted path, sorted
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_leaf_keys(&self.root, None, &mut keys);
        keys.sort();
        keys
    }
}

fn count_leaves(map: &HashMap<String, Node>) -> usize {
    map.values()
        .map(|node| match node {
            Node::Leaf(_) => 1,
            Node::Namespace(inner) => count_leaves(inner),
        })
        .sum()
}

fn collect_leaf_keys(map: &HashMap<String, Node>, prefix: Option<&str>, out: &mut Vec<String>) {
    for (name, node) in map {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.clone(),
        };
        match node {
            Node::Leaf(_) => out.push(path),
            Node::Namespace(inner) => collect_leaf_keys(inner, Some(&path), out),
        }
    }
}
