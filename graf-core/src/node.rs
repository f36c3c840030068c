//! Node identity type.
//!
//! A node is a plain value: an integer id plus an optional display name.
//! The id alone carries identity, so equality, ordering, and hashing all
//! ignore the name.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A vertex in a directed graph, identified by an integer id.
///
/// Two nodes with the same id are equal even if their names differ.
/// Negative and zero ids are legal; no range is enforced. Nodes are
/// immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    id: i32,
    name: Option<String>,
}

impl Node {
    /// Creates an unnamed node.
    pub fn new(id: i32) -> Self {
        Self { id, name: None }
    }

    /// Creates a named node. The name is informational only.
    pub fn with_name(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// Returns the node id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Returns the node name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    // Must stay consistent with PartialEq: id only.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_ignores_name() {
        let plain = Node::new(7);
        let named = Node::with_name(7, "seven");
        assert_eq!(plain, named);
        assert_ne!(plain, Node::new(8));
    }

    #[test]
    fn test_hash_follows_equality() {
        let mut seen = HashSet::new();
        seen.insert(Node::with_name(3, "three"));
        assert!(seen.contains(&Node::new(3)));
        assert!(!seen.contains(&Node::new(4)));
    }

    #[test]
    fn test_ordering_by_id() {
        let mut nodes = vec![Node::new(5), Node::new(-2), Node::new(0)];
        nodes.sort();
        let ids: Vec<i32> = nodes.iter().map(Node::id).collect();
        assert_eq!(ids, vec![-2, 0, 5]);
    }

    #[test]
    fn test_negative_and_zero_ids_are_legal() {
        assert_eq!(Node::new(-13).id(), -13);
        assert_eq!(Node::new(0).id(), 0);
    }

    #[test]
    fn test_display_renders_id() {
        assert_eq!(Node::with_name(42, "answer").to_string(), "42");
    }
}
