//! Directed, optionally weighted edges.
//!
//! An edge is a value carrying full endpoint identity (a copy of each
//! `Node`) and no back-reference to any owning graph, so it can be cloned
//! and shared freely.

use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Behavioral contract for directed edges.
///
/// Any edge representation exposes its endpoints and weight; the
/// self-loop and weighted predicates derive from those.
pub trait DirectedEdge: Sized {
    /// Source node of the edge.
    fn from(&self) -> &Node;

    /// Target node of the edge.
    fn to(&self) -> &Node;

    /// Edge weight; 0 means unweighted.
    fn weight(&self) -> i32;

    /// Returns a new edge with the endpoints swapped and the same weight.
    fn symmetric(&self) -> Self;

    /// True iff the edge starts and ends on the same node.
    fn is_self_loop(&self) -> bool {
        self.from() == self.to()
    }

    /// True iff the edge carries a non-zero weight.
    fn is_weighted(&self) -> bool {
        self.weight() != 0
    }
}

/// A directed edge between two nodes.
///
/// A weight of 0 is indistinguishable from "no weight". Equality,
/// ordering, and hashing all use `(from id, to id, weight)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    from: Node,
    to: Node,
    weight: i32,
}

impl Edge {
    /// Creates an unweighted edge (weight 0).
    pub fn new(from: Node, to: Node) -> Self {
        Self {
            from,
            to,
            weight: 0,
        }
    }

    /// Creates an edge with an explicit weight.
    pub fn weighted(from: Node, to: Node, weight: i32) -> Self {
        Self { from, to, weight }
    }

    /// Creates an unweighted edge between two unnamed nodes.
    pub fn between(from_id: i32, to_id: i32) -> Self {
        Self::new(Node::new(from_id), Node::new(to_id))
    }

    /// Source node of the edge.
    pub fn from(&self) -> &Node {
        &self.from
    }

    /// Target node of the edge.
    pub fn to(&self) -> &Node {
        &self.to
    }

    /// Edge weight; 0 means unweighted.
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Returns the reversed edge with the same weight. Does not touch
    /// any graph.
    pub fn symmetric(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
        }
    }

    /// True iff the edge starts and ends on the same node.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// True iff the edge carries a non-zero weight.
    pub fn is_weighted(&self) -> bool {
        self.weight != 0
    }

    // Identity tuple shared by Eq, Ord, and Hash.
    fn key(&self) -> (i32, i32, i32) {
        (self.from.id(), self.to.id(), self.weight)
    }
}

impl DirectedEdge for Edge {
    fn from(&self) -> &Node {
        &self.from
    }

    fn to(&self) -> &Node {
        &self.to
    }

    fn weight(&self) -> i32 {
        self.weight
    }

    fn symmetric(&self) -> Self {
        Edge::symmetric(self)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    // Hashes the same fields equality compares, not the display string.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (Weight: {})", self.from, self.to, self.weight)
    }
}
