//! Graf Graph - Directed-graph container with DOT interchange
//!
//! This crate holds the mutable graph container of the graf workspace.
//! `Graph` maps each node to its out-edges (insertion order preserved,
//! parallel edges permitted) and owns every structural operation, the
//! successor-array constructor, and DOT text import/export.
//!
//! The `DirectedGraph` trait pins the edge-level operation set, so other
//! representations can satisfy the same contract later.
//!
//! # Example
//!
//! ```
//! use graf_graph::{DirectedGraph, Edge, Graph};
//!
//! let mut g = Graph::from_successor_array(&[2, 0, 3]);
//! g.add_edge(Edge::between(3, 1));
//! assert_eq!(g.nb_nodes(), 3);
//! assert_eq!(g.nb_edges(), 3);
//! assert!(g.to_dot_string().starts_with("digraph G {"));
//! ```

mod dot;
mod graph;
mod traits;

pub use dot::{DotError, DEFAULT_EXTENSION};
pub use graph::Graph;
pub use traits::DirectedGraph;

// Re-exported so downstream code needs only this crate.
pub use graf_core::{DirectedEdge, Edge, Node};
