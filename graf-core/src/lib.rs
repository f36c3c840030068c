//! Graf Core - Graph value types
//!
//! This crate holds the plain value types the graf workspace is built
//! on: `Node` (identity-bearing vertex) and `Edge` (directed, optionally
//! weighted connection), plus the `DirectedEdge` capability trait.
//!
//! No container logic or I/O lives here; see `graf-graph` for the
//! mutable graph and DOT interchange.
//!
//! # Example
//!
//! ```
//! use graf_core::{Edge, Node};
//!
//! let edge = Edge::new(Node::new(1), Node::with_name(2, "sink"));
//! assert!(!edge.is_weighted());
//! assert_eq!(edge.symmetric().from().id(), 2);
//! ```

mod edge;
mod node;

pub use edge::{DirectedEdge, Edge};
pub use node::Node;
