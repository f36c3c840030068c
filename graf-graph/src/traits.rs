//! Behavioral contract for directed-graph containers.

use graf_core::{Edge, Node};

/// The edge-level operation set every directed-graph representation
/// must expose.
///
/// `Graph` satisfies this with an adjacency list; the contract leaves
/// room for other representations (adjacency matrix, CSR) behind the
/// same API. Node-or-id method pairs stand in for overloading: the
/// by-value edge adds create missing endpoints, while the by-id adds
/// require both endpoints to exist and otherwise do nothing.
pub trait DirectedGraph {
    /// Number of edges in the graph.
    fn nb_edges(&self) -> usize;

    /// True iff at least one edge runs from `u` to `v`.
    fn exists_edge(&self, u: &Node, v: &Node) -> bool;

    /// True iff at least one edge runs from id `u_id` to id `v_id`.
    fn exists_edge_by_id(&self, u_id: i32, v_id: i32) -> bool;

    /// Adds an unweighted edge, creating missing endpoints.
    fn add_edge_between(&mut self, from: Node, to: Node);

    /// Adds a weighted edge, creating missing endpoints.
    fn add_weighted_edge(&mut self, from: Node, to: Node, weight: i32);

    /// Adds an unweighted edge; a no-op unless both ids exist.
    fn add_edge_by_id(&mut self, from_id: i32, to_id: i32);

    /// Adds a weighted edge; a no-op unless both ids exist.
    fn add_weighted_edge_by_id(&mut self, from_id: i32, to_id: i32, weight: i32);

    /// Removes the first out-edge of `from` targeting `to`, any weight.
    /// Returns whether a removal occurred.
    fn remove_edge(&mut self, from: &Node, to: &Node) -> bool;

    /// Id variant of [`DirectedGraph::remove_edge`]; false if either id
    /// is unknown.
    fn remove_edge_by_id(&mut self, from_id: i32, to_id: i32) -> bool;

    /// Removes the first out-edge of `from` matching target and weight.
    fn remove_weighted_edge(&mut self, from: &Node, to: &Node, weight: i32) -> bool;

    /// Id variant of [`DirectedGraph::remove_weighted_edge`].
    fn remove_weighted_edge_by_id(&mut self, from_id: i32, to_id: i32, weight: i32) -> bool;

    /// Out-edges of a node in insertion order; empty for unknown nodes.
    fn out_edges(&self, n: &Node) -> Vec<Edge>;

    /// Id variant of [`DirectedGraph::out_edges`].
    fn out_edges_by_id(&self, node_id: i32) -> Vec<Edge>;

    /// Every edge in the graph targeting `n`.
    fn in_edges(&self, n: &Node) -> Vec<Edge>;

    /// Id variant of [`DirectedGraph::in_edges`].
    fn in_edges_by_id(&self, node_id: i32) -> Vec<Edge>;

    /// Out-edges followed by in-edges, not deduplicated.
    fn incident_edges(&self, n: &Node) -> Vec<Edge>;

    /// Id variant of [`DirectedGraph::incident_edges`].
    fn incident_edges_by_id(&self, node_id: i32) -> Vec<Edge>;

    /// All parallel edges running from `u` to `v`.
    fn edges_between(&self, u: &Node, v: &Node) -> Vec<Edge>;

    /// Id variant of [`DirectedGraph::edges_between`].
    fn edges_between_ids(&self, u_id: i32, v_id: i32) -> Vec<Edge>;

    /// Every edge, concatenated per node in container iteration order.
    fn all_edges(&self) -> Vec<Edge>;

    /// Number of edges targeting `n`.
    fn in_degree(&self, n: &Node) -> usize;

    /// Id variant of [`DirectedGraph::in_degree`]; 0 for unknown ids.
    fn in_degree_by_id(&self, node_id: i32) -> usize;

    /// Number of edges leaving `n`.
    fn out_degree(&self, n: &Node) -> usize;

    /// Id variant of [`DirectedGraph::out_degree`]; 0 for unknown ids.
    fn out_degree_by_id(&self, node_id: i32) -> usize;

    /// in-degree + out-degree; a self-loop contributes 2.
    fn degree(&self, n: &Node) -> usize;

    /// Id variant of [`DirectedGraph::degree`].
    fn degree_by_id(&self, node_id: i32) -> usize;
}
