//! Core graph data structure.
//!
//! `Graph` keeps one adjacency entry per node id: the canonical `Node`
//! plus its out-edges in insertion order. Keying by id replaces the
//! linear id scans of a node-keyed map without changing observable
//! behavior.

use crate::traits::DirectedGraph;
use graf_core::{Edge, Node};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// One node together with its out-edges, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Adjacency {
    node: Node,
    out: Vec<Edge>,
}

/// A mutable directed multigraph.
///
/// The graph owns one canonical `Node` per id; edges hold copies of the
/// endpoint values, so nothing aliases mutable state. Parallel edges and
/// self-loops are permitted. Every operation is a synchronous mutation
/// or a pure read; sharing a graph across threads needs external
/// locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    adjacency: HashMap<i32, Adjacency>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Builds a graph from the successor-array encoding.
    ///
    /// `current` starts at node 1. A zero terminates the current node's
    /// successor list and advances to the next id; any other value `v`
    /// adds an unweighted edge `current -> v` without advancing, so one
    /// row may contribute several out-edges. `&[2, 0, 3]` produces nodes
    /// {1, 2, 3} with edges 1->2 and 2->3.
    pub fn from_successor_array(values: &[i32]) -> Self {
        let mut graph = Self::new();
        let mut current = 1;
        for &v in values {
            graph.add_node_id(current);
            if v == 0 {
                current += 1;
            } else {
                graph.add_node_id(v);
                graph.add_edge_by_id(current, v);
            }
        }
        graph
    }

    /// Returns the number of nodes in the graph.
    pub fn nb_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Inserts a node. Returns false (and changes nothing) if a node
    /// with the same id is already present.
    pub fn add_node(&mut self, node: Node) -> bool {
        match self.adjacency.entry(node.id()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Adjacency {
                    node,
                    out: Vec::new(),
                });
                true
            }
        }
    }

    /// Inserts an unnamed node with the given id.
    pub fn add_node_id(&mut self, id: i32) -> bool {
        self.add_node(Node::new(id))
    }

    /// Removes a node and every edge incident to it. Returns false if
    /// the node is absent.
    pub fn remove_node(&mut self, node: &Node) -> bool {
        self.remove_node_id(node.id())
    }

    /// Removes the node with the given id and every edge incident to it.
    ///
    /// Dropping the adjacency entry discards the node's out-edges; the
    /// remaining out-lists are then swept for edges targeting it.
    pub fn remove_node_id(&mut self, id: i32) -> bool {
        if self.adjacency.remove(&id).is_none() {
            return false;
        }
        for entry in self.adjacency.values_mut() {
            entry.out.retain(|edge| edge.to().id() != id);
        }
        true
    }

    /// Membership test by node identity (id).
    pub fn exists_node(&self, node: &Node) -> bool {
        self.exists_node_id(node.id())
    }

    /// Membership test by id.
    pub fn exists_node_id(&self, id: i32) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Returns the canonical node stored for an id.
    pub fn get_node(&self, id: i32) -> Option<&Node> {
        self.adjacency.get(&id).map(|entry| &entry.node)
    }

    /// All nodes, in no particular order. Callers needing determinism
    /// must sort.
    pub fn all_nodes(&self) -> Vec<Node> {
        self.adjacency
            .values()
            .map(|entry| entry.node.clone())
            .collect()
    }

    /// Largest node id, or `None` on an empty graph.
    pub fn largest_node_id(&self) -> Option<i32> {
        self.adjacency.keys().copied().max()
    }

    /// Smallest node id, or `None` on an empty graph.
    pub fn smallest_node_id(&self) -> Option<i32> {
        self.adjacency.keys().copied().min()
    }

    /// Appends an edge to its source's out-list, creating either
    /// endpoint that is missing. Duplicate edges are allowed.
    pub fn add_edge(&mut self, edge: Edge) {
        let from_id = edge.from().id();
        if !self.exists_node_id(from_id) {
            self.add_node(edge.from().clone());
        }
        if !self.exists_node_id(edge.to().id()) {
            self.add_node(edge.to().clone());
        }
        if let Some(entry) = self.adjacency.get_mut(&from_id) {
            entry.out.push(edge);
        }
    }
}

impl DirectedGraph for Graph {
    fn nb_edges(&self) -> usize {
        self.adjacency.values().map(|entry| entry.out.len()).sum()
    }

    fn exists_edge(&self, u: &Node, v: &Node) -> bool {
        self.exists_edge_by_id(u.id(), v.id())
    }

    fn exists_edge_by_id(&self, u_id: i32, v_id: i32) -> bool {
        self.adjacency
            .get(&u_id)
            .map_or(false, |entry| entry.out.iter().any(|e| e.to().id() == v_id))
    }

    fn add_edge_between(&mut self, from: Node, to: Node) {
        self.add_edge(Edge::new(from, to));
    }

    fn add_weighted_edge(&mut self, from: Node, to: Node, weight: i32) {
        self.add_edge(Edge::weighted(from, to, weight));
    }

    fn add_edge_by_id(&mut self, from_id: i32, to_id: i32) {
        self.add_weighted_edge_by_id(from_id, to_id, 0);
    }

    // By-id adds never create nodes: unknown endpoints make the call a
    // silent no-op, unlike add_edge.
    fn add_weighted_edge_by_id(&mut self, from_id: i32, to_id: i32, weight: i32) {
        let (Some(from), Some(to)) = (self.get_node(from_id), self.get_node(to_id)) else {
            return;
        };
        let edge = Edge::weighted(from.clone(), to.clone(), weight);
        self.add_edge(edge);
    }

    fn remove_edge(&mut self, from: &Node, to: &Node) -> bool {
        self.remove_edge_by_id(from.id(), to.id())
    }

    fn remove_edge_by_id(&mut self, from_id: i32, to_id: i32) -> bool {
        self.remove_first_matching(from_id, |e| e.to().id() == to_id)
    }

    fn remove_weighted_edge(&mut self, from: &Node, to: &Node, weight: i32) -> bool {
        self.remove_weighted_edge_by_id(from.id(), to.id(), weight)
    }

    fn remove_weighted_edge_by_id(&mut self, from_id: i32, to_id: i32, weight: i32) -> bool {
        self.remove_first_matching(from_id, |e| e.to().id() == to_id && e.weight() == weight)
    }

    fn out_edges(&self, n: &Node) -> Vec<Edge> {
        self.out_edges_by_id(n.id())
    }

    fn out_edges_by_id(&self, node_id: i32) -> Vec<Edge> {
        self.adjacency
            .get(&node_id)
            .map(|entry| entry.out.clone())
            .unwrap_or_default()
    }

    fn in_edges(&self, n: &Node) -> Vec<Edge> {
        self.in_edges_by_id(n.id())
    }

    // No reverse index is kept; this scans every out-list.
    fn in_edges_by_id(&self, node_id: i32) -> Vec<Edge> {
        self.adjacency
            .values()
            .flat_map(|entry| entry.out.iter())
            .filter(|e| e.to().id() == node_id)
            .cloned()
            .collect()
    }

    fn incident_edges(&self, n: &Node) -> Vec<Edge> {
        self.incident_edges_by_id(n.id())
    }

    fn incident_edges_by_id(&self, node_id: i32) -> Vec<Edge> {
        // Out-edges then in-edges, not deduplicated: a self-loop shows
        // up in both halves.
        let mut edges = self.out_edges_by_id(node_id);
        edges.extend(self.in_edges_by_id(node_id));
        edges
    }

    fn edges_between(&self, u: &Node, v: &Node) -> Vec<Edge> {
        self.edges_between_ids(u.id(), v.id())
    }

    fn edges_between_ids(&self, u_id: i32, v_id: i32) -> Vec<Edge> {
        self.adjacency
            .get(&u_id)
            .map(|entry| {
                entry
                    .out
                    .iter()
                    .filter(|e| e.to().id() == v_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn all_edges(&self) -> Vec<Edge> {
        self.adjacency
            .values()
            .flat_map(|entry| entry.out.iter().cloned())
            .collect()
    }

    fn in_degree(&self, n: &Node) -> usize {
        self.in_degree_by_id(n.id())
    }

    fn in_degree_by_id(&self, node_id: i32) -> usize {
        self.adjacency
            .values()
            .flat_map(|entry| entry.out.iter())
            .filter(|e| e.to().id() == node_id)
            .count()
    }

    fn out_degree(&self, n: &Node) -> usize {
        self.out_degree_by_id(n.id())
    }

    fn out_degree_by_id(&self, node_id: i32) -> usize {
        self.adjacency
            .get(&node_id)
            .map_or(0, |entry| entry.out.len())
    }

    fn degree(&self, n: &Node) -> usize {
        self.degree_by_id(n.id())
    }

    fn degree_by_id(&self, node_id: i32) -> usize {
        self.in_degree_by_id(node_id) + self.out_degree_by_id(node_id)
    }
}

impl Graph {
    /// Removes the first out-edge of `from_id` accepted by `matches`.
    fn remove_first_matching(&mut self, from_id: i32, matches: impl Fn(&Edge) -> bool) -> bool {
        let Some(entry) = self.adjacency.get_mut(&from_id) else {
            return false;
        };
        match entry.out.iter().position(|e| matches(e)) {
            Some(index) => {
                entry.out.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_pairs(edges: Vec<Edge>) -> Vec<(i32, i32)> {
        let mut pairs: Vec<(i32, i32)> = edges
            .iter()
            .map(|e| (e.from().id(), e.to().id()))
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn test_add_node_rejects_duplicate_id() {
        let mut g = Graph::new();
        assert!(g.add_node_id(1));
        assert!(g.exists_node_id(1));
        assert!(!g.add_node(Node::with_name(1, "one")));
        assert_eq!(g.nb_nodes(), 1);
        // The first insert stays canonical.
        assert_eq!(g.get_node(1).and_then(Node::name), None);
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        let mut g = Graph::new();
        g.add_edge(Edge::between(1, 3));
        g.add_edge(Edge::between(3, 2));
        g.add_edge(Edge::between(2, 1));
        assert!(g.remove_node_id(3));
        assert!(!g.exists_node_id(3));
        assert_eq!(g.nb_nodes(), 2);
        assert_eq!(sorted_pairs(g.all_edges()), vec![(2, 1)]);
        assert!(!g.remove_node_id(3));
    }

    #[test]
    fn test_remove_node_by_value_ignores_name() {
        let mut g = Graph::new();
        g.add_node(Node::with_name(5, "five"));
        assert!(g.remove_node(&Node::new(5)));
        assert_eq!(g.nb_nodes(), 0);
    }

    #[test]
    fn test_add_edge_auto_creates_endpoints() {
        let mut g = Graph::new();
        g.add_edge(Edge::between(10, 20));
        assert!(g.exists_node_id(10));
        assert!(g.exists_node_id(20));
        assert_eq!(g.nb_edges(), 1);
    }

    #[test]
    fn test_add_edge_by_id_requires_existing_endpoints() {
        let mut g = Graph::new();
        g.add_node_id(1);
        g.add_edge_by_id(1, 2);
        assert_eq!(g.nb_edges(), 0);
        assert!(!g.exists_node_id(2));

        g.add_node_id(2);
        g.add_edge_by_id(1, 2);
        assert_eq!(g.nb_edges(), 1);
        assert!(g.exists_edge_by_id(1, 2));
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut g = Graph::new();
        g.add_edge(Edge::between(1, 2));
        g.add_edge(Edge::between(1, 2));
        g.add_edge(Edge::weighted(Node::new(1), Node::new(2), 4));
        assert_eq!(g.nb_edges(), 3);
        assert_eq!(g.edges_between_ids(1, 2).len(), 3);

        // Unweighted removal takes the first match only.
        assert!(g.remove_edge_by_id(1, 2));
        assert_eq!(g.nb_edges(), 2);
    }

    #[test]
    fn test_remove_weighted_edge_matches_weight() {
        let mut g = Graph::new();
        g.add_edge(Edge::weighted(Node::new(1), Node::new(2), 4));
        assert!(!g.remove_weighted_edge_by_id(1, 2, 9));
        assert!(g.remove_weighted_edge_by_id(1, 2, 4));
        assert_eq!(g.nb_edges(), 0);
    }

    #[test]
    fn test_remove_missing_edge_returns_false() {
        let mut g = Graph::new();
        g.add_edge(Edge::between(1, 2));
        assert!(!g.remove_edge_by_id(2, 1));
        assert!(!g.remove_edge_by_id(-3, 4));
        assert!(!g.remove_edge_by_id(1, 99));
        assert_eq!(g.nb_edges(), 1);
    }

    #[test]
    fn test_out_edges_keep_insertion_order() {
        let mut g = Graph::new();
        g.add_edge(Edge::between(1, 3));
        g.add_edge(Edge::between(1, 2));
        g.add_edge(Edge::between(1, 3));
        let targets: Vec<i32> = g.out_edges_by_id(1).iter().map(|e| e.to().id()).collect();
        assert_eq!(targets, vec![3, 2, 3]);
    }

    #[test]
    fn test_edge_queries_on_unknown_node_are_empty() {
        let g = Graph::new();
        assert!(g.out_edges_by_id(9).is_empty());
        assert!(g.in_edges_by_id(9).is_empty());
        assert!(g.incident_edges_by_id(9).is_empty());
        assert!(g.edges_between_ids(9, 10).is_empty());
        assert_eq!(g.degree_by_id(9), 0);
    }

    #[test]
    fn test_degree_is_in_plus_out() {
        let mut g = Graph::new();
        g.add_edge(Edge::between(1, 2));
        g.add_edge(Edge::between(3, 2));
        g.add_edge(Edge::between(2, 1));
        for node in g.all_nodes() {
            assert_eq!(g.degree(&node), g.in_degree(&node) + g.out_degree(&node));
        }
        assert_eq!(g.in_degree_by_id(2), 2);
        assert_eq!(g.out_degree_by_id(2), 1);
    }

    #[test]
    fn test_self_loop_counts_twice_in_degree() {
        let mut g = Graph::new();
        g.add_edge(Edge::between(7, 7));
        assert_eq!(g.out_degree_by_id(7), 1);
        assert_eq!(g.in_degree_by_id(7), 1);
        assert_eq!(g.degree_by_id(7), 2);
        // Incident union is not deduplicated.
        assert_eq!(g.incident_edges_by_id(7).len(), 2);
    }

    #[test]
    fn test_extreme_ids_empty_graph() {
        let mut g = Graph::new();
        assert_eq!(g.largest_node_id(), None);
        assert_eq!(g.smallest_node_id(), None);
        g.add_node_id(-4);
        g.add_node_id(11);
        g.add_node_id(0);
        assert_eq!(g.largest_node_id(), Some(11));
        assert_eq!(g.smallest_node_id(), Some(-4));
    }

    #[test]
    fn test_successor_array_minimal() {
        // 2 adds 1->2, the 0 advances to node 2, 3 adds 2->3.
        let g = Graph::from_successor_array(&[2, 0, 3]);
        let mut ids: Vec<i32> = g.all_nodes().iter().map(Node::id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(sorted_pairs(g.all_edges()), vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_successor_array_subject_example() {
        let g = Graph::from_successor_array(&[
            2, 4, 0, 0, 6, 0, 2, 3, 5, 8, 0, 0, 4, 7, 0, 3, 0, 7, 0,
        ]);
        assert_eq!(g.nb_nodes(), 8);
        assert_eq!(g.nb_edges(), 11);
        assert_eq!(
            sorted_pairs(g.all_edges()),
            vec![
                (1, 2),
                (1, 4),
                (3, 6),
                (4, 2),
                (4, 3),
                (4, 5),
                (4, 8),
                (6, 4),
                (6, 7),
                (7, 3),
                (8, 7),
            ]
        );
    }

    #[test]
    fn test_successor_array_empty() {
        let g = Graph::from_successor_array(&[]);
        assert_eq!(g.nb_nodes(), 0);
        assert_eq!(g.nb_edges(), 0);
    }

    #[test]
    fn test_subject_example_node_removal() {
        let mut g = Graph::from_successor_array(&[
            2, 4, 0, 0, 6, 0, 2, 3, 5, 8, 0, 0, 4, 7, 0, 3, 0, 7, 0,
        ]);
        assert!(g.remove_node_id(3));
        assert_eq!(g.nb_nodes(), 7);
        // 3->6 goes with the out-list; 4->3 and 7->3 are swept out.
        assert_eq!(g.nb_edges(), 8);
        assert!(!g.exists_edge_by_id(4, 3));
        assert!(!g.exists_edge_by_id(3, 6));
    }
}
