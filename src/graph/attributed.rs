//! Attributed in-memory graph with string node identities and deduplicated edges

use crate::graph::attributes::{sanitize_weight, Attributes, WEIGHT_KEY};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical node identity. Every identifier is stringified on insertion.
pub type NodeId = String;

/// A single edge. `weight` is always finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
    pub attrs: Attributes,
}

/// Mutable attributed graph, directed or undirected.
///
/// Nodes keep their insertion order, which is the iteration order of every
/// algorithm in this crate. Edges are append-only and keyed by their endpoints
/// (unordered when undirected), so re-inserting an edge updates it in place
/// instead of creating a parallel edge.
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,

    /// Node string IDs, in insertion order
    node_ids: Vec<NodeId>,

    /// Attributes per node, parallel to `node_ids`
    node_attrs: Vec<Attributes>,

    /// Reverse lookup: ID string -> index
    id_to_index: HashMap<NodeId, usize>,

    edges: Vec<Edge>,

    /// Endpoint indices per edge, parallel to `edges`
    edge_ends: Vec<(usize, usize)>,

    /// Dedup key -> edge index
    edge_index: HashMap<(usize, usize), usize>,

    /// Edge indices where the node is the source.
    /// Undirected edges are listed under both endpoints.
    out_edges: Vec<Vec<usize>>,

    /// Edge indices where the node is the target.
    /// Undirected edges are listed under both endpoints.
    in_edges: Vec<Vec<usize>>,
}

impl Graph {
    /// Create an empty graph
    pub fn new(directed: bool) -> Self {
        Self::with_capacity(directed, 0, 0)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create an empty graph with pre-allocated capacity
    pub fn with_capacity(directed: bool, node_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            directed,
            node_ids: Vec::with_capacity(node_capacity),
            node_attrs: Vec::with_capacity(node_capacity),
            id_to_index: HashMap::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
            edge_ends: Vec::with_capacity(edge_capacity),
            edge_index: HashMap::with_capacity(edge_capacity),
            out_edges: Vec::with_capacity(node_capacity),
            in_edges: Vec::with_capacity(node_capacity),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Insert a node, or merge `attrs` into an existing node's attributes
    pub fn add_node(&mut self, id: impl ToString, attrs: Attributes) {
        let id = id.to_string();
        match self.node_index(&id) {
            Some(idx) => self.node_attrs[idx].merge(&attrs),
            None => {
                self.push_node(id, attrs);
            }
        }
    }

    /// Insert an edge, creating missing endpoints.
    ///
    /// The weight is taken from the `weight` attribute and sanitized with
    /// [`sanitize_weight`]. If an edge with the same key already exists its
    /// attributes are merged and its weight replaced; no parallel edge is made.
    pub fn add_edge(&mut self, source: impl ToString, target: impl ToString, attrs: Attributes) {
        let s = self.get_or_create_node(source.to_string());
        let t = self.get_or_create_node(target.to_string());

        let weight = sanitize_weight(attrs.get(WEIGHT_KEY));
        let key = self.edge_key(s, t);

        if let Some(&idx) = self.edge_index.get(&key) {
            let edge = &mut self.edges[idx];
            edge.attrs.merge(&attrs);
            edge.attrs.insert(WEIGHT_KEY, weight);
            edge.weight = weight;
            return;
        }

        let mut stored = attrs;
        stored.insert(WEIGHT_KEY, weight);

        let idx = self.edges.len();
        self.edges.push(Edge {
            source: self.node_ids[s].clone(),
            target: self.node_ids[t].clone(),
            weight,
            attrs: stored,
        });
        self.edge_ends.push((s, t));
        self.edge_index.insert(key, idx);

        self.out_edges[s].push(idx);
        self.in_edges[t].push(idx);

        if !self.directed {
            self.out_edges[t].push(idx);
            self.in_edges[s].push(idx);
        }
    }

    /// Insert an edge carrying only a weight
    pub fn add_weighted_edge(&mut self, source: impl ToString, target: impl ToString, weight: f64) {
        self.add_edge(source, target, Attributes::weighted(weight));
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.id_to_index.contains_key(id)
    }

    /// Node IDs in insertion order
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_ids
    }

    pub fn node_attrs(&self, id: &str) -> Option<&Attributes> {
        self.node_index(id).map(|idx| &self.node_attrs[idx])
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn number_of_nodes(&self) -> usize {
        self.node_ids.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Degree of a node: in + out edge count when directed, otherwise the
    /// number of incident edge slots (a self-loop counts twice).
    /// Unknown nodes have degree 0.
    pub fn degree(&self, id: &str) -> usize {
        self.node_index(id).map_or(0, |idx| self.degree_at(idx))
    }

    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.out_neighbors(id)
    }

    pub fn out_neighbors(&self, id: &str) -> Vec<&str> {
        self.node_index(id).map_or_else(Vec::new, |idx| {
            self.out_neighbor_indices(idx)
                .map(|n| self.node_ids[n].as_str())
                .collect()
        })
    }

    /// Predecessors when directed, the same list as [`Graph::out_neighbors`] otherwise
    pub fn in_neighbors(&self, id: &str) -> Vec<&str> {
        self.node_index(id).map_or_else(Vec::new, |idx| {
            self.in_neighbor_indices(idx)
                .map(|n| self.node_ids[n].as_str())
                .collect()
        })
    }

    /// Out-neighbors paired with the weight of the connecting edge
    pub fn weighted_out_neighbors(&self, id: &str) -> Vec<(&str, f64)> {
        self.node_index(id).map_or_else(Vec::new, |idx| {
            self.weighted_out_neighbor_indices(idx)
                .map(|(n, w)| (self.node_ids[n].as_str(), w))
                .collect()
        })
    }

    /// Deep copy with independent storage
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Number of edges whose source and target coincide
    pub fn self_loop_count(&self) -> usize {
        self.edge_ends.iter().filter(|(s, t)| s == t).count()
    }

    /// Order-independent hash of the edge set (djb2 over the sorted
    /// `source|target` pairs joined by `;`). Graphs built from the same edges
    /// hash identically regardless of insertion order.
    pub fn structure_hash(&self) -> u32 {
        let joined = self
            .edges
            .iter()
            .map(|e| format!("{}|{}", e.source, e.target))
            .sorted()
            .join(";");

        joined
            .encode_utf16()
            .fold(5381u32, |hash, unit| hash.wrapping_mul(33).wrapping_add(u32::from(unit)))
    }

    /// Position of a node in insertion order
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.id_to_index.get(id).copied()
    }

    /// Node ID at a position. Panics if `idx` is out of range.
    pub(crate) fn node_id(&self, idx: usize) -> &str {
        &self.node_ids[idx]
    }

    /// Endpoint indices per edge, parallel to [`Graph::edges`]
    pub fn edge_endpoints(&self) -> &[(usize, usize)] {
        &self.edge_ends
    }

    pub fn degree_at(&self, idx: usize) -> usize {
        if self.directed {
            self.out_edges[idx].len() + self.in_edges[idx].len()
        } else {
            self.out_edges[idx].len()
        }
    }

    pub fn out_neighbor_indices(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.out_edges[idx].iter().map(move |&e| {
            let (s, t) = self.edge_ends[e];
            if s == idx {
                t
            } else {
                s
            }
        })
    }

    pub fn in_neighbor_indices(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.in_edges[idx].iter().map(move |&e| {
            let (s, t) = self.edge_ends[e];
            if t == idx {
                s
            } else {
                t
            }
        })
    }

    pub fn weighted_out_neighbor_indices(&self, idx: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.out_edges[idx].iter().map(move |&e| {
            let (s, t) = self.edge_ends[e];
            let other = if s == idx { t } else { s };
            (other, self.edges[e].weight)
        })
    }

    fn edge_key(&self, s: usize, t: usize) -> (usize, usize) {
        if self.directed || s <= t {
            (s, t)
        } else {
            (t, s)
        }
    }

    fn get_or_create_node(&mut self, id: NodeId) -> usize {
        if let Some(&idx) = self.id_to_index.get(&id) {
            return idx;
        }
        self.push_node(id, Attributes::new())
    }

    fn push_node(&mut self, id: NodeId, attrs: Attributes) -> usize {
        let idx = self.node_ids.len();
        self.id_to_index.insert(id.clone(), idx);
        self.node_ids.push(id);
        self.node_attrs.push(attrs);
        self.out_edges.push(Vec::new());
        self.in_edges.push(Vec::new());
        idx
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::undirected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reinserted_edge_overwrites_weight() {
        let mut g = Graph::undirected();
        g.add_weighted_edge("A", "B", 1.0);
        g.add_weighted_edge("B", "A", 5.0);

        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.edges()[0].weight, 5.0);
        assert_eq!(g.edges()[0].source, "A");
        assert_eq!(g.edges()[0].attrs.get("weight"), Some(&json!(5.0)));
    }

    #[test]
    fn directed_edges_are_keyed_by_direction() {
        let mut g = Graph::directed();
        g.add_weighted_edge("A", "B", 1.0);
        g.add_weighted_edge("B", "A", 2.0);

        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(g.out_neighbors("A"), vec!["B"]);
        assert_eq!(g.in_neighbors("A"), vec!["B"]);
        assert_eq!(g.degree("A"), 2);
    }

    #[test]
    fn edge_attrs_merge_on_reinsert() {
        let mut g = Graph::undirected();
        g.add_edge("x", "y", Attributes::new().with("kind", "road").with("weight", 2));
        g.add_edge("x", "y", Attributes::new().with("lanes", 4));

        let edge = &g.edges()[0];
        assert_eq!(edge.attrs.get("kind"), Some(&json!("road")));
        assert_eq!(edge.attrs.get("lanes"), Some(&json!(4)));
        // Missing weight on reinsert sanitizes to 1
        assert_eq!(edge.weight, 1.0);
    }

    #[test]
    fn edges_auto_create_nodes_in_order() {
        let mut g = Graph::undirected();
        g.add_node(7, Attributes::new().with("label", "seven"));
        g.add_weighted_edge(3, 7, f64::NAN);

        assert_eq!(g.node_ids(), &["7".to_string(), "3".to_string()]);
        assert!(g.node_attrs("3").map_or(false, Attributes::is_empty));
        assert_eq!(g.edges()[0].weight, 1.0);
    }

    #[test]
    fn add_node_merges_attributes() {
        let mut g = Graph::undirected();
        g.add_node("a", Attributes::new().with("x", 1));
        g.add_node("a", Attributes::new().with("y", 2));

        let attrs = g.node_attrs("a").unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(g.number_of_nodes(), 1);
    }

    #[test]
    fn undirected_self_loop_counts_twice() {
        let mut g = Graph::undirected();
        g.add_weighted_edge("a", "a", 1.0);

        assert_eq!(g.degree("a"), 2);
        assert_eq!(g.self_loop_count(), 1);
        assert_eq!(g.neighbors("a"), vec!["a", "a"]);
    }

    #[test]
    fn weighted_neighbors_report_edge_weight() {
        let mut g = Graph::undirected();
        g.add_weighted_edge("a", "b", 2.5);
        g.add_weighted_edge("c", "a", 0.5);

        assert_eq!(g.weighted_out_neighbors("a"), vec![("b", 2.5), ("c", 0.5)]);
        assert_eq!(g.in_neighbors("a"), g.out_neighbors("a"));
    }

    #[test]
    fn unknown_nodes_are_empty() {
        let g = Graph::directed();
        assert_eq!(g.degree("nope"), 0);
        assert!(g.neighbors("nope").is_empty());
        assert!(!g.has_node("nope"));
    }

    #[test]
    fn copy_is_independent() {
        let mut g = Graph::undirected();
        g.add_weighted_edge("a", "b", 1.0);

        let mut copy = g.copy();
        copy.add_weighted_edge("b", "c", 1.0);

        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(copy.number_of_edges(), 2);
        assert_eq!(copy.neighbors("b"), vec!["a", "c"]);
    }

    #[test]
    fn structure_hash_ignores_insertion_order() {
        let mut g1 = Graph::undirected();
        g1.add_weighted_edge("a", "b", 1.0);
        g1.add_weighted_edge("b", "c", 1.0);

        let mut g2 = Graph::undirected();
        g2.add_weighted_edge("b", "c", 3.0);
        g2.add_weighted_edge("a", "b", 1.0);

        assert_eq!(g1.structure_hash(), g2.structure_hash());
    }
}
