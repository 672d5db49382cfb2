//! The weighted, undirected route graph.

use std::collections::HashMap;

use crate::domain::{Airport, IataCode};

/// One edge of the route network.
///
/// The edge weight used by shortest-path search is the great-circle
/// distance, so it is stored once.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEdge {
    /// Great-circle distance between the endpoints in kilometres.
    pub distance_km: f64,

    /// Display name of the operating airline.
    pub airline: String,
}

/// Undirected route graph keyed by airport code.
///
/// At most one edge exists per unordered airport pair; inserting an edge
/// for a pair that already has one overwrites it (last writer wins).
/// Nodes exist only for airports referenced by at least one edge, so a
/// freshly built graph never contains isolated airports.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    nodes: HashMap<IataCode, Airport>,
    adjacency: HashMap<IataCode, HashMap<IataCode, RouteEdge>>,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an undirected edge, attaching node attributes on first
    /// reference. An existing edge for the pair is overwritten.
    pub fn insert_edge(&mut self, a: &Airport, b: &Airport, edge: RouteEdge) {
        self.nodes.entry(a.code).or_insert_with(|| a.clone());
        self.nodes.entry(b.code).or_insert_with(|| b.clone());

        self.adjacency
            .entry(a.code)
            .or_default()
            .insert(b.code, edge.clone());
        self.adjacency
            .entry(b.code)
            .or_default()
            .insert(a.code, edge);
    }

    /// Whether the graph contains a node for the given code.
    pub fn contains(&self, code: &IataCode) -> bool {
        self.nodes.contains_key(code)
    }

    /// The airport attributes attached to a node.
    pub fn node(&self, code: &IataCode) -> Option<&Airport> {
        self.nodes.get(code)
    }

    /// The edge between two airports, if one exists. Symmetric.
    pub fn edge(&self, a: &IataCode, b: &IataCode) -> Option<&RouteEdge> {
        self.adjacency.get(a)?.get(b)
    }

    /// Iterate over the neighbors of a node and the connecting edges.
    pub fn neighbors(&self, code: &IataCode) -> impl Iterator<Item = (&IataCode, &RouteEdge)> {
        self.adjacency.get(code).into_iter().flat_map(|m| m.iter())
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &Airport> {
        self.nodes.values()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        let directed: usize = self.adjacency.values().map(|m| m.len()).sum();
        directed / 2
    }
}
