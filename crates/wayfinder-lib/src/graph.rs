use std::collections::HashMap;
use std::sync::Arc;

/// Opaque string label identifying a node.
pub type NodeId = String;

/// Directed edge within the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeId,
    pub cost: u64,
}

/// Weighted directed graph used by the pathfinding algorithms.
///
/// Nodes that only ever appear as edge targets carry no adjacency entry;
/// [`Graph::neighbours`] treats them as having out-degree zero.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<NodeId, Vec<Edge>>>,
}

impl Graph {
    pub(crate) fn new(adjacency: HashMap<NodeId, Vec<Edge>>) -> Self {
        Self {
            adjacency: Arc::new(adjacency),
        }
    }

    /// Return the outgoing edges for a given node label.
    pub fn neighbours(&self, node: &str) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the node has an adjacency entry of its own.
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Cost of the direct edge from `from` to `to`, if one exists.
    pub fn edge_cost(&self, from: &str, to: &str) -> Option<u64> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.cost)
    }

    /// Number of nodes with an adjacency entry.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
