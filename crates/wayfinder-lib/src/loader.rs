use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, NodeId};

/// Load a graph from an adjacency-list text file.
///
/// The file contains one record per line:
///
/// ```text
/// <node>: <neighbor1>,<cost1> <neighbor2>,<cost2> ...
/// ```
///
/// An empty edge list after the colon declares a node with out-degree zero.
pub fn load_graph(path: &Path) -> Result<Graph> {
    if !path.exists() {
        return Err(Error::GraphNotFound {
            path: path.to_path_buf(),
        });
    }

    let source = fs::read_to_string(path)?;
    let graph = parse_graph(&source)?;
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        path = %path.display(),
        "loaded graph"
    );
    Ok(graph)
}

/// Parse adjacency-list text into a [`Graph`].
///
/// Node labels are trimmed of surrounding whitespace; edge tokens split at
/// the first `,` into a target label and a `u64` cost. Later records for the
/// same node replace earlier ones, as do later edges to the same target
/// within one record. Targets are not required to have a record of their own.
pub fn parse_graph(source: &str) -> Result<Graph> {
    let mut adjacency: HashMap<NodeId, Vec<Edge>> = HashMap::new();

    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        let (label, edge_list) = line.split_once(':').ok_or(Error::MissingSeparator {
            line: line_number,
        })?;

        let mut edges: Vec<Edge> = Vec::new();
        for token in edge_list.split_whitespace() {
            let (target, cost) = token.split_once(',').ok_or_else(|| Error::MalformedEdge {
                line: line_number,
                token: token.to_string(),
            })?;
            let cost = cost.parse::<u64>().map_err(|source| Error::InvalidCost {
                line: line_number,
                token: token.to_string(),
                source,
            })?;

            match edges.iter_mut().find(|edge| edge.target == target) {
                Some(edge) => edge.cost = cost,
                None => edges.push(Edge {
                    target: target.to_string(),
                    cost,
                }),
            }
        }

        adjacency.insert(label.trim().to_string(), edges);
    }

    Ok(Graph::new(adjacency))
}
