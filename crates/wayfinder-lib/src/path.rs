use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::{Graph, NodeId};

/// Find the lowest-cost path between `start` and `goal`.
///
/// Runs best-first search with the zero heuristic, which makes the search
/// behave as uniform-cost (Dijkstra) expansion. Returns the node sequence
/// inclusive of both endpoints, or `None` when the goal is unreachable.
///
/// A `start` without an adjacency entry is treated as a node with no
/// outgoing edges, so the search terminates immediately unless
/// `start == goal`.
pub fn find_path(graph: &Graph, start: &str, goal: &str) -> Option<Vec<NodeId>> {
    find_path_with_heuristic(graph, start, goal, |_| 0)
}

/// Find the lowest-cost path guided by an admissible heuristic.
///
/// `heuristic` estimates the remaining cost from a node to `goal` and must
/// never overestimate it; the zero function recovers [`find_path`].
pub fn find_path_with_heuristic<'a, H>(
    graph: &'a Graph,
    start: &'a str,
    goal: &'a str,
    heuristic: H,
) -> Option<Vec<NodeId>>
where
    H: Fn(&str) -> u64,
{
    if start == goal {
        return Some(vec![start.to_string()]);
    }

    // Absent entries in `g_score` stand for an infinite best-known cost.
    let mut g_score: HashMap<&str, u64> = HashMap::new();
    let mut parents: HashMap<&str, Option<&str>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    g_score.insert(start, 0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0, heuristic(start)));

    while let Some(entry) = queue.pop() {
        let current_score = match g_score.get(entry.node) {
            // Stale duplicate: a cheaper path to this node was recorded
            // after the entry was pushed.
            Some(&score) if score < entry.cost => continue,
            Some(&score) => score,
            None => continue,
        };

        if entry.node == goal {
            return Some(reconstruct_path(&parents, start, goal));
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target.as_str();
            let tentative = current_score + edge.cost;
            if tentative < g_score.get(next).copied().unwrap_or(u64::MAX) {
                g_score.insert(next, tentative);
                parents.insert(next, Some(entry.node));
                queue.push(QueueEntry::new(next, tentative, heuristic(next)));
            }
        }
    }

    None
}

fn reconstruct_path(
    parents: &HashMap<&str, Option<&str>>,
    start: &str,
    goal: &str,
) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node.to_string());
        if node == start {
            break;
        }
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: u64,
    estimate: u64,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a str, cost: u64, heuristic: u64) -> Self {
        Self {
            node,
            cost,
            estimate: cost + heuristic,
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimated
        // total cost; equal estimates pop the lexicographically smallest
        // label first, keeping results reproducible across runs.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
