use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::path::find_path;

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
}

impl RouteRequest {
    /// Convenience constructor.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: NodeId,
    pub goal: NodeId,
    pub steps: Vec<NodeId>,
    pub total_cost: u64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute the lowest-cost route for a request.
///
/// Thin orchestrator over [`find_path`]: callers that need to distinguish
/// absence without an error path should use [`find_path`] directly.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let Some(steps) = find_path(graph, &request.start, &request.goal) else {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    };

    let total_cost = steps
        .windows(2)
        .map(|pair| {
            graph
                .edge_cost(&pair[0], &pair[1])
                .expect("search only returns consecutive graph edges")
        })
        .sum();

    Ok(RoutePlan {
        start: request.start.clone(),
        goal: request.goal.clone(),
        steps,
        total_cost,
    })
}
