use std::path::PathBuf;

use wayfinder_lib::{load_graph, plan_route, Error, RouteRequest};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/diamond.txt")
}

#[test]
fn route_plan_succeeds() {
    let graph = load_graph(&fixture_path()).expect("fixture loads");
    let request = RouteRequest::new("A", "D");
    let plan = plan_route(&graph, &request).expect("route exists");

    assert_eq!(plan.start, "A");
    assert_eq!(plan.goal, "D");
    assert_eq!(plan.steps, vec!["A", "B", "C", "D"]);
    assert_eq!(plan.total_cost, 4);
    assert_eq!(plan.hop_count(), 3);
}

#[test]
fn unreachable_goal_is_route_not_found() {
    let graph = load_graph(&fixture_path()).expect("fixture loads");
    let request = RouteRequest::new("D", "A");

    let error = plan_route(&graph, &request).expect_err("D has no outgoing edges");
    assert!(matches!(error, Error::RouteNotFound { .. }));
    assert!(format!("{error}").contains("no route found between D and A"));
}

#[test]
fn start_equals_goal_plans_a_zero_cost_route() {
    let graph = load_graph(&fixture_path()).expect("fixture loads");
    let plan = plan_route(&graph, &RouteRequest::new("B", "B")).expect("trivial route");

    assert_eq!(plan.steps, vec!["B"]);
    assert_eq!(plan.total_cost, 0);
    assert_eq!(plan.hop_count(), 0);
}

#[test]
fn route_plan_serialises_to_json() {
    let graph = load_graph(&fixture_path()).expect("fixture loads");
    let plan = plan_route(&graph, &RouteRequest::new("A", "D")).expect("route exists");

    let json = serde_json::to_value(&plan).expect("plan serialises");
    assert_eq!(json["start"], "A");
    assert_eq!(json["goal"], "D");
    assert_eq!(json["total_cost"], 4);
    assert_eq!(json["steps"][1], "B");
}
