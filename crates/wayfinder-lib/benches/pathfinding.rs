use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::fmt::Write as _;
use std::hint::black_box;
use wayfinder_lib::{find_path, parse_graph, plan_route, Graph, RouteRequest};

const NODES: usize = 500;

/// Ladder-shaped graph: each node links one and two steps ahead, so the
/// search has a cheaper two-hop alternative to weigh at every expansion.
fn ladder_graph_source() -> String {
    let mut source = String::new();
    for i in 0..NODES {
        write!(source, "n{i:04}:").expect("write to string");
        if i + 1 < NODES {
            write!(source, " n{:04},2", i + 1).expect("write to string");
        }
        if i + 2 < NODES {
            write!(source, " n{:04},3", i + 2).expect("write to string");
        }
        source.push('\n');
    }
    source
}

static GRAPH: Lazy<Graph> =
    Lazy::new(|| parse_graph(&ladder_graph_source()).expect("ladder graph parses"));
static GOAL: Lazy<String> = Lazy::new(|| format!("n{:04}", NODES - 1));
static REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::new("n0000", GOAL.clone()));

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*GRAPH;

    c.bench_function("find_path_ladder", |b| {
        let goal = GOAL.as_str();
        b.iter(|| black_box(find_path(graph, "n0000", goal)));
    });

    c.bench_function("plan_route_ladder", |b| {
        let request = &*REQUEST;
        b.iter(|| {
            let plan = plan_route(graph, request).expect("route exists");
            black_box((plan.total_cost, plan.hop_count()))
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
