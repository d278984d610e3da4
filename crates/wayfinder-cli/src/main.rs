use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfinder_lib::{load_graph, plan_route, Error as LibError, RoutePlan, RouteRequest};

#[derive(Parser, Debug)]
#[command(version, about = "Shortest-path search over adjacency-list graph files")]
struct Cli {
    /// Path to the graph file, one `<node>: <neighbor>,<cost> ...` record per line.
    graph: PathBuf,

    /// Starting node label.
    #[arg(long = "from")]
    from: String,

    /// Goal node label.
    #[arg(long = "to")]
    to: String,

    /// Emit the route as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    handle_route(&cli)
}

fn handle_route(cli: &Cli) -> Result<ExitCode> {
    let graph = load_graph(&cli.graph)
        .with_context(|| format!("failed to load graph from {}", cli.graph.display()))?;

    let request = RouteRequest::new(cli.from.as_str(), cli.to.as_str());
    match plan_route(&graph, &request) {
        Ok(plan) => {
            print_plan(&plan, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(LibError::RouteNotFound { start, goal }) => {
            println!("no path found between {start} and {goal}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn print_plan(plan: &RoutePlan, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
    } else {
        println!("{}", plan.steps.join(" -> "));
        println!("total cost {} over {} hops", plan.total_cost, plan.hop_count());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
