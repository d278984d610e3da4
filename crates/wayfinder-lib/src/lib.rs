//! Wayfinder library entry points.
//!
//! This crate exposes helpers to load a weighted directed graph from an
//! adjacency-list text file and run best-first shortest-path search over it.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod loader;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, NodeId};
pub use loader::{load_graph, parse_graph};
pub use path::{find_path, find_path_with_heuristic};
pub use routing::{plan_route, RoutePlan, RouteRequest};
