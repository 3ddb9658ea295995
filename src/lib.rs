#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod routing;
mod universe;

pub use error::{GraphError, RouteError};
pub use graph::DirectedGraph;
pub use graph::cycles::{close_cycle, simple_cycles};
pub use graph::dijkstra::{Path, ShortestPathConfig, shortest_path};
pub use graph::network::{Edge, RouteGraph};
pub use graph::path::{all_simple_paths, is_route_connected};
pub use graph::view::to_digraph_map;
pub use model::{StarSystem, TravelTime};
pub use routing::predicates;
pub use routing::{all_routes, route_distance};
pub use universe::create_universe;
