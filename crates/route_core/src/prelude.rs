//! Re-exports of the most commonly used items in `route_core`.
pub use crate::constants::{Distance, Weight};

pub use crate::search;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::find_route;
pub use crate::search::shortest_path::ShortestPath;

pub use crate::graph::node_index;
pub use crate::graph::Graph;
pub use crate::graph::NodeIndex;
pub use crate::util::test_graphs::graph_city_network;
