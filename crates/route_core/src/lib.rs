//! Shortest paths on weighted, undirected graphs.
//!
//! # Basic usage
//! ```
//! use route_core::prelude::*;
//!
//! // Graph with 3 nodes
//! let mut g = Graph::new(3);
//! g.connect(0, 1, 4);
//! g.connect(1, 2, 3);
//!
//! let sp = find_route(&g, node_index(0), node_index(2)).expect("No route found");
//! assert_eq!(sp.weight, 7);
//! assert_eq!(sp.nodes, vec![node_index(0), node_index(1), node_index(2)]);
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
