//! Single-pair shortest paths on undirected, weighted graphs.
//!
//! # Basic usage
//! ```
//! use path_core::prelude::*;
//! use path_core::edge;
//!
//! // Build the graph from a list of undirected edges
//! let g = Graph::from_edges(vec![
//!     edge!("A", "B", 1.0),
//!     edge!("B", "C", 2.0),
//!     edge!("A", "C", 5.0),
//! ]);
//!
//! // Run the search. The tree of source "A" is kept for further queries.
//! let mut dijkstra = Dijkstra::new(&g);
//! let sp = dijkstra.shortest_path(&"A", &"C").expect("A and C are part of the graph");
//!
//! assert_eq!(sp.nodes, vec!["A", "B", "C"]);
//! assert_eq!(sp.weight, 3.0);
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
