//! Re-exports of the most commonly used items in `path_core`.
pub use crate::error::GraphError;
pub use crate::graph::{node_index, Edge, Graph, NodeIndex};
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::frontier::{Frontier, HeapFrontier, LinearFrontier};
pub use crate::search::shortest_path::ShortestPath;
pub use crate::util::cli::{self, Cfg, FrontierKind};
