use std::fmt;

use serde::Serialize;

use crate::constants::{VertexId, Weight};

/// Result of a single-pair query.
///
/// An unreachable target yields `nodes == [target]` and an infinite
/// `weight`; check [`ShortestPath::is_reachable`] before using the route.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ShortestPath<K = VertexId> {
    pub nodes: Vec<K>,
    pub weight: Weight,
}

impl<K> ShortestPath<K> {
    pub fn new(nodes: Vec<K>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }

    pub fn is_reachable(&self) -> bool {
        self.weight.is_finite()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Formats the route as `a -> b -> c`
impl<K: fmt::Display> fmt::Display for ShortestPath<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
