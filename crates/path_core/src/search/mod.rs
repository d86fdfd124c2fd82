use crate::constants::Weight;
use crate::graph::{Graph, NodeIndex, VertexKey};

use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod frontier;
pub mod shortest_path;

/// Follows the predecessor links from `target` back to the root of the
/// search tree. A target without predecessor yields a path of its own.
pub fn reconstruct_path<K: VertexKey>(
    g: &Graph<K>,
    target: NodeIndex,
    dist: &[Weight],
    prev: &[Option<NodeIndex>],
) -> ShortestPath<K> {
    let mut path = vec![g.key(target).clone()];
    let mut previous_node = prev[target.index()];

    while let Some(node) = previous_node {
        path.push(g.key(node).clone());
        previous_node = prev[node.index()];
    }
    path.reverse();

    ShortestPath::new(path, dist[target.index()])
}

#[cfg(test)]
pub(crate) fn assert_path<K: VertexKey>(
    expected_path: Vec<K>,
    expected_weight: Weight,
    sp: Result<ShortestPath<K>, crate::error::GraphError>,
) {
    assert_eq!(Ok(ShortestPath::new(expected_path, expected_weight)), sp);
}

#[cfg(test)]
pub(crate) fn assert_no_path<K: VertexKey>(
    target: K,
    sp: Result<ShortestPath<K>, crate::error::GraphError>,
) {
    let sp = sp.expect("query failed");
    assert!(!sp.is_reachable());
    assert_eq!(sp.nodes, vec![target]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::INFINITY, edge, graph::node_index};

    #[test]
    fn walk_predecessors() {
        let g = Graph::from_edges(vec![edge!(10, 11, 1.0), edge!(11, 12, 1.0)]);
        let dist = [0.0, 1.0, 2.0];
        let prev = [None, Some(node_index(0)), Some(node_index(1))];

        let sp = reconstruct_path(&g, node_index(2), &dist, &prev);

        assert_eq!(sp, ShortestPath::new(vec![10, 11, 12], 2.0));
    }

    #[test]
    fn target_without_predecessor() {
        let g = Graph::from_edges(vec![edge!(10, 11, 1.0)]);
        let dist = [0.0, INFINITY];
        let prev = [None, None];

        let sp = reconstruct_path(&g, node_index(1), &dist, &prev);

        assert_eq!(sp.nodes, vec![11]);
        assert!(!sp.is_reachable());
    }
}
