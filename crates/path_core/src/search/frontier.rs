//! Sets of vertices not yet settled by [`Dijkstra`](super::dijkstra::Dijkstra).
//!
//! Both implementations select the member with the smallest tentative
//! distance and, on ties, the one with the lowest [`NodeIndex`]. Since node
//! indices follow the order of first appearance in the edge list, equal-cost
//! paths are resolved in favour of vertices seen earlier. Swapping one
//! frontier for the other never changes a search result.
use std::{cmp::Reverse, hash::BuildHasherDefault};

use priority_queue::PriorityQueue;
use rustc_hash::FxHasher;

use crate::{constants::Weight, graph::NodeIndex};

pub trait Frontier {
    /// Frontier containing every node `0..num_nodes`.
    fn with_nodes(num_nodes: usize) -> Self;

    fn is_empty(&self) -> bool;

    fn contains(&self, node: NodeIndex) -> bool;

    /// Member with the smallest distance in `dist`, lowest index on ties.
    fn peek_min(&self, dist: &[Weight]) -> Option<NodeIndex>;

    fn remove(&mut self, node: NodeIndex);

    /// Must be called whenever the distance of a member was lowered.
    fn decrease(&mut self, node: NodeIndex, dist: Weight);
}

/// Unordered member list scanned on every selection. O(V) per step.
pub struct LinearFrontier {
    members: Vec<NodeIndex>,
    in_frontier: Vec<bool>,
}

impl Frontier for LinearFrontier {
    fn with_nodes(num_nodes: usize) -> Self {
        LinearFrontier {
            members: (0..num_nodes).map(NodeIndex::new).collect(),
            in_frontier: vec![true; num_nodes],
        }
    }

    fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn contains(&self, node: NodeIndex) -> bool {
        self.in_frontier.get(node.index()).copied().unwrap_or(false)
    }

    fn peek_min(&self, dist: &[Weight]) -> Option<NodeIndex> {
        self.members.iter().copied().min_by(|a, b| {
            dist[a.index()]
                .total_cmp(&dist[b.index()])
                .then_with(|| a.cmp(b))
        })
    }

    fn remove(&mut self, node: NodeIndex) {
        if let Some(pos) = self.members.iter().position(|member| *member == node) {
            self.members.swap_remove(pos);
            self.in_frontier[node.index()] = false;
        }
    }

    fn decrease(&mut self, _node: NodeIndex, _dist: Weight) {
        // Distances are read from `dist` on every scan
    }
}

/// Totally ordered distance for use as a heap priority
#[derive(Debug, Clone, Copy)]
struct Distance(Weight);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

type Priority = Reverse<(Distance, NodeIndex)>;
type Queue = PriorityQueue<NodeIndex, Priority, BuildHasherDefault<FxHasher>>;

/// Indexed binary heap with decrease-key. O(log V) per step.
pub struct HeapFrontier {
    queue: Queue,
}

impl Frontier for HeapFrontier {
    fn with_nodes(num_nodes: usize) -> Self {
        let mut queue = Queue::with_capacity_and_default_hasher(num_nodes);
        for i in 0..num_nodes {
            let node = NodeIndex::new(i);
            queue.push(node, Reverse((Distance(Weight::INFINITY), node)));
        }
        HeapFrontier { queue }
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn contains(&self, node: NodeIndex) -> bool {
        self.queue.get(&node).is_some()
    }

    fn peek_min(&self, _dist: &[Weight]) -> Option<NodeIndex> {
        self.queue.peek().map(|(node, _)| *node)
    }

    fn remove(&mut self, node: NodeIndex) {
        self.queue.remove(&node);
    }

    fn decrease(&mut self, node: NodeIndex, dist: Weight) {
        self.queue.change_priority(&node, Reverse((Distance(dist), node)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node_index;

    fn drain<F: Frontier>(dist: &[Weight]) -> Vec<usize> {
        let mut frontier = F::with_nodes(dist.len());
        for (i, d) in dist.iter().enumerate() {
            frontier.decrease(node_index(i), *d);
        }

        let mut order = Vec::new();
        while let Some(node) = frontier.peek_min(dist) {
            frontier.remove(node);
            assert!(!frontier.contains(node));
            order.push(node.index());
        }
        assert!(frontier.is_empty());
        order
    }

    #[test]
    fn linear_orders_by_distance_then_index() {
        let dist = [3.0, 1.0, Weight::INFINITY, 1.0, 0.0];

        assert_eq!(drain::<LinearFrontier>(&dist), vec![4, 1, 3, 0, 2]);
    }

    #[test]
    fn heap_orders_by_distance_then_index() {
        let dist = [3.0, 1.0, Weight::INFINITY, 1.0, 0.0];

        assert_eq!(drain::<HeapFrontier>(&dist), vec![4, 1, 3, 0, 2]);
    }

    #[test]
    fn all_infinite_keeps_insertion_order() {
        let dist = [Weight::INFINITY; 4];

        assert_eq!(drain::<LinearFrontier>(&dist), vec![0, 1, 2, 3]);
        assert_eq!(drain::<HeapFrontier>(&dist), vec![0, 1, 2, 3]);
    }

    #[test]
    fn heap_follows_decrease() {
        let mut dist = vec![Weight::INFINITY; 3];
        let mut frontier = HeapFrontier::with_nodes(3);

        dist[2] = 5.0;
        frontier.decrease(node_index(2), 5.0);
        assert_eq!(frontier.peek_min(&dist), Some(node_index(2)));

        dist[1] = 4.0;
        frontier.decrease(node_index(1), 4.0);
        assert_eq!(frontier.peek_min(&dist), Some(node_index(1)));
    }

    #[test]
    fn removed_nodes_are_not_members() {
        let mut frontier = LinearFrontier::with_nodes(2);
        frontier.remove(node_index(0));
        frontier.remove(node_index(0));

        assert!(!frontier.contains(node_index(0)));
        assert!(frontier.contains(node_index(1)));
        assert!(!frontier.contains(node_index(7)));
    }
}
