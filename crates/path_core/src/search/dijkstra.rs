use std::marker::PhantomData;

use crate::constants::{VertexId, Weight, INFINITY};
use crate::error::GraphError;
use crate::graph::*;
use crate::search::frontier::{Frontier, LinearFrontier};
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;
use log::{debug, info};

/// Callback receiving every settled vertex together with its final distance.
pub type SettleHook<'a, K> = Box<dyn FnMut(&K, Weight) + 'a>;

/// Single-source Dijkstra over an undirected [`Graph`].
///
/// The search tree of the last source is kept, so any number of queries
/// sharing a source cost one run. The graph itself is only borrowed; every
/// `Dijkstra` owns its own distances and predecessors.
pub struct Dijkstra<'a, K = VertexId, F = LinearFrontier> {
    pub stats: SearchStats,
    g: &'a Graph<K>,
    dist: Vec<Weight>,
    prev: Vec<Option<NodeIndex>>,
    /// Source the stored tree was settled for, `None` while stale
    settled_source: Option<NodeIndex>,
    on_settle: Option<SettleHook<'a, K>>,
    frontier: PhantomData<F>,
}

impl<'a, K: VertexKey> Dijkstra<'a, K, LinearFrontier> {
    pub fn new(graph: &'a Graph<K>) -> Self {
        Self::with_frontier(graph)
    }
}

impl<'a, K: VertexKey, F: Frontier> Dijkstra<'a, K, F> {
    pub fn with_frontier(graph: &'a Graph<K>) -> Self {
        Dijkstra {
            stats: SearchStats::default(),
            g: graph,
            dist: vec![INFINITY; graph.num_nodes()],
            prev: vec![None; graph.num_nodes()],
            settled_source: None,
            on_settle: None,
            frontier: PhantomData,
        }
    }

    /// Registers `hook` to be called once for every vertex a run settles.
    pub fn with_observer(mut self, hook: impl FnMut(&K, Weight) + 'a) -> Self {
        self.on_settle = Some(Box::new(hook));
        self
    }

    /// Source of the currently stored search tree.
    pub fn settled_source(&self) -> Option<&K> {
        self.settled_source.map(|idx| self.g.key(idx))
    }

    /// Tentative distance of `key` in the current search tree. Infinite for
    /// vertices the last run did not reach, or if nothing ran yet.
    pub fn distance(&self, key: &K) -> Result<Weight, GraphError> {
        let idx = self.g.node_index(key)?;
        Ok(self.dist[idx.index()])
    }

    /// Settles every vertex reachable from `source`. Does nothing if the
    /// stored tree already belongs to `source`.
    pub fn run(&mut self, source: &K) -> Result<(), GraphError> {
        let source = self.g.node_index(source)?;
        self.search_from(source)
    }

    /// Returns the shortest path from `source` to `target`.
    ///
    /// If `target` is not reachable the path only holds `target` and the
    /// weight is infinite.
    pub fn shortest_path(
        &mut self,
        source: &K,
        target: &K,
    ) -> Result<ShortestPath<K>, GraphError> {
        let source = self.g.node_index(source)?;
        let target = self.g.node_index(target)?;

        self.search_from(source)?;

        let sp = super::reconstruct_path(self.g, target, &self.dist, &self.prev);
        if sp.is_reachable() {
            debug!("Path found: {:?}", sp);
        } else {
            info!(
                "No path from {} to {}",
                self.g.key(source),
                self.g.key(target)
            );
        }
        Ok(sp)
    }

    fn search_from(&mut self, source: NodeIndex) -> Result<(), GraphError> {
        if self.settled_source == Some(source) {
            self.stats.cache_hits += 1;
            debug!("Reusing search tree of {}", self.g.key(source));
            return Ok(());
        }

        let g = self.g;
        self.stats.init();
        self.settled_source = None;
        info!("BEGIN DIJKSTRA from {}", g.key(source));

        self.dist.iter_mut().for_each(|d| *d = INFINITY);
        self.prev.iter_mut().for_each(|p| *p = None);

        let mut frontier = F::with_nodes(g.num_nodes());
        self.dist[source.index()] = 0.0;
        frontier.decrease(source, 0.0);

        while let Some(route) = frontier.peek_min(&self.dist) {
            let weight = self.dist[route.index()];
            // Everything left is unreachable
            if weight == INFINITY {
                break;
            }

            frontier.remove(route);
            self.stats.nodes_settled += 1;
            debug!("Settled {} at {}", g.key(route), weight);
            if let Some(hook) = self.on_settle.as_mut() {
                hook(g.key(route), weight);
            }

            for v in g.neighbors(route) {
                if !frontier.contains(v) {
                    continue;
                }

                let new_distance = weight + g.weight(route, v)?;
                if new_distance < self.dist[v.index()] {
                    self.dist[v.index()] = new_distance;
                    self.prev[v.index()] = Some(route);
                    frontier.decrease(v, new_distance);
                }
            }
        }

        self.settled_source = Some(source);
        self.stats.finish();
        info!(
            "FINISHED DIJKSTRA: {} of {} nodes settled in {:?}",
            self.stats.nodes_settled,
            g.num_nodes(),
            self.stats.duration.unwrap_or_default()
        );
        Ok(())
    }
}
