use crate::constants::{VertexId, Weight};
use crate::error::GraphError;
use anyhow::Context;
use arc_reader::{Arc, ArcList};
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, hash::Hash, path::Path};

/// Bound for anything usable as a vertex key.
pub trait VertexKey: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Debug + fmt::Display> VertexKey for T {}

/// Dense vertex identifier, assigned in order of first appearance in the
/// edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(u32::MAX)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Undirected weighted edge as handed to [`Graph::from_edges`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Edge<K = VertexId> {
    pub source: K,
    pub target: K,
    pub weight: Weight,
}

impl<K> Edge<K> {
    pub fn new(source: K, target: K, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }
}

impl From<&Arc> for Edge<VertexId> {
    fn from(arc: &Arc) -> Self {
        Edge::new(arc.source, arc.target, arc.weight)
    }
}

#[derive(Debug, Clone)]
pub struct Vertex<K = VertexId> {
    pub key: K,
    /// One entry per incident edge, so duplicate edges show up twice.
    pub neighbors: Vec<NodeIndex>,
}

/// Undirected graph, immutable once built.
#[derive(Debug, Clone)]
pub struct Graph<K = VertexId> {
    vertices: Vec<Vertex<K>>,
    node_index: FxHashMap<K, NodeIndex>,
    // Holds both (u, v) and (v, u)
    weights: FxHashMap<(NodeIndex, NodeIndex), Weight>,
    num_edges: usize,
}

impl<K: VertexKey> Graph<K> {
    fn new() -> Self {
        Self {
            vertices: Vec::new(),
            node_index: FxHashMap::default(),
            weights: FxHashMap::default(),
            num_edges: 0,
        }
    }

    /// Builds the graph from a list of undirected edges.
    ///
    /// Vertices are created on first reference. For duplicate edges the last
    /// weight wins. Negative weights are accepted but make every later search
    /// result meaningless.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<K>>,
    {
        let mut g = Self::new();
        for edge in edges {
            g.add_edge(edge);
        }
        g
    }

    fn add_edge(&mut self, edge: Edge<K>) {
        let u = self.get_or_create(edge.source);
        let v = self.get_or_create(edge.target);

        self.vertices[u.index()].neighbors.push(v);
        self.vertices[v.index()].neighbors.push(u);

        if self.weights.insert((u, v), edge.weight).is_none() {
            self.num_edges += 1;
        }
        self.weights.insert((v, u), edge.weight);
    }

    /// Returns the index of `key`, adding a vertex without neighbors if the
    /// key is new. Only used while the graph is being built.
    fn get_or_create(&mut self, key: K) -> NodeIndex {
        if let Some(idx) = self.node_index.get(&key) {
            return *idx;
        }

        let idx = NodeIndex::new(self.vertices.len());
        assert!(
            NodeIndex::end() != idx,
            "Maximum number of vertices exceeded"
        );

        self.node_index.insert(key.clone(), idx);
        self.vertices.push(Vertex {
            key,
            neighbors: Vec::new(),
        });
        idx
    }

    /// Strict lookup of a vertex key.
    pub fn node_index(&self, key: &K) -> Result<NodeIndex, GraphError> {
        self.node_index
            .get(key)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(key.to_string()))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.node_index.contains_key(key)
    }

    pub fn vertex(&self, idx: NodeIndex) -> Option<&Vertex<K>> {
        self.vertices.get(idx.index())
    }

    /// Key of the vertex at `idx`.
    ///
    /// **Panics** if `idx` does not belong to this graph
    pub fn key(&self, idx: NodeIndex) -> &K {
        &self.vertices[idx.index()].key
    }

    /// Returns an iterator over all vertices in order of first appearance
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<K>> {
        self.vertices.iter()
    }

    /// **Panics** if `idx` does not belong to this graph
    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.vertices[idx.index()].neighbors.iter().copied()
    }

    /// Neighbors of the vertex with the given key.
    pub fn neighbors_of(&self, key: &K) -> Result<Vec<&K>, GraphError> {
        let idx = self.node_index(key)?;
        Ok(self.neighbors(idx).map(|v| self.key(v)).collect())
    }

    /// Weight of the edge between `u` and `v`.
    pub fn weight(&self, u: NodeIndex, v: NodeIndex) -> Result<Weight, GraphError> {
        self.weights.get(&(u, v)).copied().ok_or_else(|| {
            let name = |idx: NodeIndex| match self.vertex(idx) {
                Some(vertex) => vertex.key.to_string(),
                None => format!("{:?}", idx),
            };
            GraphError::UndefinedEdge(name(u), name(v))
        })
    }

    /// Weight of the edge between the vertices with the given keys.
    pub fn weight_between(&self, u: &K, v: &K) -> Result<Weight, GraphError> {
        self.weight(self.node_index(u)?, self.node_index(v)?)
    }

    pub fn num_nodes(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct undirected edges
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn print_info(&self) {
        println!(
            "InputGraph:\t#Nodes: {}, #Edges: {}",
            self.num_nodes(),
            self.num_edges()
        );
    }
}

impl<K: VertexKey> FromIterator<Edge<K>> for Graph<K> {
    fn from_iter<I: IntoIterator<Item = Edge<K>>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl Graph<VertexId> {
    pub fn from_arcs(path_to_arcs: &Path) -> anyhow::Result<Self> {
        info!("Reading arc file: {:?}", path_to_arcs);

        let arcs = ArcList::from_path(path_to_arcs).context("Could not parse arc file")?;
        let g: Graph = arcs.get_arcs().iter().map(Edge::from).collect();

        info!(
            "Graph has {} nodes and {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }
}

/// Macro to create an undirected edge between source and target with a weight
///
/// edge!(0, 1, 3.0)
#[macro_export]
macro_rules! edge {
    ($source:expr , $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source, $target, $weight)
    };
}
