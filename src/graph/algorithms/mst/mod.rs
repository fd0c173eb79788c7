//! Minimum spanning trees (Prim and Kruskal).
//!
//! # Theoretical Foundation
//!
//! - **Cut property**: for any cut `(S, V - S)` a minimum-weight crossing edge
//!   belongs to some MST. Prim grows `S` one cheapest crossing edge at a time.
//! - **Cycle property**: a maximum-weight edge of any cycle is in no MST.
//!   Kruskal scans edges by weight and rejects each one that closes a cycle.
//!
//! Both therefore report the same total weight on a connected graph, even when
//! equal weights let them pick different edge sets.
//!
//! # Tie-breaking
//!
//! Which of several equal-weight edges is chosen is implementation-defined
//! but deterministic for a given graph: Prim pops equal weights in push order;
//! Kruskal sorts stably, starting from vertex insertion order and then each
//! vertex's adjacency order. Graphs built with a different insertion order may
//! yield a different (equally minimal) edge set.
//!
//! # Disconnected input
//!
//! The result is then a forest, never passed off as a tree:
//! [`MinimumSpanningTree::is_spanning_tree`] is `false` and a `warn` event is
//! logged. Kruskal covers every component; Prim covers the start vertex's
//! component only.

mod kruskal;
mod prim;

use crate::collections::DisjointSet;
use crate::error::{GraphError, Result, VertexRole};
use crate::graph::weighted::{same_weight, Weight, WeightedGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Which algorithm produced a [`MinimumSpanningTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MstAlgorithm {
    /// Prim's algorithm, grown from a start vertex.
    Prim,
    /// Kruskal's algorithm over the globally sorted edge list.
    Kruskal,
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MstAlgorithm::Prim => "Prim",
            MstAlgorithm::Kruskal => "Kruskal",
        })
    }
}

/// An undirected edge selected into a spanning tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstEdge<V, W = f64> {
    /// Endpoint already in the tree when the edge was selected (Prim), or the
    /// lower-index endpoint (Kruskal).
    pub source: V,
    /// The other endpoint.
    pub target: V,
    /// The edge weight.
    pub weight: W,
}

impl<V: fmt::Display, W: fmt::Display> fmt::Display for MstEdge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.source, self.target, self.weight)
    }
}

/// A spanning tree, or a spanning forest for disconnected input.
///
/// Decoding checks that the edges form a forest over the listed vertices and
/// that `total_weight` is their sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "TreeRepr<V, W>",
    bound(deserialize = "V: Deserialize<'de> + Eq + Hash + Clone, W: Deserialize<'de> + Weight")
)]
pub struct MinimumSpanningTree<V, W = f64> {
    algorithm: MstAlgorithm,
    vertices: Vec<V>,
    edges: Vec<MstEdge<V, W>>,
    total_weight: W,
}

#[derive(Deserialize)]
struct TreeRepr<V, W> {
    algorithm: MstAlgorithm,
    vertices: Vec<V>,
    edges: Vec<MstEdge<V, W>>,
    total_weight: W,
}

impl<V, W> TryFrom<TreeRepr<V, W>> for MinimumSpanningTree<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    type Error = GraphError;

    fn try_from(repr: TreeRepr<V, W>) -> Result<Self> {
        let malformed = |reason| GraphError::Malformed { reason };

        let mut index = HashMap::with_capacity(repr.vertices.len());
        for (i, vertex) in repr.vertices.iter().enumerate() {
            if index.insert(vertex, i).is_some() {
                return Err(malformed("duplicate vertex in spanning tree"));
            }
        }

        let mut sets = DisjointSet::with_singletons(repr.vertices.len());
        let mut total = W::zero();
        for edge in &repr.edges {
            let (Some(&u), Some(&v)) = (index.get(&edge.source), index.get(&edge.target)) else {
                return Err(malformed("spanning tree edge names an unknown vertex"));
            };
            if !sets.union(u, v) {
                return Err(malformed("spanning tree edges contain a cycle"));
            }
            total = total + edge.weight;
        }
        if !same_weight(total, repr.total_weight) {
            return Err(malformed("spanning tree total weight does not match its edges"));
        }

        Ok(Self {
            algorithm: repr.algorithm,
            vertices: repr.vertices,
            edges: repr.edges,
            total_weight: repr.total_weight,
        })
    }
}

impl<V, W> MinimumSpanningTree<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Translates dense-index picks back into vertex keys.
    fn assemble(
        graph: &WeightedGraph<V, W>,
        algorithm: MstAlgorithm,
        picked: Vec<(usize, usize, W)>,
    ) -> Self {
        let vertices = graph.vertex_slice();
        let mut total_weight = W::zero();
        let edges: Vec<_> = picked
            .into_iter()
            .map(|(u, v, weight)| {
                total_weight = total_weight + weight;
                MstEdge {
                    source: vertices[u].clone(),
                    target: vertices[v].clone(),
                    weight,
                }
            })
            .collect();

        let tree = Self {
            algorithm,
            vertices: vertices.to_vec(),
            edges,
            total_weight,
        };

        if tree.is_spanning_tree() {
            debug_event!(edges = tree.edge_count(); "spanning tree complete");
        } else {
            warn_event!(
                vertices = tree.vertex_count(),
                edges = tree.edge_count(),
                components = tree.component_count();
                "graph is not connected; result is a spanning forest"
            );
        }
        tree
    }

    /// Materializes the selected edges, each once, as a fresh undirected graph
    /// over the full vertex set.
    pub fn to_graph(&self) -> WeightedGraph<V, W> {
        let mut graph = WeightedGraph::with_capacity(false, self.vertices.len());
        for vertex in &self.vertices {
            graph.add_vertex(vertex.clone());
        }
        for edge in &self.edges {
            graph.add_edge(edge.source.clone(), edge.target.clone(), edge.weight);
        }
        graph
    }
}

impl<V, W: Copy> MinimumSpanningTree<V, W> {
    /// The algorithm that produced this result.
    pub fn algorithm(&self) -> MstAlgorithm {
        self.algorithm
    }

    /// Selected edges in selection order.
    pub fn edges(&self) -> &[MstEdge<V, W>] {
        &self.edges
    }

    /// Vertex set of the source graph, in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Sum of the selected edge weights.
    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    /// Number of vertices of the source graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of selected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `true` iff the edges connect every vertex (`|V| - 1` edges).
    pub fn is_spanning_tree(&self) -> bool {
        self.edges.len() + 1 == self.vertices.len() || self.vertices.is_empty()
    }

    /// Number of trees in the result, counting untouched vertices as trees
    /// of their own.
    pub fn component_count(&self) -> usize {
        self.vertices.len().saturating_sub(self.edges.len())
    }
}

impl<V, W> fmt::Display for MinimumSpanningTree<V, W>
where
    V: Eq + Hash + Clone + fmt::Display,
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Minimum Spanning Tree ({}):", self.algorithm)?;
        write!(f, "{}", self.to_graph())?;
        writeln!(f, "Total MST Cost: {}", self.total_weight)?;
        if !self.is_spanning_tree() {
            writeln!(
                f,
                "Warning: graph is not connected ({} components)",
                self.component_count()
            )?;
        }
        Ok(())
    }
}

/// Spanning-tree computations over a borrowed undirected graph.
///
/// The source graph is never modified. The most recent result is kept and
/// replaced by every new computation.
#[derive(Debug, Clone)]
pub struct MinimumSpanningTreeGraph<'g, V, W = f64> {
    graph: &'g WeightedGraph<V, W>,
    mst: Option<MinimumSpanningTree<V, W>>,
}

impl<'g, V, W> MinimumSpanningTreeGraph<'g, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Wraps `graph` for MST computation.
    ///
    /// # Errors
    /// [`GraphError::DirectedGraph`] if `graph` is directed.
    pub fn new(graph: &'g WeightedGraph<V, W>) -> Result<Self> {
        if graph.is_directed() {
            return Err(GraphError::DirectedGraph);
        }
        Ok(Self { graph, mst: None })
    }

    /// The wrapped graph.
    pub fn graph(&self) -> &'g WeightedGraph<V, W> {
        self.graph
    }

    /// Runs Prim's algorithm from `start` and returns the total cost.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `start` is not in the graph.
    pub fn compute_prim_mst(&mut self, start: &V) -> Result<W> {
        let s = self
            .graph
            .index_of(start)
            .ok_or(GraphError::missing(VertexRole::Start))?;
        let picked = prim::run(self.graph, s);
        Ok(self.store(MstAlgorithm::Prim, picked))
    }

    /// Runs Kruskal's algorithm and returns the total cost.
    pub fn compute_kruskal_mst(&mut self) -> W {
        let picked = kruskal::run(self.graph);
        self.store(MstAlgorithm::Kruskal, picked)
    }

    fn store(&mut self, algorithm: MstAlgorithm, picked: Vec<(usize, usize, W)>) -> W {
        let tree = MinimumSpanningTree::assemble(self.graph, algorithm, picked);
        let total = tree.total_weight();
        self.mst = Some(tree);
        total
    }

    /// Returns `true` once any MST computation has run.
    pub fn is_mst_computed(&self) -> bool {
        self.mst.is_some()
    }

    /// The most recent result.
    ///
    /// # Errors
    /// [`GraphError::MstNotComputed`] before any computation.
    pub fn mst(&self) -> Result<&MinimumSpanningTree<V, W>> {
        self.mst.as_ref().ok_or(GraphError::MstNotComputed)
    }

    /// Consumes the wrapper and returns the most recent result.
    ///
    /// # Errors
    /// [`GraphError::MstNotComputed`] before any computation.
    pub fn into_mst(self) -> Result<MinimumSpanningTree<V, W>> {
        self.mst.ok_or(GraphError::MstNotComputed)
    }

    /// The most recent result as a fresh undirected graph.
    ///
    /// # Errors
    /// [`GraphError::MstNotComputed`] before any computation.
    pub fn mst_as_graph(&self) -> Result<WeightedGraph<V, W>> {
        Ok(self.mst()?.to_graph())
    }

    /// Printable listing of the most recent result.
    ///
    /// # Errors
    /// [`GraphError::MstNotComputed`] before any computation.
    pub fn mst_summary(&self) -> Result<String>
    where
        V: fmt::Display,
    {
        Ok(self.mst()?.to_string())
    }
}
