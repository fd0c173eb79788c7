//! Weighted adjacency-list graph.
//!
//! Vertices are arbitrary hashable keys. Each vertex is assigned a dense index
//! on first insertion; adjacency lists store `(target index, weight)` slots, so
//! the algorithms run over plain `usize` ids and only translate back to keys
//! at the API boundary.
//!
//! # Invariants
//!
//! - Every edge endpoint is a registered vertex. `add_edge` registers missing
//!   endpoints; queries never do.
//! - In an undirected graph every edge `u -> v (w)` has a mirror `v -> u (w)`.
//!   `add_edge` and `remove_edge` maintain both entries together.
//! - Vertex order and per-vertex edge order are insertion order. The MST
//!   algorithms resolve equal-weight ties through this order.
//!
//! # Concurrency
//!
//! The graph has no interior mutability, so `&WeightedGraph` can be shared
//! across threads and any number of algorithm runs may read it at once.
//! Mutation needs `&mut`, which the borrow checker keeps exclusive of every
//! outstanding algorithm borrow.

mod edge;
mod iter;
mod serde_repr;

pub use edge::{EdgeRef, Weight, WeightedEdge};
pub(crate) use edge::{cmp_weight, same_weight, EdgeSlot};
pub use iter::{Edges, Neighbors};

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A directed or undirected graph with weighted edges.
///
/// Parallel edges and self-loops are allowed and kept as inserted.
#[derive(Clone)]
pub struct WeightedGraph<V, W = f64> {
    /// Vertex keys by dense index.
    vertices: Vec<V>,
    /// Key to dense index.
    index: HashMap<V, usize>,
    /// Outgoing slots by dense index, parallel to `vertices`.
    adjacency: Vec<Vec<EdgeSlot<W>>>,
    directed: bool,
    /// Logical edges; an undirected edge counts once.
    edge_count: usize,
}

impl<V, W> WeightedGraph<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Creates an empty graph whose directedness is fixed for its lifetime.
    pub fn new(directed: bool) -> Self {
        Self::with_capacity(directed, 0)
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(directed: bool, vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            directed,
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, in order.
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new(directed);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Ensures `vertex` is present and returns its dense index.
    ///
    /// Adding an existing vertex changes nothing.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }
        let idx = self.vertices.len();
        self.index.insert(vertex.clone(), idx);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Appends the edge `from -> to`, registering missing endpoints.
    ///
    /// Undirected graphs also append `to -> from` with the same weight.
    /// Duplicates are not merged.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) {
        let u = self.add_vertex(from);
        let v = self.add_vertex(to);
        self.adjacency[u].push(EdgeSlot { target: v, weight });
        if !self.directed {
            self.adjacency[v].push(EdgeSlot { target: u, weight });
        }
        self.edge_count += 1;
    }

    /// Removes the first edge `from -> to` and returns its weight.
    ///
    /// For undirected graphs the mirror entry with the same weight goes too.
    /// The order of the remaining edges is unchanged. Returns `None` if no such
    /// edge exists.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> Option<W> {
        let u = self.index_of(from)?;
        let v = self.index_of(to)?;

        let pos = self.adjacency[u].iter().position(|s| s.target == v)?;
        let removed = self.adjacency[u].remove(pos);

        if !self.directed {
            let mirror = self.adjacency[v]
                .iter()
                .position(|s| s.target == u && same_weight(s.weight, removed.weight));
            debug_assert!(mirror.is_some(), "undirected edge without a mirror entry");
            if let Some(mirror) = mirror {
                self.adjacency[v].remove(mirror);
            }
        }

        self.edge_count -= 1;
        Some(removed.weight)
    }

    /// Returns the outgoing edges of `vertex` in insertion order.
    ///
    /// An unknown vertex has no edges; it is not added.
    pub fn neighbors(&self, vertex: &V) -> Neighbors<'_, V, W> {
        let slots: &[EdgeSlot<W>] = match self.index_of(vertex) {
            Some(idx) => &self.adjacency[idx],
            None => &[],
        };
        Neighbors {
            vertices: &self.vertices,
            slots: slots.iter(),
        }
    }

    /// Returns `true` if `vertex` is in the graph.
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the dense index of `vertex`.
    #[inline]
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Returns the number of outgoing adjacency entries of `vertex`.
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        self.index_of(vertex).map(|idx| self.adjacency[idx].len())
    }

    /// Returns the total weight of all logical edges.
    pub fn total_weight(&self) -> W {
        self.edges().fold(W::zero(), |acc, (_, _, w)| acc + w)
    }
}

impl<V, W> WeightedGraph<V, W> {
    /// Returns `true` if edges are one-way.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Iterates over vertices in insertion order.
    pub fn vertices(&self) -> core::slice::Iter<'_, V> {
        self.vertices.iter()
    }

    /// Returns the vertex with dense index `idx`.
    #[inline]
    pub fn vertex_at(&self, idx: usize) -> Option<&V> {
        self.vertices.get(idx)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of logical edges (an undirected edge counts once).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over every logical edge once. See [`Edges`].
    pub fn edges(&self) -> Edges<'_, V, W> {
        Edges {
            graph: self,
            vertex: 0,
            slot: 0,
            skip_next_loop: false,
        }
    }

    /// Adjacency slots of the vertex with dense index `idx`.
    #[inline(always)]
    pub(crate) fn slots(&self, idx: usize) -> &[EdgeSlot<W>] {
        &self.adjacency[idx]
    }

    /// Vertex keys in dense-index order.
    #[inline(always)]
    pub(crate) fn vertex_slice(&self) -> &[V] {
        &self.vertices
    }
}

impl<V, W> Default for WeightedGraph<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// An empty undirected graph.
    fn default() -> Self {
        Self::undirected()
    }
}

impl<V: fmt::Display, W: fmt::Display + Copy> fmt::Display for WeightedGraph<V, W> {
    /// One line per vertex: `A -> [B (1), C (4)]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, slots) in self.vertices.iter().zip(&self.adjacency) {
            write!(f, "{vertex} -> [")?;
            for (i, slot) in slots.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{} ({})", self.vertices[slot.target], slot.weight)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

impl<V: fmt::Debug, W: fmt::Debug> fmt::Debug for WeightedGraph<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("directed", &self.directed)
            .field("vertices", &self.vertices.len())
            .field("edges", &self.edge_count)
            .finish()
    }
}
