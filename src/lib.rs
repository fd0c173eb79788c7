//! # `wgraph` - Weighted Graph Algorithms
//!
//! A weighted adjacency-list graph together with the classic algorithms that
//! consume it: single-source shortest paths, all-pairs shortest paths with
//! negative-cycle detection, and minimum spanning trees by two independent
//! methods.
//!
//! ## Guarantees
//!
//! ### Graph Invariants
//! - **Closed vertex set**: every edge endpoint is a registered vertex. Edge
//!   insertion registers endpoints; queries never create vertices.
//! - **Undirected symmetry**: an undirected edge `u - v (w)` is stored as
//!   `u -> v (w)` and `v -> u (w)`, inserted and removed together.
//! - **Stable order**: vertices and each vertex's edges iterate in insertion
//!   order, which makes every tie-break reproducible.
//!
//! ### Algorithm Contracts
//! - **Read-only**: algorithms borrow the graph immutably and keep their
//!   working state per run. Any number of runs may share one graph across
//!   threads; mutation requires `&mut` and so cannot overlap a run.
//! - **Errors before work**: unknown vertices and directed MST input are
//!   rejected before any computation starts.
//! - **Degenerate is not an error**: an unreachable vertex has distance
//!   `+inf` and an empty path; a disconnected graph yields a spanning forest
//!   that reports itself as such.
//!
//! ## Architecture
//!
//! Vertices of any `Eq + Hash + Clone` key type are mapped to dense indices
//! on insertion. Algorithms run entirely over those indices (flat distance
//! vectors, bitset visited sets, a row-major matrix, an index-based disjoint
//! set) and translate back to keys only when reporting.
//!
//! ### Core Abstractions
//!
//! 1. **`WeightedGraph<V, W>`**: directed or undirected, parallel edges and
//!    self-loops allowed, weights any float (`f64` by default).
//! 2. **`DijkstraAlgorithm`**: label-setting shortest paths with a lazily
//!    pruned heap. Requires non-negative weights; negative weights are not
//!    detected.
//! 3. **`FloydWarshall`**: `O(n^3)` all-pairs distances and next hops.
//!    Handles negative weights and exposes negative cycles as a separate
//!    query.
//! 4. **`MinimumSpanningTreeGraph`**: Prim and Kruskal over an undirected
//!    graph, result kept as a `MinimumSpanningTree`.
//!
//! ### Correctness
//!
//! **Theorem 1 (Label setting)**: with non-negative weights, the first time a
//! vertex leaves Dijkstra's heap its distance is final.
//!
//! **Theorem 2 (Optimal substructure)**: after Floyd-Warshall's sweep over
//! intermediate vertex `k`, `distance[i][j]` is the shortest path whose
//! interior uses only vertices `0..=k`.
//!
//! **Theorem 3 (Cut and cycle properties)**: Prim and Kruskal both return a
//! minimum spanning tree of a connected graph, hence the same total weight.
//!
//! ## Features
//!
//! - `parallel`: relax Floyd-Warshall rows on the rayon pool.
//! - `tracing`: emit structured `tracing` events from algorithm runs.
//!
//! ## Example
//!
//! ```rust
//! use wgraph::{DijkstraAlgorithm, MinimumSpanningTreeGraph, WeightedGraph};
//!
//! let mut graph = WeightedGraph::undirected();
//! graph.add_edge("A", "B", 1.0);
//! graph.add_edge("B", "C", 2.0);
//! graph.add_edge("A", "C", 4.0);
//! graph.add_edge("C", "D", 1.0);
//!
//! let dijkstra = DijkstraAlgorithm::new(&graph);
//! assert_eq!(dijkstra.find_shortest_path(&"A", &"D").unwrap(), vec!["A", "B", "C", "D"]);
//!
//! let mut mst = MinimumSpanningTreeGraph::new(&graph).unwrap();
//! assert_eq!(mst.compute_kruskal_mst(), 4.0);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{DenseMatrix, DisjointSet, MinHeap};
pub use error::{GraphError, Result, VertexRole};
pub use graph::{
    AllPairsShortestPaths, DijkstraAlgorithm, EdgeRef, FloydWarshall, MinimumSpanningTree,
    MinimumSpanningTreeGraph, MstAlgorithm, MstEdge, ShortestPathTree, Weight, WeightedEdge,
    WeightedGraph,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // An adjacency slot is an index plus a weight, nothing more.
    assert!(
        mem::size_of::<graph::weighted::EdgeSlot<f64>>()
            <= mem::size_of::<usize>() + mem::size_of::<f64>() + mem::align_of::<f64>()
    );

    // Next-hop cells stay within two words.
    assert!(mem::size_of::<Option<usize>>() <= 2 * mem::size_of::<usize>());
};
