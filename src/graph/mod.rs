//! Weighted graphs and the algorithms that consume them.
//!
//! - `weighted`: the adjacency-list graph and its edge types
//! - `algorithms`: shortest paths and minimum spanning trees

pub mod algorithms;
pub mod weighted;
pub(crate) mod access;

pub use algorithms::{
    AllPairsShortestPaths, DijkstraAlgorithm, FloydWarshall, MinimumSpanningTree,
    MinimumSpanningTreeGraph, MstAlgorithm, MstEdge, PathEntry, ShortestPathTree,
};
pub use weighted::{EdgeRef, Edges, Neighbors, Weight, WeightedEdge, WeightedGraph};
