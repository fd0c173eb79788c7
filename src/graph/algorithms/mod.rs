//! Algorithms over [`WeightedGraph`](super::WeightedGraph).
//!
//! Every algorithm borrows the graph immutably and owns its per-run state
//! (heaps, visited sets, distance tables, disjoint sets). Runs never share
//! mutable state, so independent runs over one graph may execute on
//! different threads at once.
//!
//! None of them supports cancellation. A caller that needs a timeout runs the
//! computation on its own thread and abandons the result.

pub mod dijkstra;
pub mod floyd_warshall;
pub mod mst;

pub use dijkstra::{DijkstraAlgorithm, ShortestPathTree};
pub use floyd_warshall::{AllPairsShortestPaths, FloydWarshall, PathEntry};
pub use mst::{MinimumSpanningTree, MinimumSpanningTreeGraph, MstAlgorithm, MstEdge};
