//! Building blocks used by the graph algorithms.
//!
//! - [`DisjointSet`]: union-find over dense ids (Kruskal)
//! - [`MinHeap`]: FIFO-stable min-heap for float priorities (Dijkstra, Prim)
//! - [`DenseMatrix`]: row-major matrix (Floyd-Warshall)

pub mod disjoint_set;
pub mod matrix;
pub mod min_heap;

pub use disjoint_set::DisjointSet;
pub use matrix::DenseMatrix;
pub use min_heap::MinHeap;
