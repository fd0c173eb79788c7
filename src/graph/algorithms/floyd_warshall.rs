//! All-pairs shortest paths and negative-cycle detection (Floyd-Warshall).
//!
//! Matrix rows and columns are the graph's dense vertex indices. The result
//! keeps two `n x n` matrices:
//!
//! - `distance[i][j]`: shortest known distance, `+inf` when `j` is unreachable
//! - `next[i][j]`: first hop after `i` on that path, `None` when there is none
//!
//! Negative edge weights are allowed. A negative cycle shows up as a negative
//! diagonal entry; once one exists the distances are meaningless, so callers
//! must check [`AllPairsShortestPaths::has_negative_cycle`] (or
//! [`FloydWarshall::has_negative_cycle`]) before trusting them. The check is
//! never folded into the distances themselves.
//!
//! With the `parallel` feature each intermediate-vertex sweep relaxes rows on
//! the rayon pool against a snapshot of row `k`. Without negative cycles
//! row `k` does not change during its own sweep, so both modes agree exactly.

use crate::collections::DenseMatrix;
use crate::error::{GraphError, Result, VertexRole};
use crate::graph::weighted::{Weight, WeightedGraph};
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Entry points of the Floyd-Warshall algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Computes shortest distances and next hops between every ordered pair.
    ///
    /// Runs in `O(n^3)` time and `O(n^2)` space.
    pub fn find_all_pairs_shortest_paths<V, W>(
        graph: &WeightedGraph<V, W>,
    ) -> AllPairsShortestPaths<'_, V, W>
    where
        V: Eq + Hash + Clone,
        W: Weight,
    {
        let n = graph.vertex_count();
        debug_event!(vertices = n, edges = graph.edge_count(); "floyd-warshall started");

        let (mut distance, mut next) = initial_matrices(graph);
        relax(&mut distance, &mut next);

        let result = AllPairsShortestPaths {
            graph,
            distance,
            next,
        };
        debug_event!(negative_cycle = result.has_negative_cycle(); "floyd-warshall finished");
        result
    }

    /// Returns `true` if the graph contains a cycle of negative total weight.
    pub fn has_negative_cycle<V, W>(graph: &WeightedGraph<V, W>) -> bool
    where
        V: Eq + Hash + Clone,
        W: Weight,
    {
        let found = Self::find_all_pairs_shortest_paths(graph).has_negative_cycle();
        if found {
            warn_event!(vertices = graph.vertex_count(); "negative cycle detected");
        }
        found
    }

    /// Shortest distance from `from` to `to`, `+inf` if unreachable.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] naming whichever endpoint is missing.
    /// Both are checked before any computation.
    pub fn shortest_distance<V, W>(graph: &WeightedGraph<V, W>, from: &V, to: &V) -> Result<W>
    where
        V: Eq + Hash + Clone,
        W: Weight,
    {
        let s = graph
            .index_of(from)
            .ok_or(GraphError::missing(VertexRole::Source))?;
        let d = graph
            .index_of(to)
            .ok_or(GraphError::missing(VertexRole::Destination))?;
        Ok(Self::find_all_pairs_shortest_paths(graph).distance[(s, d)])
    }
}

/// Diagonal 0, the lightest direct edge elsewhere, `+inf` otherwise.
fn initial_matrices<V, W: Weight>(
    graph: &WeightedGraph<V, W>,
) -> (DenseMatrix<W>, DenseMatrix<Option<usize>>) {
    let n = graph.vertex_count();
    let mut distance = DenseMatrix::square_with_diagonal(n, W::infinity(), W::zero());
    let mut next = DenseMatrix::filled(n, n, None);

    for u in 0..n {
        for slot in graph.slots(u) {
            let v = slot.target;
            // Parallel edges keep the minimum; a self-loop only matters if negative.
            if slot.weight < distance[(u, v)] {
                distance[(u, v)] = slot.weight;
                next[(u, v)] = Some(v);
            }
        }
    }
    (distance, next)
}

#[cfg(not(feature = "parallel"))]
fn relax<W: Weight>(distance: &mut DenseMatrix<W>, next: &mut DenseMatrix<Option<usize>>) {
    let n = distance.rows();
    for k in 0..n {
        for i in 0..n {
            let through_k = distance[(i, k)];
            if through_k == W::infinity() {
                continue;
            }
            let hop = next[(i, k)];
            for j in 0..n {
                let candidate = through_k + distance[(k, j)];
                if candidate < distance[(i, j)] {
                    distance[(i, j)] = candidate;
                    next[(i, j)] = hop;
                }
            }
        }
    }
}

#[cfg(feature = "parallel")]
fn relax<W: Weight>(distance: &mut DenseMatrix<W>, next: &mut DenseMatrix<Option<usize>>) {
    let n = distance.rows();
    if n == 0 {
        return;
    }
    let mut row_k = vec![W::zero(); n];
    for k in 0..n {
        row_k.copy_from_slice(distance.row(k));
        let row_k = &row_k;
        distance
            .as_mut_slice()
            .par_chunks_mut(n)
            .zip(next.as_mut_slice().par_chunks_mut(n))
            .for_each(|(dist_i, next_i)| {
                let through_k = dist_i[k];
                if through_k == W::infinity() {
                    return;
                }
                let hop = next_i[k];
                for j in 0..n {
                    let candidate = through_k + row_k[j];
                    if candidate < dist_i[j] {
                        dist_i[j] = candidate;
                        next_i[j] = hop;
                    }
                }
            });
    }
}

/// Result of [`FloydWarshall::find_all_pairs_shortest_paths`].
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths<'g, V, W = f64> {
    graph: &'g WeightedGraph<V, W>,
    distance: DenseMatrix<W>,
    next: DenseMatrix<Option<usize>>,
}

/// One ordered pair reported by [`AllPairsShortestPaths::iter_paths`].
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntry<'g, V, W = f64> {
    /// Start of the path.
    pub from: &'g V,
    /// End of the path.
    pub to: &'g V,
    /// Total weight, `+inf` if unreachable.
    pub distance: W,
    /// Vertices along the path, empty if unreachable.
    pub path: Vec<V>,
}

impl<'g, V, W> AllPairsShortestPaths<'g, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Vertices in matrix index order.
    pub fn vertices(&self) -> &'g [V] {
        self.graph.vertex_slice()
    }

    /// The `n x n` distance matrix.
    pub fn distance_matrix(&self) -> &DenseMatrix<W> {
        &self.distance
    }

    /// The `n x n` next-hop matrix; `None` marks a missing path.
    pub fn next_matrix(&self) -> &DenseMatrix<Option<usize>> {
        &self.next
    }

    /// Consumes the result into its `(distance, next)` matrices.
    pub fn into_matrices(self) -> (DenseMatrix<W>, DenseMatrix<Option<usize>>) {
        (self.distance, self.next)
    }

    /// Returns `true` if some vertex reaches itself at negative cost.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.distance.rows()).any(|i| self.distance[(i, i)] < W::zero())
    }

    /// Shortest distance from `from` to `to`, `+inf` if unreachable.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] naming whichever endpoint is missing.
    pub fn distance(&self, from: &V, to: &V) -> Result<W> {
        let (s, d) = self.endpoints(from, to)?;
        Ok(self.distance[(s, d)])
    }

    /// Vertices of the shortest path from `from` to `to`, both included.
    ///
    /// `[from]` when both are the same vertex, empty when `to` is
    /// unreachable. Paths that run into a negative cycle cannot be
    /// reconstructed and also come back empty.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] naming whichever endpoint is missing.
    pub fn path(&self, from: &V, to: &V) -> Result<Vec<V>> {
        let (s, d) = self.endpoints(from, to)?;
        Ok(self.path_between(s, d))
    }

    /// Every ordered pair of distinct vertices with its distance and path.
    pub fn iter_paths(&self) -> impl Iterator<Item = PathEntry<'g, V, W>> + '_ {
        let vertices = self.vertices();
        let n = vertices.len();
        (0..n)
            .flat_map(move |i| (0..n).map(move |j| (i, j)))
            .filter(|(i, j)| i != j)
            .map(move |(i, j)| PathEntry {
                from: &vertices[i],
                to: &vertices[j],
                distance: self.distance[(i, j)],
                path: self.path_between(i, j),
            })
    }

    fn path_between(&self, s: usize, d: usize) -> Vec<V> {
        let vertices = self.vertices();
        if s == d {
            return vec![vertices[s].clone()];
        }
        let mut path = vec![vertices[s].clone()];
        let mut current = s;
        while current != d {
            // A simple path has at most n vertices; more means a cycle.
            if path.len() > vertices.len() {
                return Vec::new();
            }
            match self.next[(current, d)] {
                Some(hop) => {
                    current = hop;
                    path.push(vertices[hop].clone());
                }
                None => return Vec::new(),
            }
        }
        path
    }

    fn endpoints(&self, from: &V, to: &V) -> Result<(usize, usize)> {
        let s = self
            .graph
            .index_of(from)
            .ok_or(GraphError::missing(VertexRole::Source))?;
        let d = self
            .graph
            .index_of(to)
            .ok_or(GraphError::missing(VertexRole::Destination))?;
        Ok((s, d))
    }
}

impl<V, W> fmt::Display for AllPairsShortestPaths<'_, V, W>
where
    V: Eq + Hash + Clone + fmt::Display,
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "All-Pairs Shortest Paths:")?;
        for entry in self.iter_paths() {
            if entry.path.is_empty() {
                writeln!(f, "No path from {} to {}", entry.from, entry.to)?;
                continue;
            }
            write!(f, "Path from {} to {}: [", entry.from, entry.to)?;
            for (i, v) in entry.path.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{v}")?;
            }
            writeln!(f, "], Distance: {}", entry.distance)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab_graph() -> WeightedGraph<&'static str> {
        let mut g = WeightedGraph::directed();
        for v in ["1", "2", "3", "4"] {
            g.add_vertex(v);
        }
        g.add_edge("1", "3", -2.0);
        g.add_edge("2", "1", 4.0);
        g.add_edge("2", "3", 3.0);
        g.add_edge("3", "4", 2.0);
        g.add_edge("4", "2", -1.0);
        g
    }

    #[test]
    fn negative_edges_without_negative_cycle() {
        let g = lab_graph();
        assert!(!FloydWarshall::has_negative_cycle(&g));

        let apsp = FloydWarshall::find_all_pairs_shortest_paths(&g);
        assert!(!apsp.has_negative_cycle());
        assert_eq!(apsp.distance(&"2", &"4").unwrap(), 4.0);
        assert_eq!(apsp.path(&"2", &"4").unwrap(), vec!["2", "1", "3", "4"]);
        assert_eq!(apsp.distance(&"1", &"4").unwrap(), 0.0);
        assert_eq!(apsp.distance(&"1", &"2").unwrap(), -1.0);
        assert_eq!(apsp.path(&"1", &"2").unwrap(), vec!["1", "3", "4", "2"]);
        assert_eq!(FloydWarshall::shortest_distance(&g, &"1", &"4").unwrap(), 0.0);
    }

    #[test]
    fn negative_cycle_is_reported_separately() {
        let g = WeightedGraph::from_edges(true, [("A", "B", 1.0), ("B", "A", -2.0), ("B", "C", 1.0)]);
        assert!(FloydWarshall::has_negative_cycle(&g));
        let apsp = FloydWarshall::find_all_pairs_shortest_paths(&g);
        assert!(apsp.has_negative_cycle());
    }

    #[test]
    fn negative_self_loop_is_a_negative_cycle() {
        let g = WeightedGraph::from_edges(true, [("A", "A", -1.0)]);
        assert!(FloydWarshall::has_negative_cycle(&g));
        let g = WeightedGraph::from_edges(true, [("A", "A", 3.0)]);
        assert!(!FloydWarshall::has_negative_cycle(&g));
        let apsp = FloydWarshall::find_all_pairs_shortest_paths(&g);
        assert_eq!(apsp.distance(&"A", &"A").unwrap(), 0.0);
    }

    #[test]
    fn unreachable_pairs_have_no_path() {
        let mut g = WeightedGraph::from_edges(true, [("A", "B", 1.0_f64)]);
        g.add_vertex("C");
        let apsp = FloydWarshall::find_all_pairs_shortest_paths(&g);
        assert!(apsp.distance(&"B", &"A").unwrap().is_infinite());
        assert!(apsp.path(&"B", &"A").unwrap().is_empty());
        assert_eq!(apsp.path(&"C", &"C").unwrap(), vec!["C"]);
        assert_eq!(apsp.next_matrix()[(1, 0)], None);
    }

    #[test]
    fn parallel_edges_use_the_lightest() {
        let g = WeightedGraph::from_edges(true, [("A", "B", 5.0), ("A", "B", 2.0), ("A", "B", 7.0)]);
        let apsp = FloydWarshall::find_all_pairs_shortest_paths(&g);
        assert_eq!(apsp.distance(&"A", &"B").unwrap(), 2.0);
    }

    #[test]
    fn unknown_vertices_are_rejected_before_running() {
        let g = lab_graph();
        assert_eq!(
            FloydWarshall::shortest_distance(&g, &"9", &"1").unwrap_err(),
            GraphError::missing(VertexRole::Source)
        );
        let apsp = FloydWarshall::find_all_pairs_shortest_paths(&g);
        assert_eq!(
            apsp.path(&"1", &"9").unwrap_err(),
            GraphError::missing(VertexRole::Destination)
        );
    }

    #[test]
    fn display_lists_every_ordered_pair() {
        let mut g = WeightedGraph::from_edges(true, [("A", "B", 1.0)]);
        g.add_vertex("C");
        let text = FloydWarshall::find_all_pairs_shortest_paths(&g).to_string();
        assert!(text.starts_with("All-Pairs Shortest Paths:\n"));
        assert!(text.contains("Path from A to B: [A, B], Distance: 1\n"));
        assert!(text.contains("No path from B to A\n"));
        assert_eq!(text.lines().count(), 1 + 6);
    }

    #[test]
    fn relaxation_matches_reference_loop() {
        // Runs through the rayon relaxation when built with `parallel`.
        let mut g = WeightedGraph::<u32>::directed();
        let mut seed = 17u32;
        for _ in 0..60 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let u = (seed >> 8) % 12;
            let v = (seed >> 16) % 12;
            g.add_edge(u, v, f64::from((seed >> 4) % 9 + 1));
        }
        let n = g.vertex_count();

        let (mut reference, _) = initial_matrices(&g);
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let candidate = reference[(i, k)] + reference[(k, j)];
                    if candidate < reference[(i, j)] {
                        reference[(i, j)] = candidate;
                    }
                }
            }
        }

        let apsp = FloydWarshall::find_all_pairs_shortest_paths(&g);
        assert_eq!(apsp.distance_matrix(), &reference);
        for entry in apsp.iter_paths() {
            if entry.distance.is_finite() {
                assert_eq!(entry.path.first(), Some(entry.from));
                assert_eq!(entry.path.last(), Some(entry.to));
            }
        }
    }

    #[test]
    fn empty_graph() {
        let g = WeightedGraph::<u8>::directed();
        let apsp = FloydWarshall::find_all_pairs_shortest_paths(&g);
        assert!(!apsp.has_negative_cycle());
        assert_eq!(apsp.iter_paths().count(), 0);
    }
}
