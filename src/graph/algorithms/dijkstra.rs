//! Single-source shortest paths (Dijkstra).
//!
//! Label-setting search over a [`MinHeap`] keyed by tentative distance. A
//! vertex is *settled* the first time it pops; later pops of the same vertex
//! are stale duplicates left behind by re-insertion and are skipped. There is
//! no decrease-key: an improved distance is pushed as a new entry.
//!
//! Equal tentative distances pop in push order, so results and predecessor
//! choices are reproducible for a given graph.
//!
//! # Negative weights
//!
//! Correct only when every edge weight is `>= 0`. Negative weights are not
//! detected and yield unspecified distances; use
//! [`FloydWarshall`](super::FloydWarshall) for such graphs.

use crate::collections::MinHeap;
use crate::error::{GraphError, Result, VertexRole};
use crate::graph::access::visited::VisitedSet;
use crate::graph::weighted::{Weight, WeightedGraph};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Shortest-path queries over a borrowed graph.
///
/// Every query is an independent run with its own scratch state, so one
/// instance (or many) can serve concurrent callers as long as the graph is not
/// mutated.
#[derive(Debug)]
pub struct DijkstraAlgorithm<'g, V, W = f64> {
    graph: &'g WeightedGraph<V, W>,
}

impl<V, W> Clone for DijkstraAlgorithm<'_, V, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, W> Copy for DijkstraAlgorithm<'_, V, W> {}

/// Raw result of one run, in dense indices.
struct Run<W> {
    distances: Vec<W>,
    predecessors: Vec<Option<usize>>,
    settled: usize,
}

impl<'g, V, W> DijkstraAlgorithm<'g, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Prepares queries over `graph`.
    pub fn new(graph: &'g WeightedGraph<V, W>) -> Self {
        Self { graph }
    }

    /// The graph queries run against.
    pub fn graph(&self) -> &'g WeightedGraph<V, W> {
        self.graph
    }

    /// Shortest distance from `source` to every vertex.
    ///
    /// Unreachable vertices map to `+inf`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `source` is not in the graph.
    pub fn find_shortest_paths(&self, source: &V) -> Result<HashMap<V, W>> {
        Ok(self.shortest_path_tree(source)?.into_distances())
    }

    /// Runs a full search from `source` and keeps distances and predecessors.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `source` is not in the graph.
    pub fn shortest_path_tree(&self, source: &V) -> Result<ShortestPathTree<'g, V, W>> {
        let s = self
            .graph
            .index_of(source)
            .ok_or(GraphError::missing(VertexRole::Source))?;
        let run = self.run(s, None);
        Ok(ShortestPathTree {
            graph: self.graph,
            source: s,
            distances: run.distances,
            predecessors: run.predecessors,
            settled: run.settled,
        })
    }

    /// The vertices of one shortest path from `source` to `destination`,
    /// both included.
    ///
    /// The search stops as soon as `destination` is settled. Returns an empty
    /// path if `destination` is unreachable, `[source]` if they are equal.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] naming whichever endpoint is missing.
    pub fn find_shortest_path(&self, source: &V, destination: &V) -> Result<Vec<V>> {
        let (s, d) = self.endpoints(source, destination)?;
        let run = self.run(s, Some(d));
        Ok(reconstruct(
            self.graph.vertex_slice(),
            &run.distances,
            &run.predecessors,
            d,
        ))
    }

    /// Shortest distance from `source` to `destination`, `+inf` if unreachable.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] naming whichever endpoint is missing.
    pub fn shortest_distance(&self, source: &V, destination: &V) -> Result<W> {
        let (s, d) = self.endpoints(source, destination)?;
        Ok(self.run(s, Some(d)).distances[d])
    }

    fn endpoints(&self, source: &V, destination: &V) -> Result<(usize, usize)> {
        let s = self
            .graph
            .index_of(source)
            .ok_or(GraphError::missing(VertexRole::Source))?;
        let d = self
            .graph
            .index_of(destination)
            .ok_or(GraphError::missing(VertexRole::Destination))?;
        Ok((s, d))
    }

    fn run(&self, source: usize, stop_at: Option<usize>) -> Run<W> {
        let n = self.graph.vertex_count();
        let mut distances = vec![W::infinity(); n];
        let mut predecessors = vec![None; n];
        let mut settled = VisitedSet::new(n);
        let mut heap = MinHeap::with_capacity(n);
        let mut relaxations = 0usize;

        debug_event!(vertices = n, source = source; "dijkstra started");

        distances[source] = W::zero();
        heap.push(W::zero(), source);

        while let Some((_, current)) = heap.pop() {
            if !settled.try_visit(current) {
                continue;
            }
            if stop_at == Some(current) {
                break;
            }

            let base = distances[current];
            for slot in self.graph.slots(current) {
                let neighbor = slot.target;
                if settled.is_visited(neighbor) {
                    continue;
                }
                let candidate = base + slot.weight;
                if candidate < distances[neighbor] {
                    distances[neighbor] = candidate;
                    predecessors[neighbor] = Some(current);
                    heap.push(candidate, neighbor);
                    relaxations += 1;
                }
            }
        }

        debug_event!(settled = settled.count(), relaxations = relaxations; "dijkstra finished");

        Run {
            distances,
            predecessors,
            settled: settled.count(),
        }
    }
}

/// Walks predecessor links back from `target`; empty when unreachable.
fn reconstruct<V: Clone, W: Weight>(
    vertices: &[V],
    distances: &[W],
    predecessors: &[Option<usize>],
    target: usize,
) -> Vec<V> {
    if distances[target] == W::infinity() {
        return Vec::new();
    }
    let mut path = Vec::new();
    let mut current = Some(target);
    while let Some(idx) = current {
        path.push(vertices[idx].clone());
        current = predecessors[idx];
    }
    path.reverse();
    path
}

/// Distances and predecessors from one complete Dijkstra run.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g, V, W = f64> {
    graph: &'g WeightedGraph<V, W>,
    source: usize,
    distances: Vec<W>,
    predecessors: Vec<Option<usize>>,
    settled: usize,
}

impl<'g, V, W> ShortestPathTree<'g, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// The vertex the run started from.
    pub fn source(&self) -> &'g V {
        &self.graph.vertex_slice()[self.source]
    }

    /// Shortest distance to `vertex`, `+inf` if unreachable.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `vertex` is not in the graph.
    pub fn distance(&self, vertex: &V) -> Result<W> {
        let idx = self.lookup(vertex)?;
        Ok(self.distances[idx])
    }

    /// The vertex preceding `vertex` on its shortest path.
    ///
    /// `None` for the source and for unreachable vertices.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `vertex` is not in the graph.
    pub fn predecessor(&self, vertex: &V) -> Result<Option<&'g V>> {
        let idx = self.lookup(vertex)?;
        Ok(self.predecessors[idx].map(|p| &self.graph.vertex_slice()[p]))
    }

    /// The shortest path from the source to `vertex`; empty if unreachable.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `vertex` is not in the graph.
    pub fn path_to(&self, vertex: &V) -> Result<Vec<V>> {
        let idx = self.lookup(vertex)?;
        Ok(reconstruct(
            self.graph.vertex_slice(),
            &self.distances,
            &self.predecessors,
            idx,
        ))
    }

    /// Returns `true` if `vertex` is in the graph and reachable from the source.
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.graph
            .index_of(vertex)
            .is_some_and(|idx| self.distances[idx] < W::infinity())
    }

    /// Number of vertices whose distance was finalized.
    pub fn settled_count(&self) -> usize {
        self.settled
    }

    /// Iterates `(vertex, distance)` in vertex insertion order.
    pub fn distances(&self) -> impl Iterator<Item = (&'g V, W)> + '_ {
        self.graph
            .vertex_slice()
            .iter()
            .zip(self.distances.iter().copied())
    }

    /// Consumes the tree into a `vertex -> distance` map covering every vertex.
    pub fn into_distances(self) -> HashMap<V, W> {
        self.graph
            .vertex_slice()
            .iter()
            .cloned()
            .zip(self.distances)
            .collect()
    }

    fn lookup(&self, vertex: &V) -> Result<usize> {
        self.graph
            .index_of(vertex)
            .ok_or(GraphError::missing(VertexRole::Vertex))
    }
}

impl<V, W> fmt::Display for ShortestPathTree<'_, V, W>
where
    V: Eq + Hash + Clone + fmt::Display,
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shortest paths from {}:", self.source())?;
        for (vertex, distance) in self.distances() {
            if distance == W::infinity() {
                writeln!(f, "  to {vertex}: No path exists")?;
            } else {
                writeln!(f, "  to {vertex}: {distance}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_directed() -> WeightedGraph<&'static str> {
        let mut g = WeightedGraph::directed();
        for v in ["A", "B", "C", "D", "E"] {
            g.add_vertex(v);
        }
        g.add_edge("A", "B", 4.0);
        g.add_edge("A", "C", 2.0);
        g.add_edge("B", "C", 3.0);
        g.add_edge("B", "E", 3.0);
        g.add_edge("B", "D", 2.0);
        g.add_edge("C", "B", 1.0);
        g.add_edge("C", "D", 4.0);
        g.add_edge("C", "E", 5.0);
        g.add_edge("E", "D", 1.0);
        g
    }

    #[test]
    fn distances_on_directed_sample() {
        let g = sample_directed();
        let dist = DijkstraAlgorithm::new(&g).find_shortest_paths(&"A").unwrap();
        assert_eq!(dist[&"A"], 0.0);
        assert_eq!(dist[&"B"], 3.0);
        assert_eq!(dist[&"C"], 2.0);
        assert_eq!(dist[&"D"], 5.0);
        assert_eq!(dist[&"E"], 6.0);
    }

    #[test]
    fn paths_on_directed_sample() {
        let g = sample_directed();
        let dijkstra = DijkstraAlgorithm::new(&g);
        assert_eq!(
            dijkstra.find_shortest_path(&"A", &"E").unwrap(),
            vec!["A", "C", "B", "E"]
        );
        assert_eq!(
            dijkstra.find_shortest_path(&"A", &"D").unwrap(),
            vec!["A", "C", "B", "D"]
        );
        assert_eq!(dijkstra.find_shortest_path(&"A", &"A").unwrap(), vec!["A"]);
        // D has no outgoing edges.
        assert!(dijkstra.find_shortest_path(&"D", &"A").unwrap().is_empty());
        assert_eq!(dijkstra.shortest_distance(&"A", &"E").unwrap(), 6.0);
    }

    #[test]
    fn unknown_endpoints_are_rejected() {
        let g = sample_directed();
        let dijkstra = DijkstraAlgorithm::new(&g);
        assert_eq!(
            dijkstra.find_shortest_paths(&"Z").unwrap_err(),
            GraphError::missing(VertexRole::Source)
        );
        assert_eq!(
            dijkstra.find_shortest_path(&"A", &"Z").unwrap_err(),
            GraphError::missing(VertexRole::Destination)
        );
        assert_eq!(
            dijkstra.find_shortest_path(&"Z", &"A").unwrap_err(),
            GraphError::missing(VertexRole::Source)
        );
    }

    #[test]
    fn tree_reports_predecessors_and_reachability() {
        let g = sample_directed();
        let tree = DijkstraAlgorithm::new(&g).shortest_path_tree(&"B").unwrap();
        assert_eq!(*tree.source(), "B");
        assert_eq!(tree.predecessor(&"B").unwrap(), None);
        assert_eq!(tree.predecessor(&"D").unwrap(), Some(&"B"));
        assert!(!tree.is_reachable(&"A"));
        assert!(tree.distance(&"A").unwrap().is_infinite());
        assert!(tree.path_to(&"A").unwrap().is_empty());
        assert_eq!(tree.settled_count(), 4);
        assert!(tree.distance(&"Z").is_err());
    }

    #[test]
    fn display_lists_every_vertex() {
        let g = sample_directed();
        let text = DijkstraAlgorithm::new(&g)
            .shortest_path_tree(&"B")
            .unwrap()
            .to_string();
        assert!(text.starts_with("Shortest paths from B:\n"));
        assert!(text.contains("  to B: 0\n"));
        assert!(text.contains("  to A: No path exists\n"));
        assert_eq!(text.lines().count(), 1 + g.vertex_count());
    }

    #[test]
    fn stale_heap_entries_are_skipped() {
        // D is first reached at 10 and later improved to 3, leaving a stale entry.
        let g = WeightedGraph::from_edges(
            true,
            [("A", "D", 10.0), ("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0)],
        );
        let tree = DijkstraAlgorithm::new(&g).shortest_path_tree(&"A").unwrap();
        assert_eq!(tree.distance(&"D").unwrap(), 3.0);
        assert_eq!(tree.path_to(&"D").unwrap(), vec!["A", "B", "C", "D"]);
        assert_eq!(tree.settled_count(), 4);
    }

    #[test]
    fn equal_distance_ties_keep_first_predecessor() {
        let g = WeightedGraph::from_edges(
            false,
            [("S", "X", 1.0), ("S", "Y", 1.0), ("X", "T", 1.0), ("Y", "T", 1.0)],
        );
        let path = DijkstraAlgorithm::new(&g).find_shortest_path(&"S", &"T").unwrap();
        assert_eq!(path, vec!["S", "X", "T"]);
    }

    #[test]
    fn works_with_f32_weights() {
        let g: WeightedGraph<u32, f32> = WeightedGraph::from_edges(true, [(0, 1, 0.5), (1, 2, 0.25)]);
        let d = DijkstraAlgorithm::new(&g).shortest_distance(&0, &2).unwrap();
        assert!((d - 0.75).abs() < f32::EPSILON);
    }
}
