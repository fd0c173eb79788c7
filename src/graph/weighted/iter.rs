//! Borrowing iterators over a [`WeightedGraph`].

use super::edge::{EdgeRef, EdgeSlot};
use super::WeightedGraph;
use core::iter::FusedIterator;

/// Outgoing edges of one vertex, in insertion order.
///
/// Created by [`WeightedGraph::neighbors`].
pub struct Neighbors<'a, V, W> {
    pub(super) vertices: &'a [V],
    pub(super) slots: core::slice::Iter<'a, EdgeSlot<W>>,
}

impl<'a, V, W: Copy> Iterator for Neighbors<'a, V, W> {
    type Item = EdgeRef<'a, V, W>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slots.next()?;
        Some(EdgeRef {
            target: &self.vertices[slot.target],
            weight: slot.weight,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<V, W: Copy> ExactSizeIterator for Neighbors<'_, V, W> {}
impl<V, W: Copy> FusedIterator for Neighbors<'_, V, W> {}

/// Every logical edge exactly once, as `(from, to, weight)`.
///
/// Directed graphs yield each adjacency entry. Undirected graphs store two
/// entries per edge, so only the one leaving the lower-index endpoint is
/// yielded; a self-loop stores two entries in the same list and every second
/// one is skipped.
///
/// Created by [`WeightedGraph::edges`].
pub struct Edges<'a, V, W> {
    pub(super) graph: &'a WeightedGraph<V, W>,
    pub(super) vertex: usize,
    pub(super) slot: usize,
    pub(super) skip_next_loop: bool,
}

impl<'a, V, W: Copy> Iterator for Edges<'a, V, W> {
    type Item = (&'a V, &'a V, W);

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while self.vertex < graph.adjacency.len() {
            let list = &graph.adjacency[self.vertex];
            while self.slot < list.len() {
                let EdgeSlot { target, weight } = list[self.slot];
                self.slot += 1;

                let keep = if graph.directed {
                    true
                } else if target == self.vertex {
                    let keep = !self.skip_next_loop;
                    self.skip_next_loop = !self.skip_next_loop;
                    keep
                } else {
                    self.vertex < target
                };

                if keep {
                    return Some((
                        &graph.vertices[self.vertex],
                        &graph.vertices[target],
                        weight,
                    ));
                }
            }
            self.vertex += 1;
            self.slot = 0;
            self.skip_next_loop = false;
        }
        None
    }
}

impl<V, W: Copy> FusedIterator for Edges<'_, V, W> {}
