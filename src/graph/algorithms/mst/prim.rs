//! Prim's algorithm with a lazily pruned frontier heap.

use crate::collections::MinHeap;
use crate::graph::access::visited::VisitedSet;
use crate::graph::weighted::{Weight, WeightedGraph};

/// Grows a tree from `start` and returns `(parent, vertex, weight)` picks in
/// selection order.
///
/// The heap holds `(weight, (parent, candidate))` entries. A candidate that
/// already joined the tree through a cheaper entry is discarded on pop.
pub(super) fn run<V, W: Weight>(graph: &WeightedGraph<V, W>, start: usize) -> Vec<(usize, usize, W)> {
    let n = graph.vertex_count();
    let mut in_tree = VisitedSet::new(n);
    let mut frontier = MinHeap::new();
    let mut picked = Vec::with_capacity(n.saturating_sub(1));

    in_tree.try_visit(start);
    extend_frontier(graph, start, &in_tree, &mut frontier);

    while in_tree.count() < n {
        let Some((weight, (parent, vertex))) = frontier.pop() else {
            break;
        };
        if !in_tree.try_visit(vertex) {
            continue;
        }
        trace_event!(parent = parent, vertex = vertex; "prim edge accepted");
        picked.push((parent, vertex, weight));
        extend_frontier(graph, vertex, &in_tree, &mut frontier);
    }

    picked
}

fn extend_frontier<V, W: Weight>(
    graph: &WeightedGraph<V, W>,
    from: usize,
    in_tree: &VisitedSet,
    frontier: &mut MinHeap<W, (usize, usize)>,
) {
    for slot in graph.slots(from) {
        if !in_tree.is_visited(slot.target) {
            frontier.push(slot.weight, (from, slot.target));
        }
    }
}
