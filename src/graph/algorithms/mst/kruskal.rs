//! Kruskal's algorithm over a stably sorted edge list.

use crate::collections::DisjointSet;
use crate::graph::weighted::{cmp_weight, Weight, WeightedGraph};

/// Returns the accepted `(u, v, weight)` edges in acceptance order, `u < v`.
///
/// Each undirected edge is collected once, from its lower-index endpoint.
/// Self-loops can never join two components and are not collected.
pub(super) fn run<V, W: Weight>(graph: &WeightedGraph<V, W>) -> Vec<(usize, usize, W)> {
    let n = graph.vertex_count();

    let mut candidates: Vec<(usize, usize, W)> = (0..n)
        .flat_map(|u| {
            graph
                .slots(u)
                .iter()
                .filter(move |slot| u < slot.target)
                .map(move |slot| (u, slot.target, slot.weight))
        })
        .collect();
    // Stable: equal weights keep collection order.
    candidates.sort_by(|a, b| cmp_weight(&a.2, &b.2));

    let mut sets = DisjointSet::with_singletons(n);
    let mut picked = Vec::with_capacity(n.saturating_sub(1));
    let mut rejected = 0usize;

    for (u, v, weight) in candidates {
        if picked.len() + 1 >= n {
            break;
        }
        if sets.union(u, v) {
            picked.push((u, v, weight));
        } else {
            rejected += 1;
        }
    }

    debug_event!(accepted = picked.len(), rejected = rejected, components = sets.set_count(); "kruskal finished");
    picked
}
