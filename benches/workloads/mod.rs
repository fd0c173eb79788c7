pub mod shortest_paths;
pub mod spanning_trees;

use wgraph::WeightedGraph;

/// Deterministic sparse graph: a ring over `0..n` so every vertex is reachable,
/// plus `extra` pseudo-random chords with weights in `1..=100`.
pub fn ring_with_chords(directed: bool, n: usize, extra: usize, seed: u64) -> WeightedGraph<usize> {
    let mut rng = Lcg(seed);
    let mut g = WeightedGraph::with_capacity(directed, n);
    for v in 0..n {
        g.add_vertex(v);
    }
    for v in 0..n {
        g.add_edge(v, (v + 1) % n, rng.weight());
    }
    for _ in 0..extra {
        let u = rng.below(n);
        let v = rng.below(n);
        g.add_edge(u, v, rng.weight());
    }
    g
}

struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }

    fn weight(&mut self) -> f64 {
        (self.next() % 100 + 1) as f64
    }
}
