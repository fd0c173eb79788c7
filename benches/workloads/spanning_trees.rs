use super::ring_with_chords;
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use wgraph::MinimumSpanningTreeGraph;

pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst");

    for &n in &[1_000usize, 10_000] {
        let g = ring_with_chords(false, n, n * 4, 13);
        group.throughput(Throughput::Elements(g.edge_count() as u64));

        group.bench_with_input(BenchmarkId::new("prim", n), &g, |b, g| {
            b.iter(|| {
                let mut mst = MinimumSpanningTreeGraph::new(g).unwrap();
                black_box(mst.compute_prim_mst(&0).unwrap())
            })
        });

        group.bench_with_input(BenchmarkId::new("kruskal", n), &g, |b, g| {
            b.iter(|| {
                let mut mst = MinimumSpanningTreeGraph::new(g).unwrap();
                black_box(mst.compute_kruskal_mst())
            })
        });
    }

    group.finish();
}
