use super::ring_with_chords;
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use wgraph::{DijkstraAlgorithm, FloydWarshall};

pub fn run(c: &mut Criterion) {
    bench_dijkstra(c);
    bench_floyd_warshall(c);
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for &n in &[1_000usize, 10_000] {
        let g = ring_with_chords(true, n, n * 4, 7);
        group.throughput(Throughput::Elements(g.edge_count() as u64));

        group.bench_with_input(BenchmarkId::new("single_source", n), &g, |b, g| {
            let dijkstra = DijkstraAlgorithm::new(g);
            b.iter(|| black_box(dijkstra.find_shortest_paths(&0)))
        });

        group.bench_with_input(BenchmarkId::new("point_to_point", n), &g, |b, g| {
            let dijkstra = DijkstraAlgorithm::new(g);
            b.iter(|| black_box(dijkstra.find_shortest_path(&0, &(n / 2))))
        });
    }

    group.finish();
}

fn bench_floyd_warshall(c: &mut Criterion) {
    let mut group = c.benchmark_group("floyd_warshall");
    group.sample_size(10);

    for &n in &[64usize, 256] {
        let g = ring_with_chords(true, n, n * 4, 11);
        group.throughput(Throughput::Elements((n * n * n) as u64));

        group.bench_with_input(BenchmarkId::new("all_pairs", n), &g, |b, g| {
            b.iter(|| black_box(FloydWarshall::find_all_pairs_shortest_paths(g).has_negative_cycle()))
        });
    }

    group.finish();
}
