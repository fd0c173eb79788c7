use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::cell::RefCell;
use wgraph::DisjointSet;

// Baseline: RefCell parents, same rank heuristic.
struct RefCellDisjointSet {
    parent: Vec<RefCell<usize>>,
    rank: Vec<u8>,
}

impl RefCellDisjointSet {
    fn new() -> Self {
        Self {
            parent: Vec::new(),
            rank: Vec::new(),
        }
    }

    fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(RefCell::new(id));
        self.rank.push(0);
        id
    }

    fn find(&self, id: usize) -> usize {
        let mut root = id;
        while *self.parent[root].borrow() != root {
            root = *self.parent[root].borrow();
        }
        let mut curr = id;
        while curr != root {
            let next = self.parent[curr].replace(root);
            curr = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => *self.parent[ra].borrow_mut() = rb,
            std::cmp::Ordering::Greater => *self.parent[rb].borrow_mut() = ra,
            std::cmp::Ordering::Equal => {
                *self.parent[rb].borrow_mut() = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

fn bench_disjoint_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("Disjoint Set");

    const N: usize = 10_000;
    const OPS: usize = 100_000;

    group.bench_function("DisjointSet", |b| {
        b.iter(|| {
            let mut ds = DisjointSet::with_singletons(N);
            for i in 0..OPS {
                let a = (i * 3) % N;
                let b = (i * 7) % N;
                black_box(ds.union(a, b));
                black_box(ds.find(a));
            }
            black_box(ds.set_count())
        })
    });

    group.bench_function("RefCell baseline", |b| {
        b.iter(|| {
            let mut ds = RefCellDisjointSet::new();
            for _ in 0..N {
                ds.make_set();
            }
            for i in 0..OPS {
                let a = (i * 3) % N;
                let b = (i * 7) % N;
                black_box(ds.union(a, b));
                black_box(ds.find(a));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_disjoint_set);
criterion_main!(benches);
