use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ghost_prim::{compute_mst, GhostSpanningGraph, GhostToken};
use petgraph::algo::min_spanning_tree;
use petgraph::data::Element;
use petgraph::graph::UnGraph;

// Deterministic sparse connected graph: a ring plus `extra` pseudo-random chords.
fn edges(n: usize, extra: usize) -> Vec<(usize, usize, f64)> {
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let mut out: Vec<_> = (0..n).map(|i| (i, (i + 1) % n, (next() % 10_000) as f64)).collect();
    for _ in 0..extra {
        let a = (next() % n as u64) as usize;
        let b = (next() % n as u64) as usize;
        out.push((a, b, (next() % 10_000) as f64));
    }
    out
}

fn bench_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst");

    for &n in &[1_000usize, 10_000] {
        let list = edges(n, 4 * n);

        group.bench_with_input(BenchmarkId::new("ghost_prim", n), &list, |b, list| {
            b.iter(|| {
                GhostToken::new(|mut token| {
                    let mut g = GhostSpanningGraph::with_capacity(n);
                    for &(a, z, w) in list {
                        g.connect(a, z, w).unwrap();
                    }
                    black_box(compute_mst(&g, &mut token).unwrap())
                })
            });
        });

        group.bench_with_input(BenchmarkId::new("petgraph_kruskal", n), &list, |b, list| {
            b.iter(|| {
                let g = UnGraph::<(), f64, usize>::from_edges(list.iter().copied());
                let total: f64 = min_spanning_tree(&g)
                    .filter_map(|e| match e {
                        Element::Edge { weight, .. } => Some(weight),
                        Element::Node { .. } => None,
                    })
                    .sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// Re-running on a built graph isolates the heap + Prim loop from construction.
fn bench_prim_rerun(c: &mut Criterion) {
    let list = edges(10_000, 40_000);
    GhostToken::new(|mut token| {
        let mut g = GhostSpanningGraph::with_capacity(10_000);
        for &(a, z, w) in &list {
            g.connect(a, z, w).unwrap();
        }
        c.bench_function("prim_rerun_10k", |b| {
            b.iter(|| black_box(compute_mst(&g, &mut token).unwrap()));
        });
    });
}

criterion_group!(benches, bench_prim, bench_prim_rerun);
criterion_main!(benches);
