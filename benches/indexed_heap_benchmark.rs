use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ghost_prim::{GhostIndexedMinHeap, GhostSpanningGraph, GhostToken};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

const N: usize = 1000;

fn bench_indexed_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_heap");

    // Lazy-deletion std heap: push a fresh entry per decrease, skip stale ones on pop.
    group.bench_function("std_binary_heap_lazy_decrease_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            let mut best = vec![u64::MAX; N];
            for i in 0..N {
                let cost = ((i * 7919) % N) as u64;
                best[i] = cost;
                heap.push(Reverse((cost, i)));
            }
            for i in (0..N).step_by(3) {
                best[i] /= 2;
                heap.push(Reverse((best[i], i)));
            }
            let mut done = vec![false; N];
            while let Some(Reverse((cost, i))) = heap.pop() {
                if done[i] || cost != best[i] {
                    continue;
                }
                done[i] = true;
                black_box(i);
            }
        });
    });

    group.bench_function("ghost_indexed_heap_decrease_pop", |b| {
        GhostToken::new(|mut token| {
            let mut g: GhostSpanningGraph<'_, usize> = GhostSpanningGraph::with_capacity(N);
            let ids: Vec<_> = (0..N).map(|k| g.get_or_create_vertex(k)).collect();
            b.iter(|| {
                g.reset_frontier(&mut token);
                let mut heap = GhostIndexedMinHeap::initialize(&g, &mut token);
                for (i, &id) in ids.iter().enumerate() {
                    let cost = ((i * 7919) % N) as f64;
                    heap.decrease_key(&mut token, id, cost).unwrap();
                }
                for &id in ids.iter().step_by(3) {
                    let cost = g.frontier_cost(&token, id);
                    if cost > 0.0 {
                        heap.decrease_key(&mut token, id, cost / 2.0).unwrap();
                    }
                }
                while let Ok(v) = heap.pop(&mut token) {
                    black_box(v);
                }
            });
        });
    });

    group.finish();
}

criterion_group!(benches, bench_indexed_heap);
criterion_main!(benches);
