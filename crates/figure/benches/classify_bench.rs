//! Criterion benchmarks for figure classification.
//! Focus sizes: n in {3, 4, 6, 12, 24} vertices on a seeded grid.
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use figure::figure::{classify, classify_with, has_self_intersection, ClassifyCfg, EdgePolicy};
use figure::geom2::rand::{draw_grid_points, draw_order, GridCfg, ReplayToken, VertexCount};
use figure::geom2::{loop_edges, Point};

fn ordered_figure(n: usize, seed: u64) -> Vec<Point> {
    let cfg = GridCfg {
        vertex_count: VertexCount::Fixed(n),
        min_coord: -20,
        max_coord: 20,
        ..GridCfg::default()
    };
    let raw = draw_grid_points(&cfg, ReplayToken { seed, index: 0 }).expect("valid grid");
    draw_order(&raw).into_iter().map(|i| raw[i]).collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let loop_cfg = ClassifyCfg {
        edges: EdgePolicy::Loop,
        ..ClassifyCfg::default()
    };
    for &n in &[3usize, 4, 6, 12, 24] {
        group.bench_with_input(BenchmarkId::new("classify_loop", n), &n, |b, &n| {
            b.iter_batched(
                || ordered_figure(n, 43),
                |pts| {
                    let _res = classify_with(&pts, &[], &loop_cfg);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("classify_as_given", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let pts = ordered_figure(n, 44);
                    let edges = loop_edges(pts.len());
                    (pts, edges)
                },
                |(pts, edges)| {
                    let _res = classify(&pts, &edges);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("self_intersection", n), &n, |b, &n| {
            let pts = ordered_figure(n, 45);
            let edges = loop_edges(pts.len());
            b.iter(|| has_self_intersection(&pts, &edges))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
