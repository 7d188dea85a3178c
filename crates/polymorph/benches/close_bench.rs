//! Criterion benchmarks for polygon closing.
//! Focus sizes: n in {4, 8, 16, 32} boundary nodes. Connection is O(n³), so
//! the larger sizes dominate.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polymorph::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use polymorph::Polygon;

fn open_polygon(n: usize, seed: u64) -> Polygon {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        // Mild jitter keeps sampled boundaries away from near-collinear triples.
        radial_jitter: 0.2,
        ..RadialCfg::default()
    };
    let nodes = draw_polygon_radial(cfg, ReplayToken::new(seed));
    Polygon::from_nodes(nodes).unwrap_or_default()
}

fn bench_close(c: &mut Criterion) {
    let mut group = c.benchmark_group("close");
    for &n in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("close_replay", n), &n, |b, &n| {
            b.iter_batched(
                || open_polygon(n, 7),
                |mut p| {
                    let _ = p.close_replay(ReplayToken::new(1));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    for &n in &[8usize, 32] {
        let mut p = open_polygon(n, 11);
        let _ = p.close_replay(ReplayToken::new(2));
        group.bench_with_input(BenchmarkId::new("is_inside", n), &p, |b, p| {
            b.iter(|| p.is_inside(300.0, 300.0))
        });
        group.bench_with_input(BenchmarkId::new("winding_number", n), &p, |b, p| {
            b.iter(|| p.winding_number(300.0, 300.0))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_close, bench_queries);
criterion_main!(benches);
