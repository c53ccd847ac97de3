//! Criterion micro-benchmarks for the diagnostic passes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use strata_bench::{dense_exchange_mesh, reference_mesh};
use strata_comm::SerialComm;
use strata_core::{DiagSink, Level, Rank, SimClock};
use strata_diag::{build_occupancy, check_finite, render_patch_map};
use strata_mesh::Axis;

/// Benchmark: single-rank finiteness scan over 8 patches of 8^3 cells
/// and 5 components.
fn bench_check_finite_reference(c: &mut Criterion) {
    let mesh = reference_mesh(42);
    let clock = SimClock::new(1.0, 100);

    c.bench_function("check_finite_reference", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            let mut err = Vec::new();
            let mut diag = DiagSink::new(&mut out, &mut err);
            check_finite(&mesh, &SerialComm, clock, Level(0), "bench", &mut diag).unwrap();
            black_box(&out);
        });
    });
}

/// Benchmark: occupancy build over a fully claimed boundary face.
fn bench_build_occupancy_dense(c: &mut Criterion) {
    let mesh = dense_exchange_mesh(42);

    c.bench_function("build_occupancy_dense", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            let mut err = Vec::new();
            let mut diag = DiagSink::new(&mut out, &mut err);
            let map = build_occupancy(&mesh, Rank(0), Level(0), &mut diag);
            black_box(&map);
        });
    });
}

/// Benchmark: render a 12^3 occupancy grid to an in-memory buffer.
fn bench_render_patch_map(c: &mut Criterion) {
    let mesh = reference_mesh(42);
    let clock = SimClock::new(1.0, 100);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut diag = DiagSink::new(&mut out, &mut err);
    let map = build_occupancy(&mesh, Rank(0), Level(0), &mut diag);
    drop(diag);

    c.bench_function("render_patch_map", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            render_patch_map(&mut buf, &map, Axis::Z, clock, Rank(0), Level(0)).unwrap();
            black_box(&buf);
        });
    });
}

criterion_group!(
    benches,
    bench_check_finite_reference,
    bench_build_occupancy_dense,
    bench_render_patch_map
);
criterion_main!(benches);
