//! Criterion benchmarks for mode enumeration and standing waves
//!
//! Run with: cargo bench -p stanza-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use stanza_core::{AcousticParameters, RoomGeometry, enumerate_modes, standing_waves};

const MAX_MODES: &[u32] = &[2, 4, 6, 8, 10];

fn bench_enumerate_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_modes");
    let room = RoomGeometry::new(4.0, 3.0, 2.5);

    for &max in MAX_MODES {
        let params = AcousticParameters::new(343.0, max);
        group.bench_with_input(BenchmarkId::new("max_modes", max), &params, |b, params| {
            b.iter(|| black_box(enumerate_modes(black_box(&room), params)));
        });
    }

    group.finish();
}

fn bench_standing_waves(c: &mut Criterion) {
    let mut group = c.benchmark_group("standing_waves");
    let room = RoomGeometry::new(4.0, 3.0, 2.5);

    for &max in MAX_MODES {
        let params = AcousticParameters::new(343.0, max);
        group.bench_with_input(BenchmarkId::new("max_modes", max), &params, |b, params| {
            b.iter(|| black_box(standing_waves(black_box(&room), params)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_enumerate_modes, bench_standing_waves);
criterion_main!(benches);
