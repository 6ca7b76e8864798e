//! Puzzle benchmarks
//!
//! Small synthetic inputs so the whole suite finishes in well under a minute.

use std::time::Duration;

use aoc_puzzles::domain::crabs::{CostModel, cheapest_alignment, total_fuel};
use aoc_puzzles::domain::vents::{Diagram, Segment, SegmentFilter};
use aoc_puzzles::{Point, SearchOptions, rasterize_line};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5))
}

/// 500 deterministic segments on a 1000x1000 grid
fn synthetic_segments() -> Vec<Segment> {
    (0..500i64)
        .map(|i| {
            let a = (i * 7919) % 1000;
            let b = (i * 104_729) % 1000;
            match i % 3 {
                0 => Segment::new(Point::new(a, b), Point::new(a, (b + 300) % 1000)),
                1 => Segment::new(Point::new(a, b), Point::new((a + 250) % 1000, b)),
                _ => {
                    let len = 200.min(999 - a.max(b));
                    Segment::new(Point::new(a, b), Point::new(a + len, b + len))
                }
            }
        })
        .collect()
}

/// 1000 deterministic crab positions
fn synthetic_positions() -> Vec<u64> {
    (0..1000u64).map(|i| (i * 2_654_435_761) % 2000).collect()
}

fn bench_raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster");

    group.bench_function("shallow_1000", |b| {
        b.iter(|| rasterize_line(black_box(Point::new(0, 0)), black_box(Point::new(1000, 377))))
    });
    group.bench_function("steep_1000", |b| {
        b.iter(|| rasterize_line(black_box(Point::new(0, 0)), black_box(Point::new(377, 1000))))
    });

    group.finish();
}

fn bench_diagram(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagram");
    let segments = synthetic_segments();

    group.bench_function("axis_aligned", |b| {
        b.iter(|| Diagram::from_segments(black_box(&segments), SegmentFilter::AxisAligned))
    });
    group.bench_function("all", |b| {
        b.iter(|| Diagram::from_segments(black_box(&segments), SegmentFilter::All))
    });

    group.finish();
}

fn bench_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment");
    let positions = synthetic_positions();
    let options = SearchOptions::for_integer_domain();

    group.bench_function("golden_section_triangular", |b| {
        b.iter(|| cheapest_alignment(black_box(&positions), CostModel::Triangular, &options))
    });

    // Exhaustive scan for comparison
    group.bench_function("exhaustive_triangular", |b| {
        b.iter(|| {
            (0..2000u64)
                .filter_map(|target| {
                    total_fuel(black_box(&positions), target, CostModel::Triangular)
                })
                .min()
        })
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = bench_criterion();
    targets = bench_raster, bench_diagram, bench_alignment
}

criterion_main!(benches);
