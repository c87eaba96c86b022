//! Benchmarks for the board layout pipeline.

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crewboard_core::{Interval, Resource, TimeRange, Window};
use crewboard_layout::{pack_lanes, LayoutEngine};

fn day_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 6, 8, 0, 0).unwrap()
}

fn day_window() -> Window {
    Window::new(day_start(), day_start() + Duration::hours(12))
}

/// A deterministic day: `per_resource` jobs per technician, with starts
/// staggered so roughly a third of consecutive jobs overlap.
fn build_day(resources: usize, per_resource: usize) -> (Vec<Resource>, Vec<Interval>) {
    let roster: Vec<Resource> = (0..resources)
        .map(|n| Resource::new(format!("tech-{n:03}"), format!("Tech {n:03}")))
        .collect();
    let mut intervals = Vec::with_capacity(resources * per_resource);
    for (r, resource) in roster.iter().enumerate() {
        for n in 0..per_resource {
            let offset = ((n * 41 + r * 7) % 600) as i64;
            let len = (30 + (n * 13 + r) % 90) as i64;
            let start = day_start() + Duration::minutes(offset);
            intervals.push(Interval::new(
                format!("wo-{r:03}-{n:03}"),
                resource.id.clone(),
                start,
                start + Duration::minutes(len),
            ));
        }
    }
    (roster, intervals)
}

fn bench_single_resource_day(c: &mut Criterion) {
    let engine = LayoutEngine::default();
    let (roster, intervals) = build_day(1, 16);
    let window = day_window();

    c.bench_function("layout_single_resource_16_jobs", |b| {
        b.iter(|| engine.compute(black_box(&roster), black_box(&intervals), black_box(&window)))
    });
}

fn bench_dense_overlap(c: &mut Criterion) {
    let engine = LayoutEngine::default();
    let roster = vec![Resource::new("tech-000", "Tech 000")];
    let start = day_start() + Duration::hours(1);
    let intervals: Vec<Interval> = (0..100)
        .map(|n| {
            Interval::new(
                format!("wo-{n:03}"),
                "tech-000",
                start,
                start + Duration::hours(2),
            )
        })
        .collect();
    let window = day_window();

    c.bench_function("layout_100_concurrent_jobs", |b| {
        b.iter(|| engine.compute(black_box(&roster), black_box(&intervals), black_box(&window)))
    });
}

fn bench_small_board(c: &mut Criterion) {
    let engine = LayoutEngine::default();
    let (roster, intervals) = build_day(10, 20);
    let window = day_window();

    c.bench_function("layout_board_10x20", |b| {
        b.iter(|| engine.compute(black_box(&roster), black_box(&intervals), black_box(&window)))
    });
}

fn bench_large_board(c: &mut Criterion) {
    let engine = LayoutEngine::default();
    let (roster, intervals) = build_day(50, 40);
    let window = day_window();

    c.bench_function("layout_board_50x40", |b| {
        b.iter(|| engine.compute(black_box(&roster), black_box(&intervals), black_box(&window)))
    });
}

fn bench_pack_lanes(c: &mut Criterion) {
    let ranges: Vec<TimeRange> = (0..1000)
        .map(|n| {
            let start = day_start() + Duration::minutes((n * 17) % 660);
            TimeRange::new(start, start + Duration::minutes(45))
        })
        .collect();

    c.bench_function("pack_lanes_1000_ranges", |b| {
        b.iter(|| pack_lanes(black_box(&ranges), black_box(6)))
    });
}

criterion_group!(
    benches,
    bench_single_resource_day,
    bench_dense_overlap,
    bench_small_board,
    bench_large_board,
    bench_pack_lanes,
);
criterion_main!(benches);
