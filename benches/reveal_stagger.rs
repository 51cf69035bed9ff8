// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for entrance stagger timing.
//!
//! Measures the performance of:
//! - Stagger schedule computation for a region of items
//! - Per-frame opacity sampling across a revealed page
//! - Idempotent reveal marking

use criterion::{criterion_group, criterion_main, Criterion};
use iced_vitrine::engine::{stagger_delay, stagger_schedule};
use iced_vitrine::ui::state::{region_span, EntranceTimeline};
use std::hint::black_box;
use std::time::{Duration, Instant};

const BASE: Duration = Duration::from_millis(100);
const STEP: Duration = Duration::from_millis(150);

/// A timeline with every region of a page-sized layout already revealed.
fn revealed_timeline(regions: usize, items: usize, now: Instant) -> EntranceTimeline {
    let mut timeline = EntranceTimeline::default();
    for i in 0..regions {
        timeline.mark_revealed(&format!("region-{i:02}"), now, region_span(items, BASE, STEP));
    }
    timeline
}

/// Benchmark schedule computation for one region.
fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal_stagger");

    group.bench_function("stagger_schedule_10", |b| {
        b.iter(|| {
            black_box(stagger_schedule(10, BASE, STEP));
        });
    });

    group.bench_function("stagger_delay", |b| {
        b.iter(|| {
            for index in 0..10 {
                black_box(stagger_delay(index, BASE, STEP));
            }
        });
    });

    group.finish();
}

/// Benchmark opacity sampling.
///
/// The view samples one opacity per visible item per frame; this measures
/// a whole page mid-fade, the steady animation cost.
fn bench_opacity_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal_stagger");

    let start = Instant::now();
    let timeline = revealed_timeline(8, 10, start);
    let mid_fade = start + BASE + Duration::from_millis(300);

    group.bench_function("opacity_full_page", |b| {
        b.iter(|| {
            for region in 0..8 {
                let region_id = format!("region-{region:02}");
                for index in 0..10 {
                    black_box(timeline.opacity(&region_id, index, BASE, STEP, mid_fade));
                }
            }
        });
    });

    group.finish();
}

/// Benchmark reveal marking, including the re-mark path.
///
/// Regions latch once, but scroll reports keep arriving until the watcher
/// detaches, so re-marking an already revealed region must stay cheap.
fn bench_mark_revealed(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal_stagger");

    let now = Instant::now();
    let span = region_span(10, BASE, STEP);

    group.bench_function("mark_revealed_first", |b| {
        b.iter(|| {
            let mut timeline = EntranceTimeline::default();
            for i in 0..8 {
                timeline.mark_revealed(&format!("region-{i:02}"), now, span);
            }
            black_box(timeline.animating(now));
        });
    });

    group.bench_function("mark_revealed_again", |b| {
        let mut timeline = revealed_timeline(8, 10, now);
        b.iter(|| {
            timeline.mark_revealed("region-00", now, span);
            black_box(timeline.animating(now));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_schedule,
    bench_opacity_sampling,
    bench_mark_revealed
);
criterion_main!(benches);
