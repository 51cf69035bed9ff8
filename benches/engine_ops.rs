// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the page interaction engine.
//!
//! Measures the performance of:
//! - Disclosure toggling across a set of items
//! - Tab selection and sticky tab lookup
//! - Visibility reports against many watched regions
//! - Lightbox open/navigate/close cycles

use criterion::{criterion_group, criterion_main, Criterion};
use iced_vitrine::content::ImageRef;
use iced_vitrine::engine::{Command, MediaTab, ShowcaseEngine, ThresholdFraction};
use std::hint::black_box;

/// Item ids in the shape the page uses: a handful of slugs, queried by `&str`.
fn item_ids() -> Vec<String> {
    (0..8).map(|i| format!("item-{i:02}")).collect()
}

/// An engine with a page worth of watched regions.
fn armed_engine(regions: usize) -> ShowcaseEngine {
    let mut engine = ShowcaseEngine::new();
    for i in 0..regions {
        engine.apply(Command::Observe {
            region: format!("region-{i:02}"),
            threshold: ThresholdFraction::new(0.05),
        });
    }
    engine
}

/// Benchmark disclosure toggling.
///
/// Expands and collapses every item once, the worst case for one
/// frame of user interaction.
fn bench_disclosure(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_ops");

    let ids = item_ids();

    group.bench_function("toggle_all_items", |b| {
        b.iter(|| {
            let mut engine = ShowcaseEngine::new();
            for id in &ids {
                engine.apply(Command::ToggleItem(id.clone()));
            }
            for id in &ids {
                engine.apply(Command::ToggleItem(id.clone()));
            }
            black_box(&engine);
        });
    });

    group.finish();
}

/// Benchmark tab selection and the sticky lookup the view performs per item.
fn bench_tabs(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_ops");

    let ids = item_ids();
    let mut engine = ShowcaseEngine::new();
    for id in &ids {
        engine.apply(Command::SelectTab(id.clone(), MediaTab::TechnicalDrawings));
    }

    group.bench_function("select_tab", |b| {
        b.iter(|| {
            let mut engine = engine.clone();
            for id in &ids {
                engine.apply(Command::SelectTab(id.clone(), MediaTab::MotionStudy));
            }
            black_box(&engine);
        });
    });

    group.bench_function("active_tab_lookup", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(engine.active_tab(id));
            }
        });
    });

    group.finish();
}

/// Benchmark visibility reporting.
///
/// Scrolling feeds a report per watched region per frame; most reports
/// stay below the threshold and must be cheap.
fn bench_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_ops");

    let engine = armed_engine(8);

    group.bench_function("report_below_threshold", |b| {
        b.iter(|| {
            let mut engine = engine.clone();
            for i in 0..8 {
                engine.apply(Command::ReportVisibility {
                    region: format!("region-{i:02}"),
                    fraction: 0.01,
                });
            }
            black_box(&engine);
        });
    });

    group.bench_function("latch_full_page", |b| {
        b.iter(|| {
            let mut engine = armed_engine(8);
            for i in 0..8 {
                engine.apply(Command::ReportVisibility {
                    region: format!("region-{i:02}"),
                    fraction: 0.8,
                });
            }
            black_box(engine.watched_count());
        });
    });

    group.finish();
}

/// Benchmark a full lightbox session over a drawing-pack sized sequence.
fn bench_lightbox(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_ops");

    let images: Vec<ImageRef> = (1..=9)
        .map(|i| ImageRef::new(format!("assets/content/bench/sheet-{i:02}.jpg")))
        .collect();

    group.bench_function("lightbox_session", |b| {
        b.iter(|| {
            let mut engine = ShowcaseEngine::new();
            engine.apply(Command::OpenLightbox {
                images: images.clone(),
                start: 4,
            });
            for _ in 0..images.len() {
                engine.apply(Command::LightboxNext);
            }
            engine.apply(Command::LightboxPrevious);
            engine.apply(Command::CloseLightbox);
            black_box(engine.lightbox_open());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_disclosure,
    bench_tabs,
    bench_visibility,
    bench_lightbox
);
criterion_main!(benches);
