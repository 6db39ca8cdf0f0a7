// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification and overlay stacks.
//!
//! Measures the performance of:
//! - Pushing toasts and expiring them on tick
//! - Opening overlays and closing them from the top with escape

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use issue2md_console::ui::notifications::{Kind, Manager as Notifications, Options};
use issue2md_console::ui::overlays::{Manager as Overlays, OverlayConfig};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Benchmark pushing a burst of toasts and expiring them in one tick.
fn bench_notification_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("notifications");

    for count in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("push_and_expire", count), &count, |b, &n| {
            b.iter(|| {
                let start = Instant::now();
                let mut toasts: Notifications<()> = Notifications::new();
                for i in 0..n {
                    toasts.notify_at(start, Kind::Info, format!("toast {i}"), "", Options::new());
                }
                let expired = toasts.tick(start + Duration::from_secs(60));
                black_box(expired);
            });
        });
    }

    group.finish();
}

/// Benchmark ticking a stack where nothing has expired yet.
fn bench_idle_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("notifications");

    let start = Instant::now();
    let mut toasts: Notifications<()> = Notifications::new();
    for i in 0..100 {
        toasts.notify_at(start, Kind::Success, format!("toast {i}"), "", Options::new());
    }

    group.bench_function("idle_tick", |b| {
        b.iter(|| black_box(toasts.tick(start + Duration::from_millis(100))));
    });

    group.finish();
}

/// Benchmark opening a deep overlay stack and unwinding it with escape.
fn bench_overlay_unwind(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlays");

    group.bench_function("open_and_escape_50", |b| {
        b.iter(|| {
            let mut overlays: Overlays<u32> = Overlays::new();
            for i in 0..50 {
                overlays.open(OverlayConfig::new(i));
            }
            while overlays.handle_escape().is_some() {}
            black_box(overlays.len());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_notification_burst,
    bench_idle_tick,
    bench_overlay_unwind
);
criterion_main!(benches);
