// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use panzoom_gesture::pinch::{ZoomRange, apply_pinch};
use panzoom_timing::RectAnimator;
use panzoom_view2d::{ContentTransform, clamp, fit_inside_viewport};

const CONTENT: Size = Size::new(4_000.0, 3_000.0);
const VIEWPORT: Size = Size::new(800.0, 600.0);

fn transforms(n: usize) -> Vec<ContentTransform> {
    (0..n)
        .map(|i| {
            let f = i as f64;
            ContentTransform::new(0.1 + (f % 40.0) * 0.1, Vec2::new(-f * 7.0, f * 3.0 - 500.0))
        })
        .collect()
}

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("view2d/clamp");
    for len in [64usize, 1_024, 16_384] {
        let ts = transforms(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &ts, |b, ts| {
            b.iter(|| {
                for t in ts {
                    black_box(clamp(*t, CONTENT, VIEWPORT));
                }
            });
        });
    }
    group.finish();
}

fn bench_pinch(c: &mut Criterion) {
    let range = ZoomRange::new(0.2, 8.0);
    c.bench_function("gesture/apply_pinch_sequence", |b| {
        b.iter(|| {
            let mut t = ContentTransform::IDENTITY;
            for i in 0..256 {
                let factor = if i % 2 == 0 { 1.07 } else { 0.95 };
                let focus = Point::new(f64::from(i % 800), f64::from(i % 600));
                if let Some(next) = apply_pinch(t, factor, focus, range) {
                    t = clamp(next, CONTENT, VIEWPORT);
                }
            }
            black_box(t)
        });
    });
}

fn bench_animation(c: &mut Criterion) {
    let from = Rect::new(0.0, 0.0, 800.0, 600.0);
    let to = fit_inside_viewport(Rect::new(1_000.0, 900.0, 1_200.0, 1_000.0), VIEWPORT);
    c.bench_function("timing/animate_to_completion", |b| {
        b.iter(|| {
            let mut animator = RectAnimator::default();
            animator.start(from, to, 0.5, core::time::Duration::ZERO);
            let interval = animator.frame_interval();
            let mut now = core::time::Duration::ZERO;
            let mut frames = 0_u32;
            while animator.is_active() {
                now += interval;
                if let Some(step) = animator.tick(now) {
                    black_box(step.rect);
                    frames += 1;
                }
            }
            black_box(frames)
        });
    });
}

criterion_group!(benches, bench_clamp, bench_pinch, bench_animation);
criterion_main!(benches);
