// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use panzoom::{PinchEvent, PointerEvent, PointerId, ViewConfig, ZoomLimit, ZoomPanView};

fn laid_out() -> ZoomPanView<u32> {
    let config = ViewConfig::default().with_max_zoom(ZoomLimit::Fixed(8.0));
    let mut view = ZoomPanView::with_config(0, config);
    view.set_view_size(Size::new(800.0, 600.0));
    view.set_content_size(Size::new(4_000.0, 3_000.0));
    view.zoom_to_fit();
    view
}

fn bench_gesture_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/gestures");

    // One drag of 200 moves followed by one pinch of 200 updates.
    group.bench_function("drag_then_pinch", |b| {
        b.iter_batched(
            laid_out,
            |mut view| {
                let pointer = PointerId(1);
                view.handle_input(PointerEvent::Down {
                    pointer,
                    position: Point::new(400.0, 300.0),
                });
                for i in 0..200 {
                    let d = f64::from(i);
                    view.handle_input(PointerEvent::Move {
                        pointer,
                        position: Point::new(400.0 - d, 300.0 - d * 0.5),
                    });
                }
                view.handle_input(PinchEvent::Begin);
                for i in 0..200 {
                    let factor = if i < 100 { 1.02 } else { 0.99 };
                    view.handle_input(PinchEvent::Update {
                        scale_factor: factor,
                        focus: Point::new(400.0, 300.0),
                    });
                }
                view.handle_input(PinchEvent::End);
                view.handle_input(PointerEvent::Up { pointer });
                black_box(view.drain_events().count());
                black_box(view.transform());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_gesture_stream);
criterion_main!(benches);
