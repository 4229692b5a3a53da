// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Programmatic control of `ZoomPanView`: fitting, showing rectangles,
//! animated transitions, layout and notification delivery.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use kurbo::{Rect, Size, Vec2};
use panzoom::{
    FAST, FRAME_INTERVAL, Observers, Timing, ViewConfig, ViewEvent, ViewEventKind, ZoomPanView,
};

const FRAME: Duration = Duration::from_millis(16);

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn photo() -> ZoomPanView<&'static str> {
    init_logger();
    let mut view = ZoomPanView::new("photo");
    view.set_view_size(Size::new(300.0, 400.0));
    view.set_content_size(Size::new(1200.0, 800.0));
    view.drain_events().for_each(drop);
    view
}

/// Ticks every frame until the animation stops; returns the finish time.
fn run_to_end(view: &mut ZoomPanView<&'static str>, mut now: Duration) -> Duration {
    while view.is_animating() {
        now += FRAME;
        view.tick(now);
    }
    now
}

fn assert_rect_near(a: Rect, b: Rect) {
    let near = |x: f64, y: f64| (x - y).abs() < 1e-6;
    assert!(
        near(a.x0, b.x0) && near(a.y0, b.y0) && near(a.x1, b.x1) && near(a.y1, b.y1),
        "{a:?} != {b:?}"
    );
}

#[test]
fn zoom_to_fit_centers_undersized_axis() {
    let mut view = photo();
    view.zoom_to_fit();
    assert_eq!(view.zoom(), 0.25);
    assert_eq!(view.content_offset(), Vec2::new(0.0, 100.0));
    assert_eq!(view.scaled_content_size(), Some(Size::new(300.0, 200.0)));
}

#[test]
fn showing_the_visible_rect_is_a_no_op() {
    let mut view = photo();
    view.set_zoom(1.5);
    view.set_content_position(Vec2::new(-420.0, -333.0));
    let before = view.transform();

    view.show_rect(view.visible_rect());
    let after = view.transform();
    assert!((after.scale() - before.scale()).abs() < 1e-9);
    assert!((after.translation() - before.translation()).hypot() < 1e-9);
}

#[test]
fn center_content_centers_at_current_zoom() {
    let mut view = photo();
    view.set_zoom(0.25);
    view.set_content_position(Vec2::new(0.0, 0.0));
    view.center_content();
    assert_eq!(view.content_offset(), Vec2::new(0.0, 100.0));
}

#[test]
fn reset_zoom_returns_to_fit() {
    let mut view = photo();
    view.set_zoom(2.0);
    view.reset_zoom();
    assert_eq!(view.zoom(), 0.25);
}

#[test]
fn animation_finishes_once_at_target() {
    let mut view = photo();
    view.zoom_to_fit();
    view.drain_events().for_each(drop);

    let target = Rect::new(400.0, 200.0, 700.0, 600.0);
    view.zoom_to_rect(target, Timing::Duration(0.25), Duration::ZERO);
    assert!(view.is_animating());
    let end = run_to_end(&mut view, Duration::ZERO);

    assert_rect_near(view.visible_rect(), target);
    assert!(!view.tick(end + FRAME));
    assert_eq!(view.next_frame_deadline(), None);

    let kinds: Vec<_> = view.drain_events().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ViewEventKind::AnimationStarted,
            ViewEventKind::AnimationFinished
        ]
    );
}

#[test]
fn frames_are_not_run_before_they_are_due() {
    let mut view = photo();
    view.zoom_to_rect(
        Rect::new(0.0, 0.0, 1200.0, 800.0),
        Timing::Duration(1.0),
        Duration::ZERO,
    );
    let before = view.transform();
    assert!(!view.tick(Duration::from_millis(5)));
    assert_eq!(view.transform(), before);

    let due = view.next_frame_deadline().expect("animating");
    assert!(view.tick(due));
    assert_ne!(view.transform(), before);
}

#[test]
fn superseded_animation_never_finishes() {
    let mut view = photo();
    view.zoom_to_fit();
    view.drain_events().for_each(drop);

    view.zoom_to_rect(
        Rect::new(0.0, 0.0, 300.0, 400.0),
        Timing::Duration(0.5),
        Duration::ZERO,
    );
    view.tick(FRAME * 2);
    let second = Rect::new(600.0, 200.0, 900.0, 600.0);
    view.zoom_to_rect(second, Timing::Duration(0.5), FRAME * 2);
    run_to_end(&mut view, FRAME * 2);

    assert_rect_near(view.visible_rect(), second);
    let finished = view
        .drain_events()
        .filter(|e| e.kind() == ViewEventKind::AnimationFinished)
        .count();
    assert_eq!(finished, 1);
}

#[test]
fn cancelled_animation_is_silent() {
    let mut view = photo();
    view.zoom_to_fit_animated(Timing::Duration(0.5), Duration::ZERO);
    assert!(view.cancel_animation());
    assert!(!view.cancel_animation());
    assert!(!view.tick(Duration::from_secs(1)));

    let kinds: Vec<_> = view.drain_events().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec![ViewEventKind::AnimationStarted]);
}

#[test]
fn proportional_timing_scales_with_distance() {
    let mut near = photo();
    near.zoom_to_fit();
    near.zoom_to_rect(
        Rect::new(0.0, 0.0, 1200.0, 790.0),
        Timing::Proportional(0.01),
        Duration::ZERO,
    );
    let mut far = photo();
    far.zoom_to_fit();
    far.zoom_to_rect(
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Timing::Proportional(0.01),
        Duration::ZERO,
    );

    let near_end = run_to_end(&mut near, Duration::ZERO);
    let far_end = run_to_end(&mut far, Duration::ZERO);
    assert!(near_end < far_end);
}

#[test]
fn zero_duration_shows_target_immediately() {
    let mut view = photo();
    let target = Rect::new(0.0, 0.0, 600.0, 800.0);
    view.zoom_to_rect(target, Timing::Duration(0.0), Duration::ZERO);

    assert!(!view.is_animating());
    assert_eq!(view.zoom(), 0.5);
    assert_eq!(view.drain_events().count(), 0);
}

#[test]
fn layout_finished_only_for_positive_sizes() {
    init_logger();
    let mut view = ZoomPanView::new("photo");
    view.set_view_size(Size::new(0.0, 400.0));
    view.set_view_size(Size::new(300.0, 400.0));
    view.set_view_size(Size::new(300.0, 400.0));
    view.set_view_size(Size::new(300.0, -1.0));

    let events: Vec<_> = view.drain_events().collect();
    assert_eq!(
        events,
        vec![ViewEvent::LayoutFinished {
            view: "photo",
            size: Size::new(300.0, 400.0)
        }]
    );
}

#[test]
fn unlaid_out_view_accepts_calls_without_effect() {
    init_logger();
    let mut view = ZoomPanView::<u8>::new(0);
    view.set_content_size(Size::new(1200.0, 800.0));
    view.zoom_to_rect(
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Timing::Duration(0.3),
        Duration::ZERO,
    );
    view.show_rect(Rect::new(0.0, 0.0, 10.0, 10.0));

    assert!(!view.is_animating());
    assert_eq!(view.zoom(), 1.0);
    assert_eq!(view.min_zoom(), None);
}

#[test]
fn dispatch_delivers_queued_events_in_order() {
    let mut view = photo();
    let seen: Rc<RefCell<Vec<ViewEventKind>>> = Rc::default();
    let mut observers = Observers::new();
    for kind in [
        ViewEventKind::AnimationStarted,
        ViewEventKind::AnimationFinished,
    ] {
        let seen = seen.clone();
        observers.subscribe(kind, move |e: &ViewEvent<&'static str>| {
            assert_eq!(*e.view(), "photo");
            seen.borrow_mut().push(e.kind());
        });
    }

    view.zoom_to_fit_animated(Timing::Duration(0.1), Duration::ZERO);
    run_to_end(&mut view, Duration::ZERO);
    view.dispatch_events(&mut observers);
    view.dispatch_events(&mut observers);

    assert_eq!(
        *seen.borrow(),
        vec![
            ViewEventKind::AnimationStarted,
            ViewEventKind::AnimationFinished
        ]
    );
}

#[test]
fn zero_frame_interval_still_finishes() {
    init_logger();
    let config = ViewConfig::default().with_frame_interval(Duration::ZERO);
    let mut view = ZoomPanView::with_config("photo", config);
    view.set_view_size(Size::new(300.0, 400.0));
    view.set_content_size(Size::new(1200.0, 800.0));
    assert_eq!(view.frame_interval(), FRAME_INTERVAL);

    view.zoom_to_rect(
        Rect::new(0.0, 0.0, 1200.0, 800.0),
        Timing::Duration(0.25),
        Duration::ZERO,
    );
    let mut now = Duration::ZERO;
    for _ in 0..1_000 {
        if !view.is_animating() {
            break;
        }
        now += FRAME;
        view.tick(now);
    }
    assert!(!view.is_animating(), "still animating at {now:?}");
    let finished = view
        .drain_events()
        .filter(|e| e.kind() == ViewEventKind::AnimationFinished)
        .count();
    assert_eq!(finished, 1);
}

#[test]
fn frame_interval_can_be_changed_between_animations() {
    let mut view = photo();
    view.set_frame_interval(Duration::from_millis(8));
    assert_eq!(view.frame_interval(), Duration::from_millis(8));
    assert_eq!(view.config().frame_interval, Duration::from_millis(8));

    view.zoom_to_fit_animated(Timing::Duration(0.5), Duration::ZERO);
    assert_eq!(view.next_frame_deadline(), Some(Duration::from_millis(8)));
}

#[test]
fn density_scales_proportional_duration() {
    /// Runs a proportional fit-to-corner zoom on 1 ms frames; returns its length.
    fn proportional_length(density: f64) -> Duration {
        let mut view = photo();
        view.set_frame_interval(Duration::from_millis(1));
        view.set_density(density);
        view.zoom_to_fit();
        view.zoom_to_rect(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Timing::Proportional(FAST),
            Duration::ZERO,
        );
        let mut now = Duration::ZERO;
        while view.is_animating() {
            now += Duration::from_millis(1);
            view.tick(now);
        }
        now
    }

    let normal = proportional_length(1.0).as_secs_f64();
    let dense = proportional_length(2.0).as_secs_f64();
    assert!(normal > 1.0, "normal density took {normal}s");
    assert!((normal - 2.0 * dense).abs() < 0.005, "{normal}s vs {dense}s");
}

#[test]
fn degenerate_target_is_ignored() {
    let mut view = photo();
    view.zoom_to_fit();
    view.drain_events().for_each(drop);
    let before = view.transform();

    view.zoom_to_rect(
        Rect::new(10.0, 10.0, 10.0, 50.0),
        Timing::Duration(0.3),
        Duration::ZERO,
    );
    view.zoom_to_rect(
        Rect::new(10.0, 10.0, 60.0, 10.0),
        Timing::Proportional(FAST),
        Duration::ZERO,
    );

    assert!(!view.is_animating());
    assert_eq!(view.transform(), before);
    assert_eq!(view.drain_events().count(), 0);
}
