// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom: a headless pan, pinch-zoom and animated zoom engine.
//!
//! [`ZoomPanView`] displays a scaled, panned view of a fixed-size content
//! surface inside a rectangular viewport. It is driven by:
//! - single-pointer drags and pinch gestures ([`PointerEvent`], [`PinchEvent`]);
//! - programmatic calls ([`ZoomPanView::show_rect`], [`ZoomPanView::set_zoom`],
//!   [`ZoomPanView::set_content_position`], [`ZoomPanView::center_content`],
//!   [`ZoomPanView::zoom_to_fit`], [`ZoomPanView::reset_zoom`]);
//! - animated transitions ([`ZoomPanView::zoom_to_rect`]) advanced by the
//!   host through [`ZoomPanView::tick`].
//!
//! After every mutation the transform is clamped so that content smaller than
//! the viewport is centered and larger content never leaves a gap at its
//! edges. Boundaries of gestures, animations and layout are reported as
//! [`ViewEvent`]s.
//!
//! It does **not** render, detect pinches from raw touches, or run timers.
//! The host adapter owns those and translates to and from this API.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Rect, Size, Vec2};
//! use panzoom::{PinchEvent, Timing, ViewEvent, ZoomPanView};
//!
//! let mut view = ZoomPanView::new("photo");
//! view.set_view_size(Size::new(300.0, 400.0));
//! view.set_content_size(Size::new(1200.0, 800.0));
//!
//! // Fit: 300 x 200 content, vertically centered.
//! view.zoom_to_fit();
//! assert_eq!(view.zoom(), 0.25);
//! assert_eq!(view.content_offset(), Vec2::new(0.0, 100.0));
//!
//! // Pinch in around the viewport center.
//! view.handle_input(PinchEvent::Begin);
//! view.handle_input(PinchEvent::Update { scale_factor: 4.0, focus: Point::new(150.0, 200.0) });
//! view.handle_input(PinchEvent::End);
//! assert_eq!(view.zoom(), 1.0);
//!
//! // Animate back to the full picture, one frame at a time.
//! let content = Rect::new(0.0, 0.0, 1200.0, 800.0);
//! view.zoom_to_rect(content, Timing::Duration(0.2), Duration::ZERO);
//! let mut now = Duration::ZERO;
//! while view.is_animating() {
//!     now += Duration::from_millis(16);
//!     view.tick(now);
//! }
//!
//! let events: Vec<_> = view.drain_events().collect();
//! assert!(matches!(events.last(), Some(ViewEvent::AnimationFinished { view: "photo" })));
//! ```
//!
//! ## Concurrency
//!
//! A view is a plain single-threaded state machine. Input, animation frames
//! and queries are expected on one logical thread; nothing blocks and there
//! is never more than one pending animation frame.
//!
//! ## Logging
//!
//! Gesture transitions, animation start/finish/cancel and layout changes are
//! logged with the [`log`] crate at `debug` level; ignored input is logged at
//! `trace`. Install any `log` backend to see them.
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod events;
pub mod input;
mod view;

pub use config::{ConfigError, ViewConfig, ZoomBound, ZoomLimit};
pub use events::{ObserverId, Observers, ViewEvent, ViewEventKind};
pub use input::{InputEvent, PinchEvent, PointerEvent, PointerId};
pub use view::{MAX_QUEUED_EVENTS, ZoomPanView};

pub use panzoom_gesture::GestureMode;
pub use panzoom_timing::{FAST, FRAME_INTERVAL, SLOW, Timing};
pub use panzoom_view2d::ContentTransform;
