// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Timing: host-driven, frame-scheduled rectangle animation.
//!
//! A [`RectAnimator`] owns at most one [`RectAnimation`], which linearly
//! interpolates the edges of a "from" rectangle towards a "to" rectangle.
//! There is no internal timer: the host calls [`RectAnimator::tick`] with a
//! monotonic timestamp, typically once per display frame or when
//! [`RectAnimator::next_frame_at`] comes due. Cancelling is just dropping
//! the pending state.
//!
//! [`Timing`] chooses a duration either absolutely or proportionally to the
//! distance between the two rectangles.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Rect;
//! use panzoom_timing::{FRAME_INTERVAL, RectAnimator, Timing};
//!
//! let from = Rect::new(0.0, 0.0, 300.0, 400.0);
//! let to = Rect::new(100.0, 100.0, 250.0, 300.0);
//! let duration = Timing::Duration(0.25).duration_for(from, to, 1.0);
//!
//! let mut animator = RectAnimator::default();
//! animator.start(from, to, duration, Duration::ZERO);
//!
//! let mut now = Duration::ZERO;
//! let last = loop {
//!     now += FRAME_INTERVAL;
//!     if let Some(step) = animator.tick(now) {
//!         if step.finished {
//!             break step.rect;
//!         }
//!     }
//! };
//! assert_eq!(last, to);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod timing;

pub use animation::{FRAME_INTERVAL, FrameStep, RectAnimation, RectAnimator, lerp_rect};
pub use timing::{FAST, SLOW, Timing};
