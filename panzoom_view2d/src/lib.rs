// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom View 2D: content transforms, viewport clamping and aspect fitting.
//!
//! This crate provides the headless geometry underneath a zoomable, pannable
//! view of a fixed-size content surface. It focuses on:
//! - [`ContentTransform`]: a uniform scale + translation from content space
//!   into viewport space, with exact decomposition and visible-rect derivation.
//! - [`clamp()`]: the per-axis correction that centers undersized content and
//!   keeps oversized content from leaving the viewport.
//! - [`fit_inside_viewport`] / [`scale_to_fit`]: aspect matching for zoom
//!   targets and the "fit" zoom level.
//! - [`ViewportLayout`]: view size and insets, and the viewport derived from them.
//!
//! It does **not** track gestures, animate, or own any content. Those live in
//! `panzoom_gesture`, `panzoom_timing` and the `panzoom` engine.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use panzoom_view2d::{ContentTransform, clamp};
//!
//! let content = Size::new(1200.0, 800.0);
//! let viewport = Size::new(300.0, 400.0);
//!
//! // A quarter-scale view is 300 x 200: vertically centered, horizontally flush.
//! let t = clamp(ContentTransform::new(0.25, Vec2::new(-50.0, 0.0)), content, viewport);
//! assert_eq!(t.translation(), Vec2::new(0.0, 100.0));
//!
//! let visible = t.visible_rect(viewport);
//! assert_eq!(visible.y0, -400.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod clamp;
mod fit;
mod layout;
mod transform;

pub use clamp::clamp;
pub use fit::{fit_inside_viewport, scale_to_fit};
pub use layout::ViewportLayout;
pub use transform::ContentTransform;
