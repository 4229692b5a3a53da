// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Gesture: the drag / pinch-zoom state machine behind a pan and zoom view.
//!
//! The crate turns pointer and pinch input into candidate content transforms:
//!
//! - [`state`]: [`GestureState`], the `None` / `Drag` / `Zoom` machine with
//!   ordered [`ModeChange`] reports and baseline snapshots.
//! - [`drag`]: [`drag::DragTracker`], the start point and active pointer of a drag.
//! - [`pinch`]: [`pinch::clip_pinch_factor`] and [`pinch::apply_pinch`], which
//!   bound a pinch delta to the zoom limits and pivot about the focal point.
//!
//! Pinch *detection* (turning two contacts into a scale factor and a focal
//! point) is the platform's job; this crate consumes its output. Transforms
//! returned here are unclamped: the owner applies
//! [`panzoom_view2d::clamp()`] for its viewport afterwards.
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod pinch;
pub mod state;

pub use state::{GestureMode, GestureState, ModeChange};
