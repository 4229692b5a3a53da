// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture mode state machine: `None`, `Drag` and `Zoom`, mutually exclusive.
//!
//! Every mode change snapshots the caller's current transform as the baseline
//! for relative gesture math, and is reported as a [`ModeChange`] whose
//! [`ModeChange::ended`] side must be notified before its
//! [`ModeChange::started`] side.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use panzoom_gesture::{GestureMode, GestureState, drag::PointerId};
//! use panzoom_view2d::ContentTransform;
//!
//! let mut gestures = GestureState::new();
//! let current = ContentTransform::IDENTITY;
//!
//! let change = gestures.pointer_down(PointerId(0), Point::new(10.0, 10.0), current).unwrap();
//! assert_eq!(change.started(), Some(GestureMode::Drag));
//!
//! let moved = gestures.pointer_move(PointerId(0), Point::new(4.0, 12.0)).unwrap();
//! assert_eq!(moved.translation(), Vec2::new(-6.0, 2.0));
//!
//! // A pinch supersedes the drag: drag ends before zoom starts.
//! let change = gestures.pinch_begin(moved).unwrap();
//! assert_eq!(change.ended(), Some(GestureMode::Drag));
//! assert_eq!(change.started(), Some(GestureMode::Zoom));
//! ```

use kurbo::Point;
use panzoom_view2d::ContentTransform;

use crate::drag::{DragTracker, PointerId};
use crate::pinch::{ZoomRange, apply_pinch};

/// Active gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GestureMode {
    /// No gesture in progress.
    #[default]
    None,
    /// Single-pointer drag (scrolling).
    Drag,
    /// Two-finger pinch zoom.
    Zoom,
}

/// A transition between two distinct gesture modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeChange {
    /// Mode before the change.
    pub from: GestureMode,
    /// Mode after the change.
    pub to: GestureMode,
}

impl ModeChange {
    /// The gesture that ended, if the previous mode was a gesture.
    #[must_use]
    pub fn ended(&self) -> Option<GestureMode> {
        (self.from != GestureMode::None).then_some(self.from)
    }

    /// The gesture that started, if the new mode is a gesture.
    #[must_use]
    pub fn started(&self) -> Option<GestureMode> {
        (self.to != GestureMode::None).then_some(self.to)
    }
}

/// Drag / pinch-zoom state machine.
///
/// The state machine never clamps: transforms it returns are raw gesture
/// results which the owner corrects for its viewport.
#[derive(Clone, Debug, Default)]
pub struct GestureState {
    mode: GestureMode,
    baseline: ContentTransform,
    drag: DragTracker,
}

impl GestureState {
    /// Creates an idle state machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active mode.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Returns the transform snapshotted at the last mode change.
    #[must_use]
    pub fn baseline(&self) -> ContentTransform {
        self.baseline
    }

    /// Returns the pointer driving the current drag, if any.
    #[must_use]
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.drag.pointer
    }

    /// Switches to `mode`, snapshotting `current` as the new baseline.
    ///
    /// Switching to the mode already active is a no-op and returns `None`.
    pub fn set_mode(&mut self, mode: GestureMode, current: ContentTransform) -> Option<ModeChange> {
        if mode == self.mode {
            return None;
        }
        let change = ModeChange {
            from: self.mode,
            to: mode,
        };
        self.mode = mode;
        self.baseline = current;
        Some(change)
    }

    /// A pointer touched down: record the drag start and enter [`GestureMode::Drag`].
    ///
    /// A down during an active drag restarts it from `pos` and `current`
    /// without reporting a mode change.
    pub fn pointer_down(
        &mut self,
        pointer: PointerId,
        pos: Point,
        current: ContentTransform,
    ) -> Option<ModeChange> {
        self.drag.start(pointer, pos);
        if self.mode == GestureMode::Drag {
            self.baseline = current;
        }
        self.set_mode(GestureMode::Drag, current)
    }

    /// A pointer moved: returns the baseline translated by the total drag offset.
    ///
    /// Returns `None` outside [`GestureMode::Drag`] (moves during a pinch are
    /// handled by the pinch path) and for pointers other than the one that
    /// started the drag.
    pub fn pointer_move(&self, pointer: PointerId, pos: Point) -> Option<ContentTransform> {
        if self.mode != GestureMode::Drag {
            return None;
        }
        let offset = self.drag.total_offset(pointer, pos)?;
        Some(self.baseline.then_translate(offset))
    }

    /// A pointer lifted or the gesture was cancelled: enter [`GestureMode::None`].
    pub fn pointer_up(&mut self, current: ContentTransform) -> Option<ModeChange> {
        self.end(current)
    }

    /// A pinch was recognized: enter [`GestureMode::Zoom`], superseding any drag.
    pub fn pinch_begin(&mut self, current: ContentTransform) -> Option<ModeChange> {
        self.set_mode(GestureMode::Zoom, current)
    }

    /// A pinch progressed by `factor` about `focus` (viewport space).
    ///
    /// Returns the zoomed transform with the scale bounded to `range`, or
    /// `None` outside [`GestureMode::Zoom`] or for a degenerate factor.
    pub fn pinch_update(
        &self,
        current: ContentTransform,
        factor: f64,
        focus: Point,
        range: ZoomRange,
    ) -> Option<ContentTransform> {
        if self.mode != GestureMode::Zoom {
            return None;
        }
        apply_pinch(current, factor, focus, range)
    }

    /// The pinch ended: enter [`GestureMode::None`].
    pub fn pinch_end(&mut self, current: ContentTransform) -> Option<ModeChange> {
        self.end(current)
    }

    /// Abandons whatever gesture is active and forgets the drag pointer.
    pub fn end(&mut self, current: ContentTransform) -> Option<ModeChange> {
        self.drag.end();
        self.set_mode(GestureMode::None, current)
    }
}
