// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: remember where a single-pointer drag began and which pointer drives it.
//!
//! Offsets are always measured from the start point rather than accumulated
//! per move, so the resulting translation never drifts.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use panzoom_gesture::drag::{DragTracker, PointerId};
//!
//! let mut drag = DragTracker::default();
//! drag.start(PointerId(7), Point::new(10.0, 20.0));
//! assert!(drag.is_tracking());
//!
//! let total = drag.total_offset(PointerId(7), Point::new(15.0, 25.0));
//! assert_eq!(total, Some(Vec2::new(5.0, 5.0)));
//!
//! // Moves reported for another pointer are not ours.
//! assert_eq!(drag.total_offset(PointerId(8), Point::new(99.0, 99.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// Platform identity of a pointer (finger, pen, mouse).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// Tracks the start point and active pointer of a drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragTracker {
    /// Pointer driving the drag.
    pub pointer: Option<PointerId>,
    /// Position at which the drag started.
    pub start_pos: Option<Point>,
}

impl DragTracker {
    /// Start tracking a drag of `pointer` from `pos`, replacing any previous drag.
    pub fn start(&mut self, pointer: PointerId, pos: Point) {
        self.pointer = Some(pointer);
        self.start_pos = Some(pos);
    }

    /// Offset of `pos` from the start point, if `pointer` is the one being tracked.
    pub fn total_offset(&self, pointer: PointerId, pos: Point) -> Option<Vec2> {
        if self.pointer != Some(pointer) {
            return None;
        }
        self.start_pos.map(|start| pos - start)
    }

    /// Stop tracking and reset state.
    pub fn end(&mut self) {
        self.pointer = None;
        self.start_pos = None;
    }

    /// Returns `true` while a drag is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.start_pos.is_some()
    }
}
