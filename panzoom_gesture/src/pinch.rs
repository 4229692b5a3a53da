// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch-zoom math: bound a scale delta and apply it about the focal point.

use kurbo::Point;
use panzoom_view2d::ContentTransform;

/// Resolved zoom limits.
///
/// `min <= max` is a caller precondition; it is not checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomRange {
    /// Smallest allowed scale.
    pub min: f64,
    /// Largest allowed scale.
    pub max: f64,
}

impl ZoomRange {
    /// Creates a range from resolved limits.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Bounds `scale` into the range, applying the minimum first and the maximum second.
    #[must_use]
    pub fn bound(&self, scale: f64) -> f64 {
        scale.max(self.min).min(self.max)
    }
}

/// Clips a pinch scale delta so that `current * factor` stays within `range`.
///
/// A product below the minimum yields `min / current`; one above the
/// maximum yields `max / current`. The minimum is checked first.
#[must_use]
pub fn clip_pinch_factor(current: f64, factor: f64, range: ZoomRange) -> f64 {
    let new_scale = current * factor;
    if new_scale < range.min {
        range.min / current
    } else if new_scale > range.max {
        range.max / current
    } else {
        factor
    }
}

/// Applies a clipped pinch delta to `current`, pivoting about `focus` (viewport space).
///
/// Returns `None` for a non-positive or non-finite `factor`. The result is not
/// clamped to the viewport.
#[must_use]
pub fn apply_pinch(
    current: ContentTransform,
    factor: f64,
    focus: Point,
    range: ZoomRange,
) -> Option<ContentTransform> {
    if !(factor.is_finite() && factor > 0.0) {
        return None;
    }
    let factor = clip_pinch_factor(current.scale(), factor, range);
    Some(current.then_scale_about(factor, focus))
}
