// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Vec2};

/// Slow per-unit-distance coefficient for [`Timing::Proportional`].
pub const SLOW: f64 = 0.01;

/// Fast per-unit-distance coefficient for [`Timing::Proportional`].
pub const FAST: f64 = 0.001;

/// How the duration of a zoom animation is chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// Absolute duration in seconds.
    Duration(f64),
    /// Seconds per unit of density-normalized distance between the start and
    /// target rectangles. See [`SLOW`] and [`FAST`].
    Proportional(f64),
}

impl Timing {
    /// Returns `true` when the timing value is not positive, meaning the
    /// change should be applied immediately instead of animated.
    #[must_use]
    pub fn is_immediate(&self) -> bool {
        let value = match *self {
            Self::Duration(v) | Self::Proportional(v) => v,
        };
        value.is_nan() || value <= 0.0
    }

    /// Computes the animation duration in seconds for moving from `from` to `to`.
    ///
    /// Proportional timing measures the Euclidean distance between the two
    /// rectangles in (left, top, width) space and divides it by `density`,
    /// the display's pixels-per-unit factor, so the same coefficient feels the
    /// same on screens of different pixel density. A non-positive density is
    /// treated as `1.0`.
    #[must_use]
    pub fn duration_for(&self, from: Rect, to: Rect, density: f64) -> f64 {
        match *self {
            Self::Duration(seconds) => seconds,
            Self::Proportional(coefficient) => {
                let density = if density > 0.0 { density } else { 1.0 };
                let dx = to.x0 - from.x0;
                let dy = to.y0 - from.y0;
                let ds = to.width() - from.width();
                let planar = Vec2::new(dx, dy).hypot();
                coefficient * Vec2::new(planar, ds).hypot() / density
            }
        }
    }
}
