// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View configuration and its optional validation.

use core::fmt;
use core::time::Duration;

use panzoom_timing::FRAME_INTERVAL;

/// A zoom limit: either a fixed scale or the scale that fits the content.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoomLimit {
    /// Resolve lazily to the scale at which the content fits the viewport
    /// (never above `1.0`), then cache it.
    #[default]
    Fit,
    /// A fixed scale.
    Fixed(f64),
}

/// Which zoom limit a [`ConfigError`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomBound {
    /// The minimum zoom.
    Min,
    /// The maximum zoom.
    Max,
}

/// Configuration of a [`ZoomPanView`](crate::ZoomPanView).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewConfig {
    /// Smallest scale reachable by pinching, [`reset_zoom`](crate::ZoomPanView::reset_zoom)
    /// and [`set_zoom`](crate::ZoomPanView::set_zoom).
    pub min_zoom: ZoomLimit,
    /// Largest scale reachable by pinching and [`set_zoom`](crate::ZoomPanView::set_zoom).
    pub max_zoom: ZoomLimit,
    /// Display density (pixels per density-independent unit) used to
    /// normalize proportional animation timing.
    pub density: f64,
    /// Interval between animation frames.
    pub frame_interval: Duration,
    /// Whether a pointer-down or pinch-begin cancels an in-flight animation.
    pub cancel_animation_on_gesture: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_zoom: ZoomLimit::Fit,
            max_zoom: ZoomLimit::Fixed(f64::MAX),
            density: 1.0,
            frame_interval: FRAME_INTERVAL,
            cancel_animation_on_gesture: true,
        }
    }
}

impl ViewConfig {
    /// Sets the minimum zoom limit.
    #[must_use]
    pub fn with_min_zoom(mut self, limit: ZoomLimit) -> Self {
        self.min_zoom = limit;
        self
    }

    /// Sets the maximum zoom limit.
    #[must_use]
    pub fn with_max_zoom(mut self, limit: ZoomLimit) -> Self {
        self.max_zoom = limit;
        self
    }

    /// Sets the display density.
    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the animation frame interval.
    #[must_use]
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Sets whether starting a gesture cancels an in-flight animation.
    #[must_use]
    pub fn with_cancel_animation_on_gesture(mut self, cancel: bool) -> Self {
        self.cancel_animation_on_gesture = cancel;
        self
    }

    /// Checks the configuration for values the view cannot use sensibly.
    ///
    /// The view never calls this itself: an inconsistent configuration is
    /// the caller's responsibility and leads to unspecified (but memory-safe)
    /// zoom behavior.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (bound, limit) in [(ZoomBound::Min, self.min_zoom), (ZoomBound::Max, self.max_zoom)] {
            if let ZoomLimit::Fixed(value) = limit
                && (value.is_nan() || value <= 0.0)
            {
                return Err(ConfigError::NonPositiveZoom { bound, value });
            }
        }
        if let (ZoomLimit::Fixed(min), ZoomLimit::Fixed(max)) = (self.min_zoom, self.max_zoom)
            && min > max
        {
            return Err(ConfigError::InvertedZoomLimits { min, max });
        }
        if self.density.is_nan() || self.density <= 0.0 {
            return Err(ConfigError::NonPositiveDensity(self.density));
        }
        if self.frame_interval.is_zero() {
            return Err(ConfigError::ZeroFrameInterval);
        }
        Ok(())
    }
}

/// Error returned by [`ViewConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A fixed zoom limit is zero, negative or NaN.
    NonPositiveZoom {
        /// The offending limit.
        bound: ZoomBound,
        /// Its value.
        value: f64,
    },
    /// Both limits are fixed and the minimum exceeds the maximum.
    InvertedZoomLimits {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// The display density is zero, negative or NaN.
    NonPositiveDensity(f64),
    /// The animation frame interval is zero.
    ZeroFrameInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveZoom { bound, value } => {
                write!(f, "{bound:?} zoom must be positive, got {value}")
            }
            Self::InvertedZoomLimits { min, max } => {
                write!(f, "min zoom {min} exceeds max zoom {max}")
            }
            Self::NonPositiveDensity(density) => {
                write!(f, "display density must be positive, got {density}")
            }
            Self::ZeroFrameInterval => f.write_str("animation frame interval must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}
