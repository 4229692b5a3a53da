// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport clamping: keep content centered or edge-bounded inside the viewport.
//!
//! Each axis is corrected independently:
//!
//! - When the scaled content is smaller than the viewport, it is centered:
//!   `translate = (viewport - scaled) / 2`.
//! - Otherwise the translation is clamped to `[viewport - scaled, 0]`, so no
//!   space beyond the content edges is ever revealed.
//!
//! [`clamp`] is idempotent: clamping an already clamped transform returns it
//! unchanged.

use kurbo::{Size, Vec2};

use crate::ContentTransform;

/// Corrects a single axis translation.
///
/// `scaled_extent` is the content extent after scaling; `viewport_extent` is
/// the visible extent along the same axis.
#[must_use]
pub fn clamp_axis(translate: f64, scaled_extent: f64, viewport_extent: f64) -> f64 {
    if viewport_extent > scaled_extent {
        (viewport_extent - scaled_extent) / 2.0
    } else {
        translate.max(viewport_extent - scaled_extent).min(0.0)
    }
}

/// Returns `transform` with its translation corrected for `content` shown in `viewport`.
///
/// The scale is never changed. While either size has a non-positive extent
/// (nothing laid out yet, or no content) the transform is returned as is.
#[must_use]
pub fn clamp(transform: ContentTransform, content: Size, viewport: Size) -> ContentTransform {
    if !is_positive(content) || !is_positive(viewport) {
        return transform;
    }
    let scale = transform.scale();
    let t = transform.translation();
    let x = clamp_axis(t.x, scale * content.width, viewport.width);
    let y = clamp_axis(t.y, scale * content.height, viewport.height);
    let mut out = transform;
    out.set_translation(Vec2::new(x, y));
    out
}

/// Returns `true` when both extents of `size` are strictly positive.
#[must_use]
pub fn is_positive(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0
}
