// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::clamp::is_positive;

/// Expands `rect` so that its width/height ratio matches `viewport`.
///
/// The rectangle only ever grows: a rectangle narrower than the viewport
/// ratio is widened, a wider one is made taller. Its center is preserved.
/// Degenerate inputs are returned unchanged.
#[must_use]
pub fn fit_inside_viewport(rect: Rect, viewport: Size) -> Rect {
    let (rw, rh) = (rect.width(), rect.height());
    if !(rw > 0.0 && rh > 0.0) || !is_positive(viewport) {
        return rect;
    }
    let view_ratio = viewport.width / viewport.height;
    let rect_ratio = rw / rh;
    if rect_ratio < view_ratio {
        let excess = 0.5 * (rw * (view_ratio / rect_ratio) - rw);
        Rect::new(rect.x0 - excess, rect.y0, rect.x1 + excess, rect.y1)
    } else if rect_ratio > view_ratio {
        let excess = 0.5 * (rh * (rect_ratio / view_ratio) - rh);
        Rect::new(rect.x0, rect.y0 - excess, rect.x1, rect.y1 + excess)
    } else {
        rect
    }
}

/// Returns the scale at which `content` fits entirely inside `viewport`.
///
/// Content that already fits is not magnified, so the result never exceeds
/// `1.0`. Returns `None` while either size is not positive.
#[must_use]
pub fn scale_to_fit(content: Size, viewport: Size) -> Option<f64> {
    if !is_positive(content) || !is_positive(viewport) {
        return None;
    }
    Some(
        1.0_f64
            .min(viewport.width / content.width)
            .min(viewport.height / content.height),
    )
}
