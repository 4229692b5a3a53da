// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Insets, Point, Rect, Size, Vec2};

use crate::clamp::is_positive;

/// Host view geometry: the full view size and the insets that shrink it to the viewport.
///
/// Content transforms are expressed relative to the viewport, whose origin
/// sits at `(insets.x0, insets.y0)` inside the view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportLayout {
    view_size: Size,
    insets: Insets,
}

impl Default for ViewportLayout {
    fn default() -> Self {
        Self {
            view_size: Size::ZERO,
            insets: Insets::ZERO,
        }
    }
}

impl ViewportLayout {
    /// Creates a layout for a view of `view_size` with the given insets.
    #[must_use]
    pub fn new(view_size: Size, insets: Insets) -> Self {
        Self { view_size, insets }
    }

    /// Returns the full view size, insets included.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the full view size, insets included.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// Returns the insets.
    #[must_use]
    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// Sets the insets.
    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
    }

    /// Returns the viewport size: the view minus its insets.
    ///
    /// Extents never go below zero.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        Size::new(
            (self.view_size.width - self.insets.x_value()).max(0.0),
            (self.view_size.height - self.insets.y_value()).max(0.0),
        )
    }

    /// Returns the viewport rectangle in view coordinates (the draw clip).
    #[must_use]
    pub fn viewport_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin().to_point(), self.viewport_size())
    }

    /// Returns `true` once the viewport has a positive width and height.
    #[must_use]
    pub fn is_laid_out(&self) -> bool {
        is_positive(self.viewport_size())
    }

    /// Converts a view-space point (e.g. a pointer position) to viewport space.
    #[must_use]
    pub fn view_to_viewport(&self, pt: Point) -> Point {
        pt - self.origin()
    }

    /// Returns the affine that maps viewport space into view space.
    #[must_use]
    pub fn viewport_to_view(&self) -> Affine {
        Affine::translate(self.origin())
    }

    fn origin(&self) -> Vec2 {
        Vec2::new(self.insets.x0, self.insets.y0)
    }
}
