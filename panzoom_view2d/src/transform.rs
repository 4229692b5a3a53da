// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Uniform scale + translation mapping content coordinates into viewport coordinates.
///
/// The wrapped [`Affine`] always has the shape `[s, 0, 0, s, tx, ty]`: no
/// rotation, shear or independent axis stretch is ever introduced, so
/// [`ContentTransform::scale`] and [`ContentTransform::translation`] decompose
/// it exactly.
///
/// Translation is the viewport-space position of the content origin. A
/// translation of `(0, 0)` puts the content's top-left corner at the
/// viewport's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentTransform {
    affine: Affine,
}

impl Default for ContentTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ContentTransform {
    /// Unit scale, no translation.
    pub const IDENTITY: Self = Self {
        affine: Affine::IDENTITY,
    };

    /// Creates a transform from a uniform scale and a viewport-space translation.
    #[must_use]
    pub fn new(scale: f64, translation: Vec2) -> Self {
        Self {
            affine: Affine::new([scale, 0.0, 0.0, scale, translation.x, translation.y]),
        }
    }

    /// Builds the transform that shows `rect` (content coordinates) in a
    /// viewport of `viewport` size.
    ///
    /// The scale is the largest one at which the whole of `rect` still fits,
    /// `min(vw / rw, vh / rh)`, and the rectangle's top-left corner is placed
    /// at the viewport origin. Returns `None` when either size is degenerate.
    ///
    /// This is the exact inverse of [`ContentTransform::visible_rect`] for
    /// rectangles that already match the viewport's aspect ratio.
    #[must_use]
    pub fn showing(rect: Rect, viewport: Size) -> Option<Self> {
        let (rw, rh) = (rect.width(), rect.height());
        if !(rw > 0.0 && rh > 0.0 && viewport.width > 0.0 && viewport.height > 0.0) {
            return None;
        }
        let scale = (viewport.width / rw).min(viewport.height / rh);
        let affine = Affine::translate(Vec2::new(-rect.x0, -rect.y0)).then_scale(scale);
        Some(Self { affine })
    }

    /// Returns the uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.affine.as_coeffs()[0]
    }

    /// Returns the viewport-space translation of the content origin.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.affine.translation()
    }

    /// Replaces the scale, keeping the translation.
    pub fn set_scale(&mut self, scale: f64) {
        *self = Self::new(scale, self.translation());
    }

    /// Replaces the translation, keeping the scale.
    pub fn set_translation(&mut self, translation: Vec2) {
        self.affine = self.affine.with_translation(translation);
    }

    /// Returns the underlying affine transform.
    #[must_use]
    pub fn as_affine(&self) -> Affine {
        self.affine
    }

    /// Right-multiplies by `other`: the result applies `other` first, then `self`.
    #[must_use]
    pub fn compose(self, other: Self) -> Self {
        Self {
            affine: self.affine * other.affine,
        }
    }

    /// Translates the result of this transform by `delta` (viewport space).
    #[must_use]
    pub fn then_translate(self, delta: Vec2) -> Self {
        Self {
            affine: self.affine.then_translate(delta),
        }
    }

    /// Scales the result of this transform by `factor` about `pivot` (viewport space).
    ///
    /// The content point currently under `pivot` stays under `pivot`.
    #[must_use]
    pub fn then_scale_about(self, factor: f64, pivot: Point) -> Self {
        Self {
            affine: Affine::scale_about(factor, pivot) * self.affine,
        }
    }

    /// Maps a content-space point into viewport space.
    #[must_use]
    pub fn map_point(&self, pt: Point) -> Point {
        self.affine * pt
    }

    /// Maps every point in `points` from content space into viewport space, in place.
    pub fn map_points(&self, points: &mut [Point]) {
        for pt in points {
            *pt = self.affine * *pt;
        }
    }

    /// Maps a viewport-space point back into content space.
    #[must_use]
    pub fn invert_point(&self, pt: Point) -> Point {
        let scale = self.scale();
        let t = self.translation();
        Point::new((pt.x - t.x) / scale, (pt.y - t.y) / scale)
    }

    /// Returns the content-space rectangle visible through a viewport of `viewport` size.
    ///
    /// Maps the basis points `(0, 0)` and `(1, 0)`; their horizontal distance
    /// is the scale, the first is the translation. The visible origin is then
    /// `-translation / scale` and its size `viewport / scale`.
    #[must_use]
    pub fn visible_rect(&self, viewport: Size) -> Rect {
        let mut basis = [Point::ORIGIN, Point::new(1.0, 0.0)];
        self.map_points(&mut basis);
        let scale = basis[1].x - basis[0].x;
        let x = -basis[0].x / scale;
        let y = -basis[0].y / scale;
        Rect::new(
            x,
            y,
            x + viewport.width / scale,
            y + viewport.height / scale,
        )
    }
}
