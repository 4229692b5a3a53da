// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::time::Duration;

use kurbo::{Affine, Insets, Point, Rect, Size, Vec2};
use log::{debug, trace};
use panzoom_gesture::pinch::ZoomRange;
use panzoom_gesture::{GestureMode, GestureState, ModeChange};
use panzoom_timing::{RectAnimator, Timing};
use panzoom_view2d::{ContentTransform, ViewportLayout, clamp, fit_inside_viewport, scale_to_fit};
use smallvec::SmallVec;

use crate::config::{ViewConfig, ZoomLimit};
use crate::events::{Observers, ViewEvent};
use crate::input::{InputEvent, PinchEvent, PointerEvent};

/// Most notifications a [`ZoomPanView`] keeps queued between drains.
pub const MAX_QUEUED_EVENTS: usize = 64;

/// Pan, pinch-zoom and animated zoom-to-rect engine for one content surface.
///
/// `ZoomPanView` owns the live [`ContentTransform`] mapping content into the
/// viewport. Every mutation, whether from a gesture, an animation frame or
/// the public API, goes through the viewport clamp, so undersized content is
/// always centered and oversized content never uncovers space beyond its
/// edges.
///
/// The host adapter:
/// - reports layout with [`set_view_size`](Self::set_view_size) /
///   [`set_insets`](Self::set_insets) and content with
///   [`set_content_size`](Self::set_content_size);
/// - forwards input through [`handle_input`](Self::handle_input);
/// - calls [`tick`](Self::tick) once per frame while
///   [`is_animating`](Self::is_animating);
/// - draws with [`render_transform`](Self::render_transform) clipped to
///   [`viewport_rect`](Self::viewport_rect) when
///   [`take_redraw_request`](Self::take_redraw_request) says so;
/// - consumes notifications via [`drain_events`](Self::drain_events) or
///   [`dispatch_events`](Self::dispatch_events).
///
/// `K` identifies the view in emitted [`ViewEvent`]s.
///
/// Notifications queue up until drained. A host that ignores them should
/// still drain now and then; past [`MAX_QUEUED_EVENTS`] the oldest queued
/// event is dropped for each new one.
#[derive(Clone, Debug)]
pub struct ZoomPanView<K> {
    id: K,
    config: ViewConfig,
    layout: ViewportLayout,
    content: Option<Size>,
    transform: ContentTransform,
    min_zoom_cache: Option<f64>,
    max_zoom_cache: Option<f64>,
    gestures: GestureState,
    animator: RectAnimator,
    events: SmallVec<[ViewEvent<K>; 4]>,
    redraw: bool,
}

impl<K: Copy + Debug> ZoomPanView<K> {
    /// Creates a view with the default configuration.
    #[must_use]
    pub fn new(id: K) -> Self {
        Self::with_config(id, ViewConfig::default())
    }

    /// Creates a view with `config`.
    #[must_use]
    pub fn with_config(id: K, config: ViewConfig) -> Self {
        Self {
            id,
            config,
            layout: ViewportLayout::default(),
            content: None,
            transform: ContentTransform::IDENTITY,
            min_zoom_cache: None,
            max_zoom_cache: None,
            gestures: GestureState::new(),
            animator: RectAnimator::new(config.frame_interval),
            events: SmallVec::new(),
            redraw: false,
        }
    }

    /// Returns the view identity carried by emitted events.
    #[must_use]
    pub fn id(&self) -> K {
        self.id
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    // --- layout and content ---

    /// Sets the full view size (insets included).
    ///
    /// Emits [`ViewEvent::LayoutFinished`] when the size changed and both
    /// extents are positive, then re-clamps the transform.
    pub fn set_view_size(&mut self, size: Size) {
        if self.layout.view_size() == size {
            return;
        }
        self.layout.set_view_size(size);
        debug!("view {:?} resized to {}x{}", self.id, size.width, size.height);
        if size.width > 0.0 && size.height > 0.0 {
            self.emit(ViewEvent::LayoutFinished {
                view: self.id,
                size,
            });
        }
        self.set_transform(self.transform);
    }

    /// Sets the insets separating the viewport from the view bounds.
    pub fn set_insets(&mut self, insets: Insets) {
        if self.layout.insets() == insets {
            return;
        }
        self.layout.set_insets(insets);
        self.set_transform(self.transform);
    }

    /// Returns the viewport size (view size minus insets).
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.layout.viewport_size()
    }

    /// Returns the viewport rectangle in view coordinates, for clipping.
    #[must_use]
    pub fn viewport_rect(&self) -> Rect {
        self.layout.viewport_rect()
    }

    /// Sets the intrinsic size of the content.
    ///
    /// A size with a non-positive extent is treated as "no content".
    pub fn set_content_size(&mut self, size: Size) {
        let content = (size.width > 0.0 && size.height > 0.0).then_some(size);
        if self.content == content {
            return;
        }
        self.content = content;
        self.set_transform(self.transform);
    }

    /// Removes the content. Fit and zoom operations become no-ops.
    pub fn clear_content(&mut self) {
        if self.content.take().is_some() {
            self.redraw = true;
        }
    }

    /// Returns `true` when content has been set.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// Returns the intrinsic content size, if any.
    #[must_use]
    pub fn content_size(&self) -> Option<Size> {
        self.content
    }

    /// Returns the content size at the current zoom, if any.
    #[must_use]
    pub fn scaled_content_size(&self) -> Option<Size> {
        self.content.map(|c| c * self.zoom())
    }

    // --- transform queries ---

    /// Returns the content → viewport transform.
    #[must_use]
    pub fn transform(&self) -> ContentTransform {
        self.transform
    }

    /// Returns the content → view transform, insets included, for drawing.
    #[must_use]
    pub fn render_transform(&self) -> Affine {
        self.layout.viewport_to_view() * self.transform.as_affine()
    }

    /// Returns the current scale.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.transform.scale()
    }

    /// Returns the viewport-space position of the content origin.
    #[must_use]
    pub fn content_offset(&self) -> Vec2 {
        self.transform.translation()
    }

    /// Returns the content rectangle currently visible in the viewport.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        self.transform.visible_rect(self.viewport_size())
    }

    /// Maps a view-space point (e.g. a pointer position) into content space.
    #[must_use]
    pub fn view_to_content(&self, pt: Point) -> Point {
        self.transform.invert_point(self.layout.view_to_viewport(pt))
    }

    // --- zoom limits ---

    /// Replaces the minimum zoom limit.
    pub fn set_min_zoom(&mut self, limit: ZoomLimit) {
        self.config.min_zoom = limit;
        self.min_zoom_cache = None;
    }

    /// Replaces the maximum zoom limit.
    pub fn set_max_zoom(&mut self, limit: ZoomLimit) {
        self.config.max_zoom = limit;
        self.max_zoom_cache = None;
    }

    /// Returns the resolved minimum zoom.
    ///
    /// A [`ZoomLimit::Fit`] limit resolves on first use and is cached; it
    /// stays unresolved (`None`) while the view has no layout or content.
    pub fn min_zoom(&mut self) -> Option<f64> {
        let fit = self.fit_scale();
        resolve_limit(self.config.min_zoom, &mut self.min_zoom_cache, fit)
    }

    /// Returns the resolved maximum zoom. See [`min_zoom`](Self::min_zoom).
    pub fn max_zoom(&mut self) -> Option<f64> {
        let fit = self.fit_scale();
        resolve_limit(self.config.max_zoom, &mut self.max_zoom_cache, fit)
    }

    /// Sets the display density used by proportional animation timing.
    pub fn set_density(&mut self, density: f64) {
        self.config.density = density;
    }

    /// Sets the interval between animation frames, for animations started afterwards.
    ///
    /// A zero interval falls back to [`FRAME_INTERVAL`](crate::FRAME_INTERVAL).
    pub fn set_frame_interval(&mut self, interval: Duration) {
        self.config.frame_interval = interval;
        self.animator.set_frame_interval(interval);
    }

    /// Returns the interval between animation frames in use.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.animator.frame_interval()
    }

    /// Returns the scale at which the content fits the viewport (at most `1.0`).
    #[must_use]
    pub fn fit_scale(&self) -> Option<f64> {
        scale_to_fit(self.content?, self.viewport_size())
    }

    fn zoom_range(&mut self) -> Option<ZoomRange> {
        Some(ZoomRange::new(self.min_zoom()?, self.max_zoom()?))
    }

    // --- programmatic mutation ---

    /// Shows the content rectangle `rect` (content coordinates) as large as
    /// fits the viewport, without animation.
    ///
    /// Cancels any animation and ends any gesture.
    pub fn show_rect(&mut self, rect: Rect) {
        self.interrupt();
        self.apply_rect(rect);
    }

    /// Animates towards showing `rect`, starting at time `now`.
    ///
    /// The target is first widened or heightened about its center to the
    /// viewport's aspect ratio. A timing that yields no positive duration
    /// shows the target immediately without animation notifications. A
    /// pending animation is replaced without its finished notification.
    /// A rectangle without area is ignored.
    pub fn zoom_to_rect(&mut self, rect: Rect, timing: Timing, now: Duration) {
        self.interrupt();
        if !(rect.width() > 0.0 && rect.height() > 0.0) {
            trace!("view {:?} cannot zoom to degenerate {rect:?}", self.id);
            return;
        }
        if timing.is_immediate() || !self.layout.is_laid_out() {
            self.apply_rect(rect);
            return;
        }
        let from = self.visible_rect();
        let to = fit_inside_viewport(rect, self.viewport_size());
        let duration = timing.duration_for(from, to, self.config.density);
        if self.animator.start(from, to, duration, now) {
            debug!("view {:?} animating to {to:?} over {duration}s", self.id);
            self.emit(ViewEvent::AnimationStarted { view: self.id });
        } else {
            self.apply_rect(to);
        }
    }

    /// Shows the whole content immediately. No-op without content.
    pub fn zoom_to_fit(&mut self) {
        if let Some(rect) = self.content_rect() {
            self.show_rect(rect);
        }
    }

    /// Animates towards showing the whole content. No-op without content.
    pub fn zoom_to_fit_animated(&mut self, timing: Timing, now: Duration) {
        if let Some(rect) = self.content_rect() {
            self.zoom_to_rect(rect, timing, now);
        }
    }

    /// Sets the scale, keeping the translation, then clamps.
    ///
    /// The scale is bounded to the resolved zoom limits (minimum first, then
    /// maximum) when they can be resolved. Non-positive values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.interrupt();
        if !(zoom.is_finite() && zoom > 0.0) {
            trace!("view {:?} ignoring zoom {zoom}", self.id);
            return;
        }
        let zoom = match self.zoom_range() {
            Some(range) => range.bound(zoom),
            None => zoom,
        };
        let mut t = self.transform;
        t.set_scale(zoom);
        self.set_transform(t);
    }

    /// Sets the zoom to the resolved minimum zoom.
    pub fn reset_zoom(&mut self) {
        if let Some(min) = self.min_zoom() {
            self.set_zoom(min);
        }
    }

    /// Sets the viewport-space position of the content origin, then clamps.
    pub fn set_content_position(&mut self, position: Vec2) {
        self.interrupt();
        let mut t = self.transform;
        t.set_translation(position);
        self.set_transform(t);
    }

    /// Centers the content in the viewport at the current zoom. No-op without content.
    pub fn center_content(&mut self) {
        let Some(scaled) = self.scaled_content_size() else {
            return;
        };
        let viewport = self.viewport_size();
        self.set_content_position(Vec2::new(
            (viewport.width - scaled.width) / 2.0,
            (viewport.height - scaled.height) / 2.0,
        ));
    }

    // --- animation ---

    /// Runs the pending animation frame if it is due at `now`.
    ///
    /// Returns `true` when the transform changed and a redraw is needed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let Some(step) = self.animator.tick(now) else {
            return false;
        };
        self.apply_rect(step.rect);
        if step.finished {
            debug!("view {:?} animation finished", self.id);
            self.emit(ViewEvent::AnimationFinished { view: self.id });
        }
        true
    }

    /// Returns `true` while an animation is pending.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Time at which the next animation frame is due, if animating.
    #[must_use]
    pub fn next_frame_deadline(&self) -> Option<Duration> {
        self.animator.next_frame_at()
    }

    /// Stops the pending animation without a finished notification.
    ///
    /// Returns `true` if an animation was pending.
    pub fn cancel_animation(&mut self) -> bool {
        let cancelled = self.animator.cancel();
        if cancelled {
            debug!("view {:?} animation cancelled", self.id);
        }
        cancelled
    }

    // --- input ---

    /// Returns the active gesture.
    #[must_use]
    pub fn gesture_mode(&self) -> GestureMode {
        self.gestures.mode()
    }

    /// Feeds one pointer or pinch event.
    pub fn handle_input(&mut self, event: impl Into<InputEvent>) {
        match event.into() {
            InputEvent::Pointer(e) => self.handle_pointer(e),
            InputEvent::Pinch(e) => self.handle_pinch(e),
        }
    }

    /// Feeds a single-pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { pointer, position } => {
                self.begin_gesture();
                let pos = self.layout.view_to_viewport(position);
                let change = self.gestures.pointer_down(pointer, pos, self.transform);
                self.notify_mode_change(change);
            }
            PointerEvent::Move { pointer, position } => {
                let pos = self.layout.view_to_viewport(position);
                match self.gestures.pointer_move(pointer, pos) {
                    Some(t) => self.set_transform(t),
                    None => trace!("view {:?} ignoring move of {pointer:?}", self.id),
                }
            }
            PointerEvent::Up { .. } | PointerEvent::Cancel { .. } => {
                let change = self.gestures.pointer_up(self.transform);
                self.notify_mode_change(change);
            }
        }
    }

    /// Feeds a pinch detector event.
    pub fn handle_pinch(&mut self, event: PinchEvent) {
        match event {
            PinchEvent::Begin => {
                self.begin_gesture();
                let change = self.gestures.pinch_begin(self.transform);
                self.notify_mode_change(change);
            }
            PinchEvent::Update {
                scale_factor,
                focus,
            } => {
                let Some(range) = self.zoom_range() else {
                    trace!("view {:?} ignoring pinch before layout", self.id);
                    return;
                };
                let focus = self.layout.view_to_viewport(focus);
                match self
                    .gestures
                    .pinch_update(self.transform, scale_factor, focus, range)
                {
                    Some(t) => self.set_transform(t),
                    None => trace!("view {:?} ignoring pinch factor {scale_factor}", self.id),
                }
            }
            PinchEvent::End => {
                let change = self.gestures.pinch_end(self.transform);
                self.notify_mode_change(change);
            }
        }
    }

    // --- host plumbing ---

    /// Returns whether a redraw was requested since the last call, and clears the request.
    ///
    /// Any number of mutations between two calls coalesce into one request.
    pub fn take_redraw_request(&mut self) -> bool {
        core::mem::take(&mut self.redraw)
    }

    /// Removes and returns the queued notifications, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = ViewEvent<K>> + '_ {
        self.events.drain(..)
    }

    /// Delivers the queued notifications to `observers`, oldest first.
    pub fn dispatch_events(&mut self, observers: &mut Observers<K>) {
        for event in self.events.drain(..) {
            observers.notify(&event);
        }
    }

    // --- internals ---

    fn emit(&mut self, event: ViewEvent<K>) {
        if self.events.len() >= MAX_QUEUED_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    fn content_rect(&self) -> Option<Rect> {
        self.content.map(|c| Rect::from_origin_size(Point::ORIGIN, c))
    }

    /// Clamps `t` for the current content and viewport, stores it and requests a redraw.
    fn set_transform(&mut self, t: ContentTransform) {
        self.transform = clamp(t, self.content.unwrap_or(Size::ZERO), self.viewport_size());
        self.redraw = true;
    }

    fn apply_rect(&mut self, rect: Rect) {
        match ContentTransform::showing(rect, self.viewport_size()) {
            Some(t) => self.set_transform(t),
            None => trace!("view {:?} cannot show {rect:?} yet", self.id),
        }
    }

    /// Direct mutations supersede both gestures and animations.
    fn interrupt(&mut self) {
        self.cancel_animation();
        let change = self.gestures.end(self.transform);
        self.notify_mode_change(change);
    }

    fn begin_gesture(&mut self) {
        if self.config.cancel_animation_on_gesture {
            self.cancel_animation();
        }
    }

    fn notify_mode_change(&mut self, change: Option<ModeChange>) {
        let Some(change) = change else {
            return;
        };
        debug!(
            "view {:?} gesture {:?} -> {:?}",
            self.id, change.from, change.to
        );
        match change.ended() {
            Some(GestureMode::Drag) => self.emit(ViewEvent::ScrollEnded {
                view: self.id,
                offset: self.content_offset(),
            }),
            Some(GestureMode::Zoom) => self.emit(ViewEvent::ZoomEnded {
                view: self.id,
                scale: self.zoom(),
            }),
            _ => {}
        }
        match change.started() {
            Some(GestureMode::Drag) => self.emit(ViewEvent::ScrollStarted { view: self.id }),
            Some(GestureMode::Zoom) => self.emit(ViewEvent::ZoomStarted { view: self.id }),
            _ => {}
        }
    }
}

fn resolve_limit(limit: ZoomLimit, cache: &mut Option<f64>, fit: Option<f64>) -> Option<f64> {
    match limit {
        ZoomLimit::Fixed(value) => Some(value),
        ZoomLimit::Fit => {
            if cache.is_none() {
                *cache = fit;
                if let Some(scale) = fit {
                    debug!("fit zoom limit resolved to {scale}");
                }
            }
            *cache
        }
    }
}
