// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::Rect;

/// Default frame interval: 60 frames per second.
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Linearly interpolates each edge of `from` towards `to` by `a` in `[0, 1]`.
#[must_use]
pub fn lerp_rect(from: Rect, to: Rect, a: f64) -> Rect {
    Rect::new(
        from.x0 + a * (to.x0 - from.x0),
        from.y0 + a * (to.y0 - from.y0),
        from.x1 + a * (to.x1 - from.x1),
        from.y1 + a * (to.y1 - from.y1),
    )
}

/// Result of advancing an animation by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStep {
    /// Rectangle to show for this frame.
    pub rect: Rect,
    /// `true` on the frame that reached the full duration.
    pub finished: bool,
}

/// One in-flight interpolation between two content rectangles.
///
/// Time is supplied by the host as a monotonic timestamp (any epoch).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectAnimation {
    from: Rect,
    to: Rect,
    duration: f64,
    elapsed: f64,
    last_frame: Duration,
    frame_interval: Duration,
}

impl RectAnimation {
    /// Starts an animation of `duration` seconds at time `now`.
    ///
    /// Returns `None` for a non-positive or non-finite duration. A zero
    /// `frame_interval` falls back to [`FRAME_INTERVAL`].
    #[must_use]
    pub fn new(
        from: Rect,
        to: Rect,
        duration: f64,
        now: Duration,
        frame_interval: Duration,
    ) -> Option<Self> {
        if !(duration.is_finite() && duration > 0.0) {
            return None;
        }
        Some(Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            last_frame: now,
            frame_interval: usable_interval(frame_interval),
        })
    }

    /// Start rectangle.
    #[must_use]
    pub fn from(&self) -> Rect {
        self.from
    }

    /// Target rectangle.
    #[must_use]
    pub fn to(&self) -> Rect {
        self.to
    }

    /// Total duration in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Elapsed animation time in seconds, never more than [`RectAnimation::duration`].
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Time at which the next frame is due.
    #[must_use]
    pub fn next_frame_at(&self) -> Duration {
        self.last_frame + self.frame_interval
    }

    /// Advances to time `now` and returns the rectangle for this frame.
    ///
    /// The time step is the real time since the previous frame, capped at two
    /// frame intervals so a stall cannot jump the animation forward.
    pub fn advance(&mut self, now: Duration) -> FrameStep {
        let since = now.saturating_sub(self.last_frame);
        let dt = since.min(self.frame_interval * 2).as_secs_f64();
        self.elapsed += dt;
        let finished = self.elapsed >= self.duration;
        if finished {
            self.elapsed = self.duration;
        } else {
            self.last_frame = now;
        }
        let a = self.elapsed / self.duration;
        FrameStep {
            rect: lerp_rect(self.from, self.to, a),
            finished,
        }
    }
}

/// Owner of at most one pending animation: the single logical frame timer.
///
/// Starting a new animation replaces the pending one; its frames simply stop.
#[derive(Clone, Debug)]
pub struct RectAnimator {
    active: Option<RectAnimation>,
    frame_interval: Duration,
}

impl Default for RectAnimator {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL)
    }
}

impl RectAnimator {
    /// Creates an idle animator scheduling frames every `frame_interval`.
    ///
    /// A zero interval falls back to [`FRAME_INTERVAL`].
    #[must_use]
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            active: None,
            frame_interval: usable_interval(frame_interval),
        }
    }

    /// Returns the frame interval.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Sets the frame interval used by animations started afterwards.
    ///
    /// A zero interval falls back to [`FRAME_INTERVAL`].
    pub fn set_frame_interval(&mut self, interval: Duration) {
        self.frame_interval = usable_interval(interval);
    }

    /// Starts animating from `from` to `to` over `duration` seconds.
    ///
    /// Any pending animation is dropped. Returns `false` (and leaves the
    /// animator idle) when the duration is not positive.
    pub fn start(&mut self, from: Rect, to: Rect, duration: f64, now: Duration) -> bool {
        self.active = RectAnimation::new(from, to, duration, now, self.frame_interval);
        self.active.is_some()
    }

    /// Drops the pending animation. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Returns `true` while an animation is pending.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the pending animation, if any.
    #[must_use]
    pub fn current(&self) -> Option<&RectAnimation> {
        self.active.as_ref()
    }

    /// Time at which the next frame is due, if an animation is pending.
    #[must_use]
    pub fn next_frame_at(&self) -> Option<Duration> {
        self.active.as_ref().map(RectAnimation::next_frame_at)
    }

    /// Runs the pending frame if it is due at `now`.
    ///
    /// Returns `None` when idle or when called before the frame is due. The
    /// animation is dropped after its finishing frame.
    pub fn tick(&mut self, now: Duration) -> Option<FrameStep> {
        let anim = self.active.as_mut()?;
        if now < anim.next_frame_at() {
            return None;
        }
        let step = anim.advance(now);
        if step.finished {
            self.active = None;
        }
        Some(step)
    }
}

/// Zero would cap every time step at zero.
fn usable_interval(interval: Duration) -> Duration {
    if interval.is_zero() {
        FRAME_INTERVAL
    } else {
        interval
    }
}
