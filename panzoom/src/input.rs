// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform input consumed by a [`ZoomPanView`](crate::ZoomPanView).
//!
//! Positions are in view coordinates (insets included); the view converts
//! them to viewport coordinates itself.

use kurbo::Point;
pub use panzoom_gesture::drag::PointerId;

/// Single-pointer input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// First contact touched down.
    Down {
        /// Pointer identity.
        pointer: PointerId,
        /// Contact position.
        position: Point,
    },
    /// A contact moved.
    Move {
        /// Pointer identity.
        pointer: PointerId,
        /// Contact position.
        position: Point,
    },
    /// A contact lifted.
    Up {
        /// Pointer identity.
        pointer: PointerId,
    },
    /// The platform cancelled the interaction.
    Cancel {
        /// Pointer identity.
        pointer: PointerId,
    },
}

/// Output of the platform's pinch detector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchEvent {
    /// A second contact was recognized as a pinch.
    Begin,
    /// The pinch changed scale by `scale_factor` (relative to the previous
    /// update) about `focus`.
    Update {
        /// Scale change since the previous update.
        scale_factor: f64,
        /// Focal point between the contacts.
        focus: Point,
    },
    /// The pinch ended.
    End,
}

/// Either kind of input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Single-pointer input.
    Pointer(PointerEvent),
    /// Pinch detector output.
    Pinch(PinchEvent),
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}

impl From<PinchEvent> for InputEvent {
    fn from(event: PinchEvent) -> Self {
        Self::Pinch(event)
    }
}
