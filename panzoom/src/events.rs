// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications emitted by a [`ZoomPanView`](crate::ZoomPanView) and an
//! optional observer registry to deliver them.
//!
//! The view only queues [`ViewEvent`]s. Hosts either drain them directly with
//! [`ZoomPanView::drain_events`](crate::ZoomPanView::drain_events) and match
//! on them, or register handlers per [`ViewEventKind`] in an [`Observers`]
//! registry and hand it to
//! [`ZoomPanView::dispatch_events`](crate::ZoomPanView::dispatch_events).
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use panzoom::{Observers, ViewEvent, ViewEventKind};
//!
//! let zooms = Rc::new(Cell::new(0));
//! let mut observers = Observers::<u32>::new();
//! let counter = zooms.clone();
//! observers.subscribe(ViewEventKind::ZoomEnded, move |_| counter.set(counter.get() + 1));
//!
//! observers.notify(&ViewEvent::ZoomStarted { view: 1 });
//! observers.notify(&ViewEvent::ZoomEnded { view: 1, scale: 2.0 });
//! assert_eq!(zooms.get(), 1);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::{Size, Vec2};

/// A notification about a gesture, animation or layout boundary of view `K`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewEvent<K> {
    /// A drag gesture started.
    ScrollStarted {
        /// Source view.
        view: K,
    },
    /// A drag gesture ended.
    ScrollEnded {
        /// Source view.
        view: K,
        /// Content translation when the drag ended.
        offset: Vec2,
    },
    /// A pinch-zoom gesture started.
    ZoomStarted {
        /// Source view.
        view: K,
    },
    /// A pinch-zoom gesture ended.
    ZoomEnded {
        /// Source view.
        view: K,
        /// Content scale when the pinch ended.
        scale: f64,
    },
    /// An animated zoom started.
    AnimationStarted {
        /// Source view.
        view: K,
    },
    /// An animated zoom reached its target. Not sent for superseded or
    /// cancelled animations.
    AnimationFinished {
        /// Source view.
        view: K,
    },
    /// The view received a size with positive width and height.
    LayoutFinished {
        /// Source view.
        view: K,
        /// New view size, insets included.
        size: Size,
    },
}

impl<K> ViewEvent<K> {
    /// Returns the kind of this event.
    #[must_use]
    pub fn kind(&self) -> ViewEventKind {
        match self {
            Self::ScrollStarted { .. } => ViewEventKind::ScrollStarted,
            Self::ScrollEnded { .. } => ViewEventKind::ScrollEnded,
            Self::ZoomStarted { .. } => ViewEventKind::ZoomStarted,
            Self::ZoomEnded { .. } => ViewEventKind::ZoomEnded,
            Self::AnimationStarted { .. } => ViewEventKind::AnimationStarted,
            Self::AnimationFinished { .. } => ViewEventKind::AnimationFinished,
            Self::LayoutFinished { .. } => ViewEventKind::LayoutFinished,
        }
    }

    /// Returns the view the event came from.
    #[must_use]
    pub fn view(&self) -> &K {
        match self {
            Self::ScrollStarted { view }
            | Self::ScrollEnded { view, .. }
            | Self::ZoomStarted { view }
            | Self::ZoomEnded { view, .. }
            | Self::AnimationStarted { view }
            | Self::AnimationFinished { view }
            | Self::LayoutFinished { view, .. } => view,
        }
    }
}

/// Discriminant of a [`ViewEvent`], used as a subscription key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewEventKind {
    /// See [`ViewEvent::ScrollStarted`].
    ScrollStarted,
    /// See [`ViewEvent::ScrollEnded`].
    ScrollEnded,
    /// See [`ViewEvent::ZoomStarted`].
    ZoomStarted,
    /// See [`ViewEvent::ZoomEnded`].
    ZoomEnded,
    /// See [`ViewEvent::AnimationStarted`].
    AnimationStarted,
    /// See [`ViewEvent::AnimationFinished`].
    AnimationFinished,
    /// See [`ViewEvent::LayoutFinished`].
    LayoutFinished,
}

/// Handle returned by [`Observers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Handler<K> = Box<dyn FnMut(&ViewEvent<K>)>;

/// Registry mapping each [`ViewEventKind`] to zero or more handlers.
///
/// Handlers for one kind run in subscription order.
pub struct Observers<K> {
    next_id: u64,
    handlers: HashMap<ViewEventKind, Vec<(ObserverId, Handler<K>)>>,
}

impl<K> Default for Observers<K> {
    fn default() -> Self {
        Self {
            next_id: 0,
            handlers: HashMap::new(),
        }
    }
}

impl<K> fmt::Debug for Observers<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("next_id", &self.next_id)
            .field("handlers", &self.len())
            .finish_non_exhaustive()
    }
}

impl<K> Observers<K> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for events of `kind`.
    pub fn subscribe(
        &mut self,
        kind: ViewEventKind,
        handler: impl FnMut(&ViewEvent<K>) + 'static,
    ) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.handlers
            .entry(kind)
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Removes the handler registered under `id`. Returns `true` if it existed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        for list in self.handlers.values_mut() {
            if let Some(pos) = list.iter().position(|(h, _)| *h == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    /// Delivers `event` to every handler of its kind; returns how many ran.
    pub fn notify(&mut self, event: &ViewEvent<K>) -> usize {
        let Some(list) = self.handlers.get_mut(&event.kind()) else {
            return 0;
        };
        for (_, handler) in list.iter_mut() {
            handler(event);
        }
        list.len()
    }

    /// Total number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    /// Returns `true` when no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
