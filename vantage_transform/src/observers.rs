// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed change-notification registries.
//!
//! Each mutation kind (translate, scale, rotate, reset) has its own list of
//! subscribers. Subscribers are plain `FnMut` callbacks invoked synchronously,
//! in subscription order, on the call that performs the mutation. There is no
//! batching or coalescing: one mutation, one round of callbacks.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Vec2;

/// Handle identifying one registered observer.
///
/// Returned by the `on_*` registration methods on
/// [`TransformModel`](crate::TransformModel); pass it back to
/// [`TransformModel::unsubscribe`](crate::TransformModel::unsubscribe) to
/// remove that observer. Ids are unique across all notification kinds for the
/// lifetime of a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type TranslateFn = Box<dyn FnMut(Vec2)>;
type FactorFn = Box<dyn FnMut(f64)>;
type ResetFn = Box<dyn FnMut()>;

/// Per-kind subscriber lists, in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    translate: Vec<(ObserverId, TranslateFn)>,
    scale: Vec<(ObserverId, FactorFn)>,
    rotate: Vec<(ObserverId, FactorFn)>,
    reset: Vec<(ObserverId, ResetFn)>,
}

impl Observers {
    fn next_id(&mut self) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn add_translate(&mut self, f: impl FnMut(Vec2) + 'static) -> ObserverId {
        let id = self.next_id();
        self.translate.push((id, Box::new(f)));
        id
    }

    pub(crate) fn add_scale(&mut self, f: impl FnMut(f64) + 'static) -> ObserverId {
        let id = self.next_id();
        self.scale.push((id, Box::new(f)));
        id
    }

    pub(crate) fn add_rotate(&mut self, f: impl FnMut(f64) + 'static) -> ObserverId {
        let id = self.next_id();
        self.rotate.push((id, Box::new(f)));
        id
    }

    pub(crate) fn add_reset(&mut self, f: impl FnMut() + 'static) -> ObserverId {
        let id = self.next_id();
        self.reset.push((id, Box::new(f)));
        id
    }

    pub(crate) fn notify_translate(&mut self, delta: Vec2) {
        for (_, f) in &mut self.translate {
            f(delta);
        }
    }

    pub(crate) fn notify_scale(&mut self, factor: f64) {
        for (_, f) in &mut self.scale {
            f(factor);
        }
    }

    pub(crate) fn notify_rotate(&mut self, radians: f64) {
        for (_, f) in &mut self.rotate {
            f(radians);
        }
    }

    pub(crate) fn notify_reset(&mut self) {
        for (_, f) in &mut self.reset {
            f();
        }
    }

    /// Removes the observer with the given id from whichever list holds it.
    ///
    /// Returns `true` if an observer was removed.
    pub(crate) fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.translate.len() + self.scale.len() + self.rotate.len() + self.reset.len();
        self.translate.retain(|(entry, _)| *entry != id);
        self.scale.retain(|(entry, _)| *entry != id);
        self.rotate.retain(|(entry, _)| *entry != id);
        self.reset.retain(|(entry, _)| *entry != id);
        let after = self.translate.len() + self.scale.len() + self.rotate.len() + self.reset.len();
        after != before
    }

    pub(crate) fn clear(&mut self) {
        self.translate.clear();
        self.scale.clear();
        self.rotate.clear();
        self.reset.clear();
    }

    pub(crate) fn counts(&self) -> ObserverCounts {
        ObserverCounts {
            translate: self.translate.len(),
            scale: self.scale.len(),
            rotate: self.rotate.len(),
            reset: self.reset.len(),
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("translate", &self.translate.len())
            .field("scale", &self.scale.len())
            .field("rotate", &self.rotate.len())
            .field("reset", &self.reset.len())
            .finish_non_exhaustive()
    }
}

/// Number of registered observers per notification kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObserverCounts {
    /// Subscribers to translate notifications.
    pub translate: usize,
    /// Subscribers to scale notifications.
    pub scale: usize,
    /// Subscribers to rotate notifications.
    pub rotate: usize,
    /// Subscribers to reset notifications.
    pub reset: usize,
}
