// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient per-interaction gesture state.
//!
//! A session lives from the first contact going down to the last one lifting
//! (or a cancel). It tracks just enough to disambiguate a drag-pan from a
//! click and to correlate the two contacts of a pinch; nothing here is ever
//! persisted.

use kurbo::Point;
use smallvec::SmallVec;

use crate::input::{Contact, TouchId};

/// Snapshot of the contacts that started a pinch, plus distance tracking.
#[derive(Clone, Debug, Default)]
pub(crate) struct PinchCache {
    /// Contact ids and their *original* screen positions, in arrival order.
    origins: SmallVec<[(TouchId, Point); 2]>,
    /// Inter-contact distance at the previous pinch frame; `0.0` means no
    /// frame has been measured yet.
    pub(crate) last_distance: f64,
}

impl PinchCache {
    /// Snapshots the given contacts as the pinch origin set.
    pub(crate) fn seed(touches: &[Contact]) -> Self {
        Self {
            origins: touches.iter().map(|c| (c.id, c.position)).collect(),
            last_distance: 0.0,
        }
    }

    /// Original screen position of the contact with the given id.
    pub(crate) fn origin(&self, id: TouchId) -> Option<Point> {
        self.origins
            .iter()
            .find(|(cached, _)| *cached == id)
            .map(|(_, position)| *position)
    }

    /// Replaces the origin set with the current contacts and restarts
    /// distance tracking.
    ///
    /// Used when the cached ids no longer match any live contact (a finger
    /// was swapped mid-pinch); the frame that discovers the mismatch is a
    /// no-op and tracking re-seeds here.
    pub(crate) fn reseed(&mut self, touches: &[Contact]) {
        self.origins = touches.iter().map(|c| (c.id, c.position)).collect();
        self.last_distance = 0.0;
    }
}

/// Per-interaction state owned by the recognizer.
#[derive(Clone, Debug, Default)]
pub(crate) struct GestureSession {
    /// Pan anchor in *logical* (transform-space) coordinates; `Some` while a
    /// pan session is active.
    pub(crate) pan_start: Option<Point>,
    /// Whether this interaction produced any movement. A release with this
    /// flag clear is a click.
    pub(crate) panned: bool,
    /// Pinch tracking; `Some` while two or more contacts are down.
    pub(crate) pinch: Option<PinchCache>,
}

impl GestureSession {
    /// Returns the session to idle, dropping all cached pan and pinch state.
    pub(crate) fn clear(&mut self) {
        self.pan_start = None;
        self.panned = false;
        self.pinch = None;
    }

    /// `true` while any gesture (pan or pinch) is in flight.
    pub(crate) fn is_active(&self) -> bool {
        self.pan_start.is_some() || self.pinch.is_some()
    }
}
