// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Low-level input surface consumed by the recognizer.
//!
//! The recognizer is host-agnostic: it accepts a small semantic event
//! vocabulary rather than any particular windowing system's types. Hosts (or
//! the bundled `ui-events` adapter) translate their native events into
//! [`PointerInput`] values. Touch events carry the *full* set of concurrently
//! active contacts, each with an identifier that is stable for the lifetime
//! of that contact; the recognizer correlates pinch state by those ids.

use kurbo::{Point, Vec2};

/// Stable identifier of one touch contact, assigned by the host.
///
/// The id must not change while the contact stays down; it may be reused
/// after the contact lifts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TouchId(pub u64);

/// One active touch contact: its identifier and screen-space position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Stable identifier for this contact.
    pub id: TouchId,
    /// Current position in screen/view coordinates.
    pub position: Point,
}

impl Contact {
    /// Creates a contact.
    #[must_use]
    pub fn new(id: u64, position: Point) -> Self {
        Self {
            id: TouchId(id),
            position,
        }
    }
}

bitflags::bitflags! {
    /// Modifier keys that change how a gesture is interpreted.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        /// Shift: a click zooms out by one step instead of in.
        const SHIFT = 1 << 0;
        /// Control: wheel input rotates instead of zooming.
        const CTRL = 1 << 1;
    }
}

/// A raw input event, in screen/view coordinates.
///
/// Mouse-style interaction uses the single-pointer variants; touch
/// interaction uses the `Touch*` variants, each carrying every contact that
/// is down after the event (so `TouchEnd` carries the *remaining* contacts).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput<'a> {
    /// Primary pointer pressed.
    Down {
        /// Pointer position.
        position: Point,
        /// Modifier state at the event.
        modifiers: Modifiers,
    },
    /// Primary pointer moved (with or without a button held).
    Move {
        /// Pointer position.
        position: Point,
        /// Modifier state at the event.
        modifiers: Modifiers,
    },
    /// Primary pointer released.
    Up {
        /// Pointer position.
        position: Point,
        /// Modifier state at the event; Shift here turns a click into a
        /// zoom-out step.
        modifiers: Modifiers,
    },
    /// Pointer left the interactive surface. Cancels any in-flight gesture.
    Leave,
    /// Interaction was cancelled by the host (for example, the window lost
    /// its pointer capture). Cancels any in-flight gesture.
    Cancel,
    /// One or more touch contacts went down; `touches` is every contact now
    /// active, in the host's order.
    TouchStart {
        /// All active contacts after the event.
        touches: &'a [Contact],
    },
    /// Active touch contacts moved.
    TouchMove {
        /// All active contacts, with updated positions.
        touches: &'a [Contact],
    },
    /// One or more contacts lifted; `touches` is every contact *still*
    /// active.
    TouchEnd {
        /// The remaining active contacts.
        touches: &'a [Contact],
        /// Modifier state at the event.
        modifiers: Modifiers,
    },
    /// Wheel/scroll input, already resolved to pixel units.
    Wheel {
        /// Scroll delta in pixels; the vertical component drives zoom or
        /// rotation.
        delta: Vec2,
        /// Modifier state; Ctrl switches from zoom to rotation.
        modifiers: Modifiers,
        /// Pointer position at the event, when the host knows it.
        position: Option<Point>,
    },
    /// Trackpad magnification gesture (reported as a scale delta).
    Magnify {
        /// Magnification delta; positive spreads, negative contracts.
        delta: f64,
        /// Pointer position at the event, when the host knows it.
        position: Option<Point>,
    },
    /// Trackpad rotation gesture.
    Rotate {
        /// Rotation delta in radians.
        radians: f64,
        /// Pointer position at the event, when the host knows it.
        position: Option<Point>,
    },
}
