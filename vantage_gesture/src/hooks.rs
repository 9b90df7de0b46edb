// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional high-level callbacks for the embedding application.
//!
//! The transform model already notifies its own observers of every mutation;
//! these hooks sit one level up and report *gestures*: pan and pinch
//! lifecycle, the zoom steps a gesture produced, wheel-driven rotation, and
//! the pointer's position in logical coordinates. Every slot is optional —
//! an empty `GestureHooks` is free.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;

type PointHook = Box<dyn FnMut(Point)>;
type ZoomHook = Box<dyn FnMut(f64, Point)>;
type AngleHook = Box<dyn FnMut(f64)>;

/// Callback slots invoked as gestures are recognized.
///
/// Built fluently:
///
/// ```rust
/// use vantage_gesture::GestureHooks;
///
/// let hooks = GestureHooks::new()
///     .on_zoom(|factor, pivot| {
///         let _ = (factor, pivot);
///     })
///     .on_coordinates(|logical| {
///         let _ = logical;
///     });
/// ```
#[derive(Default)]
pub struct GestureHooks {
    pan_start: Option<PointHook>,
    pan: Option<PointHook>,
    pan_end: Option<PointHook>,
    pinch_start: Option<PointHook>,
    pinch: Option<PointHook>,
    pinch_end: Option<PointHook>,
    zoom: Option<ZoomHook>,
    rotate: Option<AngleHook>,
    coordinates: Option<PointHook>,
}

impl GestureHooks {
    /// Creates an empty hook set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when a pan session begins, with the screen position.
    #[must_use]
    pub fn on_pan_start(mut self, f: impl FnMut(Point) + 'static) -> Self {
        self.pan_start = Some(Box::new(f));
        self
    }

    /// Called on every pan movement, with the screen position.
    #[must_use]
    pub fn on_pan(mut self, f: impl FnMut(Point) + 'static) -> Self {
        self.pan = Some(Box::new(f));
        self
    }

    /// Called when a pan session ends (whether it panned or clicked), with
    /// the last screen position.
    #[must_use]
    pub fn on_pan_end(mut self, f: impl FnMut(Point) + 'static) -> Self {
        self.pan_end = Some(Box::new(f));
        self
    }

    /// Called when a second contact starts a pinch, with the screen position.
    #[must_use]
    pub fn on_pinch_start(mut self, f: impl FnMut(Point) + 'static) -> Self {
        self.pinch_start = Some(Box::new(f));
        self
    }

    /// Called on every pinch update, with the contact midpoint in screen
    /// coordinates.
    #[must_use]
    pub fn on_pinch(mut self, f: impl FnMut(Point) + 'static) -> Self {
        self.pinch = Some(Box::new(f));
        self
    }

    /// Called when the pinch ends, with the last screen position.
    #[must_use]
    pub fn on_pinch_end(mut self, f: impl FnMut(Point) + 'static) -> Self {
        self.pinch_end = Some(Box::new(f));
        self
    }

    /// Called after each zoom step with the applied scale factor and the
    /// pivot in logical coordinates.
    #[must_use]
    pub fn on_zoom(mut self, f: impl FnMut(f64, Point) + 'static) -> Self {
        self.zoom = Some(Box::new(f));
        self
    }

    /// Called after each wheel-driven rotation with the angle in radians.
    #[must_use]
    pub fn on_rotate(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.rotate = Some(Box::new(f));
        self
    }

    /// Called whenever the pointer position updates, with the position in
    /// logical (transform-space) coordinates.
    #[must_use]
    pub fn on_coordinates(mut self, f: impl FnMut(Point) + 'static) -> Self {
        self.coordinates = Some(Box::new(f));
        self
    }

    pub(crate) fn emit_pan_start(&mut self, position: Point) {
        if let Some(f) = &mut self.pan_start {
            f(position);
        }
    }

    pub(crate) fn emit_pan(&mut self, position: Point) {
        if let Some(f) = &mut self.pan {
            f(position);
        }
    }

    pub(crate) fn emit_pan_end(&mut self, position: Point) {
        if let Some(f) = &mut self.pan_end {
            f(position);
        }
    }

    pub(crate) fn emit_pinch_start(&mut self, position: Point) {
        if let Some(f) = &mut self.pinch_start {
            f(position);
        }
    }

    pub(crate) fn emit_pinch(&mut self, position: Point) {
        if let Some(f) = &mut self.pinch {
            f(position);
        }
    }

    pub(crate) fn emit_pinch_end(&mut self, position: Point) {
        if let Some(f) = &mut self.pinch_end {
            f(position);
        }
    }

    pub(crate) fn emit_zoom(&mut self, factor: f64, pivot: Point) {
        if let Some(f) = &mut self.zoom {
            f(factor, pivot);
        }
    }

    pub(crate) fn emit_rotate(&mut self, radians: f64) {
        if let Some(f) = &mut self.rotate {
            f(radians);
        }
    }

    pub(crate) fn emit_coordinates(&mut self, logical: Point) {
        if let Some(f) = &mut self.coordinates {
            f(logical);
        }
    }
}

impl fmt::Debug for GestureHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn slot<T>(hook: &Option<T>) -> &'static str {
            if hook.is_some() { "<hook>" } else { "unset" }
        }
        f.debug_struct("GestureHooks")
            .field("pan_start", &slot(&self.pan_start))
            .field("pan", &slot(&self.pan))
            .field("pan_end", &slot(&self.pan_end))
            .field("pinch_start", &slot(&self.pinch_start))
            .field("pinch", &slot(&self.pinch))
            .field("pinch_end", &slot(&self.pinch_end))
            .field("zoom", &slot(&self.zoom))
            .field("rotate", &slot(&self.rotate))
            .field("coordinates", &slot(&self.coordinates))
            .finish()
    }
}
