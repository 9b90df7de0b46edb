// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::error::TransformError;
use crate::observers::{ObserverCounts, ObserverId, Observers};

/// Single source of truth for one surface's screen↔logical mapping.
///
/// `TransformModel` owns an affine matrix mapping logical drawing coordinates
/// to screen pixels, together with its cached inverse. Every mutation goes
/// through one of the operations below; each operation post-multiplies the
/// current matrix, so deltas are expressed in the transform's own (already
/// scaled/rotated) coordinate space.
///
/// Mutations notify typed observers synchronously, in subscription order,
/// before the mutating call returns. The silent variants perform the same
/// matrix update without notifying; they exist for composition bookkeeping
/// (such as the pivot steps of an anchored zoom) that is not a user-visible
/// change.
///
/// The inverse is rebuilt on every mutation and is therefore always safe to
/// read between events; it is never cached across mutations.
///
/// # Example
///
/// ```rust
/// use kurbo::{Point, Vec2};
/// use vantage_transform::TransformModel;
///
/// let mut model = TransformModel::new();
/// model.translate(Vec2::new(50.0, 20.0)).unwrap();
///
/// // Screen-space points convert through the inverse into logical space.
/// let logical = model.transform_point(Point::new(50.0, 20.0));
/// assert!((logical.x).abs() < 1e-12);
/// assert!((logical.y).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct TransformModel {
    matrix: Affine,
    inverse: Affine,
    observers: Observers,
}

impl Default for TransformModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformModel {
    /// Creates a model holding the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            matrix: Affine::IDENTITY,
            inverse: Affine::IDENTITY,
            observers: Observers::default(),
        }
    }

    /// Returns the current logical→screen matrix.
    #[must_use]
    pub fn matrix(&self) -> Affine {
        self.matrix
    }

    /// Returns the current screen→logical matrix.
    #[must_use]
    pub fn inverse(&self) -> Affine {
        self.inverse
    }

    /// Converts a screen-space point into the transform's logical space.
    ///
    /// This is the single mechanism by which gesture positions enter logical
    /// coordinates; it always reflects the latest mutation.
    #[must_use]
    pub fn transform_point(&self, screen: Point) -> Point {
        self.inverse * screen
    }

    /// Translates by `delta`, expressed in logical (transform-space) units,
    /// and notifies translate observers with the delta.
    pub fn translate(&mut self, delta: Vec2) -> Result<(), TransformError> {
        self.apply_translate(delta)?;
        self.observers.notify_translate(delta);
        Ok(())
    }

    /// Translates by `delta` without notifying observers.
    pub fn translate_silent(&mut self, delta: Vec2) -> Result<(), TransformError> {
        self.apply_translate(delta)
    }

    /// Scales uniformly by `factor` about the logical origin and notifies
    /// scale observers with the factor.
    ///
    /// Zero and non-finite factors are rejected; they would make the matrix
    /// non-invertible.
    pub fn scale(&mut self, factor: f64) -> Result<(), TransformError> {
        check_factor(factor)?;
        self.matrix *= Affine::scale(factor);
        self.rebuild_inverse();
        self.observers.notify_scale(factor);
        Ok(())
    }

    /// Scales uniformly by `factor` about `pivot` (a logical-space point) and
    /// notifies scale observers with the factor.
    ///
    /// This composes translate-to-pivot, scale, translate-back in one step;
    /// only the scale is user-visible, so only scale observers fire. This is
    /// the anchoring sequence every focal-point zoom uses.
    pub fn scale_about(&mut self, factor: f64, pivot: Point) -> Result<(), TransformError> {
        check_factor(factor)?;
        if !pivot.is_finite() {
            return Err(TransformError::NonFinite);
        }
        self.matrix *= Affine::translate(pivot.to_vec2())
            * Affine::scale(factor)
            * Affine::translate(-pivot.to_vec2());
        self.rebuild_inverse();
        self.observers.notify_scale(factor);
        Ok(())
    }

    /// Rotates by `radians` about the logical origin and notifies rotate
    /// observers with the angle.
    pub fn rotate(&mut self, radians: f64) -> Result<(), TransformError> {
        if !radians.is_finite() {
            return Err(TransformError::NonFinite);
        }
        self.matrix *= Affine::rotate(radians);
        self.rebuild_inverse();
        self.observers.notify_rotate(radians);
        Ok(())
    }

    /// Replaces the matrix with the identity and notifies reset observers.
    ///
    /// Consumers observing reset must re-derive any cached screen↔logical
    /// mapping of their own.
    pub fn reset(&mut self) {
        self.matrix = Affine::IDENTITY;
        self.inverse = Affine::IDENTITY;
        self.observers.notify_reset();
    }

    /// Registers an observer for translate notifications.
    pub fn on_translate(&mut self, f: impl FnMut(Vec2) + 'static) -> ObserverId {
        self.observers.add_translate(f)
    }

    /// Registers an observer for scale notifications.
    pub fn on_scale(&mut self, f: impl FnMut(f64) + 'static) -> ObserverId {
        self.observers.add_scale(f)
    }

    /// Registers an observer for rotate notifications (angle in radians).
    pub fn on_rotate(&mut self, f: impl FnMut(f64) + 'static) -> ObserverId {
        self.observers.add_rotate(f)
    }

    /// Registers an observer for reset notifications.
    pub fn on_reset(&mut self, f: impl FnMut() + 'static) -> ObserverId {
        self.observers.add_reset(f)
    }

    /// Removes one observer. Returns `true` if it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    /// Removes every registered observer.
    ///
    /// Detaching consumers this way leaves the matrix untouched; later
    /// mutations simply notify nobody.
    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    /// Snapshot of the current model state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TransformDebugInfo {
        TransformDebugInfo {
            matrix: self.matrix,
            inverse: self.inverse,
            observers: self.observers.counts(),
        }
    }

    fn apply_translate(&mut self, delta: Vec2) -> Result<(), TransformError> {
        if !delta.is_finite() {
            return Err(TransformError::NonFinite);
        }
        self.matrix *= Affine::translate(delta);
        self.rebuild_inverse();
        Ok(())
    }

    fn rebuild_inverse(&mut self) {
        self.inverse = self.matrix.inverse();
    }
}

fn check_factor(factor: f64) -> Result<(), TransformError> {
    if !factor.is_finite() {
        return Err(TransformError::NonFinite);
    }
    if factor == 0.0 {
        return Err(TransformError::ZeroScale);
    }
    Ok(())
}

/// Debug snapshot of a [`TransformModel`] state.
#[derive(Clone, Copy, Debug)]
pub struct TransformDebugInfo {
    /// Current logical→screen matrix.
    pub matrix: Affine,
    /// Current screen→logical matrix.
    pub inverse: Affine,
    /// Registered observers per notification kind.
    pub observers: ObserverCounts,
}
