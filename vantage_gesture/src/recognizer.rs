// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use vantage_transform::TransformModel;

use crate::config::{ConfigError, GestureConfig};
use crate::hooks::GestureHooks;
use crate::input::{Contact, Modifiers, PointerInput};
use crate::session::{GestureSession, PinchCache};

/// Raw wheel deltas arrive in DOM-style pixel units; dividing by this turns
/// them into click-sized steps before sensitivity scaling and clamping.
const WHEEL_DIVISOR: f64 = 10.0;

/// Classifies raw pointer/touch/wheel input into pan, pinch-zoom, click-zoom,
/// wheel-zoom, and wheel-rotate gestures, and drives a [`TransformModel`].
///
/// The recognizer owns only interaction state (the current session, the
/// running zoom level, the last pointer position). The transform model it
/// drives is passed explicitly into every [`handle_input`] call, so each
/// rendering surface owns its model and any number of recognizers can exist
/// side by side without shared state.
///
/// [`handle_input`]: GestureRecognizer::handle_input
///
/// # Example
///
/// ```rust
/// use kurbo::{Point, Size};
/// use vantage_gesture::{GestureConfig, GestureRecognizer, Modifiers, PointerInput};
/// use vantage_transform::TransformModel;
///
/// let mut model = TransformModel::new();
/// let mut recognizer = GestureRecognizer::new(GestureConfig::default())
///     .unwrap()
///     .with_view_size(Size::new(800.0, 600.0));
///
/// // A drag from (100, 100) to (150, 120) pans the canvas.
/// recognizer.handle_input(
///     PointerInput::Down { position: Point::new(100.0, 100.0), modifiers: Modifiers::empty() },
///     &mut model,
/// );
/// recognizer.handle_input(
///     PointerInput::Move { position: Point::new(150.0, 120.0), modifiers: Modifiers::empty() },
///     &mut model,
/// );
/// recognizer.handle_input(
///     PointerInput::Up { position: Point::new(150.0, 120.0), modifiers: Modifiers::empty() },
///     &mut model,
/// );
/// ```
#[derive(Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    hooks: GestureHooks,
    view_size: Size,
    zoom_level: f64,
    position: Option<Point>,
    session: GestureSession,
}

impl GestureRecognizer {
    /// Creates a recognizer from a validated configuration.
    ///
    /// The configuration is checked once here and applies for the lifetime
    /// of the recognizer; it is not hot-reloadable mid-gesture.
    pub fn new(config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            hooks: GestureHooks::default(),
            view_size: Size::ZERO,
            zoom_level: 0.0,
            position: None,
            session: GestureSession::default(),
        })
    }

    /// Attaches application hooks.
    #[must_use]
    pub fn with_hooks(mut self, hooks: GestureHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Sets the interactive surface's size at construction time.
    #[must_use]
    pub fn with_view_size(mut self, size: Size) -> Self {
        self.view_size = size;
        self
    }

    /// Updates the interactive surface's size.
    ///
    /// The height converts wheel-rotate deltas into angles; until a non-empty
    /// size is supplied, wheel rotation is a no-op.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// Returns the interactive surface's size.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Returns the recognizer's configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns the running zoom level (net clicks since the last reset).
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    /// `true` while a single-contact pan session is in flight.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.session.pan_start.is_some()
    }

    /// `true` while a two-or-more-contact pinch is in flight.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.session.pinch.is_some()
    }

    /// Feeds one input event through gesture classification, applying any
    /// resulting operations to `model`.
    ///
    /// Everything happens synchronously before this call returns: the model
    /// is mutated, its observers are notified, and any hooks fire.
    pub fn handle_input(&mut self, event: PointerInput<'_>, model: &mut TransformModel) {
        match event {
            PointerInput::Down { position, .. } => {
                self.set_position(position, model);
                self.begin_pan(model);
            }
            PointerInput::Move { position, .. } => {
                self.set_position(position, model);
                if self.session.pan_start.is_some() {
                    self.pan_move(model);
                }
            }
            PointerInput::Up {
                position,
                modifiers,
            } => {
                self.set_position(position, model);
                self.end_pan(modifiers.contains(Modifiers::SHIFT), model);
            }
            PointerInput::Leave | PointerInput::Cancel => {
                self.cancel();
            }
            PointerInput::TouchStart { touches } => match touches {
                [] => {}
                [single] => {
                    self.set_position(single.position, model);
                    self.begin_pan(model);
                }
                multi => {
                    self.set_position(multi[0].position, model);
                    self.begin_pinch(multi);
                }
            },
            PointerInput::TouchMove { touches } => match touches {
                [] => {}
                [single] => {
                    self.set_position(single.position, model);
                    if self.session.pinch.is_some() {
                        // Contacts dropped to one without a TouchEnd reaching
                        // us; fold the pinch into a continuing pan.
                        self.end_pinch(touches, model);
                    } else if self.session.pan_start.is_some() {
                        self.pan_move(model);
                    }
                }
                multi => {
                    if self.session.pinch.is_some() {
                        self.pinch_move(multi, model);
                    } else {
                        // A pinch already in progress when we started
                        // listening; adopt it from here.
                        self.begin_pinch(multi);
                    }
                }
            },
            PointerInput::TouchEnd { touches, modifiers } => {
                if self.session.pinch.is_some() {
                    if touches.len() < 2 {
                        self.end_pinch(touches, model);
                    }
                    // With two or more contacts remaining the pinch simply
                    // continues; a lifted third finger falls out of the
                    // cached-pair correlation on the next move.
                } else if self.session.pan_start.is_some() {
                    if touches.is_empty() {
                        self.end_pan(modifiers.contains(Modifiers::SHIFT), model);
                    } else if let Some(survivor) = touches.first() {
                        self.set_position(survivor.position, model);
                    }
                }
            }
            PointerInput::Wheel {
                delta,
                modifiers,
                position,
            } => {
                if let Some(position) = position {
                    self.set_position(position, model);
                }
                self.wheel(delta, modifiers, model);
            }
            PointerInput::Magnify { delta, position } => {
                if let Some(position) = position {
                    self.set_position(position, model);
                }
                self.zoom(delta * self.config.touch_sensitivity, model);
            }
            PointerInput::Rotate { radians, position } => {
                if let Some(position) = position {
                    self.set_position(position, model);
                }
                if model.rotate(radians).is_ok() {
                    self.hooks.emit_rotate(radians);
                }
            }
        }
    }

    /// Abandons any in-flight gesture and returns the session to idle.
    ///
    /// The transform and zoom level are left as they are; only cached pan and
    /// pinch state is dropped. Safe to call mid-pinch: no stale contact
    /// identifiers survive to resume on the next touch.
    pub fn cancel(&mut self) {
        self.session.clear();
    }

    /// Resets `model` to the identity, the zoom level to 0, and the session
    /// to idle.
    pub fn reset(&mut self, model: &mut TransformModel) {
        self.session.clear();
        self.zoom_level = 0.0;
        model.reset();
    }

    /// Handles a resize of the interactive surface: stores the new size and
    /// resets, since the previous mapping was derived from the old geometry.
    pub fn handle_resize(&mut self, size: Size, model: &mut TransformModel) {
        self.view_size = size;
        self.reset(model);
    }

    fn set_position(&mut self, position: Point, model: &TransformModel) {
        self.position = Some(position);
        self.hooks.emit_coordinates(model.transform_point(position));
    }

    fn begin_pan(&mut self, model: &TransformModel) {
        let Some(position) = self.position else {
            return;
        };
        // A fresh single-contact session discards any leftover pinch state.
        self.session.pinch = None;
        self.session.pan_start = Some(model.transform_point(position));
        self.session.panned = false;
        self.hooks.emit_pan_start(position);
    }

    fn pan_move(&mut self, model: &mut TransformModel) {
        let (Some(position), Some(start)) = (self.position, self.session.pan_start) else {
            return;
        };
        // Any move at all marks the session as a pan; a click is a release
        // with zero moves.
        self.session.panned = true;
        let delta = model.transform_point(position) - start;
        if model.translate(delta).is_ok() {
            self.hooks.emit_pan(position);
        }
    }

    fn end_pan(&mut self, shift_held: bool, model: &mut TransformModel) {
        if self.session.pan_start.take().is_none() {
            return;
        }
        if !self.session.panned {
            self.zoom(if shift_held { -1.0 } else { 1.0 }, model);
        }
        if let Some(position) = self.position {
            self.hooks.emit_pan_end(position);
        }
    }

    fn begin_pinch(&mut self, touches: &[Contact]) {
        self.session.pan_start = None;
        self.session.pinch = Some(PinchCache::seed(touches));
        if let Some(position) = self.position {
            self.hooks.emit_pinch_start(position);
        }
    }

    fn pinch_move(&mut self, touches: &[Contact], model: &mut TransformModel) {
        let [first, second, ..] = touches else {
            return;
        };
        let midpoint = first.position.midpoint(second.position);
        self.set_position(midpoint, model);

        let clicks = {
            let Some(pinch) = self.session.pinch.as_mut() else {
                return;
            };
            match (pinch.origin(first.id), pinch.origin(second.id)) {
                (Some(origin_first), Some(origin_second)) => {
                    let distance = first.position.distance(second.position);
                    let previous = pinch.last_distance;
                    pinch.last_distance = distance;
                    let initial = origin_first.distance(origin_second);
                    if previous != 0.0 && initial > 0.0 {
                        Some((distance - previous) / initial * self.config.touch_sensitivity)
                    } else {
                        None
                    }
                }
                _ => {
                    // The cached pair no longer matches the live contacts
                    // (identifier churn mid-gesture). Skip this frame and
                    // track from the contacts actually present.
                    pinch.reseed(touches);
                    None
                }
            }
        };

        if let Some(clicks) = clicks {
            self.zoom(clicks, model);
        }
        self.hooks.emit_pinch(midpoint);
    }

    fn end_pinch(&mut self, remaining: &[Contact], model: &mut TransformModel) {
        self.session.pinch = None;
        if let Some(position) = self.position {
            self.hooks.emit_pinch_end(position);
        }
        if let Some(survivor) = remaining.first() {
            // The surviving contact continues as a pan. It already moved the
            // canvas as part of this interaction, so its eventual release
            // must not read as a fresh click-zoom.
            self.set_position(survivor.position, model);
            self.session.pan_start = Some(model.transform_point(survivor.position));
            self.session.panned = true;
        } else {
            self.session.pan_start = None;
            self.session.panned = false;
        }
    }

    /// Shared zoom step for click-zoom, pinch, wheel-zoom, and trackpad
    /// magnification. `clicks` may be fractional; the applied factor is
    /// `scale_factor.powf(clicks)`.
    ///
    /// The step is clamped so the running level never crosses the configured
    /// floor: a delta that would land below it is truncated to reach the
    /// floor exactly. The scale is anchored at the gesture's focal point
    /// (the last known pointer position, inverse-transformed), so that point
    /// stays put on screen.
    fn zoom(&mut self, clicks: f64, model: &mut TransformModel) {
        if !clicks.is_finite() {
            return;
        }
        let Some(position) = self.position else {
            return;
        };
        let clicks = if self.zoom_level + clicks < self.config.min_zoom_level {
            self.config.min_zoom_level - self.zoom_level
        } else {
            clicks
        };
        let factor = self.config.scale_factor.powf(clicks);
        if !factor.is_finite() || factor == 0.0 {
            return;
        }
        let pivot = model.transform_point(position);
        if model.scale_about(factor, pivot).is_err() {
            return;
        }
        self.zoom_level += clicks;
        self.hooks.emit_zoom(factor, pivot);
    }

    fn wheel(&mut self, delta: Vec2, modifiers: Modifiers, model: &mut TransformModel) {
        let clicks = (delta.y / WHEEL_DIVISOR).clamp(-self.config.wheel_max, self.config.wheel_max);
        if clicks == 0.0 {
            // A delta that clamps away entirely is a no-op, not a
            // zero-magnitude zoom.
            return;
        }
        if modifiers.contains(Modifiers::CTRL) {
            self.wheel_rotate(clicks / self.config.wheel_sensitivity_rotate, model);
        } else {
            self.zoom(clicks / self.config.wheel_sensitivity_zoom, model);
        }
    }

    fn wheel_rotate(&mut self, delta: f64, model: &mut TransformModel) {
        let height = self.view_size.height;
        if height <= 0.0 {
            // No surface metrics yet; there is nothing to derive an angle
            // from.
            return;
        }
        let radians = delta / height;
        if model.rotate(radians).is_ok() {
            self.hooks.emit_rotate(radians);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use kurbo::{Affine, Point, Size, Vec2};

    use vantage_transform::TransformModel;

    use super::{Contact, GestureConfig, GestureRecognizer, Modifiers, PointerInput};
    use crate::hooks::GestureHooks;

    fn recognizer() -> GestureRecognizer {
        GestureRecognizer::new(GestureConfig::default())
            .unwrap()
            .with_view_size(Size::new(800.0, 600.0))
    }

    fn watch_scales(model: &mut TransformModel) -> Rc<RefCell<Vec<f64>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let slot = Rc::clone(&log);
        model.on_scale(move |factor| slot.borrow_mut().push(factor));
        log
    }

    fn watch_translates(model: &mut TransformModel) -> Rc<RefCell<Vec<Vec2>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let slot = Rc::clone(&log);
        model.on_translate(move |delta| slot.borrow_mut().push(delta));
        log
    }

    fn press(recognizer: &mut GestureRecognizer, model: &mut TransformModel, at: Point) {
        recognizer.handle_input(
            PointerInput::Down {
                position: at,
                modifiers: Modifiers::empty(),
            },
            model,
        );
    }

    fn drag(recognizer: &mut GestureRecognizer, model: &mut TransformModel, to: Point) {
        recognizer.handle_input(
            PointerInput::Move {
                position: to,
                modifiers: Modifiers::empty(),
            },
            model,
        );
    }

    fn release(recognizer: &mut GestureRecognizer, model: &mut TransformModel, modifiers: Modifiers) {
        let position = recognizer.position.unwrap_or(Point::ZERO);
        recognizer.handle_input(
            PointerInput::Up {
                position,
                modifiers,
            },
            model,
        );
    }

    fn assert_near(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn identity_pan_translates_by_the_screen_delta() {
        let mut model = TransformModel::new();
        let translates = watch_translates(&mut model);
        let mut recognizer = recognizer();

        press(&mut recognizer, &mut model, Point::new(100.0, 100.0));
        assert!(recognizer.is_panning());
        drag(&mut recognizer, &mut model, Point::new(150.0, 120.0));

        assert_eq!(*translates.borrow(), [Vec2::new(50.0, 20.0)]);
    }

    #[test]
    fn pan_release_never_click_zooms() {
        let mut model = TransformModel::new();
        let scales = watch_scales(&mut model);
        let mut recognizer = recognizer();

        press(&mut recognizer, &mut model, Point::new(100.0, 100.0));
        drag(&mut recognizer, &mut model, Point::new(101.0, 100.0));
        release(&mut recognizer, &mut model, Modifiers::empty());

        assert!(scales.borrow().is_empty(), "a pan must not also click-zoom");
        assert_eq!(recognizer.zoom_level(), 0.0);
        assert!(!recognizer.is_panning());
    }

    #[test]
    fn click_with_zero_movement_zooms_in_one_step() {
        let mut model = TransformModel::new();
        let scales = watch_scales(&mut model);
        let mut recognizer = recognizer();

        press(&mut recognizer, &mut model, Point::new(100.0, 100.0));
        release(&mut recognizer, &mut model, Modifiers::empty());

        assert_eq!(*scales.borrow(), [1.1]);
        assert_eq!(recognizer.zoom_level(), 1.0);
    }

    #[test]
    fn shift_click_zooms_out_one_step() {
        let mut model = TransformModel::new();
        let scales = watch_scales(&mut model);
        let mut recognizer = recognizer();

        press(&mut recognizer, &mut model, Point::new(100.0, 100.0));
        release(&mut recognizer, &mut model, Modifiers::SHIFT);

        let seen = scales.borrow();
        assert_eq!(seen.len(), 1, "one scale notification expected");
        assert!((seen[0] - 1.0 / 1.1).abs() < 1e-12);
        assert_eq!(recognizer.zoom_level(), -1.0);
    }

    #[test]
    fn click_zoom_is_anchored_at_the_pointer() {
        let mut model = TransformModel::new();
        model.translate(Vec2::new(13.0, -8.0)).unwrap();
        model.rotate(0.3).unwrap();
        let mut recognizer = recognizer();

        let screen = Point::new(240.0, 180.0);
        let before = model.transform_point(screen);

        press(&mut recognizer, &mut model, screen);
        release(&mut recognizer, &mut model, Modifiers::empty());

        assert_near(model.transform_point(screen), before);
    }

    #[test]
    fn zoom_out_clicks_clamp_at_the_floor() {
        let config = GestureConfig {
            min_zoom_level: -2.0,
            scale_factor: 2.0,
            ..GestureConfig::default()
        };
        let mut model = TransformModel::new();
        let scales = watch_scales(&mut model);
        let mut recognizer = GestureRecognizer::new(config).unwrap();

        for _ in 0..3 {
            press(&mut recognizer, &mut model, Point::new(50.0, 50.0));
            release(&mut recognizer, &mut model, Modifiers::SHIFT);
        }

        assert_eq!(recognizer.zoom_level(), -2.0);
        // The first two clicks halve; the third is truncated to land exactly
        // on the floor.
        assert_eq!(*scales.borrow(), [0.5, 0.5, 1.0]);
        let coeffs = model.matrix().as_coeffs();
        assert!((coeffs[0] - 0.25).abs() < 1e-12, "net scale should be 2^-2");
    }

    #[test]
    fn fractional_zoom_is_partially_applied_at_the_floor() {
        let config = GestureConfig {
            min_zoom_level: -1.0,
            scale_factor: 2.0,
            touch_sensitivity: 10.0,
            ..GestureConfig::default()
        };
        let mut model = TransformModel::new();
        let mut recognizer = GestureRecognizer::new(config).unwrap();
        recognizer.position = Some(Point::new(10.0, 10.0));

        recognizer.zoom(-0.5, &mut model);
        assert_eq!(recognizer.zoom_level(), -0.5);
        recognizer.zoom(-2.0, &mut model);
        assert_eq!(
            recognizer.zoom_level(),
            -1.0,
            "the crossing step is truncated, not rejected"
        );
    }

    #[test]
    fn wheel_clicks_clamp_to_wheel_max() {
        let mut model = TransformModel::new();
        let mut recognizer = recognizer();
        recognizer.handle_input(
            PointerInput::Wheel {
                delta: Vec2::new(0.0, 100.0),
                modifiers: Modifiers::empty(),
                position: Some(Point::new(400.0, 300.0)),
            },
            &mut model,
        );

        // deltaY 100 → 10 clicks, clamped to wheel_max = 5.
        assert_eq!(recognizer.zoom_level(), 5.0);
    }

    #[test]
    fn wheel_delta_that_clamps_to_zero_is_a_noop() {
        let mut model = TransformModel::new();
        let scales = watch_scales(&mut model);
        let mut recognizer = recognizer();

        recognizer.handle_input(
            PointerInput::Wheel {
                delta: Vec2::new(4.0, 0.0),
                modifiers: Modifiers::empty(),
                position: Some(Point::new(400.0, 300.0)),
            },
            &mut model,
        );

        assert!(scales.borrow().is_empty());
        assert_eq!(recognizer.zoom_level(), 0.0);
    }

    #[test]
    fn ctrl_wheel_rotates_instead_of_zooming() {
        let mut model = TransformModel::new();
        let rotations = Rc::new(RefCell::new(Vec::new()));
        let slot = Rc::clone(&rotations);
        model.on_rotate(move |radians| slot.borrow_mut().push(radians));
        let scales = watch_scales(&mut model);
        let mut recognizer = recognizer();

        recognizer.handle_input(
            PointerInput::Wheel {
                delta: Vec2::new(0.0, 100.0),
                modifiers: Modifiers::CTRL,
                position: Some(Point::new(400.0, 300.0)),
            },
            &mut model,
        );

        // 100 → 10 → clamp 5 → / wheel_sensitivity_rotate (2) → 2.5,
        // / height (600) → radians.
        let seen = rotations.borrow();
        assert_eq!(seen.len(), 1, "one rotate notification expected");
        assert!((seen[0] - 2.5 / 600.0).abs() < 1e-15);
        assert!(scales.borrow().is_empty());
        assert_eq!(recognizer.zoom_level(), 0.0);
    }

    #[test]
    fn wheel_rotate_without_surface_metrics_is_a_noop() {
        let mut model = TransformModel::new();
        let mut recognizer = GestureRecognizer::new(GestureConfig::default()).unwrap();

        recognizer.handle_input(
            PointerInput::Wheel {
                delta: Vec2::new(0.0, 100.0),
                modifiers: Modifiers::CTRL,
                position: Some(Point::new(400.0, 300.0)),
            },
            &mut model,
        );

        assert_eq!(model.matrix(), Affine::IDENTITY);
    }

    fn pinch_frame(recognizer: &mut GestureRecognizer, model: &mut TransformModel, a: Point, b: Point) {
        let touches = [Contact::new(1, a), Contact::new(2, b)];
        recognizer.handle_input(PointerInput::TouchMove { touches: &touches }, model);
    }

    fn start_pinch(recognizer: &mut GestureRecognizer, model: &mut TransformModel, a: Point, b: Point) {
        let touches = [Contact::new(1, a), Contact::new(2, b)];
        recognizer.handle_input(PointerInput::TouchStart { touches: &touches }, model);
    }

    #[test]
    fn pinch_spread_feeds_fractional_clicks() {
        let mut model = TransformModel::new();
        let scales = watch_scales(&mut model);
        let mut recognizer = recognizer();

        start_pinch(
            &mut recognizer,
            &mut model,
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
        );
        assert!(recognizer.is_pinching());

        // First frame seeds distance tracking without zooming.
        pinch_frame(
            &mut recognizer,
            &mut model,
            Point::new(100.0, 100.0),
            Point::new(220.0, 100.0),
        );
        assert!(scales.borrow().is_empty());

        // Second frame: distance 140, previous 120, initial 100 →
        // ratio 0.2 → 2.0 clicks at the default sensitivity of 10.
        pinch_frame(
            &mut recognizer,
            &mut model,
            Point::new(100.0, 100.0),
            Point::new(240.0, 100.0),
        );
        assert_eq!(recognizer.zoom_level(), 2.0);
        let seen = scales.borrow();
        assert_eq!(seen.len(), 1, "one scale notification expected");
        assert!((seen[0] - 1.1_f64.powf(2.0)).abs() < 1e-12);
    }

    #[test]
    fn pinch_zoom_is_anchored_at_the_midpoint() {
        let mut model = TransformModel::new();
        model.translate(Vec2::new(-20.0, 35.0)).unwrap();
        let mut recognizer = recognizer();

        start_pinch(
            &mut recognizer,
            &mut model,
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
        );
        pinch_frame(
            &mut recognizer,
            &mut model,
            Point::new(100.0, 100.0),
            Point::new(220.0, 100.0),
        );

        // The next frame zooms, anchored at its own midpoint (170, 100).
        let midpoint = Point::new(170.0, 100.0);
        let before = model.transform_point(midpoint);
        pinch_frame(
            &mut recognizer,
            &mut model,
            Point::new(100.0, 100.0),
            Point::new(240.0, 100.0),
        );
        assert_near(model.transform_point(midpoint), before);
    }

    #[test]
    fn lifting_to_one_finger_continues_as_pan_without_click_zoom() {
        let mut model = TransformModel::new();
        let scales = watch_scales(&mut model);
        let mut recognizer = recognizer();

        start_pinch(
            &mut recognizer,
            &mut model,
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
        );

        let survivor = [Contact::new(1, Point::new(100.0, 100.0))];
        recognizer.handle_input(
            PointerInput::TouchEnd {
                touches: &survivor,
                modifiers: Modifiers::empty(),
            },
            &mut model,
        );
        assert!(!recognizer.is_pinching());
        assert!(recognizer.is_panning());

        recognizer.handle_input(
            PointerInput::TouchEnd {
                touches: &[],
                modifiers: Modifiers::empty(),
            },
            &mut model,
        );
        assert!(
            scales.borrow().is_empty(),
            "a continuing touch must never read as a fresh click-zoom"
        );
    }

    #[test]
    fn stale_pinch_identifiers_skip_the_frame_and_reseed() {
        let mut model = TransformModel::new();
        let scales = watch_scales(&mut model);
        let mut recognizer = recognizer();

        start_pinch(
            &mut recognizer,
            &mut model,
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
        );

        // The hardware re-identified both contacts; this frame must be
        // a no-op.
        let churned = [
            Contact::new(8, Point::new(100.0, 100.0)),
            Contact::new(9, Point::new(210.0, 100.0)),
        ];
        recognizer.handle_input(PointerInput::TouchMove { touches: &churned }, &mut model);
        assert!(scales.borrow().is_empty());

        // Tracking re-seeded: one frame to measure, the next zooms.
        let seeded = [
            Contact::new(8, Point::new(100.0, 100.0)),
            Contact::new(9, Point::new(230.0, 100.0)),
        ];
        recognizer.handle_input(PointerInput::TouchMove { touches: &seeded }, &mut model);
        assert!(scales.borrow().is_empty());

        let spread = [
            Contact::new(8, Point::new(100.0, 100.0)),
            Contact::new(9, Point::new(250.0, 100.0)),
        ];
        recognizer.handle_input(PointerInput::TouchMove { touches: &spread }, &mut model);
        assert_eq!(scales.borrow().len(), 1, "zoom resumes after the reseed");
    }

    #[test]
    fn cancel_mid_pinch_leaves_no_stale_state() {
        let mut model = TransformModel::new();
        let mut recognizer = recognizer();

        start_pinch(
            &mut recognizer,
            &mut model,
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
        );
        recognizer.handle_input(PointerInput::Cancel, &mut model);
        assert!(!recognizer.is_pinching());
        assert!(!recognizer.is_panning());

        // A later single touch starts a clean pan session.
        let touches = [Contact::new(1, Point::new(10.0, 10.0))];
        recognizer.handle_input(PointerInput::TouchStart { touches: &touches }, &mut model);
        assert!(recognizer.is_panning());
        assert!(!recognizer.is_pinching());
    }

    #[test]
    fn leave_cancels_without_click_zoom() {
        let mut model = TransformModel::new();
        let scales = watch_scales(&mut model);
        let mut recognizer = recognizer();

        press(&mut recognizer, &mut model, Point::new(100.0, 100.0));
        recognizer.handle_input(PointerInput::Leave, &mut model);

        assert!(scales.borrow().is_empty());
        assert!(!recognizer.is_panning());
    }

    #[test]
    fn hover_moves_update_coordinates_without_panning() {
        let coords = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&coords);
        let mut model = TransformModel::new();
        let translates = watch_translates(&mut model);
        let mut recognizer = GestureRecognizer::new(GestureConfig::default())
            .unwrap()
            .with_hooks(GestureHooks::new().on_coordinates(move |logical| {
                *slot.borrow_mut() = Some(logical);
            }));

        drag(&mut recognizer, &mut model, Point::new(33.0, 44.0));

        assert_eq!(*coords.borrow(), Some(Point::new(33.0, 44.0)));
        assert!(translates.borrow().is_empty());
    }

    #[test]
    fn pan_hooks_fire_in_lifecycle_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let starts = Rc::clone(&log);
        let moves = Rc::clone(&log);
        let ends = Rc::clone(&log);
        let hooks = GestureHooks::new()
            .on_pan_start(move |_| starts.borrow_mut().push("start"))
            .on_pan(move |_| moves.borrow_mut().push("pan"))
            .on_pan_end(move |_| ends.borrow_mut().push("end"));

        let mut model = TransformModel::new();
        let mut recognizer = GestureRecognizer::new(GestureConfig::default())
            .unwrap()
            .with_hooks(hooks);

        press(&mut recognizer, &mut model, Point::new(0.0, 0.0));
        drag(&mut recognizer, &mut model, Point::new(5.0, 5.0));
        drag(&mut recognizer, &mut model, Point::new(9.0, 9.0));
        release(&mut recognizer, &mut model, Modifiers::empty());

        assert_eq!(*log.borrow(), ["start", "pan", "pan", "end"]);
    }

    #[test]
    fn zoom_hook_reports_factor_and_pivot() {
        let seen = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&seen);
        let hooks = GestureHooks::new().on_zoom(move |factor, pivot| {
            *slot.borrow_mut() = Some((factor, pivot));
        });

        let mut model = TransformModel::new();
        let mut recognizer = GestureRecognizer::new(GestureConfig::default())
            .unwrap()
            .with_hooks(hooks);

        press(&mut recognizer, &mut model, Point::new(120.0, 90.0));
        release(&mut recognizer, &mut model, Modifiers::empty());

        let (factor, pivot) = (*seen.borrow()).expect("zoom hook should have fired");
        assert!((factor - 1.1).abs() < 1e-12);
        assert_near(pivot, Point::new(120.0, 90.0));
    }

    #[test]
    fn reset_restores_identity_and_zoom_level() {
        let mut model = TransformModel::new();
        let mut recognizer = recognizer();

        press(&mut recognizer, &mut model, Point::new(100.0, 100.0));
        drag(&mut recognizer, &mut model, Point::new(160.0, 140.0));
        release(&mut recognizer, &mut model, Modifiers::empty());
        press(&mut recognizer, &mut model, Point::new(100.0, 100.0));
        release(&mut recognizer, &mut model, Modifiers::empty());
        assert_ne!(model.matrix(), Affine::IDENTITY);

        recognizer.reset(&mut model);
        assert_eq!(model.matrix(), Affine::IDENTITY);
        assert_eq!(recognizer.zoom_level(), 0.0);
        assert!(!recognizer.is_panning());
    }

    #[test]
    fn resize_resets_through_the_new_geometry() {
        let resets = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&resets);
        let mut model = TransformModel::new();
        model.on_reset(move || *counter.borrow_mut() += 1);
        let mut recognizer = recognizer();

        recognizer.handle_resize(Size::new(1024.0, 768.0), &mut model);

        assert_eq!(recognizer.view_size(), Size::new(1024.0, 768.0));
        assert_eq!(*resets.borrow(), 1);
    }

    #[test]
    fn invalid_configuration_is_rejected_at_construction() {
        let config = GestureConfig {
            scale_factor: 0.0,
            ..GestureConfig::default()
        };
        assert!(GestureRecognizer::new(config).is_err());
    }

    #[test]
    fn magnify_gesture_zooms_fractionally() {
        let mut model = TransformModel::new();
        let mut recognizer = recognizer();

        recognizer.handle_input(
            PointerInput::Magnify {
                delta: 0.05,
                position: Some(Point::new(400.0, 300.0)),
            },
            &mut model,
        );

        // 0.05 × touch_sensitivity (10) = 0.5 clicks.
        assert_eq!(recognizer.zoom_level(), 0.5);
    }

    #[test]
    fn wheel_zoom_before_any_pointer_position_uses_the_event_position() {
        let mut model = TransformModel::new();
        let mut recognizer = recognizer();

        recognizer.handle_input(
            PointerInput::Wheel {
                delta: Vec2::new(0.0, 10.0),
                modifiers: Modifiers::empty(),
                position: None,
            },
            &mut model,
        );
        // Without any position there is no focal point: nothing happens.
        assert_eq!(recognizer.zoom_level(), 0.0);

        recognizer.handle_input(
            PointerInput::Wheel {
                delta: Vec2::new(0.0, 10.0),
                modifiers: Modifiers::empty(),
                position: Some(Point::new(10.0, 10.0)),
            },
            &mut model,
        );
        assert_eq!(recognizer.zoom_level(), 1.0);
    }
}
