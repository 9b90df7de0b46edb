// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_gesture --heading-base-level=0

//! Vantage Gesture: pointer, touch, and wheel gestures for 2D canvas
//! navigation.
//!
//! This crate classifies raw input events into semantic gestures — pan,
//! pinch zoom, click zoom, wheel zoom, wheel rotate — and drives a
//! [`vantage_transform::TransformModel`] accordingly. It focuses on:
//! - Event-to-gesture disambiguation (a drag pans; a motionless click
//!   zooms; Shift-click zooms out; Ctrl-wheel rotates).
//! - Multi-touch correlation by stable contact identifier, with pinch zoom
//!   anchored at the touch midpoint.
//! - Zoom-level accounting with a configurable floor: zoom-out gestures
//!   that would cross the floor are truncated to land exactly on it.
//!
//! It does **not** render anything or talk to a windowing system directly.
//! Callers are expected to:
//! - Own one [`TransformModel`](vantage_transform::TransformModel) per
//!   surface and pass it into each [`GestureRecognizer::handle_input`]
//!   call.
//! - Translate their host's input events into [`PointerInput`] values (the
//!   [`adapters::ui_events`] adapter does this for `ui-events` pointer
//!   streams).
//! - Subscribe to the model's notifications, or attach [`GestureHooks`],
//!   and redraw on their own animation-frame cadence.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use vantage_gesture::{GestureConfig, GestureRecognizer, Modifiers, PointerInput};
//! use vantage_transform::TransformModel;
//!
//! let mut model = TransformModel::new();
//! let mut recognizer = GestureRecognizer::new(GestureConfig::default())
//!     .unwrap()
//!     .with_view_size(Size::new(800.0, 600.0));
//!
//! // Wheel away from the origin zooms in, anchored under the pointer.
//! recognizer.handle_input(
//!     PointerInput::Wheel {
//!         delta: Vec2::new(0.0, 10.0),
//!         modifiers: Modifiers::empty(),
//!         position: Some(Point::new(400.0, 300.0)),
//!     },
//!     &mut model,
//! );
//! assert_eq!(recognizer.zoom_level(), 1.0);
//! ```
//!
//! ## Design notes
//!
//! - The recognizer owns only interaction state; the transform model is
//!   explicitly passed per call, never shared ambiently. One surface, one
//!   model, any number of input sources.
//! - Click detection is flag-based and zero-tolerance: any movement during
//!   the session makes it a pan, and only a release with no movement at all
//!   zooms.
//! - Everything is synchronous and single-threaded: classification, model
//!   mutation, and notification all happen on the event-delivery turn.
//! - Failure degrades, never corrupts: invalid configuration is rejected at
//!   construction, stale touch identifiers skip a frame, and non-finite
//!   values are refused by the model before they can touch the matrix.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod adapters;
mod config;
mod hooks;
mod input;
mod recognizer;
mod session;

pub use config::{ConfigError, GestureConfig};
pub use hooks::GestureHooks;
pub use input::{Contact, Modifiers, PointerInput, TouchId};
pub use recognizer::GestureRecognizer;
