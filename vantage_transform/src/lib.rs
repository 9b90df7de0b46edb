// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_transform --heading-base-level=0

//! Vantage Transform: an observable 2D affine-transform model.
//!
//! This crate provides [`TransformModel`], the single source of truth for the
//! affine transform mapping a drawing's logical coordinates to screen pixels.
//! It focuses on:
//! - Pan/zoom/rotate mutations that post-multiply the current matrix.
//! - Screen→logical coordinate conversion through an always-fresh inverse.
//! - Typed, synchronous change notification per mutation kind.
//!
//! It does **not** interpret input events or own any rendering surface.
//! Callers are expected to:
//! - Drive mutations from a gesture layer (for example `vantage_gesture`).
//! - Subscribe to the notification kinds they care about and redraw on their
//!   own animation-frame cadence.
//! - Read [`TransformModel::matrix`] / [`TransformModel::inverse`] when
//!   rendering.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use vantage_transform::TransformModel;
//!
//! let mut model = TransformModel::new();
//!
//! // A consumer watches for pans.
//! let id = model.on_translate(|delta| {
//!     // schedule a redraw...
//!     let _ = delta;
//! });
//!
//! // A gesture layer pans by a logical-space delta.
//! model.translate(Vec2::new(50.0, 20.0)).unwrap();
//!
//! // Screen-space positions convert through the inverse.
//! let logical = model.transform_point(Point::new(400.0, 300.0));
//! assert!(logical.is_finite());
//!
//! model.unsubscribe(id);
//! ```
//!
//! ## Design notes
//!
//! - Each operation composes in the transform's own coordinate space (the
//!   matrix is post-multiplied), matching how pan deltas and zoom pivots are
//!   naturally produced from inverse-transformed pointer positions.
//! - Zero and non-finite factors are rejected with [`TransformError`] rather
//!   than silently corrupting the matrix; the model is invertible at all
//!   times.
//! - Observers run synchronously on the mutating call, in subscription
//!   order, with no batching. A model with no observers is fine: mutations
//!   simply notify nobody.
//! - The model is single-threaded by design; gestures, mutation, and
//!   notification all happen on the event-delivery turn.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod error;
mod model;
mod observers;

pub use error::TransformError;
pub use model::{TransformDebugInfo, TransformModel};
pub use observers::{ObserverCounts, ObserverId};
