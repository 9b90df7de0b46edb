// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters that translate host input layers into [`PointerInput`] events.
//!
//! The recognizer core is host-agnostic; each adapter owns whatever
//! correlation state its source needs and forwards semantic events.
//!
//! [`PointerInput`]: crate::PointerInput

#[cfg(feature = "ui_events_adapter")]
pub mod ui_events;
