// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a mutation would leave the transform matrix
/// non-invertible or meaningless.
///
/// The matrix is never partially updated: an operation that fails with one of
/// these errors leaves the model exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformError {
    /// A scale factor of zero would collapse the matrix and make it
    /// non-invertible.
    ZeroScale,
    /// A translation delta, scale factor, rotation angle, or pivot point
    /// contained a NaN or infinite component.
    NonFinite,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroScale => write!(f, "scale factor of zero would make the transform non-invertible"),
            Self::NonFinite => write!(f, "transform operand must be finite"),
        }
    }
}

impl core::error::Error for TransformError {}
