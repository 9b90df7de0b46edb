// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Tunables for gesture interpretation.
///
/// All fields have defaults; override any subset with struct-update syntax:
///
/// ```rust
/// use vantage_gesture::GestureConfig;
///
/// let config = GestureConfig {
///     min_zoom_level: -4.0,
///     scale_factor: 2.0,
///     ..GestureConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
///
/// Configuration is applied at recognizer construction and is not
/// hot-reloadable mid-gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Floor for the running zoom level; zoom-out gestures that would cross
    /// it are truncated to land exactly on it. Must not exceed the starting
    /// level of 0.
    pub min_zoom_level: f64,
    /// Scale multiplier of one zoom click; a zoom of `n` clicks scales by
    /// `scale_factor.powf(n)`. Must be finite and positive.
    pub scale_factor: f64,
    /// Multiplier applied to the pinch-distance ratio before it is fed to
    /// the zoom operation as a fractional click count.
    pub touch_sensitivity: f64,
    /// Clamp on the normalized wheel delta, in clicks. Must not be negative.
    pub wheel_max: f64,
    /// Divisor applied to the clamped wheel delta when it drives zoom.
    pub wheel_sensitivity_zoom: f64,
    /// Divisor applied to the clamped wheel delta when it drives rotation.
    pub wheel_sensitivity_rotate: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_zoom_level: -10.0,
            scale_factor: 1.1,
            touch_sensitivity: 10.0,
            wheel_max: 5.0,
            wheel_sensitivity_zoom: 1.0,
            wheel_sensitivity_rotate: 2.0,
        }
    }
}

impl GestureConfig {
    /// Checks every field, returning the first problem found.
    ///
    /// An invalid configuration is rejected outright rather than coerced
    /// into something valid-looking; a recognizer is never constructed from
    /// one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_zoom_level.is_finite() {
            return Err(ConfigError::NonFinite("min_zoom_level"));
        }
        if self.min_zoom_level > 0.0 {
            return Err(ConfigError::MinZoomAboveCurrent);
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(ConfigError::NonPositiveScaleFactor);
        }
        if !self.touch_sensitivity.is_finite() {
            return Err(ConfigError::NonFinite("touch_sensitivity"));
        }
        if !self.wheel_max.is_finite() {
            return Err(ConfigError::NonFinite("wheel_max"));
        }
        if self.wheel_max < 0.0 {
            return Err(ConfigError::NegativeWheelMax);
        }
        if !self.wheel_sensitivity_zoom.is_finite() {
            return Err(ConfigError::NonFinite("wheel_sensitivity_zoom"));
        }
        if self.wheel_sensitivity_zoom == 0.0 {
            return Err(ConfigError::ZeroSensitivity("wheel_sensitivity_zoom"));
        }
        if !self.wheel_sensitivity_rotate.is_finite() {
            return Err(ConfigError::NonFinite("wheel_sensitivity_rotate"));
        }
        if self.wheel_sensitivity_rotate == 0.0 {
            return Err(ConfigError::ZeroSensitivity("wheel_sensitivity_rotate"));
        }
        Ok(())
    }
}

/// A rejected [`GestureConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The named field was NaN or infinite.
    NonFinite(&'static str),
    /// `scale_factor` must be finite and strictly positive.
    NonPositiveScaleFactor,
    /// `min_zoom_level` would start above the current level of 0.
    MinZoomAboveCurrent,
    /// `wheel_max` must not be negative.
    NegativeWheelMax,
    /// The named sensitivity divides raw input and must not be zero.
    ZeroSensitivity(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite(field) => write!(f, "{field} must be finite"),
            Self::NonPositiveScaleFactor => write!(f, "scale_factor must be finite and positive"),
            Self::MinZoomAboveCurrent => {
                write!(f, "min_zoom_level must not exceed the starting zoom level of 0")
            }
            Self::NegativeWheelMax => write!(f, "wheel_max must not be negative"),
            Self::ZeroSensitivity(field) => write!(f, "{field} must not be zero"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, GestureConfig};

    #[test]
    fn defaults_validate() {
        assert!(GestureConfig::default().validate().is_ok());
    }

    #[test]
    fn non_finite_fields_are_rejected() {
        let config = GestureConfig {
            touch_sensitivity: f64::NAN,
            ..GestureConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite("touch_sensitivity"))
        );
    }

    #[test]
    fn zero_and_negative_scale_factors_are_rejected() {
        for bad in [0.0, -1.5, f64::INFINITY] {
            let config = GestureConfig {
                scale_factor: bad,
                ..GestureConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::NonPositiveScaleFactor),
                "scale_factor {bad} should be rejected"
            );
        }
    }

    #[test]
    fn floor_above_the_starting_level_is_rejected() {
        let config = GestureConfig {
            min_zoom_level: 1.0,
            ..GestureConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MinZoomAboveCurrent));
    }

    #[test]
    fn zero_wheel_sensitivities_are_rejected() {
        let config = GestureConfig {
            wheel_sensitivity_rotate: 0.0,
            ..GestureConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroSensitivity("wheel_sensitivity_rotate"))
        );
    }

    #[test]
    fn negative_wheel_max_is_rejected() {
        let config = GestureConfig {
            wheel_max: -1.0,
            ..GestureConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NegativeWheelMax));
    }
}
