//! Pure AQI mapping: value to angular position, band and label.
//!
//! Angles are radians on a y-down screen, so increasing angles run clockwise.
//! The gauge starts at the lower left (0.75π) and sweeps 1.5π clockwise,
//! leaving its opening at the bottom.

use core::f32::consts::PI;

use crate::bands::{AQI_BANDS, AQI_MAX, AQI_MIN, AqiBand};

/// Angle of AQI 0. A visual convention the boundary labels rely on.
pub const START_ANGLE: f32 = 0.75 * PI;

/// Angular length of the full scale.
pub const SWEEP: f32 = 1.5 * PI;

/// Angle of the scale maximum.
pub const END_ANGLE: f32 = START_ANGLE + SWEEP;

/// Label shown when a value falls outside every band.
pub const NOT_AVAILABLE: &str = "N/A";

/// Return the first band whose upper bound is at or above `aqi`.
///
/// `None` for values above the scale maximum, below zero, or NaN. Callers
/// treat that as "out of range", never as an error.
pub fn band_for(aqi: f32) -> Option<&'static AqiBand> {
    if aqi.is_nan() || aqi < AQI_MIN {
        return None;
    }
    AQI_BANDS.iter().find(|band| aqi <= band.upper_bound)
}

/// Position of `aqi` along the scale as a fraction clamped to `[0, 1]`.
pub fn fraction_for(aqi: f32) -> f32 {
    if aqi.is_nan() {
        return 0.0;
    }
    (aqi / AQI_MAX).clamp(0.0, 1.0)
}

/// Angle of `aqi` on the gauge. Out-of-range input lands on the nearest end of
/// the arc so the marker never leaves the drawn band.
pub fn angle_for(aqi: f32) -> f32 { START_ANGLE + SWEEP * fraction_for(aqi) }

/// Health category for `aqi`, or [`NOT_AVAILABLE`].
pub fn label_for(aqi: f32) -> &'static str { band_for(aqi).map_or(NOT_AVAILABLE, |band| band.label) }
