//! AQI band table.
//!
//! The six bands partition the AQI scale `[0, 500]` with no gaps. Each band
//! covers `(previous upper bound, upper bound]`, the first one starting at 0.
//!
//! # Compile-Time Validation
//!
//! The bound constants carry `const` assertions that verify ascending order
//! and that the last bound is the scale maximum. A misordered table fails to
//! compile.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{AQI_GOOD, AQI_HAZARDOUS, AQI_MODERATE, AQI_SENSITIVE, AQI_UNHEALTHY, AQI_VERY_UNHEALTHY};

// =============================================================================
// Band Upper Bounds
// =============================================================================

/// Lowest value of the scale.
pub const AQI_MIN: f32 = 0.0;

/// Upper bound of "Good".
pub const GOOD_MAX: f32 = 50.0;

/// Upper bound of "Moderate".
pub const MODERATE_MAX: f32 = 100.0;

/// Upper bound of "Unhealthy for Sensitive Groups".
pub const SENSITIVE_MAX: f32 = 150.0;

/// Upper bound of "Unhealthy".
pub const UNHEALTHY_MAX: f32 = 200.0;

/// Upper bound of "Very Unhealthy".
pub const VERY_UNHEALTHY_MAX: f32 = 300.0;

/// Upper bound of "Hazardous" and the end of the scale.
pub const AQI_MAX: f32 = 500.0;

const _: () = assert!(AQI_MIN < GOOD_MAX);
const _: () = assert!(GOOD_MAX < MODERATE_MAX);
const _: () = assert!(MODERATE_MAX < SENSITIVE_MAX);
const _: () = assert!(SENSITIVE_MAX < UNHEALTHY_MAX);
const _: () = assert!(UNHEALTHY_MAX < VERY_UNHEALTHY_MAX);
const _: () = assert!(VERY_UNHEALTHY_MAX < AQI_MAX);

// =============================================================================
// Band Table
// =============================================================================

/// Number of bands on the gauge.
pub const BAND_COUNT: usize = 6;

/// One contiguous AQI sub-range with its color and health category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AqiBand {
    /// Inclusive upper bound of the band.
    pub upper_bound: f32,
    pub color: Rgb565,
    pub label: &'static str,
}

/// The fixed band table, ascending by upper bound.
pub static AQI_BANDS: [AqiBand; BAND_COUNT] = [
    AqiBand {
        upper_bound: GOOD_MAX,
        color: AQI_GOOD,
        label: "Good",
    },
    AqiBand {
        upper_bound: MODERATE_MAX,
        color: AQI_MODERATE,
        label: "Moderate",
    },
    AqiBand {
        upper_bound: SENSITIVE_MAX,
        color: AQI_SENSITIVE,
        label: "Unhealthy for Sensitive Groups",
    },
    AqiBand {
        upper_bound: UNHEALTHY_MAX,
        color: AQI_UNHEALTHY,
        label: "Unhealthy",
    },
    AqiBand {
        upper_bound: VERY_UNHEALTHY_MAX,
        color: AQI_VERY_UNHEALTHY,
        label: "Very Unhealthy",
    },
    AqiBand {
        upper_bound: AQI_MAX,
        color: AQI_HAZARDOUS,
        label: "Hazardous",
    },
];

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_strictly_increasing() {
        let mut previous = AQI_MIN;
        for band in &AQI_BANDS {
            assert!(band.upper_bound > previous, "{} must end above {previous}", band.label);
            previous = band.upper_bound;
        }
    }

    #[test]
    fn test_last_bound_is_scale_max() {
        assert_eq!(AQI_BANDS[BAND_COUNT - 1].upper_bound, AQI_MAX);
    }

    #[test]
    fn test_labels_are_the_six_categories() {
        let labels: [&str; BAND_COUNT] = [
            "Good",
            "Moderate",
            "Unhealthy for Sensitive Groups",
            "Unhealthy",
            "Very Unhealthy",
            "Hazardous",
        ];
        for (band, expected) in AQI_BANDS.iter().zip(labels) {
            assert_eq!(band.label, expected);
        }
    }
}
