//! Color constants for the AQI dashboard.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! The band colors below are the standard AQI web colors converted from
//! 8-bit RGB with `R >> 3`, `G >> 2`, `B >> 3`.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Screen and gauge background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Marker fill and readout values.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Dashboard Chrome
// =============================================================================

/// Dark gray for readout labels and the marker shadow.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Light gray for boundary labels around the gauge.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// Header bar background. Dark slate so the timestamp stays readable.
pub const HEADER_BG: Rgb565 = Rgb565::new(4, 10, 8);

// =============================================================================
// AQI Band Colors
// =============================================================================

/// Good, `#00E400`.
pub const AQI_GOOD: Rgb565 = Rgb565::new(0x00 >> 3, 0xE4 >> 2, 0x00 >> 3);

/// Moderate, `#FFFF00`.
pub const AQI_MODERATE: Rgb565 = Rgb565::YELLOW;

/// Unhealthy for sensitive groups, `#FF7E00`.
pub const AQI_SENSITIVE: Rgb565 = Rgb565::new(0xFF >> 3, 0x7E >> 2, 0x00 >> 3);

/// Unhealthy, `#FF0000`.
pub const AQI_UNHEALTHY: Rgb565 = Rgb565::RED;

/// Very unhealthy, `#8F3F97`.
pub const AQI_VERY_UNHEALTHY: Rgb565 = Rgb565::new(0x8F >> 3, 0x3F >> 2, 0x97 >> 3);

/// Hazardous, `#7E0023`.
pub const AQI_HAZARDOUS: Rgb565 = Rgb565::new(0x7E >> 3, 0x00 >> 2, 0x23 >> 3);

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;

    #[test]
    fn test_good_is_mostly_green() {
        assert_eq!(AQI_GOOD.r(), 0);
        assert_eq!(AQI_GOOD.g(), 57);
        assert_eq!(AQI_GOOD.b(), 0);
    }

    #[test]
    fn test_hazardous_is_dark_maroon() {
        assert_eq!(AQI_HAZARDOUS.r(), 15);
        assert_eq!(AQI_HAZARDOUS.g(), 0);
        assert_eq!(AQI_HAZARDOUS.b(), 4);
    }

    #[test]
    fn test_band_colors_are_distinct() {
        let colors = [
            AQI_GOOD,
            AQI_MODERATE,
            AQI_SENSITIVE,
            AQI_UNHEALTHY,
            AQI_VERY_UNHEALTHY,
            AQI_HAZARDOUS,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b, "band colors must be distinguishable");
            }
        }
    }
}
