//! Relative luminance per WCAG 2.x
//!
//! The transfer-function threshold (0.03928) and channel weights are the
//! ones the WCAG 2.x definition prescribes.

use crate::parse::{hex_to_rgb, Rgb};

/// Normalized channel value at or below which the linear segment applies
pub const LINEAR_THRESHOLD: f64 = 0.03928;

/// Red channel weight
pub const RED_WEIGHT: f64 = 0.2126;
/// Green channel weight
pub const GREEN_WEIGHT: f64 = 0.7152;
/// Blue channel weight
pub const BLUE_WEIGHT: f64 = 0.0722;

/// Convert an sRGB channel (0-255) to linear light (0-1)
pub fn linearize(channel: f64) -> f64 {
    let c = channel / 255.0;
    if c <= LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, in `[0, 1]`
pub fn relative_luminance(rgb: Rgb) -> f64 {
    RED_WEIGHT * linearize(rgb.r as f64)
        + GREEN_WEIGHT * linearize(rgb.g as f64)
        + BLUE_WEIGHT * linearize(rgb.b as f64)
}

/// Relative luminance of a hex color; malformed hex counts as black
pub fn luminance(hex: &str) -> f64 {
    relative_luminance(hex_to_rgb(hex))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_linearize_endpoints() {
        assert_eq!(linearize(0.0), 0.0);
        assert!((linearize(255.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_linearize_piecewise() {
        // 10/255 = 0.0392..., just under the threshold
        assert!((linearize(10.0) - (10.0 / 255.0) / 12.92).abs() < EPSILON);

        let c: f64 = 11.0 / 255.0;
        let expected = ((c + 0.055) / 1.055).powf(2.4);
        assert!((linearize(11.0) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance("#000000"), 0.0);
        assert!((luminance("#ffffff") - 1.0).abs() < EPSILON);
        assert!((luminance("#fff") - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_luminance_primaries_match_weights() {
        assert!((luminance("#ff0000") - RED_WEIGHT).abs() < EPSILON);
        assert!((luminance("#00ff00") - GREEN_WEIGHT).abs() < EPSILON);
        assert!((luminance("#0000ff") - BLUE_WEIGHT).abs() < EPSILON);
    }

    #[test]
    fn test_luminance_malformed_is_black() {
        assert_eq!(luminance("not hex"), 0.0);
    }

    #[test]
    fn test_luminance_is_monotonic_on_grays() {
        let mut previous = -1.0;
        for v in 0..=255u8 {
            let l = relative_luminance(Rgb::new(v, v, v));
            assert!(l > previous);
            previous = l;
        }
    }
}
