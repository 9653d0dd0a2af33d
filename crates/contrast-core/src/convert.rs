//! HSL and HSV conversions for slider-driven color editing

use serde::{Deserialize, Serialize};

use crate::parse::{channel_from_f64, Rgb};

/// A color in HSL with rounded integer components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees (0-360)
    pub h: u16,
    /// Saturation percentage (0-100)
    pub s: u8,
    /// Lightness percentage (0-100)
    pub l: u8,
}

impl Hsl {
    /// Create an HSL value
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

/// Convert RGB to rounded HSL
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl::new(
        ((h * 360.0).round() as u16) % 360,
        (s * 100.0).round() as u8,
        (l * 100.0).round() as u8,
    )
}

/// Convert HSL to RGB
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    hsl_components_to_rgb(hsl.h as f64, hsl.s as f64, hsl.l as f64)
}

/// Hue in degrees (any value, wrapped), saturation and lightness in 0-100.
pub(crate) fn hsl_components_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    if s == 0.0 {
        let v = channel_from_f64(l * 255.0);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let hue_to_rgb = |mut t: f64| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };

    Rgb::new(
        channel_from_f64(hue_to_rgb(h + 1.0 / 3.0) * 255.0),
        channel_from_f64(hue_to_rgb(h) * 255.0),
        channel_from_f64(hue_to_rgb(h - 1.0 / 3.0) * 255.0),
    )
}

/// Convert HSV to RGB
///
/// Hue is in degrees and wraps; saturation and value are percentages
/// (0-100), matching the color-wheel convention.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = h.rem_euclid(360.0) / 60.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let v = v.clamp(0.0, 100.0) / 100.0;

    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(
        channel_from_f64((r + m) * 255.0),
        channel_from_f64((g + m) * 255.0),
        channel_from_f64((b + m) * 255.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl::new(0, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 0)), Hsl::new(120, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 255)), Hsl::new(240, 100, 50));
    }

    #[test]
    fn test_rgb_to_hsl_grays() {
        assert_eq!(rgb_to_hsl(Rgb::BLACK), Hsl::new(0, 0, 0));
        assert_eq!(rgb_to_hsl(Rgb::WHITE), Hsl::new(0, 0, 100));
        assert_eq!(rgb_to_hsl(Rgb::new(128, 128, 128)), Hsl::new(0, 0, 50));
    }

    #[test]
    fn test_rgb_to_hsl_hue_stays_below_360() {
        // Hue 359.76 rounds up and wraps to 0
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 1)), Hsl::new(0, 100, 50));

        for b in 0..=255u8 {
            assert!(rgb_to_hsl(Rgb::new(255, 0, b)).h < 360);
        }
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(hsl_to_rgb(Hsl::new(0, 100, 50)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(120, 100, 50)), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(240, 100, 25)), Rgb::new(0, 0, 128));
        assert_eq!(hsl_to_rgb(Hsl::new(0, 0, 100)), Rgb::WHITE);
    }

    #[test]
    fn test_hsl_hue_wraps() {
        assert_eq!(hsl_components_to_rgb(480.0, 100.0, 50.0), Rgb::new(0, 255, 0));
        assert_eq!(hsl_components_to_rgb(-120.0, 100.0, 50.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_hsv_to_rgb() {
        assert_eq!(hsv_to_rgb(0.0, 100.0, 100.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 100.0, 100.0), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 100.0, 100.0), Rgb::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(360.0, 100.0, 100.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(200.0, 0.0, 50.0), Rgb::new(128, 128, 128));
        assert_eq!(hsv_to_rgb(60.0, 100.0, 0.0), Rgb::BLACK);
    }
}
