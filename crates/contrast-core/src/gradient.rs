//! Contrast of a foreground color across a two-stop linear gradient
//!
//! The gradient is sampled at fixed positions with per-channel linear
//! interpolation in sRGB; the weakest sample decides whether the text stays
//! readable over the whole background.

use serde::{Deserialize, Serialize};

use crate::contrast::{contrast, WcagLevel, MIN_RATIO};
use crate::parse::{channel_from_f64, hex_to_rgb, normalize, Rgb};

/// Positions sampled when the caller has no preference
pub const DEFAULT_SAMPLE_POSITIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// One sampled point of the gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientSample {
    /// Position along the gradient (0-1)
    pub position: f64,
    /// Interpolated background color
    pub hex: String,
    /// Contrast of the foreground against this background
    pub ratio: f64,
}

/// Sampled contrast across a gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientReport {
    /// Samples in the order the positions were given
    pub samples: Vec<GradientSample>,
    /// Lowest sampled ratio
    pub min: f64,
    /// Highest sampled ratio
    pub max: f64,
}

impl GradientReport {
    /// Whether every sample meets the level
    pub fn passes(&self, level: WcagLevel) -> bool {
        !self.samples.is_empty() && level.passes(self.min)
    }

    /// The sample with the lowest ratio
    pub fn weakest(&self) -> Option<&GradientSample> {
        self.samples.iter().min_by(|a, b| a.ratio.total_cmp(&b.ratio))
    }
}

/// Interpolate between two colors; `t` is clamped to `[0, 1]`
pub fn interpolate(start: Rgb, end: Rgb, t: f64) -> Rgb {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let lerp = |a: u8, b: u8| channel_from_f64(a as f64 + (b as f64 - a as f64) * t);

    Rgb::new(lerp(start.r, end.r), lerp(start.g, end.g), lerp(start.b, end.b))
}

/// Sample `fg` contrast over the gradient from `start` to `end`
///
/// All three colors go through normalization first. With no positions the
/// report is empty and both bounds are [`MIN_RATIO`].
pub fn sample_gradient(start: &str, end: &str, fg: &str, positions: &[f64]) -> GradientReport {
    let start = hex_to_rgb(&normalize(start));
    let end = hex_to_rgb(&normalize(end));
    let fg = normalize(fg);

    let samples: Vec<GradientSample> = positions
        .iter()
        .map(|&position| {
            let hex = interpolate(start, end, position).to_hex();
            let ratio = contrast(&fg, &hex);
            GradientSample { position, hex, ratio }
        })
        .collect();

    let (min, max) = if samples.is_empty() {
        (MIN_RATIO, MIN_RATIO)
    } else {
        samples.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), s| {
            (min.min(s.ratio), max.max(s.ratio))
        })
    };

    GradientReport { samples, min, max }
}
