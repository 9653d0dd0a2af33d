//! WCAG contrast ratio and pass/fail classification
//!
//! # Usage
//!
//! ```rust
//! use contrast_core::contrast::{contrast, WcagLevel, WcagReport};
//!
//! let ratio = contrast("#ffffff", "#000000");
//! assert_eq!(ratio, 21.0);
//!
//! let report = WcagReport::from_ratio(contrast("#767676", "#ffffff"));
//! assert!(report.passes(WcagLevel::AaNormal));
//! assert!(!report.passes(WcagLevel::AaaNormal));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::luminance::relative_luminance;
use crate::parse::{normalize, parse_hex};

/// Lowest possible contrast ratio (identical luminance)
pub const MIN_RATIO: f64 = 1.0;

/// Highest possible contrast ratio (black on white)
pub const MAX_RATIO: f64 = 21.0;

/// Contrast ratio of two relative luminances, unrounded
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Round a ratio to two decimal places for display and thresholding
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

/// Contrast ratio between two hex colors, rounded to two decimals
///
/// Both inputs must be `#rgb`/`#rrggbb` hex.
pub fn try_contrast(a: &str, b: &str) -> Result<f64> {
    let la = relative_luminance(parse_hex(a)?);
    let lb = relative_luminance(parse_hex(b)?);
    Ok(round_ratio(contrast_ratio(la, lb)))
}

/// Contrast ratio between two hex colors, rounded to two decimals
///
/// Never fails: malformed input yields [`MIN_RATIO`], the worst case.
/// Names and `rgb()`/`hsl()` input count as malformed; pass them through
/// [`normalize`](crate::parse::normalize) first.
pub fn contrast(a: &str, b: &str) -> f64 {
    match try_contrast(a, b) {
        Ok(ratio) if ratio.is_finite() => ratio,
        Ok(ratio) => {
            tracing::warn!(a, b, ratio, "Non-finite contrast ratio, using minimum");
            MIN_RATIO
        }
        Err(e) => {
            tracing::warn!(a, b, error = %e, "Contrast on malformed color, using minimum");
            MIN_RATIO
        }
    }
}

/// Pick black or white text for a background, whichever contrasts more
///
/// Ties go to black.
pub fn readable_text_color(background: &str) -> &'static str {
    let bg = normalize(background);
    if contrast("#ffffff", &bg) > contrast("#000000", &bg) {
        "#ffffff"
    } else {
        "#000000"
    }
}

// =============================================================================
// Thresholds
// =============================================================================

/// WCAG conformance levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WcagLevel {
    /// AA for large text and UI components
    AaLarge,
    /// AA for normal text
    AaNormal,
    /// AAA for large text
    AaaLarge,
    /// AAA for normal text
    AaaNormal,
}

impl WcagLevel {
    /// All levels, least strict first
    pub const ALL: [WcagLevel; 4] =
        [WcagLevel::AaLarge, WcagLevel::AaNormal, WcagLevel::AaaLarge, WcagLevel::AaaNormal];

    /// Minimum contrast ratio required by this level
    pub fn min_ratio(&self) -> f64 {
        match self {
            WcagLevel::AaLarge => 3.0,
            WcagLevel::AaNormal => 4.5,
            WcagLevel::AaaLarge => 4.5,
            WcagLevel::AaaNormal => 7.0,
        }
    }

    /// Whether a ratio meets this level
    pub fn passes(&self, ratio: f64) -> bool {
        ratio >= self.min_ratio()
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            WcagLevel::AaLarge => "AA Large",
            WcagLevel::AaNormal => "AA Normal",
            WcagLevel::AaaLarge => "AAA Large",
            WcagLevel::AaaNormal => "AAA Normal",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pass/fail for every level at a given ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WcagReport {
    /// The ratio that was classified
    pub ratio: f64,
    /// Meets AA large text / UI components
    pub aa_large: bool,
    /// Meets AA normal text
    pub aa_normal: bool,
    /// Meets AAA large text
    pub aaa_large: bool,
    /// Meets AAA normal text
    pub aaa_normal: bool,
}

impl WcagReport {
    /// Classify a ratio against every level
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            aa_large: WcagLevel::AaLarge.passes(ratio),
            aa_normal: WcagLevel::AaNormal.passes(ratio),
            aaa_large: WcagLevel::AaaLarge.passes(ratio),
            aaa_normal: WcagLevel::AaaNormal.passes(ratio),
        }
    }

    /// Classify the contrast between two hex colors
    pub fn between(a: &str, b: &str) -> Self {
        Self::from_ratio(contrast(a, b))
    }

    /// Result for one level
    pub fn passes(&self, level: WcagLevel) -> bool {
        match level {
            WcagLevel::AaLarge => self.aa_large,
            WcagLevel::AaNormal => self.aa_normal,
            WcagLevel::AaaLarge => self.aaa_large,
            WcagLevel::AaaNormal => self.aaa_normal,
        }
    }

    /// Each level paired with its result
    pub fn levels(&self) -> [(WcagLevel, bool); 4] {
        WcagLevel::ALL.map(|level| (level, self.passes(level)))
    }

    /// Whether every level passes
    pub fn passes_all(&self) -> bool {
        self.levels().iter().all(|(_, pass)| *pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximum_contrast() {
        assert_eq!(contrast("#ffffff", "#000000"), 21.0);
        assert_eq!(contrast("#000", "#fff"), 21.0);
    }

    #[test]
    fn test_same_color_is_minimum() {
        assert_eq!(contrast("#777777", "#777777"), 1.0);
    }

    #[test]
    fn test_known_ratios() {
        assert_eq!(contrast("#767676", "#ffffff"), 4.54);
        assert_eq!(contrast("#ff0000", "#ffffff"), 4.0);
        assert_eq!(contrast("#d81e00", "#111827"), 3.47);
        assert_eq!(contrast("#000000", "#e6e6e6"), 16.83);
    }

    #[test]
    fn test_malformed_input_fails_to_minimum() {
        assert_eq!(contrast("#ffffff", "red"), MIN_RATIO);
        assert_eq!(contrast("", "#000000"), MIN_RATIO);
        assert_eq!(contrast("#gggggg", "#000000"), MIN_RATIO);
        assert!(try_contrast("#ffffff", "red").is_err());
    }

    #[test]
    fn test_named_input_needs_normalizing() {
        assert_eq!(contrast("white", "black"), MIN_RATIO);
        assert_eq!(contrast(&normalize("white"), &normalize("black")), 21.0);
    }

    #[test]
    fn test_contrast_accepts_uppercase_and_whitespace() {
        assert_eq!(contrast(" #FFFFFF ", "000000"), 21.0);
    }

    #[test]
    fn test_contrast_ratio_is_unrounded() {
        let ratio = contrast_ratio(1.0, 0.0);
        assert_eq!(ratio, 21.0);
        assert!((contrast_ratio(0.5, 0.2) - 0.55 / 0.25).abs() < 1e-12);
        assert_eq!(round_ratio(4.546), 4.55);
        assert_eq!(round_ratio(4.544), 4.54);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(WcagLevel::AaLarge.min_ratio(), 3.0);
        assert_eq!(WcagLevel::AaNormal.min_ratio(), 4.5);
        assert_eq!(WcagLevel::AaaLarge.min_ratio(), 4.5);
        assert_eq!(WcagLevel::AaaNormal.min_ratio(), 7.0);

        assert!(WcagLevel::AaNormal.passes(4.5));
        assert!(!WcagLevel::AaNormal.passes(4.49));
        assert!(WcagLevel::AaaNormal.passes(7.0));
        assert!(!WcagLevel::AaaNormal.passes(6.99));
    }

    #[test]
    fn test_report_from_ratio() {
        let report = WcagReport::from_ratio(4.5);
        assert!(report.aa_large);
        assert!(report.aa_normal);
        assert!(report.aaa_large);
        assert!(!report.aaa_normal);
        assert!(!report.passes_all());

        let report = WcagReport::from_ratio(2.9);
        assert!(report.levels().iter().all(|(_, pass)| !pass));

        assert!(WcagReport::from_ratio(MAX_RATIO).passes_all());
    }

    #[test]
    fn test_report_between() {
        let report = WcagReport::between("#d81e00", "#111827");
        assert_eq!(report.ratio, 3.47);
        assert!(report.passes(WcagLevel::AaLarge));
        assert!(!report.passes(WcagLevel::AaNormal));
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let json = serde_json::to_value(WcagReport::from_ratio(7.0)).unwrap();
        assert_eq!(json["aaNormal"], true);
        assert_eq!(json["aaaNormal"], true);
        assert_eq!(serde_json::to_value(WcagLevel::AaaLarge).unwrap(), "aaaLarge");
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(WcagLevel::AaLarge.to_string(), "AA Large");
        assert_eq!(WcagLevel::AaaNormal.to_string(), "AAA Normal");
    }

    #[test]
    fn test_readable_text_color() {
        assert_eq!(readable_text_color("#111827"), "#ffffff");
        assert_eq!(readable_text_color("#e6e6e6"), "#000000");
        assert_eq!(readable_text_color("navy"), "#ffffff");
        assert_eq!(readable_text_color("yellow"), "#000000");
        assert_eq!(readable_text_color("not-a-color"), "#ffffff");
    }

    mod proptests {
        use super::*;
        use crate::parse::Rgb;
        use proptest::prelude::*;

        fn hex_color() -> impl Strategy<Value = String> {
            any::<(u8, u8, u8)>().prop_map(|rgb| Rgb::from(rgb).to_hex())
        }

        proptest! {
            #[test]
            fn contrast_is_symmetric(a in hex_color(), b in hex_color()) {
                prop_assert_eq!(contrast(&a, &b), contrast(&b, &a));
            }

            #[test]
            fn contrast_with_self_is_one(a in hex_color()) {
                prop_assert_eq!(contrast(&a, &a), 1.0);
            }

            #[test]
            fn contrast_is_bounded(a in hex_color(), b in hex_color()) {
                let ratio = contrast(&a, &b);
                prop_assert!((MIN_RATIO..=MAX_RATIO).contains(&ratio));
            }

            #[test]
            fn contrast_never_panics(a in ".{0,12}", b in ".{0,12}") {
                let ratio = contrast(&a, &b);
                prop_assert!((MIN_RATIO..=MAX_RATIO).contains(&ratio));
            }
        }
    }
}
