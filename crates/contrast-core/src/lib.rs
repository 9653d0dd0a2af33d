//! Color math for Contrast Lab
//!
//! This crate provides color parsing and normalization, relative luminance,
//! WCAG contrast ratios and pass/fail classification.
//!
//! # Pipeline
//!
//! Input text → [`normalize()`] (canonical `#rrggbb`) → [`luminance()`] →
//! [`contrast()`] → [`WcagReport`].
//!
//! # Example
//!
//! ```rust
//! use contrast_core::{contrast, normalize, WcagLevel};
//!
//! let fg = normalize("marigold");
//! let bg = normalize("#000");
//! let ratio = contrast(&fg, &bg);
//! assert_eq!(ratio, 9.69);
//! assert!(WcagLevel::AaaNormal.passes(ratio));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contrast;
pub mod convert;
pub mod gradient;
pub mod luminance;
pub mod named;
pub mod parse;

mod error;

pub use error::{ColorError, Result};

pub use contrast::{
    contrast, contrast_ratio, readable_text_color, round_ratio, try_contrast, WcagLevel,
    WcagReport, MAX_RATIO, MIN_RATIO,
};
pub use convert::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, Hsl};
pub use gradient::{sample_gradient, GradientReport, GradientSample, DEFAULT_SAMPLE_POSITIONS};
pub use luminance::{linearize, luminance, relative_luminance};
pub use named::NamedColorTable;
pub use parse::{
    hex_to_rgb, normalize, parse_hex, rgb_to_hex, try_normalize, ColorParser, Rgb, FALLBACK_HEX,
};
