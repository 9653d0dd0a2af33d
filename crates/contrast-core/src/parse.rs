//! Color parsing and normalization
//!
//! Every supported textual color (custom name, CSS name, `rgb()`/`hsl()`
//! notation, hex) is mapped to canonical `#rrggbb` lowercase hex.
//!
//! # Usage
//!
//! ```rust
//! use contrast_core::parse::{normalize, hex_to_rgb, rgb_to_hex, Rgb};
//!
//! assert_eq!(normalize("#F00"), "#ff0000");
//! assert_eq!(normalize("Marigold"), "#eaa221");
//! assert_eq!(normalize("rgb(0, 128, 255)"), "#0080ff");
//! assert_eq!(normalize("not-a-color"), "#000000");
//!
//! assert_eq!(hex_to_rgb("#0f0"), Rgb::new(0, 255, 0));
//! assert_eq!(rgb_to_hex(255.0, 127.6, 0.2), "#ff8000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::convert::hsl_components_to_rgb;
use crate::error::{ColorError, Result};
use crate::named::NamedColorTable;

/// Hex returned when input cannot be resolved
pub const FALLBACK_HEX: &str = "#000000";

// =============================================================================
// RGB value
// =============================================================================

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure black
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Pure white
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical `#rrggbb` form
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        ColorParser::standard().parse(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

// =============================================================================
// Hex conversion
// =============================================================================

/// Parse `#rgb` or `#rrggbb` (leading `#` optional, surrounding whitespace
/// ignored)
pub fn parse_hex(hex: &str) -> Result<Rgb> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    match digits.len() {
        3 | 6 => decode_hex(digits),
        n => Err(ColorError::InvalidLength(n)),
    }
}

/// Parse hex into channels, falling back to black on malformed input
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or_default()
}

/// Format channel values as `#rrggbb`
///
/// Each channel is rounded and clamped to `[0, 255]`.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb::new(channel_from_f64(r), channel_from_f64(g), channel_from_f64(b)).to_hex()
}

pub(crate) fn channel_from_f64(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Decode 3, 4, 6 or 8 hex digits; alpha digits are validated then dropped.
fn decode_hex(digits: &str) -> Result<Rgb> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(digits.to_string()));
    }

    let byte = |i: usize, width: usize| -> Result<u8> {
        let part = &digits[i * width..(i + 1) * width];
        let value = u8::from_str_radix(part, 16)
            .map_err(|_| ColorError::InvalidHex(digits.to_string()))?;
        // Short form: each nibble is doubled (#f00 -> #ff0000)
        Ok(if width == 1 { value * 17 } else { value })
    };

    match digits.len() {
        3 | 4 => Ok(Rgb::new(byte(0, 1)?, byte(1, 1)?, byte(2, 1)?)),
        6 | 8 => Ok(Rgb::new(byte(0, 2)?, byte(1, 2)?, byte(2, 2)?)),
        n => Err(ColorError::InvalidLength(n)),
    }
}

// =============================================================================
// Parser
// =============================================================================

/// Resolves textual colors against an injected [`NamedColorTable`]
#[derive(Debug, Clone, Copy)]
pub struct ColorParser<'a> {
    table: &'a NamedColorTable,
}

impl<'a> ColorParser<'a> {
    /// Create a parser over a name table
    pub fn new(table: &'a NamedColorTable) -> Self {
        Self { table }
    }

    /// Resolve input to channels
    ///
    /// Lookup order: named colors (custom before CSS), color functions,
    /// then hex with or without `#`.
    pub fn parse(&self, input: &str) -> Result<Rgb> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Err(ColorError::Empty);
        }

        if let Some(hex) = self.table.lookup(&input) {
            return parse_hex(hex);
        }

        if let Some(result) = parse_function(&input) {
            return result;
        }

        match hex_digits(&input) {
            Some(digits) => decode_hex(digits),
            None => Err(ColorError::Unrecognized(input)),
        }
    }

    /// Resolve input to canonical hex, surfacing failures
    pub fn try_normalize(&self, input: &str) -> Result<String> {
        self.parse(input).map(Rgb::to_hex)
    }

    /// Resolve input to canonical hex, falling back to `#000000`
    pub fn normalize(&self, input: &str) -> String {
        match self.try_normalize(input) {
            Ok(hex) => hex,
            Err(e) => {
                tracing::debug!(input, error = %e, "Unresolved color, using {}", FALLBACK_HEX);
                FALLBACK_HEX.to_string()
            }
        }
    }
}

impl ColorParser<'static> {
    /// Parser over the process-wide standard table
    pub fn standard() -> Self {
        Self::new(NamedColorTable::standard())
    }
}

impl Default for ColorParser<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

/// Normalize with the standard table, falling back to `#000000`
pub fn normalize(input: &str) -> String {
    ColorParser::standard().normalize(input)
}

/// Normalize with the standard table, surfacing failures
pub fn try_normalize(input: &str) -> Result<String> {
    ColorParser::standard().try_normalize(input)
}

/// Hex digits of a 3/4/6/8-digit hex literal, `#` optional.
fn hex_digits(input: &str) -> Option<&str> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    let shaped = matches!(digits.len(), 3 | 4 | 6 | 8);
    (shaped && digits.bytes().all(|b| b.is_ascii_hexdigit())).then_some(digits)
}

/// Whether lowercase, trimmed input reads as a hex or function color
pub(crate) fn is_color_literal(input: &str) -> bool {
    hex_digits(input).is_some() || parse_function(input).is_some()
}

// =============================================================================
// Color functions
// =============================================================================

/// Returns `None` when the input is not a color function at all.
fn parse_function(input: &str) -> Option<Result<Rgb>> {
    let open = input.find('(')?;
    let name = input[..open].trim();
    let is_rgb = matches!(name, "rgb" | "rgba");
    let is_hsl = matches!(name, "hsl" | "hsla");
    if !is_rgb && !is_hsl {
        return None;
    }

    let invalid = || ColorError::InvalidFunction(input.to_string());

    let result = (|| -> Result<Rgb> {
        let body = input[open + 1..].strip_suffix(')').ok_or_else(invalid)?;
        let args: Vec<&str> = body
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        if args.len() != 3 && args.len() != 4 {
            return Err(invalid());
        }
        if let Some(alpha) = args.get(3) {
            parse_number_or_percent(alpha).ok_or_else(invalid)?;
        }

        if is_rgb {
            let channel = |arg: &str| -> Result<u8> {
                let value = match arg.strip_suffix('%') {
                    Some(pct) => pct.parse::<f64>().ok().map(|p| p * 2.55),
                    None => arg.parse::<f64>().ok(),
                };
                value.filter(|v| v.is_finite()).map(channel_from_f64).ok_or_else(invalid)
            };
            Ok(Rgb::new(channel(args[0])?, channel(args[1])?, channel(args[2])?))
        } else {
            let hue = args[0].strip_suffix("deg").unwrap_or(args[0]);
            let hue = hue.parse::<f64>().ok().filter(|h| h.is_finite()).ok_or_else(invalid)?;
            let percent = |arg: &str| -> Result<f64> {
                arg.strip_suffix('%')
                    .unwrap_or(arg)
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(|v| v.clamp(0.0, 100.0))
                    .ok_or_else(invalid)
            };
            Ok(hsl_components_to_rgb(hue, percent(args[1])?, percent(args[2])?))
        }
    })();

    Some(result)
}

fn parse_number_or_percent(arg: &str) -> Option<f64> {
    arg.strip_suffix('%').unwrap_or(arg).parse::<f64>().ok().filter(|v| v.is_finite())
}
