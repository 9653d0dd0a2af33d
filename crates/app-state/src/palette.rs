//! Palette session state
//!
//! Holds the foreground/background pair and its hover variant exactly as the
//! user entered them. Contrast ratios are derived from the normalized colors
//! and recomputed on every change; nothing else is cached.
//!
//! # Example
//!
//! ```rust
//! use app_state::palette::{PaletteConfig, PaletteState};
//!
//! let mut palette = PaletteState::new(PaletteConfig::default());
//! assert_eq!(palette.ratio(), 3.47);
//!
//! palette.set_fg("white");
//! assert_eq!(palette.ratio(), 17.74);
//!
//! palette.reverse();
//! assert_eq!(palette.fg(), "#111827");
//! assert_eq!(palette.bg(), "white");
//! ```

use chrono::{DateTime, Utc};
use contrast_core::gradient::{sample_gradient, GradientReport, DEFAULT_SAMPLE_POSITIONS};
use contrast_core::{contrast, normalize, readable_text_color, WcagReport};
use serde::{Deserialize, Serialize};
use storage::kv::KvError;
use storage::saved::{SavedColorPair, SavedPairStore};

/// Palette state errors
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    /// Nothing has been saved yet
    #[error("No saved color pair")]
    NothingSaved,
}

/// Result type for palette operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Starting colors for a palette session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteConfig {
    /// Initial foreground
    #[serde(default = "default_fg")]
    pub fg: String,
    /// Initial background
    #[serde(default = "default_bg")]
    pub bg: String,
    /// Initial hover foreground
    #[serde(default = "default_fg_hover")]
    pub fg_hover: String,
    /// Initial hover background
    #[serde(default = "default_bg_hover")]
    pub bg_hover: String,
}

fn default_fg() -> String {
    "#d81e00".to_string()
}

fn default_bg() -> String {
    "#111827".to_string()
}

fn default_fg_hover() -> String {
    "#000000".to_string()
}

fn default_bg_hover() -> String {
    "#e6e6e6".to_string()
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            fg: default_fg(),
            bg: default_bg(),
            fg_hover: default_fg_hover(),
            bg_hover: default_bg_hover(),
        }
    }
}

impl PaletteConfig {
    /// Set the initial foreground
    pub fn fg(mut self, color: impl Into<String>) -> Self {
        self.fg = color.into();
        self
    }

    /// Set the initial background
    pub fn bg(mut self, color: impl Into<String>) -> Self {
        self.bg = color.into();
        self
    }

    /// Set the initial hover foreground
    pub fn fg_hover(mut self, color: impl Into<String>) -> Self {
        self.fg_hover = color.into();
        self
    }

    /// Set the initial hover background
    pub fn bg_hover(mut self, color: impl Into<String>) -> Self {
        self.bg_hover = color.into();
        self
    }
}

/// A live palette: raw colors plus derived contrast ratios
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteState {
    fg: String,
    bg: String,
    fg_hover: String,
    bg_hover: String,
    ratio: f64,
    hover_ratio: f64,
}

impl PaletteState {
    /// Create a palette from configured starting colors
    pub fn new(config: PaletteConfig) -> Self {
        let mut state = Self {
            fg: config.fg,
            bg: config.bg,
            fg_hover: config.fg_hover,
            bg_hover: config.bg_hover,
            ratio: 0.0,
            hover_ratio: 0.0,
        };
        state.recompute();
        state
    }

    fn recompute(&mut self) {
        self.ratio = contrast(&normalize(&self.fg), &normalize(&self.bg));
        self.hover_ratio = contrast(&normalize(&self.fg_hover), &normalize(&self.bg_hover));
        tracing::trace!(ratio = self.ratio, hover_ratio = self.hover_ratio, "Palette recomputed");
    }

    /// Foreground as entered
    pub fn fg(&self) -> &str {
        &self.fg
    }

    /// Background as entered
    pub fn bg(&self) -> &str {
        &self.bg
    }

    /// Hover foreground as entered
    pub fn fg_hover(&self) -> &str {
        &self.fg_hover
    }

    /// Hover background as entered
    pub fn bg_hover(&self) -> &str {
        &self.bg_hover
    }

    /// Contrast of fg on bg
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Contrast of the hover pair
    pub fn hover_ratio(&self) -> f64 {
        self.hover_ratio
    }

    /// Set the foreground
    pub fn set_fg(&mut self, color: impl Into<String>) {
        self.fg = color.into();
        self.recompute();
    }

    /// Set the background
    pub fn set_bg(&mut self, color: impl Into<String>) {
        self.bg = color.into();
        self.recompute();
    }

    /// Set the hover foreground
    pub fn set_fg_hover(&mut self, color: impl Into<String>) {
        self.fg_hover = color.into();
        self.recompute();
    }

    /// Set the hover background
    pub fn set_bg_hover(&mut self, color: impl Into<String>) {
        self.bg_hover = color.into();
        self.recompute();
    }

    /// Swap foreground and background
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.fg, &mut self.bg);
        self.recompute();
    }

    /// Black or white, whichever reads better on the background
    pub fn ui_color(&self) -> &'static str {
        readable_text_color(&self.bg)
    }

    /// WCAG classification of the main pair
    pub fn report(&self) -> WcagReport {
        WcagReport::from_ratio(self.ratio)
    }

    /// WCAG classification of the hover pair
    pub fn hover_report(&self) -> WcagReport {
        WcagReport::from_ratio(self.hover_ratio)
    }

    /// Contrast of the foreground across a gradient background
    pub fn gradient(&self, start: &str, end: &str) -> GradientReport {
        sample_gradient(start, end, &self.fg, &DEFAULT_SAMPLE_POSITIONS)
    }

    /// Capture the palette as a saveable record
    pub fn snapshot(&self, saved_at: DateTime<Utc>) -> SavedColorPair {
        SavedColorPair {
            fg: self.fg.clone(),
            bg: self.bg.clone(),
            fg_hover: self.fg_hover.clone(),
            bg_hover: self.bg_hover.clone(),
            ratio: self.ratio,
            hover_ratio: self.hover_ratio,
            saved_at,
        }
    }

    /// Replace the colors with a saved record
    ///
    /// Ratios are recomputed rather than taken from the record.
    pub fn restore(&mut self, pair: &SavedColorPair) {
        self.fg = pair.fg.clone();
        self.bg = pair.bg.clone();
        self.fg_hover = pair.fg_hover.clone();
        self.bg_hover = pair.bg_hover.clone();
        self.recompute();
    }

    /// Save the palette, stamped with the current time
    pub fn save(&self, store: &SavedPairStore) -> Result<SavedColorPair> {
        let pair = self.snapshot(Utc::now());
        store.save(&pair)?;
        Ok(pair)
    }

    /// Restore the most recently saved palette
    pub fn load_saved(&mut self, store: &SavedPairStore) -> Result<()> {
        let pair = store.load()?.ok_or(PaletteError::NothingSaved)?;
        self.restore(&pair);
        Ok(())
    }
}

impl Default for PaletteState {
    fn default() -> Self {
        Self::new(PaletteConfig::default())
    }
}
