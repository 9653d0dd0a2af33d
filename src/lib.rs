//! Contrast Lab
//!
//! WCAG color contrast checking: color parsing and normalization, relative
//! luminance, contrast ratios and conformance levels, plus a palette session
//! that can be saved and restored.
//!
//! ```rust
//! use contrast_lab::{contrast, normalize, WcagLevel, WcagReport};
//!
//! let ratio = contrast(&normalize("white"), &normalize("#111827"));
//! assert_eq!(ratio, 17.74);
//! assert!(WcagReport::from_ratio(ratio).passes(WcagLevel::AaaNormal));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_state;
pub use contrast_core;
pub use storage;

pub use app_state::{PaletteConfig, PaletteError, PaletteState};
pub use contrast_core::{
    contrast, luminance, normalize, readable_text_color, try_contrast, try_normalize, ColorError,
    Rgb, WcagLevel, WcagReport,
};
pub use storage::{KvConfig, KvStore, SavedColorPair, SavedPairStore};

use tracing_subscriber::{fmt, EnvFilter};

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install a formatted tracing subscriber filtered by `RUST_LOG`
///
/// Returns `false` if a global subscriber was already set.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let directives = filter.to_string();

    let installed = fmt().with_env_filter(filter).try_init().is_ok();
    if installed {
        tracing::debug!(filter = %directives, "Tracing initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_installs_once() {
        init_tracing();
        assert!(!init_tracing());

        // Logging still flows through the installed subscriber
        assert_eq!(normalize("not-a-color"), "#000000");
    }
}
