//! Error types for color parsing and contrast computation

use thiserror::Error;

/// Color error types
///
/// Only the strict `try_*` entry points surface these. The total functions
/// (`normalize`, `hex_to_rgb`, `contrast`) fall back to black or the minimum
/// ratio instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input was empty or whitespace only
    #[error("Empty color input")]
    Empty,

    /// Input matched no known name, function or hex form
    #[error("Unrecognized color: {0}")]
    Unrecognized(String),

    /// Hex digit count is not one of the accepted lengths
    #[error("Invalid hex length: {0}")]
    InvalidLength(usize),

    /// Hex string contains non-hex characters
    #[error("Invalid hex digits: {0}")]
    InvalidHex(String),

    /// Malformed `rgb()`/`rgba()`/`hsl()`/`hsla()` notation
    #[error("Invalid color function: {0}")]
    InvalidFunction(String),

    /// Custom name would shadow a hex or function color
    #[error("Reserved color name: {0}")]
    ReservedName(String),
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;
