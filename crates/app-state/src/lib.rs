//! Application state management for Contrast Lab
//!
//! This crate holds the live palette session: the colors a user is editing,
//! their derived contrast ratios, and save/restore against storage.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod palette;

pub use palette::{PaletteConfig, PaletteError, PaletteState};
