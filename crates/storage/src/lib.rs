//! Storage layer for Contrast Lab
//!
//! This crate provides key-value persistence and the saved color-pair
//! record.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod saved;

pub use kv::{KvConfig, KvError, KvStore};
pub use saved::{SavedColorPair, SavedPairStore, SAVED_PAIR_KEY};
