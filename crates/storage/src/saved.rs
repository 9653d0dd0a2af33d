//! Saved color pairs
//!
//! The record written when a user saves the current palette, plus a store
//! for it on top of [`KvStore`]. The JSON shape is
//! `{fg, bg, fgHover, bgHover, ratio, hoverRatio, savedAt}`; there is no
//! schema version.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::kv::{scoped_key, KvError, KvStore, Result, SCOPE_SEPARATOR};

/// Key holding the most recently saved pair
pub const SAVED_PAIR_KEY: &str = "savedColourPair";

/// Scope for named slots
pub const SLOT_SCOPE: &str = "slot";

/// A snapshot of a foreground/background pair and its hover variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedColorPair {
    /// Foreground color as entered
    pub fg: String,
    /// Background color as entered
    pub bg: String,
    /// Hover foreground color as entered
    pub fg_hover: String,
    /// Hover background color as entered
    pub bg_hover: String,
    /// Contrast ratio of fg on bg
    pub ratio: f64,
    /// Contrast ratio of the hover pair
    pub hover_ratio: f64,
    /// When the pair was saved
    pub saved_at: DateTime<Utc>,
}

/// Store for the saved pair and any named slots
pub struct SavedPairStore {
    kv: Arc<KvStore>,
}

impl SavedPairStore {
    /// Create a saved-pair store over a key-value store
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }

    /// Overwrite the saved pair and flush it to disk
    pub fn save(&self, pair: &SavedColorPair) -> Result<()> {
        self.kv.put(SAVED_PAIR_KEY, pair)?;
        self.kv.flush()?;
        tracing::info!(fg = %pair.fg, bg = %pair.bg, ratio = pair.ratio, "Saved color pair");
        Ok(())
    }

    /// The saved pair, if any
    pub fn load(&self) -> Result<Option<SavedColorPair>> {
        self.kv.get(SAVED_PAIR_KEY)
    }

    /// Forget the saved pair
    pub fn clear(&self) -> Result<bool> {
        self.kv.delete(SAVED_PAIR_KEY)
    }

    /// Save a pair under a name
    pub fn save_slot(&self, name: &str, pair: &SavedColorPair) -> Result<()> {
        let name = validate_slot_name(name)?;
        self.kv.put(&scoped_key(SLOT_SCOPE, name), pair)?;
        self.kv.flush()?;
        tracing::info!(slot = name, "Saved color pair to slot");
        Ok(())
    }

    /// Load a named pair
    pub fn load_slot(&self, name: &str) -> Result<Option<SavedColorPair>> {
        let name = validate_slot_name(name)?;
        self.kv.get(&scoped_key(SLOT_SCOPE, name))
    }

    /// Remove a named pair
    pub fn remove_slot(&self, name: &str) -> Result<bool> {
        let name = validate_slot_name(name)?;
        self.kv.delete(&scoped_key(SLOT_SCOPE, name))
    }

    /// Names of all slots, sorted
    pub fn list_slots(&self) -> Result<Vec<String>> {
        self.kv.names_in_scope(SLOT_SCOPE)
    }
}

fn validate_slot_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() || name.contains(SCOPE_SEPARATOR) {
        return Err(KvError::InvalidKey(name.to_string()));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_pair() -> SavedColorPair {
        SavedColorPair {
            fg: "#d81e00".to_string(),
            bg: "#111827".to_string(),
            fg_hover: "#000000".to_string(),
            bg_hover: "#e6e6e6".to_string(),
            ratio: 3.47,
            hover_ratio: 16.83,
            saved_at: Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap(),
        }
    }

    fn store() -> SavedPairStore {
        SavedPairStore::new(Arc::new(KvStore::in_memory().unwrap()))
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_value(sample_pair()).unwrap();

        assert_eq!(json["fg"], "#d81e00");
        assert_eq!(json["bg"], "#111827");
        assert_eq!(json["fgHover"], "#000000");
        assert_eq!(json["bgHover"], "#e6e6e6");
        assert_eq!(json["ratio"], 3.47);
        assert_eq!(json["hoverRatio"], 16.83);
        assert_eq!(json["savedAt"], "2026-10-16T09:30:00Z");
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_save_and_load() {
        let store = store();
        assert_eq!(store.load().unwrap(), None);

        store.save(&sample_pair()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample_pair()));
    }

    #[test]
    fn test_save_overwrites() {
        let store = store();
        store.save(&sample_pair()).unwrap();

        let mut updated = sample_pair();
        updated.fg = "#ffffff".to_string();
        updated.ratio = 17.74;
        store.save(&updated).unwrap();

        assert_eq!(store.load().unwrap(), Some(updated));
    }

    #[test]
    fn test_clear() {
        let store = store();
        store.save(&sample_pair()).unwrap();

        assert!(store.clear().unwrap());
        assert_eq!(store.load().unwrap(), None);
        assert!(!store.clear().unwrap());
    }

    #[test]
    fn test_slots() {
        let store = store();
        store.save_slot("night", &sample_pair()).unwrap();
        store.save_slot(" alert ", &sample_pair()).unwrap();

        assert_eq!(store.list_slots().unwrap(), vec!["alert", "night"]);
        assert_eq!(store.load_slot("alert").unwrap(), Some(sample_pair()));
        assert_eq!(store.load_slot("missing").unwrap(), None);

        // Slots do not touch the main saved pair
        assert_eq!(store.load().unwrap(), None);

        assert!(store.remove_slot("night").unwrap());
        assert_eq!(store.list_slots().unwrap(), vec!["alert"]);
    }

    #[test]
    fn test_invalid_slot_names() {
        let store = store();
        assert!(matches!(store.save_slot("", &sample_pair()), Err(KvError::InvalidKey(_))));
        assert!(matches!(store.save_slot("a:b", &sample_pair()), Err(KvError::InvalidKey(_))));
        assert!(matches!(store.load_slot("   "), Err(KvError::InvalidKey(_))));
    }
}
