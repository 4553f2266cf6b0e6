//! Settings persistence over a key/value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host supplies a [`SettingsStore`] (browser `localStorage`, a file, or
//! [`MemoryStore`] in tests). Every watermark field plus the stay-on-top flag
//! and the UI language is stored as one string entry. Loading is forgiving:
//! each key is read on its own, and a missing, unparsable, or rejected value
//! falls back to its default with a warning. Nothing here is fatal.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::consts::{DEFAULT_STAY_ON_TOP, DEFAULT_TEXT};
use crate::error::SettingsError;
use crate::font::FontDescriptor;
use crate::i18n::{Language, tr};
use crate::state::WatermarkState;

/// Store keys.
pub mod keys {
    pub const TEXT: &str = "watermark_text";
    pub const FONT: &str = "watermark_font";
    pub const COLOR: &str = "watermark_color";
    pub const ANGLE: &str = "watermark_angle";
    pub const SPACING: &str = "watermark_spacing";
    pub const OPACITY: &str = "watermark_opacity";
    pub const STAY_ON_TOP: &str = "stay_on_top";
    pub const LANGUAGE: &str = "language";
}

/// A string key/value store.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`SettingsError`] if the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// In-memory store; serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a store previously produced by [`MemoryStore::to_json`].
    ///
    /// # Errors
    ///
    /// Returns the JSON error if `raw` is not a flat string-to-string object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// # Errors
    ///
    /// Returns [`SettingsError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Everything that persists across sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub watermark: WatermarkState,
    pub stay_on_top: bool,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self { watermark: WatermarkState::default(), stay_on_top: DEFAULT_STAY_ON_TOP, language: Language::default() }
    }
}

impl Settings {
    /// Load from `store`, falling back to defaults key by key.
    ///
    /// The default text is translated into the loaded language.
    pub fn load<S: SettingsStore + ?Sized>(store: &S) -> Self {
        let language = read(store, keys::LANGUAGE, Language::from_code).unwrap_or_default();
        let stay_on_top = read(store, keys::STAY_ON_TOP, |raw| raw.trim().parse::<bool>().ok())
            .unwrap_or(DEFAULT_STAY_ON_TOP);

        let mut watermark = WatermarkState::new();
        let text = store.get(keys::TEXT).unwrap_or_else(|| tr(language, DEFAULT_TEXT).to_owned());
        watermark.set_text(text);

        if let Some(font) = read(store, keys::FONT, |raw| raw.parse::<FontDescriptor>().ok()) {
            watermark.set_font(font);
        }
        if let Some(rgb) = read(store, keys::COLOR, Rgb::parse_hex) {
            watermark.set_color(rgb);
        }
        if let Some(angle) = read(store, keys::ANGLE, |raw| raw.trim().parse::<i64>().ok()) {
            watermark.set_angle(angle);
        }
        if let Some(spacing) = read(store, keys::SPACING, |raw| raw.trim().parse::<i64>().ok()) {
            if let Err(err) = watermark.set_spacing(spacing) {
                tracing::warn!(key = keys::SPACING, error = %err, "using default");
            }
        }
        if let Some(opacity) = read(store, keys::OPACITY, |raw| raw.trim().parse::<f64>().ok()) {
            if let Err(err) = watermark.set_opacity(opacity) {
                tracing::warn!(key = keys::OPACITY, error = %err, "using default");
            }
        }

        tracing::debug!(%language, stay_on_top, "settings loaded");
        Self { watermark, stay_on_top, language }
    }

    /// Write every key to `store`.
    ///
    /// # Errors
    ///
    /// Returns the first store error; earlier keys may already be written.
    pub fn save<S: SettingsStore + ?Sized>(&self, store: &mut S) -> Result<(), SettingsError> {
        let w = &self.watermark;
        let entries = [
            (keys::TEXT, w.text().to_owned()),
            (keys::FONT, w.font().to_css()),
            (keys::COLOR, w.color().rgb().to_hex()),
            (keys::ANGLE, w.angle_degrees().to_string()),
            (keys::SPACING, w.spacing_px().to_string()),
            (keys::OPACITY, w.opacity().to_string()),
            (keys::STAY_ON_TOP, self.stay_on_top.to_string()),
            (keys::LANGUAGE, self.language.code().to_owned()),
        ];
        for (key, value) in &entries {
            store.set(key, value)?;
        }
        tracing::debug!(entries = entries.len(), "settings saved");
        Ok(())
    }
}

/// Read and parse `key`; warn if present but unparsable.
fn read<S, T>(store: &S, key: &str, parse: impl FnOnce(&str) -> Option<T>) -> Option<T>
where
    S: SettingsStore + ?Sized,
{
    let raw = store.get(key)?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        tracing::warn!(key, value = %raw, "unparsable setting; using default");
    }
    parsed
}
