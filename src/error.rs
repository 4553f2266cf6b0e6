//! Error types for state mutation and settings persistence.
//!
//! None of these are fatal. Setters reject bad input and leave the state as it
//! was; settings loads fall back to defaults key by key.

/// Error returned by a [`crate::state::WatermarkState`] setter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StateError {
    /// Opacity was NaN or outside `[0, 1]`.
    #[error("opacity {0} is outside [0, 1]")]
    OpacityOutOfRange(f64),

    /// Tile spacing was negative.
    #[error("spacing {0} is negative")]
    NegativeSpacing(i64),

    /// Font descriptor could not be built or parsed.
    #[error("invalid font: {0}")]
    InvalidFont(String),

    /// Color string was not `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

/// Error returned by a [`crate::settings::SettingsStore`] write.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The backing store refused the write.
    #[error("settings store unavailable: {0}")]
    Unavailable(String),

    /// The settings blob could not be encoded.
    #[error("settings encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}
