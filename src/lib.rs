//! Tiled text watermark: parameter state and rendering geometry.
//!
//! This crate owns everything about the watermark that does not depend on a
//! particular windowing or browser host. A host (see the `overlay` crate)
//! supplies a drawing [`surface::Surface`] and a [`settings::SettingsStore`];
//! this crate decides what the watermark looks like and where every tile goes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | [`state::WatermarkState`] and its validated setters |
//! | [`render`] | Full-surface tile renderer |
//! | [`tiles`] | Tile grid geometry (steps, overscan, origins) |
//! | [`surface`] | Drawing backend trait used by the renderer |
//! | [`font`] | Font descriptor and CSS shorthand codec |
//! | [`color`] | RGB parsing and opacity-derived alpha |
//! | [`settings`] | Key/value persistence with per-key default fallback |
//! | [`i18n`] | Label translation table |
//! | [`error`] | Error types |
//! | [`consts`] | Defaults and shared numeric constants |

pub mod color;
pub mod consts;
pub mod error;
pub mod font;
pub mod i18n;
pub mod render;
pub mod settings;
pub mod state;
pub mod surface;
pub mod tiles;

pub use error::{SettingsError, StateError};
pub use render::RenderStats;
pub use settings::{Settings, SettingsStore};
pub use state::WatermarkState;
pub use surface::Surface;
