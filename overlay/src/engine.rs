use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use watermark::i18n::{self, Language};
use watermark::render::{self, RenderStats};
use watermark::{Settings, StateError, Surface};

use crate::storage::LocalStorageStore;
use crate::surface::CanvasSurface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// `z-index` used while the overlay should stay above page content.
const TOPMOST_Z_INDEX: &str = "2147483647";

/// Actions returned from setters for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RenderNeeded,
    StayOnTopChanged(bool),
    LanguageChanged(Language),
    Persist,
}

/// What the last frame was drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rendered {
    generation: u64,
    width: f64,
    height: f64,
    dpr: f64,
}

/// Overlay state that doesn't depend on the canvas element: settings, viewport,
/// and which frame was last drawn. Tested natively without a browser.
#[derive(Debug)]
pub struct EngineCore {
    pub settings: Settings,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    rendered: Option<Rendered>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self { settings, viewport_width: 0.0, viewport_height: 0.0, dpr: 1.0, rendered: None }
    }

    // --- Watermark parameters ---

    pub fn set_text(&mut self, text: impl Into<String>) -> Vec<Action> {
        self.settings.watermark.set_text(text);
        persist_and_repaint()
    }

    /// # Errors
    ///
    /// Returns [`StateError::InvalidFont`]; the previous font stays active.
    pub fn set_font_css(&mut self, css: &str) -> Result<Vec<Action>, StateError> {
        self.settings.watermark.set_font_css(css)?;
        Ok(persist_and_repaint())
    }

    /// # Errors
    ///
    /// Returns [`StateError::InvalidColor`] if `hex` does not parse.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<Vec<Action>, StateError> {
        self.settings.watermark.set_color_hex(hex)?;
        Ok(persist_and_repaint())
    }

    pub fn set_angle(&mut self, degrees: i64) -> Vec<Action> {
        self.settings.watermark.set_angle(degrees);
        persist_and_repaint()
    }

    /// # Errors
    ///
    /// Returns [`StateError::NegativeSpacing`] for negative input.
    pub fn set_spacing(&mut self, px: i64) -> Result<Vec<Action>, StateError> {
        self.settings.watermark.set_spacing(px)?;
        Ok(persist_and_repaint())
    }

    /// # Errors
    ///
    /// Returns [`StateError::OpacityOutOfRange`] outside `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f64) -> Result<Vec<Action>, StateError> {
        self.settings.watermark.set_opacity(opacity)?;
        Ok(persist_and_repaint())
    }

    // --- Host preferences ---

    pub fn set_stay_on_top(&mut self, on: bool) -> Vec<Action> {
        self.settings.stay_on_top = on;
        vec![Action::StayOnTopChanged(on), Action::Persist]
    }

    pub fn set_language(&mut self, language: Language) -> Vec<Action> {
        self.settings.language = language;
        vec![Action::LanguageChanged(language), Action::Persist]
    }

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn resize(&mut self, width: f64, height: f64, dpr: f64) -> Vec<Action> {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        self.viewport_width = width.max(0.0);
        self.viewport_height = height.max(0.0);
        self.dpr = dpr;
        if self.needs_repaint() { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    // --- Render ---

    /// True if the last frame is stale or nothing has been drawn yet.
    #[must_use]
    pub fn needs_repaint(&self) -> bool {
        self.rendered != Some(self.frame_key())
    }

    /// Repaint the full viewport from the current settings.
    ///
    /// # Errors
    ///
    /// Propagates the surface's error; the frame is then still considered stale.
    pub fn render<S: Surface>(&mut self, surface: &mut S) -> Result<RenderStats, S::Error> {
        let stats = render::draw(surface, &self.settings.watermark, self.viewport_width, self.viewport_height)?;
        self.rendered = Some(self.frame_key());
        Ok(stats)
    }

    // --- Queries ---

    /// Translate a configuration label into the current language.
    #[must_use]
    pub fn label<'a>(&self, key: &'a str) -> &'a str {
        i18n::tr(self.settings.language, key)
    }

    fn frame_key(&self) -> Rendered {
        Rendered {
            generation: self.settings.watermark.generation(),
            width: self.viewport_width,
            height: self.viewport_height,
            dpr: self.dpr,
        }
    }
}

/// Persist comes first so an edit is saved even if the repaint fails.
fn persist_and_repaint() -> Vec<Action> {
    vec![Action::Persist, Action::RenderNeeded]
}

/// The full overlay engine. Wraps `EngineCore` and owns the browser canvas element.
#[wasm_bindgen]
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    store: LocalStorageStore,
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    /// Bind to `canvas`, style it as a click-through overlay, and load saved settings.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context or cannot be styled.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<Engine, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let style = canvas.style();
        style.set_property("position", "fixed")?;
        style.set_property("inset", "0")?;
        style.set_property("width", "100vw")?;
        style.set_property("height", "100vh")?;
        style.set_property("pointer-events", "none")?;
        style.set_property("background", "transparent")?;

        let store = LocalStorageStore::open();
        let core = EngineCore::with_settings(Settings::load(&store));
        let engine = Self { canvas, ctx, store, core };
        engine.apply_stay_on_top(engine.core.settings.stay_on_top)?;
        tracing::info!(language = %engine.core.settings.language, "watermark overlay ready");
        Ok(engine)
    }

    // --- Setters called by the configuration controls ---

    pub fn set_text(&mut self, text: String) -> Result<(), JsValue> {
        let actions = self.core.set_text(text);
        self.dispatch(&actions)
    }

    pub fn set_font(&mut self, css: &str) -> Result<(), JsValue> {
        let actions = self.core.set_font_css(css).map_err(js_error)?;
        self.dispatch(&actions)
    }

    pub fn set_color(&mut self, hex: &str) -> Result<(), JsValue> {
        let actions = self.core.set_color_hex(hex).map_err(js_error)?;
        self.dispatch(&actions)
    }

    pub fn set_angle(&mut self, degrees: i32) -> Result<(), JsValue> {
        let actions = self.core.set_angle(i64::from(degrees));
        self.dispatch(&actions)
    }

    pub fn set_spacing(&mut self, px: i32) -> Result<(), JsValue> {
        let actions = self.core.set_spacing(i64::from(px)).map_err(js_error)?;
        self.dispatch(&actions)
    }

    pub fn set_opacity(&mut self, opacity: f64) -> Result<(), JsValue> {
        let actions = self.core.set_opacity(opacity).map_err(js_error)?;
        self.dispatch(&actions)
    }

    pub fn set_stay_on_top(&mut self, on: bool) -> Result<(), JsValue> {
        let actions = self.core.set_stay_on_top(on);
        self.dispatch(&actions)
    }

    pub fn set_language(&mut self, code: &str) -> Result<(), JsValue> {
        let language =
            Language::from_code(code).ok_or_else(|| JsValue::from_str(&format!("unknown language: {code}")))?;
        let actions = self.core.set_language(language);
        self.dispatch(&actions)
    }

    /// Match the backing store to the viewport and repaint if anything changed.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resize(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<(), JsValue> {
        let actions = self.core.resize(width_css, height_css, dpr);
        self.canvas.set_width((self.core.viewport_width * self.core.dpr).round() as u32);
        self.canvas.set_height((self.core.viewport_height * self.core.dpr).round() as u32);
        self.dispatch(&actions)
    }

    /// Repaint now. Returns the number of tiles drawn.
    pub fn render(&mut self) -> Result<usize, JsValue> {
        let mut surface = CanvasSurface::new(&self.ctx, self.core.dpr);
        let stats = self.core.render(&mut surface)?;
        Ok(stats.tiles)
    }

    // --- Queries for populating the configuration controls ---

    #[must_use]
    pub fn label(&self, key: &str) -> String {
        self.core.label(key).to_owned()
    }

    #[must_use]
    pub fn language(&self) -> String {
        self.core.settings.language.code().to_owned()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.core.settings.watermark.text().to_owned()
    }

    #[must_use]
    pub fn font(&self) -> String {
        self.core.settings.watermark.font().to_css()
    }

    #[must_use]
    pub fn color(&self) -> String {
        self.core.settings.watermark.color().rgb().to_hex()
    }

    #[must_use]
    pub fn angle(&self) -> u16 {
        self.core.settings.watermark.angle_degrees()
    }

    #[must_use]
    pub fn spacing(&self) -> u32 {
        self.core.settings.watermark.spacing_px()
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.core.settings.watermark.opacity()
    }

    #[must_use]
    pub fn stay_on_top(&self) -> bool {
        self.core.settings.stay_on_top
    }
}

impl Engine {
    /// Run every action in order and report the first failure.
    fn dispatch(&mut self, actions: &[Action]) -> Result<(), JsValue> {
        let mut first_err = None;
        for action in actions {
            let result = match action {
                Action::RenderNeeded => self.render().map(|_| ()),
                Action::StayOnTopChanged(on) => self.apply_stay_on_top(*on),
                Action::LanguageChanged(language) => {
                    tracing::info!(%language, "language changed");
                    Ok(())
                }
                Action::Persist => {
                    if let Err(err) = self.core.settings.save(&mut self.store) {
                        tracing::warn!(error = %err, "settings not saved");
                    }
                    Ok(())
                }
            };
            if let Err(err) = result {
                tracing::warn!(?action, "overlay action failed");
                first_err.get_or_insert(err);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    fn apply_stay_on_top(&self, on: bool) -> Result<(), JsValue> {
        let z_index = if on { TOPMOST_Z_INDEX } else { "auto" };
        self.canvas.style().set_property("z-index", z_index)
    }
}

fn js_error(err: StateError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
