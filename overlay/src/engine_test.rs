#![allow(clippy::float_cmp)]

use watermark::tiles::TextMetrics;

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Surface that counts calls and measures every char as 10x10.
#[derive(Default)]
struct CountingSurface {
    frames: usize,
    texts: usize,
    depth: i64,
    fail: bool,
}

#[derive(Debug, PartialEq)]
struct Refused;

impl Surface for CountingSurface {
    type Error = Refused;

    fn begin_frame(&mut self, _width: f64, _height: f64) -> Result<(), Refused> {
        if self.fail {
            return Err(Refused);
        }
        self.frames += 1;
        Ok(())
    }

    fn set_antialiasing(&mut self, _enabled: bool) {}

    fn set_font(&mut self, _css: &str) {}

    fn set_fill_style(&mut self, _css: &str) {}

    #[allow(clippy::cast_precision_loss)]
    fn measure_text(&mut self, text: &str) -> Result<TextMetrics, Refused> {
        Ok(TextMetrics { width: text.chars().count() as f64 * 10.0, height: 10.0 })
    }

    fn save(&mut self) {
        self.depth += 1;
    }

    fn restore(&mut self) {
        self.depth -= 1;
    }

    fn translate(&mut self, _x: f64, _y: f64) -> Result<(), Refused> {
        Ok(())
    }

    fn rotate(&mut self, _radians: f64) -> Result<(), Refused> {
        Ok(())
    }

    fn fill_text(&mut self, _text: &str, _x: f64, _y: f64) -> Result<(), Refused> {
        self.texts += 1;
        Ok(())
    }
}

fn sized_core() -> EngineCore {
    let mut core = EngineCore::new();
    core.resize(800.0, 600.0, 1.0);
    core
}

fn rendered_core() -> EngineCore {
    let mut core = sized_core();
    core.render(&mut CountingSurface::default()).unwrap();
    core
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_core_has_default_settings() {
    let core = EngineCore::new();
    assert_eq!(core.settings, Settings::default());
    assert_eq!(core.dpr, 1.0);
    assert!(core.needs_repaint());
}

#[test]
fn with_settings_keeps_loaded_values() {
    let mut settings = Settings::default();
    settings.watermark.set_text("DRAFT");
    settings.stay_on_top = false;
    let core = EngineCore::with_settings(settings.clone());
    assert_eq!(core.settings, settings);
}

// =============================================================
// Setters -> actions
// =============================================================

#[test]
fn watermark_setters_request_render_and_persist() {
    let mut core = rendered_core();
    let expected = vec![Action::Persist, Action::RenderNeeded];

    assert_eq!(core.set_text("X"), expected);
    assert_eq!(core.set_font_css("bold 20px serif").unwrap(), expected);
    assert_eq!(core.set_color_hex("#123456").unwrap(), expected);
    assert_eq!(core.set_angle(45), expected);
    assert_eq!(core.set_spacing(10).unwrap(), expected);
    assert_eq!(core.set_opacity(0.75).unwrap(), expected);
}

#[test]
fn edits_persist_before_repainting() {
    let mut core = rendered_core();
    let lists = [
        core.set_text("X"),
        core.set_angle(10),
        core.set_spacing(5).unwrap(),
        core.set_opacity(0.2).unwrap(),
        core.set_font_css("12px serif").unwrap(),
        core.set_color_hex("#010203").unwrap(),
    ];
    for actions in lists {
        let persist = actions.iter().position(|a| *a == Action::Persist).unwrap();
        let render = actions.iter().position(|a| *a == Action::RenderNeeded).unwrap();
        assert!(persist < render, "{actions:?}");
    }
}

#[test]
fn rejected_edits_return_errors_and_keep_frame_fresh() {
    let mut core = rendered_core();
    assert!(core.set_spacing(-1).is_err());
    assert!(core.set_opacity(1.5).is_err());
    assert!(core.set_font_css("nope").is_err());
    assert!(core.set_color_hex("nope").is_err());
    assert!(!core.needs_repaint());
    assert_eq!(core.settings.watermark.spacing_px(), 200);
}

#[test]
fn stay_on_top_does_not_repaint() {
    let mut core = rendered_core();
    assert_eq!(core.set_stay_on_top(false), vec![Action::StayOnTopChanged(false), Action::Persist]);
    assert!(!core.settings.stay_on_top);
    assert!(!core.needs_repaint());
}

#[test]
fn language_change_updates_labels() {
    let mut core = rendered_core();
    assert_eq!(core.label("Angle:"), "Angle:");
    let actions = core.set_language(Language::SimplifiedChinese);
    assert_eq!(actions, vec![Action::LanguageChanged(Language::SimplifiedChinese), Action::Persist]);
    assert_eq!(core.label("Angle:"), "角度:");
    assert!(!core.needs_repaint());
}

// =============================================================
// Repaint scheduling
// =============================================================

#[test]
fn edit_marks_frame_stale_until_rendered() {
    let mut core = rendered_core();
    assert!(!core.needs_repaint());
    core.set_angle(90);
    assert!(core.needs_repaint());
    core.render(&mut CountingSurface::default()).unwrap();
    assert!(!core.needs_repaint());
}

#[test]
fn resize_requests_render_only_when_changed() {
    let mut core = rendered_core();
    assert!(core.resize(800.0, 600.0, 1.0).is_empty());
    assert_eq!(core.resize(1024.0, 768.0, 1.0), vec![Action::RenderNeeded]);
    core.render(&mut CountingSurface::default()).unwrap();
    assert_eq!(core.resize(1024.0, 768.0, 2.0), vec![Action::RenderNeeded]);
}

#[test]
fn resize_sanitizes_input() {
    let mut core = EngineCore::new();
    core.resize(-5.0, f64::NAN, 0.0);
    assert_eq!(core.viewport_width, 0.0);
    assert_eq!(core.viewport_height, 0.0);
    assert_eq!(core.dpr, 1.0);
}

#[test]
fn failed_render_leaves_frame_stale() {
    let mut core = sized_core();
    let mut surface = CountingSurface { fail: true, ..Default::default() };
    assert_eq!(core.render(&mut surface), Err(Refused));
    assert!(core.needs_repaint());
}

// =============================================================
// Render
// =============================================================

#[test]
fn render_draws_full_grid_with_balanced_transforms() {
    let mut core = sized_core();
    core.set_text("TEST");
    core.set_spacing(0).unwrap();
    let mut surface = CountingSurface::default();
    let stats = core.render(&mut surface).unwrap();
    // 40x10 text: ceil(2400 / 40) x ceil(1210 / 10)
    assert_eq!(stats.tiles, 60 * 121);
    assert_eq!(surface.texts, stats.tiles);
    assert_eq!(surface.depth, 0);
    assert_eq!(surface.frames, 1);
}

#[test]
fn render_with_empty_text_clears_only() {
    let mut core = sized_core();
    core.set_text("");
    core.set_spacing(0).unwrap();
    let mut surface = CountingSurface::default();
    let stats = core.render(&mut surface).unwrap();
    assert_eq!(stats.tiles, 0);
    assert_eq!(surface.texts, 0);
    assert_eq!(surface.frames, 1);
    assert!(!core.needs_repaint());
}

#[test]
fn render_before_resize_draws_nothing() {
    let mut core = EngineCore::new();
    let stats = core.render(&mut CountingSurface::default()).unwrap();
    assert_eq!(stats.tiles, 0);
}
