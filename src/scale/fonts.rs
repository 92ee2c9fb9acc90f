//! Per-widget font state and the scale capability contract.
//!
//! [`WidgetFonts`] pairs the fonts a widget currently renders with against
//! the baseline sizes those fonts had before any scaling. Baselines are
//! captured once and never move; every rescale recomputes from them, which
//! is what keeps repeated refreshes from compounding.

use crate::font::FontSpec;

use super::config::ScaleConfig;

// ---------------------------------------------------------------------------
// WidgetFonts
// ---------------------------------------------------------------------------

/// Font slots of one scale-capable widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetFonts {
    body: FontSpec,
    title: Option<FontSpec>,
    baseline_body: Option<f32>,
    baseline_title: Option<f32>,
}

impl WidgetFonts {
    pub fn new(body: FontSpec) -> Self {
        Self {
            body,
            title: None,
            baseline_body: None,
            baseline_title: None,
        }
    }

    /// Widget with a separate title font (chainable).
    pub fn with_title(mut self, title: FontSpec) -> Self {
        self.title = Some(title);
        self
    }

    pub fn body(&self) -> &FontSpec {
        &self.body
    }

    pub fn title(&self) -> Option<&FontSpec> {
        self.title.as_ref()
    }

    /// Replace the body font. Captured baselines are not touched; the next
    /// rescale snaps the size back to baseline-derived.
    pub fn set_body(&mut self, font: FontSpec) {
        self.body = font;
    }

    pub fn set_title(&mut self, font: FontSpec) {
        self.title = Some(font);
    }

    /// Baseline body size, once captured.
    pub fn baseline_body(&self) -> Option<f32> {
        self.baseline_body
    }

    pub fn baseline_title(&self) -> Option<f32> {
        self.baseline_title
    }

    /// Record the first positive size seen per slot. Idempotent.
    pub fn capture_baselines(&mut self) {
        if self.baseline_body.is_none() && self.body.size > 0.0 {
            self.baseline_body = Some(self.body.size);
        }
        if self.baseline_title.is_none() {
            if let Some(title) = &self.title {
                if title.size > 0.0 {
                    self.baseline_title = Some(title.size);
                }
            }
        }
    }

    /// Recompute both slots from their baselines under `config`.
    pub fn rescale(&mut self, config: &ScaleConfig) {
        let baseline = self.baseline_body.unwrap_or(0.0);
        self.body = config.scale_font(&self.body, baseline);
        if let Some(title) = &self.title {
            let baseline = self.baseline_title.unwrap_or(0.0);
            self.title = Some(config.scale_font(title, baseline));
        }
    }
}

impl Default for WidgetFonts {
    fn default() -> Self {
        Self::new(FontSpec::default())
    }
}

// ---------------------------------------------------------------------------
// ScaleCapable
// ---------------------------------------------------------------------------

/// Implemented by every widget whose fonts follow the DPI engine.
pub trait ScaleCapable {
    fn fonts(&self) -> &WidgetFonts;

    fn fonts_mut(&mut self) -> &mut WidgetFonts;

    /// Called after a refresh pass rewrote this widget's fonts.
    fn scale_applied(&mut self) {}
}

// ===========================================================================
// Tests
// ===========================================================================
