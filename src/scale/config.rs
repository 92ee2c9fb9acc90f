//! The immutable scale snapshot consumed by one refresh pass.
//!
//! A [`ScaleConfig`] is captured at the start of each refresh so the pass
//! cannot observe settings changing under it. All font math lives here;
//! nothing in this module mutates widget state.

use crate::font::FontSpec;
use crate::settings;

use super::display;

// ---------------------------------------------------------------------------
// GlobalFont
// ---------------------------------------------------------------------------

/// Process-wide font override: substitute family, adjust size by a percent.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalFont {
    pub family: String,
    /// 100 means unchanged; 150 renders fonts half again as large.
    pub scale_percent: u32,
}

// ---------------------------------------------------------------------------
// ScaleConfig
// ---------------------------------------------------------------------------

/// One refresh pass's view of the scaling environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleConfig {
    pub enabled: bool,
    pub system_scale: f32,
    pub global_font: Option<GlobalFont>,
}

impl ScaleConfig {
    pub fn new(enabled: bool, system_scale: f32) -> Self {
        Self {
            enabled,
            system_scale,
            global_font: None,
        }
    }

    /// Add a global font override (chainable).
    pub fn with_global_font(mut self, family: impl Into<String>, scale_percent: u32) -> Self {
        self.global_font = Some(GlobalFont {
            family: family.into(),
            scale_percent,
        });
        self
    }

    /// Snapshot the current process settings plus the cached display scale.
    pub fn capture() -> Self {
        let s = settings::snapshot();
        Self {
            enabled: s.dpi_scale,
            system_scale: display::system_scale(),
            global_font: s.global_font.then(|| GlobalFont {
                family: s.global_font_name,
                scale_percent: s.global_font_scale,
            }),
        }
    }

    /// The divisor applied to baseline font sizes.
    ///
    /// A global font override folds its percent into the display scale, so a
    /// 150% override on an unscaled display yields 2/3 and therefore larger
    /// rendered fonts.
    pub fn effective_scale(&self) -> f32 {
        match &self.global_font {
            Some(gf) => self.system_scale * 100.0 / gf.scale_percent.max(1) as f32,
            None => self.system_scale,
        }
    }

    /// Whether a refresh pass would change anything at all.
    pub fn needs_scaling(&self) -> bool {
        self.enabled && (self.system_scale > 1.0 || self.global_font.is_some())
    }

    /// Produce the font a widget should render with, from its baseline size.
    ///
    /// Returns a new font; the input is never mutated. A non-positive
    /// baseline means the baseline was never captured and the font comes
    /// back unchanged. With scaling disabled the size is the literal
    /// baseline; the global family substitution still applies either way.
    pub fn scale_font(&self, font: &FontSpec, baseline: f32) -> FontSpec {
        if baseline <= 0.0 {
            return font.clone();
        }
        let family = match &self.global_font {
            Some(gf) => gf.family.clone(),
            None => font.family.clone(),
        };
        let size = if self.enabled {
            baseline / self.effective_scale()
        } else {
            baseline
        };
        FontSpec { family, size }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
