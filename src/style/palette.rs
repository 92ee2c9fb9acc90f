//! Stock palettes and the registry resolving a [`StyleId`] to its colors.
//!
//! One [`Palette`] exists per concrete style, built once into a process-wide
//! table. Palettes are never mutated; widgets copy the slots they care about.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::color::{self, Rgb};
use crate::font::FontSpec;

use super::id::StyleId;

// ---------------------------------------------------------------------------
// StyleError
// ---------------------------------------------------------------------------

/// Palette lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// Sentinel ids name no palette; guard call sites with [`StyleId::is_valid`].
    #[error("style {0} names no palette")]
    InvalidStyleId(StyleId),
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Hover fill of the close box, shared by every family.
const CLOSE_HOVER: Rgb = Rgb::new(232, 17, 35);

/// Immutable color and font bundle for one concrete style.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Title bar fill.
    pub title_bar: Rgb,
    /// Title bar text.
    pub title_fore: Rgb,
    /// Window border.
    pub border: Rgb,
    /// Body text.
    pub fore: Rgb,
    /// Window background.
    pub back: Rgb,
    /// Background of hosted pages.
    pub page_back: Rgb,
    /// Control box glyphs (minimize/maximize/close).
    pub control_box_fore: Rgb,
    /// Control box hover fill.
    pub control_box_hover: Rgb,
    /// Close box hover fill.
    pub control_box_close_hover: Rgb,
    /// Body font.
    pub font: FontSpec,
}

impl Palette {
    /// Light family: accent chrome over a white body.
    fn light(accent: Rgb, page: Rgb) -> Self {
        Self {
            title_bar: accent,
            title_fore: color::text::INVERSE,
            border: accent,
            fore: color::text::PRIMARY,
            back: color::WHITE,
            page_back: page,
            control_box_fore: color::text::INVERSE,
            control_box_hover: accent.lighten(0.2),
            control_box_close_hover: CLOSE_HOVER,
            font: FontSpec::default(),
        }
    }

    /// Dark family: one base fill, chrome derived by lightening it.
    fn dark(base: Rgb) -> Self {
        Self {
            title_bar: base,
            title_fore: color::text::INVERSE,
            border: base.lighten(0.25),
            fore: color::text::INVERSE,
            back: base,
            page_back: base.lighten(0.06),
            control_box_fore: color::text::INVERSE,
            control_box_hover: base.lighten(0.12),
            control_box_close_hover: CLOSE_HOVER,
            font: FontSpec::default(),
        }
    }
}

impl Default for Palette {
    /// The blue family, also the construction-time seed of every widget.
    fn default() -> Self {
        Palette::light(color::accent::BLUE, color::tint::BLUE)
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

static REGISTRY: LazyLock<HashMap<StyleId, Palette>> = LazyLock::new(|| {
    use crate::color::{accent, tint};

    let mut table = HashMap::new();
    table.insert(StyleId::Blue, Palette::default());
    table.insert(StyleId::Green, Palette::light(accent::GREEN, tint::GREEN));
    table.insert(StyleId::Orange, Palette::light(accent::ORANGE, tint::ORANGE));
    table.insert(StyleId::Red, Palette::light(accent::RED, tint::RED));
    table.insert(StyleId::Gray, Palette::light(accent::GRAY, tint::GRAY));
    table.insert(StyleId::Purple, Palette::light(accent::PURPLE, tint::PURPLE));
    table.insert(
        StyleId::LayuiGreen,
        Palette::light(accent::LAYUI_GREEN, accent::LAYUI_GREEN.lighten(0.92)),
    );
    table.insert(
        StyleId::LayuiRed,
        Palette::light(accent::LAYUI_RED, accent::LAYUI_RED.lighten(0.92)),
    );
    table.insert(
        StyleId::LayuiOrange,
        Palette::light(accent::LAYUI_ORANGE, accent::LAYUI_ORANGE.lighten(0.92)),
    );
    table.insert(StyleId::DarkBlue, Palette::dark(accent::DARK_BLUE));
    table.insert(StyleId::Black, Palette::dark(accent::NEAR_BLACK));
    table.insert(StyleId::Colorful, Palette::light(accent::CYAN, tint::BLUE));
    table
});

/// Resolve the stock palette for a concrete style.
///
/// Total for every id in [`StyleId::ALL`]; fails only for the sentinels.
pub fn palette_of(style: StyleId) -> Result<&'static Palette, StyleError> {
    REGISTRY
        .get(&style)
        .ok_or(StyleError::InvalidStyleId(style))
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_concrete_style_resolves() {
        for style in StyleId::ALL {
            assert!(palette_of(style).is_ok(), "{style} should resolve");
        }
    }

    #[test]
    fn sentinels_do_not_resolve() {
        assert_eq!(
            palette_of(StyleId::Inherited),
            Err(StyleError::InvalidStyleId(StyleId::Inherited))
        );
        assert_eq!(
            palette_of(StyleId::Custom),
            Err(StyleError::InvalidStyleId(StyleId::Custom))
        );
    }

    #[test]
    fn error_message_names_the_style() {
        let err = palette_of(StyleId::Custom).unwrap_err();
        assert_eq!(err.to_string(), "style Custom names no palette");
    }

    #[test]
    fn lookups_share_one_instance() {
        let a = palette_of(StyleId::Green).unwrap();
        let b = palette_of(StyleId::Green).unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn default_palette_is_the_blue_entry() {
        assert_eq!(&Palette::default(), palette_of(StyleId::Blue).unwrap());
    }

    #[test]
    fn light_families_use_their_tints() {
        assert_eq!(
            palette_of(StyleId::Green).unwrap().page_back,
            crate::color::tint::GREEN
        );
        assert_eq!(
            palette_of(StyleId::Blue).unwrap().back,
            crate::color::WHITE
        );
    }

    #[test]
    fn dark_families_use_inverse_text() {
        for style in [StyleId::DarkBlue, StyleId::Black] {
            let palette = palette_of(style).unwrap();
            assert_eq!(palette.fore, crate::color::text::INVERSE);
            assert_eq!(palette.back, palette.title_bar);
        }
    }

    #[test]
    fn hover_fill_is_lighter_than_title_bar() {
        for style in StyleId::ALL {
            let palette = palette_of(style).unwrap();
            let hover = palette.control_box_hover;
            let title = palette.title_bar;
            let sum = |c: Rgb| c.r as u32 + c.g as u32 + c.b as u32;
            assert!(sum(hover) >= sum(title), "{style} hover should not be darker");
        }
    }
}
