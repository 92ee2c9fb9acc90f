//! RGB color type and the named color tables the built-in palettes draw from.
//!
//! [`Rgb`] is a plain 24-bit triple with blend helpers; the constant tables
//! ([`accent`], [`tint`], [`text`], [`line`]) hold the toolkit's stock values.

use std::fmt;

// ---------------------------------------------------------------------------
// Rgb
// ---------------------------------------------------------------------------

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linearly blend toward `other`.
    ///
    /// `weight` is `other`'s share, clamped to `0.0..=1.0`; `0.0` returns
    /// `self` and `1.0` returns `other`.
    pub fn blend(self, other: Rgb, weight: f32) -> Rgb {
        let t = weight.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    /// Blend toward white by the given amount.
    pub fn lighten(self, amount: f32) -> Rgb {
        self.blend(WHITE, amount)
    }

    /// Blend toward black by the given amount.
    pub fn darken(self, amount: f32) -> Rgb {
        self.blend(BLACK, amount)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

// ---------------------------------------------------------------------------
// Stock tables
// ---------------------------------------------------------------------------

/// Saturated accent colors, one per named theme family.
pub mod accent {
    use super::Rgb;

    pub const BLUE: Rgb = Rgb::new(80, 160, 255);
    pub const GREEN: Rgb = Rgb::new(110, 190, 40);
    pub const ORANGE: Rgb = Rgb::new(220, 155, 40);
    pub const RED: Rgb = Rgb::new(230, 80, 80);
    pub const GRAY: Rgb = Rgb::new(140, 140, 140);
    pub const PURPLE: Rgb = Rgb::new(102, 58, 183);
    pub const LAYUI_GREEN: Rgb = Rgb::new(0, 150, 136);
    pub const LAYUI_RED: Rgb = Rgb::new(255, 87, 34);
    pub const LAYUI_ORANGE: Rgb = Rgb::new(255, 184, 0);
    pub const DARK_BLUE: Rgb = Rgb::new(14, 30, 63);
    pub const NEAR_BLACK: Rgb = Rgb::new(40, 40, 40);
    pub const CYAN: Rgb = Rgb::new(56, 186, 217);
}

/// Pale page-background tints paired with the accents above.
pub mod tint {
    use super::Rgb;

    pub const BLUE: Rgb = Rgb::new(235, 243, 255);
    pub const GREEN: Rgb = Rgb::new(239, 248, 232);
    pub const ORANGE: Rgb = Rgb::new(251, 245, 233);
    pub const RED: Rgb = Rgb::new(251, 238, 238);
    pub const GRAY: Rgb = Rgb::new(242, 242, 244);
    pub const PURPLE: Rgb = Rgb::new(250, 238, 255);
}

/// Text foreground levels.
pub mod text {
    use super::Rgb;

    pub const PRIMARY: Rgb = Rgb::new(48, 48, 48);
    pub const REGULAR: Rgb = Rgb::new(96, 96, 96);
    pub const SECONDARY: Rgb = Rgb::new(144, 144, 144);
    /// Foreground for dark or saturated fills.
    pub const INVERSE: Rgb = Rgb::new(248, 248, 248);
}

/// Border and separator colors.
pub mod line {
    use super::Rgb;

    pub const LIGHT: Rgb = Rgb::new(220, 223, 230);
    pub const DARK: Rgb = Rgb::new(90, 90, 90);
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_uppercase_hex() {
        insta::assert_snapshot!(accent::BLUE.to_string(), @"#50A0FF");
        insta::assert_snapshot!(BLACK.to_string(), @"#000000");
    }

    #[test]
    fn blend_zero_weight_returns_self() {
        assert_eq!(accent::RED.blend(WHITE, 0.0), accent::RED);
    }

    #[test]
    fn blend_full_weight_returns_other() {
        assert_eq!(accent::RED.blend(WHITE, 1.0), WHITE);
    }

    #[test]
    fn blend_midpoint() {
        let mid = BLACK.blend(WHITE, 0.5);
        assert_eq!(mid, Rgb::new(128, 128, 128));
    }

    #[test]
    fn blend_clamps_out_of_range_weight() {
        assert_eq!(accent::GREEN.blend(WHITE, -3.0), accent::GREEN);
        assert_eq!(accent::GREEN.blend(WHITE, 7.5), WHITE);
    }

    #[test]
    fn lighten_blue_gives_hover_fill() {
        // The stock hover fill for the blue family.
        assert_eq!(accent::BLUE.lighten(0.2), Rgb::new(115, 179, 255));
    }

    #[test]
    fn darken_moves_toward_black() {
        let darker = accent::GRAY.darken(0.5);
        assert_eq!(darker, Rgb::new(70, 70, 70));
    }
}
