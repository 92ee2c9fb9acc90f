//! The style capability contract widgets opt into.
//!
//! [`StyleCapable`] exposes a widget's [`StyleState`] plus the slot-copy hook;
//! [`StyleCapableExt`] layers the state machine on top so widgets only write
//! the one method that differs per type.

use super::id::StyleId;
use super::palette::{palette_of, Palette, StyleError};
use super::state::StyleState;

// ---------------------------------------------------------------------------
// StyleCapable
// ---------------------------------------------------------------------------

/// Implemented by every widget that participates in style propagation.
///
/// Object-safe: the propagation engine works entirely through
/// `&mut dyn StyleCapable`.
pub trait StyleCapable {
    fn style_state(&self) -> &StyleState;

    fn style_state_mut(&mut self) -> &mut StyleState;

    /// Copy the palette slots this widget renders with into its own fields.
    ///
    /// Called after the state machine has already stored `palette`; the
    /// widget must not re-check its inherit flag here.
    fn apply_palette(&mut self, palette: &Palette);
}

// ---------------------------------------------------------------------------
// StyleCapableExt
// ---------------------------------------------------------------------------

/// State-machine driver, implemented for every [`StyleCapable`] type.
pub trait StyleCapableExt: StyleCapable {
    /// The stored flag: `Inherited` or `Custom`.
    fn style(&self) -> StyleId {
        self.style_state().style()
    }

    fn is_style_custom(&self) -> bool {
        self.style_state().is_custom()
    }

    /// Owner-facing assignment.
    ///
    /// Concrete ids recolor and pin `Custom`; the sentinels flip the flag
    /// and leave colors for the next propagation pass.
    fn set_style(&mut self, style: StyleId) {
        if self.style_state_mut().set(style) {
            let palette = self.style_state().palette().clone();
            self.apply_palette(&palette);
        }
    }

    /// Propagation write, guarded by the inherited check.
    ///
    /// Returns whether the palette landed.
    fn apply_inherited(&mut self, palette: &Palette) -> bool {
        if self.style_state_mut().adopt(palette) {
            self.apply_palette(palette);
            true
        } else {
            false
        }
    }

    /// Resolve `style` and apply it under the inherited guard.
    fn apply_inherited_style(&mut self, style: StyleId) -> Result<bool, StyleError> {
        let palette = palette_of(style)?;
        Ok(self.apply_inherited(palette))
    }

    /// Unconditional overwrite; the widget ends up `Custom`.
    fn apply_custom(&mut self, palette: &Palette) {
        self.style_state_mut().pin(palette);
        self.apply_palette(palette);
    }
}

impl<T: StyleCapable + ?Sized> StyleCapableExt for T {}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    /// Minimal capable type recording every slot copy.
    struct Swatch {
        state: StyleState,
        fill: Rgb,
        copies: usize,
    }

    impl Swatch {
        fn new() -> Self {
            Self {
                state: StyleState::new(),
                fill: Rgb::new(0, 0, 0),
                copies: 0,
            }
        }
    }

    impl StyleCapable for Swatch {
        fn style_state(&self) -> &StyleState {
            &self.state
        }

        fn style_state_mut(&mut self) -> &mut StyleState {
            &mut self.state
        }

        fn apply_palette(&mut self, palette: &Palette) {
            self.fill = palette.title_bar;
            self.copies += 1;
        }
    }

    #[test]
    fn set_style_concrete_copies_slots() {
        let mut swatch = Swatch::new();
        swatch.set_style(StyleId::Green);
        assert_eq!(swatch.fill, crate::color::accent::GREEN);
        assert_eq!(swatch.copies, 1);
        assert!(swatch.is_style_custom());
    }

    #[test]
    fn set_style_sentinels_skip_slot_copy() {
        let mut swatch = Swatch::new();
        swatch.set_style(StyleId::Inherited);
        swatch.set_style(StyleId::Custom);
        assert_eq!(swatch.copies, 0);
    }

    #[test]
    fn apply_inherited_respects_custom_flag() {
        let gray = palette_of(StyleId::Gray).unwrap();

        let mut tracking = Swatch::new();
        assert!(tracking.apply_inherited(gray));
        assert_eq!(tracking.fill, crate::color::accent::GRAY);
        assert_eq!(tracking.style(), StyleId::Inherited);

        let mut fixed = Swatch::new();
        fixed.set_style(StyleId::Red);
        let before = fixed.fill;
        assert!(!fixed.apply_inherited(gray));
        assert_eq!(fixed.fill, before);
    }

    #[test]
    fn apply_inherited_style_rejects_sentinels() {
        let mut swatch = Swatch::new();
        assert_eq!(
            swatch.apply_inherited_style(StyleId::Custom),
            Err(StyleError::InvalidStyleId(StyleId::Custom))
        );
        assert_eq!(swatch.apply_inherited_style(StyleId::Orange), Ok(true));
    }

    #[test]
    fn apply_custom_overrides_everything() {
        let blue = palette_of(StyleId::Blue).unwrap();
        let mut swatch = Swatch::new();
        swatch.set_style(StyleId::Red);

        swatch.apply_custom(blue);
        assert_eq!(swatch.fill, crate::color::accent::BLUE);
        assert!(swatch.is_style_custom());
    }

    #[test]
    fn works_through_a_trait_object() {
        let mut swatch = Swatch::new();
        let capable: &mut dyn StyleCapable = &mut swatch;
        capable.set_style(StyleId::Purple);
        assert_eq!(swatch.fill, crate::color::accent::PURPLE);
    }
}
