//! Per-widget style bookkeeping: the inherit/custom flag plus the palette
//! most recently written into the widget.
//!
//! Only two facts survive an assignment: whether the widget still tracks its
//! ancestors, and the resolved colors. Which concrete theme produced a
//! customization is deliberately forgotten.

use super::id::StyleId;
use super::palette::{palette_of, Palette};

/// Style state carried by every style-capable widget.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    current: StyleId,
    resolved: Palette,
}

impl StyleState {
    /// Fresh state: tracking ancestors, seeded with the default palette.
    pub fn new() -> Self {
        Self {
            current: StyleId::Inherited,
            resolved: Palette::default(),
        }
    }

    /// The flag actually stored: always `Inherited` or `Custom`.
    pub fn style(&self) -> StyleId {
        self.current
    }

    /// Whether the next propagation pass may recolor this widget.
    pub fn is_inherited(&self) -> bool {
        self.current == StyleId::Inherited
    }

    pub fn is_custom(&self) -> bool {
        self.current != StyleId::Inherited
    }

    /// Colors last written into the widget.
    pub fn palette(&self) -> &Palette {
        &self.resolved
    }

    /// Owner-facing assignment.
    ///
    /// A concrete id resolves its palette, stores it, and collapses the flag
    /// to `Custom`; the sentinels flip the flag without touching colors.
    /// Returns whether the resolved palette changed (callers re-absorb slots
    /// only then).
    pub fn set(&mut self, style: StyleId) -> bool {
        match palette_of(style) {
            Ok(palette) => {
                self.resolved = palette.clone();
                self.current = StyleId::Custom;
                true
            }
            Err(_) => {
                self.current = if style == StyleId::Inherited {
                    StyleId::Inherited
                } else {
                    StyleId::Custom
                };
                false
            }
        }
    }

    /// Propagation write: lands only while the widget tracks its ancestors.
    ///
    /// The flag stays `Inherited` so later passes keep reaching this widget.
    pub fn adopt(&mut self, palette: &Palette) -> bool {
        if self.is_inherited() {
            self.resolved = palette.clone();
            true
        } else {
            false
        }
    }

    /// Unconditional overwrite that pins the widget to `Custom`.
    pub fn pin(&mut self, palette: &Palette) {
        self.resolved = palette.clone();
        self.current = StyleId::Custom;
    }
}

impl Default for StyleState {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_tracks_ancestors() {
        let state = StyleState::new();
        assert!(state.is_inherited());
        assert_eq!(state.style(), StyleId::Inherited);
        assert_eq!(state.palette(), &Palette::default());
    }

    #[test]
    fn set_concrete_recolors_and_pins_custom() {
        let mut state = StyleState::new();
        assert!(state.set(StyleId::Green));
        assert!(state.is_custom());
        // The concrete id is not remembered, only the collapse to Custom.
        assert_eq!(state.style(), StyleId::Custom);
        assert_eq!(state.palette(), palette_of(StyleId::Green).unwrap());
    }

    #[test]
    fn set_inherited_keeps_colors() {
        let mut state = StyleState::new();
        state.set(StyleId::Red);
        let before = state.palette().clone();

        assert!(!state.set(StyleId::Inherited));
        assert!(state.is_inherited());
        // Colors wait for the next propagation pass.
        assert_eq!(state.palette(), &before);
    }

    #[test]
    fn set_custom_sentinel_pins_without_recolor() {
        let mut state = StyleState::new();
        let before = state.palette().clone();

        assert!(!state.set(StyleId::Custom));
        assert!(state.is_custom());
        assert_eq!(state.palette(), &before);
    }

    #[test]
    fn adopt_lands_only_while_inherited() {
        let green = palette_of(StyleId::Green).unwrap();

        let mut tracking = StyleState::new();
        assert!(tracking.adopt(green));
        assert!(tracking.is_inherited());
        assert_eq!(tracking.palette(), green);

        let mut fixed = StyleState::new();
        fixed.set(StyleId::Custom);
        assert!(!fixed.adopt(green));
        assert_ne!(fixed.palette(), green);
    }

    #[test]
    fn pin_overwrites_even_custom_state() {
        let gray = palette_of(StyleId::Gray).unwrap();
        let mut state = StyleState::new();
        state.set(StyleId::Red);

        state.pin(gray);
        assert!(state.is_custom());
        assert_eq!(state.palette(), gray);
    }
}
