//! Context menu: a styled attachment, not a tree widget.
//!
//! Menus hang off an owning widget's field and are surfaced to the engines
//! through [`Widget::attachments_mut`](crate::widget::Widget::attachments_mut),
//! so they restyle with their owner without ever being mounted.

use crate::color::Rgb;
use crate::style::{Palette, StyleCapable, StyleState};

/// Popup menu attached to a widget.
pub struct ContextMenu {
    style: StyleState,
    back: Rgb,
    fore: Rgb,
    hover: Rgb,
    items: Vec<String>,
}

impl ContextMenu {
    pub fn new() -> Self {
        let palette = Palette::default();
        Self {
            back: palette.back,
            fore: palette.fore,
            hover: palette.control_box_hover,
            style: StyleState::new(),
            items: Vec::new(),
        }
    }

    /// Append an entry (chainable).
    pub fn with_item(mut self, label: impl Into<String>) -> Self {
        self.items.push(label.into());
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn back(&self) -> Rgb {
        self.back
    }

    pub fn fore(&self) -> Rgb {
        self.fore
    }

    pub fn hover(&self) -> Rgb {
        self.hover
    }
}

impl Default for ContextMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleCapable for ContextMenu {
    fn style_state(&self) -> &StyleState {
        &self.style
    }

    fn style_state_mut(&mut self) -> &mut StyleState {
        &mut self.style
    }

    fn apply_palette(&mut self, palette: &Palette) {
        self.back = palette.back;
        self.fore = palette.fore;
        self.hover = palette.control_box_hover;
    }
}

// ===========================================================================
// Tests
// ===========================================================================
