//! Text label widget.

use std::any::Any;

use crate::color::Rgb;
use crate::scale::{ScaleCapable, WidgetFonts};
use crate::style::{Palette, StyleCapable, StyleState};
use crate::widget::Widget;

/// Single line of themed text.
pub struct Label {
    text: String,
    style: StyleState,
    fonts: WidgetFonts,
    fore: Rgb,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        let palette = Palette::default();
        Self {
            text: text.into(),
            fore: palette.fore,
            fonts: WidgetFonts::new(palette.font.clone()),
            style: StyleState::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn fore(&self) -> Rgb {
        self.fore
    }

    pub fn fonts(&self) -> &WidgetFonts {
        &self.fonts
    }
}

impl StyleCapable for Label {
    fn style_state(&self) -> &StyleState {
        &self.style
    }

    fn style_state_mut(&mut self) -> &mut StyleState {
        &mut self.style
    }

    fn apply_palette(&mut self, palette: &Palette) {
        self.fore = palette.fore;
    }
}

impl ScaleCapable for Label {
    fn fonts(&self) -> &WidgetFonts {
        &self.fonts
    }

    fn fonts_mut(&mut self) -> &mut WidgetFonts {
        &mut self.fonts
    }
}

impl Widget for Label {
    fn widget_type(&self) -> &str {
        "Label"
    }

    fn style_capable(&self) -> Option<&dyn StyleCapable> {
        Some(self)
    }

    fn style_capable_mut(&mut self) -> Option<&mut dyn StyleCapable> {
        Some(self)
    }

    fn scale_capable_mut(&mut self) -> Option<&mut dyn ScaleCapable> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
