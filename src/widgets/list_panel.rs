//! Scrolling list widget: an opaque composite.
//!
//! The list draws its own rows, scrollbar, and selection highlight; engines
//! must treat it as a leaf. Anything mounted under it belongs to the list's
//! internals and is restyled by the list itself, never by propagation.

use std::any::Any;

use crate::color::Rgb;
use crate::scale::{ScaleCapable, WidgetFonts};
use crate::style::{Palette, StyleCapable, StyleState};
use crate::widget::{Descent, Widget};

/// Item list with an accent-colored selection bar.
pub struct ListPanel {
    style: StyleState,
    fonts: WidgetFonts,
    fill: Rgb,
    fore: Rgb,
    selection: Rgb,
    items: Vec<String>,
}

impl ListPanel {
    pub fn new() -> Self {
        let palette = Palette::default();
        Self {
            fill: palette.back,
            fore: palette.fore,
            selection: palette.title_bar,
            fonts: WidgetFonts::new(palette.font.clone()),
            style: StyleState::new(),
            items: Vec::new(),
        }
    }

    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn fill(&self) -> Rgb {
        self.fill
    }

    pub fn fore(&self) -> Rgb {
        self.fore
    }

    pub fn selection(&self) -> Rgb {
        self.selection
    }
}

impl Default for ListPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleCapable for ListPanel {
    fn style_state(&self) -> &StyleState {
        &self.style
    }

    fn style_state_mut(&mut self) -> &mut StyleState {
        &mut self.style
    }

    fn apply_palette(&mut self, palette: &Palette) {
        self.fill = palette.back;
        self.fore = palette.fore;
        self.selection = palette.title_bar;
    }
}

impl ScaleCapable for ListPanel {
    fn fonts(&self) -> &WidgetFonts {
        &self.fonts
    }

    fn fonts_mut(&mut self) -> &mut WidgetFonts {
        &mut self.fonts
    }
}

impl Widget for ListPanel {
    fn widget_type(&self) -> &str {
        "ListPanel"
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

    fn descent(&self) -> Descent {
        Descent::Opaque
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleCapableExt, StyleId};

    #[test]
    fn list_is_an_opaque_boundary() {
        let list = ListPanel::new();
        assert_eq!(list.descent(), Descent::Opaque);
    }

    #[test]
    fn list_itself_still_restyles() {
        let mut list = ListPanel::new().with_items(["one", "two"]);
        list.set_style(StyleId::Red);
        assert_eq!(list.selection(), crate::color::accent::RED);
        assert_eq!(list.items().len(), 2);
    }
}
