//! Tabbed page host.
//!
//! Children mounted under a `TabPanel` that answer `is_page()` are its tabs.
//! Style propagation reaches only the selected one; the DPI engine reaches
//! them all, selected or not.

use std::any::Any;

use crate::color::Rgb;
use crate::scale::{ScaleCapable, WidgetFonts};
use crate::style::{Palette, StyleCapable, StyleState};
use crate::widget::Widget;

/// Tab bar plus page surface.
pub struct TabPanel {
    style: StyleState,
    fonts: WidgetFonts,
    bar_fill: Rgb,
    text_active: Rgb,
    text_inactive: Rgb,
    selected: Option<usize>,
}

impl TabPanel {
    pub fn new() -> Self {
        let palette = Palette::default();
        Self {
            bar_fill: palette.title_bar,
            text_active: palette.title_fore,
            text_inactive: palette.fore,
            fonts: WidgetFonts::new(palette.font.clone()),
            style: StyleState::new(),
            selected: None,
        }
    }

    /// Selected child index, `None` while no tab is active.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn bar_fill(&self) -> Rgb {
        self.bar_fill
    }

    pub fn text_active(&self) -> Rgb {
        self.text_active
    }

    pub fn text_inactive(&self) -> Rgb {
        self.text_inactive
    }
}

impl Default for TabPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleCapable for TabPanel {
    fn style_state(&self) -> &StyleState {
        &self.style
    }

    fn style_state_mut(&mut self) -> &mut StyleState {
        &mut self.style
    }

    fn apply_palette(&mut self, palette: &Palette) {
        self.bar_fill = palette.title_bar;
        self.text_active = palette.title_fore;
        self.text_inactive = palette.fore;
    }
}

impl ScaleCapable for TabPanel {
    fn fonts(&self) -> &WidgetFonts {
        &self.fonts
    }

    fn fonts_mut(&mut self) -> &mut WidgetFonts {
        &mut self.fonts
    }
}

impl Widget for TabPanel {
    fn widget_type(&self) -> &str {
        "TabPanel"
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

    fn is_tab_host(&self) -> bool {
        true
    }

    fn selected_tab(&self) -> Option<usize> {
        self.selected
    }

    fn set_selected_tab(&mut self, index: Option<usize>) {
        self.select(index);
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
