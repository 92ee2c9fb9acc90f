//! General-purpose container panel.

use std::any::Any;

use crate::color::Rgb;
use crate::scale::{ScaleCapable, WidgetFonts};
use crate::style::{Palette, StyleCapable, StyleState};
use crate::widget::Widget;

use super::context_menu::ContextMenu;

/// Themed container with a tinted fill and an optional context menu.
///
/// The menu is an attachment: it restyles with the panel but is never
/// mounted in the tree.
pub struct Panel {
    style: StyleState,
    fonts: WidgetFonts,
    fill: Rgb,
    fore: Rgb,
    border: Rgb,
    menu: Option<ContextMenu>,
}

impl Panel {
    pub fn new() -> Self {
        let palette = Palette::default();
        Self {
            fill: palette.page_back,
            fore: palette.fore,
            border: palette.border,
            fonts: WidgetFonts::new(palette.font.clone()),
            style: StyleState::new(),
            menu: None,
        }
    }

    /// Attach a context menu (chainable).
    pub fn with_menu(mut self, menu: ContextMenu) -> Self {
        self.menu = Some(menu);
        self
    }

    pub fn fill(&self) -> Rgb {
        self.fill
    }

    pub fn fore(&self) -> Rgb {
        self.fore
    }

    pub fn border(&self) -> Rgb {
        self.border
    }

    pub fn menu(&self) -> Option<&ContextMenu> {
        self.menu.as_ref()
    }

    pub fn menu_mut(&mut self) -> Option<&mut ContextMenu> {
        self.menu.as_mut()
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleCapable for Panel {
    fn style_state(&self) -> &StyleState {
        &self.style
    }

    fn style_state_mut(&mut self) -> &mut StyleState {
        &mut self.style
    }

    fn apply_palette(&mut self, palette: &Palette) {
        self.fill = palette.page_back;
        self.fore = palette.fore;
        self.border = palette.border;
    }
}

impl ScaleCapable for Panel {
    fn fonts(&self) -> &WidgetFonts {
        &self.fonts
    }

    fn fonts_mut(&mut self) -> &mut WidgetFonts {
        &mut self.fonts
    }
}

impl Widget for Panel {
    fn widget_type(&self) -> &str {
        "Panel"
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

    fn attachments_mut(&mut self) -> Vec<&mut dyn StyleCapable> {
        match &mut self.menu {
            Some(menu) => vec![menu],
            None => Vec::new(),
        }
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
    fn new_panel_seeds_from_default_palette() {
        let panel = Panel::new();
        assert_eq!(panel.fill(), crate::color::tint::BLUE);
        assert_eq!(panel.border(), crate::color::accent::BLUE);
    }

    #[test]
    fn restyle_updates_all_slots() {
        let mut panel = Panel::new();
        panel.set_style(StyleId::Green);
        assert_eq!(panel.fill(), crate::color::tint::GREEN);
        assert_eq!(panel.border(), crate::color::accent::GREEN);
        assert_eq!(panel.fore(), crate::color::text::PRIMARY);
    }

    #[test]
    fn menu_surfaces_as_attachment() {
        let mut bare = Panel::new();
        assert!(bare.attachments_mut().is_empty());

        let mut with_menu = Panel::new().with_menu(ContextMenu::new());
        assert_eq!(with_menu.attachments_mut().len(), 1);
    }
}
