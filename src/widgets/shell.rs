//! Root window chrome: title bar, border, and control box.
//!
//! Every visual setter compares the incoming value against the backing field
//! and bumps the revision counter only on a real change. Hosts watch the
//! revision to decide when to repaint, so a setter that always (or never)
//! reported a change would cause redundant paints or a stale title bar.

use std::any::Any;

use crate::color::Rgb;
use crate::font::FontSpec;
use crate::scale::{ScaleCapable, WidgetFonts};
use crate::style::{Palette, StyleCapable, StyleState};
use crate::widget::Widget;

/// Bump `revision` only when the slot actually changes.
fn assign(slot: &mut Rgb, value: Rgb, revision: &mut u64) {
    if *slot != value {
        *slot = value;
        *revision += 1;
    }
}

/// The window shell widget, root of a frame's tree.
pub struct Shell {
    title: String,
    style: StyleState,
    fonts: WidgetFonts,
    title_bar: Rgb,
    title_fore: Rgb,
    border: Rgb,
    fore: Rgb,
    back: Rgb,
    page_back: Rgb,
    control_box_fore: Rgb,
    control_box_hover: Rgb,
    control_box_close_hover: Rgb,
    title_height: u32,
    movable: bool,
    esc_close: bool,
    forbid_alt_f4: bool,
    revision: u64,
}

impl Shell {
    pub fn new(title: impl Into<String>) -> Self {
        let palette = Palette::default();
        Self {
            title: title.into(),
            title_bar: palette.title_bar,
            title_fore: palette.title_fore,
            border: palette.border,
            fore: palette.fore,
            back: palette.back,
            page_back: palette.page_back,
            control_box_fore: palette.control_box_fore,
            control_box_hover: palette.control_box_hover,
            control_box_close_hover: palette.control_box_close_hover,
            fonts: WidgetFonts::new(palette.font.clone())
                .with_title(FontSpec::new(palette.font.family.clone(), 12.0)),
            style: StyleState::new(),
            title_height: 35,
            movable: true,
            esc_close: false,
            forbid_alt_f4: false,
            revision: 0,
        }
    }

    /// Paint generation; moves exactly when something visible changed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.title != title {
            self.title = title;
            self.revision += 1;
        }
    }

    pub fn title_bar(&self) -> Rgb {
        self.title_bar
    }

    pub fn set_title_bar(&mut self, value: Rgb) {
        assign(&mut self.title_bar, value, &mut self.revision);
    }

    pub fn title_fore(&self) -> Rgb {
        self.title_fore
    }

    pub fn set_title_fore(&mut self, value: Rgb) {
        assign(&mut self.title_fore, value, &mut self.revision);
    }

    pub fn border(&self) -> Rgb {
        self.border
    }

    pub fn set_border(&mut self, value: Rgb) {
        assign(&mut self.border, value, &mut self.revision);
    }

    pub fn fore(&self) -> Rgb {
        self.fore
    }

    pub fn set_fore(&mut self, value: Rgb) {
        assign(&mut self.fore, value, &mut self.revision);
    }

    pub fn back(&self) -> Rgb {
        self.back
    }

    pub fn set_back(&mut self, value: Rgb) {
        assign(&mut self.back, value, &mut self.revision);
    }

    /// Background handed to pages hosted under this shell.
    pub fn page_back(&self) -> Rgb {
        self.page_back
    }

    pub fn set_page_back(&mut self, value: Rgb) {
        assign(&mut self.page_back, value, &mut self.revision);
    }

    pub fn control_box_fore(&self) -> Rgb {
        self.control_box_fore
    }

    pub fn set_control_box_fore(&mut self, value: Rgb) {
        assign(&mut self.control_box_fore, value, &mut self.revision);
    }

    pub fn control_box_hover(&self) -> Rgb {
        self.control_box_hover
    }

    pub fn set_control_box_hover(&mut self, value: Rgb) {
        assign(&mut self.control_box_hover, value, &mut self.revision);
    }

    pub fn control_box_close_hover(&self) -> Rgb {
        self.control_box_close_hover
    }

    pub fn set_control_box_close_hover(&mut self, value: Rgb) {
        assign(&mut self.control_box_close_hover, value, &mut self.revision);
    }

    pub fn title_height(&self) -> u32 {
        self.title_height
    }

    pub fn set_title_height(&mut self, value: u32) {
        if self.title_height != value {
            self.title_height = value;
            self.revision += 1;
        }
    }

    /// Whether the host lets the user drag the window by its title bar.
    pub fn movable(&self) -> bool {
        self.movable
    }

    pub fn set_movable(&mut self, value: bool) {
        self.movable = value;
    }

    /// Whether ESC closes the window.
    pub fn esc_close(&self) -> bool {
        self.esc_close
    }

    pub fn set_esc_close(&mut self, value: bool) {
        self.esc_close = value;
    }

    /// Whether the host should swallow ALT+F4.
    pub fn forbid_alt_f4(&self) -> bool {
        self.forbid_alt_f4
    }

    pub fn set_forbid_alt_f4(&mut self, value: bool) {
        self.forbid_alt_f4 = value;
    }

    pub fn fonts(&self) -> &WidgetFonts {
        &self.fonts
    }
}

impl StyleCapable for Shell {
    fn style_state(&self) -> &StyleState {
        &self.style
    }

    fn style_state_mut(&mut self) -> &mut StyleState {
        &mut self.style
    }

    fn apply_palette(&mut self, palette: &Palette) {
        self.set_title_bar(palette.title_bar);
        self.set_title_fore(palette.title_fore);
        self.set_border(palette.border);
        self.set_fore(palette.fore);
        self.set_back(palette.back);
        self.set_page_back(palette.page_back);
        self.set_control_box_fore(palette.control_box_fore);
        self.set_control_box_hover(palette.control_box_hover);
        self.set_control_box_close_hover(palette.control_box_close_hover);
    }
}

impl ScaleCapable for Shell {
    fn fonts(&self) -> &WidgetFonts {
        &self.fonts
    }

    fn fonts_mut(&mut self) -> &mut WidgetFonts {
        &mut self.fonts
    }
}

impl Widget for Shell {
    fn widget_type(&self) -> &str {
        "Shell"
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{palette_of, StyleCapableExt, StyleId};

    #[test]
    fn new_shell_seeds_default_chrome() {
        let shell = Shell::new("Main");
        assert_eq!(shell.title(), "Main");
        assert_eq!(shell.title_bar(), crate::color::accent::BLUE);
        assert_eq!(shell.title_height(), 35);
        assert_eq!(shell.revision(), 0);
        assert!(shell.movable());
        assert!(!shell.esc_close());
        assert!(!shell.forbid_alt_f4());
    }

    #[test]
    fn setters_bump_revision_only_on_real_change() {
        let mut shell = Shell::new("Main");
        let hover = Rgb::new(1, 2, 3);

        shell.set_control_box_hover(hover);
        assert_eq!(shell.revision(), 1);

        // Same value again: no phantom repaint.
        shell.set_control_box_hover(hover);
        assert_eq!(shell.revision(), 1);

        shell.set_control_box_hover(Rgb::new(9, 9, 9));
        assert_eq!(shell.revision(), 2);
    }

    #[test]
    fn title_setter_detects_change() {
        let mut shell = Shell::new("Main");
        shell.set_title("Main");
        assert_eq!(shell.revision(), 0);
        shell.set_title("Other");
        assert_eq!(shell.revision(), 1);
    }

    #[test]
    fn reapplying_the_same_palette_is_revision_neutral() {
        let mut shell = Shell::new("Main");
        shell.set_style(StyleId::Purple);
        let after_first = shell.revision();
        assert!(after_first > 0);

        let purple = palette_of(StyleId::Purple).unwrap().clone();
        shell.apply_custom(&purple);
        assert_eq!(shell.revision(), after_first);
    }

    #[test]
    fn restyle_rewrites_the_whole_chrome() {
        let mut shell = Shell::new("Main");
        shell.set_style(StyleId::DarkBlue);
        assert_eq!(shell.title_bar(), crate::color::accent::DARK_BLUE);
        assert_eq!(shell.back(), crate::color::accent::DARK_BLUE);
        assert_eq!(shell.fore(), crate::color::text::INVERSE);
    }

    #[test]
    fn shell_has_a_title_font() {
        let shell = Shell::new("Main");
        assert!(shell.fonts().title().is_some());
    }
}
