//! Hosted page widget and the parameter envelope delivered to it.

use std::any::Any;

use crate::color::Rgb;
use crate::frame::WindowState;
use crate::scale::{ScaleCapable, WidgetFonts};
use crate::style::{Palette, StyleCapable, StyleState};
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// PageParams
// ---------------------------------------------------------------------------

/// Parameter envelope routed to a page (or to frame listeners when
/// unaddressed).
///
/// The receiver flips `handled` to tell the sender the payload was consumed.
pub struct PageParams {
    payload: Box<dyn Any>,
    /// Index of the sending page, if any.
    pub source: Option<i32>,
    /// Index of the destination page; `None` broadcasts to the frame.
    pub dest: Option<i32>,
    pub handled: bool,
}

impl PageParams {
    pub fn new(payload: impl Any) -> Self {
        Self {
            payload: Box::new(payload),
            source: None,
            dest: None,
            handled: false,
        }
    }

    /// Address the envelope to a page (chainable).
    pub fn addressed_to(mut self, index: i32) -> Self {
        self.dest = Some(index);
        self
    }

    /// Record the sending page (chainable).
    pub fn from_page(mut self, index: i32) -> Self {
        self.source = Some(index);
        self
    }

    /// Downcast the payload.
    pub fn payload_as<T: 'static>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// One page hosted behind a tab.
///
/// Pages carry a frame-assigned index used for addressing, plus init/final
/// lifecycle flags the frame drives: `init` runs at first selection,
/// `finalize` when the page is removed or its frame closes.
pub struct Page {
    index: i32,
    title: String,
    style: StyleState,
    fonts: WidgetFonts,
    back: Rgb,
    fore: Rgb,
    initialized: bool,
    finalized: bool,
    window_state: WindowState,
    params_handler: Option<Box<dyn FnMut(&mut PageParams)>>,
}

impl Page {
    pub fn new(index: i32, title: impl Into<String>) -> Self {
        let palette = Palette::default();
        Self {
            index,
            title: title.into(),
            back: palette.page_back,
            fore: palette.fore,
            fonts: WidgetFonts::new(palette.font.clone()),
            style: StyleState::new(),
            initialized: false,
            finalized: false,
            window_state: WindowState::Normal,
            params_handler: None,
        }
    }

    /// Install the parameter receiver (chainable).
    pub fn on_params(mut self, handler: impl FnMut(&mut PageParams) + 'static) -> Self {
        self.params_handler = Some(Box::new(handler));
        self
    }

    pub fn index(&self) -> i32 {
        self.index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn back(&self) -> Rgb {
        self.back
    }

    pub fn fore(&self) -> Rgb {
        self.fore
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// First-selection hook. Returns whether it ran this time.
    pub fn init(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        true
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Teardown hook. Returns whether it ran this time.
    pub fn finalize(&mut self) -> bool {
        if self.finalized {
            return false;
        }
        self.finalized = true;
        true
    }

    pub fn window_state(&self) -> WindowState {
        self.window_state
    }

    /// Frame broadcast: the hosting window changed state.
    pub fn window_state_changed(&mut self, current: WindowState, _previous: WindowState) {
        self.window_state = current;
    }

    /// Hand an envelope to the page's receiver, if one is installed.
    pub fn receive_params(&mut self, params: &mut PageParams) {
        if let Some(handler) = &mut self.params_handler {
            handler(params);
        }
    }
}

impl StyleCapable for Page {
    fn style_state(&self) -> &StyleState {
        &self.style
    }

    fn style_state_mut(&mut self) -> &mut StyleState {
        &mut self.style
    }

    fn apply_palette(&mut self, palette: &Palette) {
        self.back = palette.page_back;
        self.fore = palette.fore;
    }
}

impl ScaleCapable for Page {
    fn fonts(&self) -> &WidgetFonts {
        &self.fonts
    }

    fn fonts_mut(&mut self) -> &mut WidgetFonts {
        &mut self.fonts
    }
}

impl Widget for Page {
    fn widget_type(&self) -> &str {
        "Page"
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

    fn is_page(&self) -> bool {
        true
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
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn page_identity() {
        let page = Page::new(7, "Settings");
        assert_eq!(page.index(), 7);
        assert_eq!(page.title(), "Settings");
        assert!(page.is_page());
    }

    #[test]
    fn init_runs_once() {
        let mut page = Page::new(0, "p");
        assert!(page.init());
        assert!(!page.init());
        assert!(page.is_initialized());
    }

    #[test]
    fn finalize_runs_once() {
        let mut page = Page::new(0, "p");
        assert!(page.finalize());
        assert!(!page.finalize());
    }

    #[test]
    fn receiver_sees_payload_and_can_mark_handled() {
        let seen = Rc::new(Cell::new(0));
        let seen_in = Rc::clone(&seen);
        let mut page = Page::new(3, "p").on_params(move |params| {
            if let Some(value) = params.payload_as::<i32>() {
                seen_in.set(*value);
                params.handled = true;
            }
        });

        let mut params = PageParams::new(42i32).addressed_to(3).from_page(1);
        page.receive_params(&mut params);
        assert_eq!(seen.get(), 42);
        assert!(params.handled);
        assert_eq!(params.source, Some(1));
    }

    #[test]
    fn receiver_ignores_foreign_payload_type() {
        let mut page = Page::new(0, "p").on_params(|params| {
            if params.payload_as::<i32>().is_some() {
                params.handled = true;
            }
        });
        let mut params = PageParams::new("text");
        page.receive_params(&mut params);
        assert!(!params.handled);
    }

    #[test]
    fn restyle_updates_page_background() {
        let mut page = Page::new(0, "p");
        page.set_style(StyleId::Orange);
        assert_eq!(page.back(), crate::color::tint::ORANGE);
    }
}
