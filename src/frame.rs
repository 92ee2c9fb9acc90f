//! Composite container adapter: the "form" shell around a widget tree.
//!
//! A [`Frame`] owns the tree, keeps a [`Shell`] at its root, hosts pages
//! behind at most one tab panel, and triggers the style and scale engines at
//! the right lifecycle points: first show, explicit style set, explicit DPI
//! refresh. Everything the host needs to react to is accumulated in a
//! drain-queue of [`FrameEvent`]s.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::defer::OneShotTask;
use crate::hotkey::{HotKey, HotKeyTable};
use crate::scale::{refresh_tree, ScaleConfig, ScaleReport};
use crate::settings;
use crate::style::{
    apply_style, palette_of, Palette, StyleCapableExt, StyleError, StyleId, StyleReport,
};
use crate::tree::{WidgetId, WidgetTree};
use crate::widget::Widget;
use crate::widgets::{Page, PageParams, Shell, TabPanel};

/// Delay before the deferred after-shown notice falls due.
const AFTER_SHOWN_DELAY: Duration = Duration::from_millis(100);

// ---------------------------------------------------------------------------
// Events and errors
// ---------------------------------------------------------------------------

/// Host window state mirrored into the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// Things that happened to the frame, in order of occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameEvent {
    PageAdded(i32),
    PageSelected(i32),
    PageRemoved(i32),
    StyleChanged(StyleId),
    WindowStateChanged(WindowState),
    AfterShown,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("no tab panel available to host pages")]
    NoTabHost,
    #[error("no page with index {0}")]
    PageNotFound(i32),
    #[error("a page with index {0} already exists")]
    DuplicatePage(i32),
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// Top-level container: shell chrome, hosted pages, engine triggers.
pub struct Frame {
    tree: WidgetTree,
    root: WidgetId,
    main_tabs: Option<WidgetId>,
    events: Vec<FrameEvent>,
    shown: bool,
    window_state: WindowState,
    host_auto_scale: bool,
    after_shown: Option<Box<dyn FnOnce(&mut Frame)>>,
    after_due: Arc<AtomicBool>,
    after_timer: Option<OneShotTask>,
    params_handler: Option<Box<dyn FnMut(&mut PageParams)>>,
    translator: Option<Box<dyn FnMut(&mut WidgetTree)>>,
    hot_keys: HotKeyTable,
}

impl Frame {
    pub fn new(title: impl Into<String>) -> Self {
        let mut tree = WidgetTree::new();
        let root = tree.mount(Shell::new(title));
        Self {
            tree,
            root,
            main_tabs: None,
            events: Vec::new(),
            shown: false,
            window_state: WindowState::Normal,
            host_auto_scale: true,
            after_shown: None,
            after_due: Arc::new(AtomicBool::new(false)),
            after_timer: None,
            params_handler: None,
            translator: None,
            hot_keys: HotKeyTable::new(),
        }
    }

    // --- tree access -------------------------------------------------------

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    pub fn root(&self) -> WidgetId {
        self.root
    }

    pub fn shell(&self) -> &Shell {
        self.tree
            .widget_as::<Shell>(self.root)
            .expect("frame root is always a shell")
    }

    pub fn shell_mut(&mut self) -> &mut Shell {
        self.tree
            .widget_as_mut::<Shell>(self.root)
            .expect("frame root is always a shell")
    }

    pub fn title(&self) -> &str {
        self.shell().title()
    }

    /// Mount a widget directly under the shell.
    pub fn attach(&mut self, widget: impl Widget + 'static) -> WidgetId {
        self.tree.mount_child(self.root, widget)
    }

    // --- page hosting ------------------------------------------------------

    pub fn main_tab_panel(&self) -> Option<WidgetId> {
        self.main_tabs
    }

    /// Designate the tab host for page operations.
    pub fn set_main_tab_panel(&mut self, id: WidgetId) -> Result<(), FrameError> {
        match self.tree.widget(id) {
            Some(widget) if widget.is_tab_host() => {
                self.main_tabs = Some(id);
                Ok(())
            }
            _ => Err(FrameError::NoTabHost),
        }
    }

    /// Resolve the tab host, adopting the sole tab panel in the tree when
    /// none was designated.
    fn bind_default_tab_panel(&mut self) -> Option<WidgetId> {
        if let Some(tabs) = self.main_tabs {
            if self.tree.contains(tabs) {
                return Some(tabs);
            }
            self.main_tabs = None;
        }
        let candidates = self.tree.find_all::<TabPanel>(self.root);
        if let [only] = candidates[..] {
            log::debug!("[Frame] adopted {only:?} as the main tab panel");
            self.main_tabs = Some(only);
        }
        self.main_tabs
    }

    /// Mount a page under the tab host.
    pub fn add_page(&mut self, page: Page) -> Result<WidgetId, FrameError> {
        let tabs = self.bind_default_tab_panel().ok_or(FrameError::NoTabHost)?;
        let index = page.index();
        if self.page(index).is_some() {
            return Err(FrameError::DuplicatePage(index));
        }
        let id = self.tree.mount_child(tabs, page);
        log::debug!("[Frame] page {index} added as {id:?}");
        self.events.push(FrameEvent::PageAdded(index));
        Ok(id)
    }

    /// Look up a hosted page by its logical index.
    pub fn page(&self, index: i32) -> Option<WidgetId> {
        let tabs = self.main_tabs?;
        self.tree.children(tabs).iter().copied().find(|&id| {
            self.tree
                .widget_as::<Page>(id)
                .is_some_and(|page| page.index() == index)
        })
    }

    pub fn has_page(&self, index: i32) -> bool {
        self.page(index).is_some()
    }

    /// Look up a hosted page by title. Titles are not required to be unique;
    /// the first match in child order wins.
    pub fn page_by_title(&self, title: &str) -> Option<WidgetId> {
        let tabs = self.main_tabs?;
        self.tree.children(tabs).iter().copied().find(|&id| {
            self.tree
                .widget_as::<Page>(id)
                .is_some_and(|page| page.title() == title)
        })
    }

    /// The currently visible page, if any.
    pub fn selected_page(&self) -> Option<WidgetId> {
        let tabs = self.main_tabs?;
        let selected = self.tree.widget(tabs)?.selected_tab()?;
        self.tree.children(tabs).get(selected).copied()
    }

    /// Bring a page to the front. First selection runs the page's init hook.
    pub fn select_page(&mut self, index: i32) -> bool {
        let Some(tabs) = self.bind_default_tab_panel() else {
            return false;
        };
        let Some(page_id) = self.page(index) else {
            return false;
        };
        let position = self.tree.children(tabs).iter().position(|&id| id == page_id);
        if let Some(host) = self.tree.widget_mut(tabs) {
            host.set_selected_tab(position);
        }
        if let Some(page) = self.tree.widget_as_mut::<Page>(page_id) {
            if page.init() {
                log::debug!("[Frame] page {index} initialized on first selection");
            }
        }
        self.events.push(FrameEvent::PageSelected(index));
        true
    }

    /// [`Frame::select_page`] by page title.
    pub fn select_page_by_title(&mut self, title: &str) -> bool {
        let Some(page_id) = self.page_by_title(title) else {
            return false;
        };
        match self.tree.widget_as::<Page>(page_id).map(Page::index) {
            Some(index) => self.select_page(index),
            None => false,
        }
    }

    /// Finalize and unmount a page.
    pub fn remove_page(&mut self, index: i32) -> bool {
        let Some(tabs) = self.main_tabs else {
            return false;
        };
        let Some(page_id) = self.page(index) else {
            return false;
        };
        let position = self.tree.children(tabs).iter().position(|&id| id == page_id);
        if let Some(page) = self.tree.widget_as_mut::<Page>(page_id) {
            page.finalize();
        }
        self.tree.unmount(page_id);
        // Keep the selection pointing at the same page where possible.
        let selected = self.tree.widget(tabs).and_then(|host| host.selected_tab());
        if let (Some(sel), Some(pos)) = (selected, position) {
            let next = match sel {
                s if s == pos => None,
                s if s > pos => Some(s - 1),
                s => Some(s),
            };
            if let Some(host) = self.tree.widget_mut(tabs) {
                host.set_selected_tab(next);
            }
        }
        self.events.push(FrameEvent::PageRemoved(index));
        true
    }

    /// Listener for envelopes not addressed to any page.
    pub fn on_receive_params(&mut self, handler: impl FnMut(&mut PageParams) + 'static) {
        self.params_handler = Some(Box::new(handler));
    }

    /// Route an envelope to its destination page, or to the frame's own
    /// listener when unaddressed. Returns the receiver's `handled` flag.
    pub fn send_param_to_page(&mut self, params: &mut PageParams) -> Result<bool, FrameError> {
        match params.dest {
            Some(index) => {
                let page_id = self.page(index).ok_or(FrameError::PageNotFound(index))?;
                let page = self
                    .tree
                    .widget_as_mut::<Page>(page_id)
                    .ok_or(FrameError::PageNotFound(index))?;
                page.receive_params(params);
            }
            None => {
                if let Some(handler) = self.params_handler.as_mut() {
                    handler(params);
                }
            }
        }
        Ok(params.handled)
    }

    // --- style -------------------------------------------------------------

    /// The shell's current style flag.
    pub fn style(&self) -> StyleId {
        self.shell().style()
    }

    /// Pin a concrete style on the shell and propagate it.
    ///
    /// Sentinels are programmer errors here; use [`Frame::reset_style`] to
    /// go back to tracking the process style.
    pub fn set_style(&mut self, style: StyleId) -> Result<StyleReport, StyleError> {
        let palette = palette_of(style)?.clone();
        self.shell_mut().apply_custom(&palette);
        let report = apply_style(&mut self.tree, self.root, style)?;
        self.events.push(FrameEvent::StyleChanged(style));
        Ok(report)
    }

    /// Forget any pinned style; the next render re-adopts the process style.
    pub fn reset_style(&mut self) {
        self.shell_mut().set_style(StyleId::Inherited);
    }

    /// Apply a style under the inherited policy: the shell adopts it only
    /// while tracking, and so does every descendant.
    pub fn set_inherited_style(&mut self, style: StyleId) -> Result<StyleReport, StyleError> {
        let palette = palette_of(style)?.clone();
        self.shell_mut().apply_inherited(&palette);
        let report = apply_style(&mut self.tree, self.root, style)?;
        self.events.push(FrameEvent::StyleChanged(style));
        Ok(report)
    }

    /// Restyle only what the user can currently see: the selected page and
    /// the tab host's own non-page children.
    ///
    /// Sweeping from the host is enough; the visibility rule keeps the sweep
    /// out of the hidden pages.
    pub fn style_selected_page(
        &mut self,
        style: StyleId,
    ) -> Result<Option<StyleReport>, StyleError> {
        let Some(tabs) = self.main_tabs else {
            return Ok(None);
        };
        if self.selected_page().is_none() {
            return Ok(None);
        }
        Ok(Some(apply_style(&mut self.tree, tabs, style)?))
    }

    /// Re-apply the process style and run the translation pass.
    ///
    /// Follows the process settings snapshot: an invalid (sentinel) global
    /// style means "leave colors alone".
    pub fn render(&mut self) -> Result<Option<StyleReport>, StyleError> {
        let snapshot = settings::snapshot();
        let report = if snapshot.style.is_valid() {
            Some(self.set_inherited_style(snapshot.style)?)
        } else {
            None
        };
        if snapshot.multi_language {
            if let Some(translate) = self.translator.as_mut() {
                log::debug!("[Frame] translation pass");
                translate(&mut self.tree);
            }
        }
        Ok(report)
    }

    /// Install the translation callback run by [`Frame::render`] when the
    /// multi-language setting is on.
    pub fn set_translator(&mut self, translate: impl FnMut(&mut WidgetTree) + 'static) {
        self.translator = Some(Box::new(translate));
    }

    // --- scale -------------------------------------------------------------

    /// Rescale the whole tree against the current process settings.
    pub fn refresh_scale(&mut self) -> ScaleReport {
        let config = ScaleConfig::capture();
        self.refresh_scale_with(&config)
    }

    pub fn refresh_scale_with(&mut self, config: &ScaleConfig) -> ScaleReport {
        refresh_tree(&mut self.tree, self.root, config)
    }

    /// Rescale only the selected page's subtree.
    pub fn refresh_selected_page_with(&mut self, config: &ScaleConfig) -> Option<ScaleReport> {
        let page_id = self.selected_page()?;
        Some(refresh_tree(&mut self.tree, page_id, config))
    }

    // --- lifecycle ---------------------------------------------------------

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Whether the host's own automatic scaling is still active.
    pub fn host_auto_scale(&self) -> bool {
        self.host_auto_scale
    }

    /// First-show sequence: take over scaling from the host, default the
    /// background if untouched, rescale, render, arm the after-shown notice.
    pub fn on_first_shown(&mut self) {
        if self.shown {
            return;
        }
        self.shown = true;
        log::info!("[Frame] first shown: {:?}", self.title());

        // One scaling engine at a time.
        self.host_auto_scale = false;

        let default = Palette::default();
        if self.shell().back() == default.back {
            self.shell_mut().set_back(default.page_back);
        }

        self.refresh_scale();
        if let Err(err) = self.render() {
            log::warn!("[Frame] render failed: {err}");
        }
        self.arm_after_shown();
    }

    /// Subscribe the one-shot after-shown notice.
    ///
    /// Subscribing after the frame is already shown arms the timer
    /// immediately.
    pub fn set_after_shown(&mut self, hook: impl FnOnce(&mut Frame) + 'static) {
        self.after_shown = Some(Box::new(hook));
        if self.shown {
            self.arm_after_shown();
        }
    }

    pub fn cancel_after_shown(&mut self) {
        self.after_shown = None;
        self.after_due.store(false, Ordering::SeqCst);
        if let Some(mut timer) = self.after_timer.take() {
            timer.cancel();
        }
    }

    fn arm_after_shown(&mut self) {
        if self.after_shown.is_none() {
            return;
        }
        let due = Arc::clone(&self.after_due);
        match OneShotTask::try_schedule(AFTER_SHOWN_DELAY, move || {
            due.store(true, Ordering::SeqCst);
        }) {
            Some(timer) => self.after_timer = Some(timer),
            // No runtime: due immediately, delivered on the next pump.
            None => self.after_due.store(true, Ordering::SeqCst),
        }
    }

    /// Deliver due deferred notices. Call once per host event-loop turn.
    ///
    /// Returns whether the after-shown hook ran.
    pub fn pump(&mut self) -> bool {
        if !self.after_due.swap(false, Ordering::SeqCst) {
            return false;
        }
        let Some(hook) = self.after_shown.take() else {
            return false;
        };
        self.after_timer = None;
        log::debug!("[Frame] after-shown notice delivered");
        self.events.push(FrameEvent::AfterShown);
        hook(self);
        true
    }

    pub fn window_state(&self) -> WindowState {
        self.window_state
    }

    /// Mirror a host window-state change and broadcast it to every page.
    pub fn set_window_state(&mut self, state: WindowState) {
        if self.window_state == state {
            return;
        }
        let previous = self.window_state;
        self.window_state = state;
        log::debug!("[Frame] window state {previous:?} -> {state:?}");
        self.events.push(FrameEvent::WindowStateChanged(state));
        if let Some(tabs) = self.main_tabs {
            let pages: Vec<WidgetId> = self.tree.children(tabs).to_vec();
            for id in pages {
                if let Some(page) = self.tree.widget_as_mut::<Page>(id) {
                    page.window_state_changed(state, previous);
                }
            }
        }
    }

    /// Shut down: cancel the deferred notice, finalize and drop every page.
    pub fn close(&mut self) {
        log::info!("[Frame] closing {:?}", self.title());
        self.cancel_after_shown();
        let Some(tabs) = self.main_tabs else {
            return;
        };
        let pages: Vec<WidgetId> = self.tree.children(tabs).to_vec();
        for id in pages {
            let Some(page) = self.tree.widget_as_mut::<Page>(id) else {
                continue;
            };
            page.finalize();
            let index = page.index();
            self.tree.unmount(id);
            self.events.push(FrameEvent::PageRemoved(index));
        }
        if let Some(host) = self.tree.widget_mut(tabs) {
            host.set_selected_tab(None);
        }
    }

    // --- hot keys ----------------------------------------------------------

    pub fn register_hot_key(&self, hot_key: HotKey) -> Option<u32> {
        self.hot_keys.register(hot_key)
    }

    pub fn unregister_hot_key(&self, hot_key: HotKey) -> Option<u32> {
        self.hot_keys.unregister(hot_key)
    }

    pub fn hot_keys(&self) -> &HotKeyTable {
        &self.hot_keys
    }

    // --- event feed --------------------------------------------------------

    /// Drain and return everything that happened since the last drain.
    pub fn pending_events(&mut self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn has_pending(&self) -> bool {
        !self.events.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
