//! Tree-wide style propagation.
//!
//! [`apply_style`] writes a palette into every descendant that still tracks
//! its ancestors; [`apply_custom_style`] overwrites every reachable widget
//! and pins it `Custom`. Both follow the same traversal rules: pre-order,
//! parent before children, opaque widgets are boundaries, unselected tab
//! pages are invisible, and stale ids are skipped without aborting siblings.

use crate::tree::{WidgetId, WidgetTree};
use crate::widget::{Descent, Widget};

use super::capable::StyleCapableExt;
use super::id::StyleId;
use super::palette::{palette_of, Palette, StyleError};

// ---------------------------------------------------------------------------
// StyleReport
// ---------------------------------------------------------------------------

/// Outcome of one propagation sweep.
#[derive(Debug)]
pub struct StyleReport {
    /// The style that was propagated.
    pub style: StyleId,
    /// Widgets whose colors changed, in traversal order.
    pub touched: Vec<WidgetId>,
    /// Stale ids encountered and skipped.
    pub stale_skips: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Inherited,
    Custom,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Propagate `style` through `root`'s descendants, honoring the inherited
/// check.
///
/// `root`'s own colors are the caller's business; only its attachments and
/// its descendants are touched here.
pub fn apply_style(
    tree: &mut WidgetTree,
    root: WidgetId,
    style: StyleId,
) -> Result<StyleReport, StyleError> {
    let palette = palette_of(style)?.clone();
    Ok(sweep(tree, root, style, &palette, Mode::Inherited))
}

/// Overwrite every reachable descendant's colors and pin them `Custom`.
pub fn apply_custom_style(
    tree: &mut WidgetTree,
    root: WidgetId,
    style: StyleId,
) -> Result<StyleReport, StyleError> {
    let palette = palette_of(style)?.clone();
    Ok(sweep(tree, root, style, &palette, Mode::Custom))
}

// ---------------------------------------------------------------------------
// Sweep
// ---------------------------------------------------------------------------

fn sweep(
    tree: &mut WidgetTree,
    root: WidgetId,
    style: StyleId,
    palette: &Palette,
    mode: Mode,
) -> StyleReport {
    log::debug!("[Style] {mode:?} sweep of {style} below {root:?}");

    let mut report = StyleReport {
        style,
        touched: Vec::new(),
        stale_skips: 0,
    };

    // The root contributes only its attachments.
    if let Some(widget) = tree.widget_mut(root) {
        restyle_attachments(widget, palette, mode);
    }

    let mut stack: Vec<WidgetId> = Vec::new();
    push_children(tree, root, &mut stack);

    while let Some(id) = stack.pop() {
        if !tree.contains(id) {
            report.stale_skips += 1;
            log::warn!("[Style] skipping stale widget {id:?}");
            continue;
        }
        if hidden_tab_page(tree, id) {
            continue;
        }

        let mut descend = false;
        if let Some(widget) = tree.widget_mut(id) {
            descend = widget.descent() == Descent::Open;
            let touched = match (widget.style_capable_mut(), mode) {
                (Some(capable), Mode::Inherited) => capable.apply_inherited(palette),
                (Some(capable), Mode::Custom) => {
                    capable.apply_custom(palette);
                    true
                }
                (None, _) => false,
            };
            restyle_attachments(widget, palette, mode);
            if touched {
                report.touched.push(id);
            }
        }

        if descend {
            push_children(tree, id, &mut stack);
        }
    }

    log::debug!(
        "[Style] {style}: {} widget(s) touched, {} stale skip(s)",
        report.touched.len(),
        report.stale_skips
    );
    report
}

fn push_children(tree: &WidgetTree, id: WidgetId, stack: &mut Vec<WidgetId>) {
    // Reverse push keeps sibling order: first child is popped first.
    for &child in tree.children(id).iter().rev() {
        stack.push(child);
    }
}

/// A page under a tab host is visible only while it is the selected tab.
/// Non-page children and pages outside tab hosts are unaffected.
fn hidden_tab_page(tree: &WidgetTree, id: WidgetId) -> bool {
    let Some(parent) = tree.parent(id) else {
        return false;
    };
    let (Some(widget), Some(host)) = (tree.widget(id), tree.widget(parent)) else {
        return false;
    };
    if !widget.is_page() || !host.is_tab_host() {
        return false;
    }
    let index = tree.children(parent).iter().position(|&child| child == id);
    host.selected_tab() != index
}

fn restyle_attachments(widget: &mut dyn Widget, palette: &Palette, mode: Mode) {
    for attachment in widget.attachments_mut() {
        match mode {
            Mode::Inherited => {
                attachment.apply_inherited(palette);
            }
            Mode::Custom => attachment.apply_custom(palette),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
