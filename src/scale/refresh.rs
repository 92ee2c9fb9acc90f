//! Tree-wide font rescaling.
//!
//! [`refresh_tree`] walks a subtree and rescales every scale-capable widget
//! from its captured baseline, so repeated refreshes converge instead of
//! compounding. Unlike style propagation the walk includes the start widget
//! and ignores tab selection; layout must stay correct on pages the user has
//! not opened yet. Opaque widgets still bound the walk.

use crate::tree::{WidgetId, WidgetTree};
use crate::widget::Descent;

use super::config::ScaleConfig;

/// Outcome of one scale refresh.
#[derive(Debug)]
pub struct ScaleReport {
    /// Widgets whose fonts were rescaled, in traversal order.
    pub touched: Vec<WidgetId>,
    /// Stale ids encountered and skipped.
    pub stale_skips: usize,
}

/// Rescale `start` and its descendants against `config`.
///
/// When the configuration needs no scaling the whole refresh is a no-op and
/// baselines are left uncaptured.
pub fn refresh_tree(tree: &mut WidgetTree, start: WidgetId, config: &ScaleConfig) -> ScaleReport {
    let mut report = ScaleReport {
        touched: Vec::new(),
        stale_skips: 0,
    };

    if !config.needs_scaling() {
        log::debug!("[Scale] refresh below {start:?} skipped: nothing to scale");
        return report;
    }
    log::debug!(
        "[Scale] refreshing below {start:?} at effective {:.2}",
        config.effective_scale()
    );

    let mut stack = vec![start];
    while let Some(id) = stack.pop() {
        if !tree.contains(id) {
            report.stale_skips += 1;
            log::warn!("[Scale] skipping stale widget {id:?}");
            continue;
        }

        let mut descend = false;
        if let Some(widget) = tree.widget_mut(id) {
            descend = widget.descent() == Descent::Open;
            if let Some(capable) = widget.scale_capable_mut() {
                let fonts = capable.fonts_mut();
                fonts.capture_baselines();
                fonts.rescale(config);
                capable.scale_applied();
                report.touched.push(id);
            }
        }

        if descend {
            for &child in tree.children(id).iter().rev() {
                stack.push(child);
            }
        }
    }

    log::debug!(
        "[Scale] refresh done: {} widget(s), {} stale skip(s)",
        report.touched.len(),
        report.stale_skips
    );
    report
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Label, ListPanel, Page, Panel, Shell, TabPanel};
    use pretty_assertions::assert_eq;

    fn body_size(tree: &WidgetTree, id: WidgetId) -> f32 {
        tree.widget(id)
            .and_then(|w| w.as_any().downcast_ref::<Label>())
            .unwrap()
            .fonts()
            .body()
            .size
    }

    #[test]
    fn refresh_shrinks_fonts_at_150_percent() {
        let mut tree = WidgetTree::new();
        let root = tree.mount(Shell::new("Main"));
        let panel = tree.mount_child(root, Panel::new());
        let label = tree.mount_child(panel, Label::new("hi"));

        let config = ScaleConfig::new(true, 1.5);
        let report = refresh_tree(&mut tree, root, &config);

        // The start widget is scaled too, parent before children.
        assert_eq!(report.touched, vec![root, panel, label]);
        assert_eq!(body_size(&tree, label), 8.0);

        let shell = tree.widget_as::<Shell>(root).unwrap();
        assert_eq!(shell.fonts().body().size, 8.0);
        assert_eq!(shell.fonts().title().unwrap().size, 8.0);
    }

    #[test]
    fn refresh_is_idempotent() {
        let mut tree = WidgetTree::new();
        let root = tree.mount(Shell::new("Main"));
        let label = tree.mount_child(root, Label::new("hi"));

        let config = ScaleConfig::new(true, 1.5);
        refresh_tree(&mut tree, root, &config);
        refresh_tree(&mut tree, root, &config);
        refresh_tree(&mut tree, root, &config);

        assert_eq!(body_size(&tree, label), 8.0);
        let fonts = tree.widget_as::<Label>(label).unwrap().fonts();
        assert_eq!(fonts.baseline_body(), Some(12.0));
    }

    #[test]
    fn disabled_config_is_a_no_op() {
        let mut tree = WidgetTree::new();
        let root = tree.mount(Shell::new("Main"));
        let label = tree.mount_child(root, Label::new("hi"));

        let report = refresh_tree(&mut tree, root, &ScaleConfig::new(false, 1.5));
        assert!(report.touched.is_empty());
        assert_eq!(body_size(&tree, label), 12.0);
        // Nothing ran, so no baseline was captured either.
        let fonts = tree.widget_as::<Label>(label).unwrap().fonts();
        assert_eq!(fonts.baseline_body(), None);
    }

    #[test]
    fn unit_scale_without_global_font_is_a_no_op() {
        let mut tree = WidgetTree::new();
        let root = tree.mount(Shell::new("Main"));
        let report = refresh_tree(&mut tree, root, &ScaleConfig::new(true, 1.0));
        assert!(report.touched.is_empty());
    }

    #[test]
    fn opaque_widgets_scale_but_are_not_entered() {
        let mut tree = WidgetTree::new();
        let root = tree.mount(Shell::new("Main"));
        let list = tree.mount_child(root, ListPanel::new());
        let inner = tree.mount_child(list, Label::new("row"));

        let report = refresh_tree(&mut tree, root, &ScaleConfig::new(true, 2.0));
        assert!(report.touched.contains(&list));
        assert!(!report.touched.contains(&inner));
        assert_eq!(body_size(&tree, inner), 12.0);
    }

    #[test]
    fn tab_pages_scale_regardless_of_selection() {
        let mut tree = WidgetTree::new();
        let root = tree.mount(Shell::new("Main"));
        let tabs = tree.mount_child(root, TabPanel::new());
        let p1 = tree.mount_child(tabs, Page::new(0, "one"));
        let p2 = tree.mount_child(tabs, Page::new(1, "two"));
        tree.widget_as_mut::<TabPanel>(tabs).unwrap().select(Some(0));

        let report = refresh_tree(&mut tree, root, &ScaleConfig::new(true, 1.5));
        assert!(report.touched.contains(&p1));
        assert!(report.touched.contains(&p2));
    }

    #[test]
    fn global_font_substitutes_family_everywhere() {
        let mut tree = WidgetTree::new();
        let root = tree.mount(Shell::new("Main"));
        let label = tree.mount_child(root, Label::new("hi"));

        let config = ScaleConfig::new(true, 1.0).with_global_font("Microsoft YaHei", 150);
        refresh_tree(&mut tree, root, &config);

        let fonts = tree.widget_as::<Label>(label).unwrap().fonts();
        assert_eq!(fonts.body().family, "Microsoft YaHei");
        assert_eq!(fonts.body().size, 18.0);
    }

    #[test]
    fn stale_start_is_counted_and_harmless() {
        let mut tree = WidgetTree::new();
        let root = tree.mount(Shell::new("Main"));
        let panel = tree.mount_child(root, Panel::new());
        tree.unmount(panel);

        let report = refresh_tree(&mut tree, panel, &ScaleConfig::new(true, 1.5));
        assert!(report.touched.is_empty());
        assert_eq!(report.stale_skips, 1);
    }
}
