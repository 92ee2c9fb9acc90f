//! Widget trait: tree participation plus capability accessors.
//!
//! Widgets are plain structs owned by the tree as `Box<dyn Widget>`.
//! Engines discover what a widget can do through the capability accessors
//! instead of downcasting to concrete types; downcasts stay available via
//! `as_any` for host code that knows what it mounted.

use std::any::Any;

use crate::scale::ScaleCapable;
use crate::style::StyleCapable;

// ---------------------------------------------------------------------------
// Descent
// ---------------------------------------------------------------------------

/// Traversal policy for a widget's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Descent {
    /// Engines walk into the children.
    #[default]
    Open,
    /// Internally composed leaf; engines stop at the boundary even when the
    /// children are themselves capable.
    Opaque,
}

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by every widget.
///
/// Object-safe: the tree and both engines work entirely through
/// `&dyn Widget`. Everything except the type name and the `Any` accessors
/// has a default, so a minimal widget implements three methods.
pub trait Widget {
    /// Type name used in logs and debugging, e.g. `"Panel"`.
    fn widget_type(&self) -> &str;

    /// Style participation; `None` opts out of style propagation.
    fn style_capable(&self) -> Option<&dyn StyleCapable> {
        None
    }

    fn style_capable_mut(&mut self) -> Option<&mut dyn StyleCapable> {
        None
    }

    /// Scale participation; `None` opts out of font rescaling.
    fn scale_capable_mut(&mut self) -> Option<&mut dyn ScaleCapable> {
        None
    }

    /// Whether engines may walk into this widget's children.
    fn descent(&self) -> Descent {
        Descent::Open
    }

    /// Whether this widget hosts pages behind tabs.
    fn is_tab_host(&self) -> bool {
        false
    }

    /// Selected child index of a tab host; `None` when nothing is selected.
    ///
    /// Only meaningful when [`Widget::is_tab_host`] returns true.
    fn selected_tab(&self) -> Option<usize> {
        None
    }

    /// Change a tab host's selection. Default is a no-op for non-hosts.
    fn set_selected_tab(&mut self, _index: Option<usize>) {}

    /// Whether this widget is a page hosted behind a tab.
    fn is_page(&self) -> bool {
        false
    }

    /// Styled objects owned by this widget but living outside the tree,
    /// e.g. an attached context menu.
    fn attachments_mut(&mut self) -> Vec<&mut dyn StyleCapable> {
        Vec::new()
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ===========================================================================
// Tests
// ===========================================================================
