//! The widget tree: a slotmap arena with parent/child bookkeeping.
//!
//! All widgets live in one `SlotMap`; relationships sit in secondary maps so
//! unmounting is O(subtree size) and stale-id checks are O(1). The engines
//! lean on that last property: an id disposed mid-pass is skipped, never
//! dereferenced.

use std::collections::VecDeque;

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use crate::widget::Widget;

new_key_type! {
    /// Stable handle to a mounted widget.
    ///
    /// Generational: the id of an unmounted widget never aliases a widget
    /// mounted later.
    pub struct WidgetId;
}

/// Empty slice constant for widgets without children.
const EMPTY_CHILDREN: &[WidgetId] = &[];

// ---------------------------------------------------------------------------
// WidgetTree
// ---------------------------------------------------------------------------

/// Rooted tree of boxed widgets.
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, Box<dyn Widget>>,
    children: SecondaryMap<WidgetId, Vec<WidgetId>>,
    parent: SecondaryMap<WidgetId, WidgetId>,
    root: Option<WidgetId>,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Mount a widget with no parent.
    ///
    /// The first widget mounted this way becomes the root.
    pub fn mount(&mut self, widget: impl Widget + 'static) -> WidgetId {
        let id = self.nodes.insert(Box::new(widget));
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Mount a widget as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist.
    pub fn mount_child(&mut self, parent: WidgetId, widget: impl Widget + 'static) -> WidgetId {
        debug_assert!(self.nodes.contains_key(parent), "parent does not exist");
        let id = self.nodes.insert(Box::new(widget));
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        self.children
            .get_mut(parent)
            .expect("parent must have a children vec")
            .push(id);
        id
    }

    /// Unmount a widget and its whole subtree.
    ///
    /// Returns the widget itself, or `None` for a stale id.
    pub fn unmount(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        // Detach from the parent's children list.
        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }

        if self.root == Some(id) {
            self.root = None;
        }

        // Drop descendants breadth-first, keeping only the requested widget.
        let mut queue = VecDeque::new();
        queue.push_back(id);
        let mut unmounted = None;

        while let Some(current) = queue.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                for &child in &kids {
                    queue.push_back(child);
                }
            }
            self.parent.remove(current);
            let widget = self.nodes.remove(current);
            if current == id {
                unmounted = widget;
            }
        }

        unmounted
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parent.get(id).copied()
    }

    /// Children in mount order. Empty for leaves and stale ids.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.nodes.get(id).map(|boxed| boxed.as_ref())
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        match self.nodes.get_mut(id) {
            Some(boxed) => Some(boxed.as_mut()),
            None => None,
        }
    }

    /// Typed access to a widget the caller knows the concrete type of.
    pub fn widget_as<T: Widget + 'static>(&self, id: WidgetId) -> Option<&T> {
        self.nodes.get(id).and_then(|w| w.as_any().downcast_ref())
    }

    pub fn widget_as_mut<T: Widget + 'static>(&mut self, id: WidgetId) -> Option<&mut T> {
        self.nodes
            .get_mut(id)
            .and_then(|w| w.as_any_mut().downcast_mut())
    }

    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    ///
    /// Stale ids anywhere in the walk are skipped silently.
    pub fn walk_depth_first(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// All widgets of a concrete type under `start`, in traversal order.
    pub fn find_all<T: Widget + 'static>(&self, start: WidgetId) -> Vec<WidgetId> {
        self.walk_depth_first(start)
            .into_iter()
            .filter(|&id| self.widget_as::<T>(id).is_some())
            .collect()
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
