//! Stock widgets: Shell, Panel, Label, TabPanel, Page, ListPanel, ContextMenu.
//!
//! Everything here is a plain struct implementing
//! [`Widget`](crate::widget::Widget) plus whichever capability contracts
//! apply. [`ContextMenu`] is the odd one out: it is a styled attachment,
//! owned by another widget's field rather than mounted in the tree.

pub mod context_menu;
pub mod label;
pub mod list_panel;
pub mod page;
pub mod panel;
pub mod shell;
pub mod tab_panel;

pub use context_menu::ContextMenu;
pub use label::Label;
pub use list_panel::ListPanel;
pub use page::{Page, PageParams};
pub use panel::Panel;
pub use shell::Shell;
pub use tab_panel::TabPanel;
