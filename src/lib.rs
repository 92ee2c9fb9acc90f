//! # veneer
//!
//! Themeable style propagation and DPI-aware font scaling for retained
//! widget trees.
//!
//! veneer keeps a tree of plain widget structs and runs two engines over it:
//! a style engine that carries color palettes from a container down to every
//! descendant that still tracks its parent, and a scale engine that rescales
//! widget fonts from design-time baselines when the display DPI differs from
//! the 96 dpi the layouts were authored at. A [`frame::Frame`] ties both to
//! the window lifecycle: first show, style switches, page hosting.
//!
//! ## Core Systems
//!
//! - **[`style`]** — Style identifiers, stock palettes, the per-widget
//!   inherit/custom state machine, and the propagation sweep
//! - **[`scale`]** — DPI probing, scale configuration, baseline-preserving
//!   font rescaling, and the tree refresh
//! - **[`tree`]** — Slotmap-backed widget arena with parent/child links
//! - **[`widget`]** — The widget contract and its capability hooks
//! - **[`widgets`]** — Built-in widgets: Shell, Panel, Label, TabPanel,
//!   Page, ListPanel, ContextMenu
//! - **[`frame`]** — Composite container: page hosting, lifecycle triggers,
//!   parameter routing, window-state fan-out
//! - **[`edit`]** — Declarative field model for generated edit forms
//! - **[`hotkey`]** — Process-wide hot key registry with stable ids
//! - **[`defer`]** — One-shot deferred notices on a tokio runtime
//! - **[`settings`]** — Process-wide toolkit knobs, snapshotted per pass
//! - **[`color`]** / **[`font`]** — Rgb and font primitives

// Foundation
pub mod color;
pub mod font;
pub mod settings;

// Widget system
pub mod tree;
pub mod widget;
pub mod widgets;

// Engines
pub mod scale;
pub mod style;

// Composite layer
pub mod defer;
pub mod edit;
pub mod frame;
pub mod hotkey;
