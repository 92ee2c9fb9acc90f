//! Style system: identifiers, palettes, per-widget state, propagation.

pub mod capable;
pub mod id;
pub mod palette;
pub mod propagate;
pub mod state;

pub use capable::{StyleCapable, StyleCapableExt};
pub use id::StyleId;
pub use palette::{palette_of, Palette, StyleError};
pub use propagate::{apply_custom_style, apply_style, StyleReport};
pub use state::StyleState;
