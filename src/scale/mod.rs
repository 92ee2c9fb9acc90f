//! DPI scaling: display measurement, scale configuration, font rescaling.

pub mod config;
pub mod display;
pub mod fonts;
pub mod refresh;

pub use config::{GlobalFont, ScaleConfig};
pub use display::{measure, system_scale, DisplayProbe, BASELINE_DPI};
pub use fonts::{ScaleCapable, WidgetFonts};
pub use refresh::{refresh_tree, ScaleReport};
