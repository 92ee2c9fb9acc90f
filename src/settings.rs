//! Process-wide toolkit settings.
//!
//! Engines never read these mid-pass. Callers take an owned [`snapshot`] (or
//! a `ScaleConfig`) at the start of an operation, so one pass observes one
//! consistent view no matter what other code does to the settings meanwhile.

use std::sync::{LazyLock, PoisonError, RwLock};

use crate::style::StyleId;

/// The toolkit's global knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Theme applied by frame render passes to inherited widgets.
    pub style: StyleId,
    /// Master switch for the DPI engine.
    pub dpi_scale: bool,
    /// Whether the global font override is active.
    pub global_font: bool,
    pub global_font_name: String,
    /// Percent; 100 leaves sizes unchanged.
    pub global_font_scale: u32,
    /// Enables the translation pass during render.
    pub multi_language: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            style: StyleId::Blue,
            dpi_scale: false,
            global_font: false,
            global_font_name: "Segoe UI".to_string(),
            global_font_scale: 100,
            multi_language: false,
        }
    }
}

static SETTINGS: LazyLock<RwLock<Settings>> = LazyLock::new(|| RwLock::new(Settings::default()));

/// Owned copy of the current settings.
pub fn snapshot() -> Settings {
    SETTINGS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Mutate the settings in place.
pub fn update(f: impl FnOnce(&mut Settings)) {
    let mut guard = SETTINGS.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard);
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // The store is process-wide, so the whole round trip lives in one test.
    #[test]
    fn snapshot_is_an_owned_copy() {
        let fresh = snapshot();
        assert_eq!(fresh.style, StyleId::Blue);
        assert!(!fresh.dpi_scale);
        assert_eq!(fresh.global_font_scale, 100);

        update(|s| {
            s.dpi_scale = true;
            s.global_font_scale = 125;
        });
        let changed = snapshot();
        assert!(changed.dpi_scale);
        assert_eq!(changed.global_font_scale, 125);

        // Earlier snapshots never see later writes.
        update(|s| s.global_font_scale = 175);
        assert_eq!(changed.global_font_scale, 125);

        update(|s| {
            s.dpi_scale = false;
            s.global_font_scale = 100;
        });
        assert_eq!(snapshot(), Settings::default());
    }
}
