//! Host display measurement, cached once per process.

use std::sync::OnceLock;

/// Reference DPI; a display at this density has scale 1.0.
pub const BASELINE_DPI: f32 = 96.0;

static SYSTEM_SCALE: OnceLock<f32> = OnceLock::new();

/// Host hook reporting the density of the active display.
///
/// Typically backed by a throwaway 1x1 off-screen surface.
pub trait DisplayProbe {
    fn dots_per_inch(&self) -> f32;
}

/// Measure the display scale through `probe`.
///
/// The first call wins; later calls return the cached value without touching
/// the probe again. Monitor changes mid-process are deliberately not tracked.
pub fn measure(probe: &dyn DisplayProbe) -> f32 {
    *SYSTEM_SCALE.get_or_init(|| {
        let dpi = probe.dots_per_inch();
        let scale = dpi / BASELINE_DPI;
        log::info!("[Scale] display probe: {dpi} dpi, scale {scale:.2}");
        scale
    })
}

/// The cached scale, or 1.0 when [`measure`] has never run.
pub fn system_scale() -> f32 {
    SYSTEM_SCALE.get().copied().unwrap_or(1.0)
}

// ===========================================================================
// Tests
// ===========================================================================
