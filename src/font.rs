//! Font description value type shared by palettes and the scale engine.

use std::fmt;

/// A font family plus point size.
///
/// Purely descriptive; rasterization belongs to the host framework.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// Same family at a different size.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            family: self.family.clone(),
            size,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Segoe UI", 12.0)
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.1}pt", self.family, self.size)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
