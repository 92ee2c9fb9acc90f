//! Style identity: the fixed enumeration of named themes plus the two
//! sentinels controlling propagation.

use std::fmt;

// ---------------------------------------------------------------------------
// StyleId
// ---------------------------------------------------------------------------

/// Identifier of a visual style.
///
/// Two values are sentinels rather than themes: [`StyleId::Inherited`] marks
/// a widget that tracks its nearest styled ancestor, and [`StyleId::Custom`]
/// marks one whose colors are locally fixed and must survive propagation.
/// Every other value names a stock palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum StyleId {
    /// Track the nearest styled ancestor.
    Inherited = -1,
    /// Colors fixed locally; propagation leaves them alone.
    Custom = 0,
    Blue = 1,
    Green = 2,
    Orange = 3,
    Red = 4,
    Gray = 5,
    Purple = 6,
    LayuiGreen = 7,
    LayuiRed = 8,
    LayuiOrange = 9,
    DarkBlue = 101,
    Black = 102,
    Colorful = 999,
}

impl StyleId {
    /// Every concrete style, in discriminant order.
    pub const ALL: [StyleId; 12] = [
        StyleId::Blue,
        StyleId::Green,
        StyleId::Orange,
        StyleId::Red,
        StyleId::Gray,
        StyleId::Purple,
        StyleId::LayuiGreen,
        StyleId::LayuiRed,
        StyleId::LayuiOrange,
        StyleId::DarkBlue,
        StyleId::Black,
        StyleId::Colorful,
    ];

    /// Whether this id names a palette (i.e. is not a sentinel).
    pub fn is_valid(self) -> bool {
        (self as i32) > (StyleId::Custom as i32)
    }

    /// Whether assigning this id fixes the widget's colors locally.
    ///
    /// True for every id except [`StyleId::Inherited`]: assigning a concrete
    /// theme directly is itself a local customization.
    pub fn is_custom(self) -> bool {
        self != StyleId::Inherited
    }

    /// Numeric code, stable across releases; used when persisting settings.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Inverse of [`StyleId::code`].
    pub fn from_code(code: i32) -> Option<StyleId> {
        match code {
            -1 => Some(StyleId::Inherited),
            0 => Some(StyleId::Custom),
            _ => StyleId::ALL.iter().copied().find(|s| *s as i32 == code),
        }
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StyleId::Inherited => "Inherited",
            StyleId::Custom => "Custom",
            StyleId::Blue => "Blue",
            StyleId::Green => "Green",
            StyleId::Orange => "Orange",
            StyleId::Red => "Red",
            StyleId::Gray => "Gray",
            StyleId::Purple => "Purple",
            StyleId::LayuiGreen => "LayuiGreen",
            StyleId::LayuiRed => "LayuiRed",
            StyleId::LayuiOrange => "LayuiOrange",
            StyleId::DarkBlue => "DarkBlue",
            StyleId::Black => "Black",
            StyleId::Colorful => "Colorful",
        };
        f.write_str(name)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_not_valid() {
        assert!(!StyleId::Inherited.is_valid());
        assert!(!StyleId::Custom.is_valid());
    }

    #[test]
    fn concrete_ids_are_valid() {
        for style in StyleId::ALL {
            assert!(style.is_valid(), "{style} should be valid");
        }
    }

    #[test]
    fn inherited_is_the_only_non_custom_id() {
        assert!(!StyleId::Inherited.is_custom());
        assert!(StyleId::Custom.is_custom());
        assert!(StyleId::Blue.is_custom());
    }

    #[test]
    fn sentinels_order_below_concrete_ids() {
        assert!(StyleId::Inherited < StyleId::Custom);
        assert!(StyleId::Custom < StyleId::Blue);
        assert!(StyleId::Black < StyleId::Colorful);
    }

    #[test]
    fn all_is_sorted_by_code() {
        let codes: Vec<i32> = StyleId::ALL.iter().map(|s| s.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn code_round_trips() {
        for style in StyleId::ALL {
            assert_eq!(StyleId::from_code(style.code()), Some(style));
        }
        assert_eq!(StyleId::from_code(-1), Some(StyleId::Inherited));
        assert_eq!(StyleId::from_code(0), Some(StyleId::Custom));
    }

    #[test]
    fn from_code_rejects_unknown() {
        assert_eq!(StyleId::from_code(37), None);
        assert_eq!(StyleId::from_code(-2), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(StyleId::LayuiGreen.to_string(), "LayuiGreen");
        assert_eq!(StyleId::Inherited.to_string(), "Inherited");
    }
}
