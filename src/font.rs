//! Segment patterns and the hexadecimal font for 7-segment digits.

use core::ops::{BitOr, BitOrAssign};

/// The set of lit strokes on one digit, plus its decimal point / colon indicator.
///
/// Bit 0 through bit 6 are segments `a` through `g`; bit 7 is the indicator.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// Segment A of the 7-segment display.
    pub const SEG_A: Self = Self(0b_0000_0001);
    /// Segment B of the 7-segment display.
    pub const SEG_B: Self = Self(0b_0000_0010);
    /// Segment C of the 7-segment display.
    pub const SEG_C: Self = Self(0b_0000_0100);
    /// Segment D of the 7-segment display.
    pub const SEG_D: Self = Self(0b_0000_1000);
    /// Segment E of the 7-segment display.
    pub const SEG_E: Self = Self(0b_0001_0000);
    /// Segment F of the 7-segment display.
    pub const SEG_F: Self = Self(0b_0010_0000);
    /// Segment G of the 7-segment display.
    pub const SEG_G: Self = Self(0b_0100_0000);
    /// Decimal point (or colon, on displays that wire one to the same anode).
    pub const DOT: Self = Self(0b_1000_0000);
    /// All segments off, indicator clear.
    pub const BLANK: Self = Self(0);

    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// The pattern with the indicator bit cleared.
    #[must_use]
    pub const fn segments(self) -> Self {
        Self(self.0 & !Self::DOT.0)
    }

    #[must_use]
    pub const fn with_dot(self) -> Self {
        Self(self.0 | Self::DOT.0)
    }

    #[must_use]
    pub const fn has_dot(self) -> bool {
        self.0 & Self::DOT.0 != 0
    }

    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for SegmentPattern {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SegmentPattern {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<SegmentPattern> for u8 {
    fn from(pattern: SegmentPattern) -> Self {
        pattern.0
    }
}

/// Glyphs for the hexadecimal values 0 through 15. The indicator bit is never set.
pub const FONT: [SegmentPattern; 16] = [
    SegmentPattern(0b_0011_1111), // 0
    SegmentPattern(0b_0000_0110), // 1
    SegmentPattern(0b_0101_1011), // 2
    SegmentPattern(0b_0100_1111), // 3
    SegmentPattern(0b_0110_0110), // 4
    SegmentPattern(0b_0110_1101), // 5
    SegmentPattern(0b_0111_1101), // 6
    SegmentPattern(0b_0000_0111), // 7
    SegmentPattern(0b_0111_1111), // 8
    SegmentPattern(0b_0110_1111), // 9
    SegmentPattern(0b_0111_0111), // A
    SegmentPattern(0b_0111_1100), // b
    SegmentPattern(0b_0011_1001), // C
    SegmentPattern(0b_0101_1110), // d
    SegmentPattern(0b_0111_1001), // E
    SegmentPattern(0b_0111_0001), // F
];

/// Looks up the glyph for a hexadecimal value. Only the low nibble is used.
#[must_use]
#[expect(clippy::indexing_slicing, reason = "Masked to the table length")]
pub const fn glyph(value: u8) -> SegmentPattern {
    FONT[(value & 0x0F) as usize]
}

/// Looks up the glyph for `0`-`9` or `A`-`F`. Lowercase letters have no glyph.
#[must_use]
pub fn glyph_for_char(ch: char) -> Option<SegmentPattern> {
    match ch {
        '0'..='9' | 'A'..='F' => ch
            .to_digit(16)
            .and_then(|value| u8::try_from(value).ok())
            .map(glyph),
        _ => None,
    }
}
