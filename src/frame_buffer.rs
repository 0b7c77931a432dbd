//! The 4-slot segment image of the display and the label formatter that fills it.

use core::ops::{Index, IndexMut};

use crate::font::{SegmentPattern, glyph_for_char};
use crate::label::Label;
use crate::shared_constants::{CELL_COUNT, CELL_COUNT_U8};

#[cfg(feature = "display-trace")]
use defmt::info;

/// One digit position on the display. Position 0 is the rightmost digit.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Digit(u8);

impl Digit {
    pub const RIGHTMOST: Self = Self(0);
    pub const LEFTMOST: Self = Self(CELL_COUNT_U8 - 1);

    /// Returns `None` unless `index < 4`.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < CELL_COUNT_U8 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// The next position in scan order, wrapping from the leftmost back to the rightmost.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.0 >= Self::LEFTMOST.0 {
            Self::RIGHTMOST
        } else {
            Self(self.0.wrapping_add(1))
        }
    }

    /// The position one to the right, or `None` past the rightmost digit.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        match self.0.checked_sub(1) {
            Some(index) => Some(Self(index)),
            None => None,
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Segment state for the four digits, ordered right to left.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameBuffer([SegmentPattern; CELL_COUNT]);

impl FrameBuffer {
    /// All four digits dark.
    pub const BLANK: Self = Self([SegmentPattern::BLANK; CELL_COUNT]);

    /// `slots[0]` is the rightmost digit.
    #[must_use]
    pub const fn new(slots: [SegmentPattern; CELL_COUNT]) -> Self {
        Self(slots)
    }

    #[must_use]
    pub const fn slots(&self) -> [SegmentPattern; CELL_COUNT] {
        self.0
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &SegmentPattern> {
        self.0.iter()
    }

    /// Renders a label, filling digits from the leftmost toward the rightmost.
    ///
    /// - A hex digit takes the next digit position.
    /// - A `.` takes no position of its own. It lights the indicator of a digit
    ///   already placed, chosen by how many positions have been filled so far; points
    ///   anywhere else are dropped.
    /// - A `:` after two digits lights the colon (the indicator of the second
    ///   digit from the left); elsewhere it is ignored.
    /// - Anything else takes the next position and leaves it blank.
    ///
    /// Positions the label does not reach stay blank, so every call yields a complete
    /// image and nothing from an earlier label survives.
    #[must_use]
    pub fn from_label(label: Label) -> Self {
        let mut frame_buffer = Self::BLANK;
        let mut cursor = Some(Digit::LEFTMOST);

        for ch in label.chars() {
            let Some(digit) = cursor else {
                // Every digit is filled; the rest of the label does not fit.
                break;
            };
            match ch {
                '.' => {
                    if let Some(target) = point_target(cursor) {
                        frame_buffer[target] |= SegmentPattern::DOT;
                    }
                }
                ':' => {
                    if digit == COLON_CURSOR {
                        frame_buffer[COLON_TARGET] |= SegmentPattern::DOT;
                    }
                }
                _ => {
                    frame_buffer[digit] = glyph_for_char(ch).unwrap_or(SegmentPattern::BLANK);
                    cursor = digit.right();
                }
            }
        }

        #[cfg(feature = "display-trace")]
        info!("label {:?} -> {:?}", label, frame_buffer);
        frame_buffer
    }
}

/// Fill-cursor position at which a `:` is recognized, and the digit it decorates.
const COLON_CURSOR: Digit = Digit(1);
const COLON_TARGET: Digit = Digit(2);

/// Where a `.` met with the fill cursor at `cursor` attaches.
///
/// The display has a point in three places: with two digits placed it lights on the
/// leftmost digit, with three placed on the second digit from the right, and with all
/// four placed on the rightmost. The last case cannot arise from
/// [`FrameBuffer::from_label`], which stops once every digit is filled.
const fn point_target(cursor: Option<Digit>) -> Option<Digit> {
    match cursor {
        Some(Digit(1)) => Some(Digit(3)),
        Some(Digit(0)) => Some(Digit(1)),
        None => Some(Digit(0)),
        Some(_) => None,
    }
}

impl Index<Digit> for FrameBuffer {
    type Output = SegmentPattern;

    #[expect(clippy::indexing_slicing, reason = "Digit is always in range")]
    fn index(&self, digit: Digit) -> &Self::Output {
        &self.0[usize::from(digit.0)]
    }
}

impl IndexMut<Digit> for FrameBuffer {
    #[expect(clippy::indexing_slicing, reason = "Digit is always in range")]
    fn index_mut(&mut self, digit: Digit) -> &mut Self::Output {
        &mut self.0[usize::from(digit.0)]
    }
}

impl IntoIterator for FrameBuffer {
    type Item = SegmentPattern;
    type IntoIter = core::array::IntoIter<SegmentPattern, CELL_COUNT>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FrameBuffer {
    type Item = &'a SegmentPattern;
    type IntoIter = core::slice::Iter<'a, SegmentPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
