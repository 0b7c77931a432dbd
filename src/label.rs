//! The 4-bit status code reported by the DAC interface and the labels it decodes to.

use crate::{Error, Result};

/// A 4-bit status code sampled from the DAC interface card.
///
/// Any value in `0..=15` is a valid code; whether it means anything is decided by the
/// [`LabelTable`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayCode(u8);

impl DisplayCode {
    /// Number of distinct codes.
    pub const COUNT: usize = 16;

    /// Keeps the low four bits of `bits`.
    #[must_use]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & 0x0F)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DisplayCode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        if usize::from(value) < Self::COUNT {
            Ok(Self(value))
        } else {
            Err(Error::CodeOutOfRange(value))
        }
    }
}

/// Text shown for one code, at most five characters from `0-9`, `A-F`, `.` and `:`.
///
/// The text is laid out for the display's fixed columns: a leading space keeps a
/// column blank, and a `.` lands on the gap that precedes it.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label(&'static str);

impl Label {
    /// Longest label: four digits plus one point.
    pub const MAX_LEN: usize = 5;

    /// # Panics
    ///
    /// Panics (at compile time, for `const` tables) if `text` is longer than
    /// [`Label::MAX_LEN`] bytes.
    #[must_use]
    pub const fn new(text: &'static str) -> Self {
        assert!(text.len() <= Self::MAX_LEN, "label is too long");
        Self(text)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    pub fn chars(self) -> core::str::Chars<'static> {
        self.0.chars()
    }
}

/// Maps every [`DisplayCode`] to a [`Label`], or to `None` for reserved codes.
pub struct LabelTable([Option<Label>; DisplayCode::COUNT]);

impl LabelTable {
    #[must_use]
    pub const fn new(labels: [Option<Label>; DisplayCode::COUNT]) -> Self {
        Self(labels)
    }

    /// The label for `code`; `None` means the code is reserved and the display should be left alone.
    #[must_use]
    pub fn lookup(&self, code: DisplayCode) -> Option<Label> {
        self.0.get(usize::from(code.value())).copied().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DisplayCode, Option<Label>)> + '_ {
        (0..=u8::MAX)
            .map(DisplayCode::from_bits_truncate)
            .zip(self.0.iter().copied())
    }
}

/// Sample rates (kHz) for PCM codes 0-8, DSD rates for codes 12-15. Codes 9-11 are reserved.
pub const LABELS: LabelTable = LabelTable::new([
    Some(Label::new(" 44.1")),
    Some(Label::new(" 48.0")),
    Some(Label::new(" 88.2")),
    Some(Label::new(" 96.0")),
    Some(Label::new("176.4")),
    Some(Label::new("192.0")),
    Some(Label::new("352.8")),
    Some(Label::new("384.0")),
    Some(Label::new("768.0")),
    None,
    None,
    None,
    Some(Label::new("D64 ")),
    Some(Label::new("D128")),
    Some(Label::new("D256")),
    Some(Label::new("D512")),
]);
