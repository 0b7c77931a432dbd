//! The frame buffer as seen from both sides of the interrupt boundary.

use portable_atomic::{AtomicU8, Ordering};

use crate::font::SegmentPattern;
use crate::frame_buffer::{Digit, FrameBuffer};
use crate::shared_constants::CELL_COUNT;

/// A [`FrameBuffer`] written by the foreground and read by the scan interrupt, without locks.
///
/// Each slot is its own atomic byte, so a single digit is always read whole. The frame
/// as a whole is not: a scan that overlaps [`SharedFrame::store`] can show some
/// digits of the old label next to digits of the new one. This tearing is cosmetic
/// and lasts at most one scan, since the next pass reads the finished frame. Locking
/// would put a wait into interrupt context.
pub struct SharedFrame([AtomicU8; CELL_COUNT]);

impl SharedFrame {
    /// All digits blank.
    #[must_use]
    pub const fn new() -> Self {
        Self([
            AtomicU8::new(0),
            AtomicU8::new(0),
            AtomicU8::new(0),
            AtomicU8::new(0),
        ])
    }

    /// Overwrites every slot. Only the foreground calls this.
    pub fn store(&self, frame_buffer: &FrameBuffer) {
        for (slot, pattern) in self.0.iter().zip(frame_buffer) {
            slot.store(pattern.bits(), Ordering::Relaxed);
        }
    }

    #[must_use]
    #[expect(clippy::indexing_slicing, reason = "Digit is always in range")]
    pub fn slot(&self, digit: Digit) -> SegmentPattern {
        SegmentPattern::from_bits(self.0[usize::from(digit.index())].load(Ordering::Relaxed))
    }

    /// Copies out the current frame, slot by slot.
    #[must_use]
    pub fn snapshot(&self) -> FrameBuffer {
        FrameBuffer::new(
            self.0
                .each_ref()
                .map(|slot| SegmentPattern::from_bits(slot.load(Ordering::Relaxed))),
        )
    }
}

impl Default for SharedFrame {
    fn default() -> Self {
        Self::new()
    }
}
