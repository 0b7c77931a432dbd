//! One-digit-at-a-time scanning of the display from a periodic tick.
//!
//! [`scan_tick`] runs in interrupt context. It never blocks, never fails and touches
//! the hardware only through a [`SegmentPort`].

use portable_atomic::{AtomicU8, Ordering};

use crate::font::SegmentPattern;
use crate::frame_buffer::Digit;
use crate::shared_frame::SharedFrame;

/// The output lines of a multiplexed 4-digit display.
///
/// Implemented by [`Led4Pins`](crate::Led4Pins) for real pins, and by recording
/// fakes in tests.
pub trait SegmentPort {
    /// Drives the seven segment lines and the indicator line from `pattern`.
    fn set_segments(&mut self, pattern: SegmentPattern);

    /// Asserts the enable line of `digit`. Other enable lines are left as they are.
    fn enable_digit(&mut self, digit: Digit);

    /// Releases every digit enable line and turns every segment line off.
    fn disable_all(&mut self);
}

impl<P: SegmentPort + ?Sized> SegmentPort for &mut P {
    fn set_segments(&mut self, pattern: SegmentPattern) {
        (**self).set_segments(pattern);
    }

    fn enable_digit(&mut self, digit: Digit) {
        (**self).enable_digit(digit);
    }

    fn disable_all(&mut self) {
        (**self).disable_all();
    }
}

/// The digit currently being driven. Written only by [`scan_tick`].
pub struct DigitCursor(AtomicU8);

impl DigitCursor {
    /// Starts on the leftmost digit so the first tick drives the rightmost.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU8::new(Digit::LEFTMOST.index()))
    }

    #[must_use]
    pub fn current(&self) -> Digit {
        Digit::new(self.0.load(Ordering::Relaxed)).unwrap_or(Digit::RIGHTMOST)
    }

    /// Moves to the next digit and returns it.
    ///
    /// A plain load and store: there is only ever one writer, and Cortex-M0+ has no
    /// atomic read-modify-write.
    pub fn advance(&self) -> Digit {
        let next = self.current().next();
        self.0.store(next.index(), Ordering::Relaxed);
        next
    }
}

impl Default for DigitCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Advances the scan by one digit.
///
/// Everything is switched off before the next digit's segments are loaded, so the
/// outgoing digit never shows the incoming digit's pattern.
pub fn scan_tick<P: SegmentPort + ?Sized>(frame: &SharedFrame, cursor: &DigitCursor, port: &mut P) -> Digit {
    port.disable_all();
    let digit = cursor.advance();
    port.set_segments(frame.slot(digit));
    port.enable_digit(digit);
    digit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::glyph;
    use crate::frame_buffer::FrameBuffer;

    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    enum Event {
        Segments(u8),
        Enable(u8),
        DisableAll,
    }

    #[derive(Default)]
    struct Recorder(std::vec::Vec<Event>);

    impl SegmentPort for Recorder {
        fn set_segments(&mut self, pattern: SegmentPattern) {
            self.0.push(Event::Segments(pattern.bits()));
        }

        fn enable_digit(&mut self, digit: Digit) {
            self.0.push(Event::Enable(digit.index()));
        }

        fn disable_all(&mut self) {
            self.0.push(Event::DisableAll);
        }
    }

    #[test]
    fn test_cursor_starts_so_first_tick_is_rightmost() {
        let cursor = DigitCursor::new();
        assert_eq!(cursor.current(), Digit::LEFTMOST);
        assert_eq!(cursor.advance(), Digit::RIGHTMOST);
    }

    #[test]
    fn test_tick_order() {
        let frame = SharedFrame::new();
        frame.store(&FrameBuffer::new([
            glyph(1),
            glyph(4).with_dot(),
            glyph(4),
            SegmentPattern::BLANK,
        ]));
        let cursor = DigitCursor::new();
        let mut recorder = Recorder::default();

        assert_eq!(scan_tick(&frame, &cursor, &mut recorder), Digit::RIGHTMOST);
        assert_eq!(scan_tick(&frame, &cursor, &mut recorder).index(), 1);

        assert_eq!(
            recorder.0,
            [
                Event::DisableAll,
                Event::Segments(glyph(1).bits()),
                Event::Enable(0),
                Event::DisableAll,
                Event::Segments(glyph(4).with_dot().bits()),
                Event::Enable(1),
            ]
        );
    }

    #[test]
    fn test_tick_through_mut_reference() {
        let frame = SharedFrame::new();
        let cursor = DigitCursor::new();
        let mut recorder = Recorder::default();
        let mut port = &mut recorder;
        scan_tick(&frame, &cursor, &mut port);
        assert_eq!(recorder.0.len(), 3);
    }
}
