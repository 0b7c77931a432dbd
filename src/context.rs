//! Everything the scan interrupt and the foreground poll share, in one place.

use crate::brightness::blank_segments;
use crate::frame_buffer::{Digit, FrameBuffer};
use crate::label::{DisplayCode, LABELS, LabelTable};
use crate::multiplex::{DigitCursor, SegmentPort, scan_tick};
use crate::poll::{CodeInput, LastCode, PollOutcome, poll_code};
use crate::shared_frame::SharedFrame;

/// The display's state: the frame, the scan cursor and the last code seen.
///
/// Built in a `static` and handed by reference to both execution contexts:
///
/// | field        | written by             | read by                 |
/// |--------------|------------------------|-------------------------|
/// | frame        | foreground ([`poll`])  | interrupt ([`on_tick`]) |
/// | cursor       | interrupt ([`on_tick`])| interrupt               |
/// | last code    | foreground ([`poll`])  | foreground              |
///
/// Each field has exactly one writer, so no method takes a lock.
///
/// [`poll`]: DisplayContext::poll
/// [`on_tick`]: DisplayContext::on_tick
pub struct DisplayContext {
    frame: SharedFrame,
    cursor: DigitCursor,
    last_code: LastCode,
    labels: &'static LabelTable,
}

impl DisplayContext {
    /// A blank display decoding with the product's [`LABELS`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_labels(&LABELS)
    }

    #[must_use]
    pub const fn with_labels(labels: &'static LabelTable) -> Self {
        Self {
            frame: SharedFrame::new(),
            cursor: DigitCursor::new(),
            last_code: LastCode::new(),
            labels,
        }
    }

    /// Scan interrupt: drive the next digit.
    pub fn on_tick<P: SegmentPort + ?Sized>(&self, port: &mut P) -> Digit {
        scan_tick(&self.frame, &self.cursor, port)
    }

    /// Brightness interrupt: blank the segments until the next tick.
    #[expect(clippy::unused_self, reason = "Both interrupt handlers are reached through the context")]
    pub fn on_blank<P: SegmentPort + ?Sized>(&self, port: &mut P) {
        blank_segments(port);
    }

    /// Foreground: sample the code once and update the frame if it changed.
    pub fn poll<I: CodeInput + ?Sized>(&self, input: &mut I) -> PollOutcome {
        poll_code(input, &self.last_code, self.labels, &self.frame)
    }

    #[must_use]
    pub fn frame(&self) -> FrameBuffer {
        self.frame.snapshot()
    }

    #[must_use]
    pub fn current_digit(&self) -> Digit {
        self.cursor.current()
    }

    #[must_use]
    pub fn last_code(&self) -> Option<DisplayCode> {
        self.last_code.get()
    }
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self::new()
    }
}
