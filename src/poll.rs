//! Foreground sampling of the status code.

use portable_atomic::{AtomicU8, Ordering};

use crate::frame_buffer::FrameBuffer;
use crate::label::{DisplayCode, Label, LabelTable};
use crate::shared_frame::SharedFrame;

#[cfg(feature = "display-trace")]
use defmt::info;

/// Somewhere to read the 4-bit status code from.
pub trait CodeInput {
    fn read_code(&mut self) -> DisplayCode;
}

impl<I: CodeInput + ?Sized> CodeInput for &mut I {
    fn read_code(&mut self) -> DisplayCode {
        (**self).read_code()
    }
}

/// What one poll did.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Same code as last time; nothing touched.
    Unchanged,
    /// A new code with no label. The display keeps showing what it was showing.
    Reserved(DisplayCode),
    /// A new code whose label now fills the frame.
    Displayed(DisplayCode, Label),
}

/// The code seen by the previous poll. Written only by the foreground.
pub struct LastCode(AtomicU8);

impl LastCode {
    const NONE: u8 = u8::MAX;

    /// Nothing observed yet, so the first poll always counts as a change.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU8::new(Self::NONE))
    }

    #[must_use]
    pub fn get(&self) -> Option<DisplayCode> {
        DisplayCode::try_from(self.0.load(Ordering::Relaxed)).ok()
    }

    /// Records `code`; returns `false` if it was already the last code.
    pub fn replace(&self, code: DisplayCode) -> bool {
        if self.get() == Some(code) {
            return false;
        }
        self.0.store(code.value(), Ordering::Relaxed);
        true
    }
}

impl Default for LastCode {
    fn default() -> Self {
        Self::new()
    }
}

/// Samples the code once and, if it changed to a labelled code, re-renders the frame.
///
/// The whole frame is rebuilt from the label, never patched. A reserved code is still
/// remembered, so returning to the code shown before it renders again.
pub fn poll_code<I: CodeInput + ?Sized>(
    input: &mut I,
    last_code: &LastCode,
    labels: &LabelTable,
    frame: &SharedFrame,
) -> PollOutcome {
    let code = input.read_code();
    if !last_code.replace(code) {
        return PollOutcome::Unchanged;
    }

    let Some(label) = labels.lookup(code) else {
        #[cfg(feature = "display-trace")]
        info!("code {} is reserved; display unchanged", code.value());
        return PollOutcome::Reserved(code);
    };

    #[cfg(feature = "display-trace")]
    info!("code {} -> {:?}", code.value(), label);
    frame.store(&FrameBuffer::from_label(label));
    PollOutcome::Displayed(code, label)
}
