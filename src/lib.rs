//! Decodes the sample-rate status code of a USB/I2S DAC interface and shows it on a
//! multiplexed 4-digit, 7-segment LED display.
//!
//! The display logic is hardware independent:
//! - [`FrameBuffer::from_label`] renders a [`Label`] such as `" 44.1"` into four
//!   segment patterns.
//! - [`DisplayContext::on_tick`] and [`DisplayContext::on_blank`] run from the scan
//!   interrupt and drive one digit at a time through a [`SegmentPort`].
//! - [`DisplayContext::poll`] runs in the foreground, samples a [`CodeInput`] and
//!   re-renders the frame when the code changes.
//!
//! With the `pico1` feature, [`Hardware`] wires it all to an RP2040.
#![cfg_attr(not(test), no_std)]

mod brightness;
mod context;
mod error;
mod font;
mod frame_buffer;
#[cfg(feature = "pico1")]
mod hardware;
mod input_array;
mod label;
mod multiplex;
mod never;
mod output_array;
mod poll;
mod shared_constants;
mod shared_frame;

// Re-export commonly used items
pub use brightness::{ScanTiming, blank_segments};
pub use context::DisplayContext;
pub use error::{Error, Result};
pub use font::{FONT, SegmentPattern, glyph, glyph_for_char};
pub use frame_buffer::{Digit, FrameBuffer};
#[cfg(feature = "pico1")]
pub use hardware::Hardware;
pub use input_array::InputArray;
pub use label::{DisplayCode, LABELS, Label, LabelTable};
pub use multiplex::{DigitCursor, SegmentPort, scan_tick};
pub use never::Never;
pub use output_array::{Led4Pins, OutputArray};
pub use poll::{CodeInput, LastCode, PollOutcome, poll_code};
pub use shared_constants::*;
pub use shared_frame::SharedFrame;
