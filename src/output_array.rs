//! Groups of output pins, and the display pin set built from them.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};

use crate::font::SegmentPattern;
use crate::frame_buffer::Digit;
use crate::multiplex::SegmentPort;
use crate::shared_constants::{CELL_COUNT, SEGMENT_COUNT};

/// Array of GPIO output pins.
///
/// Only pins that cannot fail to switch are accepted, which covers the RP2040's
/// `embassy_rp::gpio::Output`.
pub struct OutputArray<P, const N: usize>([P; N]);

impl<P, const N: usize> OutputArray<P, N>
where
    P: OutputPin<Error = Infallible>,
{
    pub const fn new(outputs: [P; N]) -> Self {
        Self(outputs)
    }

    /// Sets one pin; an index past the end does nothing.
    #[inline]
    pub fn set_state_at(&mut self, index: usize, state: PinState) {
        if let Some(output) = self.0.get_mut(index) {
            let Ok(()) = output.set_state(state);
        }
    }

    #[inline]
    pub fn set_all(&mut self, state: PinState) {
        for output in &mut self.0 {
            let Ok(()) = output.set_state(state);
        }
    }
}

impl<P> OutputArray<P, { u8::BITS as usize }>
where
    P: OutputPin<Error = Infallible>,
{
    /// Pin `i` goes high exactly when bit `i` of `bits` is set.
    #[inline]
    pub fn set_from_bits(&mut self, mut bits: u8) {
        for output in &mut self.0 {
            let Ok(()) = output.set_state(PinState::from((bits & 1) == 1));
            bits >>= 1;
        }
    }
}

/// The twelve pins of a common-cathode 4-digit display.
///
/// - `cells`: digit enables, rightmost digit first, active low.
/// - `segments`: anodes `a` through `g` then the decimal point, active high.
pub struct Led4Pins<P> {
    cells: OutputArray<P, CELL_COUNT>,
    segments: OutputArray<P, SEGMENT_COUNT>,
}

impl<P> Led4Pins<P>
where
    P: OutputPin<Error = Infallible>,
{
    /// Takes the pins and switches the whole display off.
    pub fn new(cells: OutputArray<P, CELL_COUNT>, segments: OutputArray<P, SEGMENT_COUNT>) -> Self {
        let mut pins = Self { cells, segments };
        pins.disable_all();
        pins
    }
}

impl<P> SegmentPort for Led4Pins<P>
where
    P: OutputPin<Error = Infallible>,
{
    fn set_segments(&mut self, pattern: SegmentPattern) {
        self.segments.set_from_bits(pattern.bits());
    }

    fn enable_digit(&mut self, digit: Digit) {
        self.cells.set_state_at(usize::from(digit.index()), PinState::Low);
    }

    fn disable_all(&mut self) {
        self.cells.set_all(PinState::High);
        self.segments.set_all(PinState::Low);
    }
}
