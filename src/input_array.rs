//! The status-code input lines.

use core::convert::Infallible;

use embedded_hal::digital::InputPin;

use crate::label::DisplayCode;
use crate::poll::CodeInput;
use crate::shared_constants::CODE_BIT_COUNT;

/// Array of GPIO input pins read together as one binary value, pin 0 as the low bit.
pub struct InputArray<P, const N: usize>([P; N]);

impl<P, const N: usize> InputArray<P, N>
where
    P: InputPin<Error = Infallible>,
{
    pub const fn new(inputs: [P; N]) -> Self {
        Self(inputs)
    }

    /// Reads every pin; pins past the eighth are ignored.
    pub fn read_bits(&mut self) -> u8 {
        let mut bits = 0;
        for (input, mask) in self.0.iter_mut().zip(core::iter::successors(Some(1_u8), |mask| {
            mask.checked_mul(2)
        })) {
            let Ok(high) = input.is_high();
            if high {
                bits |= mask;
            }
        }
        bits
    }
}

impl<P> CodeInput for InputArray<P, CODE_BIT_COUNT>
where
    P: InputPin<Error = Infallible>,
{
    fn read_code(&mut self) -> DisplayCode {
        DisplayCode::from_bits_truncate(self.read_bits())
    }
}
