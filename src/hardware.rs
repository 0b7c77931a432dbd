use embassy_rp::gpio::{self, Level, Pull};

use crate::{InputArray, Led4Pins, OutputArray};
use crate::shared_constants::CODE_BIT_COUNT;

/// Code lines float unless the bench build asks for pull-ups (no DAC card attached).
#[cfg(not(feature = "code-pull-up"))]
const CODE_PULL: Pull = Pull::None;
#[cfg(feature = "code-pull-up")]
const CODE_PULL: Pull = Pull::Up;

/// The board wiring: display on GP1-GP12, status code on GP13-GP16.
pub struct Hardware {
    pub display: Led4Pins<gpio::Output<'static>>,
    pub code: InputArray<gpio::Input<'static>, CODE_BIT_COUNT>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        // Rightmost digit first.
        let cells = OutputArray::new([
            gpio::Output::new(peripherals.PIN_1, Level::High),
            gpio::Output::new(peripherals.PIN_2, Level::High),
            gpio::Output::new(peripherals.PIN_3, Level::High),
            gpio::Output::new(peripherals.PIN_4, Level::High),
        ]);

        let segments = OutputArray::new([
            gpio::Output::new(peripherals.PIN_5, Level::Low),  // Segment A
            gpio::Output::new(peripherals.PIN_6, Level::Low),  // Segment B
            gpio::Output::new(peripherals.PIN_7, Level::Low),  // Segment C
            gpio::Output::new(peripherals.PIN_8, Level::Low),  // Segment D
            gpio::Output::new(peripherals.PIN_9, Level::Low),  // Segment E
            gpio::Output::new(peripherals.PIN_10, Level::Low), // Segment F
            gpio::Output::new(peripherals.PIN_11, Level::Low), // Segment G
            gpio::Output::new(peripherals.PIN_12, Level::Low), // Decimal point / colon
        ]);

        // Code bit 0 first.
        let code = InputArray::new([
            gpio::Input::new(peripherals.PIN_13, CODE_PULL),
            gpio::Input::new(peripherals.PIN_14, CODE_PULL),
            gpio::Input::new(peripherals.PIN_15, CODE_PULL),
            gpio::Input::new(peripherals.PIN_16, CODE_PULL),
        ]);

        Self {
            display: Led4Pins::new(cells, segments),
            code,
        }
    }
}
