use embassy_time::Duration;

/// The number of cells (digits) in the display.
pub const CELL_COUNT_U8: u8 = 4;
pub const CELL_COUNT: usize = CELL_COUNT_U8 as usize;

/// The number of segments per digit in the display.
/// Each digit has 8 segments (7 segments plus a decimal point / colon).
pub const SEGMENT_COUNT: usize = 8;

/// Width of the status code presented by the DAC interface.
pub const CODE_BIT_COUNT: usize = 4;

/// Time each digit is enabled before the scan moves on.
///
/// The default of 2048 µs refreshes the whole display at about 122 Hz.
/// Override at build time with `RATE_LED4_SCAN_TICK_US`.
pub const SCAN_TICK: Duration = Duration::from_micros(parse_micros(env!("RATE_LED4_SCAN_TICK_US")));

/// How long into each scan tick the segments stay lit before they are blanked.
///
/// `None` leaves them lit for the whole tick (full brightness).
/// Override at build time with `RATE_LED4_ON_TIME_US`; `0` means full brightness.
pub const SEGMENT_ON_TIME: Option<Duration> = match parse_micros(env!("RATE_LED4_ON_TIME_US")) {
    0 => None,
    micros => Some(Duration::from_micros(micros)),
};

/// How often the foreground samples the status code.
pub const SAMPLE_PERIOD: Duration = Duration::from_millis(1);

/// Parses a decimal count of microseconds at compile time. An empty string is zero.
///
/// # Panics
///
/// Panics (failing the build) if `text` holds anything but ASCII digits or overflows.
#[must_use]
#[expect(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "Loop is bounded by the length; overflow fails const evaluation"
)]
pub const fn parse_micros(text: &str) -> u64 {
    let bytes = text.as_bytes();
    let mut micros: u64 = 0;
    let mut index = 0;
    while index < bytes.len() {
        let byte = bytes[index];
        assert!(byte.is_ascii_digit(), "expected a whole number of microseconds");
        micros = micros * 10 + (byte - b'0') as u64;
        index += 1;
    }
    micros
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_micros() {
        const TICK: u64 = parse_micros("2048");
        assert_eq!(TICK, 2048);
        assert_eq!(parse_micros(""), 0);
        assert_eq!(parse_micros("0"), 0);
        assert_eq!(parse_micros("00150"), 150);
    }

    #[test]
    fn test_configured_on_time_fits_in_tick() {
        if let Some(on_time) = SEGMENT_ON_TIME {
            assert!(on_time < SCAN_TICK);
        }
        assert!(SCAN_TICK.as_ticks() > 0);
    }
}
