//! Dimming by blanking the segments part way through each scan tick.

use embassy_time::Duration;

use crate::font::SegmentPattern;
use crate::multiplex::SegmentPort;
use crate::shared_constants::{SCAN_TICK, SEGMENT_ON_TIME};
use crate::{Error, Result};

/// The scan cadence and how much of each tick the segments are lit.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTiming {
    tick: Duration,
    on_time: Option<Duration>,
}

impl ScanTiming {
    /// `on_time` of `None` never blanks; otherwise it must be non-zero and shorter than `tick`
    /// so the blank lands before the next digit advance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroScanTick`] for a zero `tick` and
    /// [`Error::BlankOffsetOutOfRange`] for an `on_time` outside the tick.
    pub fn new(tick: Duration, on_time: Option<Duration>) -> Result<Self> {
        if tick.as_ticks() == 0 {
            return Err(Error::ZeroScanTick);
        }
        if on_time.is_some_and(|on_time| on_time.as_ticks() == 0 || on_time >= tick) {
            return Err(Error::BlankOffsetOutOfRange);
        }
        Ok(Self { tick, on_time })
    }

    /// The timing chosen at build time.
    ///
    /// # Errors
    ///
    /// See [`ScanTiming::new`].
    pub fn from_config() -> Result<Self> {
        Self::new(SCAN_TICK, SEGMENT_ON_TIME)
    }

    #[must_use]
    pub const fn tick(&self) -> Duration {
        self.tick
    }

    /// Delay from a digit advance to its blank, if blanking is enabled.
    #[must_use]
    pub const fn on_time(&self) -> Option<Duration> {
        self.on_time
    }

    /// Share of each tick the segments are lit, in percent.
    #[must_use]
    pub fn duty_percent(&self) -> u8 {
        let Some(on_time) = self.on_time else {
            return 100;
        };
        on_time
            .as_ticks()
            .saturating_mul(100)
            .checked_div(self.tick.as_ticks())
            .and_then(|percent| u8::try_from(percent).ok())
            .unwrap_or(100)
    }
}

/// Turns the segment lines off and leaves the enabled digit alone.
///
/// Runs in interrupt context, once per tick, after [`ScanTiming::on_time`].
pub fn blank_segments<P: SegmentPort + ?Sized>(port: &mut P) {
    port.set_segments(SegmentPattern::BLANK);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_tick() {
        assert!(matches!(
            ScanTiming::new(Duration::from_ticks(0), None),
            Err(Error::ZeroScanTick)
        ));
    }

    #[test]
    fn test_rejects_on_time_outside_tick() {
        let tick = Duration::from_micros(2048);
        for on_time in [tick, Duration::from_micros(4096), Duration::from_ticks(0)] {
            assert!(matches!(
                ScanTiming::new(tick, Some(on_time)),
                Err(Error::BlankOffsetOutOfRange)
            ));
        }
    }

    #[test]
    fn test_duty_percent() {
        let tick = Duration::from_micros(2000);
        let full = ScanTiming::new(tick, None).expect("valid timing");
        assert_eq!(full.duty_percent(), 100);
        assert_eq!(full.on_time(), None);

        let dimmed = ScanTiming::new(tick, Some(Duration::from_micros(500))).expect("valid timing");
        assert_eq!(dimmed.duty_percent(), 25);
        assert_eq!(dimmed.tick(), tick);
    }

    #[test]
    fn test_build_time_config_is_valid() {
        assert!(ScanTiming::from_config().is_ok());
    }
}
