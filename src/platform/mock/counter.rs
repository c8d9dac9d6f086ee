//! Mock quadrature counter for testing

use crate::platform::{
    Result,
    error::{CounterError, PlatformError},
    traits::{CounterConfig, QuadratureCounter},
};

/// Timers with encoder-capable capture inputs on the reference hardware
const ENCODER_TIMERS: core::ops::RangeInclusive<u8> = 1..=8;

/// Mock quadrature counter
///
/// Simulates a free-running modular counter. Tests drive it with
/// [`set_count`](MockQuadratureCounter::set_count) and
/// [`advance`](MockQuadratureCounter::advance) to stand in for shaft motion.
#[derive(Debug)]
pub struct MockQuadratureCounter {
    count: u32,
    period: u32,
}

impl MockQuadratureCounter {
    /// Create a new mock counter from a timer/channel binding
    ///
    /// Validates the binding the way the hardware constructor would:
    /// encoder mode only exists on capture channels 1/2 of the
    /// encoder-capable timers.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Counter` describing the rejected binding.
    pub fn new(config: CounterConfig) -> Result<Self> {
        if !ENCODER_TIMERS.contains(&config.timer) {
            return Err(PlatformError::Counter(CounterError::InvalidTimer));
        }
        let pair = (config.channel_a, config.channel_b);
        if pair != (1, 2) && pair != (2, 1) {
            return Err(PlatformError::Counter(CounterError::InvalidChannelPair));
        }
        if config.period < 2 {
            return Err(PlatformError::Counter(CounterError::InvalidPeriod));
        }
        Ok(Self {
            count: 0,
            period: config.period,
        })
    }

    /// Force the raw counter to a specific value (taken modulo the period)
    pub fn set_count(&mut self, raw: u32) {
        self.count = raw % self.period;
    }

    /// Move the simulated shaft by `ticks`, wrapping through the modulus
    ///
    /// Negative values turn the shaft backward through zero the way the
    /// hardware counter underflows.
    pub fn advance(&mut self, ticks: i64) {
        let period = i64::from(self.period);
        let next = (i64::from(self.count) + ticks).rem_euclid(period);
        self.count = next as u32;
    }
}

impl QuadratureCounter for MockQuadratureCounter {
    fn count(&self) -> u32 {
        self.count
    }

    fn period(&self) -> u32 {
        self.period
    }

    fn reset(&mut self) -> Result<()> {
        self.count = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_counter_accepts_reference_binding() {
        let counter = MockQuadratureCounter::new(CounterConfig::default()).unwrap();
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.period(), 65535);
    }

    #[test]
    fn test_mock_counter_rejects_bad_bindings() {
        let bad_timer = CounterConfig {
            timer: 12,
            ..CounterConfig::default()
        };
        assert_eq!(
            MockQuadratureCounter::new(bad_timer).unwrap_err(),
            PlatformError::Counter(CounterError::InvalidTimer)
        );

        let bad_channels = CounterConfig {
            channel_a: 3,
            channel_b: 4,
            ..CounterConfig::default()
        };
        assert_eq!(
            MockQuadratureCounter::new(bad_channels).unwrap_err(),
            PlatformError::Counter(CounterError::InvalidChannelPair)
        );

        let bad_period = CounterConfig {
            period: 1,
            ..CounterConfig::default()
        };
        assert_eq!(
            MockQuadratureCounter::new(bad_period).unwrap_err(),
            PlatformError::Counter(CounterError::InvalidPeriod)
        );
    }

    #[test]
    fn test_mock_counter_advance_wraps_both_ways() {
        let mut counter = MockQuadratureCounter::new(CounterConfig::default()).unwrap();

        counter.advance(-1);
        assert_eq!(counter.count(), 65534);

        counter.advance(2);
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_mock_counter_reset() {
        let mut counter = MockQuadratureCounter::new(CounterConfig::default()).unwrap();
        counter.set_count(1234);
        counter.reset().unwrap();
        assert_eq!(counter.count(), 0);
    }
}
