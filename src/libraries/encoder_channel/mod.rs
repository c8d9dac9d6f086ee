//! Quadrature encoder position tracking
//!
//! This module accumulates absolute shaft position from a free-running
//! modular counter. The hardware counter wraps at a fixed modulus; the
//! channel turns its raw readings into an unbounded signed position by
//! correcting each sampled delta for overflow and underflow.
//!
//! ## Call-rate obligation
//!
//! Wraparound correction assumes the shaft moves less than half the counter
//! modulus between two `update()` calls. A true move of more than
//! `period / 2` ticks between samples is indistinguishable from a wrap in
//! the opposite direction and is silently misattributed. This is a
//! documented precision limitation bounded by the caller's update cadence,
//! not a detectable fault.

use core::fmt;

use crate::platform::{PlatformError, traits::QuadratureCounter};

/// Encoder channel error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum EncoderError {
    /// Counter modulus too small to track position on
    InvalidPeriod,
    /// Underlying counter hardware failed
    Hardware(PlatformError),
}

impl From<PlatformError> for EncoderError {
    fn from(err: PlatformError) -> Self {
        EncoderError::Hardware(err)
    }
}

impl fmt::Display for EncoderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncoderError::InvalidPeriod => write!(f, "counter modulus too small"),
            EncoderError::Hardware(e) => write!(f, "counter hardware error: {}", e),
        }
    }
}

/// Position tracker over one quadrature counter
///
/// Owns the bound counter capability. `update()` must be called on a regular
/// cadence; all other operations are cheap reads or field overwrites.
#[derive(Debug)]
pub struct EncoderChannel<C: QuadratureCounter> {
    counter: C,
    /// Counter modulus; raw readings stay in `[0, period)`
    period: u32,
    /// Raw reading at the previous update, the delta baseline
    ref_count: u32,
    /// Accumulated position in ticks, unbounded
    position: i64,
    /// Corrected delta from the most recent update
    last_delta: i64,
}

impl<C: QuadratureCounter> EncoderChannel<C> {
    /// Create a channel over a bound counter, starting at position zero
    ///
    /// The hardware counter is reset so the raw reading matches the zeroed
    /// reference baseline.
    ///
    /// # Errors
    ///
    /// Returns `EncoderError::InvalidPeriod` if the counter modulus is below
    /// 2, or `EncoderError::Hardware` if the counter reset fails.
    pub fn new(mut counter: C) -> Result<Self, EncoderError> {
        let period = counter.period();
        if period < 2 {
            return Err(EncoderError::InvalidPeriod);
        }
        counter.reset()?;
        Ok(Self {
            counter,
            period,
            ref_count: 0,
            position: 0,
            last_delta: 0,
        })
    }

    /// Sample the counter and accumulate the corrected delta
    ///
    /// Reads the raw count, computes the difference from the previous
    /// reading, and corrects it for counter wrap: a jump of more than half
    /// the modulus can only come from the counter rolling over, not from
    /// the shaft actually moving that far (see the module docs for the
    /// cadence this relies on). The corrected delta lands in
    /// `(-period/2, period/2]`.
    pub fn update(&mut self) {
        let raw = self.counter.count();
        let period = i64::from(self.period);
        let half = period / 2;

        let mut delta = i64::from(raw) - i64::from(self.ref_count);
        if delta > half {
            // Counter jumped up: the shaft moved backward through zero.
            delta -= period;
        } else if delta < -half {
            // Counter jumped down: the shaft moved forward through the wrap.
            delta += period;
        }

        self.last_delta = delta;
        self.ref_count = raw;
        self.position += delta;
    }

    /// Accumulated position in ticks
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Corrected delta computed by the most recent `update()`
    ///
    /// Returns the stored value; nothing is recomputed.
    pub fn last_delta(&self) -> i64 {
        self.last_delta
    }

    /// Overwrite the accumulated position
    ///
    /// The raw reference baseline is left untouched, matching the legacy
    /// controller behavior: the next `update()` still measures its delta
    /// from the last raw reading, so motion between the overwrite and that
    /// update is carried into the new position. See
    /// `set_position_keeps_raw_reference` in the tests.
    pub fn set_position(&mut self, position: i64) {
        self.position = position;
    }

    /// Overwrite the accumulated position with zero
    pub fn zero(&mut self) {
        self.set_position(0);
    }

    /// Counter modulus this channel corrects against
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Borrow the underlying counter capability
    pub fn counter(&self) -> &C {
        &self.counter
    }

    /// Mutably borrow the underlying counter capability
    pub fn counter_mut(&mut self) -> &mut C {
        &mut self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockQuadratureCounter;
    use crate::platform::traits::CounterConfig;

    fn channel() -> EncoderChannel<MockQuadratureCounter> {
        let counter = MockQuadratureCounter::new(CounterConfig::default()).unwrap();
        EncoderChannel::new(counter).unwrap()
    }

    fn channel_with_period(period: u32) -> EncoderChannel<MockQuadratureCounter> {
        let config = CounterConfig {
            period,
            ..CounterConfig::default()
        };
        let counter = MockQuadratureCounter::new(config).unwrap();
        EncoderChannel::new(counter).unwrap()
    }

    #[test]
    fn test_no_wrap_delta() {
        let mut enc = channel();
        enc.counter_mut().set_count(1000);
        enc.update();
        enc.counter_mut().set_count(1050);
        enc.update();

        assert_eq!(enc.last_delta(), 50);
        assert_eq!(enc.position(), 1050);
    }

    #[test]
    fn test_forward_wrap_corrected() {
        let mut enc = channel();
        enc.counter_mut().set_count(65000);
        enc.update();
        let position_before = enc.position();

        // Shaft keeps moving forward; the counter wraps through its max.
        enc.counter_mut().set_count(100);
        enc.update();

        // raw delta = 100 - 65000 = -64900, below -period/2, so +65535
        assert_eq!(enc.last_delta(), 635);
        assert_eq!(enc.position(), position_before + 635);
    }

    #[test]
    fn test_backward_wrap_corrected() {
        let mut enc = channel();
        enc.counter_mut().set_count(100);
        enc.update();
        let position_before = enc.position();

        // Shaft reverses through zero; the counter wraps to near its max.
        enc.counter_mut().set_count(65000);
        enc.update();

        // raw delta = 64900, above period/2, so -65535
        assert_eq!(enc.last_delta(), -635);
        assert_eq!(enc.position(), position_before - 635);
    }

    #[test]
    fn test_half_period_boundary() {
        // Even modulus: a delta of exactly period/2 is kept as forward
        // motion; one past it is treated as a backward wrap.
        let mut enc = channel_with_period(100);
        enc.counter_mut().set_count(50);
        enc.update();
        assert_eq!(enc.last_delta(), 50);

        let mut enc = channel_with_period(100);
        enc.counter_mut().set_count(51);
        enc.update();
        assert_eq!(enc.last_delta(), -49);
    }

    #[test]
    fn test_position_is_sum_of_deltas() {
        let mut enc = channel();
        let moves: [i64; 7] = [500, 30000, 30000, 30000, -20000, -32767, 12];

        let mut expected = 0;
        for ticks in moves {
            enc.counter_mut().advance(ticks);
            enc.update();
            expected += ticks;
            assert_eq!(enc.last_delta(), ticks);
        }
        assert_eq!(enc.position(), expected);
    }

    #[test]
    fn test_set_position_round_trip() {
        let mut enc = channel();
        enc.set_position(-987654321);
        assert_eq!(enc.position(), -987654321);

        enc.set_position(42);
        assert_eq!(enc.position(), 42);
    }

    #[test]
    fn test_zero() {
        let mut enc = channel();
        enc.counter_mut().set_count(4000);
        enc.update();
        assert_eq!(enc.position(), 4000);

        enc.zero();
        assert_eq!(enc.position(), 0);
    }

    #[test]
    fn test_update_is_idempotent_without_motion() {
        let mut enc = channel();
        enc.counter_mut().set_count(777);
        enc.update();
        enc.update();
        enc.update();

        assert_eq!(enc.position(), 777);
        assert_eq!(enc.last_delta(), 0);
    }

    // Known quirk carried over from the legacy controller: overwriting the
    // position does not resync the raw baseline, so the first update after
    // a zero() folds the pre-zero motion into the fresh position.
    #[test]
    fn test_set_position_keeps_raw_reference() {
        let mut enc = channel();
        enc.counter_mut().set_count(1000);
        enc.update();
        assert_eq!(enc.position(), 1000);

        enc.zero();
        enc.counter_mut().set_count(1100);
        enc.update();

        // Delta baselines from the stale raw reading of 1000, not from the
        // zeroed position: 100 ticks of real motion land on top of zero.
        assert_eq!(enc.position(), 100);
        assert_eq!(enc.last_delta(), 100);
    }

    #[test]
    fn test_rejects_degenerate_period() {
        // The mock constructor refuses a modulus this small, so a bare fake
        // stands in for a misconfigured hardware counter.
        #[derive(Debug)]
        struct DegenerateCounter;

        impl QuadratureCounter for DegenerateCounter {
            fn count(&self) -> u32 {
                0
            }

            fn period(&self) -> u32 {
                1
            }

            fn reset(&mut self) -> crate::platform::Result<()> {
                Ok(())
            }
        }

        assert_eq!(
            EncoderChannel::new(DegenerateCounter).unwrap_err(),
            EncoderError::InvalidPeriod
        );

        let config = CounterConfig {
            period: 2,
            ..CounterConfig::default()
        };
        let counter = MockQuadratureCounter::new(config).unwrap();
        assert!(EncoderChannel::new(counter).is_ok());
    }

    #[test]
    fn test_construction_resets_counter() {
        let config = CounterConfig::default();
        let mut counter = MockQuadratureCounter::new(config).unwrap();
        counter.set_count(500);

        let enc = EncoderChannel::new(counter).unwrap();
        assert_eq!(enc.counter().count(), 0);
        assert_eq!(enc.position(), 0);
    }
}
