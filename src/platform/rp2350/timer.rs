//! RP2350 timer implementation
//!
//! This module provides the delay and monotonic-clock backend for RP2350
//! using the `rp235x-hal` timer peripheral.

use crate::platform::{Result, traits::TimerInterface};
use embedded_hal::delay::DelayNs;
use rp235x_hal::timer::{CopyableTimer0, Timer};

/// RP2350 timer
///
/// Wraps the `rp235x-hal` TIMER0 peripheral to implement the
/// `TimerInterface` trait.
pub struct Rp2350Timer {
    timer: Timer<CopyableTimer0>,
}

impl Rp2350Timer {
    /// Create a new timer from the initialized TIMER0 peripheral
    pub fn new(timer: Timer<CopyableTimer0>) -> Self {
        Self { timer }
    }
}

impl TimerInterface for Rp2350Timer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.timer.delay_us(us);
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.timer.get_counter().ticks()
    }
}
