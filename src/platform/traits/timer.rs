//! Timer interface trait
//!
//! This module defines the time-keeping interface that platform
//! implementations must provide.

use crate::platform::Result;

/// Timer interface
///
/// Platform implementations must provide blocking delays and a monotonic
/// microsecond clock.
pub trait TimerInterface {
    /// Block for the given number of microseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the duration cannot be produced.
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    /// Microseconds since timer start
    fn now_us(&self) -> u64;
}
