//! Quadrature counter trait
//!
//! This module defines the counter-timer interface the encoder channel reads
//! from. The hardware counts quadrature edges into a free-running modular
//! counter; position accumulation and wraparound correction live above this
//! boundary in `EncoderChannel`.

use crate::platform::Result;

/// Quadrature counter configuration
///
/// Describes the timer/channel binding for a counter instance. Platform
/// constructors validate the combination against the target hardware and
/// reject invalid bindings at construction.
#[derive(Debug, Clone, Copy)]
pub struct CounterConfig {
    /// Hardware timer number
    pub timer: u8,
    /// Timer capture channel wired to encoder signal A
    pub channel_a: u8,
    /// Timer capture channel wired to encoder signal B
    pub channel_b: u8,
    /// Counter modulus; raw readings are in `[0, period)`
    pub period: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        // Timer 3, channels 1/2, 16-bit wrap: the reference board wiring.
        Self {
            timer: 3,
            channel_a: 1,
            channel_b: 2,
            period: 65535,
        }
    }
}

/// Free-running quadrature counter
///
/// Platform implementations must provide this interface for each counter
/// bound to an encoder.
pub trait QuadratureCounter {
    /// Read the raw counter value, in `[0, period)`
    ///
    /// The raw value is modular; it wraps through zero in both directions as
    /// the shaft turns.
    fn count(&self) -> u32;

    /// Counter modulus this instance wraps at
    fn period(&self) -> u32;

    /// Reset the raw counter to zero
    ///
    /// # Errors
    ///
    /// Returns a `PlatformError::Counter` variant if the hardware rejects
    /// the write.
    fn reset(&mut self) -> Result<()>;
}
