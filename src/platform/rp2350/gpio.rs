//! RP2350 digital output implementation
//!
//! This module provides the enable-line output for RP2350 using the
//! `rp235x-hal` crate.

use crate::platform::{
    Result,
    error::{GpioError, PlatformError},
    traits::GpioOutput,
};
use embedded_hal::digital::OutputPin;
use rp235x_hal::gpio::{FunctionSioOutput, Pin, PinId, PullType};

/// RP2350 push-pull output
///
/// Wraps an `rp235x-hal` SIO output pin to implement the `GpioOutput` trait.
pub struct Rp2350Output<I: PinId, P: PullType> {
    pin: Pin<I, FunctionSioOutput, P>,
}

impl<I: PinId, P: PullType> Rp2350Output<I, P> {
    /// Create a new output from a pin already in SIO output function
    pub fn new(pin: Pin<I, FunctionSioOutput, P>) -> Self {
        Self { pin }
    }

    /// Release the underlying pin
    pub fn free(self) -> Pin<I, FunctionSioOutput, P> {
        self.pin
    }
}

impl<I: PinId, P: PullType> GpioOutput for Rp2350Output<I, P> {
    fn set_high(&mut self) -> Result<()> {
        self.pin
            .set_high()
            .map_err(|_| PlatformError::Gpio(GpioError::HardwareError))
    }

    fn set_low(&mut self) -> Result<()> {
        self.pin
            .set_low()
            .map_err(|_| PlatformError::Gpio(GpioError::HardwareError))
    }
}
