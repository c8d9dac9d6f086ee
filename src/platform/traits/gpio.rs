//! Digital output trait
//!
//! This module defines the output-line interface that platform implementations
//! must provide. The motor driver uses it for the nSLEEP enable line.

use crate::platform::Result;

/// Digital output line
///
/// Platform implementations must provide this interface for push-pull outputs.
///
/// # Safety Invariants
///
/// - Pin must be configured as an output before use
/// - Only one owner per pin instance
/// - No concurrent access to the same pin from multiple contexts
pub trait GpioOutput {
    /// Drive the line high (logic level 1)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::HardwareError)` if the
    /// hardware write fails.
    fn set_high(&mut self) -> Result<()>;

    /// Drive the line low (logic level 0)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::HardwareError)` if the
    /// hardware write fails.
    fn set_low(&mut self) -> Result<()>;

    /// Drive the line to the given level
    fn set_value(&mut self, high: bool) -> Result<()> {
        if high { self.set_high() } else { self.set_low() }
    }
}
