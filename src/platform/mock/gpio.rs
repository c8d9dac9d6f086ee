//! Mock digital output for testing

use crate::platform::{Result, traits::GpioOutput};

/// Mock digital output line
///
/// Tracks the driven level for test verification.
#[derive(Debug)]
pub struct MockGpio {
    level: bool,
}

impl MockGpio {
    /// Create a new mock output, driven low
    pub fn new() -> Self {
        Self { level: false }
    }

    /// Current driven level
    pub fn level(&self) -> bool {
        self.level
    }
}

impl Default for MockGpio {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioOutput for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        self.level = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.level = false;
        Ok(())
    }
}
