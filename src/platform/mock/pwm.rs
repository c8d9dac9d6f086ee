//! Mock PWM implementation for testing

use crate::platform::{
    Result,
    error::{PlatformError, PwmError},
    traits::{PwmChannel, PwmConfig},
};

/// Mock PWM channel
///
/// Tracks the commanded pulse width for test verification.
#[derive(Debug)]
pub struct MockPwm {
    pulse_width: f32,
    frequency: u32,
}

impl MockPwm {
    /// Create a new mock PWM channel
    pub fn new(config: PwmConfig) -> Self {
        Self {
            pulse_width: 0.0,
            frequency: config.frequency,
        }
    }

    /// Configured carrier frequency
    pub fn frequency(&self) -> u32 {
        self.frequency
    }
}

impl Default for MockPwm {
    fn default() -> Self {
        Self::new(PwmConfig::default())
    }
}

impl PwmChannel for MockPwm {
    fn set_pulse_width_percent(&mut self, percent: f32) -> Result<()> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(PlatformError::Pwm(PwmError::InvalidPulseWidth));
        }
        self.pulse_width = percent;
        Ok(())
    }

    fn pulse_width_percent(&self) -> f32 {
        self.pulse_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_pwm_pulse_width() {
        let mut pwm = MockPwm::default();
        assert_eq!(pwm.pulse_width_percent(), 0.0);

        pwm.set_pulse_width_percent(55.0).unwrap();
        assert_eq!(pwm.pulse_width_percent(), 55.0);
    }

    #[test]
    fn test_mock_pwm_rejects_out_of_range() {
        let mut pwm = MockPwm::default();

        assert!(pwm.set_pulse_width_percent(-0.1).is_err());
        assert!(pwm.set_pulse_width_percent(100.1).is_err());

        // Rejected commands must not disturb the output
        assert_eq!(pwm.pulse_width_percent(), 0.0);
    }

    #[test]
    fn test_mock_pwm_default_frequency() {
        let pwm = MockPwm::default();
        assert_eq!(pwm.frequency(), 20_000);
    }
}
