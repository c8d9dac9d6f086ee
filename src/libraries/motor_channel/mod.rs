//! H-bridge motor channel with fault protection
//!
//! This module drives one motor of a dual H-bridge driver (DRV8847-class)
//! through two PWM capabilities, a shared nSLEEP enable line and the nFAULT
//! input. A signed duty command in `[-100, +100]` selects direction by sign:
//! the matching bridge input gets the magnitude as pulse width, the other is
//! held at zero. The two inputs are never driven simultaneously.
//!
//! ## Fault handling
//!
//! The driver IC pulls nFAULT low on overcurrent, overtemperature or
//! undervoltage. [`MotorChannel::on_fault`] is the handler for that edge,
//! written as a plain synchronous method so it is unit-testable; in
//! production the interrupt vector reaches it through
//! [`SharedMotorChannel`], which also makes it atomic against an in-flight
//! duty command. A fault latches until an operator calls
//! [`MotorChannel::clear_fault`]; there is no automatic retry. A fault
//! always leaves the motor at rest.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::platform::{
    PlatformError,
    traits::{FaultInput, GpioOutput, PwmChannel, TimerInterface},
};

mod shared;

pub use shared::SharedMotorChannel;

/// Counter for sampling duty-command logs (every 100th call)
static SET_DUTY_LOG_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Settling time after asserting nSLEEP, with fault edges suppressed
///
/// The power-up transient can glitch the nFAULT line without a real fault
/// condition; the DRV-class datasheets bound the transient well below this.
const ENABLE_SETTLE_MS: u32 = 25;

/// Motor channel error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum MotorError {
    /// A latched fault is active; clear it before commanding the motor
    FaultActive,
    /// Duty command outside [-100, +100]
    InvalidDuty,
    /// Underlying pin or PWM hardware failed
    Hardware(PlatformError),
}

impl From<PlatformError> for MotorError {
    fn from(err: PlatformError) -> Self {
        MotorError::Hardware(err)
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::FaultActive => write!(f, "motor fault active"),
            MotorError::InvalidDuty => write!(f, "duty cycle outside [-100, +100]"),
            MotorError::Hardware(e) => write!(f, "motor hardware error: {}", e),
        }
    }
}

/// Channel state derived from the enable and fault flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum MotorState {
    /// Sleep line low, outputs inactive
    Disabled,
    /// Sleep line high, accepting duty commands
    Enabled,
    /// Fault latched; disabled until `clear_fault`
    Faulted,
}

/// One motor of a dual H-bridge driver
///
/// # Type Parameters
///
/// * `IN1` - PWM capability for the first bridge input
/// * `IN2` - PWM capability for the second bridge input
/// * `EN`  - digital output for the nSLEEP line
/// * `FLT` - interrupt-capable input for the nFAULT line
pub struct MotorChannel<IN1, IN2, EN, FLT>
where
    IN1: PwmChannel,
    IN2: PwmChannel,
    EN: GpioOutput,
    FLT: FaultInput,
{
    in1: IN1,
    in2: IN2,
    enable_line: EN,
    fault_line: FLT,
    enabled: bool,
    faulted: bool,
    duty_cycle: f32,
}

impl<IN1, IN2, EN, FLT> MotorChannel<IN1, IN2, EN, FLT>
where
    IN1: PwmChannel,
    IN2: PwmChannel,
    EN: GpioOutput,
    FLT: FaultInput,
{
    /// Create a channel over bound capabilities, starting Disabled
    ///
    /// Both bridge inputs are forced to zero drive and the sleep line is
    /// deasserted before the channel is handed out.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Hardware` if the initial zero-drive writes fail.
    pub fn new(in1: IN1, in2: IN2, enable_line: EN, fault_line: FLT) -> Result<Self, MotorError> {
        let mut channel = Self {
            in1,
            in2,
            enable_line,
            fault_line,
            enabled: false,
            faulted: false,
            duty_cycle: 0.0,
        };
        channel.in1.set_pulse_width_percent(0.0)?;
        channel.in2.set_pulse_width_percent(0.0)?;
        channel.enable_line.set_low()?;
        Ok(channel)
    }

    /// Assert the sleep line and start accepting duty commands
    ///
    /// Fault edges are masked for the whole settle window so the power-up
    /// transient cannot latch a spurious fault, then unmasked.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::FaultActive` while a fault is latched, or
    /// `MotorError::Hardware` if the line or timer fails. The fault line is
    /// unmasked again on every path out.
    pub fn enable(&mut self, timer: &mut impl TimerInterface) -> Result<(), MotorError> {
        if self.faulted {
            return Err(MotorError::FaultActive);
        }

        self.fault_line.mask();
        let settled = self
            .enable_line
            .set_high()
            .and_then(|()| timer.delay_ms(ENABLE_SETTLE_MS));
        self.fault_line.unmask();
        settled?;

        self.enabled = true;
        crate::log_info!("motor enabled");
        Ok(())
    }

    /// Deassert the sleep line
    ///
    /// Safe to call in any state, including repeatedly; a latched fault
    /// stays latched.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Hardware` if the line write fails.
    pub fn disable(&mut self) -> Result<(), MotorError> {
        self.enable_line.set_low()?;
        self.enabled = false;
        Ok(())
    }

    /// Command a signed duty cycle in percent
    ///
    /// Sign selects the driven bridge input, magnitude its pulse width; the
    /// opposite input is held at zero.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::FaultActive` while a fault is latched (outputs
    /// untouched) or `MotorError::InvalidDuty` outside `[-100, +100]`.
    pub fn set_duty(&mut self, duty: f32) -> Result<(), MotorError> {
        if self.faulted {
            return Err(MotorError::FaultActive);
        }
        if !(-100.0..=100.0).contains(&duty) {
            return Err(MotorError::InvalidDuty);
        }

        // Sample logging: only log every 100th command to reduce noise
        let count = SET_DUTY_LOG_COUNTER.fetch_add(1, Ordering::Relaxed);
        if count % 100 == 0 {
            crate::log_debug!("motor duty command: {}", duty);
        }

        if duty >= 0.0 {
            self.in1.set_pulse_width_percent(duty)?;
            self.in2.set_pulse_width_percent(0.0)?;
        } else {
            self.in1.set_pulse_width_percent(0.0)?;
            self.in2.set_pulse_width_percent(-duty)?;
        }
        self.duty_cycle = duty;
        Ok(())
    }

    /// Fault-edge handler: latch the fault and force the motor to rest
    ///
    /// Runs in interrupt context via [`SharedMotorChannel::on_fault_irq`],
    /// so it must not block or allocate, and it must run to completion even
    /// if a hardware write errors on the way down.
    pub fn on_fault(&mut self) {
        self.faulted = true;
        let _ = self.in1.set_pulse_width_percent(0.0);
        let _ = self.in2.set_pulse_width_percent(0.0);
        let _ = self.enable_line.set_low();
        self.enabled = false;
        self.duty_cycle = 0.0;
        crate::log_warn!("motor fault detected, disabling");
    }

    /// Unlatch the fault and re-enable the driver
    ///
    /// The operator is responsible for confirming the physical fault
    /// condition has cleared first (see
    /// [`fault_line_mut`](Self::fault_line_mut) and
    /// [`FaultInput::is_asserted`]); nothing here retries.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Hardware` if re-enabling fails.
    pub fn clear_fault(&mut self, timer: &mut impl TimerInterface) -> Result<(), MotorError> {
        self.faulted = false;
        crate::log_info!("motor fault cleared");
        self.enable(timer)
    }

    /// Whether the sleep line is asserted
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a fault is latched
    pub fn is_faulted(&self) -> bool {
        self.faulted
    }

    /// Last accepted duty command
    pub fn duty_cycle(&self) -> f32 {
        self.duty_cycle
    }

    /// Current channel state
    pub fn state(&self) -> MotorState {
        if self.faulted {
            MotorState::Faulted
        } else if self.enabled {
            MotorState::Enabled
        } else {
            MotorState::Disabled
        }
    }

    /// Pulse widths currently commanded on the two bridge inputs
    pub fn pulse_widths(&self) -> (f32, f32) {
        (
            self.in1.pulse_width_percent(),
            self.in2.pulse_width_percent(),
        )
    }

    /// Mutably borrow the fault line capability
    ///
    /// Operators use this to level-check nFAULT before `clear_fault`.
    pub fn fault_line_mut(&mut self) -> &mut FLT {
        &mut self.fault_line
    }
}
