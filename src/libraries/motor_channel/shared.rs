//! Interrupt-shared motor channel handle
//!
//! The fault edge arrives in interrupt context and may preempt the control
//! loop at an arbitrary point. Both paths touch the same bridge outputs, so
//! fault handling must be atomic with respect to an in-flight duty command.
//! This wrapper holds the channel behind a critical-section blocking mutex:
//! whichever path holds the lock runs to completion, and a fault can never
//! observe (or leave behind) a half-applied command.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::platform::traits::{FaultInput, GpioOutput, PwmChannel};

use super::MotorChannel;

/// Static-friendly cell sharing one `MotorChannel` between the control loop
/// and the fault interrupt vector
///
/// ```ignore
/// static MOTOR: SharedMotorChannel<Channel> = SharedMotorChannel::new();
///
/// // at startup
/// MOTOR.put(channel);
///
/// // control loop
/// MOTOR.with(|motor| motor.set_duty(70.0));
///
/// // falling-edge interrupt vector for nFAULT
/// MOTOR.on_fault_irq();
/// ```
pub struct SharedMotorChannel<M> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<Option<M>>>,
}

impl<M> SharedMotorChannel<M> {
    /// Create an empty cell
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Install the channel, replacing any previous occupant
    pub fn put(&self, motor: M) {
        self.inner.lock(|cell| {
            cell.replace(Some(motor));
        });
    }

    /// Run `f` on the channel inside a critical section
    ///
    /// Returns `None` if no channel has been installed.
    pub fn with<R>(&self, f: impl FnOnce(&mut M) -> R) -> Option<R> {
        self.inner.lock(|cell| cell.borrow_mut().as_mut().map(f))
    }
}

impl<M> Default for SharedMotorChannel<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<IN1, IN2, EN, FLT> SharedMotorChannel<MotorChannel<IN1, IN2, EN, FLT>>
where
    IN1: PwmChannel,
    IN2: PwmChannel,
    EN: GpioOutput,
    FLT: FaultInput,
{
    /// Fault-vector entry point: latch the fault and force the motor to rest
    ///
    /// No-op if no channel is installed. Takes the same lock as
    /// [`with`](Self::with), so the shutdown is atomic against any duty
    /// command in flight on the control loop.
    pub fn on_fault_irq(&self) {
        self.with(MotorChannel::on_fault);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libraries::motor_channel::{MotorError, MotorState};
    use crate::platform::mock::{MockFaultLine, MockGpio, MockPwm, MockTimer};

    type TestChannel = MotorChannel<MockPwm, MockPwm, MockGpio, MockFaultLine>;

    fn channel() -> TestChannel {
        MotorChannel::new(
            MockPwm::default(),
            MockPwm::default(),
            MockGpio::new(),
            MockFaultLine::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_with_on_empty_cell_is_none() {
        let shared: SharedMotorChannel<TestChannel> = SharedMotorChannel::new();
        assert_eq!(shared.with(|motor| motor.duty_cycle()), None);

        // The fault vector may fire before startup finishes installing the
        // channel; nothing to shut down yet.
        shared.on_fault_irq();
    }

    #[test]
    fn test_commands_through_the_cell() {
        let shared: SharedMotorChannel<TestChannel> = SharedMotorChannel::new();
        shared.put(channel());

        let mut timer = MockTimer::new();
        shared
            .with(|motor| motor.enable(&mut timer))
            .unwrap()
            .unwrap();
        shared.with(|motor| motor.set_duty(60.0)).unwrap().unwrap();

        assert_eq!(
            shared.with(|motor| motor.pulse_widths()),
            Some((60.0, 0.0))
        );
    }

    #[test]
    fn test_fault_irq_forces_shutdown() {
        let shared: SharedMotorChannel<TestChannel> = SharedMotorChannel::new();
        shared.put(channel());

        let mut timer = MockTimer::new();
        shared
            .with(|motor| motor.enable(&mut timer))
            .unwrap()
            .unwrap();
        shared.with(|motor| motor.set_duty(45.0)).unwrap().unwrap();

        shared.on_fault_irq();

        assert_eq!(shared.with(|motor| motor.state()), Some(MotorState::Faulted));
        assert_eq!(
            shared.with(|motor| motor.pulse_widths()),
            Some((0.0, 0.0))
        );
        assert_eq!(
            shared.with(|motor| motor.set_duty(45.0)),
            Some(Err(MotorError::FaultActive))
        );
    }
}
