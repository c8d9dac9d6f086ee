//! Fault input trait
//!
//! This module defines the interrupt-capable input interface for the motor
//! driver's nFAULT line. The line is active-low: the driver IC pulls it down
//! on overcurrent, overtemperature or undervoltage.
//!
//! Edge-callback registration is platform wiring, not part of this trait:
//! the application routes the falling-edge interrupt vector to
//! [`SharedMotorChannel::on_fault_irq`](crate::libraries::motor_channel::SharedMotorChannel::on_fault_irq),
//! which runs the channel's plain synchronous fault handler.

/// Interrupt-capable fault input line
pub trait FaultInput {
    /// Suppress fault edge interrupts
    ///
    /// Used around the enable power-up transient, which can glitch the
    /// nFAULT line without a real fault condition.
    fn mask(&mut self);

    /// Re-enable fault edge interrupts
    fn unmask(&mut self);

    /// Whether the fault line is currently asserted (low)
    ///
    /// Level read, independent of interrupt masking. Operators check this
    /// before clearing a latched fault.
    fn is_asserted(&mut self) -> bool;
}
