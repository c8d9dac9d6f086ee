//! RP2350 fault input implementation
//!
//! This module provides the nFAULT edge-interrupt input for RP2350 using the
//! `rp235x-hal` crate. The application routes `IO_IRQ_BANK0` to
//! [`SharedMotorChannel::on_fault_irq`](crate::libraries::motor_channel::SharedMotorChannel::on_fault_irq)
//! and acknowledges the latched edge with
//! [`acknowledge`](Rp2350FaultInput::acknowledge).

use crate::platform::traits::FaultInput;
use embedded_hal::digital::InputPin;
use rp235x_hal::gpio::{FunctionSioInput, Interrupt, Pin, PinId, PullType};

/// RP2350 fault line input
///
/// Wraps an `rp235x-hal` SIO input pin with its falling-edge interrupt to
/// implement the `FaultInput` trait. The line is active-low.
pub struct Rp2350FaultInput<I: PinId, P: PullType> {
    pin: Pin<I, FunctionSioInput, P>,
}

impl<I: PinId, P: PullType> Rp2350FaultInput<I, P> {
    /// Create a new fault input and arm its falling-edge interrupt
    pub fn new(pin: Pin<I, FunctionSioInput, P>) -> Self {
        pin.set_interrupt_enabled(Interrupt::EdgeLow, true);
        Self { pin }
    }

    /// Clear the latched edge; call from the interrupt vector after handling
    pub fn acknowledge(&mut self) {
        self.pin.clear_interrupt(Interrupt::EdgeLow);
    }

    /// Release the underlying pin, disarming the interrupt
    pub fn free(self) -> Pin<I, FunctionSioInput, P> {
        self.pin.set_interrupt_enabled(Interrupt::EdgeLow, false);
        self.pin
    }
}

impl<I: PinId, P: PullType> FaultInput for Rp2350FaultInput<I, P> {
    fn mask(&mut self) {
        self.pin.set_interrupt_enabled(Interrupt::EdgeLow, false);
    }

    fn unmask(&mut self) {
        self.pin.set_interrupt_enabled(Interrupt::EdgeLow, true);
    }

    fn is_asserted(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}
