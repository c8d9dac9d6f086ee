//! RP2350 platform implementation
//!
//! This module provides the hardware backend for the Raspberry Pi Pico 2
//! using the `rp235x-hal` crate.
//!
//! A hardware quadrature counter is not part of this backend: the RP2350
//! counts quadrature edges with a PIO decoder program, which is board wiring
//! owned by the application. Any type implementing
//! [`QuadratureCounter`](crate::platform::traits::QuadratureCounter) plugs
//! into [`EncoderChannel`](crate::libraries::encoder_channel::EncoderChannel).

pub mod fault;
pub mod gpio;
pub mod pwm;
pub mod timer;

pub use fault::Rp2350FaultInput;
pub use gpio::Rp2350Output;
pub use pwm::{Rp2350PwmChannel, split_pwm_slice};
pub use timer::Rp2350Timer;
