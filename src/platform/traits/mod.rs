//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod counter;
pub mod fault;
pub mod gpio;
pub mod pwm;
pub mod timer;

// Re-export trait interfaces
pub use counter::{CounterConfig, QuadratureCounter};
pub use fault::FaultInput;
pub use gpio::GpioOutput;
pub use pwm::{PwmChannel, PwmConfig};
pub use timer::TimerInterface;
