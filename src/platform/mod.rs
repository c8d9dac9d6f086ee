//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the pin, PWM and
//! counter-timer capabilities the drive layer consumes. All platform-specific
//! code is isolated to this module; drivers only see the traits.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "pico2_w")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{FaultInput, GpioOutput, PwmChannel, QuadratureCounter, TimerInterface};
