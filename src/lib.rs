#![cfg_attr(not(test), no_std)]

//! pico_drive - Motor and encoder control layer for small robot controllers
//!
//! This library drives dual H-bridge motor drivers (DRV8847-class) over PWM
//! with sleep/fault protection, and tracks quadrature encoder position from
//! hardware counter-timers with wraparound correction. Hardware is consumed
//! through injected capability traits, so every driver runs unchanged
//! against the mock platform on a host.

// Platform abstraction layer (pins, PWM, counter-timers; mock doubles)
pub mod platform;

// Drive-layer drivers using the platform abstraction
pub mod libraries;

// Logging macros (defmt on target, println in host tests)
pub mod logging;
