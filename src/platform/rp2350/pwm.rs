//! RP2350 PWM implementation
//!
//! This module provides drive-channel PWM support for RP2350 using the
//! `rp235x-hal` crate. One hardware slice carries both inputs of an H-bridge
//! (channel A and channel B), so the slice is split behind `Rc<RefCell<..>>`
//! into two independently commanded [`PwmChannel`]s.

extern crate alloc;

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::platform::{
    Result,
    error::{PlatformError, PwmError},
    traits::{PwmChannel, PwmConfig},
};
use embedded_hal::pwm::SetDutyCycle;
use rp235x_hal::pwm::{FreeRunning, Slice, SliceId};

/// RP2350 default system clock
const SYS_CLOCK_HZ: u32 = 150_000_000;

/// Which half of the PWM slice a channel commands
#[derive(Debug, Clone, Copy)]
enum SliceHalf {
    A,
    B,
}

/// RP2350 PWM drive channel
///
/// Wraps one output of an `rp235x-hal` PWM slice to implement the
/// `PwmChannel` trait. The slice itself is shared with the sibling channel.
pub struct Rp2350PwmChannel<S: SliceId> {
    slice: Rc<RefCell<Slice<S, FreeRunning>>>,
    half: SliceHalf,
    pulse_width: f32,
}

/// Configure a free-running slice and split it into its two drive channels
///
/// Sets the carrier frequency from `config` with unit clock divide, enables
/// the slice with both compare values at zero, and returns the `(A, B)`
/// channel pair.
///
/// # Errors
///
/// Returns `PlatformError::Pwm(PwmError::InvalidFrequency)` if the requested
/// frequency cannot be reached from the system clock with a 16-bit wrap.
pub fn split_pwm_slice<S: SliceId>(
    mut slice: Slice<S, FreeRunning>,
    config: PwmConfig,
) -> Result<(Rp2350PwmChannel<S>, Rp2350PwmChannel<S>)> {
    if config.frequency == 0 {
        return Err(PlatformError::Pwm(PwmError::InvalidFrequency));
    }

    // PWM frequency = SYS_CLOCK / (DIV * (TOP + 1)); DIV fixed at 1
    let cycles = SYS_CLOCK_HZ / config.frequency;
    if cycles < 2 || cycles > 65536 {
        return Err(PlatformError::Pwm(PwmError::InvalidFrequency));
    }
    let top = (cycles - 1) as u16;

    slice.set_div_int(1);
    slice.set_top(top);
    let _ = slice.channel_a().set_duty_cycle(0);
    let _ = slice.channel_b().set_duty_cycle(0);
    slice.enable();

    let shared = Rc::new(RefCell::new(slice));
    Ok((
        Rp2350PwmChannel {
            slice: Rc::clone(&shared),
            half: SliceHalf::A,
            pulse_width: 0.0,
        },
        Rp2350PwmChannel {
            slice: shared,
            half: SliceHalf::B,
            pulse_width: 0.0,
        },
    ))
}

impl<S: SliceId> PwmChannel for Rp2350PwmChannel<S> {
    fn set_pulse_width_percent(&mut self, percent: f32) -> Result<()> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(PlatformError::Pwm(PwmError::InvalidPulseWidth));
        }
        self.pulse_width = percent;

        let mut slice = self.slice.borrow_mut();
        let top = slice.get_top();
        let compare = ((percent / 100.0) * top as f32) as u16;
        match self.half {
            SliceHalf::A => {
                let _ = slice.channel_a().set_duty_cycle(compare);
            }
            SliceHalf::B => {
                let _ = slice.channel_b().set_duty_cycle(compare);
            }
        }
        Ok(())
    }

    fn pulse_width_percent(&self) -> f32 {
        self.pulse_width
    }
}
