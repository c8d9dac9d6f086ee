//! Bench run of one motor/encoder pair on the mock platform
//!
//! Mirrors the controller bring-up on a host: wire the channels, enable the
//! driver, ramp the duty cycle while integrating encoder motion, then inject
//! a fault and recover from it. Build with `--features mock`.

use pico_drive::libraries::encoder_channel::EncoderChannel;
use pico_drive::libraries::motor_channel::MotorChannel;
use pico_drive::platform::mock::{
    MockFaultLine, MockGpio, MockPwm, MockQuadratureCounter, MockTimer,
};
use pico_drive::platform::traits::{CounterConfig, FaultInput, PwmConfig};

fn main() {
    let counter = MockQuadratureCounter::new(CounterConfig::default()).expect("counter binding");
    let mut encoder = EncoderChannel::new(counter).expect("encoder channel");

    let mut motor = MotorChannel::new(
        MockPwm::new(PwmConfig::default()),
        MockPwm::new(PwmConfig::default()),
        MockGpio::new(),
        MockFaultLine::new(),
    )
    .expect("motor channel");

    let mut timer = MockTimer::new();
    motor.enable(&mut timer).expect("enable");
    println!("driver enabled, settle took {} us", timer.now_us());

    // Ramp forward while the simulated shaft spins across the counter wrap.
    for step in 1..=5 {
        let duty = step as f32 * 15.0;
        motor.set_duty(duty).expect("duty");
        encoder.counter_mut().advance(18_000);
        encoder.update();
        println!(
            "duty {:>5.1}%  outputs {:?}  position {:>7} ticks  delta {:>6}",
            duty,
            motor.pulse_widths(),
            encoder.position(),
            encoder.last_delta(),
        );
    }

    // Overcurrent: the driver IC pulls nFAULT low and the edge handler runs.
    motor.fault_line_mut().set_asserted(true);
    motor.on_fault();
    println!(
        "fault! state {:?}, outputs {:?}",
        motor.state(),
        motor.pulse_widths()
    );

    // Operator checks the line, clears the latch, drives on.
    motor.fault_line_mut().set_asserted(false);
    assert!(!motor.fault_line_mut().is_asserted());
    motor.clear_fault(&mut timer).expect("clear fault");
    motor.set_duty(-25.0).expect("duty after clear");
    println!(
        "recovered: state {:?}, outputs {:?}",
        motor.state(),
        motor.pulse_widths()
    );

    motor.disable().expect("disable");
    println!("driver disabled");
}
