//! Vibration motor.

use embedded_hal::delay::DelayNs;
use esp_hal::gpio::Output;

/// Motor enable is active low; a pulse is a fixed-width blocking drive.
pub struct Vibrator {
    pin: Output<'static>,
    pulse_ms: u32,
}

impl Vibrator {
    pub fn new(pin: Output<'static>, pulse_ms: u32) -> Self {
        Self { pin, pulse_ms }
    }

    pub fn pulse<D: DelayNs>(&mut self, delay: &mut D) {
        self.pin.set_low();
        delay.delay_ms(self.pulse_ms);
        self.pin.set_high();
    }
}
