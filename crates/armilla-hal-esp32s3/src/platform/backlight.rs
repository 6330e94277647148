//! Stepped backlight: three rails give levels 0 (off) through 3.

use esp_hal::gpio::Output;

pub const MAX_LEVEL: u8 = 3;

pub struct SteppedBacklight {
    low: Output<'static>,
    mid: Output<'static>,
    high: Output<'static>,
}

impl SteppedBacklight {
    pub fn new(low: Output<'static>, mid: Output<'static>, high: Output<'static>) -> Self {
        Self { low, mid, high }
    }

    /// Rails are active low; levels above `MAX_LEVEL` are clamped.
    pub fn set(&mut self, level: u8) {
        let level = level.min(MAX_LEVEL);
        drive(&mut self.low, level >= 1);
        drive(&mut self.mid, level >= 2);
        drive(&mut self.high, level >= 3);
    }
}

fn drive(pin: &mut Output<'static>, lit: bool) {
    if lit {
        pin.set_low();
    } else {
        pin.set_high();
    }
}
