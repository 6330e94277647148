//! Battery charge sensing.

use esp_hal::gpio::Input;

/// Charger indicator pin, driven low while the charger is attached.
pub struct ChargeSense {
    pin: Input<'static>,
}

impl ChargeSense {
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }

    pub fn charging(&self) -> bool {
        self.pin.is_low()
    }
}
