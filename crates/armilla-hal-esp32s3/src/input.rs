//! Board button input.

use armilla_core::input::DigitalInput;
use embedded_hal::digital::InputPin;

/// Adapter from an `embedded-hal` input pin to the core's button contract;
/// reports true while the button is pressed.
pub struct ButtonPin<P: InputPin> {
    pin: P,
    active_low: bool,
}

impl<P: InputPin> ButtonPin<P> {
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }
}

impl<P: InputPin> DigitalInput for ButtonPin<P> {
    type Error = P::Error;

    fn value(&mut self) -> Result<bool, Self::Error> {
        let level = self.pin.is_high()?;
        Ok(level != self.active_low)
    }
}
