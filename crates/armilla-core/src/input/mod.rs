//! Button input: polled level sampling with edge reporting.

pub mod mock;

/// A raw digital input the edge detector samples.
pub trait DigitalInput {
    type Error;

    fn value(&mut self) -> Result<bool, Self::Error>;
}

/// Pin event generator.
///
/// Reports the new level exactly once per observed transition. Strictly
/// polled, no interrupt handling, and no debounce: a bouncing contact is
/// reported as the transitions it produces.
pub struct PinHandler<P: DigitalInput> {
    pin: P,
    value: bool,
}

impl<P: DigitalInput> PinHandler<P> {
    /// Samples the initial level so the first poll only reports a change.
    pub fn new(mut pin: P) -> Result<Self, P::Error> {
        let value = pin.value()?;
        Ok(Self { pin, value })
    }

    /// The new level if the pin changed since the last poll, `None` if it
    /// is unchanged.
    pub fn get_event(&mut self) -> Result<Option<bool>, P::Error> {
        let new_value = self.pin.value()?;
        if new_value == self.value {
            return Ok(None);
        }

        self.value = new_value;
        Ok(Some(new_value))
    }
}
