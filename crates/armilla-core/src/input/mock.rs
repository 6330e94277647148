use core::cell::Cell;
use core::convert::Infallible;

use super::DigitalInput;

/// No-hardware input pin used during bring-up and by the dispatcher tests.
///
/// The level lives in a shared [`Cell`] so the harness keeps a handle to it
/// after the pin has been handed to the edge detector.
#[derive(Debug, Clone, Copy)]
pub struct MockPin<'a> {
    level: &'a Cell<bool>,
}

impl<'a> MockPin<'a> {
    pub const fn new(level: &'a Cell<bool>) -> Self {
        Self { level }
    }
}

impl DigitalInput for MockPin<'_> {
    type Error = Infallible;

    fn value(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }
}
