//! Torch: drives the backlight to maximum while foregrounded.

use crate::app::{Application, Capabilities, SystemServices};
use crate::event::{EventMask, TouchEvent};

const FULL_BRIGHTNESS: u8 = 3;

pub struct FlashlightApp {
    saved_brightness: u8,
    lit: bool,
}

impl FlashlightApp {
    pub const fn new() -> Self {
        Self {
            saved_brightness: 0,
            lit: true,
        }
    }
}

impl Default for FlashlightApp {
    fn default() -> Self {
        Self::new()
    }
}

impl Application for FlashlightApp {
    fn name(&self) -> &'static str {
        "flashlight"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::BACKGROUND | Capabilities::TOUCH
    }

    fn foreground(&mut self, sys: &mut dyn SystemServices) {
        self.saved_brightness = sys.brightness();
        self.lit = true;
        sys.set_brightness(FULL_BRIGHTNESS);
        sys.request_event(EventMask::TOUCH);
    }

    fn background(&mut self, sys: &mut dyn SystemServices) {
        sys.set_brightness(self.saved_brightness);
    }

    fn touch(&mut self, sys: &mut dyn SystemServices, _event: TouchEvent) {
        // Tap toggles the torch.
        self.lit = !self.lit;
        sys.set_brightness(if self.lit {
            FULL_BRIGHTNESS
        } else {
            self.saved_brightness
        });
    }
}
