use core::convert::Infallible;

use super::Board;
use crate::event::TouchEvent;

/// No-hardware board used during bring-up and by the dispatcher tests.
///
/// Time is scripted: `advance_ms`/`advance_secs` move the underlying clock
/// and `rtc_update` observes the movement, mirroring a real RTC read.
/// Hardware-visible effects are recorded as plain fields the harness can
/// assert on.
#[derive(Debug, Default)]
pub struct MockBoard {
    pub now_ms: u64,
    rtc_ms: u64,

    pub display_on: bool,
    pub display_muted: bool,
    pub poweron_calls: u32,
    pub poweroff_calls: u32,
    pub mute_calls: u32,
    pub unmute_calls: u32,

    pub backlight: u8,
    pub drawable_resets: u32,
    pub vibrator_pulses: u32,
    pub reclaim_passes: u32,

    pub charging: bool,
    pub pending_touch: Option<TouchEvent>,
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_ms(&mut self, ms: u64) {
        self.now_ms += ms;
    }

    pub fn advance_secs(&mut self, secs: u64) {
        self.now_ms += secs * 1_000;
    }

    pub fn push_touch(&mut self, event: TouchEvent) {
        self.pending_touch = Some(event);
    }
}

impl Board for MockBoard {
    type Error = Infallible;

    fn display_poweron(&mut self) -> Result<(), Self::Error> {
        self.display_on = true;
        self.poweron_calls += 1;
        Ok(())
    }

    fn display_poweroff(&mut self) -> Result<(), Self::Error> {
        self.display_on = false;
        self.poweroff_calls += 1;
        Ok(())
    }

    fn display_mute(&mut self, muted: bool) -> Result<(), Self::Error> {
        self.display_muted = muted;
        if muted {
            self.mute_calls += 1;
        } else {
            self.unmute_calls += 1;
        }
        Ok(())
    }

    fn drawable_reset(&mut self) -> Result<(), Self::Error> {
        self.drawable_resets += 1;
        Ok(())
    }

    fn backlight_set(&mut self, level: u8) -> Result<(), Self::Error> {
        self.backlight = level;
        Ok(())
    }

    fn touch_event(&mut self) -> Result<Option<TouchEvent>, Self::Error> {
        Ok(self.pending_touch.take())
    }

    fn rtc_update(&mut self) -> Result<bool, Self::Error> {
        let advanced = self.now_ms != self.rtc_ms;
        self.rtc_ms = self.now_ms;
        Ok(advanced)
    }

    fn uptime(&mut self) -> u64 {
        self.rtc_ms / 1_000
    }

    fn uptime_ms(&mut self) -> u64 {
        self.rtc_ms
    }

    fn battery_charging(&mut self) -> Result<bool, Self::Error> {
        Ok(self.charging)
    }

    fn vibrator_pulse(&mut self) -> Result<(), Self::Error> {
        self.vibrator_pulses += 1;
        Ok(())
    }

    fn reclaim(&mut self) {
        self.reclaim_passes += 1;
    }
}
