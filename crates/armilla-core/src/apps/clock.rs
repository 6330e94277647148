//! Default watch face.

use log::debug;

use crate::app::{Application, Capabilities, SystemServices};

/// The ring-index-0 application: counts wall time at one tick per second.
///
/// The manager's sleep fallback relies on the default application always
/// sleeping in place, so `sleep` never declines.
pub struct ClockApp {
    seconds: u64,
    asleep: bool,
}

impl ClockApp {
    pub const fn new() -> Self {
        Self {
            seconds: 0,
            asleep: false,
        }
    }

    /// Seconds accumulated from delivered ticks.
    pub fn elapsed(&self) -> u64 {
        self.seconds
    }
}

impl Default for ClockApp {
    fn default() -> Self {
        Self::new()
    }
}

impl Application for ClockApp {
    fn name(&self) -> &'static str {
        "clock"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::TICK | Capabilities::SLEEP | Capabilities::WAKE
    }

    fn foreground(&mut self, sys: &mut dyn SystemServices) {
        sys.request_tick(1_000);
    }

    fn tick(&mut self, _sys: &mut dyn SystemServices, ticks: u32) {
        self.seconds += u64::from(ticks);
    }

    fn sleep(&mut self) -> bool {
        self.asleep = true;
        true
    }

    fn wake(&mut self) {
        self.asleep = false;
        debug!("clock: wake at {}s", self.seconds);
    }
}
