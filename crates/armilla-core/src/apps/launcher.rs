//! Application launcher: grid selection of ring entries.

use log::debug;

use crate::app::{Application, Capabilities, SystemServices};
use crate::event::{EventKind, EventMask, TouchEvent};

const SCREEN_WIDTH: u16 = 240;
const SCREEN_HEIGHT: u16 = 240;
const GRID_COLUMNS: u16 = 2;
const GRID_ROWS: u16 = 3;

/// Summoned by swipe-up from any ring application; never a ring member
/// itself.
///
/// A tap on a grid cell requests a switch to the matching ring entry; the
/// manager validates the index and applies the switch after the touch hook
/// returns.
pub struct LauncherApp;

impl LauncherApp {
    pub const fn new() -> Self {
        Self
    }

    fn cell_at(x: u16, y: u16) -> usize {
        let column = x.min(SCREEN_WIDTH - 1) / (SCREEN_WIDTH / GRID_COLUMNS);
        let row = y.min(SCREEN_HEIGHT - 1) / (SCREEN_HEIGHT / GRID_ROWS);
        usize::from(row * GRID_COLUMNS + column)
    }
}

impl Default for LauncherApp {
    fn default() -> Self {
        Self::new()
    }
}

impl Application for LauncherApp {
    fn name(&self) -> &'static str {
        "launcher"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::TOUCH | Capabilities::SWIPE
    }

    fn foreground(&mut self, sys: &mut dyn SystemServices) {
        sys.request_event(EventMask::TOUCH | EventMask::SWIPE_UPDOWN);
    }

    fn swipe(&mut self, _sys: &mut dyn SystemServices, event: TouchEvent) -> bool {
        // Swipe down leaves the launcher; everything else stays put.
        event.kind == EventKind::Down
    }

    fn touch(&mut self, sys: &mut dyn SystemServices, event: TouchEvent) {
        let index = Self::cell_at(event.x, event.y);
        debug!("launcher: cell {} tapped", index);
        sys.request_switch(index);
    }
}
