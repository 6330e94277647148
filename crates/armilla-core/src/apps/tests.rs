use super::*;
use crate::app::{Application, SystemServices};
use crate::event::{EventKind, EventMask, TouchEvent};

#[derive(Default)]
struct StubServices {
    event_mask: EventMask,
    tick_period: Option<u64>,
    switch_request: Option<usize>,
    brightness: u8,
}

impl SystemServices for StubServices {
    fn request_event(&mut self, mask: EventMask) {
        self.event_mask |= mask;
    }

    fn request_tick(&mut self, period_ms: u64) {
        self.tick_period = (period_ms > 0).then_some(period_ms);
    }

    fn request_switch(&mut self, ring_index: usize) {
        self.switch_request = Some(ring_index);
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn now_ms(&self) -> u64 {
        0
    }
}

fn tap(x: u16, y: u16) -> TouchEvent {
    TouchEvent {
        kind: EventKind::Touch,
        x,
        y,
    }
}

#[test]
fn clock_requests_a_one_second_tick() {
    let mut sys = StubServices::default();
    let mut clock = ClockApp::new();

    clock.foreground(&mut sys);

    assert_eq!(sys.tick_period, Some(1_000));
    assert!(sys.event_mask.is_empty());
}

#[test]
fn clock_accumulates_catch_up_ticks() {
    let mut sys = StubServices::default();
    let mut clock = ClockApp::new();

    clock.foreground(&mut sys);
    clock.tick(&mut sys, 1);
    clock.tick(&mut sys, 3);

    assert_eq!(clock.elapsed(), 4);
}

#[test]
fn flashlight_saves_and_restores_brightness() {
    let mut sys = StubServices {
        brightness: 2,
        ..StubServices::default()
    };
    let mut torch = FlashlightApp::new();

    torch.foreground(&mut sys);
    assert_eq!(sys.brightness, 3);

    torch.background(&mut sys);
    assert_eq!(sys.brightness, 2);
}

#[test]
fn flashlight_tap_toggles_the_torch() {
    let mut sys = StubServices {
        brightness: 1,
        ..StubServices::default()
    };
    let mut torch = FlashlightApp::new();

    torch.foreground(&mut sys);
    torch.touch(&mut sys, tap(100, 100));
    assert_eq!(sys.brightness, 1);

    torch.touch(&mut sys, tap(100, 100));
    assert_eq!(sys.brightness, 3);
}

#[test]
fn launcher_grid_maps_the_corners() {
    let mut sys = StubServices::default();
    let mut launcher = LauncherApp::new();

    launcher.touch(&mut sys, tap(0, 0));
    assert_eq!(sys.switch_request, Some(0));

    launcher.touch(&mut sys, tap(239, 0));
    assert_eq!(sys.switch_request, Some(1));

    launcher.touch(&mut sys, tap(0, 239));
    assert_eq!(sys.switch_request, Some(4));

    launcher.touch(&mut sys, tap(239, 239));
    assert_eq!(sys.switch_request, Some(5));
}

#[test]
fn launcher_only_leaves_on_a_downward_swipe() {
    let mut sys = StubServices::default();
    let mut launcher = LauncherApp::new();

    let down = TouchEvent {
        kind: EventKind::Down,
        x: 120,
        y: 200,
    };
    let up = TouchEvent {
        kind: EventKind::Up,
        x: 120,
        y: 40,
    };

    assert!(launcher.swipe(&mut sys, down));
    assert!(!launcher.swipe(&mut sys, up));
}
