//! The application capability interface and the services exposed to it.

use bitflags::bitflags;

use crate::event::{EventKind, EventMask, TouchEvent};

bitflags! {
    /// Optional behaviors an application implements.
    ///
    /// The manager consults this table before every optional call instead of
    /// probing at runtime; an absent capability is a legal, detectable state,
    /// not an error.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Capabilities: u8 {
        const BACKGROUND = 0x01;
        const TICK = 0x02;
        const PRESS = 0x04;
        const SWIPE = 0x08;
        const TOUCH = 0x10;
        const SLEEP = 0x20;
        const WAKE = 0x40;
    }
}

/// Services the manager exposes to the foregrounded application.
///
/// A live handle is passed into every application hook; requests take effect
/// immediately except for `request_switch`, which is deferred until the hook
/// returns so a switch raised mid-dispatch never reenters the manager.
pub trait SystemServices {
    /// ORs the given categories into the active subscription mask.
    fn request_event(&mut self, mask: EventMask);

    /// Arms (or re-arms) the periodic tick. One subscription per foregrounded
    /// application; a zero period cancels it. Sub-second accuracy is not
    /// guaranteed.
    fn request_tick(&mut self, period_ms: u64);

    /// Requests a switch to the given ring entry once the current hook
    /// returns. Out-of-range indices are dropped by the manager.
    fn request_switch(&mut self, ring_index: usize);

    /// Cached copy of the brightness currently written to the hardware.
    fn brightness(&self) -> u8;
    /// Updates the cache and writes through to the backlight.
    fn set_brightness(&mut self, level: u8);

    /// Uptime milliseconds as sampled for the current poll step.
    fn now_ms(&self) -> u64;
}

/// Contract every registered application satisfies, consumed polymorphically
/// by the manager.
///
/// Only `foreground` is required. Every other hook is gated on the matching
/// [`Capabilities`] bit; the default bodies exist so applications implement
/// exactly what they declare.
pub trait Application {
    fn name(&self) -> &'static str;

    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }

    /// The application now owns the display and receives input. It starts
    /// with a blank subscription slate on every invocation.
    fn foreground(&mut self, sys: &mut dyn SystemServices);

    fn background(&mut self, _sys: &mut dyn SystemServices) {}

    /// Periodic notification; `ticks` counts the whole periods elapsed since
    /// the previous delivery (catch-up, not one call per period).
    fn tick(&mut self, _sys: &mut dyn SystemServices, _ticks: u32) {}

    /// Button event. Returning `false` consumes the event and suppresses the
    /// default Home navigation.
    fn press(&mut self, _sys: &mut dyn SystemServices, _kind: EventKind, _pressed: bool) -> bool {
        true
    }

    /// Swipe event. Returning `true` lets ring navigation proceed.
    fn swipe(&mut self, _sys: &mut dyn SystemServices, _event: TouchEvent) -> bool {
        true
    }

    /// Raw touch event; no navigation side effect.
    fn touch(&mut self, _sys: &mut dyn SystemServices, _event: TouchEvent) {}

    /// Prepare for the display powering off. Returning `false` asks the
    /// manager to foreground the default application instead.
    fn sleep(&mut self) -> bool {
        true
    }

    fn wake(&mut self) {}
}
