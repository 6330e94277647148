//! Interface event vocabulary: pure data, no behavior.

use bitflags::bitflags;

/// Enumerated interface actions.
///
/// Directional kinds double as navigation directions and touch-event
/// discriminants. `Home` is button-originated and sits in a distinct
/// numeric range so it can never collide with a touch-decoded value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u16)]
pub enum EventKind {
    Down = 1,
    Up = 2,
    Left = 3,
    Right = 4,
    Touch = 5,

    Home = 256,
}

impl EventKind {
    /// True for the four swipe directions.
    pub const fn is_directional(self) -> bool {
        matches!(self, Self::Down | Self::Up | Self::Left | Self::Right)
    }

    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

bitflags! {
    /// Event categories an application can subscribe to while foregrounded.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct EventMask: u16 {
        const TOUCH = 0x0001;
        const SWIPE_LEFTRIGHT = 0x0002;
        const SWIPE_UPDOWN = 0x0004;
        const BUTTON = 0x0008;
    }
}

/// One decoded touch-panel event: a gesture or a raw touch point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TouchEvent {
    pub kind: EventKind,
    pub x: u16,
    pub y: u16,
}
