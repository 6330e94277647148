//! System manager: top-level event dispatch and power state.
//!
//! The manager routes hardware events to the foreground application, owns
//! navigation between applications, and drives the awake/asleep cycle. It is
//! the only component with mutable cross-cutting state, and all of that
//! state is touched exclusively from within a poll step: single-threaded,
//! cooperative, no reentrancy.

use core::convert::Infallible;

use heapless::Vec;
use log::{debug, info, warn};

use crate::app::{Application, Capabilities, SystemServices};
use crate::event::{EventKind, EventMask, TouchEvent};
use crate::hal::Board;
use crate::input::{DigitalInput, PinHandler};

/// Ring capacity.
pub const MAX_APPS: usize = 8;

/// Inactivity grace period armed at first boot, distinct from the
/// configurable steady-state `blank_after`.
const BOOTSTRAP_GRACE_SECS: u64 = 90;
const DEFAULT_BLANK_AFTER_SECS: u64 = 15;
const DEFAULT_BRIGHTNESS: u8 = 2;

/// Fatal dispatcher errors, tagged by source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SystemError<BoardErr, ButtonErr> {
    Board(BoardErr),
    Button(ButtonErr),
    /// `start()` was reached with an empty application ring.
    NoApplications,
}

/// Non-owning handle to the active application. The ring sequence owns the
/// applications; the launcher lives in its own slot outside the ring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ActiveSlot {
    Ring(usize),
    Launcher,
}

/// Per-application session state, cleared on every switch so the incoming
/// application starts unsubscribed.
#[derive(Debug, Default)]
struct Session {
    event_mask: EventMask,
    tick_period_ms: Option<u64>,
    tick_expiry_ms: Option<u64>,
    pending_switch: Option<usize>,
}

impl Session {
    fn clear(&mut self) {
        self.event_mask = EventMask::empty();
        self.tick_period_ms = None;
        self.tick_expiry_ms = None;
        self.pending_switch = None;
    }
}

/// The system manager.
///
/// A single instance is constructed at boot, mutated once per poll step, and
/// lives until the process exits. `sleep_at` doubles as the power-state
/// discriminant: present means AWAKE, absent means ASLEEP.
pub struct Manager<'a, B: Board, P: DigitalInput> {
    board: B,
    button: PinHandler<P>,
    applications: Vec<&'a mut dyn Application, MAX_APPS>,
    launcher: &'a mut dyn Application,
    current: Option<ActiveSlot>,
    session: Session,
    sleep_at: Option<u64>,
    brightness: u8,
    charging: bool,
    blank_after: u64,
}

impl<'a, B: Board, P: DigitalInput> Manager<'a, B, P> {
    pub fn new(
        board: B,
        button: P,
        launcher: &'a mut dyn Application,
    ) -> Result<Self, SystemError<B::Error, P::Error>> {
        let button = PinHandler::new(button).map_err(SystemError::Button)?;

        Ok(Self {
            board,
            button,
            applications: Vec::new(),
            launcher,
            current: None,
            session: Session::default(),
            sleep_at: None,
            brightness: DEFAULT_BRIGHTNESS,
            charging: true,
            blank_after: DEFAULT_BLANK_AFTER_SECS,
        })
    }

    /// Appends an application to the navigation ring. Ring order is
    /// registration order and stays stable afterwards. Registering the same
    /// application twice corrupts ring navigation; this is a documented
    /// precondition, not enforced here.
    pub fn register(&mut self, app: &'a mut dyn Application) -> bool {
        let name = app.name();
        if self.applications.push(app).is_err() {
            warn!("register: ring full, dropping {}", name);
            return false;
        }
        true
    }

    pub fn is_awake(&self) -> bool {
        self.sleep_at.is_some()
    }

    /// Cached copy of the brightness currently written to the hardware.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, level: u8) -> Result<(), SystemError<B::Error, P::Error>> {
        self.brightness = level;
        self.board.backlight_set(level).map_err(SystemError::Board)
    }

    /// Steady-state inactivity timeout in seconds.
    pub fn set_blank_after(&mut self, secs: u64) {
        self.blank_after = secs;
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    fn slot_capabilities(&self, slot: ActiveSlot) -> Capabilities {
        match slot {
            ActiveSlot::Ring(index) => self.applications[index].capabilities(),
            ActiveSlot::Launcher => self.launcher.capabilities(),
        }
    }

    fn slot_name(&self, slot: ActiveSlot) -> &'static str {
        match slot {
            ActiveSlot::Ring(index) => self.applications[index].name(),
            ActiveSlot::Launcher => self.launcher.name(),
        }
    }

    /// Runs `hook` with the slot's application and a live service handle,
    /// then re-raises any hardware error latched by a service call.
    fn with_app<R>(
        &mut self,
        slot: ActiveSlot,
        hook: impl FnOnce(&mut dyn Application, &mut dyn SystemServices) -> R,
    ) -> Result<R, SystemError<B::Error, P::Error>> {
        let now_ms = self.board.uptime_ms();
        let Manager {
            board,
            applications,
            launcher,
            session,
            brightness,
            ..
        } = self;

        let app: &mut dyn Application = match slot {
            ActiveSlot::Ring(index) => &mut *applications[index],
            ActiveSlot::Launcher => &mut **launcher,
        };
        let mut sys = ServiceCtx {
            board,
            session,
            brightness,
            now_ms,
            deferred_error: None,
        };

        let result = hook(app, &mut sys);
        match sys.deferred_error {
            Some(err) => Err(SystemError::Board(err)),
            None => Ok(result),
        }
    }
}

include!("services.rs");
include!("navigation.rs");
include!("power.rs");
include!("dispatch.rs");
