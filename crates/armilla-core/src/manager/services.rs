/// Service surface handed to application hooks.
///
/// Borrows disjoint manager fields so the active application stays uniquely
/// borrowed alongside it. Hardware errors raised by a service call are
/// latched in `deferred_error` and re-raised once the hook returns.
struct ServiceCtx<'m, B: Board> {
    board: &'m mut B,
    session: &'m mut Session,
    brightness: &'m mut u8,
    now_ms: u64,
    deferred_error: Option<B::Error>,
}

impl<B: Board> SystemServices for ServiceCtx<'_, B> {
    fn request_event(&mut self, mask: EventMask) {
        self.session.event_mask |= mask;
    }

    fn request_tick(&mut self, period_ms: u64) {
        if period_ms == 0 {
            self.session.tick_period_ms = None;
            self.session.tick_expiry_ms = None;
            return;
        }

        self.session.tick_period_ms = Some(period_ms);
        self.session.tick_expiry_ms = Some(self.now_ms + period_ms);
    }

    fn request_switch(&mut self, ring_index: usize) {
        self.session.pending_switch = Some(ring_index);
    }

    fn brightness(&self) -> u8 {
        *self.brightness
    }

    fn set_brightness(&mut self, level: u8) {
        *self.brightness = level;
        if let Err(err) = self.board.backlight_set(level)
            && self.deferred_error.is_none()
        {
            self.deferred_error = Some(err);
        }
    }

    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}
