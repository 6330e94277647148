impl<'a, B: Board, P: DigitalInput> Manager<'a, B, P> {
    /// Switches to the requested application slot.
    ///
    /// On return the slot's application is current and has received exactly
    /// one `foreground()` call with a clean subscription slate. The display
    /// stays muted across the transition so a half-drawn frame is never
    /// visible. The very first switch also performs device power-on
    /// sequencing and arms the bootstrap inactivity timer.
    fn switch_slot(&mut self, target: ActiveSlot) -> Result<(), SystemError<B::Error, P::Error>> {
        match self.current {
            Some(slot) => {
                if self.slot_capabilities(slot).contains(Capabilities::BACKGROUND) {
                    self.with_app(slot, |app, sys| app.background(sys))?;
                }
            }
            None => {
                // System start up.
                self.board.display_poweron().map_err(SystemError::Board)?;
                self.board.display_mute(true).map_err(SystemError::Board)?;
                self.board
                    .backlight_set(self.brightness)
                    .map_err(SystemError::Board)?;
                self.sleep_at = Some(self.board.uptime() + BOOTSTRAP_GRACE_SECS);
            }
        }

        // The incoming application starts with a blank subscription slate.
        self.session.clear();
        self.current = Some(target);
        debug!("switch: app={}", self.slot_name(target));

        self.board.display_mute(true).map_err(SystemError::Board)?;
        self.board.drawable_reset().map_err(SystemError::Board)?;
        self.with_app(target, |app, sys| app.foreground(sys))?;
        self.board.display_mute(false).map_err(SystemError::Board)?;

        Ok(())
    }

    /// Navigates to a new application.
    ///
    /// Left/right walk the quick ring, so ring applications must not
    /// subscribe to `SWIPE_LEFTRIGHT`. Swipe up always summons the launcher,
    /// so the default application must not subscribe to `SWIPE_UPDOWN`
    /// either; both are usage contracts on applications, not enforced here.
    pub fn navigate(
        &mut self,
        direction: EventKind,
    ) -> Result<(), SystemError<B::Error, P::Error>> {
        let ring_len = self.applications.len();
        if ring_len == 0 {
            debug!("navigate: empty ring");
            return Ok(());
        }

        let ring_pos = match self.current {
            Some(ActiveSlot::Ring(index)) => Some(index),
            _ => None,
        };

        match direction {
            EventKind::Left => {
                let index = match ring_pos {
                    Some(index) if index + 1 < ring_len => index + 1,
                    Some(_) => 0,
                    None => 0,
                };
                self.switch_slot(ActiveSlot::Ring(index))
            }
            EventKind::Right => {
                let index = match ring_pos {
                    Some(index) if index > 0 => index - 1,
                    Some(_) => ring_len - 1,
                    None => 0,
                };
                self.switch_slot(ActiveSlot::Ring(index))
            }
            EventKind::Up => self.switch_slot(ActiveSlot::Launcher),
            EventKind::Down => {
                if ring_pos == Some(0) {
                    // Already home: acknowledge with a pulse instead.
                    self.board.vibrator_pulse().map_err(SystemError::Board)
                } else {
                    self.switch_slot(ActiveSlot::Ring(0))
                }
            }
            EventKind::Home => {
                if ring_pos == Some(0) {
                    self.sleep()
                } else {
                    self.switch_slot(ActiveSlot::Ring(0))
                }
            }
            EventKind::Touch => Ok(()),
        }
    }

    /// Applies an application-raised switch request, if one is pending.
    /// Out-of-range indices are dropped with a warning.
    fn drain_pending_switch(&mut self) -> Result<(), SystemError<B::Error, P::Error>> {
        let Some(index) = self.session.pending_switch.take() else {
            return Ok(());
        };

        if index < self.applications.len() {
            self.switch_slot(ActiveSlot::Ring(index))
        } else {
            warn!("switch request dropped: no ring entry {}", index);
            Ok(())
        }
    }
}
