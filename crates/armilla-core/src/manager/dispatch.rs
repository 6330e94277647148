impl<'a, B: Board, P: DigitalInput> Manager<'a, B, P> {
    /// One dispatcher iteration, called repeatedly by the outer run loop.
    ///
    /// While awake: tick delivery precedes button processing, which precedes
    /// touch processing; deferred switches drain before the inactivity check.
    /// While asleep: only the clock, the button edge and the charger state
    /// are observed.
    pub fn poll(&mut self) -> Result<(), SystemError<B::Error, P::Error>> {
        if self.sleep_at.is_some() {
            let advanced = self.board.rtc_update().map_err(SystemError::Board)?;
            if advanced {
                self.deliver_ticks()?;
            }

            if let Some(state) = self.button.get_event().map_err(SystemError::Button)? {
                self.handle_button(state)?;
            }

            if let Some(event) = self.board.touch_event().map_err(SystemError::Board)? {
                self.handle_touch(event)?;
            }

            self.drain_pending_switch()?;

            if let Some(sleep_at) = self.sleep_at
                && self.board.uptime() > sleep_at
            {
                self.sleep()?;
            }

            self.board.reclaim();
        } else {
            self.board.rtc_update().map_err(SystemError::Board)?;

            let charging = self
                .board
                .battery_charging()
                .map_err(SystemError::Board)?;
            let pressed = matches!(
                self.button.get_event().map_err(SystemError::Button)?,
                Some(true)
            );
            if pressed || charging != self.charging {
                self.wake()?;
            }
        }

        Ok(())
    }

    /// Delivers the periodic tick if one is armed and expired, collapsing
    /// all elapsed periods into a single call.
    fn deliver_ticks(&mut self) -> Result<(), SystemError<B::Error, P::Error>> {
        let (Some(period), Some(expiry)) =
            (self.session.tick_period_ms, self.session.tick_expiry_ms)
        else {
            return Ok(());
        };

        let now = self.board.uptime_ms();
        if expiry > now {
            return Ok(());
        }
        let Some(slot) = self.current else {
            return Ok(());
        };

        let mut ticks = 0u32;
        let mut next = expiry;
        while next <= now {
            next += period;
            ticks += 1;
        }
        self.session.tick_expiry_ms = Some(next);

        if self.slot_capabilities(slot).contains(Capabilities::TICK) {
            self.with_app(slot, |app, sys| app.tick(sys, ticks))?;
        }

        Ok(())
    }

    /// Processes a button press (or release) edge.
    fn handle_button(&mut self, pressed: bool) -> Result<(), SystemError<B::Error, P::Error>> {
        self.keep_awake();

        if self.session.event_mask.contains(EventMask::BUTTON)
            && let Some(slot) = self.current
            && self.slot_capabilities(slot).contains(Capabilities::PRESS)
        {
            // Only one button; it always reports as Home.
            let proceed =
                self.with_app(slot, |app, sys| app.press(sys, EventKind::Home, pressed))?;
            if !proceed {
                return Ok(());
            }
        }

        if pressed {
            self.navigate(EventKind::Home)?;
        }

        Ok(())
    }

    /// Processes a touch-panel event.
    fn handle_touch(&mut self, event: TouchEvent) -> Result<(), SystemError<B::Error, P::Error>> {
        self.keep_awake();

        if event.kind.is_directional() {
            let wanted = if event.kind.is_vertical() {
                EventMask::SWIPE_UPDOWN
            } else {
                EventMask::SWIPE_LEFTRIGHT
            };

            if self.session.event_mask.contains(wanted)
                && let Some(slot) = self.current
                && self.slot_capabilities(slot).contains(Capabilities::SWIPE)
            {
                if self.with_app(slot, |app, sys| app.swipe(sys, event))? {
                    self.navigate(event.kind)?;
                }
            } else {
                self.navigate(event.kind)?;
            }
        } else if event.kind == EventKind::Touch
            && self.session.event_mask.contains(EventMask::TOUCH)
            && let Some(slot) = self.current
            && self.slot_capabilities(slot).contains(Capabilities::TOUCH)
        {
            self.with_app(slot, |app, sys| app.touch(sys, event))?;
        }

        Ok(())
    }

    /// Ensures an application is active and announces the run state.
    pub fn start(&mut self) -> Result<(), SystemError<B::Error, P::Error>> {
        if self.current.is_none() {
            if self.applications.is_empty() {
                return Err(SystemError::NoApplications);
            }
            self.switch_slot(ActiveSlot::Ring(0))?;
        }

        info!("Watch is running, use Ctrl-C to stop");
        Ok(())
    }

    /// Runs the dispatcher synchronously, invoking `idle` as the low-power
    /// wait between iterations. Never returns except with a fatal error;
    /// the caller owns surfacing it.
    pub fn run(
        &mut self,
        mut idle: impl FnMut(),
    ) -> Result<Infallible, SystemError<B::Error, P::Error>> {
        self.start()?;

        loop {
            self.poll()?;
            idle();
        }
    }
}
