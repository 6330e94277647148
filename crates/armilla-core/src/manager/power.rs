impl<'a, B: Board, P: DigitalInput> Manager<'a, B, P> {
    /// Resets the keep-awake timer.
    fn keep_awake(&mut self) {
        self.sleep_at = Some(self.board.uptime() + self.blank_after);
    }

    /// Enters the asleep state.
    ///
    /// If the current application cannot sleep in place (the `SLEEP`
    /// capability is absent, or its hook declines) the default application is
    /// foregrounded and put to sleep instead; it must always accept.
    pub fn sleep(&mut self) -> Result<(), SystemError<B::Error, P::Error>> {
        self.board.backlight_set(0).map_err(SystemError::Board)?;

        let Some(slot) = self.current else {
            debug!("sleep: no active application");
            return Ok(());
        };

        let slept = self.slot_capabilities(slot).contains(Capabilities::SLEEP)
            && self.with_app(slot, |app, _sys| app.sleep())?;
        if !slept {
            self.switch_slot(ActiveSlot::Ring(0))?;
            self.with_app(ActiveSlot::Ring(0), |app, _sys| {
                app.sleep();
            })?;
        }

        self.board.display_poweroff().map_err(SystemError::Board)?;
        self.charging = self
            .board
            .battery_charging()
            .map_err(SystemError::Board)?;
        self.sleep_at = None;
        debug!("sleep: display off");

        Ok(())
    }

    /// Returns to a running state.
    pub fn wake(&mut self) -> Result<(), SystemError<B::Error, P::Error>> {
        self.board.display_poweron().map_err(SystemError::Board)?;

        if let Some(slot) = self.current
            && self.slot_capabilities(slot).contains(Capabilities::WAKE)
        {
            self.with_app(slot, |app, _sys| app.wake())?;
        }

        self.board
            .backlight_set(self.brightness)
            .map_err(SystemError::Board)?;

        // Discard any touch event that arrived while asleep.
        let _ = self.board.touch_event().map_err(SystemError::Board)?;

        self.keep_awake();
        debug!("wake: display on");

        Ok(())
    }
}
