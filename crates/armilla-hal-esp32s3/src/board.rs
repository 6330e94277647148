//! Watch board aggregate implementing the core's hardware contract.

use core::convert::Infallible;

use embedded_hal::{i2c::I2c, spi::SpiBus};
use esp_hal::delay::Delay;
use esp_hal::gpio::Output;

use armilla_core::event::TouchEvent;
use armilla_core::hal::Board;

use crate::platform::backlight::SteppedBacklight;
use crate::platform::battery::ChargeSense;
use crate::platform::clock::UptimeClock;
use crate::platform::display::{DisplayError, St7789Display};
use crate::platform::touch::Cst816Touch;
use crate::platform::vibrator::Vibrator;

/// Display pins are plain push-pull outputs, so only the buses can fail.
pub type PanelError<SpiErr> = DisplayError<SpiErr, Infallible, Infallible, Infallible>;

#[derive(Debug)]
pub enum BoardError<SpiErr, I2cErr> {
    Display(PanelError<SpiErr>),
    Touch(I2cErr),
}

/// One physical watch board: panel, backlight rails, touch controller,
/// charge sense, motor, and the uptime clock.
pub struct WatchBoard<SPI, I2C>
where
    SPI: SpiBus<u8>,
    I2C: I2c,
{
    display: St7789Display<SPI, Output<'static>, Output<'static>, Output<'static>>,
    backlight: SteppedBacklight,
    touch: Cst816Touch<I2C>,
    clock: UptimeClock,
    battery: ChargeSense,
    vibrator: Vibrator,
    delay: Delay,
}

impl<SPI, I2C> WatchBoard<SPI, I2C>
where
    SPI: SpiBus<u8>,
    I2C: I2c,
{
    pub fn new(
        display: St7789Display<SPI, Output<'static>, Output<'static>, Output<'static>>,
        backlight: SteppedBacklight,
        touch: Cst816Touch<I2C>,
        battery: ChargeSense,
        vibrator: Vibrator,
    ) -> Self {
        Self {
            display,
            backlight,
            touch,
            clock: UptimeClock::new(),
            battery,
            vibrator,
            delay: Delay::new(),
        }
    }
}

impl<SPI, I2C> Board for WatchBoard<SPI, I2C>
where
    SPI: SpiBus<u8>,
    I2C: I2c,
{
    type Error = BoardError<SPI::Error, I2C::Error>;

    fn display_poweron(&mut self) -> Result<(), Self::Error> {
        self.display
            .power_on(&mut self.delay)
            .map_err(BoardError::Display)
    }

    fn display_poweroff(&mut self) -> Result<(), Self::Error> {
        self.display.power_off().map_err(BoardError::Display)
    }

    fn display_mute(&mut self, muted: bool) -> Result<(), Self::Error> {
        self.display.set_muted(muted).map_err(BoardError::Display)
    }

    fn drawable_reset(&mut self) -> Result<(), Self::Error> {
        self.display.clear().map_err(BoardError::Display)
    }

    fn backlight_set(&mut self, level: u8) -> Result<(), Self::Error> {
        self.backlight.set(level);
        Ok(())
    }

    fn touch_event(&mut self) -> Result<Option<TouchEvent>, Self::Error> {
        self.touch.get_event().map_err(BoardError::Touch)
    }

    fn rtc_update(&mut self) -> Result<bool, Self::Error> {
        Ok(self.clock.update())
    }

    fn uptime(&mut self) -> u64 {
        self.clock.uptime_secs()
    }

    fn uptime_ms(&mut self) -> u64 {
        self.clock.uptime_ms()
    }

    fn battery_charging(&mut self) -> Result<bool, Self::Error> {
        Ok(self.battery.charging())
    }

    fn vibrator_pulse(&mut self) -> Result<(), Self::Error> {
        self.vibrator.pulse(&mut self.delay);
        Ok(())
    }
}
