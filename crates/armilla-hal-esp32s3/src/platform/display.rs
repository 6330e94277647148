//! ST7789-class SPI panel adapter: power, output mute, and surface clear.

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

pub const WIDTH: u16 = 240;
pub const HEIGHT: u16 = 240;

const ROW_BYTES: usize = WIDTH as usize * 2;

const CMD_SLPIN: u8 = 0x10;
const CMD_SLPOUT: u8 = 0x11;
const CMD_INVON: u8 = 0x21;
const CMD_DISPOFF: u8 = 0x28;
const CMD_DISPON: u8 = 0x29;
const CMD_CASET: u8 = 0x2a;
const CMD_RASET: u8 = 0x2b;
const CMD_RAMWR: u8 = 0x2c;
const CMD_MADCTL: u8 = 0x36;
const CMD_COLMOD: u8 = 0x3a;

// 16-bit 65k color, row-major from the top-left corner.
const COLMOD_16BPP: u8 = 0x55;
const MADCTL_DEFAULT: u8 = 0x00;

const RESET_PULSE_US: u32 = 20;
const RESET_SETTLE_MS: u32 = 120;
const SLEEP_SETTLE_MS: u32 = 120;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DisplayError<SpiErr, DcErr, RstErr, CsErr> {
    Spi(SpiErr),
    Dc(DcErr),
    Rst(RstErr),
    Cs(CsErr),
}

pub type St7789Result<SpiErr, DcErr, RstErr, CsErr> =
    Result<(), DisplayError<SpiErr, DcErr, RstErr, CsErr>>;

/// Minimal board-level panel adapter.
///
/// Output mute uses the panel's display-off state: frame memory is kept, so
/// unmuting shows whatever was drawn while muted.
#[derive(Debug)]
pub struct St7789Display<SPI, DC, RST, CS> {
    spi: SPI,
    dc: DC,
    rst: RST,
    cs: CS,
}

impl<SPI, DC, RST, CS> St7789Display<SPI, DC, RST, CS>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    RST: OutputPin,
    CS: OutputPin,
{
    pub fn new(spi: SPI, dc: DC, rst: RST, cs: CS) -> Self {
        Self { spi, dc, rst, cs }
    }

    /// Hardware reset followed by the wake-and-configure sequence, ending
    /// with the panel displaying.
    pub fn power_on<D>(
        &mut self,
        delay: &mut D,
    ) -> St7789Result<SPI::Error, DC::Error, RST::Error, CS::Error>
    where
        D: DelayNs,
    {
        self.rst.set_high().map_err(DisplayError::Rst)?;
        delay.delay_us(RESET_PULSE_US);
        self.rst.set_low().map_err(DisplayError::Rst)?;
        delay.delay_us(RESET_PULSE_US);
        self.rst.set_high().map_err(DisplayError::Rst)?;
        delay.delay_ms(RESET_SETTLE_MS);

        self.write_command(CMD_SLPOUT, &[])?;
        delay.delay_ms(SLEEP_SETTLE_MS);
        self.write_command(CMD_COLMOD, &[COLMOD_16BPP])?;
        self.write_command(CMD_MADCTL, &[MADCTL_DEFAULT])?;
        // The panel ships inverted; INVON gives true colors.
        self.write_command(CMD_INVON, &[])?;
        self.write_command(CMD_DISPON, &[])
    }

    /// Blanks the panel and puts it in sleep mode.
    pub fn power_off(&mut self) -> St7789Result<SPI::Error, DC::Error, RST::Error, CS::Error> {
        self.write_command(CMD_DISPOFF, &[])?;
        self.write_command(CMD_SLPIN, &[])
    }

    pub fn set_muted(
        &mut self,
        muted: bool,
    ) -> St7789Result<SPI::Error, DC::Error, RST::Error, CS::Error> {
        self.write_command(if muted { CMD_DISPOFF } else { CMD_DISPON }, &[])
    }

    /// Fills the whole frame memory with black.
    pub fn clear(&mut self) -> St7789Result<SPI::Error, DC::Error, RST::Error, CS::Error> {
        let last_col = (WIDTH - 1).to_be_bytes();
        let last_row = (HEIGHT - 1).to_be_bytes();
        self.write_command(CMD_CASET, &[0, 0, last_col[0], last_col[1]])?;
        self.write_command(CMD_RASET, &[0, 0, last_row[0], last_row[1]])?;

        self.cs.set_low().map_err(DisplayError::Cs)?;
        self.dc.set_low().map_err(DisplayError::Dc)?;
        self.spi.write(&[CMD_RAMWR]).map_err(DisplayError::Spi)?;
        self.dc.set_high().map_err(DisplayError::Dc)?;

        let row = [0u8; ROW_BYTES];
        for _ in 0..HEIGHT {
            self.spi.write(&row).map_err(DisplayError::Spi)?;
        }

        self.spi.flush().map_err(DisplayError::Spi)?;
        self.cs.set_high().map_err(DisplayError::Cs)?;
        Ok(())
    }

    fn write_command(
        &mut self,
        command: u8,
        args: &[u8],
    ) -> St7789Result<SPI::Error, DC::Error, RST::Error, CS::Error> {
        self.cs.set_low().map_err(DisplayError::Cs)?;
        self.dc.set_low().map_err(DisplayError::Dc)?;
        self.spi.write(&[command]).map_err(DisplayError::Spi)?;
        if !args.is_empty() {
            self.dc.set_high().map_err(DisplayError::Dc)?;
            self.spi.write(args).map_err(DisplayError::Spi)?;
        }
        self.spi.flush().map_err(DisplayError::Spi)?;
        self.cs.set_high().map_err(DisplayError::Cs)?;
        Ok(())
    }
}
