//! CST816-class I²C touch controller, polled.

use embedded_hal::i2c::I2c;
use log::debug;

use armilla_core::event::{EventKind, TouchEvent};

pub const TOUCH_I2C_ADDR: u8 = 0x15;

const REG_GESTURE: u8 = 0x01;
const FRAME_BYTES: usize = 6;

const GESTURE_NONE: u8 = 0x00;
const GESTURE_SLIDE_DOWN: u8 = 0x01;
const GESTURE_SLIDE_UP: u8 = 0x02;
const GESTURE_SLIDE_LEFT: u8 = 0x03;
const GESTURE_SLIDE_RIGHT: u8 = 0x04;
const GESTURE_SINGLE_CLICK: u8 = 0x05;

/// Polled gesture reader.
///
/// The controller latches its last report until the finger lifts; the
/// previous frame is kept and only a changed frame becomes an event. At
/// most one event is pending per poll, anything faster is lost.
#[derive(Debug)]
pub struct Cst816Touch<I2C> {
    i2c: I2C,
    last_frame: [u8; FRAME_BYTES],
}

impl<I2C: I2c> Cst816Touch<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            last_frame: [0; FRAME_BYTES],
        }
    }

    pub fn get_event(&mut self) -> Result<Option<TouchEvent>, I2C::Error> {
        let mut frame = [0u8; FRAME_BYTES];
        self.i2c
            .write_read(TOUCH_I2C_ADDR, &[REG_GESTURE], &mut frame)?;

        if frame == self.last_frame {
            return Ok(None);
        }
        self.last_frame = frame;

        let gesture = frame[0];
        let points = frame[1];
        if gesture == GESTURE_NONE && points == 0 {
            return Ok(None);
        }

        let x = u16::from(frame[2] & 0x0f) << 8 | u16::from(frame[3]);
        let y = u16::from(frame[4] & 0x0f) << 8 | u16::from(frame[5]);

        let kind = match gesture {
            GESTURE_SLIDE_DOWN => EventKind::Down,
            GESTURE_SLIDE_UP => EventKind::Up,
            GESTURE_SLIDE_LEFT => EventKind::Left,
            GESTURE_SLIDE_RIGHT => EventKind::Right,
            GESTURE_SINGLE_CLICK => EventKind::Touch,
            other => {
                debug!("touch: ignoring gesture {:#04x}", other);
                return Ok(None);
            }
        };

        Ok(Some(TouchEvent { kind, x, y }))
    }
}
