//! BMP085 factory calibration and fixed-point compensation
//!
//! The compensation is the integer algorithm from the datasheet, step for
//! step. Shifts, truncating divisions and the signed/unsigned switches all
//! affect the last digit, so the order of operations must not change.
//!
//! Arithmetic wraps like the chip vendor's 32-bit reference code instead of
//! panicking on corrupt calibration data; divisions by zero are reported.

use core::fmt;

use super::config::Oversampling;
use super::registers;
use crate::platform::{RegisterIo, Result};

/// Factory calibration coefficients (EEPROM 0xAA..0xBF)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    pub ac1: i16,
    pub ac2: i16,
    pub ac3: i16,
    pub ac4: u16,
    pub ac5: u16,
    pub ac6: u16,
    pub b1: i16,
    pub b2: i16,
    pub mb: i16,
    pub mc: i16,
    pub md: i16,
}

impl Calibration {
    /// Read all eleven words from the selected BMP085
    pub fn read<B: RegisterIo + ?Sized>(bus: &mut B) -> Result<Self> {
        let mut words = [0u16; registers::CALIB_WORDS as usize];
        for (i, word) in words.iter_mut().enumerate() {
            *word = bus.read_u16(registers::CALIB + 2 * i as u8)?;
        }
        Ok(Self::from_words(words))
    }

    /// Interpret raw words in EEPROM order
    pub fn from_words(w: [u16; 11]) -> Self {
        Self {
            ac1: w[0] as i16,
            ac2: w[1] as i16,
            ac3: w[2] as i16,
            ac4: w[3],
            ac5: w[4],
            ac6: w[5],
            b1: w[6] as i16,
            b2: w[7] as i16,
            mb: w[8] as i16,
            mc: w[9] as i16,
            md: w[10] as i16,
        }
    }

    /// Raw words in EEPROM order
    pub fn to_words(&self) -> [u16; 11] {
        [
            self.ac1 as u16,
            self.ac2 as u16,
            self.ac3 as u16,
            self.ac4,
            self.ac5,
            self.ac6,
            self.b1 as u16,
            self.b2 as u16,
            self.mb as u16,
            self.mc as u16,
            self.md as u16,
        ]
    }
}

impl fmt::Display for Calibration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ac1={} ac2={} ac3={} ac4={} ac5={} ac6={} b1={} b2={} mb={} mc={} md={}",
            self.ac1,
            self.ac2,
            self.ac3,
            self.ac4,
            self.ac5,
            self.ac6,
            self.b1,
            self.b2,
            self.mb,
            self.mc,
            self.md
        )
    }
}

/// Compensated temperature (0.1 °C) and pressure (Pa)
///
/// `ut` is the uncompensated temperature, `up` the uncompensated pressure
/// already shifted right by `8 - oss`. Returns `None` if the calibration
/// makes a divisor zero.
pub fn compensate(cal: &Calibration, oss: Oversampling, ut: i32, up: i32) -> Option<(i32, i32)> {
    let oss = u32::from(oss.oss());
    let ac1 = i32::from(cal.ac1);
    let ac2 = i32::from(cal.ac2);
    let ac3 = i32::from(cal.ac3);
    let ac4 = u32::from(cal.ac4);
    let ac5 = i32::from(cal.ac5);
    let ac6 = i32::from(cal.ac6);
    let b1 = i32::from(cal.b1);
    let b2 = i32::from(cal.b2);
    let mc = i32::from(cal.mc);
    let md = i32::from(cal.md);

    // Temperature
    let x1 = ut.wrapping_sub(ac6).wrapping_mul(ac5) >> 15;
    let x2 = (mc << 11).checked_div(x1.wrapping_add(md))?;
    let b5 = x1.wrapping_add(x2);
    let temperature = b5.wrapping_add(8) >> 4;

    // Pressure
    let b6 = b5.wrapping_sub(4000);
    let b6_sq = b6.wrapping_mul(b6) >> 12;
    let x1 = b2.wrapping_mul(b6_sq) >> 11;
    let x2 = ac2.wrapping_mul(b6) >> 11;
    let x3 = x1.wrapping_add(x2);
    let b3 = ((ac1.wrapping_mul(4).wrapping_add(x3) << oss).wrapping_add(2)) >> 2;
    let x1 = ac3.wrapping_mul(b6) >> 13;
    let x2 = b1.wrapping_mul(b6_sq) >> 16;
    let x3 = x1.wrapping_add(x2).wrapping_add(2) >> 2;
    let b4 = ac4.wrapping_mul(x3.wrapping_add(32768) as u32) >> 15;
    let b7 = (up as u32)
        .wrapping_sub(b3 as u32)
        .wrapping_mul(50000u32 >> oss);
    let p = if b7 < 0x8000_0000 {
        b7.wrapping_mul(2).checked_div(b4)?
    } else {
        b7.checked_div(b4)?.wrapping_mul(2)
    };
    let p = p as i32;

    let x1 = (p >> 8).wrapping_mul(p >> 8);
    let x1 = x1.wrapping_mul(3038) >> 16;
    let x2 = (-7357i32).wrapping_mul(p) >> 16;
    let pressure = p.wrapping_add(x1.wrapping_add(x2).wrapping_add(3791) >> 4);

    Some((temperature, pressure))
}
