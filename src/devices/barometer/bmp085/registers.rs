//! BMP085 Register Definitions
//!
//! Based on the BMP085 datasheet (BST-BMP085-DS000).

use core::time::Duration;

/// BMP085 I2C address (fixed)
pub const BMP085_ADDR: u16 = 0x77;

/// First of eleven big-endian calibration words (AC1..MD)
pub const CALIB: u8 = 0xAA;

/// Number of calibration words
pub const CALIB_WORDS: u8 = 11;

/// Measurement control register
pub const CTRL_MEAS: u8 = 0xF4;

/// Start temperature conversion
pub const CTRL_TEMPERATURE: u8 = 0x2E;

/// Start pressure conversion, oversampling goes into bits 7:6
pub const CTRL_PRESSURE: u8 = 0x34;

/// Oversampling field offset in CTRL_MEAS
pub const CTRL_OSS_SHIFT: u8 = 6;

/// ADC result, MSB first (0xF6 MSB, 0xF7 LSB, 0xF8 XLSB)
pub const OUT: u8 = 0xF6;

/// Maximum temperature conversion time
pub const TEMPERATURE_CONVERSION_TIME: Duration = Duration::from_micros(4_500);
