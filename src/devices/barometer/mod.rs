//! Barometer drivers
//!
//! - `bmp085`: Bosch BMP085 pressure/temperature sensor with end-of-conversion pin

pub mod bmp085;

pub use bmp085::{BarometerReading, Bmp085, Bmp085Config, Oversampling};
