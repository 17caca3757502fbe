//! L3GD20 Gyroscope Driver
//!
//! I2C driver for the ST L3GD20 three-axis angular rate sensor, configured
//! for 760 Hz output and ±2000 °/s full scale. Rates are reported in rad/s.

mod driver;
mod registers;

pub use driver::L3gd20;
pub use registers::{L3GD20_ADDR, SENSITIVITY_DPS};
