//! Linux platform implementation
//!
//! Register I/O over an i2c-dev character device and ready-line polling over a
//! sysfs GPIO value file.

mod gpio;
mod i2c;

pub use gpio::{SysfsReadyPin, GPIO_VALUE_PATH};
pub use i2c::LinuxI2cBus;
