//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use i2c_sensors::platform::mock::{MockI2c, MockReadyPin};
//! use i2c_sensors::platform::traits::{ReadyPin, RegisterIo};
//!
//! let mut bus = MockI2c::new();
//! bus.set_u16(0x77, 0xf6, 27898);
//! bus.select_device(0x77).unwrap();
//! assert_eq!(bus.read_u16(0xf6).unwrap(), 27898);
//!
//! let (mut pin, handle) = MockReadyPin::new();
//! handle.set_ready(true);
//! assert!(pin.poll_ready().unwrap());
//! ```

#![cfg(any(test, feature = "mock"))]

mod gpio;
mod i2c;

pub use gpio::{MockReadyPin, ReadyPinHandle};
pub use i2c::{I2cTransaction, MockI2c};
