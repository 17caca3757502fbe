//! i2c_sensors - Environmental and inertial sensor drivers for Linux I2C buses
//!
//! This library provides a register-level platform abstraction, drivers for the
//! BMP085 barometer, L3GD20 gyroscope and LSM303DLHC accelerometer/magnetometer,
//! and an aggregator that samples all four once per tick.

// Platform abstraction layer (register I/O, ready line)
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Logging and other shared infrastructure
pub mod core;

// Four-sensor aggregator
pub mod sensors;

pub mod error;

pub use devices::error::{ConstructionError, Device, RunError};
pub use platform::BusError;
pub use sensors::{I2cSensors, SensorsConfig, SensorsReading};

#[doc(hidden)]
pub use log as __log;
