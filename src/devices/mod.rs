//! Device drivers
//!
//! Drivers are written against the platform traits only, so the same code
//! runs on a Linux bus and on the mocks.
//!
//! ## Modules
//!
//! - `barometer`: BMP085 pressure and temperature sensor
//! - `imu`: L3GD20 gyroscope, LSM303DLHC accelerometer and magnetometer
//! - `traits`: readiness sources and axis helpers shared by the drivers
//! - `error`: construction and run errors

pub mod barometer;
pub mod error;
pub mod imu;
pub mod traits;
