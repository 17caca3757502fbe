//! Inertial and magnetic sensor drivers
//!
//! Three simple chips share one pattern: write a fixed configuration once,
//! then on each `run` check a data-ready bit and read three signed axes.
//!
//! ## Available Drivers
//!
//! - `l3gd20`: L3GD20 three-axis gyroscope (rad/s)
//! - `lsm303dlhc`: LSM303DLHC accelerometer (m/s²) and magnetometer (gauss)
//!
//! ## Usage
//!
//! ```ignore
//! use i2c_sensors::devices::imu::L3gd20;
//!
//! let gyro = L3gd20::new(&mut bus)?;
//! if let Some(rate) = gyro.run(&mut bus)? {
//!     println!("{:.3} rad/s", rate.norm());
//! }
//! ```

mod axis_chip;
pub mod l3gd20;
pub mod lsm303dlhc;

pub use axis_chip::AxisChip;
pub use l3gd20::L3gd20;
pub use lsm303dlhc::{Lsm303Accel, Lsm303Mag};
