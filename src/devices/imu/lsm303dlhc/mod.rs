//! LSM303DLHC Accelerometer and Magnetometer Drivers
//!
//! The LSM303DLHC houses two independent chips behind two bus addresses.
//! Each gets its own driver:
//!
//! - [`Lsm303Accel`]: 400 Hz, ±16 g, reported in m/s²
//! - [`Lsm303Mag`]: 15 Hz, ±8.1 gauss, reported in gauss
//!
//! The magnetometer stores its axes as X, Z, Y and has a different gain on
//! Z than on X/Y.

mod accel;
mod mag;
mod registers;

pub use accel::Lsm303Accel;
pub use mag::Lsm303Mag;
pub use registers::{ACC_ADDR, MAG_ADDR};
