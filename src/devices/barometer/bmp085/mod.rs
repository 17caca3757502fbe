//! BMP085 Barometer Driver
//!
//! I2C driver for the Bosch BMP085 digital pressure sensor.
//!
//! ## Features
//!
//! - Temperature: -40..+85 °C, 0.1 °C resolution
//! - Pressure: 300..1100 hPa, 1 Pa resolution
//! - Oversampling 0..3 (1, 2, 4 or 8 internal samples per pressure reading)
//! - End-of-conversion (EOC) output polled through a GPIO
//!
//! ## Measurement cycle
//!
//! Temperature and pressure are converted one after the other. Each `run`
//! call advances the cycle by at most one step and never waits for the chip:
//!
//! ```text
//! Initial ──start T──▶ AwaitingTemperature ──EOC: read UT, start P──▶ AwaitingPressure
//!                              ▲                                            │
//!                              └────────── EOC: read UP, start T, emit ─────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use i2c_sensors::devices::barometer::{Bmp085, Bmp085Config};
//!
//! let mut baro = Bmp085::new(&mut bus, pin, Bmp085Config::default())?;
//! loop {
//!     if let Some(reading) = baro.run(&mut bus)? {
//!         println!("{:.1} °C {:.0} Pa", reading.temperature(), reading.pressure());
//!     }
//! }
//! ```

mod calibration;
mod config;
mod driver;
mod registers;

pub use calibration::{compensate, Calibration};
pub use config::{Bmp085Config, Oversampling, RecoveryPolicy};
pub use driver::{BarometerReading, Bmp085, ConversionState};
pub use registers::{BMP085_ADDR, TEMPERATURE_CONVERSION_TIME};
