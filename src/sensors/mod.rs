//! Four-sensor aggregator
//!
//! Owns the shared bus and one driver per chip, and samples all four once per
//! tick from a single thread, so register transactions never interleave.
//!
//! ## Usage
//!
//! ```ignore
//! use i2c_sensors::sensors::{report, I2cSensors, SensorsConfig};
//!
//! let config = SensorsConfig::default();
//! let mut sensors = I2cSensors::open(&config)?;
//! println!("{}", report::header());
//! loop {
//!     let reading = sensors.run()?;
//!     println!("{}", report::format_row(&reading, config.sea_level_pressure));
//! }
//! ```

mod config;
mod reading;
pub mod report;

pub use config::{
    SensorsConfig, DEFAULT_DEVICE, DEFAULT_EOC_GPIO, DEFAULT_SEA_LEVEL_PRESSURE,
};
pub use reading::{magnitude, SensorsReading};

use crate::devices::barometer::Bmp085;
use crate::devices::error::{ConstructionError, RunError};
use crate::devices::imu::{L3gd20, Lsm303Accel, Lsm303Mag};
use crate::log_info;
use crate::platform::{traits::ReadyPin, RegisterIo};

#[cfg(feature = "linux")]
use crate::devices::barometer::{bmp085::BMP085_ADDR, Oversampling};
#[cfg(feature = "linux")]
use crate::platform::linux::{LinuxI2cBus, SysfsReadyPin};

/// Barometer, gyroscope, accelerometer and magnetometer on one bus
pub struct I2cSensors<B, P> {
    bus: B,
    barometer: Bmp085<P>,
    gyro: L3gd20,
    accel: Lsm303Accel,
    mag: Lsm303Mag,
}

impl<B: RegisterIo, P: ReadyPin> I2cSensors<B, P> {
    /// Construct all four drivers on an open bus
    ///
    /// Drivers are built in a fixed order (barometer, gyroscope,
    /// accelerometer, magnetometer). On failure everything built so far,
    /// including `bus` and `pin`, is dropped.
    pub fn new(mut bus: B, pin: P, config: &SensorsConfig) -> Result<Self, ConstructionError> {
        let barometer = Bmp085::new(&mut bus, pin, config.barometer)?;
        let gyro = L3gd20::new(&mut bus)?;
        let accel = Lsm303Accel::new(&mut bus)?;
        let mag = Lsm303Mag::new(&mut bus)?;

        log_info!("sensors ready: bmp085, l3gd20, lsm303dlhc");
        Ok(Self {
            bus,
            barometer,
            gyro,
            accel,
            mag,
        })
    }

    /// Run every driver once
    ///
    /// Stops at the first failing driver; the drivers after it are not run
    /// on this tick. A barometer reading completed earlier in the same tick
    /// is lost with the error, its conversion cycle has already moved on.
    pub fn run(&mut self) -> Result<SensorsReading, RunError> {
        let barometer = self.barometer.run(&mut self.bus)?;
        let gyro = self.gyro.run(&mut self.bus)?;
        let accel = self.accel.run(&mut self.bus)?;
        let mag = self.mag.run(&mut self.bus)?;

        Ok(SensorsReading {
            barometer,
            gyro,
            accel,
            mag,
        })
    }

    /// Diagnostic line with the barometer state and calibration
    pub fn dump(&self) -> String {
        self.barometer.dump()
    }

    /// Barometer driver
    pub fn barometer(&self) -> &Bmp085<P> {
        &self.barometer
    }

    /// Shared bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutable access to the shared bus
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}

#[cfg(feature = "linux")]
impl I2cSensors<LinuxI2cBus, SysfsReadyPin> {
    /// Open the configured bus and ready line and construct all drivers
    ///
    /// The oversampling setting is checked before anything is opened.
    pub fn open(config: &SensorsConfig) -> Result<Self, ConstructionError> {
        Oversampling::try_from(config.barometer.oversampling)?;

        let bus = LinuxI2cBus::open(&config.device, BMP085_ADDR)?;
        let pin = SysfsReadyPin::open(config.eoc_gpio)?;
        Self::new(bus, pin, config)
    }
}
