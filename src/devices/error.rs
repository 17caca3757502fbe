//! Driver error types
//!
//! Two kinds of failure exist: a driver that could not be constructed
//! ([`ConstructionError`]) and a measurement step that failed
//! ([`RunError`]). Both name the chip and the step, and keep the bus error
//! as their source.

use core::fmt;

use crate::platform::BusError;

/// Sensor chip a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    /// BMP085 barometer
    Barometer,
    /// L3GD20 gyroscope
    Gyroscope,
    /// LSM303DLHC accelerometer
    Accelerometer,
    /// LSM303DLHC magnetometer
    Magnetometer,
}

impl Device {
    /// Chip name used in messages
    pub fn name(self) -> &'static str {
        match self {
            Device::Barometer => "bmp085",
            Device::Gyroscope => "l3gd20",
            Device::Accelerometer => "lsm303dlhc-acc",
            Device::Magnetometer => "lsm303dlhc-mag",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Driver construction failed; no driver exists and nothing stays open
#[derive(Debug, thiserror::Error)]
pub enum ConstructionError {
    /// Oversampling setting outside 0..=3
    #[error("invalid oversampling setting {0}, expected 0..=3")]
    InvalidOversampling(u8),

    /// Opening the bus or an auxiliary handle failed
    #[error(transparent)]
    Open(#[from] BusError),

    /// A register transaction during initialization failed
    #[error("{device}: {stage}")]
    Bus {
        device: Device,
        stage: &'static str,
        #[source]
        source: BusError,
    },
}

impl ConstructionError {
    /// Adapter for `map_err` that tags a bus error with chip and step
    pub fn during(device: Device, stage: &'static str) -> impl FnOnce(BusError) -> Self {
        move |source| ConstructionError::Bus {
            device,
            stage,
            source,
        }
    }
}

/// A measurement step failed; the result of that call must not be used
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// A register transaction or ready poll failed
    #[error("{device}: {stage}")]
    Bus {
        device: Device,
        stage: &'static str,
        #[source]
        source: BusError,
    },

    /// Raw readings could not be compensated with the stored calibration
    #[error("bmp085: compensation undefined for ut={ut} up={up}")]
    Compensation { ut: i32, up: i32 },

    /// The driver stopped after an earlier failure and must be rebuilt
    #[error("{0}: stopped after an earlier failure")]
    Latched(Device),
}

impl RunError {
    /// Adapter for `map_err` that tags a bus error with chip and step
    pub fn during(device: Device, stage: &'static str) -> impl FnOnce(BusError) -> Self {
        move |source| RunError::Bus {
            device,
            stage,
            source,
        }
    }

    /// Chip the failure belongs to
    pub fn device(&self) -> Device {
        match self {
            RunError::Bus { device, .. } | RunError::Latched(device) => *device,
            RunError::Compensation { .. } => Device::Barometer,
        }
    }
}
