//! BMP085 Driver Implementation
//!
//! Non-blocking temperature/pressure conversion cycle. The driver owns the
//! end-of-conversion line; the bus is borrowed per call because all chips
//! share it.

use core::fmt;

use super::calibration::{compensate, Calibration};
use super::config::{Bmp085Config, Oversampling, RecoveryPolicy};
use super::registers::{self, BMP085_ADDR};
use crate::devices::error::{ConstructionError, Device, RunError};
use crate::devices::traits::{ConversionPin, ReadinessSource};
use crate::platform::{traits::ReadyPin, RegisterIo};
use crate::{log_debug, log_warn};

/// Position in the conversion cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionState {
    /// No conversion started yet, or restarted after an error
    Initial,
    /// Temperature conversion in progress
    AwaitingTemperature,
    /// Pressure conversion in progress, `ut` holds the temperature
    AwaitingPressure,
    /// Stopped after an error (`RecoveryPolicy::Latch`)
    Errored,
}

impl fmt::Display for ConversionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConversionState::Initial => "initial",
            ConversionState::AwaitingTemperature => "awaiting-temperature",
            ConversionState::AwaitingPressure => "awaiting-pressure",
            ConversionState::Errored => "errored",
        };
        f.write_str(name)
    }
}

/// One compensated barometer sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarometerReading {
    /// Temperature in 0.1 °C
    pub temperature_decicelsius: i32,
    /// Pressure in Pa
    pub pressure_pa: i32,
}

impl BarometerReading {
    /// Temperature in °C
    pub fn temperature(&self) -> f64 {
        f64::from(self.temperature_decicelsius) / 10.0
    }

    /// Pressure in Pa
    pub fn pressure(&self) -> f64 {
        f64::from(self.pressure_pa)
    }

    /// Altitude in metres above the level where pressure is `sea_level_pa`
    ///
    /// International barometric formula; valid in the troposphere.
    pub fn altitude(&self, sea_level_pa: f64) -> f64 {
        44330.0 * (1.0 - (self.pressure() / sea_level_pa).powf(1.0 / 5.255))
    }
}

/// BMP085 driver
///
/// # Type Parameters
///
/// * `P` - End-of-conversion line implementing [`ReadyPin`]
pub struct Bmp085<P> {
    /// End-of-conversion line
    eoc: ConversionPin<P>,

    oversampling: Oversampling,

    recovery: RecoveryPolicy,

    /// Factory calibration, read once at construction
    calibration: Calibration,

    state: ConversionState,

    /// Last uncompensated temperature
    ut: i32,

    /// Last uncompensated pressure, already shifted by `8 - oss`
    up: i32,
}

impl<P: ReadyPin> Bmp085<P> {
    /// Create a driver and read the calibration
    ///
    /// The oversampling setting is checked before the bus is touched. On any
    /// failure `pin` is dropped and no driver exists.
    ///
    /// # Errors
    ///
    /// - `ConstructionError::InvalidOversampling` for a setting outside 0..=3
    /// - `ConstructionError::Bus` if selecting the chip or reading the
    ///   calibration fails
    pub fn new<B: RegisterIo + ?Sized>(
        bus: &mut B,
        pin: P,
        config: Bmp085Config,
    ) -> Result<Self, ConstructionError> {
        let oversampling = Oversampling::try_from(config.oversampling)?;

        bus.select_device(BMP085_ADDR)
            .map_err(ConstructionError::during(Device::Barometer, "select"))?;
        let calibration = Calibration::read(bus)
            .map_err(ConstructionError::during(Device::Barometer, "read calibration"))?;

        log_debug!(
            "bmp085: oss={} recovery={:?} {}",
            oversampling.oss(),
            config.recovery,
            calibration
        );

        Ok(Self {
            eoc: ConversionPin::new(pin),
            oversampling,
            recovery: config.recovery,
            calibration,
            state: ConversionState::Initial,
            ut: 0,
            up: 0,
        })
    }

    /// Advance the conversion cycle by at most one step
    ///
    /// Returns `Ok(None)` when no new sample completed on this call, and a
    /// reading each time a pressure conversion finishes. Never waits for the
    /// chip.
    ///
    /// # Errors
    ///
    /// On any failure the result of this call must be discarded. With
    /// `RecoveryPolicy::Restart` the next call starts a new cycle; with
    /// `RecoveryPolicy::Latch` every later call returns `RunError::Latched`.
    pub fn run<B: RegisterIo + ?Sized>(
        &mut self,
        bus: &mut B,
    ) -> Result<Option<BarometerReading>, RunError> {
        if self.state == ConversionState::Errored {
            return Err(RunError::Latched(Device::Barometer));
        }

        match self.step(bus) {
            Ok(reading) => Ok(reading),
            Err(err) => {
                let next = match self.recovery {
                    RecoveryPolicy::Restart => ConversionState::Initial,
                    RecoveryPolicy::Latch => ConversionState::Errored,
                };
                log_warn!("bmp085: {} in state {}, now {}", err, self.state, next);
                self.state = next;
                Err(err)
            }
        }
    }

    fn step<B: RegisterIo + ?Sized>(
        &mut self,
        bus: &mut B,
    ) -> Result<Option<BarometerReading>, RunError> {
        match self.state {
            ConversionState::Initial => {
                self.start_temperature(bus)?;
                self.transition(ConversionState::AwaitingTemperature);
                Ok(None)
            }
            ConversionState::AwaitingTemperature => {
                if !self.conversion_done(bus)? {
                    return Ok(None);
                }
                bus.select_device(BMP085_ADDR)
                    .map_err(RunError::during(Device::Barometer, "select"))?;
                let ut = bus
                    .read_u16(registers::OUT)
                    .map_err(RunError::during(Device::Barometer, "read temperature"))?;
                self.ut = i32::from(ut);
                bus.write_u8(registers::CTRL_MEAS, self.oversampling.register_value())
                    .map_err(RunError::during(Device::Barometer, "start pressure"))?;
                self.transition(ConversionState::AwaitingPressure);
                Ok(None)
            }
            ConversionState::AwaitingPressure => {
                if !self.conversion_done(bus)? {
                    return Ok(None);
                }
                bus.select_device(BMP085_ADDR)
                    .map_err(RunError::during(Device::Barometer, "select"))?;
                let raw = bus
                    .read_u24(registers::OUT)
                    .map_err(RunError::during(Device::Barometer, "read pressure"))?;
                self.up = (raw >> (8 - self.oversampling.oss())) as i32;
                self.write_temperature_start(bus)?;
                self.transition(ConversionState::AwaitingTemperature);

                let (temperature, pressure) =
                    compensate(&self.calibration, self.oversampling, self.ut, self.up).ok_or(
                        RunError::Compensation {
                            ut: self.ut,
                            up: self.up,
                        },
                    )?;
                Ok(Some(BarometerReading {
                    temperature_decicelsius: temperature,
                    pressure_pa: pressure,
                }))
            }
            // Filtered out by `run`
            ConversionState::Errored => Err(RunError::Latched(Device::Barometer)),
        }
    }

    fn start_temperature<B: RegisterIo + ?Sized>(&mut self, bus: &mut B) -> Result<(), RunError> {
        bus.select_device(BMP085_ADDR)
            .map_err(RunError::during(Device::Barometer, "select"))?;
        self.write_temperature_start(bus)
    }

    fn write_temperature_start<B: RegisterIo + ?Sized>(
        &mut self,
        bus: &mut B,
    ) -> Result<(), RunError> {
        bus.write_u8(registers::CTRL_MEAS, registers::CTRL_TEMPERATURE)
            .map_err(RunError::during(Device::Barometer, "start temperature"))
    }

    fn conversion_done<B: RegisterIo + ?Sized>(&mut self, bus: &mut B) -> Result<bool, RunError> {
        self.eoc
            .is_ready(bus)
            .map_err(RunError::during(Device::Barometer, "poll end of conversion"))
    }

    fn transition(&mut self, next: ConversionState) {
        log_debug!("bmp085: {} -> {}", self.state, next);
        self.state = next;
    }

    /// Current position in the conversion cycle
    pub fn state(&self) -> ConversionState {
        self.state
    }

    /// Calibration read at construction
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Oversampling setting in use
    pub fn oversampling(&self) -> Oversampling {
        self.oversampling
    }

    /// One-line diagnostic of state, oversampling and calibration
    pub fn dump(&self) -> String {
        format!(
            "bmp085: state={} oss={} {}",
            self.state,
            self.oversampling.oss(),
            self.calibration
        )
    }

    /// Release the driver and return the end-of-conversion line
    pub fn release(self) -> P {
        self.eoc.into_inner()
    }
}
