//! BMP085 Configuration
//!
//! Configuration structs for oversampling and error recovery.

use core::time::Duration;

use super::registers;
use crate::devices::error::ConstructionError;

/// Pressure oversampling setting (datasheet `oss`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Oversampling {
    /// 1 sample, 4.5 ms
    UltraLowPower,
    /// 2 samples, 7.5 ms
    Standard,
    /// 4 samples, 13.5 ms
    HighResolution,
    /// 8 samples, 25.5 ms (default)
    #[default]
    UltraHighResolution,
}

impl Oversampling {
    /// Numeric `oss` value 0..=3 used in the compensation shifts
    pub fn oss(self) -> u8 {
        match self {
            Oversampling::UltraLowPower => 0,
            Oversampling::Standard => 1,
            Oversampling::HighResolution => 2,
            Oversampling::UltraHighResolution => 3,
        }
    }

    /// Control byte that starts a pressure conversion
    pub fn register_value(self) -> u8 {
        registers::CTRL_PRESSURE + (self.oss() << registers::CTRL_OSS_SHIFT)
    }

    /// Maximum pressure conversion time for this setting
    pub fn pressure_conversion_time(self) -> Duration {
        match self {
            Oversampling::UltraLowPower => Duration::from_micros(4_500),
            Oversampling::Standard => Duration::from_micros(7_500),
            Oversampling::HighResolution => Duration::from_micros(13_500),
            Oversampling::UltraHighResolution => Duration::from_micros(25_500),
        }
    }

    /// Minimum time for one temperature plus pressure cycle
    pub fn cycle_time(self) -> Duration {
        registers::TEMPERATURE_CONVERSION_TIME + self.pressure_conversion_time()
    }
}

impl TryFrom<u8> for Oversampling {
    type Error = ConstructionError;

    fn try_from(oss: u8) -> Result<Self, Self::Error> {
        match oss {
            0 => Ok(Oversampling::UltraLowPower),
            1 => Ok(Oversampling::Standard),
            2 => Ok(Oversampling::HighResolution),
            3 => Ok(Oversampling::UltraHighResolution),
            _ => Err(ConstructionError::InvalidOversampling(oss)),
        }
    }
}

/// What a failed measurement step does to the conversion cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryPolicy {
    /// Drop pending readings and restart with a temperature conversion
    #[default]
    Restart,
    /// Stop; every later `run` fails until the driver is rebuilt
    Latch,
}

/// BMP085 driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bmp085Config {
    /// Oversampling setting `oss`, validated at construction (0..=3)
    pub oversampling: u8,

    /// Error recovery policy
    pub recovery: RecoveryPolicy,
}

impl Default for Bmp085Config {
    fn default() -> Self {
        Self {
            oversampling: Oversampling::UltraHighResolution.oss(),
            recovery: RecoveryPolicy::Restart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversampling_round_trip_valid_range() {
        for oss in 0..=3u8 {
            assert_eq!(Oversampling::try_from(oss).unwrap().oss(), oss);
        }
    }

    #[test]
    fn test_oversampling_rejects_out_of_range() {
        for oss in [4u8, 5, 128, 255] {
            assert!(matches!(
                Oversampling::try_from(oss),
                Err(ConstructionError::InvalidOversampling(v)) if v == oss
            ));
        }
    }

    #[test]
    fn test_pressure_register_value() {
        assert_eq!(Oversampling::UltraLowPower.register_value(), 0x34);
        assert_eq!(Oversampling::Standard.register_value(), 0x74);
        assert_eq!(Oversampling::HighResolution.register_value(), 0xB4);
        assert_eq!(Oversampling::UltraHighResolution.register_value(), 0xF4);
    }

    #[test]
    fn test_conversion_time_grows_with_oversampling() {
        assert_eq!(
            Oversampling::UltraHighResolution.pressure_conversion_time(),
            Duration::from_micros(25_500)
        );
        assert!(
            Oversampling::Standard.pressure_conversion_time()
                > Oversampling::UltraLowPower.pressure_conversion_time()
        );
    }

    #[test]
    fn test_cycle_time_includes_temperature() {
        assert_eq!(
            Oversampling::UltraLowPower.cycle_time(),
            Duration::from_millis(9)
        );
        assert_eq!(
            Oversampling::UltraHighResolution.cycle_time(),
            Duration::from_millis(30)
        );
    }

    #[test]
    fn test_config_default() {
        let config = Bmp085Config::default();
        assert_eq!(config.oversampling, 3);
        assert_eq!(config.recovery, RecoveryPolicy::Restart);
    }
}
