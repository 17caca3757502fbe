//! Aggregator configuration

use std::path::PathBuf;
use std::time::Duration;

use crate::devices::barometer::Bmp085Config;

/// Default i2c-dev bus
pub const DEFAULT_DEVICE: &str = "/dev/i2c-1";

/// Default GPIO line wired to the BMP085 EOC output
pub const DEFAULT_EOC_GPIO: u32 = 38;

/// Default sea level pressure for altitude, Pa
pub const DEFAULT_SEA_LEVEL_PRESSURE: f64 = 100_500.0;

/// Configuration for [`I2cSensors`](super::I2cSensors)
#[derive(Debug, Clone, PartialEq)]
pub struct SensorsConfig {
    /// i2c-dev character device shared by all four chips
    pub device: PathBuf,

    /// sysfs GPIO number of the barometer's end-of-conversion line
    pub eoc_gpio: u32,

    /// Barometer settings
    pub barometer: Bmp085Config,

    /// Reference pressure for altitude, Pa
    pub sea_level_pressure: f64,

    /// Delay between sampling ticks
    pub interval: Duration,
}

impl Default for SensorsConfig {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_DEVICE),
            eoc_gpio: DEFAULT_EOC_GPIO,
            barometer: Bmp085Config::default(),
            sea_level_pressure: DEFAULT_SEA_LEVEL_PRESSURE,
            interval: Duration::from_millis(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SensorsConfig::default();
        assert_eq!(config.device, PathBuf::from("/dev/i2c-1"));
        assert_eq!(config.eoc_gpio, 38);
        assert_eq!(config.barometer.oversampling, 3);
        assert!((config.sea_level_pressure - 100_500.0).abs() < f64::EPSILON);
        assert_eq!(config.interval, Duration::from_millis(10));
    }
}
