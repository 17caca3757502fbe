//! Per-tick aggregate reading

use nalgebra::Vector3;

use crate::devices::barometer::BarometerReading;

/// Results of one tick; `None` means that sensor had no new sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorsReading {
    /// Temperature and pressure
    pub barometer: Option<BarometerReading>,
    /// Angular rate, rad/s
    pub gyro: Option<Vector3<f64>>,
    /// Acceleration, m/s²
    pub accel: Option<Vector3<f64>>,
    /// Magnetic field, gauss
    pub mag: Option<Vector3<f64>>,
}

impl SensorsReading {
    /// Whether no sensor produced a sample
    pub fn is_empty(&self) -> bool {
        self.barometer.is_none()
            && self.gyro.is_none()
            && self.accel.is_none()
            && self.mag.is_none()
    }

    /// Altitude in metres relative to `sea_level_pa`
    pub fn altitude(&self, sea_level_pa: f64) -> Option<f64> {
        self.barometer.map(|b| b.altitude(sea_level_pa))
    }
}

/// Euclidean norm of a three-axis sample
pub fn magnitude(v: &Vector3<f64>) -> f64 {
    v.norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reading() {
        let reading = SensorsReading::default();
        assert!(reading.is_empty());
        assert_eq!(reading.altitude(100_500.0), None);
    }

    #[test]
    fn test_magnitude() {
        assert!((magnitude(&Vector3::new(3.0, 4.0, 12.0)) - 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_altitude_from_barometer() {
        let reading = SensorsReading {
            barometer: Some(BarometerReading {
                temperature_decicelsius: 200,
                pressure_pa: 100_500,
            }),
            ..Default::default()
        };
        assert!(!reading.is_empty());
        assert!(reading.altitude(100_500.0).unwrap().abs() < 1e-9);
    }
}
