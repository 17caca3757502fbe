//! L3GD20 Driver Implementation

use nalgebra::Vector3;

use super::registers::*;
use crate::devices::error::{ConstructionError, Device, RunError};
use crate::devices::imu::AxisChip;
use crate::devices::traits::{AxisRegisters, AxisScale, StatusBit};
use crate::platform::RegisterIo;

const CHIP: AxisChip = AxisChip {
    device: Device::Gyroscope,
    address: L3GD20_ADDR,
    init: &[
        (CTRL_REG1, CTRL_REG1_VALUE),
        (CTRL_REG2, 0x00),
        (CTRL_REG3, 0x00),
        (CTRL_REG4, CTRL_REG4_VALUE),
        (CTRL_REG5, 0x00),
        (FIFO_CTRL_REG, 0x00),
    ],
    ready: StatusBit::new(STATUS_REG, STATUS_ZYXDA),
    axes: AxisRegisters::xyz(OUT_X, OUT_Y, OUT_Z),
};

/// L3GD20 gyroscope driver
#[derive(Debug, Clone)]
pub struct L3gd20 {
    /// LSB to rad/s
    scale: AxisScale,
}

impl L3gd20 {
    /// Configure the gyroscope
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError::Bus` if the chip cannot be selected or a
    /// configuration write fails.
    pub fn new<B: RegisterIo + ?Sized>(bus: &mut B) -> Result<Self, ConstructionError> {
        CHIP.configure(bus)?;
        Ok(Self {
            scale: AxisScale::uniform(SENSITIVITY_DPS.to_radians()),
        })
    }

    /// Angular rate in rad/s, or `None` if no new sample is available
    pub fn run<B: RegisterIo + ?Sized>(
        &self,
        bus: &mut B,
    ) -> Result<Option<Vector3<f64>>, RunError> {
        CHIP.sample(bus, &self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockI2c;

    fn ready_bus() -> MockI2c {
        let mut bus = MockI2c::new();
        bus.set_register(0x6b, 0x27, 0x08);
        bus
    }

    #[test]
    fn test_init_sequence() {
        let mut bus = MockI2c::new();
        L3gd20::new(&mut bus).unwrap();
        assert_eq!(
            bus.writes(),
            vec![
                (0x6b, 0x20, 0xFF),
                (0x6b, 0x21, 0x00),
                (0x6b, 0x22, 0x00),
                (0x6b, 0x23, 0xF0),
                (0x6b, 0x24, 0x00),
                (0x6b, 0x2e, 0x00),
            ]
        );
    }

    #[test]
    fn test_not_ready_returns_none() {
        let mut bus = MockI2c::new();
        let gyro = L3gd20::new(&mut bus).unwrap();
        bus.set_register(0x6b, 0x27, 0xF7);
        assert_eq!(gyro.run(&mut bus).unwrap(), None);
    }

    #[test]
    fn test_all_ones_is_minus_one_lsb() {
        let mut bus = ready_bus();
        let gyro = L3gd20::new(&mut bus).unwrap();
        bus.set_u16(0x6b, 0x28, 0xFFFF);
        bus.set_u16(0x6b, 0x2a, 0xFFFF);
        bus.set_u16(0x6b, 0x2c, 0xFFFF);

        let rate = gyro.run(&mut bus).unwrap().unwrap();
        let lsb = 0.07f64.to_radians();
        for axis in rate.iter() {
            assert!((axis + lsb).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rate_in_rad_per_second() {
        let mut bus = ready_bus();
        let gyro = L3gd20::new(&mut bus).unwrap();
        // 1000 LSB = 70 °/s
        bus.set_u16(0x6b, 0x28, 1000);

        let rate = gyro.run(&mut bus).unwrap().unwrap();
        assert!((rate.x.to_degrees() - 70.0).abs() < 1e-9);
        assert_eq!(rate.y, 0.0);
    }

    #[test]
    fn test_failure_leaves_no_state() {
        let mut bus = ready_bus();
        let gyro = L3gd20::new(&mut bus).unwrap();
        bus.set_u16(0x6b, 0x2a, 300);

        bus.fail_register(0x6b, 0x2a);
        let err = gyro.run(&mut bus).unwrap_err();
        assert_eq!(err.to_string(), "l3gd20: read axes");
        bus.clear_faults();

        let mut fresh_bus = ready_bus();
        let fresh = L3gd20::new(&mut fresh_bus).unwrap();
        fresh_bus.set_u16(0x6b, 0x2a, 300);

        bus.clear_transactions();
        fresh_bus.clear_transactions();
        assert_eq!(gyro.run(&mut bus).unwrap(), fresh.run(&mut fresh_bus).unwrap());
        assert_eq!(bus.transactions(), fresh_bus.transactions());
    }

    #[test]
    fn test_init_failure() {
        let mut bus = MockI2c::new();
        bus.fail_register(0x6b, 0x23);
        let err = L3gd20::new(&mut bus).unwrap_err();
        assert!(matches!(
            err,
            ConstructionError::Bus {
                device: Device::Gyroscope,
                ..
            }
        ));
        assert_eq!(bus.writes().len(), 4);
    }
}
