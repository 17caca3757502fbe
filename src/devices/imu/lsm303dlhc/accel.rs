//! LSM303DLHC accelerometer

use nalgebra::Vector3;

use super::registers::*;
use crate::devices::error::{ConstructionError, Device, RunError};
use crate::devices::imu::AxisChip;
use crate::devices::traits::{AxisRegisters, AxisScale, StatusBit};
use crate::platform::RegisterIo;

const CHIP: AxisChip = AxisChip {
    device: Device::Accelerometer,
    address: ACC_ADDR,
    init: &[
        (CTRL_REG1_A, CTRL_REG1_A_VALUE),
        (CTRL_REG2_A, 0x00),
        (CTRL_REG3_A, 0x00),
        (CTRL_REG4_A, CTRL_REG4_A_VALUE),
        (CTRL_REG5_A, 0x00),
        (CTRL_REG6_A, 0x00),
        (FIFO_CTRL_REG_A, 0x00),
    ],
    ready: StatusBit::new(STATUS_REG_A, STATUS_ZYXDA),
    axes: AxisRegisters::xyz(OUT_X_A, OUT_Y_A, OUT_Z_A),
};

/// LSM303DLHC accelerometer driver
#[derive(Debug, Clone)]
pub struct Lsm303Accel {
    scale: AxisScale,
}

impl Lsm303Accel {
    /// Configure the accelerometer
    pub fn new<B: RegisterIo + ?Sized>(bus: &mut B) -> Result<Self, ConstructionError> {
        CHIP.configure(bus)?;
        Ok(Self {
            scale: AxisScale::uniform(ACC_SCALE),
        })
    }

    /// Acceleration in m/s², or `None` if no new sample is available
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

    #[test]
    fn test_init_sequence() {
        let mut bus = MockI2c::new();
        Lsm303Accel::new(&mut bus).unwrap();
        assert_eq!(
            bus.writes(),
            vec![
                (0x19, 0x20, 0x97),
                (0x19, 0x21, 0x00),
                (0x19, 0x22, 0x00),
                (0x19, 0x23, 0xF8),
                (0x19, 0x24, 0x00),
                (0x19, 0x25, 0x00),
                (0x19, 0x2e, 0x00),
            ]
        );
    }

    #[test]
    fn test_one_g() {
        let mut bus = MockI2c::new();
        let acc = Lsm303Accel::new(&mut bus).unwrap();
        bus.set_register(0x19, 0x27, 0x08);
        // 1 g = 1000 mg / 12 mg per digit, shifted left by 4
        bus.set_u16(0x19, 0x2c, 1333);

        let a = acc.run(&mut bus).unwrap().unwrap();
        assert!((a.z - 9.80665).abs() < 0.01, "a.z={}", a.z);
        assert_eq!(a.x, 0.0);
    }

    #[test]
    fn test_all_ones_is_minus_one_lsb() {
        let mut bus = MockI2c::new();
        let acc = Lsm303Accel::new(&mut bus).unwrap();
        bus.set_register(0x19, 0x27, 0x0F);
        bus.set_u16(0x19, 0x28, 0xFFFF);

        let a = acc.run(&mut bus).unwrap().unwrap();
        assert!((a.x + 9.80665 * 12.0 / 16000.0).abs() < 1e-12);
    }

    #[test]
    fn test_not_ready_returns_none() {
        let mut bus = MockI2c::new();
        let acc = Lsm303Accel::new(&mut bus).unwrap();
        bus.set_u16(0x19, 0x28, 0x1234);
        assert_eq!(acc.run(&mut bus).unwrap(), None);
    }

    #[test]
    fn test_status_failure_leaves_no_state() {
        let mut bus = MockI2c::new();
        let acc = Lsm303Accel::new(&mut bus).unwrap();
        bus.set_register(0x19, 0x27, 0x08);
        bus.set_u16(0x19, 0x2a, 0x0100);

        bus.fail_after(1);
        let err = acc.run(&mut bus).unwrap_err();
        assert_eq!(err.to_string(), "lsm303dlhc-acc: read status");

        let a = acc.run(&mut bus).unwrap().unwrap();
        assert!((a.y - 256.0 * ACC_SCALE).abs() < 1e-12);
    }
}
