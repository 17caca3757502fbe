//! LSM303DLHC magnetometer

use nalgebra::Vector3;

use super::registers::*;
use crate::devices::error::{ConstructionError, Device, RunError};
use crate::devices::imu::AxisChip;
use crate::devices::traits::{AxisRegisters, AxisScale, StatusBit};
use crate::platform::RegisterIo;

const CHIP: AxisChip = AxisChip {
    device: Device::Magnetometer,
    address: MAG_ADDR,
    init: &[
        (CRA_REG_M, CRA_REG_M_VALUE),
        (CRB_REG_M, CRB_REG_M_VALUE),
        (MR_REG_M, MR_CONTINUOUS),
    ],
    ready: StatusBit::new(SR_REG_M, SR_DRDY),
    axes: AxisRegisters::xzy(OUT_X_M, OUT_Z_M, OUT_Y_M),
};

/// LSM303DLHC magnetometer driver
#[derive(Debug, Clone)]
pub struct Lsm303Mag {
    scale: AxisScale,
}

impl Lsm303Mag {
    /// Configure the magnetometer for continuous conversion
    pub fn new<B: RegisterIo + ?Sized>(bus: &mut B) -> Result<Self, ConstructionError> {
        CHIP.configure(bus)?;
        Ok(Self {
            scale: AxisScale::xy_z(1.0 / MAG_GAIN_XY, 1.0 / MAG_GAIN_Z),
        })
    }

    /// Magnetic field in gauss, or `None` if no new sample is available
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
    use crate::platform::mock::{I2cTransaction, MockI2c};

    fn ready_mag() -> (MockI2c, Lsm303Mag) {
        let mut bus = MockI2c::new();
        let mag = Lsm303Mag::new(&mut bus).unwrap();
        bus.set_register(0x1e, 0x09, 0x01);
        (bus, mag)
    }

    #[test]
    fn test_init_sequence() {
        let mut bus = MockI2c::new();
        Lsm303Mag::new(&mut bus).unwrap();
        assert_eq!(
            bus.writes(),
            vec![(0x1e, 0x00, 0x1C), (0x1e, 0x01, 0xE0), (0x1e, 0x02, 0x00)]
        );
    }

    #[test]
    fn test_axes_read_x_z_y() {
        let (mut bus, mag) = ready_mag();
        bus.set_u16(0x1e, 0x03, 230);
        bus.set_u16(0x1e, 0x05, 410);
        bus.set_u16(0x1e, 0x07, 460);
        bus.clear_transactions();

        let b = mag.run(&mut bus).unwrap().unwrap();
        assert!((b.x - 1.0).abs() < 1e-12);
        assert!((b.y - 2.0).abs() < 1e-12);
        assert!((b.z - 2.0).abs() < 1e-12);

        let reads: Vec<u8> = bus
            .transactions()
            .iter()
            .filter_map(|t| match t {
                I2cTransaction::Read { register, .. } => Some(*register),
                _ => None,
            })
            .collect();
        assert_eq!(reads, vec![0x09, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
    }

    #[test]
    fn test_all_ones_is_minus_one_lsb() {
        let (mut bus, mag) = ready_mag();
        bus.set_u16(0x1e, 0x03, 0xFFFF);
        bus.set_u16(0x1e, 0x05, 0xFFFF);
        bus.set_u16(0x1e, 0x07, 0xFFFF);

        let b = mag.run(&mut bus).unwrap().unwrap();
        assert!((b.x + 1.0 / 230.0).abs() < 1e-12);
        assert!((b.y + 1.0 / 230.0).abs() < 1e-12);
        assert!((b.z + 1.0 / 205.0).abs() < 1e-12);
    }

    #[test]
    fn test_not_ready_returns_none() {
        let (mut bus, mag) = ready_mag();
        bus.set_register(0x1e, 0x09, 0x00);
        assert_eq!(mag.run(&mut bus).unwrap(), None);
    }

    #[test]
    fn test_select_failure() {
        let (mut bus, mag) = ready_mag();
        bus.fail_after(0);
        let err = mag.run(&mut bus).unwrap_err();
        assert!(matches!(
            err,
            RunError::Bus {
                device: Device::Magnetometer,
                stage: "select",
                ..
            }
        ));
        assert!(mag.run(&mut bus).unwrap().is_some());
    }
}
