//! Three-axis sample helpers
//!
//! Each axis is a 16-bit two's complement value spread over two registers.
//! Chips lay their axis registers out differently, so the read order is part
//! of the register description.

use nalgebra::Vector3;

use crate::platform::{RegisterIo, Result};

/// Register of the first byte of each axis, in the order they are read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRegisters {
    pub x: u8,
    pub y: u8,
    pub z: u8,
    /// Read X, then Z, then Y (LSM303DLHC magnetometer layout)
    pub xzy_order: bool,
}

impl AxisRegisters {
    /// Axes stored in X, Y, Z order
    pub const fn xyz(x: u8, y: u8, z: u8) -> Self {
        Self {
            x,
            y,
            z,
            xzy_order: false,
        }
    }

    /// Axes stored in X, Z, Y order
    pub const fn xzy(x: u8, z: u8, y: u8) -> Self {
        Self {
            x,
            y,
            z,
            xzy_order: true,
        }
    }

    /// Read the raw words of all three axes from the selected device
    ///
    /// Each word is reinterpreted as signed, so `0xFFFF` becomes `-1`.
    pub fn read_raw<B: RegisterIo + ?Sized>(&self, bus: &mut B) -> Result<Vector3<i16>> {
        let (x, y, z) = if self.xzy_order {
            let x = bus.read_u16(self.x)?;
            let z = bus.read_u16(self.z)?;
            let y = bus.read_u16(self.y)?;
            (x, y, z)
        } else {
            let x = bus.read_u16(self.x)?;
            let y = bus.read_u16(self.y)?;
            let z = bus.read_u16(self.z)?;
            (x, y, z)
        };
        Ok(Vector3::new(x as i16, y as i16, z as i16))
    }
}

/// Per-axis conversion factor from LSB to physical unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale(pub Vector3<f64>);

impl AxisScale {
    /// Same factor on all axes
    pub fn uniform(scale: f64) -> Self {
        Self(Vector3::repeat(scale))
    }

    /// Separate factors for X/Y and Z
    pub fn xy_z(xy: f64, z: f64) -> Self {
        Self(Vector3::new(xy, xy, z))
    }

    /// Convert raw axis values
    pub fn apply(&self, raw: Vector3<i16>) -> Vector3<f64> {
        raw.map(f64::from).component_mul(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{I2cTransaction, MockI2c};

    #[test]
    fn test_read_raw_reinterprets_signed() {
        let mut bus = MockI2c::new();
        bus.set_u16(0x19, 0x28, 0xFFFF);
        bus.set_u16(0x19, 0x2a, 0x8000);
        bus.set_u16(0x19, 0x2c, 0x7FFF);
        bus.select_device(0x19).unwrap();

        let raw = AxisRegisters::xyz(0x28, 0x2a, 0x2c).read_raw(&mut bus).unwrap();
        assert_eq!(raw, Vector3::new(-1, i16::MIN, i16::MAX));
    }

    #[test]
    fn test_read_raw_xzy_order() {
        let mut bus = MockI2c::new();
        bus.set_u16(0x1e, 0x03, 1);
        bus.set_u16(0x1e, 0x05, 3);
        bus.set_u16(0x1e, 0x07, 2);
        bus.select_device(0x1e).unwrap();
        bus.clear_transactions();

        let raw = AxisRegisters::xzy(0x03, 0x05, 0x07).read_raw(&mut bus).unwrap();
        assert_eq!(raw, Vector3::new(1, 2, 3));

        let first_bytes: Vec<u8> = bus
            .transactions()
            .iter()
            .filter_map(|t| match t {
                I2cTransaction::Read { register, .. } if register % 2 == 1 => Some(*register),
                _ => None,
            })
            .collect();
        assert_eq!(first_bytes, vec![0x03, 0x05, 0x07]);
    }

    #[test]
    fn test_scale_apply() {
        let scale = AxisScale::xy_z(0.5, 0.25);
        let value = scale.apply(Vector3::new(-2, 4, 8));
        assert_eq!(value, Vector3::new(-1.0, 2.0, 2.0));
    }
}
