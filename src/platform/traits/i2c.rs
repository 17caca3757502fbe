//! I2C register interface trait
//!
//! This module defines the register-level bus interface that platform
//! implementations must provide. Every driver in this crate is written against
//! it, never against a concrete bus.

use crate::platform::Result;

/// Register-level I2C interface
///
/// One implementation owns one open bus descriptor. Devices are addressed by
/// selecting them first; all subsequent register transactions go to the most
/// recently selected device.
///
/// # Safety Invariants
///
/// - Only one owner per bus instance
/// - No concurrent access to the same bus from multiple threads
/// - Address must be 7-bit (valid range: 0x00..=0x7F)
pub trait RegisterIo {
    /// Address the device that subsequent transactions go to
    ///
    /// # Errors
    ///
    /// Returns `BusError::Select` if the address cannot be set on the bus.
    fn select_device(&mut self, address: u16) -> Result<()>;

    /// Read one register of the selected device
    ///
    /// # Errors
    ///
    /// Returns `BusError::Read` if the device does not answer.
    fn read_u8(&mut self, register: u8) -> Result<u8>;

    /// Write one register of the selected device
    ///
    /// # Errors
    ///
    /// Returns `BusError::Write` if the device does not acknowledge.
    fn write_u8(&mut self, register: u8, value: u8) -> Result<()>;

    /// Read two consecutive registers as a big-endian word
    ///
    /// `register` holds the high byte, `register + 1` the low byte.
    fn read_u16(&mut self, register: u8) -> Result<u16> {
        let high = self.read_u8(register)?;
        let low = self.read_u8(register.wrapping_add(1))?;
        Ok(u16::from_be_bytes([high, low]))
    }

    /// Read three consecutive registers as a big-endian 24-bit value
    fn read_u24(&mut self, register: u8) -> Result<u32> {
        let b0 = self.read_u8(register)?;
        let b1 = self.read_u8(register.wrapping_add(1))?;
        let b2 = self.read_u8(register.wrapping_add(2))?;
        Ok(u32::from_be_bytes([0, b0, b1, b2]))
    }
}

impl<T: RegisterIo + ?Sized> RegisterIo for &mut T {
    fn select_device(&mut self, address: u16) -> Result<()> {
        (**self).select_device(address)
    }

    fn read_u8(&mut self, register: u8) -> Result<u8> {
        (**self).read_u8(register)
    }

    fn write_u8(&mut self, register: u8, value: u8) -> Result<()> {
        (**self).write_u8(register, value)
    }

    fn read_u16(&mut self, register: u8) -> Result<u16> {
        (**self).read_u16(register)
    }

    fn read_u24(&mut self, register: u8) -> Result<u32> {
        (**self).read_u24(register)
    }
}
