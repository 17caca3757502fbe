//! i2c-dev register bus
//!
//! Uses SMBus byte transfers, one register per transaction, the access pattern
//! all four chips support.

use std::io;
use std::path::{Path, PathBuf};

use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;

use crate::platform::{traits::RegisterIo, BusError, Result};

/// One open i2c-dev bus descriptor
///
/// Device selection re-targets the same descriptor (`I2C_SLAVE` ioctl), so
/// every driver sharing the bus shares this one handle. The descriptor is
/// closed when the bus is dropped.
pub struct LinuxI2cBus {
    device: LinuxI2CDevice,
    path: PathBuf,
    selected: u16,
}

impl LinuxI2cBus {
    /// Open the bus device (e.g. `/dev/i2c-1`) addressed at `address`
    pub fn open(path: impl AsRef<Path>, address: u16) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let device = LinuxI2CDevice::new(&path, address).map_err(|e| BusError::Open {
            path: path.clone(),
            source: io::Error::from(e),
        })?;
        crate::log_debug!("opened {} at {:#04x}", path.display(), address);

        Ok(Self {
            device,
            path,
            selected: address,
        })
    }

    /// Path of the underlying character device
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RegisterIo for LinuxI2cBus {
    fn select_device(&mut self, address: u16) -> Result<()> {
        self.device
            .set_slave_address(address)
            .map_err(|e| BusError::Select {
                address,
                source: io::Error::from(e),
            })?;
        self.selected = address;
        crate::log_trace!("select {:#04x}", address);
        Ok(())
    }

    fn read_u8(&mut self, register: u8) -> Result<u8> {
        let value = self
            .device
            .smbus_read_byte_data(register)
            .map_err(|e| BusError::Read {
                register,
                source: io::Error::from(e),
            })?;
        crate::log_trace!("{:#04x}: read {:#04x} = {:#04x}", self.selected, register, value);
        Ok(value)
    }

    fn write_u8(&mut self, register: u8, value: u8) -> Result<()> {
        self.device
            .smbus_write_byte_data(register, value)
            .map_err(|e| BusError::Write {
                register,
                value,
                source: io::Error::from(e),
            })?;
        crate::log_trace!("{:#04x}: write {:#04x} = {:#04x}", self.selected, register, value);
        Ok(())
    }
}
