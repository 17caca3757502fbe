//! Readiness sources
//!
//! The chips announce new data in two different ways, kept as two distinct
//! implementations of one capability:
//!
//! - [`ConversionPin`]: a dedicated end-of-conversion output wired to a GPIO
//!   (BMP085). Polling does not touch the bus.
//! - [`StatusBit`]: a data-ready flag in an on-chip status register
//!   (L3GD20, LSM303DLHC). Polling is one register read on the selected device.

use crate::platform::{traits::ReadyPin, RegisterIo, Result};

/// Something that can be asked whether a new sample is available
pub trait ReadinessSource {
    /// Poll once without waiting
    ///
    /// Status-register sources read through `bus` and expect their device to
    /// be selected already; pin sources ignore it.
    fn is_ready<B: RegisterIo + ?Sized>(&mut self, bus: &mut B) -> Result<bool>;
}

/// End-of-conversion line read through a [`ReadyPin`]
#[derive(Debug)]
pub struct ConversionPin<P> {
    pin: P,
}

impl<P: ReadyPin> ConversionPin<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give the pin back, e.g. to close it explicitly
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: ReadyPin> ReadinessSource for ConversionPin<P> {
    fn is_ready<B: RegisterIo + ?Sized>(&mut self, _bus: &mut B) -> Result<bool> {
        self.pin.poll_ready()
    }
}

/// Data-ready flag in a status register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBit {
    /// Status register address
    pub register: u8,
    /// Bit(s) that must be set for new data
    pub mask: u8,
}

impl StatusBit {
    pub const fn new(register: u8, mask: u8) -> Self {
        Self { register, mask }
    }

    /// Whether a raw status byte has the flag set
    pub fn is_set(&self, status: u8) -> bool {
        status & self.mask == self.mask
    }
}

impl ReadinessSource for StatusBit {
    fn is_ready<B: RegisterIo + ?Sized>(&mut self, bus: &mut B) -> Result<bool> {
        let status = bus.read_u8(self.register)?;
        Ok(self.is_set(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockI2c, MockReadyPin};

    #[test]
    fn test_status_bit_reads_register() {
        let mut bus = MockI2c::new();
        bus.set_register(0x6b, 0x27, 0b0000_1000);
        bus.select_device(0x6b).unwrap();

        let mut flag = StatusBit::new(0x27, 1 << 3);
        assert!(flag.is_ready(&mut bus).unwrap());

        bus.set_register(0x6b, 0x27, 0b1111_0111);
        assert!(!flag.is_ready(&mut bus).unwrap());
    }

    #[test]
    fn test_conversion_pin_does_not_touch_bus() {
        let mut bus = MockI2c::new();
        let (pin, handle) = MockReadyPin::new();
        let mut source = ConversionPin::new(pin);

        assert!(!source.is_ready(&mut bus).unwrap());
        handle.set_ready(true);
        assert!(source.is_ready(&mut bus).unwrap());

        assert!(bus.transactions().is_empty());
    }
}
