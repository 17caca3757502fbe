//! Register description and protocol shared by the three-axis chips

use nalgebra::Vector3;

use crate::devices::error::{ConstructionError, Device, RunError};
use crate::devices::traits::{AxisRegisters, AxisScale, ReadinessSource, StatusBit};
use crate::log_debug;
use crate::platform::RegisterIo;

/// Everything needed to configure and sample one three-axis chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisChip {
    /// Chip named in errors
    pub device: Device,
    /// 7-bit bus address
    pub address: u16,
    /// Register writes performed once at construction, in order
    pub init: &'static [(u8, u8)],
    /// Data-ready flag
    pub ready: StatusBit,
    /// Axis output registers
    pub axes: AxisRegisters,
}

impl AxisChip {
    /// Select the chip and write the configuration sequence
    ///
    /// Stops at the first failing write.
    pub fn configure<B: RegisterIo + ?Sized>(&self, bus: &mut B) -> Result<(), ConstructionError> {
        bus.select_device(self.address)
            .map_err(ConstructionError::during(self.device, "select"))?;
        for &(register, value) in self.init {
            bus.write_u8(register, value)
                .map_err(ConstructionError::during(self.device, "configure"))?;
        }
        log_debug!(
            "{}: configured at {:#04x} ({} registers)",
            self.device,
            self.address,
            self.init.len()
        );
        Ok(())
    }

    /// Read one sample if the chip reports new data
    ///
    /// Keeps no state between calls, so a failure has no effect on the next
    /// call.
    pub fn sample<B: RegisterIo + ?Sized>(
        &self,
        bus: &mut B,
        scale: &AxisScale,
    ) -> Result<Option<Vector3<f64>>, RunError> {
        bus.select_device(self.address)
            .map_err(RunError::during(self.device, "select"))?;

        let mut ready = self.ready;
        if !ready
            .is_ready(bus)
            .map_err(RunError::during(self.device, "read status"))?
        {
            return Ok(None);
        }

        let raw = self
            .axes
            .read_raw(bus)
            .map_err(RunError::during(self.device, "read axes"))?;
        Ok(Some(scale.apply(raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockI2c;

    const CHIP: AxisChip = AxisChip {
        device: Device::Accelerometer,
        address: 0x19,
        init: &[(0x20, 0x97), (0x23, 0xF8)],
        ready: StatusBit::new(0x27, 0x08),
        axes: AxisRegisters::xyz(0x28, 0x2a, 0x2c),
    };

    #[test]
    fn test_configure_stops_at_first_failure() {
        let mut bus = MockI2c::new();
        bus.fail_register(0x19, 0x20);

        let err = CHIP.configure(&mut bus).unwrap_err();
        assert_eq!(err.to_string(), "lsm303dlhc-acc: configure");
        assert_eq!(bus.transactions().len(), 2);
    }

    #[test]
    fn test_sample_not_ready_reads_status_only() {
        let mut bus = MockI2c::new();
        bus.set_register(0x19, 0x27, 0x07);

        let sample = CHIP.sample(&mut bus, &AxisScale::uniform(1.0)).unwrap();
        assert_eq!(sample, None);
        // select + status read
        assert_eq!(bus.transactions().len(), 2);
    }

    #[test]
    fn test_sample_scales_axes() {
        let mut bus = MockI2c::new();
        bus.set_register(0x19, 0x27, 0x08);
        bus.set_u16(0x19, 0x28, 2);
        bus.set_u16(0x19, 0x2a, 0xFFFE);
        bus.set_u16(0x19, 0x2c, 4);

        let sample = CHIP
            .sample(&mut bus, &AxisScale::uniform(0.5))
            .unwrap()
            .unwrap();
        assert_eq!(sample, Vector3::new(1.0, -1.0, 2.0));
    }
}
