//! L3GD20 Register Definitions
//!
//! Based on the L3GD20 datasheet (DocID022116).

/// L3GD20 I2C address (SDO high)
pub const L3GD20_ADDR: u16 = 0x6b;

/// Control register 1: output data rate, bandwidth, power, axis enable
pub const CTRL_REG1: u8 = 0x20;

/// Control register 2: high-pass filter
pub const CTRL_REG2: u8 = 0x21;

/// Control register 3: interrupt pins
pub const CTRL_REG3: u8 = 0x22;

/// Control register 4: block update, endianness, full scale
pub const CTRL_REG4: u8 = 0x23;

/// Control register 5: FIFO, high-pass enable
pub const CTRL_REG5: u8 = 0x24;

/// FIFO control
pub const FIFO_CTRL_REG: u8 = 0x2e;

/// Status register
pub const STATUS_REG: u8 = 0x27;

/// X, Y and Z axis new data available
pub const STATUS_ZYXDA: u8 = 1 << 3;

/// Angular rate output, two registers per axis
pub const OUT_X: u8 = 0x28;
pub const OUT_Y: u8 = 0x2a;
pub const OUT_Z: u8 = 0x2c;

/// 760 Hz ODR, 100 Hz cut-off, normal mode, all axes enabled
pub const CTRL_REG1_VALUE: u8 = 0xFF;

/// Block data update, big endian, ±2000 °/s
pub const CTRL_REG4_VALUE: u8 = 0xF0;

/// Sensitivity at ±2000 °/s, °/s per LSB
pub const SENSITIVITY_DPS: f64 = 70.0 / 1000.0;
