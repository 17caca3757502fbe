//! LSM303DLHC Register Definitions
//!
//! Based on the LSM303DLHC datasheet (DocID018771).

// ============================================================================
// Accelerometer
// ============================================================================

/// Accelerometer I2C address
pub const ACC_ADDR: u16 = 0x19;

/// Output data rate, power mode, axis enable
pub const CTRL_REG1_A: u8 = 0x20;
/// High-pass filter
pub const CTRL_REG2_A: u8 = 0x21;
/// INT1 sources
pub const CTRL_REG3_A: u8 = 0x22;
/// Block update, endianness, full scale, high resolution
pub const CTRL_REG4_A: u8 = 0x23;
/// Boot, FIFO, interrupt latch
pub const CTRL_REG5_A: u8 = 0x24;
/// INT2 sources
pub const CTRL_REG6_A: u8 = 0x25;
/// FIFO mode
pub const FIFO_CTRL_REG_A: u8 = 0x2e;

pub const STATUS_REG_A: u8 = 0x27;

/// X, Y and Z axis new data available
pub const STATUS_ZYXDA: u8 = 1 << 3;

pub const OUT_X_A: u8 = 0x28;
pub const OUT_Y_A: u8 = 0x2a;
pub const OUT_Z_A: u8 = 0x2c;

/// 400 Hz, normal mode, all axes enabled
pub const CTRL_REG1_A_VALUE: u8 = 0x97;

/// Block data update, big endian, ±16 g, high resolution
pub const CTRL_REG4_A_VALUE: u8 = 0xF8;

/// Standard gravity, m/s²
pub const GRAVITY: f64 = 9.80665;

/// m/s² per LSB: 12 mg per digit at ±16 g, data left-aligned by 4 bits
pub const ACC_SCALE: f64 = GRAVITY * 12.0 / (16.0 * 1000.0);

// ============================================================================
// Magnetometer
// ============================================================================

/// Magnetometer I2C address
pub const MAG_ADDR: u16 = 0x1e;

/// Temperature sensor enable, output rate
pub const CRA_REG_M: u8 = 0x00;
/// Gain
pub const CRB_REG_M: u8 = 0x01;
/// Operating mode
pub const MR_REG_M: u8 = 0x02;

/// Output registers in chip order: X, Z, Y
pub const OUT_X_M: u8 = 0x03;
pub const OUT_Z_M: u8 = 0x05;
pub const OUT_Y_M: u8 = 0x07;

pub const SR_REG_M: u8 = 0x09;

/// Data output registers updated
pub const SR_DRDY: u8 = 1 << 0;

/// 15 Hz output rate
pub const CRA_REG_M_VALUE: u8 = 0x1C;

/// ±8.1 gauss
pub const CRB_REG_M_VALUE: u8 = 0xE0;

/// Continuous conversion
pub const MR_CONTINUOUS: u8 = 0x00;

/// LSB per gauss at ±8.1 gauss, X and Y
pub const MAG_GAIN_XY: f64 = 230.0;

/// LSB per gauss at ±8.1 gauss, Z
pub const MAG_GAIN_Z: f64 = 205.0;
