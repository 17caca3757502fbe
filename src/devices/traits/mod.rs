//! Device trait definitions
//!
//! Shared capabilities of the sensor drivers:
//! - `ready`: how a driver learns that a new sample exists
//! - `axes`: reading and scaling three signed 16-bit axis registers

pub mod axes;
pub mod ready;

pub use axes::{AxisRegisters, AxisScale};
pub use ready::{ConversionPin, ReadinessSource, StatusBit};
