//! Platform abstraction layer
//!
//! This module provides the register-level I/O the drivers are written against.
//! All host-specific code (i2c-dev ioctls, sysfs GPIO files) is isolated here.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "linux")]
pub mod linux;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{BusError, Result};
pub use traits::{ReadyPin, RegisterIo};
