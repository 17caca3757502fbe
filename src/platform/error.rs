//! Platform error types
//!
//! This module defines the error type for register I/O and ready-line polling.
//! Every variant keeps the operating-system error as its source so the full
//! cause chain can be rendered with [`crate::error::report`].

use std::io;
use std::path::PathBuf;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, BusError>;

/// Platform-level errors
///
/// All platform implementations map their OS-specific errors to these variants.
#[derive(Debug, thiserror::Error)]
pub enum BusError {
    /// Opening the bus device or the ready-line file failed
    #[error("open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Addressing a device on the bus failed
    #[error("select device {address:#04x}")]
    Select {
        address: u16,
        #[source]
        source: io::Error,
    },

    /// Reading a register failed
    #[error("read register {register:#04x}")]
    Read {
        register: u8,
        #[source]
        source: io::Error,
    },

    /// Writing a register failed
    #[error("write {value:#04x} to register {register:#04x}")]
    Write {
        register: u8,
        value: u8,
        #[source]
        source: io::Error,
    },

    /// Polling the conversion-done line failed
    #[error("poll ready line")]
    Ready {
        #[source]
        source: io::Error,
    },
}
