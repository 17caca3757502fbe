//! Ready-line interface trait
//!
//! Some chips signal "conversion done" on a dedicated output pin instead of an
//! on-chip status register. This module defines how such a pin is polled.

use crate::platform::Result;

/// Conversion-done input line
///
/// Polling never blocks: it reports the current level and returns.
///
/// # Safety Invariants
///
/// - Only one owner per pin instance
/// - The line is released when the owner is dropped
pub trait ReadyPin {
    /// Read the current level of the line
    ///
    /// Returns `true` if the device reports a finished conversion.
    ///
    /// # Errors
    ///
    /// Returns `BusError::Ready` if the line cannot be read.
    fn poll_ready(&mut self) -> Result<bool>;
}

impl<T: ReadyPin + ?Sized> ReadyPin for Box<T> {
    fn poll_ready(&mut self) -> Result<bool> {
        (**self).poll_ready()
    }
}
