//! Logging abstraction
//!
//! Provides unified logging macros for the whole crate. All of them forward to
//! the [`log`] facade, so the host application picks the backend:
//! - The `i2c-sensors` binary installs `env_logger` (`RUST_LOG=debug`)
//! - Library users install whatever logger they already use
//! - Without a logger every macro is a no-op
//!
//! The macros are exported so that the binary and integration tests log the
//! same way the drivers do:
//!
//! ```ignore
//! i2c_sensors::log_info!("opened {}", path.display());
//! ```

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!($($arg)*);
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!($($arg)*);
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!($($arg)*);
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!($($arg)*);
    }};
}

/// Log trace message (one line per register transaction)
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!($($arg)*);
    }};
}
