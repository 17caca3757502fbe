//! Error reporting helpers

use std::error::Error;

/// Render an error and all of its sources as `outer: inner: os error`
pub fn report(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::error::{Device, RunError};
    use crate::platform::BusError;
    use std::io;

    #[test]
    fn test_report_walks_source_chain() {
        let err = RunError::during(Device::Barometer, "read pressure")(BusError::Read {
            register: 0xf8,
            source: io::Error::other("Remote I/O error"),
        });
        assert_eq!(
            report(&err),
            "bmp085: read pressure: read register 0xf8: Remote I/O error"
        );
    }

    #[test]
    fn test_report_without_source() {
        let err = RunError::Latched(Device::Barometer);
        assert_eq!(report(&err), "bmp085: stopped after an earlier failure");
    }
}
