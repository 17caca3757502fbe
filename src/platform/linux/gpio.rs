//! sysfs GPIO ready line
//!
//! The line must already be exported and configured as an input; this module
//! only reads its `value` file.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use crate::platform::{traits::ReadyPin, BusError, Result};

/// sysfs value file of an exported GPIO, `{}` is the line number
pub const GPIO_VALUE_PATH: &str = "/sys/class/gpio/gpio{}/value";

/// Maximum bytes read from the value file per poll
const VALUE_BUF_LEN: usize = 100;

/// GPIO input read through its sysfs value file
///
/// The file stays open for the pin's lifetime and is rewound before every
/// read, since sysfs reports the current level only from offset 0.
#[derive(Debug)]
pub struct SysfsReadyPin {
    file: File,
}

impl SysfsReadyPin {
    /// Open the value file of GPIO line `gpio`
    pub fn open(gpio: u32) -> Result<Self> {
        Self::open_path(GPIO_VALUE_PATH.replace("{}", &gpio.to_string()))
    }

    /// Open an explicit value file
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| BusError::Open {
            path: path.clone(),
            source,
        })?;
        crate::log_debug!("opened ready line {}", path.display());
        Ok(Self { file })
    }

    fn read_level(&mut self) -> io::Result<bool> {
        self.file.seek(SeekFrom::Start(0))?;
        let mut buf = [0u8; VALUE_BUF_LEN];
        let count = self.file.read(&mut buf)?;
        Ok(is_high(&buf[..count]))
    }
}

impl ReadyPin for SysfsReadyPin {
    fn poll_ready(&mut self) -> Result<bool> {
        self.read_level().map_err(|source| BusError::Ready { source })
    }
}

/// A value file reads `"1\n"` when the line is high
fn is_high(contents: &[u8]) -> bool {
    contents.starts_with(b"1\n")
}
