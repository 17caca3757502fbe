//! Mock I2C implementation for testing

use std::collections::HashMap;
use std::io;

use crate::platform::{traits::RegisterIo, BusError, Result};

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Device selection
    Select { addr: u16 },
    /// Single register read
    Read { addr: u16, register: u8 },
    /// Single register write
    Write { addr: u16, register: u8, value: u8 },
}

/// Mock I2C bus
///
/// Models one register file per 7-bit address, records all transactions for
/// test verification and can be told to fail specific transactions.
///
/// Unset registers read as zero. Writes are stored, so a register can be read
/// back after the driver wrote it.
#[derive(Debug, Default)]
pub struct MockI2c {
    selected: Option<u16>,
    registers: HashMap<(u16, u8), u8>,
    transactions: Vec<I2cTransaction>,
    /// Fail the transaction after this many successful ones (one-shot)
    fail_after: Option<usize>,
    /// Registers whose reads and writes always fail
    failing_registers: Vec<(u16, u8)>,
}

impl MockI2c {
    /// Create a new mock bus with an empty register file
    pub fn new() -> Self {
        Self::default()
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> &[I2cTransaction] {
        &self.transactions
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Writes in the transaction log as `(addr, register, value)`
    pub fn writes(&self) -> Vec<(u16, u8, u8)> {
        self.transactions
            .iter()
            .filter_map(|t| match *t {
                I2cTransaction::Write {
                    addr,
                    register,
                    value,
                } => Some((addr, register, value)),
                _ => None,
            })
            .collect()
    }

    /// Set one register of the device at `addr`
    pub fn set_register(&mut self, addr: u16, register: u8, value: u8) {
        self.registers.insert((addr, register), value);
    }

    /// Set consecutive registers starting at `register`
    pub fn set_registers(&mut self, addr: u16, register: u8, values: &[u8]) {
        for (offset, value) in values.iter().enumerate() {
            self.set_register(addr, register.wrapping_add(offset as u8), *value);
        }
    }

    /// Set a big-endian word at `register`/`register + 1`
    pub fn set_u16(&mut self, addr: u16, register: u8, value: u16) {
        self.set_registers(addr, register, &value.to_be_bytes());
    }

    /// Set a big-endian 24-bit value at `register`..`register + 2`
    pub fn set_u24(&mut self, addr: u16, register: u8, value: u32) {
        self.set_registers(addr, register, &value.to_be_bytes()[1..]);
    }

    /// Get the current value of a register
    pub fn register(&self, addr: u16, register: u8) -> u8 {
        self.registers.get(&(addr, register)).copied().unwrap_or(0)
    }

    /// Let `count` transactions succeed, then fail the next one
    pub fn fail_after(&mut self, count: usize) {
        self.fail_after = Some(count);
    }

    /// Make every access to `register` of `addr` fail until cleared
    pub fn fail_register(&mut self, addr: u16, register: u8) {
        self.failing_registers.push((addr, register));
    }

    /// Remove all pending fault injections
    pub fn clear_faults(&mut self) {
        self.fail_after = None;
        self.failing_registers.clear();
    }

    /// Consume the one-shot fault counter, returning true if this transaction fails
    fn injected_fault(&mut self) -> bool {
        match self.fail_after {
            Some(0) => {
                self.fail_after = None;
                true
            }
            Some(n) => {
                self.fail_after = Some(n - 1);
                false
            }
            None => false,
        }
    }

    fn register_fault(&self, register: u8) -> bool {
        self.selected
            .is_some_and(|addr| self.failing_registers.contains(&(addr, register)))
    }

    fn target(&self) -> io::Result<u16> {
        self.selected
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "no device selected"))
    }
}

fn fault() -> io::Error {
    io::Error::other("injected fault")
}

impl RegisterIo for MockI2c {
    fn select_device(&mut self, address: u16) -> Result<()> {
        self.transactions
            .push(I2cTransaction::Select { addr: address });
        if self.injected_fault() {
            return Err(BusError::Select {
                address,
                source: fault(),
            });
        }
        self.selected = Some(address);
        Ok(())
    }

    fn read_u8(&mut self, register: u8) -> Result<u8> {
        let addr = self
            .target()
            .map_err(|source| BusError::Read { register, source })?;
        self.transactions
            .push(I2cTransaction::Read { addr, register });

        if self.injected_fault() || self.register_fault(register) {
            return Err(BusError::Read {
                register,
                source: fault(),
            });
        }
        Ok(self.register(addr, register))
    }

    fn write_u8(&mut self, register: u8, value: u8) -> Result<()> {
        let addr = self.target().map_err(|source| BusError::Write {
            register,
            value,
            source,
        })?;
        self.transactions.push(I2cTransaction::Write {
            addr,
            register,
            value,
        });

        if self.injected_fault() || self.register_fault(register) {
            return Err(BusError::Write {
                register,
                value,
                source: fault(),
            });
        }
        self.set_register(addr, register, value);
        Ok(())
    }
}
