use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::rc::Rc;

use crate::bus::RegisterBus;
use crate::indicator::OutputLine;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Write { addr: u16, reg: u8, bytes: Vec<u8> },
    Read { addr: u16, reg: u8, len: usize },
}

#[derive(Default)]
struct Inner {
    registers: HashMap<u8, u8>,
    log: Vec<Transaction>,
    fail_after: Option<usize>,
}

/// Scripted register bus. Clones share state, so a test can keep a handle
/// to the log after handing the bus to a driver.
#[derive(Clone, Default)]
pub struct MockBus {
    inner: Rc<RefCell<Inner>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, base: u8, bytes: &[u8]) {
        let mut inner = self.inner.borrow_mut();
        for (i, b) in bytes.iter().enumerate() {
            inner.registers.insert(base + i as u8, *b);
        }
    }

    /// Let `n` transactions succeed, then fail every later one.
    pub fn fail_after(&mut self, n: usize) {
        self.inner.borrow_mut().fail_after = Some(n);
    }

    pub fn log(&self) -> Vec<Transaction> {
        self.inner.borrow().log.clone()
    }
}

fn bus_fault() -> Error {
    Error::I2c(rppal::i2c::Error::Io(io::Error::other("bus fault")))
}

impl RegisterBus for MockBus {
    fn write_register(&mut self, addr: u16, reg: u8, bytes: &[u8]) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if let Some(n) = inner.fail_after {
            if inner.log.len() >= n {
                return Err(bus_fault());
            }
        }
        inner.log.push(Transaction::Write {
            addr,
            reg,
            bytes: bytes.to_vec(),
        });
        for (i, b) in bytes.iter().enumerate() {
            inner.registers.insert(reg + i as u8, *b);
        }
        Ok(())
    }

    fn read_register(&mut self, addr: u16, reg: u8, buf: &mut [u8]) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if let Some(n) = inner.fail_after {
            if inner.log.len() >= n {
                return Err(bus_fault());
            }
        }
        inner.log.push(Transaction::Read {
            addr,
            reg,
            len: buf.len(),
        });
        for (i, slot) in buf.iter_mut().enumerate() {
            *slot = inner.registers.get(&(reg + i as u8)).copied().unwrap_or(0);
        }
        Ok(())
    }
}

/// Output line recording the last level written. `None` until first driven.
#[derive(Clone, Default)]
pub struct MockLine {
    state: Rc<Cell<Option<bool>>>,
}

impl MockLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<bool> {
        self.state.get()
    }
}

impl OutputLine for MockLine {
    fn set(&mut self, on: bool) {
        self.state.set(Some(on));
    }
}
