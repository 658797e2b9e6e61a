use rppal::i2c::I2c;

use crate::Result;

/// Addressed register access on a shared serial bus. One transaction per
/// call; the call blocks until the bus completes or reports a failure.
pub trait RegisterBus {
    fn write_register(&mut self, addr: u16, reg: u8, bytes: &[u8]) -> Result<()>;
    fn read_register(&mut self, addr: u16, reg: u8, buf: &mut [u8]) -> Result<()>;
}

impl RegisterBus for I2c {
    fn write_register(&mut self, addr: u16, reg: u8, bytes: &[u8]) -> Result<()> {
        self.set_slave_address(addr)?;
        let mut frame = Vec::with_capacity(1 + bytes.len());
        frame.push(reg);
        frame.extend_from_slice(bytes);
        self.write(&frame)?;
        Ok(())
    }

    fn read_register(&mut self, addr: u16, reg: u8, buf: &mut [u8]) -> Result<()> {
        self.set_slave_address(addr)?;
        self.write_read(&[reg], buf)?;
        Ok(())
    }
}
