use crate::bus::RegisterBus;
use crate::sample::RawImu;
use crate::{Error, Result};

pub const MPU6050_ADDR: u16 = 0x68;

pub const PWR_MGMT_1: u8 = 0x6B;
pub const WHO_AM_I: u8 = 0x75;
pub const ACCEL_XOUT_H: u8 = 0x3B;
pub const GYRO_XOUT_H: u8 = 0x43;

/// WHO_AM_I reads back the device address bits.
pub const WHO_AM_I_VALUE: u8 = 0x68;

/// Sign correction for a big-endian register pair. Compositions strictly
/// above 32768 wrap negative; 0x8000 itself stays positive, which is why
/// the result is an `i32`.
pub fn decode(value: u16) -> i32 {
    let value = value as i32;
    if value > 32768 {
        value - 65536
    } else {
        value
    }
}

pub struct Mpu6050<B> {
    bus: B,
}

impl<B: RegisterBus> Mpu6050<B> {
    pub fn new(bus: B) -> Self {
        Mpu6050 { bus }
    }

    /// Probe the device identity, then clear the sleep bit. Must run once
    /// before the first data read; polling an unconfirmed device is an error.
    pub fn wake(&mut self) -> Result<()> {
        let mut id = [0u8; 1];
        self.bus.read_register(MPU6050_ADDR, WHO_AM_I, &mut id)?;
        if id[0] != WHO_AM_I_VALUE {
            return Err(Error::UnknownDevice(id[0]));
        }
        self.bus.write_register(MPU6050_ADDR, PWR_MGMT_1, &[0x00])?;
        Ok(())
    }

    /// Read the high/low register pair at `reg`, `reg + 1` and sign-correct.
    pub fn read_raw(&mut self, reg: u8) -> Result<i32> {
        let mut high = [0u8; 1];
        let mut low = [0u8; 1];
        self.bus.read_register(MPU6050_ADDR, reg, &mut high)?;
        self.bus.read_register(MPU6050_ADDR, reg + 1, &mut low)?;
        Ok(decode(u16::from_be_bytes([high[0], low[0]])))
    }

    /// One full sweep: accel x, y, z then gyro x, y, z.
    pub fn read_raw_imu(&mut self) -> Result<RawImu> {
        Ok(RawImu {
            accel_x: self.read_raw(ACCEL_XOUT_H)?,
            accel_y: self.read_raw(ACCEL_XOUT_H + 2)?,
            accel_z: self.read_raw(ACCEL_XOUT_H + 4)?,
            gyro_x: self.read_raw(GYRO_XOUT_H)?,
            gyro_y: self.read_raw(GYRO_XOUT_H + 2)?,
            gyro_z: self.read_raw(GYRO_XOUT_H + 4)?,
        })
    }
}
