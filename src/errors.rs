pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    I2c(rppal::i2c::Error),
    Gpio(rppal::gpio::Error),
    UnknownDevice(u8),
}

impl From<rppal::i2c::Error> for Error {
    fn from(value: rppal::i2c::Error) -> Self {
        Error::I2c(value)
    }
}

impl From<rppal::gpio::Error> for Error {
    fn from(value: rppal::gpio::Error) -> Self {
        Error::Gpio(value)
    }
}
