use std::thread;
use std::time::Duration;

use crate::bus::RegisterBus;
use crate::indicator::{Indicators, OutputLine};
use crate::mpu6050::Mpu6050;
use crate::sample::ImuSample;
use crate::Result;

/// Wall-clock spacing between cycle starts.
pub const POLL_INTERVAL: Duration = Duration::from_secs(3);

pub struct Monitor<B, L> {
    sensor: Mpu6050<B>,
    indicators: Indicators<L>,
    interval: Duration,
}

impl<B: RegisterBus, L: OutputLine> Monitor<B, L> {
    pub fn new(sensor: Mpu6050<B>, indicators: Indicators<L>, interval: Duration) -> Self {
        Monitor {
            sensor,
            indicators,
            interval,
        }
    }

    /// Wake the sensor once, then poll until `on_sample` returns false.
    /// Each cycle reads all six channels, drives the four lines, hands the
    /// sample to `on_sample`, then sleeps the interval. A bus failure ends
    /// the loop with the error; there is no retry.
    pub fn run(&mut self, mut on_sample: impl FnMut(&ImuSample) -> bool) -> Result<()> {
        self.sensor.wake()?;
        loop {
            let sample = self.cycle()?;
            if !on_sample(&sample) {
                return Ok(());
            }
            thread::sleep(self.interval);
        }
    }

    /// One poll cycle without the wait. All six reads complete before any
    /// line is driven, so a failed read leaves every line untouched.
    pub fn cycle(&mut self) -> Result<ImuSample> {
        let raw = self.sensor.read_raw_imu()?;
        let sample = ImuSample::from_raw(&raw);
        self.indicators.update(&sample);
        Ok(sample)
    }
}
