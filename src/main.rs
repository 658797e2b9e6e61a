use clap::Parser;
use rppal::gpio::Gpio;
use rppal::i2c::I2c;

use imu_indicator::indicator::Indicators;
use imu_indicator::monitor::{Monitor, POLL_INTERVAL};
use imu_indicator::mpu6050::Mpu6050;
use imu_indicator::Result;

// board wiring, BCM numbering
const RED_LED: u8 = 16; // accel x
const BLUE_LED: u8 = 17; // accel y
const YELLOW_LED: u8 = 15; // accel z
const WHITE_LED: u8 = 14; // gyro x

#[derive(Parser, Debug)]
struct Args {
    /// i2c bus the sensor sits on
    #[arg(long, default_value_t = 1)]
    bus: u8,

    /// emit one json object per sample instead of the readable report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let i2c = I2c::with_bus(args.bus)?;
    let gpio = Gpio::new()?;
    let indicators = Indicators::new(
        gpio.get(RED_LED)?.into_output_low(),
        gpio.get(BLUE_LED)?.into_output_low(),
        gpio.get(YELLOW_LED)?.into_output_low(),
        gpio.get(WHITE_LED)?.into_output_low(),
    );

    println!("polling mpu6050 on i2c bus {}", args.bus);
    let mut monitor = Monitor::new(Mpu6050::new(i2c), indicators, POLL_INTERVAL);
    monitor.run(|sample| {
        if args.json {
            println!("{}", serde_json::to_string(sample).unwrap());
        } else {
            println!("{}", sample.render());
        }
        true
    })
}
