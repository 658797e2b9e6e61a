use serde::Serialize;

/// LSB per g at the ±2g full-scale range.
pub const ACCEL_LSB_PER_G: f32 = 16384.0;
/// LSB per deg/s at the ±250 deg/s full-scale range.
pub const GYRO_LSB_PER_DEG_S: f32 = 131.0;

pub fn to_acceleration(raw: i32) -> f32 {
    raw as f32 / ACCEL_LSB_PER_G
}

pub fn to_angular_velocity(raw: i32) -> f32 {
    raw as f32 / GYRO_LSB_PER_DEG_S
}

/// One full register sweep, sign-corrected but still in sensor counts.
#[derive(Debug, Clone, Copy)]
pub struct RawImu {
    pub accel_x: i32,
    pub accel_y: i32,
    pub accel_z: i32,
    pub gyro_x: i32,
    pub gyro_y: i32,
    pub gyro_z: i32,
}

/// Acceleration in g, angular velocity in deg/s.
#[derive(Debug, Clone, Serialize)]
pub struct ImuSample {
    pub accel_x: f32,
    pub accel_y: f32,
    pub accel_z: f32,
    pub gyro_x: f32,
    pub gyro_y: f32,
    pub gyro_z: f32,
}

impl ImuSample {
    pub fn from_raw(raw: &RawImu) -> Self {
        ImuSample {
            accel_x: to_acceleration(raw.accel_x),
            accel_y: to_acceleration(raw.accel_y),
            accel_z: to_acceleration(raw.accel_z),
            gyro_x: to_angular_velocity(raw.gyro_x),
            gyro_y: to_angular_velocity(raw.gyro_y),
            gyro_z: to_angular_velocity(raw.gyro_z),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "accel: x={:.2}, y={:.2}, z={:.2}\ngyro: x={:.2}, y={:.2}, z={:.2}",
            self.accel_x, self.accel_y, self.accel_z, self.gyro_x, self.gyro_y, self.gyro_z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acceleration_full_scale() {
        assert_eq!(to_acceleration(16384), 1.0);
        assert_eq!(to_acceleration(-16384), -1.0);
        assert_eq!(to_acceleration(0), 0.0);
    }

    #[test]
    fn angular_velocity_full_scale() {
        assert_eq!(to_angular_velocity(131), 1.0);
        assert_eq!(to_angular_velocity(-262), -2.0);
    }

    #[test]
    fn from_raw_converts_every_channel() {
        let raw = RawImu {
            accel_x: 8192,
            accel_y: -16384,
            accel_z: 16384,
            gyro_x: 131,
            gyro_y: 0,
            gyro_z: -131,
        };
        let sample = ImuSample::from_raw(&raw);
        assert_eq!(sample.accel_x, 0.5);
        assert_eq!(sample.accel_y, -1.0);
        assert_eq!(sample.accel_z, 1.0);
        assert_eq!(sample.gyro_x, 1.0);
        assert_eq!(sample.gyro_y, 0.0);
        assert_eq!(sample.gyro_z, -1.0);
    }

    #[test]
    fn render_two_lines_two_decimals() {
        let sample = ImuSample {
            accel_x: 0.5,
            accel_y: -0.015625,
            accel_z: 1.0,
            gyro_x: 1.0,
            gyro_y: 0.0,
            gyro_z: -2.0,
        };
        assert_eq!(
            sample.render(),
            "accel: x=0.50, y=-0.02, z=1.00\ngyro: x=1.00, y=0.00, z=-2.00"
        );
    }
}
