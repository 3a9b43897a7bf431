use serde::{Deserialize, Serialize};

/// A single 3-axis accelerometer reading, timestamped by the sensor clock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MotionSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub timestamp_ns: i64,
}

impl MotionSample {
    pub fn new(x: f32, y: f32, z: f32, timestamp_ns: i64) -> Self {
        Self {
            x,
            y,
            z,
            timestamp_ns,
        }
    }

    /// Malformed samples (NaN/infinite axes) are dropped at ingestion
    /// rather than propagated into the window or accumulator.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
