//! Feature extraction: turns a finished gesture plus a history snapshot
//! into the derived kinematic descriptors. Pure, no I/O, no failure modes;
//! expected-empty inputs fall back to zero.

use std::f64::consts::PI;

use crate::models::{GestureFeatures, MotionSample, TouchEvent};
use crate::recorder::FinishedGesture;

/// End-of-gesture inputs sourced from the final touch event.
#[derive(Debug, Clone, Copy)]
pub struct GestureEnd {
    pub x: f32,
    pub y: f32,
    pub touch_major: f32,
    pub touch_minor: f32,
    pub pointer_count: u32,
    pub wall_time_ms: i64,
}

impl From<TouchEvent> for GestureEnd {
    fn from(event: TouchEvent) -> Self {
        Self {
            x: event.x,
            y: event.y,
            touch_major: event.touch_major,
            touch_minor: event.touch_minor,
            pointer_count: event.pointer_count,
            wall_time_ms: event.wall_time_ms,
        }
    }
}

pub fn extract(
    finished: &FinishedGesture,
    history_snapshot: &[MotionSample],
    end: GestureEnd,
) -> GestureFeatures {
    let dx = end.x - finished.start_x;
    let dy = end.y - finished.start_y;

    let dxd = f64::from(dx);
    let dyd = f64::from(dy);
    let distance = (dxd * dxd + dyd * dyd).sqrt();

    let duration_sec = (end.wall_time_ms - finished.start_wall_ms) as f64 / 1000.0;
    let speed = if duration_sec > 0.0 {
        distance / duration_sec
    } else {
        0.0
    };

    let angle_deg = dyd.atan2(dxd).to_degrees();
    let surface = (PI * f64::from(end.touch_major) * f64::from(end.touch_minor) / 4.0) as f32;

    let (before_x, before_y, before_z) = axis_means(history_snapshot);
    let (during_x, during_y, during_z) = axis_means(&finished.during);

    GestureFeatures {
        dx,
        dy,
        distance,
        speed,
        angle_deg,
        surface,
        duration_sec,
        before_x,
        before_y,
        before_z,
        during_x,
        during_y,
        during_z,
        pointer_count: end.pointer_count,
    }
}

/// Per-axis mean of a sample slice, or zeroes when empty.
fn axis_means(samples: &[MotionSample]) -> (f32, f32, f32) {
    if samples.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let n = samples.len() as f64;
    let (mut sx, mut sy, mut sz) = (0.0f64, 0.0f64, 0.0f64);
    for sample in samples {
        sx += f64::from(sample.x);
        sy += f64::from(sample.y);
        sz += f64::from(sample.z);
    }
    ((sx / n) as f32, (sy / n) as f32, (sz / n) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(start_x: f32, start_y: f32, start_wall_ms: i64) -> FinishedGesture {
        FinishedGesture {
            start_x,
            start_y,
            start_wall_ms,
            during: Vec::new(),
        }
    }

    fn end_at(x: f32, y: f32, wall_time_ms: i64) -> GestureEnd {
        GestureEnd {
            x,
            y,
            touch_major: 0.0,
            touch_minor: 0.0,
            pointer_count: 1,
            wall_time_ms,
        }
    }

    #[test]
    fn displacement_distance_and_speed() {
        let features = extract(&finished(10.0, 20.0, 1_000), &[], end_at(13.0, 24.0, 1_500));
        assert_eq!(features.dx, 3.0);
        assert_eq!(features.dy, 4.0);
        assert!((features.distance - 5.0).abs() < 1e-9);
        assert!((features.duration_sec - 0.5).abs() < 1e-9);
        assert!((features.speed - 10.0).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_yields_zero_speed() {
        let features = extract(&finished(0.0, 0.0, 1_000), &[], end_at(30.0, 40.0, 1_000));
        assert_eq!(features.speed, 0.0);
        assert!((features.distance - 50.0).abs() < 1e-9);
    }

    #[test]
    fn negative_duration_yields_zero_speed() {
        // Wall clock stepped backwards between down and up
        let features = extract(&finished(0.0, 0.0, 2_000), &[], end_at(10.0, 0.0, 1_000));
        assert_eq!(features.speed, 0.0);
    }

    #[test]
    fn angle_covers_all_quadrants() {
        let right = extract(&finished(0.0, 0.0, 0), &[], end_at(10.0, 0.0, 100));
        assert!((right.angle_deg - 0.0).abs() < 1e-9);

        let down = extract(&finished(0.0, 0.0, 0), &[], end_at(0.0, 10.0, 100));
        assert!((down.angle_deg - 90.0).abs() < 1e-9);

        let up = extract(&finished(0.0, 0.0, 0), &[], end_at(0.0, -10.0, 100));
        assert!((up.angle_deg + 90.0).abs() < 1e-9);

        let left = extract(&finished(0.0, 0.0, 0), &[], end_at(-10.0, 0.0, 100));
        assert!((left.angle_deg.abs() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn surface_is_contact_ellipse_area() {
        let end = GestureEnd {
            x: 0.0,
            y: 0.0,
            touch_major: 8.0,
            touch_minor: 4.0,
            pointer_count: 1,
            wall_time_ms: 100,
        };
        let features = extract(&finished(0.0, 0.0, 0), &[], end);
        let expected = (PI * 8.0 * 4.0 / 4.0) as f32;
        assert!((features.surface - expected).abs() < 1e-4);
    }

    #[test]
    fn empty_sources_default_axis_means_to_zero() {
        let features = extract(&finished(0.0, 0.0, 0), &[], end_at(0.0, 0.0, 100));
        assert_eq!(
            (features.before_x, features.before_y, features.before_z),
            (0.0, 0.0, 0.0)
        );
        assert_eq!(
            (features.during_x, features.during_y, features.during_z),
            (0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn axis_means_average_each_axis_independently() {
        let history = vec![
            MotionSample::new(1.0, 10.0, 100.0, 0),
            MotionSample::new(3.0, 20.0, 300.0, 1),
        ];
        let mut gesture = finished(0.0, 0.0, 0);
        gesture.during = vec![MotionSample::new(-2.0, 0.5, 9.8, 2)];

        let features = extract(&gesture, &history, end_at(0.0, 0.0, 100));
        assert!((features.before_x - 2.0).abs() < 1e-6);
        assert!((features.before_y - 15.0).abs() < 1e-6);
        assert!((features.before_z - 200.0).abs() < 1e-6);
        assert!((features.during_x + 2.0).abs() < 1e-6);
        assert!((features.during_y - 0.5).abs() < 1e-6);
        assert!((features.during_z - 9.8).abs() < 1e-6);
    }
}
