use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TouchPhase {
    Down,
    Up,
    Cancel,
}

/// One event from the platform's touch dispatch. `touch_major`/`touch_minor`
/// are the axes of the contact ellipse in pixels; `pointer_count` is the
/// number of pointers on screen when the event fired.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub x: f32,
    pub y: f32,
    pub touch_major: f32,
    pub touch_minor: f32,
    pub pointer_count: u32,
    pub wall_time_ms: i64,
}

impl TouchEvent {
    pub fn down(x: f32, y: f32, wall_time_ms: i64) -> Self {
        Self {
            phase: TouchPhase::Down,
            x,
            y,
            touch_major: 0.0,
            touch_minor: 0.0,
            pointer_count: 1,
            wall_time_ms,
        }
    }

    pub fn up(
        x: f32,
        y: f32,
        touch_major: f32,
        touch_minor: f32,
        pointer_count: u32,
        wall_time_ms: i64,
    ) -> Self {
        Self {
            phase: TouchPhase::Up,
            x,
            y,
            touch_major,
            touch_minor,
            pointer_count,
            wall_time_ms,
        }
    }
}
