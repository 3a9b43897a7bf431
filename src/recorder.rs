//! In-progress gesture state machine.
//!
//! `Idle` until a touch-down, `Active` until the matching touch-up or
//! cancel. While active, every arriving motion sample is accumulated so the
//! "during" features can be derived at gesture end.

use crate::models::MotionSample;

/// Snapshot of a completed gesture, read once and handed to feature
/// extraction.
#[derive(Debug, Clone)]
pub struct FinishedGesture {
    pub start_x: f32,
    pub start_y: f32,
    pub start_wall_ms: i64,
    pub during: Vec<MotionSample>,
}

#[derive(Debug, Default)]
pub struct GestureRecorder {
    active: bool,
    start_x: f32,
    start_y: f32,
    start_wall_ms: i64,
    during: Vec<MotionSample>,
}

impl GestureRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Touch-down: resets the accumulator and starts a new session.
    /// A second down while already active restarts the session rather than
    /// nesting; overlapping gestures are not modeled.
    pub fn begin(&mut self, x: f32, y: f32, wall_time_ms: i64) {
        self.start_x = x;
        self.start_y = y;
        self.start_wall_ms = wall_time_ms;
        self.during.clear();
        self.active = true;
    }

    /// Appends `sample` to the during-accumulator; no-op while idle.
    pub fn record(&mut self, sample: MotionSample) {
        if self.active {
            self.during.push(sample);
        }
    }

    /// Touch-up/cancel: deactivates and hands back the accumulated session.
    /// Returns `None` when no gesture was in progress (an up without a
    /// matching down is ignored).
    pub fn finish(&mut self) -> Option<FinishedGesture> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(FinishedGesture {
            start_x: self.start_x,
            start_y: self.start_y,
            start_wall_ms: self.start_wall_ms,
            during: std::mem::take(&mut self.during),
        })
    }
}
