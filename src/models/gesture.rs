//! Derived gesture data: the feature tuple computed once per finished
//! gesture, the classifier's closed label set, and the terminal record
//! appended to the gesture log.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinematic descriptors of one completed gesture. Computed once at
/// touch-up, immutable afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureFeatures {
    pub dx: f32,
    pub dy: f32,
    pub distance: f64,
    pub speed: f64,
    pub angle_deg: f64,
    /// Ellipse-area approximation of the touch contact, px².
    pub surface: f32,
    pub duration_sec: f64,
    /// Mean acceleration per axis over the trailing history window at
    /// gesture end (ambient motion before/around the touch).
    pub before_x: f32,
    pub before_y: f32,
    pub before_z: f32,
    /// Mean acceleration per axis over the samples captured while the
    /// gesture was active.
    pub during_x: f32,
    pub during_y: f32,
    pub during_z: f32,
    pub pointer_count: u32,
}

/// Every label the classifier can produce. `Flick` is kept for structural
/// fidelity with the rule table but is unreachable under the current
/// guards (the swipe rule already consumes every fast long-distance move).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GestureCategory {
    Tap,
    DoubleTap,
    LongPress,
    SwipeRight,
    SwipeLeft,
    SwipeUp,
    SwipeDown,
    Swipe,
    Drag,
    Scroll,
    Pan,
    Flick,
    Fling,
    EdgeSwipe,
    ComplexGesture,
    PinchZoom,
    TwoFingerGesture,
    MultiFingerGesture,
    MultiTouch,
}

impl GestureCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureCategory::Tap => "Tap",
            GestureCategory::DoubleTap => "Double Tap",
            GestureCategory::LongPress => "Long Press",
            GestureCategory::SwipeRight => "Swipe Right",
            GestureCategory::SwipeLeft => "Swipe Left",
            GestureCategory::SwipeUp => "Swipe Up",
            GestureCategory::SwipeDown => "Swipe Down",
            GestureCategory::Swipe => "Swipe",
            GestureCategory::Drag => "Drag",
            GestureCategory::Scroll => "Scroll",
            GestureCategory::Pan => "Pan",
            GestureCategory::Flick => "Flick",
            GestureCategory::Fling => "Fling",
            GestureCategory::EdgeSwipe => "Edge Swipe",
            GestureCategory::ComplexGesture => "Complex Gesture",
            GestureCategory::PinchZoom => "Pinch/Zoom",
            GestureCategory::TwoFingerGesture => "Two-Finger Gesture",
            GestureCategory::MultiFingerGesture => "Multi-Finger Gesture",
            GestureCategory::MultiTouch => "Multi-touch",
        }
    }
}

impl fmt::Display for GestureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal entity: written once per gesture to the log, never mutated or
/// re-read by the running process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureRecord {
    pub timestamp_ms: i64,
    pub start_x: f32,
    pub start_y: f32,
    pub features: GestureFeatures,
    pub category: GestureCategory,
}

impl GestureRecord {
    /// Serializes the record in the fixed column order of the log header.
    /// Distance/speed/angle and the axis means use 2 decimal places,
    /// duration uses 3; positional fields keep their natural formatting.
    pub fn csv_line(&self) -> String {
        let f = &self.features;
        format!(
            "{},{},{},{},{},{},{:.2},{:.2},{:.2},{:.3},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            self.timestamp_ms,
            self.start_x,
            self.start_y,
            f.dx,
            f.dy,
            f.surface,
            f.distance,
            f.speed,
            f.angle_deg,
            f.duration_sec,
            self.category,
            f.before_x,
            f.before_y,
            f.before_z,
            f.during_x,
            f.during_y,
            f.during_z,
        )
    }

    /// Human-readable projection shown by the presentation layer after
    /// each classification.
    pub fn summary(&self) -> String {
        let f = &self.features;
        format!(
            "Category: {}\n\
             StartX: {}\n\
             StartY: {}\n\
             Dx: {}\n\
             Dy: {}\n\
             Distance: {:.2}\n\
             Speed: {:.2}\n\
             Angle: {:.2}\n\
             Surface: {:.2}\n\
             Duration: {:.3}",
            self.category,
            self.start_x,
            self.start_y,
            f.dx,
            f.dy,
            f.distance,
            f.speed,
            f.angle_deg,
            f.surface,
            f.duration_sec,
        )
    }
}
