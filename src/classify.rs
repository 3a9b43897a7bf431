//! Deterministic gesture classification.
//!
//! An ordered decision list over the feature tuple: multi-touch first, then
//! tap-range movements, quick directional swipes, sustained long-distance
//! moves, and finally the residual bucket. The first matching rule wins.
//! Thresholds are fixed constants; identical feature tuples always yield
//! the identical label.

use crate::models::GestureCategory;

/// Below this displacement a single-pointer gesture counts as a tap variant.
const TAP_DISTANCE_MAX_PX: f64 = 10.0;
/// Above this displacement a gesture is a directional move.
const MOVE_DISTANCE_MIN_PX: f64 = 50.0;
/// Taps shorter than this are plain taps, longer than `LONG_PRESS_MIN_SEC`
/// are long presses; the band between maps to double-tap.
const TAP_DURATION_MAX_SEC: f64 = 0.3;
const LONG_PRESS_MIN_SEC: f64 = 0.5;
/// Moves faster than this duration bound are swipes, slower ones drags/pans.
const SWIPE_DURATION_MAX_SEC: f64 = 0.5;
const DRAG_SPEED_MAX_PX_PER_SEC: f64 = 800.0;
const FLING_SPEED_MIN_PX_PER_SEC: f64 = 1200.0;
const FLING_DISTANCE_MIN_PX: f64 = 200.0;
const EDGE_SWIPE_DISTANCE_MIN_PX: f64 = 300.0;
const EDGE_SWIPE_DURATION_MIN_SEC: f64 = 1.0;

pub fn classify(
    distance: f64,
    speed: f64,
    angle_deg: f64,
    duration_sec: f64,
    pointer_count: u32,
) -> GestureCategory {
    if pointer_count > 1 {
        return if pointer_count == 2 && distance > MOVE_DISTANCE_MIN_PX {
            GestureCategory::PinchZoom
        } else if pointer_count == 2 {
            GestureCategory::TwoFingerGesture
        } else if pointer_count > 2 {
            GestureCategory::MultiFingerGesture
        } else {
            GestureCategory::MultiTouch
        };
    }

    if distance < TAP_DISTANCE_MAX_PX {
        return if duration_sec < TAP_DURATION_MAX_SEC {
            GestureCategory::Tap
        } else if duration_sec > LONG_PRESS_MIN_SEC {
            GestureCategory::LongPress
        } else {
            GestureCategory::DoubleTap
        };
    }

    // Quick directional movements. Boundary angles (exactly 30, 150, ...)
    // fall through to the plain Swipe arm; the interval checks are closed.
    if distance > MOVE_DISTANCE_MIN_PX && duration_sec < SWIPE_DURATION_MAX_SEC {
        return if angle_deg.abs() < 30.0 {
            GestureCategory::SwipeRight
        } else if (150.0..=210.0).contains(&angle_deg) || (-210.0..=-150.0).contains(&angle_deg) {
            GestureCategory::SwipeLeft
        } else if (60.0..=120.0).contains(&angle_deg) {
            GestureCategory::SwipeDown
        } else if (-120.0..=-60.0).contains(&angle_deg) {
            GestureCategory::SwipeUp
        } else {
            GestureCategory::Swipe
        };
    }

    // Sustained long-distance moves. Flick would require duration < 0.5s
    // here, but the swipe rule above already consumed that case.
    if distance > MOVE_DISTANCE_MIN_PX {
        return if duration_sec >= SWIPE_DURATION_MAX_SEC && speed < DRAG_SPEED_MAX_PX_PER_SEC {
            GestureCategory::Drag
        } else if duration_sec >= SWIPE_DURATION_MAX_SEC
            && (angle_deg.abs() < 45.0 || angle_deg.abs() > 135.0)
        {
            GestureCategory::Scroll
        } else if duration_sec >= SWIPE_DURATION_MAX_SEC {
            GestureCategory::Pan
        } else {
            GestureCategory::Flick
        };
    }

    if speed > FLING_SPEED_MIN_PX_PER_SEC && distance > FLING_DISTANCE_MIN_PX {
        GestureCategory::Fling
    } else if distance > EDGE_SWIPE_DISTANCE_MIN_PX && duration_sec > EDGE_SWIPE_DURATION_MIN_SEC {
        GestureCategory::EdgeSwipe
    } else {
        GestureCategory::ComplexGesture
    }
}
