pub mod gesture;
pub mod sample;
pub mod touch;

pub use gesture::{GestureCategory, GestureFeatures, GestureRecord};
pub use sample::MotionSample;
pub use touch::{TouchEvent, TouchPhase};
