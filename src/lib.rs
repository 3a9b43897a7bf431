pub mod classify;
pub mod features;
pub mod feed;
pub mod history;
pub mod models;
pub mod pipeline;
pub mod recorder;
pub mod settings;
pub mod sink;

pub use models::{GestureCategory, GestureFeatures, GestureRecord, MotionSample, TouchEvent, TouchPhase};
pub use pipeline::GesturePipeline;
pub use sink::GestureLog;
