mod controller;
mod writer;

pub use controller::GesturePipeline;
