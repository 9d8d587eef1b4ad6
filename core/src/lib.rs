//! Post-processing core for the LiDAR object detector.
//!
//! Takes the oriented boxes, scores and class ids reported by the detection
//! model for one sensor frame and turns them into the raw box list, 2D and 3D
//! obstacle lists and visualization markers consumed downstream. Every frame
//! runs validation, a single class-threshold filter, distance ranking and the
//! view encoders; nothing but configuration survives between frames.

pub mod encoding;
pub mod geometry;
pub mod interface;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use prelude::{PipelineConfig, PipelineError, PipelineResult, ViewEncoder};
pub use processing::{FrameOutput, FramePipeline};
