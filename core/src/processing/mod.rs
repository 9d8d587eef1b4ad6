pub mod filter;
pub mod pipeline;
pub mod ranking;
pub mod validation;

pub use filter::{ClassFilter, FilterDecision, FilterOutcome, ThresholdTable};
pub use pipeline::{FrameOutput, FramePipeline, FrameReport, FrameStage};
pub use ranking::{DistanceRanker, RankedDetection};
pub use validation::validate_detection;
