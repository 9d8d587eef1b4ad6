use crate::interface::FrameHeader;
use crate::prelude::DetectionError;
use crate::processing::pipeline::{FrameReport, FrameStage};
use log::{debug, info, trace, warn};
use std::time::Duration;

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn stage(&self, header: &FrameHeader, stage: FrameStage, count: usize) {
        trace!("frame {} {}: {} detections", header.seq, stage, count);
    }

    pub fn malformed(&self, header: &FrameHeader, index: usize, err: &DetectionError) {
        warn!(
            "frame {} dropping detection {}: {}",
            header.seq, index, err
        );
    }

    pub fn frame(&self, header: &FrameHeader, report: &FrameReport, elapsed: Duration) {
        debug!(
            "frame {} ({}) received={} malformed={} below_threshold={} unmapped={} emitted={} in {:.3} ms",
            header.seq,
            header.frame_id,
            report.received,
            report.malformed,
            report.below_threshold,
            report.unmapped,
            report.emitted,
            elapsed.as_secs_f64() * 1e3
        );
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
