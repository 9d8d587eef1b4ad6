use crate::encoding::{BoxListEncoder, MarkerEncoder, Obstacle2dEncoder, Obstacle3dEncoder};
use crate::interface::{
    BoxList, Detection, DetectionFrame, FrameExtents, FrameHeader, MarkerList, ObstacleList2d,
    ObstacleList3d,
};
use crate::prelude::{EncoderInput, PipelineConfig, PipelineResult, ViewEncoder};
use crate::processing::filter::ClassFilter;
use crate::processing::ranking::DistanceRanker;
use crate::processing::validation::validate_detection;
use crate::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Steps a frame passes through; a frame never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStage {
    Received,
    Validated,
    Filtered,
    Ranked,
    Encoded,
    Emitted,
}

impl fmt::Display for FrameStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FrameStage::Received => "received",
            FrameStage::Validated => "validated",
            FrameStage::Filtered => "filtered",
            FrameStage::Ranked => "ranked",
            FrameStage::Encoded => "encoded",
            FrameStage::Emitted => "emitted",
        };
        f.write_str(name)
    }
}

/// Per-frame detection counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameReport {
    pub received: usize,
    pub malformed: usize,
    pub below_threshold: usize,
    pub unmapped: usize,
    pub emitted: usize,
}

/// Everything emitted for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    pub header: FrameHeader,
    pub boxes: BoxList,
    pub obstacles_2d: ObstacleList2d,
    pub obstacles_3d: ObstacleList3d,
    pub markers: MarkerList,
    pub report: FrameReport,
}

/// Filter, rank and encode one detection frame at a time.
///
/// The pipeline holds only immutable configuration plus telemetry counters,
/// so one instance can be shared across threads.
pub struct FramePipeline {
    config: PipelineConfig,
    filter: ClassFilter,
    ranker: DistanceRanker,
    boxes: BoxListEncoder,
    obstacles_2d: Obstacle2dEncoder,
    obstacles_3d: Obstacle3dEncoder,
    markers: MarkerEncoder,
    metrics: MetricsRecorder,
    logger: LogManager,
}

impl FramePipeline {
    pub fn new(config: PipelineConfig) -> PipelineResult<Self> {
        config.validate()?;

        let shift = config.center_shift;
        let extents = FrameExtents::from_range(&config.sensing_range, shift);
        let logger = LogManager::new();
        logger.record(&format!(
            "pipeline ready: center_shift {:.3}, {} class thresholds",
            shift,
            config.thresholds.classes.len()
        ));

        Ok(Self {
            filter: ClassFilter::new(config.thresholds.clone()),
            ranker: DistanceRanker::new(shift),
            boxes: BoxListEncoder::new(shift),
            obstacles_2d: Obstacle2dEncoder::new(shift, extents, config.labels.clone()),
            obstacles_3d: Obstacle3dEncoder::new(shift, extents, config.labels.clone()),
            markers: MarkerEncoder::new(shift, config.marker),
            metrics: MetricsRecorder::new(),
            logger,
            config,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Runs one frame to completion. Malformed detections are dropped from
    /// every artifact; the frame itself always produces output.
    pub fn process(&self, frame: &DetectionFrame) -> FrameOutput {
        let started = Instant::now();
        let header = &frame.header;
        let mut report = FrameReport {
            received: frame.detections.len(),
            ..Default::default()
        };
        self.logger.stage(header, FrameStage::Received, report.received);

        let valid: Vec<Detection> = frame
            .detections
            .iter()
            .enumerate()
            .filter_map(|(index, detection)| match validate_detection(detection) {
                Ok(()) => Some(*detection),
                Err(err) => {
                    self.logger.malformed(header, index, &err);
                    None
                }
            })
            .collect();
        report.malformed = report.received - valid.len();
        self.logger.stage(header, FrameStage::Validated, valid.len());

        let outcome = self.filter.apply(&valid);
        report.below_threshold = outcome.below_threshold;
        report.unmapped = outcome.unmapped;
        report.emitted = outcome.kept.len();
        self.logger.stage(header, FrameStage::Filtered, outcome.kept.len());

        let ranked = self.ranker.rank(&outcome.kept);
        self.logger.stage(header, FrameStage::Ranked, ranked.len());

        let input = EncoderInput {
            header,
            filtered: &outcome.kept,
            ranked: &ranked,
        };
        let output = FrameOutput {
            header: header.clone(),
            boxes: self.boxes.encode(&input),
            obstacles_2d: self.obstacles_2d.encode(&input),
            obstacles_3d: self.obstacles_3d.encode(&input),
            markers: self.markers.encode(&input),
            report,
        };
        self.logger.stage(header, FrameStage::Encoded, report.emitted);

        self.metrics.record_frame(&report);
        self.logger.frame(header, &report, started.elapsed());
        self.logger.stage(header, FrameStage::Emitted, report.emitted);
        output
    }
}
