use crate::interface::{Color, Detection, FrameHeader, LabelMap};
use crate::processing::ranking::RankedDetection;
use serde::{Deserialize, Serialize};

pub use crate::processing::filter::ThresholdTable;

/// Sensed volume in sensor frame, laid out like the detector's point-cloud range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensingRange {
    pub x_min: f64,
    pub y_min: f64,
    pub z_min: f64,
    pub x_max: f64,
    pub y_max: f64,
    pub z_max: f64,
}

impl SensingRange {
    /// Accepts the `[x_min, y_min, z_min, x_max, y_max, z_max]` layout.
    pub fn from_bounds(bounds: [f64; 6]) -> Self {
        Self {
            x_min: bounds[0],
            y_min: bounds[1],
            z_min: bounds[2],
            x_max: bounds[3],
            y_max: bounds[4],
            z_max: bounds[5],
        }
    }
}

impl Default for SensingRange {
    fn default() -> Self {
        Self::from_bounds([0.0, -39.68, -3.0, 69.12, 39.68, 1.0])
    }
}

/// Display attributes shared by every marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub color: Color,
    pub opacity: f32,
    pub lifetime_secs: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: Color {
                r: 1.0,
                g: 0.0,
                b: 0.0,
            },
            opacity: 0.5,
            lifetime_secs: 1.0,
        }
    }
}

/// Process-wide configuration, fixed once the pipeline is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub center_shift: f64,
    pub thresholds: ThresholdTable,
    pub labels: LabelMap,
    pub sensing_range: SensingRange,
    pub marker: MarkerStyle,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            center_shift: 0.0,
            thresholds: ThresholdTable::kitti(),
            labels: LabelMap::kitti(),
            sensing_range: SensingRange::default(),
            marker: MarkerStyle::default(),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> PipelineResult<()> {
        if !self.center_shift.is_finite() {
            return Err(PipelineError::InvalidConfig(format!(
                "center_shift must be finite, got {}",
                self.center_shift
            )));
        }

        let range = &self.sensing_range;
        let axes = [
            ("x", range.x_min, range.x_max),
            ("y", range.y_min, range.y_max),
            ("z", range.z_min, range.z_max),
        ];
        for (axis, min, max) in axes {
            if !(min.is_finite() && max.is_finite() && min < max) {
                return Err(PipelineError::InvalidConfig(format!(
                    "sensing range on {} must satisfy min < max, got [{}, {}]",
                    axis, min, max
                )));
            }
        }

        self.thresholds.validate()?;

        let marker = &self.marker;
        if !(0.0..=1.0).contains(&marker.opacity) {
            return Err(PipelineError::InvalidConfig(format!(
                "marker opacity {} outside [0, 1]",
                marker.opacity
            )));
        }
        if !(marker.lifetime_secs.is_finite() && marker.lifetime_secs > 0.0) {
            return Err(PipelineError::InvalidConfig(format!(
                "marker lifetime must be positive, got {}",
                marker.lifetime_secs
            )));
        }

        Ok(())
    }
}

/// Errors raised while building the pipeline or its inputs.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Reasons a single detection is excluded from its frame.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DetectionError {
    #[error("non-finite {field}")]
    NonFinite { field: &'static str },
    #[error("negative {field}")]
    NegativeSize { field: &'static str },
}

/// Per-frame data handed to every view encoder.
#[derive(Debug, Clone, Copy)]
pub struct EncoderInput<'a> {
    pub header: &'a FrameHeader,
    /// Detections that passed the class filter, in model order.
    pub filtered: &'a [Detection],
    /// The same detections ordered by ascending range.
    pub ranked: &'a [RankedDetection],
}

/// A pure translation of one frame's detections into a downstream view.
pub trait ViewEncoder {
    type Output;

    fn encode(&self, input: &EncoderInput<'_>) -> Self::Output;
}
