use crate::geometry::to_polar;
use crate::interface::Detection;
use serde::{Deserialize, Serialize};

/// A detection with its vehicle-frame polar position on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedDetection {
    pub detection: Detection,
    pub range: f64,
    pub bearing: f64,
}

/// Orders detections nearest-first from the ego origin.
#[derive(Debug, Clone, Copy)]
pub struct DistanceRanker {
    center_shift: f64,
}

impl DistanceRanker {
    pub fn new(center_shift: f64) -> Self {
        Self { center_shift }
    }

    pub fn locate(&self, detection: &Detection) -> RankedDetection {
        let (range, bearing) = to_polar(detection.center.x - self.center_shift, detection.center.y);
        RankedDetection {
            detection: *detection,
            range,
            bearing,
        }
    }

    /// Ascending by range; equal ranges keep their input order.
    pub fn rank(&self, detections: &[Detection]) -> Vec<RankedDetection> {
        let mut ranked: Vec<RankedDetection> = detections.iter().map(|d| self.locate(d)).collect();
        ranked.sort_by(|a, b| a.range.total_cmp(&b.range));
        ranked
    }
}
