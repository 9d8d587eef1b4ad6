use crate::interface::Detection;
use crate::prelude::{PipelineError, PipelineResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Minimum score per class id, with an optional threshold for ids not listed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdTable {
    pub classes: BTreeMap<u32, f32>,
    pub fallback: Option<f32>,
}

impl ThresholdTable {
    pub fn new(classes: impl IntoIterator<Item = (u32, f32)>) -> Self {
        Self {
            classes: classes.into_iter().collect(),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, threshold: f32) -> Self {
        self.fallback = Some(threshold);
        self
    }

    /// Pedestrian, car and cyclist at the KITTI PointPillars operating point.
    /// Other ids share the same threshold and reach the encoders as `Unknown`.
    pub fn kitti() -> Self {
        Self::new([(1, 0.4), (2, 0.4), (3, 0.4)]).with_fallback(0.4)
    }

    /// Ten-class nuScenes head: car, truck, construction vehicle, bus,
    /// trailer, barrier, motorcycle, bicycle, pedestrian, traffic cone.
    pub fn nuscenes() -> Self {
        Self::new([
            (0, 0.45),
            (1, 0.45),
            (2, 0.45),
            (3, 0.35),
            (4, 0.4),
            (5, 0.4),
            (6, 0.15),
            (7, 0.15),
            (8, 0.10),
            (9, 0.1),
        ])
    }

    pub fn threshold(&self, class_id: u32) -> Option<f32> {
        self.classes.get(&class_id).copied().or(self.fallback)
    }

    pub fn validate(&self) -> PipelineResult<()> {
        let listed = self.classes.iter().map(|(&id, &t)| (Some(id), t));
        let fallback = self.fallback.map(|t| (None, t));
        for (class_id, threshold) in listed.chain(fallback) {
            if !(0.0..=1.0).contains(&threshold) {
                let owner = class_id
                    .map(|id| format!("class {}", id))
                    .unwrap_or_else(|| "fallback".to_string());
                return Err(PipelineError::InvalidConfig(format!(
                    "{} threshold {} outside [0, 1]",
                    owner, threshold
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    Keep,
    BelowThreshold,
    Unmapped,
}

/// Result of filtering one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    pub kept: Vec<Detection>,
    pub below_threshold: usize,
    pub unmapped: usize,
}

/// Shared confidence gate in front of every encoder.
#[derive(Debug, Clone)]
pub struct ClassFilter {
    table: ThresholdTable,
}

impl ClassFilter {
    pub fn new(table: ThresholdTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ThresholdTable {
        &self.table
    }

    pub fn decide(&self, detection: &Detection) -> FilterDecision {
        match self.table.threshold(detection.class_id) {
            None => FilterDecision::Unmapped,
            Some(threshold) if detection.score >= threshold => FilterDecision::Keep,
            Some(_) => FilterDecision::BelowThreshold,
        }
    }

    /// Keeps detections meeting their class threshold, preserving order.
    pub fn apply(&self, detections: &[Detection]) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();
        for detection in detections {
            match self.decide(detection) {
                FilterDecision::Keep => outcome.kept.push(*detection),
                FilterDecision::BelowThreshold => outcome.below_threshold += 1,
                FilterDecision::Unmapped => outcome.unmapped += 1,
            }
        }
        outcome
    }

    /// Indices of detections of `class_id` scoring at least `threshold`.
    pub fn select_class(detections: &[Detection], class_id: u32, threshold: f32) -> Vec<usize> {
        detections
            .iter()
            .enumerate()
            .filter(|(_, d)| d.class_id == class_id && d.score >= threshold)
            .map(|(index, _)| index)
            .collect()
    }
}
