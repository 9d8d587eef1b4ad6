use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use lidarcore::interface::{ClassLabel, DetectionFrame};
use lidarcore::telemetry::MetricsSnapshot;
use lidarcore::{FrameOutput, FramePipeline};
use std::collections::BTreeMap;
use std::sync::Arc;

pub struct WorkflowResult {
    pub output: FrameOutput,
    pub nearest_range: Option<f64>,
    pub label_counts: BTreeMap<ClassLabel, usize>,
}

#[derive(Clone)]
pub struct Runner {
    pipeline: Arc<FramePipeline>,
}

impl Runner {
    pub fn new(config: &WorkflowConfig) -> anyhow::Result<Self> {
        let pipeline =
            FramePipeline::new(config.to_pipeline_config()).context("building frame pipeline")?;
        Ok(Self {
            pipeline: Arc::new(pipeline),
        })
    }

    pub fn execute(&self, frame: &DetectionFrame) -> WorkflowResult {
        let output = self.pipeline.process(frame);

        let nearest_range = output.obstacles_3d.obstacles.first().map(|o| o.range);
        let mut label_counts = BTreeMap::new();
        for obstacle in &output.obstacles_2d.obstacles {
            *label_counts.entry(obstacle.label).or_insert(0) += 1;
        }

        WorkflowResult {
            output,
            nearest_range,
            label_counts,
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.pipeline.metrics()
    }
}
