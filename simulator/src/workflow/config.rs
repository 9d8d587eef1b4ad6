use crate::generator::scene::GeneratorConfig;
use anyhow::Context;
use lidarcore::prelude::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub pipeline: PipelineConfig,
    pub generator: GeneratorConfig,
    pub output: Option<PathBuf>,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Command-line values win over whatever the YAML file set.
    pub fn apply_overrides(
        &mut self,
        center_shift: Option<f64>,
        threshold: Option<f32>,
        seed: Option<u64>,
    ) {
        if let Some(shift) = center_shift {
            self.pipeline.center_shift = shift;
        }
        if let Some(threshold) = threshold {
            let table = &mut self.pipeline.thresholds;
            table.classes.values_mut().for_each(|t| *t = threshold);
            if table.fallback.is_some() {
                table.fallback = Some(threshold);
            }
        }
        if let Some(seed) = seed {
            self.generator.seed = seed;
        }
    }

    pub fn to_pipeline_config(&self) -> PipelineConfig {
        self.pipeline.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lidarcore::interface::{ClassLabel, LabelMap};
    use lidarcore::prelude::ThresholdTable;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn overrides_set_shift_and_uniform_threshold() {
        let mut cfg = WorkflowConfig::default();
        cfg.apply_overrides(Some(34.56), Some(0.6), None);
        let pipeline = cfg.to_pipeline_config();
        assert_eq!(pipeline.center_shift, 34.56);
        assert!(pipeline.thresholds.classes.values().all(|&t| t == 0.6));
        assert_eq!(pipeline.thresholds.fallback, Some(0.6));
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"pipeline:\n  center_shift: 34.56\n  thresholds:\n    classes:\n      0: 0.45\n      8: 0.1\n    fallback: 0.5\n  marker:\n    lifetime_secs: 0.2\ngenerator:\n  objects_per_frame: 3\noutput: out/frames.jsonl\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();

        assert_eq!(cfg.pipeline.center_shift, 34.56);
        assert_eq!(
            cfg.pipeline.thresholds,
            ThresholdTable::new([(0, 0.45), (8, 0.1)]).with_fallback(0.5)
        );
        assert_eq!(cfg.pipeline.marker.lifetime_secs, 0.2);
        assert_eq!(cfg.pipeline.marker.opacity, 0.5);
        assert_eq!(cfg.generator.objects_per_frame, 3);
        assert_eq!(cfg.generator.frame_id, "velodyne");
        assert_eq!(cfg.output, Some(PathBuf::from("out/frames.jsonl")));
    }

    #[test]
    fn config_load_reports_missing_file() {
        let err = WorkflowConfig::load("/nonexistent/workflow.yaml").unwrap_err();
        assert!(err.to_string().contains("reading workflow config"));
    }

    #[test]
    fn overrides_touch_fallback_only_when_present() {
        let mut cfg = WorkflowConfig::default();
        cfg.pipeline.thresholds = ThresholdTable::kitti().with_fallback(0.2);
        cfg.apply_overrides(None, Some(0.3), Some(99));
        assert_eq!(cfg.pipeline.thresholds.fallback, Some(0.3));
        assert_eq!(cfg.pipeline.center_shift, 0.0);
        assert_eq!(cfg.generator.seed, 99);

        cfg.pipeline.thresholds = ThresholdTable::new([(2, 0.5)]);
        cfg.apply_overrides(None, Some(0.3), None);
        assert_eq!(cfg.pipeline.thresholds.fallback, None);
    }

    #[test]
    fn shipped_configs_load_and_validate() {
        for name in ["pointpillars_kitti.yaml", "centerpoint_nuscenes.yaml"] {
            let path = Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("../configs")
                .join(name);
            let cfg = WorkflowConfig::load(&path).unwrap();
            cfg.to_pipeline_config().validate().unwrap();
        }
    }

    #[test]
    fn shipped_configs_pair_thresholds_with_their_label_ids() {
        let configs = Path::new(env!("CARGO_MANIFEST_DIR")).join("../configs");

        let kitti = WorkflowConfig::load(configs.join("pointpillars_kitti.yaml")).unwrap();
        assert_eq!(kitti.pipeline.labels, LabelMap::kitti());
        assert_eq!(kitti.pipeline.thresholds, ThresholdTable::kitti());

        let nuscenes = WorkflowConfig::load(configs.join("centerpoint_nuscenes.yaml")).unwrap();
        assert_eq!(nuscenes.pipeline.labels, LabelMap::nuscenes());
        assert_eq!(nuscenes.pipeline.labels.label(0), ClassLabel::Car);
        assert_eq!(nuscenes.pipeline.labels.label(1), ClassLabel::Unknown);
        assert_eq!(nuscenes.pipeline.labels.label(3), ClassLabel::Unknown);
    }
}
