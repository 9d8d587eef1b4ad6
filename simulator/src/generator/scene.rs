use anyhow::ensure;
use lidarcore::interface::{Detection, DetectionFrame, FrameHeader};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Configuration for synthesizing detector output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub objects_per_frame: usize,
    pub seed: u64,
    pub frame_id: String,
    pub frame_period: f64,
    pub class_ids: Vec<u32>,
    pub max_range: f64,
    /// Fraction of detections emitted with a NaN center.
    pub malformed_rate: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            objects_per_frame: 8,
            seed: 0,
            frame_id: "velodyne".into(),
            frame_period: 0.1,
            class_ids: vec![1, 2, 3],
            max_range: 60.0,
            malformed_rate: 0.0,
        }
    }
}

/// Typical `length, width, height` for the KITTI classes.
fn nominal_size(class_id: u32) -> [f64; 3] {
    match class_id {
        1 => [0.8, 0.6, 1.73],
        2 => [3.9, 1.6, 1.56],
        3 => [1.76, 0.6, 1.73],
        _ => [1.0, 1.0, 1.0],
    }
}

/// Builds frame `seq`; the same config and sequence number always give the same frame.
pub fn build_frame(config: &GeneratorConfig, seq: u64) -> anyhow::Result<DetectionFrame> {
    ensure!(!config.class_ids.is_empty(), "generator needs at least one class id");
    ensure!(
        config.max_range.is_finite() && config.max_range > 0.0,
        "generator max_range must be positive, got {}",
        config.max_range
    );
    ensure!(
        (0.0..=1.0).contains(&config.malformed_rate),
        "malformed_rate {} outside [0, 1]",
        config.malformed_rate
    );

    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(seq));
    let half_width = config.max_range / 2.0;

    let detections = (0..config.objects_per_frame)
        .map(|_| {
            let class_id = config.class_ids[rng.gen_range(0..config.class_ids.len())];
            let [length, width, height] = nominal_size(class_id);
            let jitter = rng.gen_range(0.9..1.1);
            let mut center = [
                rng.gen_range(0.0..config.max_range),
                rng.gen_range(-half_width..half_width),
                rng.gen_range(-1.8..-0.6),
            ];
            if rng.gen_bool(config.malformed_rate) {
                center[0] = f64::NAN;
            }

            Detection::new(
                center,
                [length * jitter, width * jitter, height * jitter],
                rng.gen_range(0.0..2.0 * PI),
                rng.gen_range(0.0..1.0),
                class_id,
            )
        })
        .collect();

    let header = FrameHeader {
        seq,
        frame_id: config.frame_id.clone(),
        stamp: seq as f64 * config.frame_period,
    };
    Ok(DetectionFrame::new(header, detections))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_builds_requested_object_count() {
        let frame = build_frame(&GeneratorConfig::default(), 3).unwrap();
        assert_eq!(frame.detections.len(), 8);
        assert_eq!(frame.header.seq, 3);
        assert!((frame.header.stamp - 0.3).abs() < 1e-12);
        assert!(frame
            .detections
            .iter()
            .all(|d| [1, 2, 3].contains(&d.class_id) && d.center.x.is_finite()));
    }

    #[test]
    fn generator_is_deterministic_per_sequence() {
        let config = GeneratorConfig {
            seed: 13,
            ..Default::default()
        };
        assert_eq!(build_frame(&config, 5).unwrap(), build_frame(&config, 5).unwrap());
        assert_ne!(build_frame(&config, 5).unwrap(), build_frame(&config, 6).unwrap());
    }

    #[test]
    fn malformed_rate_one_poisons_every_center() {
        let config = GeneratorConfig {
            malformed_rate: 1.0,
            objects_per_frame: 4,
            ..Default::default()
        };
        let frame = build_frame(&config, 0).unwrap();
        assert!(frame.detections.iter().all(|d| d.center.x.is_nan()));
    }

    #[test]
    fn generator_rejects_empty_class_list() {
        let config = GeneratorConfig {
            class_ids: Vec::new(),
            ..Default::default()
        };
        assert!(build_frame(&config, 0).is_err());
    }
}
