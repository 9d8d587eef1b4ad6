use crate::geometry::Point3;
use crate::prelude::{PipelineError, PipelineResult};
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

/// Columns of a model box row: `x, y, z, length, width, height, yaw`.
pub const BOX_COLUMNS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSize {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// One candidate object reported by the detection model, in sensor frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub center: Point3,
    pub size: BoxSize,
    pub yaw: f64,
    pub score: f32,
    pub class_id: u32,
}

impl Detection {
    pub fn new(center: [f64; 3], size: [f64; 3], yaw: f64, score: f32, class_id: u32) -> Self {
        Self {
            center: Point3 {
                x: center[0],
                y: center[1],
                z: center[2],
            },
            size: BoxSize {
                length: size[0],
                width: size[1],
                height: size[2],
            },
            yaw,
            score,
            class_id,
        }
    }

    /// Center moved into vehicle frame by removing the longitudinal offset.
    pub fn vehicle_center(&self, center_shift: f64) -> Point3 {
        Point3 {
            x: self.center.x - center_shift,
            ..self.center
        }
    }

    pub fn dimensions(&self) -> [f64; 3] {
        [self.size.length, self.size.width, self.size.height]
    }
}

/// Metadata shared by every artifact emitted for a frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameHeader {
    pub seq: u64,
    pub frame_id: String,
    pub stamp: f64,
}

/// All detections of a single sensor capture, in model order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionFrame {
    pub header: FrameHeader,
    #[serde(default)]
    pub detections: Vec<Detection>,
}

impl DetectionFrame {
    pub fn new(header: FrameHeader, detections: Vec<Detection>) -> Self {
        Self { header, detections }
    }

    /// Builds a frame from the model's raw tensors: an `N x 7` box array plus
    /// per-row scores and labels.
    pub fn from_arrays(
        header: FrameHeader,
        boxes: ArrayView2<f64>,
        scores: &[f32],
        labels: &[u32],
    ) -> PipelineResult<Self> {
        if boxes.ncols() != BOX_COLUMNS {
            return Err(PipelineError::ShapeMismatch(format!(
                "expected {} box columns, got {}",
                BOX_COLUMNS,
                boxes.ncols()
            )));
        }
        if scores.len() != boxes.nrows() || labels.len() != boxes.nrows() {
            return Err(PipelineError::ShapeMismatch(format!(
                "{} boxes but {} scores and {} labels",
                boxes.nrows(),
                scores.len(),
                labels.len()
            )));
        }

        let detections = boxes
            .rows()
            .into_iter()
            .zip(scores.iter().zip(labels))
            .map(|(row, (&score, &class_id))| {
                Detection::new(
                    [row[0], row[1], row[2]],
                    [row[3], row[4], row[5]],
                    row[6],
                    score,
                    class_id,
                )
            })
            .collect();

        Ok(Self { header, detections })
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn from_arrays_maps_columns_in_model_order() {
        let boxes = array![
            [10.0, 2.0, 0.0, 4.0, 2.0, 1.5, 0.0],
            [5.0, -1.0, -0.5, 0.8, 0.6, 1.7, 1.2]
        ];
        let frame = DetectionFrame::from_arrays(
            FrameHeader::default(),
            boxes.view(),
            &[0.9, 0.3],
            &[2, 1],
        )
        .unwrap();

        assert_eq!(frame.detections.len(), 2);
        assert_eq!(frame.detections[0], Detection::new([10.0, 2.0, 0.0], [4.0, 2.0, 1.5], 0.0, 0.9, 2));
        assert_eq!(frame.detections[1].size.height, 1.7);
        assert_eq!(frame.detections[1].yaw, 1.2);
        assert_eq!(frame.detections[1].class_id, 1);
    }

    #[test]
    fn from_arrays_rejects_mismatched_lengths() {
        let boxes = array![[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]];
        let err = DetectionFrame::from_arrays(FrameHeader::default(), boxes.view(), &[], &[1])
            .unwrap_err();
        assert!(matches!(err, PipelineError::ShapeMismatch(_)));
    }

    #[test]
    fn from_arrays_rejects_wrong_column_count() {
        let boxes = array![[1.0, 2.0, 3.0]];
        let err = DetectionFrame::from_arrays(FrameHeader::default(), boxes.view(), &[0.5], &[1])
            .unwrap_err();
        assert!(matches!(err, PipelineError::ShapeMismatch(_)));
    }

    #[test]
    fn vehicle_center_only_moves_longitudinal_axis() {
        let detection = Detection::new([40.0, 3.0, -1.0], [4.0, 2.0, 1.5], 0.0, 0.9, 2);
        let shifted = detection.vehicle_center(34.56);
        assert!((shifted.x - 5.44).abs() < 1e-9);
        assert_eq!(shifted.y, 3.0);
        assert_eq!(shifted.z, -1.0);
    }

    #[test]
    fn frame_deserializes_without_detections() {
        let frame: DetectionFrame =
            serde_json::from_str(r#"{"header":{"seq":4,"frame_id":"velodyne","stamp":1.5}}"#)
                .unwrap();
        assert!(frame.is_empty());
        assert_eq!(frame.header.frame_id, "velodyne");
    }
}
