use crate::geometry::{corners_2d, fold_yaw};
use crate::interface::{FrameExtents, LabelMap, Obstacle2d, ObstacleList2d};
use crate::prelude::{EncoderInput, ViewEncoder};

/// Ground-plane obstacle list in model order.
#[derive(Debug, Clone)]
pub struct Obstacle2dEncoder {
    center_shift: f64,
    extents: FrameExtents,
    labels: LabelMap,
}

impl Obstacle2dEncoder {
    pub fn new(center_shift: f64, extents: FrameExtents, labels: LabelMap) -> Self {
        Self {
            center_shift,
            extents,
            labels,
        }
    }
}

impl ViewEncoder for Obstacle2dEncoder {
    type Output = ObstacleList2d;

    fn encode(&self, input: &EncoderInput<'_>) -> ObstacleList2d {
        let obstacles = input
            .filtered
            .iter()
            .map(|detection| {
                let yaw = fold_yaw(detection.yaw);
                let center = detection.vehicle_center(self.center_shift);
                let corners = corners_2d(
                    detection.size.length,
                    detection.size.width,
                    yaw,
                    center.x,
                    center.y,
                );

                Obstacle2d {
                    x: center.x,
                    y: center.y,
                    x_corners: corners.map(|c| c.x),
                    y_corners: corners.map(|c| c.y),
                    length: detection.size.length,
                    width: detection.size.width,
                    yaw,
                    label: self.labels.label(detection.class_id),
                    score: detection.score,
                }
            })
            .collect();

        ObstacleList2d {
            header: input.header.clone(),
            extents: self.extents,
            obstacles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::ClassLabel;
    use crate::interface::{Detection, FrameHeader};
    use crate::prelude::SensingRange;
    use std::f64::consts::PI;

    fn encoder() -> Obstacle2dEncoder {
        Obstacle2dEncoder::new(
            0.0,
            FrameExtents::from_range(&SensingRange::default(), 0.0),
            LabelMap::kitti(),
        )
    }

    fn encode(filtered: &[Detection]) -> ObstacleList2d {
        let header = FrameHeader::default();
        encoder().encode(&EncoderInput {
            header: &header,
            filtered,
            ranked: &[],
        })
    }

    #[test]
    fn worked_example_corners_and_label() {
        let list = encode(&[Detection::new([10.0, 2.0, 0.0], [4.0, 2.0, 1.5], 0.0, 0.9, 2)]);
        let obstacle = &list.obstacles[0];
        assert_eq!((obstacle.x, obstacle.y), (10.0, 2.0));
        assert_eq!(obstacle.x_corners, [8.0, 8.0, 12.0, 12.0]);
        assert_eq!(obstacle.y_corners, [3.0, 1.0, 3.0, 1.0]);
        assert_eq!(obstacle.label, ClassLabel::Car);
        assert_eq!((obstacle.length, obstacle.width), (4.0, 2.0));
    }

    #[test]
    fn yaw_above_pi_is_folded_before_use() {
        let raw = PI + 0.3;
        let list = encode(&[Detection::new([0.0, 0.0, 0.0], [4.0, 2.0, 1.5], raw, 0.9, 1)]);
        let obstacle = &list.obstacles[0];
        assert!((obstacle.yaw - 0.3).abs() < 1e-12);

        let expected = corners_2d(4.0, 2.0, obstacle.yaw, 0.0, 0.0);
        assert_eq!(obstacle.x_corners, expected.map(|c| c.x));
    }

    #[test]
    fn unmapped_class_is_labelled_unknown() {
        let list = encode(&[Detection::new([3.0, 0.0, 0.0], [1.0, 1.0, 1.0], 0.0, 0.9, 8)]);
        assert_eq!(list.obstacles[0].label, ClassLabel::Unknown);
    }

    #[test]
    fn empty_frame_still_reports_extents() {
        let list = encode(&[]);
        assert!(list.obstacles.is_empty());
        assert_eq!(list.extents.front, 69.12);
        assert_eq!(list.extents.left, -39.68);
    }
}
