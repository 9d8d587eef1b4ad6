use crate::geometry::{corners_3d, fold_yaw, obstacle_3d_yaw};
use crate::interface::{FrameExtents, LabelMap, Obstacle3d, ObstacleList3d};
use crate::prelude::{EncoderInput, ViewEncoder};

/// Cuboid obstacle list, nearest first.
#[derive(Debug, Clone)]
pub struct Obstacle3dEncoder {
    center_shift: f64,
    extents: FrameExtents,
    labels: LabelMap,
}

impl Obstacle3dEncoder {
    pub fn new(center_shift: f64, extents: FrameExtents, labels: LabelMap) -> Self {
        Self {
            center_shift,
            extents,
            labels,
        }
    }
}

impl ViewEncoder for Obstacle3dEncoder {
    type Output = ObstacleList3d;

    fn encode(&self, input: &EncoderInput<'_>) -> ObstacleList3d {
        let obstacles = input
            .ranked
            .iter()
            .map(|ranked| {
                let detection = &ranked.detection;
                let size = detection.size;
                let center = detection.vehicle_center(self.center_shift);
                let corners = corners_3d(
                    size.length,
                    size.width,
                    size.height,
                    fold_yaw(detection.yaw),
                    center,
                );

                Obstacle3d {
                    x: center.x,
                    y: center.y,
                    x_lidar: detection.center.x,
                    y_lidar: detection.center.y,
                    z_lidar: detection.center.z,
                    x_corners: corners.map(|c| c.x),
                    y_corners: corners.map(|c| c.y),
                    z_corners: corners.map(|c| c.z),
                    length: size.length,
                    width: size.width,
                    height: size.height,
                    yaw: obstacle_3d_yaw(detection.yaw),
                    label: self.labels.label(detection.class_id),
                    score: detection.score,
                    range: ranked.range,
                }
            })
            .collect();

        ObstacleList3d {
            header: input.header.clone(),
            extents: self.extents,
            obstacles,
        }
    }
}
