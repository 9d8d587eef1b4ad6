use crate::interface::detection::FrameHeader;
use crate::interface::label::ClassLabel;
use crate::prelude::SensingRange;
use serde::{Deserialize, Serialize};

/// Vehicle-frame bounds of the sensed area, attached to both obstacle lists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameExtents {
    pub front: f64,
    pub back: f64,
    pub left: f64,
    pub right: f64,
}

impl FrameExtents {
    pub fn from_range(range: &SensingRange, center_shift: f64) -> Self {
        Self {
            front: range.x_max - center_shift,
            back: range.x_min - center_shift,
            left: range.y_min,
            right: range.y_max,
        }
    }
}

/// Ground-plane obstacle. Corners follow the footprint order
/// back-left, back-right, front-left, front-right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle2d {
    pub x: f64,
    pub y: f64,
    pub x_corners: [f64; 4],
    pub y_corners: [f64; 4],
    pub length: f64,
    pub width: f64,
    pub yaw: f64,
    pub label: ClassLabel,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleList2d {
    pub header: FrameHeader,
    pub extents: FrameExtents,
    pub obstacles: Vec<Obstacle2d>,
}

/// Full cuboid obstacle. `x`/`y` are vehicle frame, the `*_lidar` fields
/// keep the untouched sensor-frame center. Corners are the bottom face then
/// the top face, each in footprint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle3d {
    pub x: f64,
    pub y: f64,
    pub x_lidar: f64,
    pub y_lidar: f64,
    pub z_lidar: f64,
    pub x_corners: [f64; 8],
    pub y_corners: [f64; 8],
    pub z_corners: [f64; 8],
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub yaw: f64,
    pub label: ClassLabel,
    pub score: f32,
    pub range: f64,
}

/// 3D obstacles ordered by ascending ground-plane range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleList3d {
    pub header: FrameHeader,
    pub extents: FrameExtents,
    pub obstacles: Vec<Obstacle3d>,
}
