use crate::geometry::{Point3, Quaternion};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerShape {
    Cube,
}

/// Transient display cuboid. Ids restart at zero every frame; consumers
/// expire markers that are not refreshed within `lifetime_secs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: u32,
    pub frame_id: String,
    pub stamp: f64,
    pub shape: MarkerShape,
    pub position: Point3,
    pub orientation: Quaternion,
    pub scale: [f64; 3],
    pub color: Color,
    pub opacity: f32,
    pub lifetime_secs: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerList {
    pub markers: Vec<Marker>,
}
