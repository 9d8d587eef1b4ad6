use crate::geometry::Quaternion;
use crate::interface::detection::FrameHeader;
use serde::{Deserialize, Serialize};

/// Raw oriented box as handed to downstream trackers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxRecord {
    pub position: [f64; 3],
    pub orientation: Quaternion,
    pub dimensions: [f64; 3],
    pub score: f32,
    pub class_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxList {
    pub header: FrameHeader,
    pub boxes: Vec<BoxRecord>,
}
