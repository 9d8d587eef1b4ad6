pub mod boxes;
pub mod detection;
pub mod label;
pub mod marker;
pub mod obstacle;

pub use boxes::{BoxList, BoxRecord};
pub use detection::{BoxSize, Detection, DetectionFrame, FrameHeader, BOX_COLUMNS};
pub use label::{ClassLabel, LabelMap};
pub use marker::{Color, Marker, MarkerList, MarkerShape};
pub use obstacle::{FrameExtents, Obstacle2d, Obstacle3d, ObstacleList2d, ObstacleList3d};
