use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Closed set of labels carried by every output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClassLabel {
    Pedestrian,
    Car,
    Cyclist,
    Unknown,
}

impl ClassLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassLabel::Pedestrian => "Pedestrian",
            ClassLabel::Car => "Car",
            ClassLabel::Cyclist => "Cyclist",
            ClassLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model class id to output label. Ids missing from the map are `Unknown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelMap {
    classes: BTreeMap<u32, ClassLabel>,
}

impl LabelMap {
    pub fn new(classes: impl IntoIterator<Item = (u32, ClassLabel)>) -> Self {
        Self {
            classes: classes.into_iter().collect(),
        }
    }

    /// KITTI heads: 1 pedestrian, 2 car, 3 cyclist.
    pub fn kitti() -> Self {
        Self::new([
            (1, ClassLabel::Pedestrian),
            (2, ClassLabel::Car),
            (3, ClassLabel::Cyclist),
        ])
    }

    /// nuScenes heads: 0 car, 7 bicycle, 8 pedestrian. Trucks, buses,
    /// trailers, barriers, cones and the rest stay `Unknown`.
    pub fn nuscenes() -> Self {
        Self::new([
            (0, ClassLabel::Car),
            (7, ClassLabel::Cyclist),
            (8, ClassLabel::Pedestrian),
        ])
    }

    pub fn label(&self, class_id: u32) -> ClassLabel {
        self.classes
            .get(&class_id)
            .copied()
            .unwrap_or(ClassLabel::Unknown)
    }
}

impl Default for LabelMap {
    fn default() -> Self {
        Self::kitti()
    }
}
