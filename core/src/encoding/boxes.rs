use crate::geometry::Quaternion;
use crate::interface::{BoxList, BoxRecord};
use crate::prelude::{EncoderInput, ViewEncoder};

/// Emits the raw box list, one entry per filtered detection in model order.
#[derive(Debug, Clone, Copy)]
pub struct BoxListEncoder {
    center_shift: f64,
}

impl BoxListEncoder {
    pub fn new(center_shift: f64) -> Self {
        Self { center_shift }
    }
}

impl ViewEncoder for BoxListEncoder {
    type Output = BoxList;

    fn encode(&self, input: &EncoderInput<'_>) -> BoxList {
        let boxes = input
            .filtered
            .iter()
            .map(|detection| {
                let center = detection.vehicle_center(self.center_shift);
                BoxRecord {
                    position: [center.x, center.y, center.z],
                    orientation: Quaternion::from_yaw(detection.yaw),
                    dimensions: detection.dimensions(),
                    score: detection.score,
                    class_id: detection.class_id,
                }
            })
            .collect();

        BoxList {
            header: input.header.clone(),
            boxes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::{Detection, FrameHeader};

    #[test]
    fn box_list_keeps_raw_yaw_and_class_id() {
        let header = FrameHeader {
            seq: 3,
            frame_id: "velodyne".into(),
            stamp: 12.5,
        };
        let filtered = vec![Detection::new([40.0, 2.0, -1.0], [4.0, 2.0, 1.5], 3.5, 0.9, 7)];
        let input = EncoderInput {
            header: &header,
            filtered: &filtered,
            ranked: &[],
        };

        let list = BoxListEncoder::new(34.56).encode(&input);
        assert_eq!(list.header, header);
        let record = &list.boxes[0];
        assert!((record.position[0] - 5.44).abs() < 1e-9);
        assert_eq!(record.position[1], 2.0);
        assert_eq!(record.orientation, Quaternion::from_yaw(3.5));
        assert_eq!(record.dimensions, [4.0, 2.0, 1.5]);
        assert_eq!(record.class_id, 7);
    }
}
