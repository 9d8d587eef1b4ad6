use crate::geometry::Quaternion;
use crate::interface::{Marker, MarkerList, MarkerShape};
use crate::prelude::{EncoderInput, MarkerStyle, ViewEncoder};

/// One translucent cube per filtered detection.
#[derive(Debug, Clone, Copy)]
pub struct MarkerEncoder {
    center_shift: f64,
    style: MarkerStyle,
}

impl MarkerEncoder {
    pub fn new(center_shift: f64, style: MarkerStyle) -> Self {
        Self {
            center_shift,
            style,
        }
    }
}

impl ViewEncoder for MarkerEncoder {
    type Output = MarkerList;

    fn encode(&self, input: &EncoderInput<'_>) -> MarkerList {
        let markers = input
            .filtered
            .iter()
            .zip(0u32..)
            .map(|(detection, id)| Marker {
                id,
                frame_id: input.header.frame_id.clone(),
                stamp: input.header.stamp,
                shape: MarkerShape::Cube,
                position: detection.vehicle_center(self.center_shift),
                orientation: Quaternion::from_yaw(detection.yaw),
                scale: detection.dimensions(),
                color: self.style.color,
                opacity: self.style.opacity,
                lifetime_secs: self.style.lifetime_secs,
            })
            .collect();

        MarkerList { markers }
    }
}
