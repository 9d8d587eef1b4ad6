use crate::geometry::rotation::rotate_z;
use ndarray::{arr1, Array2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Footprint corner signs `(along length, along width)` in canonical order:
/// back-left, back-right, front-left, front-right.
pub const FOOTPRINT_ORDER: [(f64, f64); 4] = [(-1.0, 1.0), (-1.0, -1.0), (1.0, 1.0), (1.0, -1.0)];

/// Rotates box-local offsets (3×N) by the inverse yaw and moves them onto `center`.
fn place(local: Array2<f64>, yaw: f64, center: [f64; 3]) -> Array2<f64> {
    let mut placed = rotate_z(-yaw).dot(&local);
    let center = arr1(&center);
    for mut column in placed.columns_mut() {
        column += &center;
    }
    placed
}

/// Ground-plane corners of an oriented rectangle, ordered as [`FOOTPRINT_ORDER`].
pub fn corners_2d(length: f64, width: f64, yaw: f64, center_x: f64, center_y: f64) -> [Point2; 4] {
    let mut local = Array2::zeros((3, 4));
    for (i, &(along, across)) in FOOTPRINT_ORDER.iter().enumerate() {
        local[[0, i]] = along * length / 2.0;
        local[[1, i]] = across * width / 2.0;
    }

    let placed = place(local, yaw, [center_x, center_y, 0.0]);
    std::array::from_fn(|i| Point2 {
        x: placed[[0, i]],
        y: placed[[1, i]],
    })
}

/// Cuboid corners: the bottom face (`z - h/2`) in footprint order, then the
/// top face (`z + h/2`) in the same order.
pub fn corners_3d(length: f64, width: f64, height: f64, yaw: f64, center: Point3) -> [Point3; 8] {
    let mut local = Array2::zeros((3, 8));
    for (face, vertical) in [-1.0, 1.0].into_iter().enumerate() {
        for (i, &(along, across)) in FOOTPRINT_ORDER.iter().enumerate() {
            let column = face * FOOTPRINT_ORDER.len() + i;
            local[[0, column]] = along * length / 2.0;
            local[[1, column]] = across * width / 2.0;
            local[[2, column]] = vertical * height / 2.0;
        }
    }

    let placed = place(local, yaw, [center.x, center.y, center.z]);
    std::array::from_fn(|i| Point3 {
        x: placed[[0, i]],
        y: placed[[1, i]],
        z: placed[[2, i]],
    })
}
