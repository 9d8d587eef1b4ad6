use ndarray::{array, Array2};
use std::f64::consts::{FRAC_PI_2, PI};

/// Right-handed rotation about the vertical axis.
pub fn rotate_z(angle: f64) -> Array2<f64> {
    let (s, c) = angle.sin_cos();
    array![[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]
}

/// Folds a yaw above π back by a single half turn.
///
/// Not a modular wrap: `3π` folds to `2π` and negative angles pass through
/// untouched. Obstacle consumers depend on this exact output.
pub fn fold_yaw(yaw: f64) -> f64 {
    if yaw > PI {
        yaw - PI
    } else {
        yaw
    }
}

/// Heading reported on 3D obstacles, whose reference axis sits a quarter
/// turn away from the ground-plane list.
pub fn obstacle_3d_yaw(yaw: f64) -> f64 {
    fold_yaw(yaw) - FRAC_PI_2
}
