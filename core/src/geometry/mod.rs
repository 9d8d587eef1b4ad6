//! Rotation, oriented-box corners and heading conversions.

pub mod corners;
pub mod polar;
pub mod quaternion;
pub mod rotation;

pub use corners::{corners_2d, corners_3d, Point2, Point3, FOOTPRINT_ORDER};
pub use polar::to_polar;
pub use quaternion::Quaternion;
pub use rotation::{fold_yaw, obstacle_3d_yaw, rotate_z};
