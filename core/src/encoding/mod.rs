pub mod boxes;
pub mod markers;
pub mod obstacles_2d;
pub mod obstacles_3d;

pub use boxes::BoxListEncoder;
pub use markers::MarkerEncoder;
pub use obstacles_2d::Obstacle2dEncoder;
pub use obstacles_3d::Obstacle3dEncoder;
