pub mod axis;
pub mod box_shape;
pub mod sphere;

pub use axis::create_axis_points;
pub use box_shape::create_box;
pub use sphere::{SphereOptions, create_sphere};
