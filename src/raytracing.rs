pub mod camera;
pub mod geometry;
pub mod material;
pub mod math;
pub mod ppm;
pub mod scene;

pub use math::*;
