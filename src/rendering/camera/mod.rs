//! Orbiting scene camera and lighting

pub mod orbit;
pub mod scene_camera;

pub use orbit::*;
pub use scene_camera::*;
