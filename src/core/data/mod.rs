pub mod camera_pose;
pub mod parameter_store;
pub mod vec3;

pub use camera_pose::CameraPose;
pub use parameter_store::{DisplayUniforms, FractalUniforms, ParameterStore};
pub use vec3::Vec3;
