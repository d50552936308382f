//! Typed rendering parameters shared with the shader layer.
//!
//! The store itself has no logic. Each controller receives a mutable
//! reference to the group of fields it writes and nothing else.

use crate::core::data::vec3::Vec3;

const DEFAULT_ITERATIONS: u32 = 8;
const DEFAULT_POWER: f64 = 8.0;

/// Uniforms written by the zoom controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalUniforms {
    pub scale: f64,
    pub iterations: u32,
    pub zoom_center: Vec3,
    pub rotation: Vec3,
    pub camera_position: Vec3,
    /// Power parameter of power-parameterized fractals. Read only.
    pub power: f64,
}

impl Default for FractalUniforms {
    fn default() -> Self {
        Self {
            scale: 1.0,
            iterations: DEFAULT_ITERATIONS,
            zoom_center: Vec3::ZERO,
            rotation: Vec3::ZERO,
            camera_position: Vec3::new(0.0, 0.0, 3.0),
            power: DEFAULT_POWER,
        }
    }
}

/// Uniforms written by the adaptive resolution controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayUniforms {
    pub resolution_scale: f64,
}

impl Default for DisplayUniforms {
    fn default() -> Self {
        Self {
            resolution_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParameterStore {
    pub fractal: FractalUniforms,
    pub display: DisplayUniforms,
}
