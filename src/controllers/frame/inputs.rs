use crate::core::data::CameraPose;
use crate::core::fractals::FractalKind;

/// Per-frame context owned by the host: which fractal is active and where
/// the camera is looking.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInputs {
    pub fractal: FractalKind,
    pub camera: CameraPose,
}

impl FrameInputs {
    #[must_use]
    pub fn new(fractal: FractalKind, camera: CameraPose) -> Self {
        Self { fractal, camera }
    }
}
