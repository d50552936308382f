use std::time::Duration;

use thiserror::Error;

/// One minute per frame is far beyond any load worth modelling.
const MAX_FRAME_MS: f64 = 60_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SyntheticLoadError {
    #[error("full resolution frame time must lie in (0, 60000] ms, got {0} ms")]
    InvalidFrameTime(f64),
    #[error("reference iteration count must be non-zero")]
    ZeroReferenceIterations,
}

/// Stand-in for GPU cost: fragment work scales with pixel count and with the
/// number of fractal iterations per pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticLoad {
    /// Frame time at render scale 1.0 and `reference_iterations`.
    pub full_res_frame_ms: f64,
    pub reference_iterations: u32,
}

impl Default for SyntheticLoad {
    fn default() -> Self {
        Self {
            full_res_frame_ms: 16.0,
            reference_iterations: 8,
        }
    }
}

impl SyntheticLoad {
    pub fn validate(self) -> Result<Self, SyntheticLoadError> {
        if !self.full_res_frame_ms.is_finite()
            || self.full_res_frame_ms <= 0.0
            || self.full_res_frame_ms > MAX_FRAME_MS
        {
            return Err(SyntheticLoadError::InvalidFrameTime(self.full_res_frame_ms));
        }
        if self.reference_iterations == 0 {
            return Err(SyntheticLoadError::ZeroReferenceIterations);
        }

        Ok(self)
    }

    #[must_use]
    pub fn frame_time(&self, render_scale: f64, iterations: u32) -> Duration {
        let pixels = render_scale * render_scale;
        let work = f64::from(iterations) / f64::from(self.reference_iterations);
        let millis = self.full_res_frame_ms * pixels * work;

        Duration::try_from_secs_f64(millis.max(0.0) / 1000.0).unwrap_or(Duration::MAX)
    }
}
