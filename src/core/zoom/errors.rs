use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ZoomConfigError {
    #[error("speed multiplier must be positive and finite, got {0}")]
    InvalidSpeedMultiplier(f64),
    #[error("zoom center distance must be positive and finite, got {0}")]
    InvalidCenterDistance(f64),
    #[error("wrap duration must be positive and finite, got {0} s")]
    InvalidWrapDuration(f64),
    #[error(
        "scale bounds must satisfy 0 < safe_scale_min ({min}) < wrap_threshold ({threshold}) < safe_scale_max ({max})"
    )]
    InvalidScaleBounds { min: f64, threshold: f64, max: f64 },
    #[error("iteration increase threshold must be finite and greater than 1, got {0}")]
    InvalidIterationThreshold(f64),
    #[error("rotation speed must be finite, got {0}")]
    InvalidRotationSpeed(f64),
    #[error("max frame delta must be positive and finite, got {0} s")]
    InvalidMaxFrameDelta(f64),
}
