use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ResolutionConfigError {
    #[error("EMA alpha must lie strictly between 0 and 1, got {0}")]
    InvalidEmaAlpha(f64),
    #[error("target FPS must be positive and finite, got {0}")]
    InvalidTargetFps(f64),
    #[error("hysteresis band must be finite, non-negative and below the target FPS ({target}), got {band}")]
    InvalidHysteresisBand { band: f64, target: f64 },
    #[error("at least one sustained frame is required before adjusting")]
    ZeroSustainFrames,
    #[error("step size must lie in (0, 1], got {0}")]
    InvalidStepSize(f64),
    #[error("minimum scale must lie in (0, 1], got {0}")]
    InvalidMinScale(f64),
    #[error("base pixel ratio must be positive and finite, got {0}")]
    InvalidBasePixelRatio(f64),
    #[error("initial FPS estimate must be finite and non-negative, got {0}")]
    InvalidInitialFps(f64),
}
