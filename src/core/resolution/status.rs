use crate::core::resolution::hysteresis::{BandPosition, ScaleDirection};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionChange {
    pub from: f64,
    pub to: f64,
    pub pixel_ratio: f64,
}

impl ResolutionChange {
    /// Whole-number percentage of full resolution, as shown to the user.
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.to * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolutionUpdateReport {
    /// Frame dropped because `delta` was zero, negative or non-finite.
    pub skipped: bool,
    /// `None` while the controller is disabled or gated by cooldown/hold.
    pub band: Option<BandPosition>,
    pub attempted: Option<ScaleDirection>,
    pub change: Option<ResolutionChange>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionStatus {
    pub enabled: bool,
    pub render_scale: f64,
    pub fps_ema: f64,
    pub instant_fps: f64,
    pub sustain_low: u32,
    pub sustain_high: u32,
}
