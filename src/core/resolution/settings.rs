use crate::core::resolution::errors::ResolutionConfigError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionSettings {
    pub enabled: bool,
    pub target_fps: f64,
    pub hysteresis_band: f64,
    pub sustain_frames_required: u32,
    pub step_size: f64,
    pub min_scale: f64,
    pub ema_alpha: f64,
    pub adjust_cooldown_frames: u32,
    pub min_hold_frames: u32,
    pub base_pixel_ratio: f64,
    pub initial_fps_estimate: f64,
}

impl Default for ResolutionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            target_fps: 58.0,
            hysteresis_band: 3.0,
            sustain_frames_required: 30,
            step_size: 0.125,
            min_scale: 0.5,
            ema_alpha: 0.1,
            adjust_cooldown_frames: 45,
            min_hold_frames: 120,
            base_pixel_ratio: 1.0,
            initial_fps_estimate: 60.0,
        }
    }
}

impl ResolutionSettings {
    pub fn validate(self) -> Result<Self, ResolutionConfigError> {
        if !self.ema_alpha.is_finite() || self.ema_alpha <= 0.0 || self.ema_alpha >= 1.0 {
            return Err(ResolutionConfigError::InvalidEmaAlpha(self.ema_alpha));
        }
        if !self.target_fps.is_finite() || self.target_fps <= 0.0 {
            return Err(ResolutionConfigError::InvalidTargetFps(self.target_fps));
        }
        if !self.hysteresis_band.is_finite()
            || self.hysteresis_band < 0.0
            || self.hysteresis_band >= self.target_fps
        {
            return Err(ResolutionConfigError::InvalidHysteresisBand {
                band: self.hysteresis_band,
                target: self.target_fps,
            });
        }
        if self.sustain_frames_required == 0 {
            return Err(ResolutionConfigError::ZeroSustainFrames);
        }
        if !in_unit_interval(self.step_size) {
            return Err(ResolutionConfigError::InvalidStepSize(self.step_size));
        }
        if !in_unit_interval(self.min_scale) {
            return Err(ResolutionConfigError::InvalidMinScale(self.min_scale));
        }
        if !self.base_pixel_ratio.is_finite() || self.base_pixel_ratio <= 0.0 {
            return Err(ResolutionConfigError::InvalidBasePixelRatio(
                self.base_pixel_ratio,
            ));
        }
        if !self.initial_fps_estimate.is_finite() || self.initial_fps_estimate < 0.0 {
            return Err(ResolutionConfigError::InvalidInitialFps(
                self.initial_fps_estimate,
            ));
        }

        Ok(self)
    }

    #[must_use]
    pub fn upper_fps(&self) -> f64 {
        self.target_fps + self.hysteresis_band
    }

    #[must_use]
    pub fn lower_fps(&self) -> f64 {
        self.target_fps - self.hysteresis_band
    }
}

fn in_unit_interval(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value <= 1.0
}
