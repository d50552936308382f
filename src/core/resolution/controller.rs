//! Frame-rate driven output resolution.
//!
//! An EMA of the frame rate is compared against a dead band around the target.
//! Only a sustained run of out-of-band evaluations moves the render scale, one
//! step at a time, and every move is followed by a hold period so the effect of
//! the new resolution can be measured before judging again.

use tracing::{info, trace};

use crate::core::data::DisplayUniforms;
use crate::core::resolution::errors::ResolutionConfigError;
use crate::core::resolution::fps::FpsMeter;
use crate::core::resolution::hysteresis::{ScaleDirection, SustainCounters, classify};
use crate::core::resolution::ports::DisplaySurface;
use crate::core::resolution::settings::ResolutionSettings;
use crate::core::resolution::status::{
    ResolutionChange, ResolutionStatus, ResolutionUpdateReport,
};

const MAX_SCALE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveResolutionController {
    settings: ResolutionSettings,
    fps: FpsMeter,
    render_scale: f64,
    frames_since_adjust_attempt: u32,
    frames_since_change: u32,
    sustain: SustainCounters,
}

impl AdaptiveResolutionController {
    pub fn new(settings: ResolutionSettings) -> Result<Self, ResolutionConfigError> {
        let settings = settings.validate()?;

        Ok(Self {
            fps: FpsMeter::new(settings.ema_alpha, settings.initial_fps_estimate),
            settings,
            render_scale: MAX_SCALE,
            frames_since_adjust_attempt: 0,
            frames_since_change: 0,
            sustain: SustainCounters::default(),
        })
    }

    pub fn update(
        &mut self,
        delta: f64,
        display: &mut DisplayUniforms,
        surface: &mut dyn DisplaySurface,
    ) -> ResolutionUpdateReport {
        let mut report = ResolutionUpdateReport::default();

        if !delta.is_finite() || delta <= 0.0 {
            trace!(delta, "skipping resolution frame with degenerate delta");
            report.skipped = true;
            return report;
        }

        self.fps.record(delta);
        self.frames_since_adjust_attempt = self.frames_since_adjust_attempt.saturating_add(1);
        self.frames_since_change = self.frames_since_change.saturating_add(1);

        if !self.settings.enabled
            || self.frames_since_adjust_attempt <= self.settings.adjust_cooldown_frames
            || self.frames_since_change <= self.settings.min_hold_frames
        {
            return report;
        }

        let position = classify(
            self.fps.ema(),
            self.settings.lower_fps(),
            self.settings.upper_fps(),
        );
        self.sustain.observe(position);
        report.band = Some(position);

        if let Some(direction) = self.sustain.triggered(self.settings.sustain_frames_required) {
            report.attempted = Some(direction);
            report.change = self.adjust_resolution(direction, display, surface);
        }

        report
    }

    /// Moves the render scale one step in `direction`, clamped to
    /// `[min_scale, 1.0]`. The attempt counter and the sustain counter for
    /// `direction` are reset even when the scale is already at the bound.
    pub fn adjust_resolution(
        &mut self,
        direction: ScaleDirection,
        display: &mut DisplayUniforms,
        surface: &mut dyn DisplaySurface,
    ) -> Option<ResolutionChange> {
        let new_scale = (self.render_scale + direction.sign() * self.settings.step_size)
            .clamp(self.settings.min_scale, MAX_SCALE);

        self.frames_since_adjust_attempt = 0;
        self.sustain.clear(direction);

        if new_scale == self.render_scale {
            return None;
        }

        let change = ResolutionChange {
            from: self.render_scale,
            to: new_scale,
            pixel_ratio: self.settings.base_pixel_ratio * new_scale,
        };

        self.render_scale = new_scale;
        self.frames_since_change = 0;
        display.resolution_scale = new_scale;
        surface.set_pixel_ratio(change.pixel_ratio);

        let message = format!("Resolution: {}%", change.percent());
        info!(
            from = change.from,
            to = change.to,
            fps_ema = self.fps.ema(),
            "{message}"
        );
        surface.notify(&message);

        Some(change)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
    }

    /// Applies new settings after validation. On error nothing changes.
    ///
    /// `min_scale` may not be raised above the current render scale here,
    /// since only [`Self::adjust_resolution`] moves the scale.
    pub fn reconfigure(
        &mut self,
        change: impl FnOnce(&mut ResolutionSettings),
    ) -> Result<(), ResolutionConfigError> {
        let mut candidate = self.settings;
        change(&mut candidate);
        let candidate = candidate.validate()?;
        if candidate.min_scale > self.render_scale {
            return Err(ResolutionConfigError::InvalidMinScale(candidate.min_scale));
        }

        self.fps.set_alpha(candidate.ema_alpha);
        self.settings = candidate;
        Ok(())
    }

    pub fn set_target_fps(&mut self, target_fps: f64) -> Result<(), ResolutionConfigError> {
        self.reconfigure(|settings| settings.target_fps = target_fps)
    }

    pub fn set_hysteresis_band(&mut self, band: f64) -> Result<(), ResolutionConfigError> {
        self.reconfigure(|settings| settings.hysteresis_band = band)
    }

    /// Rebases the output on a new device pixel ratio, e.g. after the window
    /// moves to a display with a different scale factor. The render scale is
    /// kept and the surface receives the rebased ratio without a notification.
    pub fn set_base_pixel_ratio(
        &mut self,
        base_pixel_ratio: f64,
        surface: &mut dyn DisplaySurface,
    ) -> Result<(), ResolutionConfigError> {
        self.reconfigure(|settings| settings.base_pixel_ratio = base_pixel_ratio)?;
        surface.set_pixel_ratio(self.pixel_ratio());
        Ok(())
    }

    #[must_use]
    pub fn settings(&self) -> &ResolutionSettings {
        &self.settings
    }

    #[must_use]
    pub fn render_scale(&self) -> f64 {
        self.render_scale
    }

    #[must_use]
    pub fn pixel_ratio(&self) -> f64 {
        self.settings.base_pixel_ratio * self.render_scale
    }

    #[must_use]
    pub fn fps_ema(&self) -> f64 {
        self.fps.ema()
    }

    #[must_use]
    pub fn status(&self) -> ResolutionStatus {
        ResolutionStatus {
            enabled: self.settings.enabled,
            render_scale: self.render_scale,
            fps_ema: self.fps.ema(),
            instant_fps: self.fps.windowed(),
            sustain_low: self.sustain.low(),
            sustain_high: self.sustain.high(),
        }
    }
}

impl Default for AdaptiveResolutionController {
    fn default() -> Self {
        let settings = ResolutionSettings::default();

        Self {
            fps: FpsMeter::new(settings.ema_alpha, settings.initial_fps_estimate),
            settings,
            render_scale: MAX_SCALE,
            frames_since_adjust_attempt: 0,
            frames_since_change: 0,
            sustain: SustainCounters::default(),
        }
    }
}
