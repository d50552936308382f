use clap::ValueEnum;

use crate::core::zoom::errors::ZoomConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ZoomCenterMode {
    #[default]
    Origin,
    /// Pivot sits a fixed distance along the camera's view ray.
    ViewRay,
}

impl ZoomCenterMode {
    pub const ALL: &'static [Self] = &[Self::Origin, Self::ViewRay];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Origin => "Origin",
            Self::ViewRay => "View ray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSettings {
    pub enabled: bool,
    pub speed_multiplier: f64,
    pub zoom_center_mode: ZoomCenterMode,
    pub zoom_center_distance: f64,
    pub wrap_threshold: f64,
    pub safe_scale_min: f64,
    pub safe_scale_max: f64,
    pub wrap_duration_secs: f64,
    pub iteration_increase_threshold: f64,
    pub auto_rotate: bool,
    pub rotation_speed: f64,
    pub camera_drift: bool,
    pub max_frame_delta_secs: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            speed_multiplier: 1.0,
            zoom_center_mode: ZoomCenterMode::Origin,
            zoom_center_distance: 2.0,
            wrap_threshold: 100.0,
            safe_scale_min: 0.01,
            safe_scale_max: 1000.0,
            wrap_duration_secs: 1.0,
            iteration_increase_threshold: 1.5,
            auto_rotate: false,
            rotation_speed: 0.1,
            camera_drift: false,
            max_frame_delta_secs: 1.0,
        }
    }
}

impl ZoomSettings {
    pub fn validate(self) -> Result<Self, ZoomConfigError> {
        if !is_positive_finite(self.speed_multiplier) {
            return Err(ZoomConfigError::InvalidSpeedMultiplier(self.speed_multiplier));
        }
        if !is_positive_finite(self.zoom_center_distance) {
            return Err(ZoomConfigError::InvalidCenterDistance(
                self.zoom_center_distance,
            ));
        }
        if !is_positive_finite(self.wrap_duration_secs) {
            return Err(ZoomConfigError::InvalidWrapDuration(self.wrap_duration_secs));
        }

        let bounds_ok = is_positive_finite(self.safe_scale_min)
            && self.wrap_threshold.is_finite()
            && self.safe_scale_max.is_finite()
            && self.safe_scale_min < self.wrap_threshold
            && self.wrap_threshold < self.safe_scale_max;
        if !bounds_ok {
            return Err(ZoomConfigError::InvalidScaleBounds {
                min: self.safe_scale_min,
                threshold: self.wrap_threshold,
                max: self.safe_scale_max,
            });
        }

        if !self.iteration_increase_threshold.is_finite() || self.iteration_increase_threshold <= 1.0
        {
            return Err(ZoomConfigError::InvalidIterationThreshold(
                self.iteration_increase_threshold,
            ));
        }
        if !self.rotation_speed.is_finite() {
            return Err(ZoomConfigError::InvalidRotationSpeed(self.rotation_speed));
        }
        if !is_positive_finite(self.max_frame_delta_secs) {
            return Err(ZoomConfigError::InvalidMaxFrameDelta(
                self.max_frame_delta_secs,
            ));
        }

        Ok(self)
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
