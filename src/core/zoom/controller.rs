//! Infinite zoom driven by scale wrapping.
//!
//! Each frame the controller either grows the fractal scale, or eases through
//! a wrap transition. Once scale passes the wrap threshold it is divided by the
//! fractal's self-similarity factor, which reproduces an equivalent structure,
//! so the zoom can continue indefinitely without the scale diverging.

use std::f64::consts::TAU;

use tracing::{debug, trace, warn};

use crate::core::data::{CameraPose, FractalUniforms, Vec3};
use crate::core::fractals::{FractalKind, fractal_config, self_similarity_factor};
use crate::core::zoom::errors::ZoomConfigError;
use crate::core::zoom::settings::{ZoomCenterMode, ZoomSettings};
use crate::core::zoom::state::ZoomState;
use crate::core::zoom::status::{ZoomStatus, ZoomUpdateReport, ZoomWarning};
use crate::core::zoom::transition::{TransitionFrame, WrapTransition};

const SCALE_GROWTH_RATE: f64 = 0.05;
const CAMERA_DRIFT_RATE: f64 = 0.02;
const DEPTH_LABEL_EXPONENT_FROM: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WrapOutcome {
    Started {
        target_scale: f64,
        target_iterations: u32,
    },
    EmergencyReset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoomController {
    settings: ZoomSettings,
    state: ZoomState,
}

impl ZoomController {
    pub fn new(settings: ZoomSettings) -> Result<Self, ZoomConfigError> {
        let settings = settings.validate()?;

        Ok(Self {
            state: ZoomState::new(settings.enabled),
            settings,
        })
    }

    pub fn update(
        &mut self,
        delta: f64,
        kind: FractalKind,
        camera: &CameraPose,
        uniforms: &mut FractalUniforms,
    ) -> ZoomUpdateReport {
        let mut report = ZoomUpdateReport {
            phase: self.state.phase(),
            ..ZoomUpdateReport::default()
        };

        if !self.state.enabled {
            return report;
        }

        let config = fractal_config(kind);
        if !config.zoom_supported {
            return report;
        }

        if !delta.is_finite() || delta <= 0.0 {
            trace!(delta, "skipping zoom frame with degenerate delta");
            report.skipped = true;
            return report;
        }

        let delta = delta.min(self.settings.max_frame_delta_secs);
        report.active = true;

        let center = self.zoom_center(camera);
        if center.is_finite() {
            uniforms.zoom_center = center;
        }

        self.state.detail.ensure_baseline(uniforms.iterations);

        if self.state.transition.is_some() {
            report.wrap_completed = self.update_scale_wrap_transition(delta, uniforms);
            report.phase = self.state.phase();
            return report;
        }

        if !uniforms.scale.is_finite() || uniforms.scale <= 0.0 {
            warn!(scale = uniforms.scale, "store held an unusable scale, resetting to 1.0");
            self.reset_scale(uniforms);
            self.record_warning(&mut report, ZoomWarning::NonFiniteReset);
            return report;
        }

        let growth = 1.0 + self.settings.speed_multiplier * delta * SCALE_GROWTH_RATE;
        let new_scale = (uniforms.scale * growth).min(self.settings.safe_scale_max);
        uniforms.scale = new_scale;
        self.state.cumulative_scale *= growth;

        if let Some(iterations) = self.state.detail.try_reveal(
            new_scale,
            uniforms.iterations,
            self.settings.iteration_increase_threshold,
        ) {
            debug!(iterations, scale = new_scale, "revealing detail");
            uniforms.iterations = iterations;
            report.iterations_revealed = true;
        }

        self.apply_cinematics(delta, camera, uniforms);

        if new_scale > self.settings.wrap_threshold {
            let factor = self_similarity_factor(&config, uniforms);
            match self.perform_scale_wrap(factor, uniforms) {
                WrapOutcome::Started { .. } => report.wrap_started = true,
                WrapOutcome::EmergencyReset => {
                    self.record_warning(&mut report, ZoomWarning::EmergencyReset);
                }
            }
        }

        report.phase = self.state.phase();
        report
    }

    /// Divides the current scale by `factor`, easing toward the result over
    /// the configured wrap duration. Falls back to an immediate reset to 1.0
    /// when the result would drop below the safe scale floor.
    ///
    /// The camera mirror is held where it is for the whole transition.
    pub fn perform_scale_wrap(&mut self, factor: f64, uniforms: &mut FractalUniforms) -> WrapOutcome {
        let current_scale = uniforms.scale;
        let candidate = current_scale / factor;

        if !factor.is_finite() || factor <= 1.0 || !candidate.is_finite() {
            warn!(factor, scale = current_scale, "unusable self-similarity factor, resetting zoom");
            self.reset_scale(uniforms);
            self.state.last_warning = Some(ZoomWarning::EmergencyReset);
            return WrapOutcome::EmergencyReset;
        }

        if candidate < self.settings.safe_scale_min {
            warn!(
                candidate,
                floor = self.settings.safe_scale_min,
                "wrap would underflow the safe scale floor, resetting zoom"
            );
            self.reset_scale(uniforms);
            self.state.last_warning = Some(ZoomWarning::EmergencyReset);
            return WrapOutcome::EmergencyReset;
        }

        let target_scale = candidate.min(self.settings.safe_scale_max);
        self.state.detail.ensure_baseline(uniforms.iterations);
        let target_iterations = self.state.detail.wrap_target(uniforms.iterations);

        self.state.transition = Some(WrapTransition::new(
            uniforms.camera_position,
            current_scale,
            target_scale,
            uniforms.iterations,
            target_iterations,
        ));
        self.state.cumulative_scale = target_scale;
        self.state.detail.set_scale_mark(target_scale);

        debug!(
            from = current_scale,
            to = target_scale,
            target_iterations,
            "starting scale wrap"
        );

        WrapOutcome::Started {
            target_scale,
            target_iterations,
        }
    }

    /// Advances an in-flight wrap. Returns true on the frame it completes.
    pub fn update_scale_wrap_transition(
        &mut self,
        delta: f64,
        uniforms: &mut FractalUniforms,
    ) -> bool {
        if !delta.is_finite() || delta <= 0.0 {
            return false;
        }

        let Some(transition) = self.state.transition.as_mut() else {
            return false;
        };

        let frame = transition.advance(delta, self.settings.wrap_duration_secs);
        apply_transition_frame(uniforms, &frame);

        if frame.finished {
            self.state.transition = None;
            debug!(scale = frame.scale, "scale wrap complete");
        }

        frame.finished
    }

    /// Toggles zoom. Disabling mid-wrap lands the store on the wrap's targets.
    pub fn set_enabled(&mut self, enabled: bool, uniforms: &mut FractalUniforms) {
        if !enabled {
            if let Some(mut transition) = self.state.transition.take() {
                let frame = transition.finish();
                apply_transition_frame(uniforms, &frame);
            }
        }

        self.state.enabled = enabled;
        self.settings.enabled = enabled;
    }

    /// Applies new settings after validation. On error nothing changes.
    pub fn reconfigure(
        &mut self,
        change: impl FnOnce(&mut ZoomSettings),
    ) -> Result<(), ZoomConfigError> {
        let mut candidate = self.settings;
        change(&mut candidate);
        candidate.enabled = self.state.enabled;
        self.settings = candidate.validate()?;
        Ok(())
    }

    pub fn set_speed_multiplier(&mut self, speed: f64) -> Result<(), ZoomConfigError> {
        self.reconfigure(|settings| settings.speed_multiplier = speed)
    }

    pub fn set_zoom_center_mode(&mut self, mode: ZoomCenterMode) {
        self.settings.zoom_center_mode = mode;
    }

    /// Clears wrap and depth tracking, and forgets the cached iteration
    /// baseline. Enabled flag, speed and settings are kept.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    #[must_use]
    pub fn settings(&self) -> &ZoomSettings {
        &self.settings
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    #[must_use]
    pub fn wrap_in_progress(&self) -> bool {
        self.state.transition.is_some()
    }

    /// Progress of the in-flight wrap, 0.0 when idle.
    #[must_use]
    pub fn wrap_t(&self) -> f64 {
        self.state.transition.map_or(0.0, |transition| transition.t())
    }

    #[must_use]
    pub fn transition(&self) -> Option<&WrapTransition> {
        self.state.transition.as_ref()
    }

    #[must_use]
    pub fn zoom_depth(&self) -> f64 {
        self.state.cumulative_scale
    }

    #[must_use]
    pub fn zoom_depth_label(&self) -> String {
        let depth = self.state.cumulative_scale;
        if depth < DEPTH_LABEL_EXPONENT_FROM {
            format!("x{depth:.2}")
        } else {
            format!("x{depth:.1e}")
        }
    }

    #[must_use]
    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> ZoomStatus {
        ZoomStatus {
            enabled: self.state.enabled,
            phase: self.state.phase(),
            zoom_depth: self.state.cumulative_scale,
            wrap_t: self.wrap_t(),
            base_iterations: self.state.detail.base(),
            min_iterations: self.state.detail.min(),
            max_iterations: self.state.detail.max(),
            last_warning: self.state.last_warning,
        }
    }

    fn zoom_center(&self, camera: &CameraPose) -> Vec3 {
        match self.settings.zoom_center_mode {
            ZoomCenterMode::Origin => Vec3::ZERO,
            ZoomCenterMode::ViewRay => camera.point_along_view(self.settings.zoom_center_distance),
        }
    }

    fn apply_cinematics(&self, delta: f64, camera: &CameraPose, uniforms: &mut FractalUniforms) {
        if self.settings.auto_rotate {
            uniforms.rotation.y =
                (uniforms.rotation.y + self.settings.rotation_speed * delta).rem_euclid(TAU);
        }

        if self.settings.camera_drift {
            let drifted = uniforms.camera_position
                + camera.forward * (self.settings.speed_multiplier * delta * CAMERA_DRIFT_RATE);
            if drifted.is_finite() {
                uniforms.camera_position = drifted;
            }
        }
    }

    fn reset_scale(&mut self, uniforms: &mut FractalUniforms) {
        uniforms.scale = 1.0;
        self.state.cumulative_scale = 1.0;
        self.state.detail.set_scale_mark(1.0);
    }

    fn record_warning(&mut self, report: &mut ZoomUpdateReport, warning: ZoomWarning) {
        self.state.last_warning = Some(warning);
        report.warning = Some(warning);
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self {
            settings: ZoomSettings::default(),
            state: ZoomState::new(ZoomSettings::default().enabled),
        }
    }
}

fn apply_transition_frame(uniforms: &mut FractalUniforms, frame: &TransitionFrame) {
    uniforms.scale = frame.scale;
    uniforms.camera_position = frame.camera_position;
    if let Some(iterations) = frame.iterations {
        uniforms.iterations = iterations;
    }
}

#[cfg(test)]
mod tests {
    use super::{WrapOutcome, ZoomController};
    use crate::core::data::{CameraPose, FractalUniforms, Vec3};
    use crate::core::fractals::FractalKind;
    use crate::core::zoom::settings::{ZoomCenterMode, ZoomSettings};
    use crate::core::zoom::status::{ZoomPhase, ZoomWarning};

    const DT: f64 = 1.0 / 60.0;
    const EPSILON: f64 = 1e-9;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn enabled_settings() -> ZoomSettings {
        ZoomSettings {
            enabled: true,
            ..ZoomSettings::default()
        }
    }

    fn controller_with(settings: ZoomSettings) -> ZoomController {
        ZoomController::new(settings).expect("settings should be valid")
    }

    fn controller() -> ZoomController {
        controller_with(enabled_settings())
    }

    fn uniforms_at_scale(scale: f64) -> FractalUniforms {
        FractalUniforms {
            scale,
            ..FractalUniforms::default()
        }
    }

    #[test]
    fn invalid_settings_fail_construction() {
        let settings = ZoomSettings {
            wrap_duration_secs: -1.0,
            ..enabled_settings()
        };

        assert!(ZoomController::new(settings).is_err());
    }

    #[test]
    fn scale_grows_monotonically_until_first_wrap() {
        let mut zoom = controller();
        let mut uniforms = FractalUniforms::default();
        let camera = CameraPose::default();
        let mut wrapped = false;

        for _ in 0..20_000 {
            let before = uniforms.scale;
            let report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);

            if report.wrap_started {
                wrapped = true;
                break;
            }

            assert!(uniforms.scale > before);
            assert!(uniforms.scale <= 100.0);
            assert_eq!(report.phase, ZoomPhase::Idle);
        }

        assert!(wrapped);
    }

    #[test]
    fn menger_wrap_targets_a_third_of_the_scale() {
        let mut zoom = controller();
        let mut uniforms = FractalUniforms::default();
        let camera = CameraPose::default();

        let mut report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        while !report.wrap_started {
            report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        }

        let transition = zoom.transition().expect("wrap should be in progress");
        assert!(uniforms.scale > 100.0);
        assert_approx_eq(transition.start_scale, uniforms.scale);
        assert_approx_eq(transition.target_scale, uniforms.scale / 3.0);
        assert!(transition.target_scale > 33.33 && transition.target_scale < 33.37);
        assert_eq!(report.phase, ZoomPhase::WrapTransition);
        assert_eq!(zoom.wrap_t(), 0.0);
    }

    #[test]
    fn completed_wrap_lands_on_target_and_pulls_iterations_back() {
        let mut zoom = controller();
        let mut uniforms = FractalUniforms::default();
        let camera = CameraPose::default();

        let mut report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        while !report.wrap_started {
            report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        }
        assert_eq!(uniforms.iterations, 12);

        let start_scale = uniforms.scale;
        let target_scale = zoom.transition().expect("wrap in progress").target_scale;

        let mut frames = 0;
        loop {
            frames += 1;
            let report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
            assert!(uniforms.scale <= start_scale);
            if report.wrap_completed {
                break;
            }
            assert!(zoom.wrap_in_progress());
        }

        assert!(frames <= 61);
        assert!(!zoom.wrap_in_progress());
        assert_eq!(zoom.wrap_t(), 0.0);
        assert_eq!(uniforms.scale, target_scale);
        assert_approx_eq(uniforms.scale, start_scale / 3.0);
        assert_eq!(uniforms.iterations, 10);

        let status = zoom.status();
        let base = status.base_iterations.expect("baseline cached");
        assert!(uniforms.iterations >= status.min_iterations);
        assert!(uniforms.iterations <= base + 2);
    }

    #[test]
    fn growth_resumes_after_wrap_completes() {
        let mut zoom = controller();
        let camera = CameraPose::default();
        let mut uniforms = uniforms_at_scale(99.99);

        let report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        assert!(report.wrap_started);
        let report = zoom.update(2.0, FractalKind::Menger, &camera, &mut uniforms);
        assert!(report.wrap_completed);

        let before = uniforms.scale;
        let report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);

        assert_eq!(report.phase, ZoomPhase::Idle);
        assert!(uniforms.scale > before);
    }

    #[test]
    fn wrap_completes_on_the_frame_duration_is_exceeded() {
        let mut zoom = controller_with(ZoomSettings {
            wrap_duration_secs: 0.5,
            ..enabled_settings()
        });
        let camera = CameraPose::default();
        let mut uniforms = uniforms_at_scale(99.99);

        let report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        assert!(report.wrap_started);
        let target_scale = zoom.transition().expect("wrap in progress").target_scale;

        let first = zoom.update(0.3, FractalKind::Menger, &camera, &mut uniforms);
        assert!(!first.wrap_completed);
        assert!(zoom.wrap_in_progress());
        assert!(uniforms.scale > target_scale);

        let second = zoom.update(0.3, FractalKind::Menger, &camera, &mut uniforms);
        assert!(second.wrap_completed);
        assert!(!zoom.wrap_in_progress());
        assert_eq!(uniforms.scale, target_scale);
    }

    #[test]
    fn growth_is_paused_during_transition() {
        let mut zoom = controller();
        let camera = CameraPose::default();
        let mut uniforms = uniforms_at_scale(99.99);

        zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        let depth_at_wrap = zoom.zoom_depth();

        for _ in 0..10 {
            let before = uniforms.scale;
            let report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
            assert!(!report.wrap_started);
            assert!(uniforms.scale <= before);
        }

        assert_eq!(zoom.zoom_depth(), depth_at_wrap);
    }

    #[test]
    fn iterations_switch_discretely_at_eased_midpoint() {
        let mut zoom = controller();
        let camera = CameraPose::default();
        let mut uniforms = FractalUniforms {
            scale: 1.0,
            iterations: 8,
            ..FractalUniforms::default()
        };
        zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        uniforms.iterations = 12;
        uniforms.scale = 150.0;
        let outcome = zoom.perform_scale_wrap(3.0, &mut uniforms);
        assert_eq!(
            outcome,
            WrapOutcome::Started {
                target_scale: 50.0,
                target_iterations: 10
            }
        );

        zoom.update(0.25, FractalKind::Menger, &camera, &mut uniforms);
        assert_eq!(uniforms.iterations, 12);

        zoom.update(0.3, FractalKind::Menger, &camera, &mut uniforms);
        assert_eq!(uniforms.iterations, 10);
    }

    #[test]
    fn wrap_never_starts_at_or_below_threshold() {
        let mut zoom = controller();
        let camera = CameraPose::default();
        let mut uniforms = uniforms_at_scale(50.0);

        let report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);

        assert!(!report.wrap_started);
        assert!(!zoom.wrap_in_progress());
    }

    #[test]
    fn emergency_reset_when_wrap_would_underflow() {
        let mut zoom = controller();
        let mut uniforms = uniforms_at_scale(0.015);

        let outcome = zoom.perform_scale_wrap(2.0, &mut uniforms);

        assert_eq!(outcome, WrapOutcome::EmergencyReset);
        assert_eq!(uniforms.scale, 1.0);
        assert_eq!(zoom.zoom_depth(), 1.0);
        assert_eq!(zoom.state().detail.last_scale_mark(), 1.0);
        assert!(!zoom.wrap_in_progress());
        assert_eq!(zoom.status().last_warning, Some(ZoomWarning::EmergencyReset));
    }

    #[test]
    fn emergency_reset_is_reported_from_update() {
        let mut zoom = controller_with(ZoomSettings {
            wrap_threshold: 0.015,
            ..enabled_settings()
        });
        let camera = CameraPose::default();
        let mut uniforms = uniforms_at_scale(0.015);

        let report = zoom.update(DT, FractalKind::Sierpinski, &camera, &mut uniforms);

        assert_eq!(report.warning, Some(ZoomWarning::EmergencyReset));
        assert!(!report.wrap_started);
        assert_eq!(report.phase, ZoomPhase::Idle);
        assert_eq!(uniforms.scale, 1.0);
    }

    #[test]
    fn unusable_factor_resets_instead_of_wrapping() {
        let mut zoom = controller();
        let mut uniforms = uniforms_at_scale(120.0);

        let outcome = zoom.perform_scale_wrap(1.0, &mut uniforms);

        assert_eq!(outcome, WrapOutcome::EmergencyReset);
        assert_eq!(uniforms.scale, 1.0);
    }

    #[test]
    fn cumulative_depth_restarts_from_post_wrap_scale() {
        let mut zoom = controller();
        let camera = CameraPose::default();
        let mut uniforms = FractalUniforms::default();

        let mut report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        while !report.wrap_started {
            report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        }

        let target_scale = zoom.transition().expect("wrap in progress").target_scale;
        assert_eq!(zoom.zoom_depth(), target_scale);
        assert!(zoom.zoom_depth() < 100.0);
    }

    #[test]
    fn unsupported_fractal_is_a_pure_no_op() {
        let mut zoom = controller();
        let camera = CameraPose::default();
        let mut uniforms = uniforms_at_scale(42.0);
        zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);

        let zoom_before = zoom.clone();
        let uniforms_before = uniforms;

        for kind in [
            FractalKind::Primitives,
            FractalKind::World,
            FractalKind::Truchet,
            FractalKind::DecPreview,
        ] {
            let report = zoom.update(DT, kind, &camera, &mut uniforms);
            assert!(!report.active);
        }

        assert_eq!(zoom, zoom_before);
        assert_eq!(uniforms, uniforms_before);
    }

    #[test]
    fn disabled_zoom_is_a_pure_no_op() {
        let mut zoom = controller_with(ZoomSettings::default());
        let camera = CameraPose::default();
        let mut uniforms = FractalUniforms::default();
        let zoom_before = zoom.clone();

        let report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);

        assert!(!report.active);
        assert_eq!(zoom, zoom_before);
        assert_eq!(uniforms, FractalUniforms::default());
    }

    #[test]
    fn degenerate_delta_skips_frame_without_mutation() {
        let mut zoom = controller();
        let camera = CameraPose::default();
        let mut uniforms = FractalUniforms::default();
        let zoom_before = zoom.clone();

        for delta in [0.0, -0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let report = zoom.update(delta, FractalKind::Menger, &camera, &mut uniforms);
            assert!(report.skipped);
        }

        assert_eq!(zoom, zoom_before);
        assert_eq!(uniforms, FractalUniforms::default());
    }

    #[test]
    fn stalled_frame_growth_is_bounded_by_max_delta() {
        let mut zoom = controller();
        let camera = CameraPose::default();
        let mut uniforms = FractalUniforms::default();

        zoom.update(3600.0, FractalKind::Menger, &camera, &mut uniforms);

        assert_approx_eq(uniforms.scale, 1.05);
    }

    #[test]
    fn non_finite_store_scale_is_recovered() {
        let mut zoom = controller();
        let camera = CameraPose::default();
        let mut uniforms = uniforms_at_scale(f64::NAN);

        let report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);

        assert_eq!(report.warning, Some(ZoomWarning::NonFiniteReset));
        assert_eq!(uniforms.scale, 1.0);
        assert_eq!(zoom.zoom_depth(), 1.0);
    }

    #[test]
    fn grown_scale_is_capped_at_safe_maximum() {
        let mut zoom = controller_with(ZoomSettings {
            safe_scale_max: 150.0,
            ..enabled_settings()
        });
        let camera = CameraPose::default();
        let mut uniforms = uniforms_at_scale(149.99);

        let report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);

        assert!(report.wrap_started);
        assert_eq!(uniforms.scale, 150.0);
        assert_approx_eq(
            zoom.transition().expect("wrap in progress").target_scale,
            50.0,
        );
    }

    #[test]
    fn mandelbulb_wraps_by_its_power() {
        let mut zoom = controller();
        let camera = CameraPose::default();
        let mut uniforms = FractalUniforms {
            scale: 99.99,
            power: 8.0,
            ..FractalUniforms::default()
        };

        zoom.update(DT, FractalKind::Mandelbulb, &camera, &mut uniforms);

        let transition = zoom.transition().expect("wrap in progress");
        assert_approx_eq(transition.target_scale, transition.start_scale / 8.0);
    }

    #[test]
    fn detail_is_revealed_as_scale_grows_and_capped() {
        let mut zoom = controller();
        let camera = CameraPose::default();
        let mut uniforms = FractalUniforms::default();
        let mut revealed = 0;

        while uniforms.scale < 90.0 {
            let report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
            if report.iterations_revealed {
                revealed += 1;
            }
        }

        assert_eq!(revealed, 4);
        assert_eq!(uniforms.iterations, 12);
    }

    #[test]
    fn origin_mode_pins_zoom_center() {
        let mut zoom = controller();
        let camera = CameraPose {
            position: Vec3::new(4.0, 5.0, 6.0),
            forward: Vec3::new(0.0, 1.0, 0.0),
        };
        let mut uniforms = FractalUniforms {
            zoom_center: Vec3::new(9.0, 9.0, 9.0),
            ..FractalUniforms::default()
        };

        zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);

        assert_eq!(uniforms.zoom_center, Vec3::ZERO);
    }

    #[test]
    fn view_ray_mode_tracks_camera_every_frame() {
        let mut zoom = controller_with(ZoomSettings {
            zoom_center_mode: ZoomCenterMode::ViewRay,
            zoom_center_distance: 2.0,
            ..enabled_settings()
        });
        let mut uniforms = FractalUniforms::default();
        let mut camera = CameraPose {
            position: Vec3::new(1.0, 0.0, 0.0),
            forward: Vec3::new(0.0, 0.0, -1.0),
        };

        zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        assert_eq!(uniforms.zoom_center, Vec3::new(1.0, 0.0, -2.0));

        camera.forward = Vec3::new(0.0, 1.0, 0.0);
        zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        assert_eq!(uniforms.zoom_center, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn auto_rotation_advances_rotation_y() {
        let mut zoom = controller_with(ZoomSettings {
            auto_rotate: true,
            rotation_speed: 0.5,
            ..enabled_settings()
        });
        let camera = CameraPose::default();
        let mut uniforms = FractalUniforms::default();

        zoom.update(0.1, FractalKind::Menger, &camera, &mut uniforms);

        assert_approx_eq(uniforms.rotation.y, 0.05);
        assert_eq!(uniforms.rotation.x, 0.0);
    }

    #[test]
    fn camera_drift_is_off_by_default() {
        let mut zoom = controller();
        let camera = CameraPose::default();
        let mut uniforms = FractalUniforms::default();
        let before = uniforms.camera_position;

        zoom.update(0.5, FractalKind::Menger, &camera, &mut uniforms);

        assert_eq!(uniforms.camera_position, before);
    }

    #[test]
    fn camera_drift_nudges_mirror_forward() {
        let mut zoom = controller_with(ZoomSettings {
            camera_drift: true,
            ..enabled_settings()
        });
        let camera = CameraPose::default();
        let mut uniforms = FractalUniforms::default();

        zoom.update(0.5, FractalKind::Menger, &camera, &mut uniforms);

        assert_approx_eq(uniforms.camera_position.z, 2.99);
    }

    #[test]
    fn drifted_mirror_is_kept_through_a_wrap() {
        let mut zoom = controller_with(ZoomSettings {
            camera_drift: true,
            speed_multiplier: 5.0,
            ..enabled_settings()
        });
        let camera = CameraPose::default();
        let mut uniforms = FractalUniforms::default();

        let mut report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        while !report.wrap_started {
            report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        }
        let drifted = uniforms.camera_position;
        assert!(drifted.z < 3.0);

        while zoom.wrap_in_progress() {
            zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
            assert_eq!(uniforms.camera_position, drifted);
        }
    }

    #[test]
    fn wrap_leaves_mirror_alone_without_drift() {
        let mut zoom = controller();
        let camera = CameraPose {
            position: Vec3::new(5.0, 5.0, 5.0),
            ..CameraPose::default()
        };
        let mut uniforms = uniforms_at_scale(99.99);
        let mirror = uniforms.camera_position;

        let report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        assert!(report.wrap_started);
        zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        zoom.set_enabled(false, &mut uniforms);

        assert_eq!(uniforms.camera_position, mirror);
    }

    #[test]
    fn disabling_mid_transition_lands_on_targets() {
        let mut zoom = controller();
        let camera = CameraPose::default();
        let mut uniforms = uniforms_at_scale(99.99);

        zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        let transition = *zoom.transition().expect("wrap in progress");

        zoom.set_enabled(false, &mut uniforms);

        assert!(!zoom.is_enabled());
        assert!(!zoom.wrap_in_progress());
        assert_eq!(uniforms.scale, transition.target_scale);
        assert_eq!(uniforms.iterations, transition.target_iterations);

        zoom.set_enabled(true, &mut uniforms);
        let report = zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        assert_eq!(report.phase, ZoomPhase::Idle);
    }

    #[test]
    fn reset_clears_depth_and_baseline_but_keeps_configuration() {
        let mut zoom = controller();
        zoom.set_speed_multiplier(2.5).expect("speed is valid");
        let camera = CameraPose::default();
        let mut uniforms = uniforms_at_scale(99.99);
        zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        assert!(zoom.wrap_in_progress());

        zoom.reset();

        assert!(zoom.is_enabled());
        assert_eq!(zoom.settings().speed_multiplier, 2.5);
        assert!(!zoom.wrap_in_progress());
        assert_eq!(zoom.zoom_depth(), 1.0);
        assert_eq!(zoom.status().base_iterations, None);
    }

    #[test]
    fn rejected_reconfiguration_leaves_settings_untouched() {
        let mut zoom = controller();

        let result = zoom.set_speed_multiplier(0.0);

        assert!(result.is_err());
        assert_eq!(zoom.settings().speed_multiplier, 1.0);
    }

    #[test]
    fn zoom_depth_label_switches_to_exponent_notation() {
        let mut zoom = controller();
        assert_eq!(zoom.zoom_depth_label(), "x1.00");

        let camera = CameraPose::default();
        let mut uniforms = FractalUniforms::default();
        zoom.update(DT, FractalKind::Menger, &camera, &mut uniforms);
        assert!(zoom.zoom_depth_label().starts_with("x1.0"));
    }
}
