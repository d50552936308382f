//! Headless frame loop: drives a [`FrameDriver`] with frame times taken
//! from a [`SyntheticLoad`] instead of a real GPU.

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::controllers::frame::{FrameDriver, FrameInputs, HeadlessSurface};
use crate::controllers::simulation::synthetic_load::{SyntheticLoad, SyntheticLoadError};
use crate::core::data::{CameraPose, ParameterStore};
use crate::core::fractals::FractalKind;
use crate::core::resolution::{
    AdaptiveResolutionController, ResolutionConfigError, ResolutionSettings,
};
use crate::core::zoom::{ZoomConfigError, ZoomController, ZoomSettings, ZoomWarning};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Zoom(#[from] ZoomConfigError),
    #[error(transparent)]
    Resolution(#[from] ResolutionConfigError),
    #[error(transparent)]
    Load(#[from] SyntheticLoadError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub fractal: FractalKind,
    pub frames: u32,
    pub load: SyntheticLoad,
    pub zoom: ZoomSettings,
    pub resolution: ResolutionSettings,
    pub camera: CameraPose,
    pub store: ParameterStore,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fractal: FractalKind::default(),
            frames: 3600,
            load: SyntheticLoad::default(),
            zoom: ZoomSettings {
                enabled: true,
                ..ZoomSettings::default()
            },
            resolution: ResolutionSettings::default(),
            camera: CameraPose::default(),
            store: ParameterStore::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    pub fractal: FractalKind,
    pub frames: u32,
    pub simulated_secs: f64,
    pub wraps_started: u32,
    pub wraps_completed: u32,
    pub emergency_resets: u32,
    pub non_finite_resets: u32,
    pub resolution_changes: u32,
    pub final_scale: f64,
    pub final_iterations: u32,
    pub final_render_scale: f64,
    pub min_render_scale: f64,
    pub max_render_scale: f64,
    pub final_fps_ema: f64,
    pub zoom_depth_label: String,
    pub notifications: Vec<String>,
}

pub fn simulate(config: &SimulationConfig) -> Result<SimulationSummary, SimulationError> {
    let load = config.load.validate()?;
    let zoom = ZoomController::new(config.zoom)?;
    let resolution = AdaptiveResolutionController::new(config.resolution)?;
    let mut driver = FrameDriver::new(zoom, resolution).with_store(config.store);
    let mut surface = HeadlessSurface::new(config.resolution.base_pixel_ratio);
    let inputs = FrameInputs::new(config.fractal, config.camera);

    let mut summary = SimulationSummary {
        fractal: config.fractal,
        frames: config.frames,
        simulated_secs: 0.0,
        wraps_started: 0,
        wraps_completed: 0,
        emergency_resets: 0,
        non_finite_resets: 0,
        resolution_changes: 0,
        final_scale: 0.0,
        final_iterations: 0,
        final_render_scale: 0.0,
        min_render_scale: driver.resolution().render_scale(),
        max_render_scale: driver.resolution().render_scale(),
        final_fps_ema: 0.0,
        zoom_depth_label: String::new(),
        notifications: Vec::new(),
    };

    for _ in 0..config.frames {
        let elapsed = load.frame_time(
            driver.resolution().render_scale(),
            driver.store().fractal.iterations,
        );
        summary.simulated_secs += elapsed.as_secs_f64();

        let report = driver.advance(elapsed, &inputs, &mut surface);
        summary.wraps_started += u32::from(report.zoom.wrap_started);
        summary.wraps_completed += u32::from(report.zoom.wrap_completed);
        match report.zoom.warning {
            Some(ZoomWarning::EmergencyReset) => summary.emergency_resets += 1,
            Some(ZoomWarning::NonFiniteReset) => summary.non_finite_resets += 1,
            None => {}
        }
        if report.resolution.change.is_some() {
            summary.resolution_changes += 1;
        }

        let render_scale = driver.resolution().render_scale();
        summary.min_render_scale = summary.min_render_scale.min(render_scale);
        summary.max_render_scale = summary.max_render_scale.max(render_scale);
    }

    let store = driver.store();
    summary.final_scale = store.fractal.scale;
    summary.final_iterations = store.fractal.iterations;
    summary.final_render_scale = store.display.resolution_scale;
    summary.final_fps_ema = driver.resolution().fps_ema();
    summary.zoom_depth_label = driver.zoom().zoom_depth_label();
    summary.notifications = surface.notifications().to_vec();

    debug!(
        fractal = ?config.fractal,
        frames = config.frames,
        wraps = summary.wraps_completed,
        resolution_changes = summary.resolution_changes,
        "simulation finished"
    );

    Ok(summary)
}

/// Runs one independent simulation per fractal kind on the rayon pool.
/// Results keep the order of `kinds`.
pub fn simulate_sweep(
    kinds: &[FractalKind],
    base: &SimulationConfig,
) -> Result<Vec<SimulationSummary>, SimulationError> {
    kinds
        .par_iter()
        .map(|&fractal| {
            simulate(&SimulationConfig {
                fractal,
                ..*base
            })
        })
        .collect()
}
