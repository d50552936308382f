use clap::{ArgAction, Parser};

use crate::controllers::simulation::{SimulationConfig, SyntheticLoad};
use crate::core::data::ParameterStore;
use crate::core::fractals::FractalKind;
use crate::core::resolution::ResolutionSettings;
use crate::core::zoom::{ZoomCenterMode, ZoomSettings};

/// Headless run of the zoom and adaptive resolution controllers against a
/// synthetic GPU load.
#[derive(Parser, Debug, Clone)]
#[command(name = "sdf_explorer", version)]
pub struct SimulateArgs {
    #[arg(long, value_enum, default_value_t = FractalKind::Menger)]
    pub fractal: FractalKind,

    /// Simulate every fractal kind in parallel instead of just one.
    #[arg(long, default_value_t = false)]
    pub sweep: bool,

    #[arg(long, default_value_t = 3600)]
    pub frames: u32,

    /// Frame time at full resolution and the reference iteration count.
    #[arg(long, default_value_t = 16.0)]
    pub frame_ms: f64,

    #[arg(long, default_value_t = 8)]
    pub reference_iterations: u32,

    /// Iteration count the store starts with.
    #[arg(long, default_value_t = 8)]
    pub iterations: u32,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub zoom: bool,

    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,

    #[arg(long, value_enum, default_value_t = ZoomCenterMode::Origin)]
    pub center: ZoomCenterMode,

    #[arg(long, default_value_t = false)]
    pub auto_rotate: bool,

    #[arg(long, default_value_t = false)]
    pub camera_drift: bool,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub adaptive: bool,

    #[arg(long, default_value_t = 58.0)]
    pub target_fps: f64,

    #[arg(long, default_value_t = 3.0)]
    pub hysteresis_band: f64,
}

impl SimulateArgs {
    #[must_use]
    pub fn simulation_config(&self) -> SimulationConfig {
        let mut store = ParameterStore::default();
        store.fractal.iterations = self.iterations;

        SimulationConfig {
            fractal: self.fractal,
            frames: self.frames,
            load: SyntheticLoad {
                full_res_frame_ms: self.frame_ms,
                reference_iterations: self.reference_iterations,
            },
            zoom: ZoomSettings {
                enabled: self.zoom,
                speed_multiplier: self.speed,
                zoom_center_mode: self.center,
                auto_rotate: self.auto_rotate,
                camera_drift: self.camera_drift,
                ..ZoomSettings::default()
            },
            resolution: ResolutionSettings {
                enabled: self.adaptive,
                target_fps: self.target_fps,
                hysteresis_band: self.hysteresis_band,
                ..ResolutionSettings::default()
            },
            store,
            ..SimulationConfig::default()
        }
    }
}
