pub mod controllers;
pub mod core;
pub mod input;
pub mod logging;

pub use crate::controllers::frame::{
    ControlCommand, ControlHandle, FrameDriver, FrameInputs, FrameReport, HeadlessSurface,
};
pub use crate::controllers::simulation::{
    SimulationConfig, SimulationError, SimulationSummary, SyntheticLoad, simulate, simulate_sweep,
};
pub use crate::core::data::{CameraPose, DisplayUniforms, FractalUniforms, ParameterStore, Vec3};
pub use crate::core::fractals::FractalKind;
pub use crate::core::resolution::{AdaptiveResolutionController, DisplaySurface, ResolutionSettings};
pub use crate::core::zoom::{ZoomCenterMode, ZoomController, ZoomSettings};
pub use crate::input::cli::SimulateArgs;
pub use crate::logging::init_tracing;

#[cfg(feature = "gui")]
pub use crate::input::gui::run_viewer;
