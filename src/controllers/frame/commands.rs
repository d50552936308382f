//! Settings changes issued from outside the render loop.
//!
//! Commands are queued on an `mpsc` channel and applied by the frame driver
//! at the start of the next frame, so controller state is only ever touched
//! from the thread that renders.

use std::sync::mpsc::{SendError, Sender};

use thiserror::Error;

use crate::core::data::FractalUniforms;
use crate::core::resolution::{AdaptiveResolutionController, ResolutionConfigError};
use crate::core::zoom::{ZoomCenterMode, ZoomConfigError, ZoomController};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlCommand {
    SetZoomEnabled(bool),
    SetZoomSpeed(f64),
    SetZoomCenterMode(ZoomCenterMode),
    SetZoomCenterDistance(f64),
    SetWrapDuration(f64),
    SetAutoRotate(bool),
    SetRotationSpeed(f64),
    SetCameraDrift(bool),
    ResetZoom,
    SetAdaptiveEnabled(bool),
    SetTargetFps(f64),
    SetHysteresisBand(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CommandError {
    #[error("rejected zoom setting: {0}")]
    Zoom(#[from] ZoomConfigError),
    #[error("rejected resolution setting: {0}")]
    Resolution(#[from] ResolutionConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("frame driver is gone, dropped {0:?}")]
pub struct ControlQueueClosed(pub ControlCommand);

/// Clonable sending side of a frame driver's command queue.
#[derive(Debug, Clone)]
pub struct ControlHandle {
    sender: Sender<ControlCommand>,
}

impl ControlHandle {
    pub(crate) fn new(sender: Sender<ControlCommand>) -> Self {
        Self { sender }
    }

    pub fn send(&self, command: ControlCommand) -> Result<(), ControlQueueClosed> {
        self.sender
            .send(command)
            .map_err(|SendError(command)| ControlQueueClosed(command))
    }
}

impl ControlCommand {
    /// Applies the command to the controllers. Invalid values leave every
    /// controller untouched.
    pub fn apply(
        self,
        zoom: &mut ZoomController,
        resolution: &mut AdaptiveResolutionController,
        uniforms: &mut FractalUniforms,
    ) -> Result<(), CommandError> {
        match self {
            Self::SetZoomEnabled(enabled) => zoom.set_enabled(enabled, uniforms),
            Self::SetZoomSpeed(speed) => zoom.set_speed_multiplier(speed)?,
            Self::SetZoomCenterMode(mode) => zoom.set_zoom_center_mode(mode),
            Self::SetZoomCenterDistance(distance) => {
                zoom.reconfigure(|settings| settings.zoom_center_distance = distance)?;
            }
            Self::SetWrapDuration(secs) => {
                zoom.reconfigure(|settings| settings.wrap_duration_secs = secs)?;
            }
            Self::SetAutoRotate(enabled) => {
                zoom.reconfigure(|settings| settings.auto_rotate = enabled)?;
            }
            Self::SetRotationSpeed(speed) => {
                zoom.reconfigure(|settings| settings.rotation_speed = speed)?;
            }
            Self::SetCameraDrift(enabled) => {
                zoom.reconfigure(|settings| settings.camera_drift = enabled)?;
            }
            Self::ResetZoom => zoom.reset(),
            Self::SetAdaptiveEnabled(enabled) => resolution.set_enabled(enabled),
            Self::SetTargetFps(fps) => resolution.set_target_fps(fps)?,
            Self::SetHysteresisBand(band) => resolution.set_hysteresis_band(band)?,
        }

        Ok(())
    }
}
