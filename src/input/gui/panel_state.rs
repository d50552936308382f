use crate::controllers::frame::ControlCommand;
use crate::core::fractals::FractalKind;
use crate::core::resolution::ResolutionSettings;
use crate::core::zoom::{ZoomCenterMode, ZoomSettings};

/// Values bound to the egui widgets. Edits are turned into control commands
/// by comparing against the previous frame's values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelState {
    pub fractal: FractalKind,
    pub zoom_enabled: bool,
    pub zoom_speed: f64,
    pub center_mode: ZoomCenterMode,
    pub auto_rotate: bool,
    pub camera_drift: bool,
    pub adaptive_enabled: bool,
    pub target_fps: f64,
    pub reset_requested: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        let zoom = ZoomSettings::default();
        let resolution = ResolutionSettings::default();

        Self {
            fractal: FractalKind::default(),
            zoom_enabled: zoom.enabled,
            zoom_speed: zoom.speed_multiplier,
            center_mode: zoom.zoom_center_mode,
            auto_rotate: zoom.auto_rotate,
            camera_drift: zoom.camera_drift,
            adaptive_enabled: resolution.enabled,
            target_fps: resolution.target_fps,
            reset_requested: false,
        }
    }
}

impl PanelState {
    #[must_use]
    pub fn commands_since(&self, previous: &Self) -> Vec<ControlCommand> {
        let mut commands = Vec::new();

        if self.zoom_enabled != previous.zoom_enabled {
            commands.push(ControlCommand::SetZoomEnabled(self.zoom_enabled));
        }
        if self.zoom_speed != previous.zoom_speed {
            commands.push(ControlCommand::SetZoomSpeed(self.zoom_speed));
        }
        if self.center_mode != previous.center_mode {
            commands.push(ControlCommand::SetZoomCenterMode(self.center_mode));
        }
        if self.auto_rotate != previous.auto_rotate {
            commands.push(ControlCommand::SetAutoRotate(self.auto_rotate));
        }
        if self.camera_drift != previous.camera_drift {
            commands.push(ControlCommand::SetCameraDrift(self.camera_drift));
        }
        if self.adaptive_enabled != previous.adaptive_enabled {
            commands.push(ControlCommand::SetAdaptiveEnabled(self.adaptive_enabled));
        }
        if self.target_fps != previous.target_fps {
            commands.push(ControlCommand::SetTargetFps(self.target_fps));
        }
        if self.reset_requested {
            commands.push(ControlCommand::ResetZoom);
        }

        commands
    }
}
