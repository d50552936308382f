//! Per-frame scheduling of the zoom and resolution controllers.
//!
//! The driver owns the parameter store and both controllers. Each call to
//! [`FrameDriver::advance`] is one rendered frame: queued commands are applied
//! first, then zoom, then resolution, all on the caller's thread.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use tracing::{info, warn};

use crate::controllers::frame::commands::{ControlCommand, ControlHandle};
use crate::controllers::frame::inputs::FrameInputs;
use crate::core::data::ParameterStore;
use crate::core::fractals::FractalKind;
use crate::core::resolution::{
    AdaptiveResolutionController, DisplaySurface, ResolutionConfigError, ResolutionUpdateReport,
};
use crate::core::zoom::{ZoomController, ZoomUpdateReport};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    pub frame: u64,
    pub applied_commands: u32,
    pub rejected_commands: u32,
    pub fractal_switched: bool,
    pub zoom: ZoomUpdateReport,
    pub resolution: ResolutionUpdateReport,
}

pub struct FrameDriver {
    store: ParameterStore,
    zoom: ZoomController,
    resolution: AdaptiveResolutionController,
    active_fractal: Option<FractalKind>,
    frames: u64,
    handle: ControlHandle,
    commands: Receiver<ControlCommand>,
}

impl FrameDriver {
    #[must_use]
    pub fn new(zoom: ZoomController, resolution: AdaptiveResolutionController) -> Self {
        let (sender, commands) = mpsc::channel();

        Self {
            store: ParameterStore::default(),
            zoom,
            resolution,
            active_fractal: None,
            frames: 0,
            handle: ControlHandle::new(sender),
            commands,
        }
    }

    #[must_use]
    pub fn with_store(mut self, store: ParameterStore) -> Self {
        self.store = store;
        self
    }

    pub fn advance(
        &mut self,
        elapsed: Duration,
        inputs: &FrameInputs,
        surface: &mut dyn DisplaySurface,
    ) -> FrameReport {
        let delta = elapsed.as_secs_f64();
        self.frames += 1;

        let (applied_commands, rejected_commands) = self.drain_commands();
        let fractal_switched = self.track_fractal(inputs.fractal);

        let zoom = self.zoom.update(
            delta,
            inputs.fractal,
            &inputs.camera,
            &mut self.store.fractal,
        );
        let resolution = self
            .resolution
            .update(delta, &mut self.store.display, surface);

        FrameReport {
            frame: self.frames,
            applied_commands,
            rejected_commands,
            fractal_switched,
            zoom,
            resolution,
        }
    }

    /// Applies a new device pixel ratio straight away, so the surface can be
    /// resized in the same event that reported the change.
    pub fn set_base_pixel_ratio(
        &mut self,
        base_pixel_ratio: f64,
        surface: &mut dyn DisplaySurface,
    ) -> Result<(), ResolutionConfigError> {
        self.resolution.set_base_pixel_ratio(base_pixel_ratio, surface)
    }

    /// A new handle onto this driver's command queue.
    #[must_use]
    pub fn control_handle(&self) -> ControlHandle {
        self.handle.clone()
    }

    #[must_use]
    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    /// Host-owned uniforms (iterations, power) are set through here.
    pub fn store_mut(&mut self) -> &mut ParameterStore {
        &mut self.store
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    #[must_use]
    pub fn resolution(&self) -> &AdaptiveResolutionController {
        &self.resolution
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn drain_commands(&mut self) -> (u32, u32) {
        let mut applied = 0;
        let mut rejected = 0;

        loop {
            let command = match self.commands.try_recv() {
                Ok(command) => command,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };

            match command.apply(&mut self.zoom, &mut self.resolution, &mut self.store.fractal) {
                Ok(()) => applied += 1,
                Err(error) => {
                    warn!(?command, %error, "control command rejected");
                    rejected += 1;
                }
            }
        }

        (applied, rejected)
    }

    /// Resets zoom when the active fractal changes. Scale returns to 1.0 and
    /// iterations to the learned baseline, which is then learned again.
    fn track_fractal(&mut self, fractal: FractalKind) -> bool {
        let previous = self.active_fractal.replace(fractal);
        match previous {
            Some(previous) if previous != fractal => {
                info!(from = ?previous, to = ?fractal, "fractal switched, resetting zoom");
                if let Some(base) = self.zoom.status().base_iterations {
                    self.store.fractal.iterations = base;
                }
                self.zoom.reset();
                self.store.fractal.scale = 1.0;
                true
            }
            _ => false,
        }
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(
            ZoomController::default(),
            AdaptiveResolutionController::default(),
        )
    }
}
