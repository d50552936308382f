//! Main viewer loop.

use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{error, info, warn};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::frame::{ControlHandle, FrameDriver, FrameInputs};
use crate::core::data::CameraPose;
use crate::core::fractals::{FractalKind, fractal_config};
use crate::core::resolution::{AdaptiveResolutionController, ResolutionSettings};
use crate::core::zoom::{ZoomCenterMode, ZoomController};
use crate::input::gui::errors::ViewerError;
use crate::input::gui::panel_state::PanelState;
use crate::input::gui::presenter::PixelsPresenter;
use crate::input::gui::window_surface::WindowSurface;

struct ViewerApp {
    presenter: PixelsPresenter,
    driver: FrameDriver,
    control: ControlHandle,
    surface: WindowSurface,
    panel: PanelState,
    camera: CameraPose,
    scale_factor: f64,
    last_frame: Instant,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl ViewerApp {
    fn new(window: &'static Window, event_loop: &EventLoop<()>) -> Result<Self, ViewerError> {
        let scale_factor = window.scale_factor();
        let presenter = PixelsPresenter::new(window)?;

        let resolution = AdaptiveResolutionController::new(ResolutionSettings {
            base_pixel_ratio: scale_factor,
            ..ResolutionSettings::default()
        })
        .unwrap_or_else(|error| {
            warn!(%error, "display scale factor rejected, using default resolution settings");
            AdaptiveResolutionController::default()
        });
        let driver = FrameDriver::new(ZoomController::default(), resolution);
        let control = driver.control_handle();

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        Ok(Self {
            presenter,
            driver,
            control,
            surface: WindowSurface::new(scale_factor),
            panel: PanelState::default(),
            camera: CameraPose::default(),
            scale_factor,
            last_frame: Instant::now(),
            egui_ctx,
            egui_state,
        })
    }

    fn redraw(&mut self, window: &Window) -> Result<(), ViewerError> {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let inputs = FrameInputs::new(self.panel.fractal, self.camera);
        self.driver.advance(elapsed, &inputs, &mut self.surface);

        if self.surface.take_buffer_stale() {
            self.presenter
                .resize_buffer(self.surface.pixel_ratio(), self.scale_factor)?;
        }

        let egui_output = self.update_ui(window, now);
        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        let uniforms = self.driver.store().fractal;
        self.presenter
            .render(self.panel.fractal, &uniforms, egui_output, &self.egui_ctx)
    }

    fn update_ui(&mut self, window: &Window, now: Instant) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let previous = self.panel;
        let mut panel = self.panel;
        panel.reset_requested = false;

        let zoom_status = self.driver.zoom().status();
        let depth_label = self.driver.zoom().zoom_depth_label();
        let resolution_status = self.driver.resolution().status();
        let (buffer_width, buffer_height) = self.presenter.buffer_size();
        let toast = self.surface.visible_toast(now).map(str::to_owned);

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Zoom")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 300.0])
                .show(ctx, |ui| {
                    ui.heading("SDF Explorer");
                    ui.separator();

                    egui::ComboBox::from_id_source("fractal_kind")
                        .selected_text(fractal_config(panel.fractal).display_name)
                        .show_ui(ui, |ui| {
                            for &kind in FractalKind::ALL {
                                ui.selectable_value(
                                    &mut panel.fractal,
                                    kind,
                                    fractal_config(kind).display_name,
                                );
                            }
                        });

                    let zoom_supported = fractal_config(panel.fractal).zoom_supported;
                    ui.add_enabled(
                        zoom_supported,
                        egui::Checkbox::new(&mut panel.zoom_enabled, "Infinite zoom"),
                    );
                    ui.add(egui::Slider::new(&mut panel.zoom_speed, 0.1..=10.0).text("Speed"));

                    egui::ComboBox::from_id_source("zoom_center")
                        .selected_text(panel.center_mode.display_name())
                        .show_ui(ui, |ui| {
                            for &mode in ZoomCenterMode::ALL {
                                ui.selectable_value(&mut panel.center_mode, mode, mode.display_name());
                            }
                        });
                    ui.checkbox(&mut panel.auto_rotate, "Auto rotate");
                    ui.checkbox(&mut panel.camera_drift, "Camera drift");
                    if ui.button("Reset zoom").clicked() {
                        panel.reset_requested = true;
                    }

                    ui.separator();
                    ui.label(format!(
                        "{} {}",
                        zoom_status.phase.display_name(),
                        depth_label
                    ));
                    if let Some(base) = zoom_status.base_iterations {
                        ui.label(format!(
                            "Iterations: base {base}, range {}..={}",
                            zoom_status.min_iterations, zoom_status.max_iterations
                        ));
                    }

                    ui.separator();
                    ui.checkbox(&mut panel.adaptive_enabled, "Adaptive resolution");
                    ui.add(egui::Slider::new(&mut panel.target_fps, 24.0..=144.0).text("Target FPS"));
                    ui.label(format!(
                        "Render scale: {:.0}% ({buffer_width}x{buffer_height})",
                        resolution_status.render_scale * 100.0
                    ));
                    ui.label(format!(
                        "FPS: {:.1} (avg {:.1})",
                        resolution_status.instant_fps, resolution_status.fps_ema
                    ));
                });

            if let Some(message) = &toast {
                egui::Area::new("resolution_toast")
                    .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
                    .show(ctx, |ui| {
                        ui.label(egui::RichText::new(message).strong());
                    });
            }
        });

        for command in panel.commands_since(&previous) {
            if let Err(error) = self.control.send(command) {
                warn!(%error, "viewer command dropped");
            }
        }
        self.panel = panel;

        output
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), ViewerError> {
        self.presenter.resize_surface(width, height)?;
        self.presenter
            .resize_buffer(self.surface.pixel_ratio(), self.scale_factor)
    }

    fn rescale(&mut self, window: &Window, scale_factor: f64) -> Result<(), ViewerError> {
        self.scale_factor = scale_factor;
        self.egui_ctx.set_pixels_per_point(scale_factor as f32);
        if let Err(error) = self.driver.set_base_pixel_ratio(scale_factor, &mut self.surface) {
            warn!(%error, "display scale factor rejected, keeping previous pixel ratio");
        }
        self.surface.take_buffer_stale();

        let size = window.inner_size();
        self.resize(size.width, size.height)
    }

    fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) {
        let _ = self.egui_state.on_window_event(window, event);
    }
}

/// Opens the viewer window and blocks until it is closed.
pub fn run_viewer() -> Result<(), ViewerError> {
    let event_loop = EventLoop::new()?;

    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("SDF Explorer")
            .with_inner_size(LogicalSize::new(960.0, 640.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = ViewerApp::new(window, &event_loop)?;
    info!(scale_factor = app.scale_factor, "viewer started");

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            app.handle_window_event(window, event);

            let result = match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                    Ok(())
                }
                WindowEvent::RedrawRequested => app.redraw(window),
                WindowEvent::Resized(size) => app.resize(size.width, size.height),
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    app.rescale(window, *scale_factor)
                }
                _ => Ok(()),
            };

            if let Err(error) = result {
                error!(%error, "viewer error, closing");
                elwt.exit();
            }
        }
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;

    Ok(())
}
