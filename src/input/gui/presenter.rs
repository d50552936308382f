use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::{Pixels, SurfaceTexture, wgpu};
use winit::window::Window;

use crate::core::data::FractalUniforms;
use crate::core::fractals::FractalKind;
use crate::input::gui::errors::ViewerError;
use crate::input::gui::preview::paint_preview;

/// Framebuffer at the adaptive render resolution, upscaled to the window by
/// pixels, with the egui panel drawn on top at native resolution.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    surface_width: u32,
    surface_height: u32,
    buffer_width: u32,
    buffer_height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, ViewerError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width.max(1), size.height.max(1), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None,
            1,
        );

        Ok(Self {
            pixels,
            egui_renderer,
            surface_width: size.width,
            surface_height: size.height,
            buffer_width: size.width.max(1),
            buffer_height: size.height.max(1),
        })
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), ViewerError> {
        self.surface_width = width;
        self.surface_height = height;
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        Ok(())
    }

    /// Framebuffer size follows `surface * pixel_ratio / scale_factor`.
    pub fn resize_buffer(&mut self, pixel_ratio: f64, scale_factor: f64) -> Result<(), ViewerError> {
        let factor = pixel_ratio / scale_factor;
        let width = scaled_extent(self.surface_width, factor);
        let height = scaled_extent(self.surface_height, factor);
        if (width, height) == (self.buffer_width, self.buffer_height) {
            return Ok(());
        }

        self.pixels.resize_buffer(width, height)?;
        self.buffer_width = width;
        self.buffer_height = height;
        Ok(())
    }

    pub fn buffer_size(&self) -> (u32, u32) {
        (self.buffer_width, self.buffer_height)
    }

    pub fn render(
        &mut self,
        fractal: FractalKind,
        uniforms: &FractalUniforms,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), ViewerError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        paint_preview(
            self.pixels.frame_mut(),
            self.buffer_width,
            self.buffer_height,
            fractal,
            uniforms,
        );

        let surface_size = [self.surface_width, self.surface_height];
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());
            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: surface_size,
                pixels_per_point: egui_ctx.pixels_per_point(),
            };
            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }
            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });
                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }
}

fn scaled_extent(extent: u32, factor: f64) -> u32 {
    let scaled = (f64::from(extent) * factor).round();
    if scaled.is_finite() && scaled >= 1.0 {
        scaled as u32
    } else {
        1
    }
}
