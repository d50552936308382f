use std::time::{Duration, Instant};

use tracing::info;

use crate::core::resolution::DisplaySurface;

const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Display surface backed by the viewer window. Pixel ratio changes are
/// recorded here and applied to the framebuffer after the frame's controllers
/// have run.
pub struct WindowSurface {
    pixel_ratio: f64,
    buffer_stale: bool,
    toast: Option<(String, Instant)>,
}

impl WindowSurface {
    pub fn new(pixel_ratio: f64) -> Self {
        Self {
            pixel_ratio,
            buffer_stale: false,
            toast: None,
        }
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// True once after each pixel ratio change.
    pub fn take_buffer_stale(&mut self) -> bool {
        std::mem::take(&mut self.buffer_stale)
    }

    pub fn visible_toast(&self, now: Instant) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|(_, shown_at)| now.duration_since(*shown_at) < TOAST_DURATION)
            .map(|(message, _)| message.as_str())
    }
}

impl DisplaySurface for WindowSurface {
    fn set_pixel_ratio(&mut self, pixel_ratio: f64) {
        self.pixel_ratio = pixel_ratio;
        self.buffer_stale = true;
    }

    fn notify(&mut self, message: &str) {
        info!(target: "sdf_explorer::toast", "{message}");
        self.toast = Some((message.to_owned(), Instant::now()));
    }
}
