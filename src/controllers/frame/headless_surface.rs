use tracing::info;

use crate::core::resolution::DisplaySurface;

/// Display surface with no window behind it. Keeps the last pixel ratio and
/// every notification so headless runs can report on them.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessSurface {
    pixel_ratio: f64,
    notifications: Vec<String>,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new(base_pixel_ratio: f64) -> Self {
        Self {
            pixel_ratio: base_pixel_ratio,
            notifications: Vec::new(),
        }
    }

    #[must_use]
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    #[must_use]
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl DisplaySurface for HeadlessSurface {
    fn set_pixel_ratio(&mut self, pixel_ratio: f64) {
        self.pixel_ratio = pixel_ratio;
    }

    fn notify(&mut self, message: &str) {
        info!(target: "sdf_explorer::toast", "{message}");
        self.notifications.push(message.to_owned());
    }
}
