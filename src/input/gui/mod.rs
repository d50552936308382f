//! Interactive viewer: a winit window with a pixels framebuffer that tracks
//! the adaptive render scale, and an egui panel for the zoom settings.

mod app;
mod errors;
mod panel_state;
mod presenter;
mod preview;
mod window_surface;

pub use app::run_viewer;
pub use errors::ViewerError;
