pub mod display_surface;

pub use display_surface::DisplaySurface;
