pub mod controller;
pub mod errors;
pub mod fps;
pub mod hysteresis;
pub mod ports;
pub mod settings;
pub mod status;

pub use controller::AdaptiveResolutionController;
pub use errors::ResolutionConfigError;
pub use fps::FpsMeter;
pub use hysteresis::{BandPosition, ScaleDirection, SustainCounters, classify};
pub use ports::DisplaySurface;
pub use settings::ResolutionSettings;
pub use status::{ResolutionChange, ResolutionStatus, ResolutionUpdateReport};
