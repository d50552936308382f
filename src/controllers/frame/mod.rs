pub mod commands;
pub mod driver;
pub mod headless_surface;
pub mod inputs;

pub use commands::{CommandError, ControlCommand, ControlHandle, ControlQueueClosed};
pub use driver::{FrameDriver, FrameReport};
pub use headless_surface::HeadlessSurface;
pub use inputs::FrameInputs;
