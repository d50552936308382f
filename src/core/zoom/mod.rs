pub mod controller;
pub mod detail;
pub mod errors;
pub mod settings;
pub mod state;
pub mod status;
pub mod transition;

pub use controller::{WrapOutcome, ZoomController};
pub use errors::ZoomConfigError;
pub use settings::{ZoomCenterMode, ZoomSettings};
pub use state::ZoomState;
pub use status::{ZoomPhase, ZoomStatus, ZoomUpdateReport, ZoomWarning};
pub use transition::{WrapTransition, smoothstep};
