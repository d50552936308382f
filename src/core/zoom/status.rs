#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomPhase {
    #[default]
    Idle,
    WrapTransition,
}

impl ZoomPhase {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Idle => "Zooming",
            Self::WrapTransition => "Wrapping",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomWarning {
    /// A wrap would have dropped below the safe scale floor; scale was reset to 1.0.
    EmergencyReset,
    /// The store held a non-finite or non-positive scale; scale was reset to 1.0.
    NonFiniteReset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoomUpdateReport {
    /// Frame dropped because `delta` was zero, negative or non-finite.
    pub skipped: bool,
    /// Zoom was enabled and the active fractal supports it.
    pub active: bool,
    pub phase: ZoomPhase,
    pub wrap_started: bool,
    pub wrap_completed: bool,
    pub iterations_revealed: bool,
    pub warning: Option<ZoomWarning>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoomStatus {
    pub enabled: bool,
    pub phase: ZoomPhase,
    pub zoom_depth: f64,
    pub wrap_t: f64,
    pub base_iterations: Option<u32>,
    pub min_iterations: u32,
    pub max_iterations: u32,
    pub last_warning: Option<ZoomWarning>,
}

impl Default for ZoomStatus {
    fn default() -> Self {
        Self {
            enabled: false,
            phase: ZoomPhase::Idle,
            zoom_depth: 1.0,
            wrap_t: 0.0,
            base_iterations: None,
            min_iterations: 0,
            max_iterations: 0,
            last_warning: None,
        }
    }
}
