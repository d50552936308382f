use crate::core::zoom::detail::DetailLevels;
use crate::core::zoom::status::{ZoomPhase, ZoomWarning};
use crate::core::zoom::transition::WrapTransition;

/// Runtime state of the zoom controller. Only mutated inside the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    pub enabled: bool,
    pub cumulative_scale: f64,
    pub transition: Option<WrapTransition>,
    pub detail: DetailLevels,
    pub last_warning: Option<ZoomWarning>,
}

impl ZoomState {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            cumulative_scale: 1.0,
            transition: None,
            detail: DetailLevels::default(),
            last_warning: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        if self.transition.is_some() {
            ZoomPhase::WrapTransition
        } else {
            ZoomPhase::Idle
        }
    }

    /// Clears transition and depth tracking. `enabled` survives.
    pub fn reset(&mut self) {
        self.cumulative_scale = 1.0;
        self.transition = None;
        self.detail.reset();
        self.last_warning = None;
    }
}
