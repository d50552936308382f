use crate::core::data::Vec3;

/// `t*t*(3-2t)`, with `t` clamped to `[0, 1]`.
#[must_use]
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Snapshot of an eased scale wrap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapTransition {
    pub start_position: Vec3,
    pub target_position: Vec3,
    pub start_scale: f64,
    pub target_scale: f64,
    pub start_iterations: u32,
    pub target_iterations: u32,
    t: f64,
}

/// Values to write to the store for one transition frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub scale: f64,
    pub camera_position: Vec3,
    /// `None` until the eased progress reaches the midpoint.
    pub iterations: Option<u32>,
    pub finished: bool,
}

impl WrapTransition {
    #[must_use]
    pub fn new(
        position: Vec3,
        start_scale: f64,
        target_scale: f64,
        start_iterations: u32,
        target_iterations: u32,
    ) -> Self {
        Self {
            start_position: position,
            target_position: position,
            start_scale,
            target_scale,
            start_iterations,
            target_iterations,
            t: 0.0,
        }
    }

    #[must_use]
    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn advance(&mut self, delta: f64, duration: f64) -> TransitionFrame {
        self.t += delta / duration;

        if self.t >= 1.0 {
            return self.finish();
        }

        let eased = smoothstep(self.t);
        TransitionFrame {
            scale: self.start_scale + (self.target_scale - self.start_scale) * eased,
            camera_position: self.start_position.lerp(self.target_position, eased),
            iterations: (eased >= 0.5).then_some(self.target_iterations),
            finished: false,
        }
    }

    /// Jumps straight to the terminal frame.
    pub fn finish(&mut self) -> TransitionFrame {
        self.t = 1.0;
        TransitionFrame {
            scale: self.target_scale,
            camera_position: self.target_position,
            iterations: Some(self.target_iterations),
            finished: true,
        }
    }
}
