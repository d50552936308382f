const WINDOW_SECS: f64 = 1.0;

/// Frame-rate estimates fed by per-frame deltas.
///
/// `ema` drives resolution decisions. `windowed` is a plain frames-per-second
/// count over the last completed one-second window, kept for display only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsMeter {
    alpha: f64,
    ema: f64,
    window_elapsed: f64,
    window_frames: u32,
    windowed: f64,
}

impl FpsMeter {
    #[must_use]
    pub fn new(alpha: f64, initial_estimate: f64) -> Self {
        Self {
            alpha,
            ema: initial_estimate.max(0.0),
            window_elapsed: 0.0,
            window_frames: 0,
            windowed: 0.0,
        }
    }

    /// Folds one frame into both estimates. Callers guarantee `delta > 0`.
    pub fn record(&mut self, delta: f64) -> f64 {
        let instant = 1.0 / delta;
        self.ema = self.alpha * instant + (1.0 - self.alpha) * self.ema;

        self.window_elapsed += delta;
        self.window_frames += 1;
        if self.window_elapsed >= WINDOW_SECS {
            self.windowed = f64::from(self.window_frames) / self.window_elapsed;
            self.window_elapsed = 0.0;
            self.window_frames = 0;
        }

        instant
    }

    #[must_use]
    pub fn ema(&self) -> f64 {
        self.ema
    }

    #[must_use]
    pub fn windowed(&self) -> f64 {
        self.windowed
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }
}
