//! Iteration-count management while zooming.
//!
//! The baseline is learned lazily from the store the first time zoom runs
//! after a reset. Detail is revealed one iteration at a time as scale grows,
//! and pulled back toward the baseline on every wrap so the next zoom cycle
//! starts from a bounded frame cost.

const ITERATION_FLOOR: u32 = 4;
const ITERATION_CEILING: u32 = 20;
const MAX_ITERATION_HEADROOM: u32 = 8;
const REVEAL_HEADROOM: u32 = 4;
const WRAP_HEADROOM: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailLevels {
    base: Option<u32>,
    min: u32,
    max: u32,
    last_scale_mark: f64,
}

impl Default for DetailLevels {
    fn default() -> Self {
        Self {
            base: None,
            min: 0,
            max: 0,
            last_scale_mark: 1.0,
        }
    }
}

impl DetailLevels {
    /// Caches `current` as the baseline unless one is already cached.
    pub fn ensure_baseline(&mut self, current: u32) -> u32 {
        if let Some(base) = self.base {
            return base;
        }

        self.base = Some(current);
        self.min = ITERATION_FLOOR.max(current);
        self.max = ITERATION_CEILING.min(current.saturating_add(MAX_ITERATION_HEADROOM));
        current
    }

    #[must_use]
    pub fn base(&self) -> Option<u32> {
        self.base
    }

    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub fn last_scale_mark(&self) -> f64 {
        self.last_scale_mark
    }

    pub fn set_scale_mark(&mut self, scale: f64) {
        self.last_scale_mark = scale;
    }

    /// Highest count detail reveal may reach. Kept below `max` to protect frame time.
    #[must_use]
    pub fn reveal_cap(&self) -> u32 {
        let base = self.base.unwrap_or(0);
        self.max.min(base.saturating_add(REVEAL_HEADROOM))
    }

    /// Returns the new iteration count if growing to `new_scale` reveals one
    /// more level of detail, moving the scale mark along with it.
    pub fn try_reveal(&mut self, new_scale: f64, current: u32, threshold: f64) -> Option<u32> {
        if self.base.is_none() || new_scale / self.last_scale_mark < threshold {
            return None;
        }
        if current >= self.reveal_cap() {
            return None;
        }

        self.last_scale_mark = new_scale;
        Some(current + 1)
    }

    /// Iteration count a wrap eases toward.
    #[must_use]
    pub fn wrap_target(&self, current: u32) -> u32 {
        let base = self.base.unwrap_or(current);
        let upper = base.saturating_add(WRAP_HEADROOM).max(self.min);
        current.clamp(self.min, upper)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
