#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandPosition {
    Below,
    Inside,
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleDirection {
    Down,
    Up,
}

impl ScaleDirection {
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Down => -1.0,
            Self::Up => 1.0,
        }
    }
}

#[must_use]
pub fn classify(fps: f64, lower: f64, upper: f64) -> BandPosition {
    if fps < lower {
        BandPosition::Below
    } else if fps > upper {
        BandPosition::Above
    } else {
        BandPosition::Inside
    }
}

/// Consecutive out-of-band evaluations on either side of the dead band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SustainCounters {
    low: u32,
    high: u32,
}

impl SustainCounters {
    pub fn observe(&mut self, position: BandPosition) {
        match position {
            BandPosition::Below => {
                self.low += 1;
                self.high = 0;
            }
            BandPosition::Above => {
                self.high += 1;
                self.low = 0;
            }
            BandPosition::Inside => {
                self.low = 0;
                self.high = 0;
            }
        }
    }

    /// Direction whose counter has reached `required`, low side first.
    #[must_use]
    pub fn triggered(&self, required: u32) -> Option<ScaleDirection> {
        if self.low >= required {
            Some(ScaleDirection::Down)
        } else if self.high >= required {
            Some(ScaleDirection::Up)
        } else {
            None
        }
    }

    pub fn clear(&mut self, direction: ScaleDirection) {
        match direction {
            ScaleDirection::Down => self.low = 0,
            ScaleDirection::Up => self.high = 0,
        }
    }

    #[must_use]
    pub fn low(&self) -> u32 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> u32 {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::{BandPosition, ScaleDirection, SustainCounters, classify};

    #[test]
    fn classify_uses_open_band_edges() {
        assert_eq!(classify(54.9, 55.0, 61.0), BandPosition::Below);
        assert_eq!(classify(55.0, 55.0, 61.0), BandPosition::Inside);
        assert_eq!(classify(61.0, 55.0, 61.0), BandPosition::Inside);
        assert_eq!(classify(61.1, 55.0, 61.0), BandPosition::Above);
    }

    #[test]
    fn opposite_side_resets_the_other_counter() {
        let mut counters = SustainCounters::default();

        counters.observe(BandPosition::Below);
        counters.observe(BandPosition::Below);
        counters.observe(BandPosition::Above);

        assert_eq!(counters.low(), 0);
        assert_eq!(counters.high(), 1);
    }

    #[test]
    fn dead_band_resets_both_counters() {
        let mut counters = SustainCounters::default();

        for _ in 0..29 {
            counters.observe(BandPosition::Below);
        }
        counters.observe(BandPosition::Inside);

        assert_eq!(counters.low(), 0);
        assert_eq!(counters.high(), 0);
        assert_eq!(counters.triggered(30), None);
    }

    #[test]
    fn trigger_fires_at_required_count() {
        let mut counters = SustainCounters::default();

        for _ in 0..29 {
            counters.observe(BandPosition::Above);
        }
        assert_eq!(counters.triggered(30), None);

        counters.observe(BandPosition::Above);
        assert_eq!(counters.triggered(30), Some(ScaleDirection::Up));

        counters.clear(ScaleDirection::Up);
        assert_eq!(counters.high(), 0);
    }

    #[test]
    fn direction_signs() {
        assert_eq!(ScaleDirection::Down.sign(), -1.0);
        assert_eq!(ScaleDirection::Up.sign(), 1.0);
    }
}
