//! Linear scale transformation.

use super::{Scale, nice_ticks};

/// A linear scale for axis transformation.
#[derive(Debug, Clone)]
pub struct LinearScale {
    min: f64,
    max: f64,
}

impl LinearScale {
    /// Create a linear scale with a placeholder range, set on render.
    pub fn auto() -> Self {
        LinearScale { min: 0.0, max: 1.0 }
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        LinearScale::auto()
    }
}

impl Scale for LinearScale {
    fn transform(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.5;
        }
        (value - self.min) / range
    }

    fn set_range(&mut self, min: f64, max: f64) {
        if min >= max {
            let padding = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
            self.min = min - padding;
            self.max = max + padding;
        } else {
            self.min = min;
            self.max = max;
        }
    }

    fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    fn ticks(&self, num_ticks: usize) -> Vec<f64> {
        nice_ticks(self.min, self.max, num_ticks)
    }
}
