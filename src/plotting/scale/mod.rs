//! Axis scaling and tick generation.

mod linear;

pub use linear::LinearScale;

/// Trait for axis scale transformations.
pub trait Scale: std::fmt::Debug {
    /// Transform a data value to normalized coordinates (0.0 - 1.0).
    fn transform(&self, value: f64) -> f64;

    /// Set the data range for this scale.
    fn set_range(&mut self, min: f64, max: f64);

    /// Get the current data range.
    fn range(&self) -> (f64, f64);

    /// Generate nice tick values for this scale.
    fn ticks(&self, num_ticks: usize) -> Vec<f64>;
}

/// Round `range` to a 1, 2, 5 or 10 multiple of a power of ten.
pub fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10_f64.powf(exponent);

    let steps: [(f64, f64); 3] = if round {
        [(1.5, 1.0), (3.0, 2.0), (7.0, 5.0)]
    } else {
        [(1.0, 1.0), (2.0, 2.0), (5.0, 5.0)]
    };
    let nice_fraction = steps
        .iter()
        .find(|(limit, _)| {
            if round {
                fraction < *limit
            } else {
                fraction <= *limit
            }
        })
        .map(|(_, nice)| *nice)
        .unwrap_or(10.0);

    nice_fraction * 10_f64.powf(exponent)
}

/// Generate nice tick positions inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    if num_ticks < 2 || max <= min {
        return vec![(min + max) / 2.0];
    }

    let range = nice_number(max - min, false);
    let spacing = nice_number(range / (num_ticks - 1) as f64, true);
    let first = (min / spacing).ceil() as i64;
    let last = (max / spacing).floor() as i64;

    (first..=last)
        .map(|i| {
            let tick = i as f64 * spacing;
            // avoid printing -0
            if tick == 0.0 { 0.0 } else { tick }
        })
        .collect()
}
