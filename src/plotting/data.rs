//! Conversion of numeric sequences into plot coordinates.

/// Trait for types that can be converted into plot data.
pub trait IntoPlotData {
    /// Convert into a vector of f64 values.
    fn into_plot_data(self) -> Vec<f64>;
}

impl IntoPlotData for Vec<f64> {
    fn into_plot_data(self) -> Vec<f64> {
        self
    }
}

impl IntoPlotData for &Vec<f64> {
    fn into_plot_data(self) -> Vec<f64> {
        self.clone()
    }
}

impl IntoPlotData for &[f64] {
    fn into_plot_data(self) -> Vec<f64> {
        self.to_vec()
    }
}

impl IntoPlotData for &[usize] {
    fn into_plot_data(self) -> Vec<f64> {
        self.iter().map(|x| *x as f64).collect()
    }
}

impl<const N: usize> IntoPlotData for [f64; N] {
    fn into_plot_data(self) -> Vec<f64> {
        self.to_vec()
    }
}
