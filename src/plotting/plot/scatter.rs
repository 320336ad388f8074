//! Scatter plot implementation.

use crate::plotting::element::Bounds;
use crate::plotting::plot::Plot;
use crate::plotting::style::{Color, Marker, MarkerStyle};

/// A scatter plot showing individual data points.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub marker_style: MarkerStyle,
    /// Label for legend
    pub label: Option<String>,
}

impl ScatterPlot {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        ScatterPlot {
            x,
            y,
            marker_style: MarkerStyle::default(),
            label: None,
        }
    }

    /// Set fill and edge color.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.marker_style = self.marker_style.color(color);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker_style.marker = marker;
        self
    }

    /// Marker diameter in pixels.
    pub fn size(mut self, size: f64) -> Self {
        self.marker_style.size = size;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| (x, y))
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

impl Plot for ScatterPlot {
    fn bounds(&self) -> Option<Bounds> {
        let mut bounds = Bounds::empty();
        for (x, y) in self.points() {
            bounds.include_point(x, y);
        }
        bounds.is_finite().then_some(bounds)
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn marker_style(&self) -> Option<MarkerStyle> {
        Some(self.marker_style.clone())
    }

    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String {
        let mut svg = String::from("<g class=\"scatter\">\n");
        for (x, y) in self.points() {
            let (px, py) = data_bounds.to_pixel(pixel_bounds, x, y);
            svg.push_str(&self.marker_style.render_at(px, py));
        }
        svg.push_str("</g>\n");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_skip_non_finite() {
        let plot = ScatterPlot::new(vec![1.0, f64::NAN, -2.0], vec![0.0, 5.0, 3.0]);
        assert_eq!(plot.bounds(), Some(Bounds::new(-2.0, 1.0, 0.0, 3.0)));
        assert_eq!(ScatterPlot::new(vec![], vec![]).bounds(), None);
    }

    #[test]
    fn test_one_marker_per_point() {
        let plot = ScatterPlot::new(vec![0.0, 1.0], vec![0.0, 1.0]).marker(Marker::Square);
        let svg = plot.render_svg(&Bounds::default(), &Bounds::new(0.0, 100.0, 0.0, 100.0));
        assert_eq!(svg.matches("<path").count(), 2);
    }

    #[test]
    fn test_labelled_plot_has_legend_entry() {
        let plot = ScatterPlot::new(vec![0.0], vec![0.0]).label("model 1");
        let entry = plot.legend_entry().unwrap();
        assert_eq!(entry.label, "model 1");
        assert!(entry.marker_style.is_some());
        assert!(ScatterPlot::new(vec![0.0], vec![0.0]).legend_entry().is_none());
    }
}
