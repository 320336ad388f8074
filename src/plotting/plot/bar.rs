//! Horizontal bars with optional horizontal error bars.
//!
//! A bar spans `0..width` along x at each y position. With an invisible fill
//! the bar only serves as the anchor for its error bar, which is how
//! coefficient plots draw confidence intervals around point estimates.

use crate::plotting::element::Bounds;
use crate::plotting::plot::Plot;
use crate::plotting::style::{Color, FillStyle, LineStyle};

/// A set of horizontal bars.
#[derive(Debug, Clone)]
pub struct BarhPlot {
    /// Bar centers on the y axis
    pub y: Vec<f64>,
    /// Bar lengths along x, measured from 0
    pub widths: Vec<f64>,
    /// Bar thickness in y data units
    pub height: f64,
    pub fill: FillStyle,
    /// Symmetric horizontal error per bar, centered on the bar end
    pub xerr: Option<Vec<f64>>,
    pub error_style: LineStyle,
    /// Half-length of the error bar end caps in pixels
    pub cap_size: f64,
}

impl BarhPlot {
    pub fn new(y: Vec<f64>, widths: Vec<f64>) -> Self {
        BarhPlot {
            y,
            widths,
            height: 0.8,
            fill: FillStyle::default(),
            xerr: None,
            error_style: LineStyle::new().color(Color::BLACK).width(1.0),
            cap_size: 3.0,
        }
    }

    pub fn fill(mut self, fill: FillStyle) -> Self {
        self.fill = fill;
        self
    }

    pub fn xerr(mut self, xerr: Vec<f64>) -> Self {
        self.xerr = Some(xerr);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// `(y, width, err)` triples with non-finite entries dropped.
    /// Bars without an error value get an error of 0.
    pub fn bars(&self) -> Vec<(f64, f64, f64)> {
        self.y
            .iter()
            .zip(self.widths.iter())
            .enumerate()
            .map(|(i, (&y, &w))| {
                let err = self
                    .xerr
                    .as_ref()
                    .and_then(|e| e.get(i).copied())
                    .unwrap_or(0.0);
                (y, w, err)
            })
            .filter(|(y, w, e)| y.is_finite() && w.is_finite() && e.is_finite())
            .collect()
    }

    /// Horizontal extent `(low, high)` of each error bar.
    pub fn error_extents(&self) -> Vec<(f64, f64)> {
        if self.xerr.is_none() {
            return Vec::new();
        }
        self.bars()
            .into_iter()
            .map(|(_, w, e)| (w - e, w + e))
            .collect()
    }
}

impl Plot for BarhPlot {
    fn bounds(&self) -> Option<Bounds> {
        let half = self.height / 2.0;
        let mut bounds = Bounds::empty();
        for (y, w, e) in self.bars() {
            bounds.include_point(0.0, y - half);
            bounds.include_point(w - e, y + half);
            bounds.include_x(w + e);
        }
        bounds.is_finite().then_some(bounds)
    }

    /// Error-bar carriers never appear in the legend.
    fn label(&self) -> Option<&str> {
        None
    }

    fn render_svg(&self, data_bounds: &Bounds, pixel_bounds: &Bounds) -> String {
        let mut svg = String::from("<g class=\"barh\">\n");
        let half = self.height / 2.0;
        let draw_fill = !self.fill.is_invisible();

        for (y, w, e) in self.bars() {
            if draw_fill {
                let (x0, y0) = data_bounds.to_pixel(pixel_bounds, w.min(0.0), y + half);
                let (x1, y1) = data_bounds.to_pixel(pixel_bounds, w.max(0.0), y - half);
                svg.push_str(&format!(
                    "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>\n",
                    x0,
                    y0,
                    x1 - x0,
                    y1 - y0,
                    self.fill.to_svg_style()
                ));
            }

            if self.xerr.is_some() {
                let (lo, py) = data_bounds.to_pixel(pixel_bounds, w - e, y);
                let (hi, _) = data_bounds.to_pixel(pixel_bounds, w + e, y);
                let style = self.error_style.to_svg_style();
                svg.push_str(&format!(
                    "<path class=\"errorbar\" d=\"M{:.2},{:.2} H{:.2} M{:.2},{:.2} V{:.2} M{:.2},{:.2} V{:.2}\" {}/>\n",
                    lo,
                    py,
                    hi,
                    lo,
                    py - self.cap_size,
                    py + self.cap_size,
                    hi,
                    py - self.cap_size,
                    py + self.cap_size,
                    style
                ));
            }
        }

        svg.push_str("</g>\n");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_extents_are_symmetric() {
        let plot = BarhPlot::new(vec![0.0, 1.0], vec![0.5, -0.3]).xerr(vec![0.1, 0.2]);
        let extents = plot.error_extents();
        assert_eq!(extents.len(), 2);
        assert!((extents[0].0 - 0.4).abs() < 1e-12);
        assert!((extents[0].1 - 0.6).abs() < 1e-12);
        assert!((extents[1].0 + 0.5).abs() < 1e-12);
        assert!((extents[1].1 + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_include_zero_and_errors() {
        let plot = BarhPlot::new(vec![2.0], vec![1.0]).xerr(vec![0.5]);
        let b = plot.bounds().unwrap();
        assert_eq!(b.x_min, 0.0);
        assert_eq!(b.x_max, 1.5);
        assert!((b.y_min - 1.6).abs() < 1e-12);
        assert!((b.y_max - 2.4).abs() < 1e-12);
    }

    #[test]
    fn test_invisible_fill_draws_only_error_bars() {
        let plot = BarhPlot::new(vec![0.0, 1.0], vec![0.5, 0.7])
            .fill(FillStyle::none())
            .xerr(vec![0.1, 0.1]);
        let svg = plot.render_svg(
            &Bounds::new(0.0, 1.0, -1.0, 2.0),
            &Bounds::new(0.0, 100.0, 0.0, 100.0),
        );
        assert!(!svg.contains("<rect"));
        assert_eq!(svg.matches("class=\"errorbar\"").count(), 2);
    }

    #[test]
    fn test_no_xerr_no_error_bars() {
        let plot = BarhPlot::new(vec![0.0], vec![0.5]);
        assert!(plot.error_extents().is_empty());
        let svg = plot.render_svg(&Bounds::default(), &Bounds::new(0.0, 10.0, 0.0, 10.0));
        assert!(svg.contains("<rect"));
        assert!(!svg.contains("errorbar"));
    }
}
