//! A coefficient plot described as plain data, before it touches a surface.

use log::debug;

use crate::plotting::{Axes, FillStyle};

use super::symbols::Symbol;

/// Thickness of the invisible bars that carry the error bars.
const BAR_HEIGHT: f64 = 0.8;

/// Dots (and optional error bars) drawn with one marker/color.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkSeries {
    /// Legend label; unlabelled series stay out of the legend
    pub label: Option<String>,
    /// Marker and color; `None` takes the surface defaults
    pub symbol: Option<Symbol>,
    /// Dataset row behind each mark, in drawing order
    pub rows: Vec<usize>,
    /// Coefficient values
    pub x: Vec<f64>,
    /// Categorical positions
    pub y: Vec<f64>,
    /// Error magnitude per mark, drawn as `x ± err`
    pub err: Option<Vec<f64>>,
}

impl MarkSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(low, high)` error-bar extent per mark.
    pub fn error_extents(&self) -> Option<Vec<(f64, f64)>> {
        self.err.as_ref().map(|err| {
            self.x
                .iter()
                .zip(err)
                .map(|(&x, &e)| (x - e, x + e))
                .collect()
        })
    }
}

/// Everything needed to draw one coefficient plot.
#[derive(Debug, Clone, PartialEq)]
pub struct DotplotLayout {
    /// Canvas (width, height) in inches
    pub size: (f64, f64),
    pub series: Vec<MarkSeries>,
    /// Categorical ticks on the y axis
    pub y_ticks: Vec<(f64, String)>,
    pub zero_line: bool,
    /// Show a legend listing series last-drawn first
    pub legend: bool,
}

impl DotplotLayout {
    /// Total number of dots across all series.
    pub fn mark_count(&self) -> usize {
        self.series.iter().map(MarkSeries::len).sum()
    }

    /// Issue the drawing commands onto `ax`.
    pub fn draw(&self, ax: &mut Axes) {
        for series in &self.series {
            if let Some(ref err) = series.err {
                ax.barh(&series.y, &series.x)
                    .fill(FillStyle::none())
                    .height(BAR_HEIGHT)
                    .xerr(err)
                    .build();
            }

            let mut scatter = ax.scatter(&series.x, &series.y);
            if let Some(ref symbol) = series.symbol {
                scatter = scatter.marker(symbol.marker).color(symbol.color.clone());
            }
            if let Some(ref label) = series.label {
                scatter = scatter.label(label.clone());
            }
            scatter.build();
        }

        let (positions, labels): (Vec<f64>, Vec<String>) = self.y_ticks.iter().cloned().unzip();
        ax.set_yticks(positions, labels);

        if self.zero_line {
            ax.zero_line();
        }
        if self.legend {
            ax.legend().reverse_legend();
        }

        debug!(
            "Drew {} marks in {} series, {} y ticks",
            self.mark_count(),
            self.series.len(),
            self.y_ticks.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::{Color, Marker, Plot};

    fn layout(err: Option<Vec<f64>>) -> DotplotLayout {
        DotplotLayout {
            size: (10.0, 6.0),
            series: vec![MarkSeries {
                label: Some("m1".into()),
                symbol: Some(Symbol {
                    marker: Marker::Square,
                    color: Color::from("b"),
                }),
                rows: vec![0, 1],
                x: vec![0.5, -0.2],
                y: vec![0.0, 1.0],
                err,
            }],
            y_ticks: vec![(0.0, "a".into()), (1.0, "b".into())],
            zero_line: true,
            legend: true,
        }
    }

    #[test]
    fn test_draw_with_errors_adds_bar_then_scatter() {
        let mut ax = Axes::new();
        layout(Some(vec![0.1, 0.3])).draw(&mut ax);
        assert_eq!(ax.plots().len(), 2);
        assert!(ax.plots()[0].label().is_none());
        assert_eq!(ax.plots()[1].label(), Some("m1"));
        assert_eq!(ax.vlines().len(), 1);
        assert!(ax.legend.as_ref().unwrap().reversed);
        assert_eq!(
            ax.y_axis.tick_labels.as_deref(),
            Some(&["a".to_string(), "b".to_string()][..])
        );
    }

    #[test]
    fn test_draw_without_errors() {
        let mut ax = Axes::new();
        layout(None).draw(&mut ax);
        assert_eq!(ax.plots().len(), 1);
    }

    #[test]
    fn test_error_extents() {
        let l = layout(Some(vec![0.1, 0.3]));
        let extents = l.series[0].error_extents().unwrap();
        assert!((extents[0].0 - 0.4).abs() < 1e-12 && (extents[0].1 - 0.6).abs() < 1e-12);
        assert!((extents[1].0 + 0.5).abs() < 1e-12 && (extents[1].1 - 0.1).abs() < 1e-12);
        assert_eq!(l.mark_count(), 2);
    }
}
